//! Weight algebras: the aggregation discipline used by weighted structures.

use crate::numeric::Real;

/// A monoid over weight values of type `W`.
///
/// # Laws
///
/// For all `a, b, c`:
///
/// * **Associativity**: `combine(&combine(&a, &b), &c) == combine(&a, &combine(&b, &c))`
/// * **Identity**:      `combine(&identity(), &a) == combine(&a, &identity()) == a`
///
/// Implementors are responsible for ensuring these laws hold; structures
/// built on a `Monoid` trust them and never check.
pub trait Monoid<W> {
    /// Returns the neutral element.
    fn identity(&self) -> W;

    /// Combines two weights.
    fn combine(&self, a: &W, b: &W) -> W;
}

/// A monoid in which every element has an inverse.
///
/// # Laws
///
/// * `combine(&a, &inverse(&a)) == identity()`
///
/// Only structures that un-accumulate weights on removal need this.
pub trait Group<W>: Monoid<W> {
    /// Returns the element that cancels `a`.
    fn inverse(&self, a: &W) -> W;
}

/// Folds every weight of `weights` into the algebra's identity, left to right.
pub fn fold_all<'a, W, A, I>(algebra: &A, weights: I) -> W
where
    W: 'a,
    A: Monoid<W> + ?Sized,
    I: IntoIterator<Item = &'a W>,
{
    weights
        .into_iter()
        .fold(algebra.identity(), |acc, w| algebra.combine(&acc, w))
}

/// Addition over [`Real`].
///
/// Floating point addition is associative only up to rounding, so
/// aggregates built in different orders may differ by a few ulps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealAddition;

impl Monoid<Real> for RealAddition {
    fn identity(&self) -> Real {
        0.0
    }

    fn combine(&self, a: &Real, b: &Real) -> Real {
        a + b
    }
}

impl Group<Real> for RealAddition {
    fn inverse(&self, a: &Real) -> Real {
        -a
    }
}

/// Wrapping addition over `i64`.
///
/// Wrapping keeps the group laws exact across overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegerAddition;

impl Monoid<i64> for IntegerAddition {
    fn identity(&self) -> i64 {
        0
    }

    fn combine(&self, a: &i64, b: &i64) -> i64 {
        a.wrapping_add(*b)
    }
}

impl Group<i64> for IntegerAddition {
    fn inverse(&self, a: &i64) -> i64 {
        a.wrapping_neg()
    }
}
