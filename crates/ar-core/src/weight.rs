//! Validity contract for weight values.

use core::fmt;

/// A value that can be carried as an edge weight.
///
/// Weights are plain data: cloned into aggregates, compared for equality
/// and rendered for diagnostics. `is_valid` marks values that stand for an
/// absent or undefined weight (NaN, infinities) so constructors can reject
/// them up front.
pub trait Weight: Clone + PartialEq + fmt::Debug {
    fn is_valid(&self) -> bool {
        true
    }
}

impl Weight for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Weight for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Weight for i32 {}
impl Weight for i64 {}
impl Weight for u32 {}
impl Weight for u64 {}
