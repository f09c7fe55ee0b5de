//! Labeled vertex and edge value types.
//!
//! Immutable carriers compared, hashed and rendered by content. Labels must
//! be non-empty and weights valid; constructors fail with
//! `CoreError::InvalidArg` otherwise and deserialization applies the same
//! checks.

use std::fmt;
use std::hash::{Hash, Hasher};

use ar_core::{CoreError, CoreResult, Weight, WeightMapper};

fn check_label(label: String) -> CoreResult<String> {
    if label.is_empty() {
        Err(CoreError::InvalidArg { what: "label" })
    } else {
        Ok(label)
    }
}

/// A vertex identified by its label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct LabeledVertex {
    label: String,
}

impl LabeledVertex {
    pub fn new(label: impl Into<String>) -> CoreResult<Self> {
        Ok(Self {
            label: check_label(label.into())?,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl TryFrom<String> for LabeledVertex {
    type Error = CoreError;

    fn try_from(label: String) -> CoreResult<Self> {
        Self::new(label)
    }
}

impl From<LabeledVertex> for String {
    fn from(v: LabeledVertex) -> Self {
        v.label
    }
}

impl fmt::Display for LabeledVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {} }}", self.label)
    }
}

/// An edge identified by its label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct LabeledEdge {
    label: String,
}

impl LabeledEdge {
    pub fn new(label: impl Into<String>) -> CoreResult<Self> {
        Ok(Self {
            label: check_label(label.into())?,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl TryFrom<String> for LabeledEdge {
    type Error = CoreError;

    fn try_from(label: String) -> CoreResult<Self> {
        Self::new(label)
    }
}

impl From<LabeledEdge> for String {
    fn from(e: LabeledEdge) -> Self {
        e.label
    }
}

impl fmt::Display for LabeledEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}()", self.label)
    }
}

/// A labeled edge carrying a weight.
///
/// Equality compares label and weight. Hashing uses the label only, which
/// stays consistent with equality and lets floating point weights take
/// part; invalid weights (NaN) are rejected at construction so equality
/// is reflexive.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "WeightedEdgeDef<W>",
        into = "WeightedEdgeDef<W>",
        bound(
            serialize = "W: Weight + serde::Serialize",
            deserialize = "W: Weight + serde::Deserialize<'de>"
        )
    )
)]
pub struct LabeledWeightedEdge<W> {
    label: String,
    weight: W,
}

impl<W: Weight> LabeledWeightedEdge<W> {
    pub fn new(label: impl Into<String>, weight: W) -> CoreResult<Self> {
        let label = check_label(label.into())?;
        if !weight.is_valid() {
            return Err(CoreError::InvalidArg { what: "weight" });
        }
        Ok(Self { label, weight })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn weight(&self) -> &W {
        &self.weight
    }
}

impl<W: PartialEq> PartialEq for LabeledWeightedEdge<W> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.weight == other.weight
    }
}

impl<W: PartialEq> Eq for LabeledWeightedEdge<W> {}

impl<W> Hash for LabeledWeightedEdge<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

impl<W: fmt::Debug> fmt::Display for LabeledWeightedEdge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}( {:?} )", self.label, self.weight)
    }
}

/// Wire shape of [`LabeledWeightedEdge`]; conversion back re-validates.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct WeightedEdgeDef<W> {
    label: String,
    weight: W,
}

#[cfg(feature = "serde")]
impl<W: Weight> TryFrom<WeightedEdgeDef<W>> for LabeledWeightedEdge<W> {
    type Error = CoreError;

    fn try_from(def: WeightedEdgeDef<W>) -> CoreResult<Self> {
        Self::new(def.label, def.weight)
    }
}

#[cfg(feature = "serde")]
impl<W> From<LabeledWeightedEdge<W>> for WeightedEdgeDef<W> {
    fn from(e: LabeledWeightedEdge<W>) -> Self {
        Self {
            label: e.label,
            weight: e.weight,
        }
    }
}

/// Extracts the weight stored on a [`LabeledWeightedEdge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeWeight;

impl<W: Clone> WeightMapper<LabeledWeightedEdge<W>, W> for EdgeWeight {
    fn map(&self, edge: &LabeledWeightedEdge<W>) -> W {
        edge.weight.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_label_rejected() {
        assert_eq!(
            LabeledEdge::new("").unwrap_err(),
            CoreError::InvalidArg { what: "label" }
        );
        assert!(LabeledVertex::new(String::new()).is_err());
        assert!(LabeledWeightedEdge::new("", 1.0).is_err());
    }

    #[test]
    fn invalid_weight_rejected() {
        assert_eq!(
            LabeledWeightedEdge::new("a -> b", f64::NAN).unwrap_err(),
            CoreError::InvalidArg { what: "weight" }
        );
        assert!(LabeledWeightedEdge::new("a -> b", f64::INFINITY).is_err());
    }

    #[test]
    fn equality_composes_label_and_weight() {
        let e1 = LabeledWeightedEdge::new("a -> b", 1.5).unwrap();
        let e2 = LabeledWeightedEdge::new("a -> b", 1.5).unwrap();
        let e3 = LabeledWeightedEdge::new("a -> b", 2.0).unwrap();
        assert_eq!(e1, e2);
        assert_ne!(e1, e3);
        assert_eq!(LabeledEdge::new("x").unwrap(), LabeledEdge::new("x").unwrap());
    }

    #[test]
    fn rendering() {
        assert_eq!(LabeledEdge::new("a -> c").unwrap().to_string(), "a -> c()");
        assert_eq!(
            LabeledWeightedEdge::new("a -> c", 1.0).unwrap().to_string(),
            "a -> c( 1.0 )"
        );
        assert_eq!(LabeledVertex::new("a").unwrap().to_string(), "{ a }");
    }

    #[test]
    fn edge_weight_mapper_reads_weight() {
        let e = LabeledWeightedEdge::new("heavy", 42_i64).unwrap();
        assert_eq!(EdgeWeight.map(&e), 42);
    }
}
