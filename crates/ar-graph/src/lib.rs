//! ar-graph: mutable graph layer for arbor.
//!
//! Provides:
//! - Base mutable graph with vertex/edge storage and adjacency bookkeeping
//! - Mutation hooks, composed at construction time, that specialize it
//! - Undirected graphs (edges listed at both endpoints, vertex degree)
//! - Spanning trees maintaining an aggregate edge weight incrementally
//! - Labeled vertex/edge value types
//! - Serde round-trip of the full graph state (`serde` feature)
//!
//! # Example
//!
//! ```
//! use ar_core::RealAddition;
//! use ar_graph::{EdgeWeight, LabeledVertex, LabeledWeightedEdge, SpanningTree};
//!
//! let mut tree: SpanningTree<LabeledVertex, LabeledWeightedEdge<f64>, f64, _, _> =
//!     SpanningTree::new(RealAddition, EdgeWeight);
//! let a = LabeledVertex::new("a").unwrap();
//! let b = LabeledVertex::new("b").unwrap();
//! tree.add_vertex(a.clone()).unwrap();
//! tree.add_vertex(b.clone()).unwrap();
//! tree.add_edge(&a, LabeledWeightedEdge::new("a <-> b", 2.5).unwrap(), &b).unwrap();
//!
//! assert_eq!(*tree.weight(), 2.5);
//! assert_eq!(tree.degree(&b).unwrap(), 1);
//! ```

pub mod error;
pub mod graph;
pub mod hooks;
pub mod labeled;
#[cfg(feature = "serde")]
pub mod snapshot;
pub mod spanning;
pub mod store;
pub mod undirected;
#[cfg(feature = "serde")]
pub(crate) mod validate;

// Re-exports for ergonomics
pub use error::{GraphError, GraphResult};
pub use graph::{DirectedGraph, MutableGraph};
pub use hooks::{Directed, MutationHooks, Symmetric};
pub use labeled::{EdgeWeight, LabeledEdge, LabeledVertex, LabeledWeightedEdge};
#[cfg(feature = "serde")]
pub use snapshot::{EdgeRecord, GraphSnapshot};
pub use spanning::{SpanningTree, SpanningTreeHooks, WeightAggregate};
pub use store::{AdjacencyStore, Element, VertexPair};
pub use undirected::{Undirected, UndirectedGraph};
