//! Graph-specific error types.

use ar_core::CoreError;
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph mutation and lookup errors.
///
/// Vertices and edges are rendered with their `Debug` form so the error
/// stays independent of the graph's element types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The vertex is already registered.
    #[error("Vertex {vertex} is already present")]
    VertexAlreadyPresent { vertex: String },

    /// The vertex is not registered.
    #[error("Vertex {vertex} not found")]
    VertexNotFound { vertex: String },

    /// Vertex removal refused while edges still touch it.
    #[error("Vertex {vertex} still has {edges} incident edge(s)")]
    VertexHasEdges { vertex: String, edges: usize },

    /// The edge is already attached to a vertex pair.
    #[error("Edge {edge} is already attached to ({head}, {tail})")]
    EdgeAlreadyPresent {
        edge: String,
        head: String,
        tail: String,
    },

    /// The edge is not attached.
    #[error("Edge {edge} not found")]
    EdgeNotFound { edge: String },

    /// No path connects the two vertices.
    #[error("No path from {from} to {to}")]
    PathNotFound { from: String, to: String },

    /// Serialized graph state does not describe a consistent graph.
    #[error("Inconsistent snapshot: {what}")]
    InconsistentSnapshot { what: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl GraphError {
    pub(crate) fn vertex_not_found(vertex: &impl std::fmt::Debug) -> Self {
        GraphError::VertexNotFound {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn edge_not_found(edge: &impl std::fmt::Debug) -> Self {
        GraphError::EdgeNotFound {
            edge: format!("{edge:?}"),
        }
    }

    /// Builds the failure raised by path-finding collaborators.
    pub fn path_not_found(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        GraphError::PathNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}
