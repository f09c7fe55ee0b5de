//! Consistency checks for graph state rebuilt from raw parts.

use std::collections::HashMap;

use crate::error::{GraphError, GraphResult};
use crate::store::{Element, VertexPair};

fn inconsistent(what: String) -> GraphError {
    GraphError::InconsistentSnapshot { what }
}

/// Validate the raw parts of a store before they are trusted.
///
/// Checks that:
/// - every edge's endpoints are registered vertices
/// - every edge listed at a vertex is recorded with that vertex as an endpoint
/// - every recorded edge is listed at its head
pub(crate) fn validate_parts<V: Element, E: Element>(
    adjacency: &HashMap<V, Vec<E>>,
    endpoints: &HashMap<E, VertexPair<V>>,
) -> GraphResult<()> {
    for (edge, pair) in endpoints {
        for v in [&pair.head, &pair.tail] {
            if !adjacency.contains_key(v) {
                return Err(inconsistent(format!(
                    "edge {edge:?} refers to unknown vertex {v:?}"
                )));
            }
        }
    }

    for (vertex, edges) in adjacency {
        for edge in edges {
            let pair = endpoints.get(edge).ok_or_else(|| {
                inconsistent(format!("edge {edge:?} listed at {vertex:?} is not recorded"))
            })?;
            if !pair.contains(vertex) {
                return Err(inconsistent(format!(
                    "edge {edge:?} listed at {vertex:?} but attached to ({:?}, {:?})",
                    pair.head, pair.tail
                )));
            }
        }
    }

    for (edge, pair) in endpoints {
        let listed = adjacency
            .get(&pair.head)
            .is_some_and(|edges| edges.contains(edge));
        if !listed {
            return Err(inconsistent(format!(
                "edge {edge:?} is not listed at its head {:?}",
                pair.head
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts() -> (HashMap<&'static str, Vec<u8>>, HashMap<u8, VertexPair<&'static str>>) {
        let adjacency = HashMap::from([("a", vec![1]), ("b", vec![1])]);
        let endpoints = HashMap::from([(1, VertexPair::new("a", "b"))]);
        (adjacency, endpoints)
    }

    #[test]
    fn consistent_parts_pass() {
        let (adjacency, endpoints) = parts();
        assert!(validate_parts(&adjacency, &endpoints).is_ok());
    }

    #[test]
    fn unknown_endpoint_rejected() {
        let (mut adjacency, endpoints) = parts();
        adjacency.remove("b");
        let err = validate_parts(&adjacency, &endpoints).unwrap_err();
        assert!(matches!(err, GraphError::InconsistentSnapshot { .. }));
    }

    #[test]
    fn unrecorded_edge_rejected() {
        let (mut adjacency, endpoints) = parts();
        adjacency.insert("c", vec![9]);
        assert!(validate_parts(&adjacency, &endpoints).is_err());
    }

    #[test]
    fn edge_listed_at_stranger_rejected() {
        let (mut adjacency, endpoints) = parts();
        adjacency.insert("c", vec![1]);
        assert!(validate_parts(&adjacency, &endpoints).is_err());
    }

    #[test]
    fn edge_missing_from_head_rejected() {
        let (mut adjacency, endpoints) = parts();
        adjacency.insert("a", vec![]);
        assert!(validate_parts(&adjacency, &endpoints).is_err());
    }
}
