//! Serde support for [`MutableGraph`]: the full adjacency state plus the
//! hook chain's state, re-validated on the way back in.

use std::collections::HashMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GraphError, GraphResult};
use crate::graph::MutableGraph;
use crate::hooks::MutationHooks;
use crate::store::{AdjacencyStore, Element, VertexPair};
use crate::validate;

/// One attached edge and its ordered endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord<V, E> {
    pub head: V,
    pub edge: E,
    pub tail: V,
}

/// Owned, map-free picture of a graph.
///
/// Vertices and edges are arbitrary values, so the adjacency index is kept
/// as a list of `(vertex, edges)` entries rather than a map keyed by
/// vertex. Entry order carries no meaning; per-vertex edge order does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot<V, E, H> {
    pub vertices: Vec<V>,
    pub edges: Vec<EdgeRecord<V, E>>,
    pub adjacency: Vec<(V, Vec<E>)>,
    pub hooks: H,
}

impl<V: Element, E: Element, H: Clone> MutableGraph<V, E, H> {
    /// Capture the graph's full state.
    pub fn snapshot(&self) -> GraphSnapshot<V, E, H> {
        GraphSnapshot {
            vertices: self.store.vertices().cloned().collect(),
            edges: self
                .store
                .edges()
                .map(|(edge, pair)| EdgeRecord {
                    head: pair.head.clone(),
                    edge: edge.clone(),
                    tail: pair.tail.clone(),
                })
                .collect(),
            adjacency: self
                .store
                .adjacency()
                .iter()
                .map(|(v, edges)| (v.clone(), edges.clone()))
                .collect(),
            hooks: self.hooks.clone(),
        }
    }
}

impl<V: Element, E: Element, H: MutationHooks<V, E>> MutableGraph<V, E, H> {
    /// Rebuild a graph from a snapshot, rejecting inconsistent state.
    ///
    /// The store is checked first, then the hook chain checks the layout it
    /// maintains and re-derives its own state.
    pub fn restore(snapshot: GraphSnapshot<V, E, H>) -> GraphResult<Self> {
        let GraphSnapshot {
            vertices,
            edges,
            adjacency,
            mut hooks,
        } = snapshot;

        let mut index: HashMap<V, Vec<E>> =
            vertices.into_iter().map(|v| (v, Vec::new())).collect();
        for (v, listed) in adjacency {
            match index.get_mut(&v) {
                Some(slot) => *slot = listed,
                None => {
                    return Err(GraphError::InconsistentSnapshot {
                        what: format!("adjacency entry for unknown vertex {v:?}"),
                    });
                }
            }
        }
        let endpoints: HashMap<E, VertexPair<V>> = edges
            .into_iter()
            .map(|r| (r.edge, VertexPair::new(r.head, r.tail)))
            .collect();

        validate::validate_parts(&index, &endpoints)?;

        let store = AdjacencyStore::from_parts(index, endpoints);
        hooks.decorate_restore(&store)?;
        Ok(Self { store, hooks })
    }
}

impl<V, E, H> Serialize for MutableGraph<V, E, H>
where
    V: Element + Serialize,
    E: Element + Serialize,
    H: Clone + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.snapshot().serialize(serializer)
    }
}

impl<'de, V, E, H> Deserialize<'de> for MutableGraph<V, E, H>
where
    V: Element + Deserialize<'de>,
    E: Element + Deserialize<'de>,
    H: MutationHooks<V, E> + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = GraphSnapshot::<V, E, H>::deserialize(deserializer)?;
        Self::restore(snapshot).map_err(D::Error::custom)
    }
}
