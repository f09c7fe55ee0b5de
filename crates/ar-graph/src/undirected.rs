//! Undirected layer: every edge is listed at both of its endpoints.

use crate::error::{GraphError, GraphResult};
use crate::graph::MutableGraph;
use crate::hooks::{MutationHooks, Symmetric};
use crate::store::{AdjacencyStore, Element};

/// Structural capability realizing an undirected edge as a doubled
/// directed registration: the graph lists the edge at its head, this hook
/// lists it again at its tail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Undirected;

impl Symmetric for Undirected {}

impl<V: Element, E: Element> MutationHooks<V, E> for Undirected {
    fn decorate_add_edge(
        &mut self,
        store: &mut AdjacencyStore<V, E>,
        head: &V,
        edge: &E,
        tail: &V,
    ) -> GraphResult<()> {
        store.internal_add_edge(tail, edge, head)
    }

    fn decorate_remove_edge(
        &mut self,
        store: &mut AdjacencyStore<V, E>,
        edge: &E,
    ) -> GraphResult<()> {
        let pair = store.vertex_pair(edge)?.clone();
        store.internal_remove_edge(&pair.tail, edge, &pair.head)
    }

    /// Every edge must be listed once at each endpoint, twice at a loop's vertex.
    fn decorate_restore(&mut self, store: &AdjacencyStore<V, E>) -> GraphResult<()> {
        for (edge, pair) in store.edges() {
            let at_head = store.listed_count(&pair.head, edge);
            let balanced = if pair.is_loop() {
                at_head == 2
            } else {
                at_head == 1 && store.listed_count(&pair.tail, edge) == 1
            };
            if !balanced {
                return Err(GraphError::InconsistentSnapshot {
                    what: format!("undirected edge {edge:?} is not listed at both of {pair:?}"),
                });
            }
        }
        Ok(())
    }
}

/// An undirected graph.
pub type UndirectedGraph<V, E> = MutableGraph<V, E, Undirected>;

impl<V: Element, E: Element> MutableGraph<V, E, Undirected> {
    pub fn new() -> Self {
        Self::with_hooks(Undirected)
    }
}
