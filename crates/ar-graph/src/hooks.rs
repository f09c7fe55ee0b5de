//! Mutation hooks: the extension points graph layers plug into.

use tracing::warn;

use crate::error::{GraphError, GraphResult};
use crate::store::{AdjacencyStore, Element};

/// Capability invoked around the core mutation routines of
/// [`MutableGraph`](crate::MutableGraph).
///
/// Call order, fixed by the graph:
/// - `decorate_add_vertex` runs after the vertex is registered
/// - `decorate_remove_vertex` runs before the vertex is dropped
/// - `decorate_add_edge` runs after the forward registration
///   `internal_add_edge(head, edge, tail)`, so the store already reflects the edge
/// - `decorate_remove_edge` runs before the forward detach, while the edge's
///   endpoints are still recorded
/// - `decorate_restore` runs once when a graph is rebuilt from a snapshot
///
/// Each hook must be atomic: on error it leaves the store and its own
/// state as it found them. The graph validates arguments before calling
/// any hook, so a hook only sees present vertices and edges.
pub trait MutationHooks<V, E> {
    fn decorate_add_vertex(
        &mut self,
        _store: &mut AdjacencyStore<V, E>,
        _vertex: &V,
    ) -> GraphResult<()> {
        Ok(())
    }

    fn decorate_remove_vertex(
        &mut self,
        _store: &mut AdjacencyStore<V, E>,
        _vertex: &V,
    ) -> GraphResult<()> {
        Ok(())
    }

    fn decorate_add_edge(
        &mut self,
        _store: &mut AdjacencyStore<V, E>,
        _head: &V,
        _edge: &E,
        _tail: &V,
    ) -> GraphResult<()> {
        Ok(())
    }

    fn decorate_remove_edge(
        &mut self,
        _store: &mut AdjacencyStore<V, E>,
        _edge: &E,
    ) -> GraphResult<()> {
        Ok(())
    }

    /// Check the restored store against the layout this hook maintains and
    /// re-derive any state kept alongside it.
    fn decorate_restore(&mut self, _store: &AdjacencyStore<V, E>) -> GraphResult<()> {
        Ok(())
    }
}

/// Plain directed graph: every edge is listed at its head only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Directed;

impl<V: Element, E: Element> MutationHooks<V, E> for Directed {
    fn decorate_restore(&mut self, store: &AdjacencyStore<V, E>) -> GraphResult<()> {
        for (edge, pair) in store.edges() {
            let at_head = store.listed_count(&pair.head, edge);
            let at_tail = if pair.is_loop() {
                0
            } else {
                store.listed_count(&pair.tail, edge)
            };
            if at_head != 1 || at_tail != 0 {
                return Err(GraphError::InconsistentSnapshot {
                    what: format!(
                        "directed edge {edge:?} listed {at_head} time(s) at its head \
                         and {at_tail} time(s) at its tail"
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Two capabilities chained: `A` runs before `B` for every hook.
///
/// When `B` fails after `A` succeeded, `A`'s part of the mutation is undone
/// so the pair stays atomic.
impl<V, E, A, B> MutationHooks<V, E> for (A, B)
where
    V: Element,
    E: Element,
    A: MutationHooks<V, E>,
    B: MutationHooks<V, E>,
{
    fn decorate_add_vertex(
        &mut self,
        store: &mut AdjacencyStore<V, E>,
        vertex: &V,
    ) -> GraphResult<()> {
        self.0.decorate_add_vertex(store, vertex)?;
        if let Err(err) = self.1.decorate_add_vertex(store, vertex) {
            if let Err(undo) = self.0.decorate_remove_vertex(store, vertex) {
                warn!(?vertex, %undo, "could not undo vertex hook");
            }
            return Err(err);
        }
        Ok(())
    }

    fn decorate_remove_vertex(
        &mut self,
        store: &mut AdjacencyStore<V, E>,
        vertex: &V,
    ) -> GraphResult<()> {
        self.0.decorate_remove_vertex(store, vertex)?;
        if let Err(err) = self.1.decorate_remove_vertex(store, vertex) {
            if let Err(undo) = self.0.decorate_add_vertex(store, vertex) {
                warn!(?vertex, %undo, "could not undo vertex hook");
            }
            return Err(err);
        }
        Ok(())
    }

    fn decorate_add_edge(
        &mut self,
        store: &mut AdjacencyStore<V, E>,
        head: &V,
        edge: &E,
        tail: &V,
    ) -> GraphResult<()> {
        self.0.decorate_add_edge(store, head, edge, tail)?;
        if let Err(err) = self.1.decorate_add_edge(store, head, edge, tail) {
            if let Err(undo) = self.0.decorate_remove_edge(store, edge) {
                warn!(?edge, %undo, "could not undo edge hook");
            }
            return Err(err);
        }
        Ok(())
    }

    fn decorate_remove_edge(
        &mut self,
        store: &mut AdjacencyStore<V, E>,
        edge: &E,
    ) -> GraphResult<()> {
        let pair = store.vertex_pair(edge)?.clone();
        self.0.decorate_remove_edge(store, edge)?;
        if let Err(err) = self.1.decorate_remove_edge(store, edge) {
            if let Err(undo) = self.0.decorate_add_edge(store, &pair.head, edge, &pair.tail) {
                warn!(?edge, %undo, "could not undo edge hook");
            }
            return Err(err);
        }
        Ok(())
    }

    fn decorate_restore(&mut self, store: &AdjacencyStore<V, E>) -> GraphResult<()> {
        self.0.decorate_restore(store)?;
        self.1.decorate_restore(store)
    }
}

/// Marker for hook chains that list every edge at both endpoints.
///
/// Graphs whose hooks are `Symmetric` expose [`degree`](crate::MutableGraph::degree).
/// A chain is symmetric when its first member is, so the structural hook
/// goes first: `(Undirected, WeightAggregate)`, not the reverse.
pub trait Symmetric {}

impl<A: Symmetric, B> Symmetric for (A, B) {}
