//! Spanning tree: an undirected graph with an incrementally maintained
//! aggregate edge weight.

use ar_core::{Group, WeightMapper, fold_all};
use tracing::{debug, trace};

use crate::error::GraphResult;
use crate::graph::MutableGraph;
use crate::hooks::MutationHooks;
use crate::store::{AdjacencyStore, Element};
use crate::undirected::Undirected;

/// Aggregation capability: folds each attached edge's weight into a
/// running total and folds it back out on removal.
///
/// The total equals the algebra-sum of the weights of the edges currently
/// attached, provided the algebra honours the [`Group`] laws. Each update
/// is O(1); the total is never recomputed from scratch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightAggregate<W, A, M> {
    algebra: A,
    mapper: M,
    weight: W,
}

impl<W, A, M> WeightAggregate<W, A, M>
where
    A: Group<W>,
{
    pub fn new(algebra: A, mapper: M) -> Self {
        let weight = algebra.identity();
        Self {
            algebra,
            mapper,
            weight,
        }
    }

    pub fn weight(&self) -> &W {
        &self.weight
    }

    pub fn algebra(&self) -> &A {
        &self.algebra
    }
}

impl<V, E, W, A, M> MutationHooks<V, E> for WeightAggregate<W, A, M>
where
    V: Element,
    E: Element,
    W: std::fmt::Debug + PartialEq,
    A: Group<W>,
    M: WeightMapper<E, W>,
{
    fn decorate_add_edge(
        &mut self,
        _store: &mut AdjacencyStore<V, E>,
        _head: &V,
        edge: &E,
        _tail: &V,
    ) -> GraphResult<()> {
        let w = self.mapper.map(edge);
        self.weight = self.algebra.combine(&self.weight, &w);
        trace!(?edge, weight = ?self.weight, "weight folded in");
        Ok(())
    }

    fn decorate_remove_edge(
        &mut self,
        _store: &mut AdjacencyStore<V, E>,
        edge: &E,
    ) -> GraphResult<()> {
        let w = self.mapper.map(edge);
        self.weight = self.algebra.combine(&self.weight, &self.algebra.inverse(&w));
        trace!(?edge, weight = ?self.weight, "weight folded out");
        Ok(())
    }

    /// The stored total is derived state: recompute it from the restored edges.
    fn decorate_restore(&mut self, store: &AdjacencyStore<V, E>) -> GraphResult<()> {
        let weights: Vec<W> = store.edges().map(|(edge, _)| self.mapper.map(edge)).collect();
        let weight = fold_all(&self.algebra, &weights);
        if weight != self.weight {
            debug!(stored = ?self.weight, recomputed = ?weight, "aggregate weight re-derived");
        }
        self.weight = weight;
        Ok(())
    }
}

/// Hook chain of a spanning tree: symmetric registration first, then the
/// aggregate update, once per mutation.
pub type SpanningTreeHooks<W, A, M> = (Undirected, WeightAggregate<W, A, M>);

/// Undirected graph maintaining the aggregate weight of its edges.
pub type SpanningTree<V, E, W, A, M> = MutableGraph<V, E, SpanningTreeHooks<W, A, M>>;

impl<V, E, W, A, M> MutableGraph<V, E, SpanningTreeHooks<W, A, M>>
where
    V: Element,
    E: Element,
    W: std::fmt::Debug + PartialEq,
    A: Group<W>,
    M: WeightMapper<E, W>,
{
    /// Create an empty spanning tree; its weight starts at `algebra.identity()`.
    pub fn new(algebra: A, mapper: M) -> Self {
        Self::with_hooks((Undirected, WeightAggregate::new(algebra, mapper)))
    }

    /// The current aggregate weight.
    pub fn weight(&self) -> &W {
        self.hooks.1.weight()
    }
}
