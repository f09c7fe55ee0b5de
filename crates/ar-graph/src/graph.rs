//! The mutable graph: one mutation routine per operation, extended by hooks.

use std::collections::HashMap;

use tracing::{trace, warn};

use crate::error::{GraphError, GraphResult};
use crate::hooks::{Directed, MutationHooks, Symmetric};
use crate::store::{AdjacencyStore, Element, VertexPair};

/// In-memory mutable graph.
///
/// `MutableGraph` owns the [`AdjacencyStore`] and a hook chain `H`. Every
/// mutation validates its arguments, performs the base bookkeeping, and
/// invokes the matching hook at a fixed point (see [`MutationHooks`]).
/// A failed call leaves the graph unchanged.
///
/// Not safe for concurrent mutation; `&mut self` makes the single writer
/// explicit and no internal locking exists.
#[derive(Debug, Clone)]
pub struct MutableGraph<V, E, H = Directed> {
    pub(crate) store: AdjacencyStore<V, E>,
    pub(crate) hooks: H,
}

/// A plain directed graph.
pub type DirectedGraph<V, E> = MutableGraph<V, E, Directed>;

impl<V, E, H: Default> Default for MutableGraph<V, E, H> {
    fn default() -> Self {
        Self {
            store: AdjacencyStore::default(),
            hooks: H::default(),
        }
    }
}

impl<V, E, H> MutableGraph<V, E, H>
where
    V: Element,
    E: Element,
    H: MutationHooks<V, E>,
{
    /// Create an empty graph driven by the given hook chain.
    pub fn with_hooks(hooks: H) -> Self {
        Self {
            store: AdjacencyStore::new(),
            hooks,
        }
    }

    /// Register a vertex. Fails if it is already present.
    pub fn add_vertex(&mut self, vertex: V) -> GraphResult<()> {
        self.store.insert_vertex(vertex.clone())?;
        if let Err(err) = self.hooks.decorate_add_vertex(&mut self.store, &vertex) {
            self.store.remove_vertex_entry(&vertex);
            return Err(err);
        }
        trace!(?vertex, "vertex added");
        Ok(())
    }

    /// Remove a vertex.
    ///
    /// Vertices that still have incident edges are rejected with
    /// [`GraphError::VertexHasEdges`]; remove the edges first.
    pub fn remove_vertex(&mut self, vertex: &V) -> GraphResult<()> {
        let edges = self.store.incident_count(vertex)?;
        if edges > 0 {
            return Err(GraphError::VertexHasEdges {
                vertex: format!("{vertex:?}"),
                edges,
            });
        }
        self.hooks.decorate_remove_vertex(&mut self.store, vertex)?;
        self.store.remove_vertex_entry(vertex);
        trace!(?vertex, "vertex removed");
        Ok(())
    }

    /// Attach `edge` to the ordered pair `(head, tail)`.
    ///
    /// Fails if either endpoint is absent or the edge is already attached.
    pub fn add_edge(&mut self, head: &V, edge: E, tail: &V) -> GraphResult<()> {
        if let Ok(pair) = self.store.vertex_pair(&edge) {
            return Err(GraphError::EdgeAlreadyPresent {
                edge: format!("{edge:?}"),
                head: format!("{:?}", pair.head),
                tail: format!("{:?}", pair.tail),
            });
        }
        self.store.internal_add_edge(head, &edge, tail)?;
        if let Err(err) = self
            .hooks
            .decorate_add_edge(&mut self.store, head, &edge, tail)
        {
            if let Err(undo) = self.store.internal_remove_edge(head, &edge, tail) {
                warn!(?edge, %undo, "could not detach edge after hook failure");
            }
            return Err(err);
        }
        trace!(?head, ?edge, ?tail, "edge added");
        Ok(())
    }

    /// Detach `edge`. Fails if it is not attached.
    ///
    /// The hook runs first, while the edge and its endpoints are still
    /// readable.
    pub fn remove_edge(&mut self, edge: &E) -> GraphResult<()> {
        let pair = self.store.vertex_pair(edge)?.clone();
        self.hooks.decorate_remove_edge(&mut self.store, edge)?;
        self.store.internal_remove_edge(&pair.head, edge, &pair.tail)?;
        trace!(?edge, head = ?pair.head, tail = ?pair.tail, "edge removed");
        Ok(())
    }
}

impl<V: Element, E: Element, H> MutableGraph<V, E, H> {
    /// The ordered `(head, tail)` pair `edge` is attached to.
    pub fn vertex_pair(&self, edge: &E) -> GraphResult<&VertexPair<V>> {
        self.store.vertex_pair(edge)
    }

    /// The adjacency index: vertex -> edges listed at it.
    pub fn adjacency(&self) -> &HashMap<V, Vec<E>> {
        self.store.adjacency()
    }

    /// Edges listed at `vertex`. For directed graphs these are its outgoing edges.
    pub fn adjacent_edges(&self, vertex: &V) -> GraphResult<&[E]> {
        self.store.adjacent_edges(vertex)
    }

    /// Vertices reachable in one step from `vertex`.
    pub fn connected_vertices(&self, vertex: &V) -> GraphResult<Vec<&V>> {
        self.store
            .adjacent_edges(vertex)?
            .iter()
            .map(|edge| {
                let pair = self.store.vertex_pair(edge)?;
                pair.opposite(vertex)
                    .ok_or_else(|| GraphError::edge_not_found(edge))
            })
            .collect()
    }

    /// An edge listed at `head` whose other endpoint is `tail`, if any.
    pub fn edge(&self, head: &V, tail: &V) -> Option<&E> {
        let edges = self.store.adjacent_edges(head).ok()?;
        edges.iter().find(|edge| {
            self.store
                .vertex_pair(edge)
                .is_ok_and(|pair| pair.opposite(head) == Some(tail))
        })
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.store.vertex_count()
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.store.edge_count()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.store.vertices()
    }

    pub fn edges(&self) -> impl Iterator<Item = (&E, &VertexPair<V>)> {
        self.store.edges()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.store.contains_vertex(vertex)
    }

    pub fn contains_edge(&self, edge: &E) -> bool {
        self.store.contains_edge(edge)
    }

    /// Read access to the hook chain's state.
    pub fn hooks(&self) -> &H {
        &self.hooks
    }
}

impl<V: Element, E: Element, H: Symmetric> MutableGraph<V, E, H> {
    /// Number of edges listed at `vertex`; a self-loop counts twice.
    pub fn degree(&self, vertex: &V) -> GraphResult<usize> {
        self.store.adjacent_edges(vertex).map(<[E]>::len)
    }
}

impl<V: Element, E: Element, H: PartialEq> PartialEq for MutableGraph<V, E, H> {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store && self.hooks == other.hooks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::undirected::Undirected;
    use ar_core::CoreError;

    /// Hook that fails the selected mutations.
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    struct Refuse {
        add_vertex: bool,
        add_edge: bool,
        remove_edge: bool,
    }

    fn refused() -> GraphError {
        GraphError::Core(CoreError::InvalidArg { what: "refused" })
    }

    fn gate(refuse: bool) -> GraphResult<()> {
        if refuse {
            Err(refused())
        } else {
            Ok(())
        }
    }

    impl<V, E> MutationHooks<V, E> for Refuse {
        fn decorate_add_vertex(
            &mut self,
            _store: &mut AdjacencyStore<V, E>,
            _vertex: &V,
        ) -> GraphResult<()> {
            gate(self.add_vertex)
        }

        fn decorate_add_edge(
            &mut self,
            _store: &mut AdjacencyStore<V, E>,
            _head: &V,
            _edge: &E,
            _tail: &V,
        ) -> GraphResult<()> {
            gate(self.add_edge)
        }

        fn decorate_remove_edge(
            &mut self,
            _store: &mut AdjacencyStore<V, E>,
            _edge: &E,
        ) -> GraphResult<()> {
            gate(self.remove_edge)
        }
    }

    fn pair_with(refuse: Refuse) -> MutableGraph<u8, char, (Undirected, Refuse)> {
        let mut g = MutableGraph::with_hooks((Undirected, refuse));
        g.add_vertex(1).unwrap();
        g.add_vertex(2).unwrap();
        g
    }

    fn abc() -> DirectedGraph<&'static str, &'static str> {
        let mut g = DirectedGraph::default();
        for v in ["a", "b", "c"] {
            g.add_vertex(v).unwrap();
        }
        g
    }

    #[test]
    fn directed_edge_listed_at_head_only() {
        let mut g = abc();
        g.add_edge(&"a", "a -> b", &"b").unwrap();

        assert_eq!(g.adjacent_edges(&"a").unwrap(), &["a -> b"]);
        assert!(g.adjacent_edges(&"b").unwrap().is_empty());
        assert_eq!(g.vertex_pair(&"a -> b").unwrap(), &VertexPair::new("a", "b"));
        assert_eq!(g.edge(&"a", &"b"), Some(&"a -> b"));
        assert_eq!(g.edge(&"b", &"a"), None);
    }

    #[test]
    fn duplicate_vertex_rejected() {
        let mut g = abc();
        let err = g.add_vertex("a").unwrap_err();
        assert!(matches!(err, GraphError::VertexAlreadyPresent { .. }));
        assert_eq!(g.order(), 3);
    }

    #[test]
    fn edge_with_absent_endpoint_rejected() {
        let mut g = abc();
        let err = g.add_edge(&"a", "a -> z", &"z").unwrap_err();
        assert!(matches!(err, GraphError::VertexNotFound { .. }));
        assert_eq!(g.size(), 0);
        assert!(g.adjacent_edges(&"a").unwrap().is_empty());
    }

    #[test]
    fn edge_attached_twice_rejected() {
        let mut g = abc();
        g.add_edge(&"a", "e", &"b").unwrap();
        let err = g.add_edge(&"b", "e", &"c").unwrap_err();
        assert!(matches!(err, GraphError::EdgeAlreadyPresent { .. }));
        assert_eq!(g.vertex_pair(&"e").unwrap(), &VertexPair::new("a", "b"));
        assert!(g.adjacent_edges(&"b").unwrap().is_empty());
    }

    #[test]
    fn remove_absent_edge_fails() {
        let mut g = abc();
        let err = g.remove_edge(&"nope").unwrap_err();
        assert!(matches!(err, GraphError::EdgeNotFound { .. }));
    }

    #[test]
    fn vertex_with_incoming_edge_is_kept() {
        let mut g = abc();
        g.add_edge(&"a", "a -> b", &"b").unwrap();

        let err = g.remove_vertex(&"b").unwrap_err();
        assert_eq!(
            err,
            GraphError::VertexHasEdges {
                vertex: "\"b\"".into(),
                edges: 1
            }
        );
        assert!(g.contains_vertex(&"b"));

        g.remove_edge(&"a -> b").unwrap();
        g.remove_vertex(&"b").unwrap();
        assert!(!g.contains_vertex(&"b"));
        assert!(g.adjacent_edges(&"b").is_err());
    }

    #[test]
    fn connected_vertices_follow_outgoing_edges() {
        let mut g = abc();
        g.add_edge(&"a", "a -> b", &"b").unwrap();
        g.add_edge(&"a", "a -> c", &"c").unwrap();

        let mut out = g.connected_vertices(&"a").unwrap();
        out.sort();
        assert_eq!(out, vec![&"b", &"c"]);
        assert!(g.connected_vertices(&"b").unwrap().is_empty());
    }

    #[test]
    fn failed_vertex_hook_unregisters_vertex() {
        let mut g: MutableGraph<u8, char, Refuse> = MutableGraph::with_hooks(Refuse {
            add_vertex: true,
            ..Refuse::default()
        });
        assert_eq!(g.add_vertex(1).unwrap_err(), refused());
        assert!(!g.contains_vertex(&1));
        assert_eq!(g.order(), 0);
    }

    #[test]
    fn failed_edge_hook_detaches_forward_entry() {
        let mut g: MutableGraph<u8, char, Refuse> = MutableGraph::with_hooks(Refuse {
            add_edge: true,
            ..Refuse::default()
        });
        g.add_vertex(1).unwrap();
        g.add_vertex(2).unwrap();

        assert_eq!(g.add_edge(&1, 'e', &2).unwrap_err(), refused());
        assert!(!g.contains_edge(&'e'));
        assert!(g.adjacent_edges(&1).unwrap().is_empty());
    }

    #[test]
    fn failed_second_hook_undoes_reverse_registration() {
        let mut g = pair_with(Refuse {
            add_edge: true,
            ..Refuse::default()
        });

        assert_eq!(g.add_edge(&1, 'e', &2).unwrap_err(), refused());
        assert!(!g.contains_edge(&'e'));
        assert!(g.adjacent_edges(&1).unwrap().is_empty());
        assert!(g.adjacent_edges(&2).unwrap().is_empty());
        assert_eq!(g.degree(&2).unwrap(), 0);
        g.remove_vertex(&2).unwrap();
    }

    #[test]
    fn failed_second_hook_keeps_edge_on_removal() {
        let mut g = pair_with(Refuse {
            remove_edge: true,
            ..Refuse::default()
        });
        g.add_edge(&1, 'e', &2).unwrap();

        assert_eq!(g.remove_edge(&'e').unwrap_err(), refused());
        assert!(g.contains_edge(&'e'));
        assert_eq!(g.vertex_pair(&'e').unwrap(), &VertexPair::new(1, 2));
        assert_eq!(g.degree(&1).unwrap(), 1);
        assert_eq!(g.degree(&2).unwrap(), 1);
        assert_eq!(g.adjacent_edges(&2).unwrap(), &['e']);
    }
}
