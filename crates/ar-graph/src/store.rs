//! Low-level vertex/edge storage shared by every graph layer.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

use crate::error::{GraphError, GraphResult};

/// Bound shared by vertex and edge values.
///
/// Elements are opaque client values: the store only hashes, compares and
/// clones them, and renders them with `Debug` in errors and traces.
pub trait Element: Eq + Hash + Clone + fmt::Debug {}

impl<T: Eq + Hash + Clone + fmt::Debug> Element for T {}

/// The ordered `(head, tail)` pair an edge is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexPair<V> {
    pub head: V,
    pub tail: V,
}

impl<V: PartialEq> VertexPair<V> {
    pub fn new(head: V, tail: V) -> Self {
        Self { head, tail }
    }

    /// The endpoint across the edge from `v`, or `None` if `v` is not an endpoint.
    pub fn opposite(&self, v: &V) -> Option<&V> {
        if *v == self.head {
            Some(&self.tail)
        } else if *v == self.tail {
            Some(&self.head)
        } else {
            None
        }
    }

    /// Returns true when `v` is one of the endpoints.
    pub fn contains(&self, v: &V) -> bool {
        self.head == *v || self.tail == *v
    }

    pub fn is_loop(&self) -> bool {
        self.head == self.tail
    }
}

impl<V: fmt::Display> fmt::Display for VertexPair<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.head, self.tail)
    }
}

/// Vertex set, adjacency index and edge -> endpoints index.
///
/// The store is the single source of truth for adjacency state. It knows
/// nothing about directedness: a graph layer decides how many times (and
/// from which endpoint) an edge is registered via [`internal_add_edge`].
///
/// Invariants:
/// - every registered vertex has an adjacency entry, possibly empty; absent
///   vertices have none
/// - an edge is recorded in `endpoints` iff it is listed at one of its
///   endpoints
/// - `incident[v]` counts the recorded edges touching `v` (loops once)
///
/// [`internal_add_edge`]: AdjacencyStore::internal_add_edge
#[derive(Debug, Clone)]
pub struct AdjacencyStore<V, E> {
    adjacency: HashMap<V, Vec<E>>,
    endpoints: HashMap<E, VertexPair<V>>,
    incident: HashMap<V, usize>,
}

impl<V, E> Default for AdjacencyStore<V, E> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            endpoints: HashMap::new(),
            incident: HashMap::new(),
        }
    }
}

impl<V: Element, E: Element> AdjacencyStore<V, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `edge` in `head`'s adjacency list.
    ///
    /// The first registration of an edge records `(head, tail)` as its
    /// endpoints; later registrations (e.g. the reverse direction of an
    /// undirected edge) only add another adjacency entry. Nothing is mutated
    /// when an endpoint is absent.
    pub fn internal_add_edge(&mut self, head: &V, edge: &E, tail: &V) -> GraphResult<()> {
        if !self.adjacency.contains_key(tail) {
            return Err(GraphError::vertex_not_found(tail));
        }
        let list = self
            .adjacency
            .get_mut(head)
            .ok_or_else(|| GraphError::vertex_not_found(head))?;
        list.push(edge.clone());

        if let Entry::Vacant(slot) = self.endpoints.entry(edge.clone()) {
            slot.insert(VertexPair::new(head.clone(), tail.clone()));
            *self.incident.entry(head.clone()).or_default() += 1;
            if head != tail {
                *self.incident.entry(tail.clone()).or_default() += 1;
            }
        }
        Ok(())
    }

    /// Removes one registration of `edge` from `head`'s adjacency list.
    ///
    /// Once the edge is no longer listed at either endpoint its endpoint
    /// record is dropped. Nothing is mutated when `edge` is not listed at
    /// `head`.
    pub fn internal_remove_edge(&mut self, head: &V, edge: &E, tail: &V) -> GraphResult<()> {
        let list = self
            .adjacency
            .get_mut(head)
            .ok_or_else(|| GraphError::vertex_not_found(head))?;
        let pos = list
            .iter()
            .position(|e| e == edge)
            .ok_or_else(|| GraphError::edge_not_found(edge))?;
        list.remove(pos);

        if !self.is_listed(head, edge) && !self.is_listed(tail, edge) {
            if let Some(pair) = self.endpoints.remove(edge) {
                self.release(&pair.head);
                if pair.head != pair.tail {
                    self.release(&pair.tail);
                }
            }
        }
        Ok(())
    }

    fn is_listed(&self, v: &V, edge: &E) -> bool {
        self.adjacency
            .get(v)
            .is_some_and(|list| list.contains(edge))
    }

    /// How many times `edge` is listed at `v`.
    pub fn listed_count(&self, v: &V, edge: &E) -> usize {
        self.adjacency
            .get(v)
            .map_or(0, |list| list.iter().filter(|e| *e == edge).count())
    }

    fn release(&mut self, v: &V) {
        if let Some(count) = self.incident.get_mut(v) {
            *count = count.saturating_sub(1);
        }
    }

    /// Registers a vertex with an empty adjacency entry.
    pub(crate) fn insert_vertex(&mut self, v: V) -> GraphResult<()> {
        match self.adjacency.entry(v) {
            Entry::Occupied(slot) => Err(GraphError::VertexAlreadyPresent {
                vertex: format!("{:?}", slot.key()),
            }),
            Entry::Vacant(slot) => {
                self.incident.insert(slot.key().clone(), 0);
                slot.insert(Vec::new());
                Ok(())
            }
        }
    }

    /// Drops a vertex; the caller has checked it has no incident edges.
    pub(crate) fn remove_vertex_entry(&mut self, v: &V) {
        self.adjacency.remove(v);
        self.incident.remove(v);
    }

    /// The full adjacency index.
    pub fn adjacency(&self) -> &HashMap<V, Vec<E>> {
        &self.adjacency
    }

    /// Edges listed at `v`.
    pub fn adjacent_edges(&self, v: &V) -> GraphResult<&[E]> {
        self.adjacency
            .get(v)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::vertex_not_found(v))
    }

    /// The endpoints `edge` is attached to.
    pub fn vertex_pair(&self, edge: &E) -> GraphResult<&VertexPair<V>> {
        self.endpoints
            .get(edge)
            .ok_or_else(|| GraphError::edge_not_found(edge))
    }

    /// Number of attached edges touching `v`.
    pub fn incident_count(&self, v: &V) -> GraphResult<usize> {
        self.incident
            .get(v)
            .copied()
            .ok_or_else(|| GraphError::vertex_not_found(v))
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    pub fn contains_edge(&self, edge: &E) -> bool {
        self.endpoints.contains_key(edge)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    pub fn edges(&self) -> impl Iterator<Item = (&E, &VertexPair<V>)> {
        self.endpoints.iter()
    }

    /// Rebuilds a store from raw parts, recomputing incident counters.
    ///
    /// The caller is responsible for the parts being consistent.
    #[cfg(feature = "serde")]
    pub(crate) fn from_parts(
        adjacency: HashMap<V, Vec<E>>,
        endpoints: HashMap<E, VertexPair<V>>,
    ) -> Self {
        let mut incident: HashMap<V, usize> =
            adjacency.keys().map(|v| (v.clone(), 0)).collect();
        for pair in endpoints.values() {
            *incident.entry(pair.head.clone()).or_default() += 1;
            if pair.head != pair.tail {
                *incident.entry(pair.tail.clone()).or_default() += 1;
            }
        }
        Self {
            adjacency,
            endpoints,
            incident,
        }
    }
}

impl<V: Element, E: Element> PartialEq for AdjacencyStore<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency && self.endpoints == other.endpoints
    }
}

impl<V: Element, E: Element> Eq for AdjacencyStore<V, E> {}
