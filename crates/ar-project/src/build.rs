//! Turning a validated document into a live graph.

use ar_core::{CoreResult, Real, RealAddition};
use ar_graph::{
    DirectedGraph, EdgeWeight, Element, GraphError, LabeledEdge, LabeledVertex,
    LabeledWeightedEdge, MutableGraph, MutationHooks, SpanningTree, UndirectedGraph,
};
use tracing::debug;

use crate::ProjectResult;
use crate::schema::{EdgeDef, GraphDocument, GraphKind};
use crate::validate::validate_document;

pub type LabeledDirectedGraph = DirectedGraph<LabeledVertex, LabeledEdge>;
pub type LabeledUndirectedGraph = UndirectedGraph<LabeledVertex, LabeledEdge>;
pub type WeightedSpanningTree =
    SpanningTree<LabeledVertex, LabeledWeightedEdge<Real>, Real, RealAddition, EdgeWeight>;

/// A graph built from a document, in the flavour its `kind` asks for.
#[derive(Debug, Clone)]
pub enum BuiltGraph {
    Directed(LabeledDirectedGraph),
    Undirected(LabeledUndirectedGraph),
    SpanningTree(WeightedSpanningTree),
}

/// Headline numbers of a built graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSummary {
    pub name: String,
    pub kind: GraphKind,
    pub order: usize,
    pub size: usize,
    pub weight: Option<Real>,
}

/// Validate `doc` and build the graph it describes.
///
/// Vertices are added in document order, then edges. Edge weights are
/// ignored for directed and undirected documents.
pub fn build_graph(doc: &GraphDocument) -> ProjectResult<BuiltGraph> {
    validate_document(doc)?;

    let built = match doc.kind {
        GraphKind::Directed => {
            let mut g = LabeledDirectedGraph::default();
            populate(&mut g, doc, |e| LabeledEdge::new(e.label.as_str()))?;
            BuiltGraph::Directed(g)
        }
        GraphKind::Undirected => {
            let mut g = LabeledUndirectedGraph::new();
            populate(&mut g, doc, |e| LabeledEdge::new(e.label.as_str()))?;
            BuiltGraph::Undirected(g)
        }
        GraphKind::SpanningTree => {
            let mut g = WeightedSpanningTree::new(RealAddition, EdgeWeight);
            populate(&mut g, doc, |e| {
                LabeledWeightedEdge::new(e.label.as_str(), e.weight.unwrap_or_default())
            })?;
            BuiltGraph::SpanningTree(g)
        }
    };

    debug!(
        name = %doc.name,
        kind = %doc.kind,
        vertices = doc.vertices.len(),
        edges = doc.edges.len(),
        "graph built"
    );
    Ok(built)
}

fn populate<E, H, F>(
    graph: &mut MutableGraph<LabeledVertex, E, H>,
    doc: &GraphDocument,
    make_edge: F,
) -> ProjectResult<()>
where
    E: Element,
    H: MutationHooks<LabeledVertex, E>,
    F: Fn(&EdgeDef) -> CoreResult<E>,
{
    for label in &doc.vertices {
        graph.add_vertex(LabeledVertex::new(label.as_str())?)?;
    }
    for def in &doc.edges {
        let head = LabeledVertex::new(def.head.as_str())?;
        let tail = LabeledVertex::new(def.tail.as_str())?;
        graph.add_edge(&head, make_edge(def)?, &tail)?;
    }
    Ok(())
}

fn find_by_label<'a, E, H>(
    graph: &'a MutableGraph<LabeledVertex, E, H>,
    label: &str,
    name_of: impl Fn(&E) -> &str,
) -> Option<&'a E>
where
    E: Element,
{
    graph
        .edges()
        .map(|(edge, _)| edge)
        .find(|&edge| name_of(edge) == label)
}

impl BuiltGraph {
    pub fn kind(&self) -> GraphKind {
        match self {
            BuiltGraph::Directed(_) => GraphKind::Directed,
            BuiltGraph::Undirected(_) => GraphKind::Undirected,
            BuiltGraph::SpanningTree(_) => GraphKind::SpanningTree,
        }
    }

    pub fn order(&self) -> usize {
        match self {
            BuiltGraph::Directed(g) => g.order(),
            BuiltGraph::Undirected(g) => g.order(),
            BuiltGraph::SpanningTree(g) => g.order(),
        }
    }

    pub fn size(&self) -> usize {
        match self {
            BuiltGraph::Directed(g) => g.size(),
            BuiltGraph::Undirected(g) => g.size(),
            BuiltGraph::SpanningTree(g) => g.size(),
        }
    }

    /// Aggregate weight; only spanning trees maintain one.
    pub fn weight(&self) -> Option<Real> {
        match self {
            BuiltGraph::SpanningTree(g) => Some(*g.weight()),
            _ => None,
        }
    }

    /// Degree of the labeled vertex; out-degree for directed graphs.
    pub fn degree(&self, label: &str) -> ProjectResult<usize> {
        let v = LabeledVertex::new(label)?;
        let degree = match self {
            BuiltGraph::Directed(g) => g.adjacent_edges(&v)?.len(),
            BuiltGraph::Undirected(g) => g.degree(&v)?,
            BuiltGraph::SpanningTree(g) => g.degree(&v)?,
        };
        Ok(degree)
    }

    /// Remove the edge carrying `label`.
    pub fn remove_edge(&mut self, label: &str) -> ProjectResult<()> {
        let missing = || GraphError::EdgeNotFound {
            edge: label.to_string(),
        };
        match self {
            BuiltGraph::Directed(g) => {
                let edge = find_by_label(g, label, LabeledEdge::label)
                    .cloned()
                    .ok_or_else(missing)?;
                g.remove_edge(&edge)?;
            }
            BuiltGraph::Undirected(g) => {
                let edge = find_by_label(g, label, LabeledEdge::label)
                    .cloned()
                    .ok_or_else(missing)?;
                g.remove_edge(&edge)?;
            }
            BuiltGraph::SpanningTree(g) => {
                let edge = find_by_label(g, label, LabeledWeightedEdge::label)
                    .cloned()
                    .ok_or_else(missing)?;
                g.remove_edge(&edge)?;
            }
        }
        Ok(())
    }

    pub fn summary(&self, name: &str) -> GraphSummary {
        GraphSummary {
            name: name.to_string(),
            kind: self.kind(),
            order: self.order(),
            size: self.size(),
            weight: self.weight(),
        }
    }
}
