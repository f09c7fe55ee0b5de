//! Integration tests for ar-graph.

use ar_core::{IntegerAddition, MapFn, RealAddition, fold_all};
use ar_graph::{
    DirectedGraph, EdgeWeight, GraphError, LabeledEdge, LabeledVertex, LabeledWeightedEdge,
    SpanningTree, UndirectedGraph,
};
use proptest::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

type Tree = SpanningTree<LabeledVertex, LabeledWeightedEdge<f64>, f64, RealAddition, EdgeWeight>;

fn vertex(label: &str) -> LabeledVertex {
    LabeledVertex::new(label).unwrap()
}

fn weighted(label: &str, weight: f64) -> LabeledWeightedEdge<f64> {
    LabeledWeightedEdge::new(label, weight).unwrap()
}

fn round_trip<T>(value: &T) -> T
where
    T: Serialize + DeserializeOwned,
{
    let json = serde_json::to_string(value).unwrap();
    serde_json::from_str(&json).unwrap()
}

/// a -> c, c -> d, d -> b, each of weight 1.0.
fn build_weighted_tree() -> Tree {
    let mut tree = Tree::new(RealAddition, EdgeWeight);
    let [a, b, c, d] = ["a", "b", "c", "d"].map(vertex);
    for v in [&a, &b, &c, &d] {
        tree.add_vertex(v.clone()).unwrap();
    }
    tree.add_edge(&a, weighted("a -> c", 1.0), &c).unwrap();
    tree.add_edge(&c, weighted("c -> d", 1.0), &d).unwrap();
    tree.add_edge(&d, weighted("d -> b", 1.0), &b).unwrap();
    tree
}

fn build_labeled_graph() -> UndirectedGraph<LabeledVertex, LabeledEdge> {
    let mut g = UndirectedGraph::new();
    let [a, b, c, d] = ["a", "b", "c", "d"].map(vertex);
    for v in [&a, &b, &c, &d] {
        g.add_vertex(v.clone()).unwrap();
    }
    g.add_edge(&a, LabeledEdge::new("a -> c").unwrap(), &c).unwrap();
    g.add_edge(&c, LabeledEdge::new("c -> d").unwrap(), &d).unwrap();
    g.add_edge(&d, LabeledEdge::new("d -> b").unwrap(), &b).unwrap();
    g
}

#[test]
fn spanning_tree_weight_and_degree() {
    let mut tree = build_weighted_tree();
    assert_eq!(*tree.weight(), 3.0);
    assert_eq!(tree.degree(&vertex("c")).unwrap(), 2);

    tree.remove_edge(&weighted("c -> d", 1.0)).unwrap();
    assert_eq!(*tree.weight(), 2.0);
    assert_eq!(tree.degree(&vertex("c")).unwrap(), 1);
    assert_eq!(tree.degree(&vertex("d")).unwrap(), 1);
    assert_eq!(tree.size(), 2);
}

#[test]
fn fresh_spanning_tree_weight_is_identity() {
    let tree = Tree::new(RealAddition, EdgeWeight);
    assert_eq!(*tree.weight(), 0.0);
    assert_eq!(tree.order(), 0);
}

#[test]
fn edge_endpoints_are_ordered() {
    let tree = build_weighted_tree();
    let pair = tree.vertex_pair(&weighted("d -> b", 1.0)).unwrap();
    assert_eq!(pair.head, vertex("d"));
    assert_eq!(pair.tail, vertex("b"));

    let err = tree.vertex_pair(&weighted("x -> y", 1.0)).unwrap_err();
    assert!(matches!(err, GraphError::EdgeNotFound { .. }));
}

#[test]
fn vertex_removal_requires_no_edges() {
    let mut tree = build_weighted_tree();
    let c = vertex("c");

    assert!(matches!(
        tree.remove_vertex(&c),
        Err(GraphError::VertexHasEdges { edges: 2, .. })
    ));

    tree.remove_edge(&weighted("a -> c", 1.0)).unwrap();
    tree.remove_edge(&weighted("c -> d", 1.0)).unwrap();
    tree.remove_vertex(&c).unwrap();

    assert!(!tree.contains_vertex(&c));
    assert_eq!(*tree.weight(), 1.0);
    assert!(matches!(
        tree.degree(&c),
        Err(GraphError::VertexNotFound { .. })
    ));
}

#[test]
fn adjacency_has_no_phantom_entries() {
    let mut g = build_labeled_graph();
    let edge = LabeledEdge::new("a -> c").unwrap();
    g.remove_edge(&edge).unwrap();
    g.remove_vertex(&vertex("a")).unwrap();

    let adjacency = g.adjacency();
    assert!(!adjacency.contains_key(&vertex("a")));
    assert!(adjacency.values().all(|edges| !edges.contains(&edge)));
}

#[test]
fn labeled_values_round_trip() {
    let v = vertex("start");
    assert_eq!(round_trip(&v), v);

    let e = LabeledEdge::new("start <-> a").unwrap();
    assert_eq!(round_trip(&e), e);

    let w = weighted("start <-> a", 1.5);
    assert_eq!(round_trip(&w), w);
}

#[test]
fn undirected_graph_round_trip() {
    let g = build_labeled_graph();
    let back = round_trip(&g);
    assert_eq!(back, g);
    assert_eq!(back.degree(&vertex("c")).unwrap(), 2);
}

#[test]
fn undirected_weighted_graph_round_trip() {
    let mut g: UndirectedGraph<LabeledVertex, LabeledWeightedEdge<f64>> = UndirectedGraph::new();
    let [a, b] = ["a", "b"].map(vertex);
    g.add_vertex(a.clone()).unwrap();
    g.add_vertex(b.clone()).unwrap();
    g.add_edge(&a, weighted("a -> b", 2.0), &b).unwrap();

    assert_eq!(round_trip(&g), g);
}

#[test]
fn directed_graph_round_trip() {
    let mut g: DirectedGraph<LabeledVertex, LabeledEdge> = DirectedGraph::default();
    let [a, b] = ["a", "b"].map(vertex);
    g.add_vertex(a.clone()).unwrap();
    g.add_vertex(b.clone()).unwrap();
    g.add_edge(&a, LabeledEdge::new("a -> b").unwrap(), &b).unwrap();

    let back = round_trip(&g);
    assert_eq!(back, g);
    assert!(back.adjacent_edges(&b).unwrap().is_empty());
}

#[test]
fn spanning_tree_round_trip() {
    let tree = build_weighted_tree();
    let mut back = round_trip(&tree);
    assert_eq!(back, tree);
    assert_eq!(*back.weight(), 3.0);

    back.remove_edge(&weighted("a -> c", 1.0)).unwrap();
    assert_eq!(*back.weight(), 2.0);
}

#[test]
fn stale_spanning_weight_is_rederived() {
    let empty = r#"{
        "vertices": ["a"],
        "edges": [],
        "adjacency": [["a", []]],
        "hooks": [null, {"algebra": null, "mapper": null, "weight": 99.0}]
    }"#;
    let tree: Tree = serde_json::from_str(empty).unwrap();
    assert_eq!(*tree.weight(), 0.0);

    let one_edge = r#"{
        "vertices": ["a", "b"],
        "edges": [{"head": "a", "edge": {"label": "a -> b", "weight": 2.5}, "tail": "b"}],
        "adjacency": [
            ["a", [{"label": "a -> b", "weight": 2.5}]],
            ["b", [{"label": "a -> b", "weight": 2.5}]]
        ],
        "hooks": [null, {"algebra": null, "mapper": null, "weight": 99.0}]
    }"#;
    let mut tree: Tree = serde_json::from_str(one_edge).unwrap();
    assert_eq!(*tree.weight(), 2.5);
    assert_eq!(tree.degree(&vertex("b")).unwrap(), 1);

    tree.remove_edge(&weighted("a -> b", 2.5)).unwrap();
    assert_eq!(*tree.weight(), 0.0);
}

#[test]
fn spanning_tree_with_one_sided_edge_rejected() {
    let raw = r#"{
        "vertices": ["a", "b"],
        "edges": [{"head": "a", "edge": {"label": "a -> b", "weight": 2.5}, "tail": "b"}],
        "adjacency": [["a", [{"label": "a -> b", "weight": 2.5}]], ["b", []]],
        "hooks": [null, {"algebra": null, "mapper": null, "weight": 2.5}]
    }"#;
    assert!(serde_json::from_str::<Tree>(raw).is_err());
}

#[test]
fn invalid_values_rejected_on_deserialize() {
    assert!(serde_json::from_str::<LabeledEdge>(r#""""#).is_err());
    assert!(serde_json::from_str::<LabeledWeightedEdge<f64>>(r#"{"label": "a"}"#).is_err());
    let empty_label = r#"{"label": "", "weight": 1.0}"#;
    assert!(serde_json::from_str::<LabeledWeightedEdge<f64>>(empty_label).is_err());
}

#[test]
fn rejected_calls_do_not_mutate() {
    let mut tree = build_weighted_tree();
    let before = tree.clone();

    assert!(tree.add_vertex(vertex("a")).is_err());
    assert!(tree.add_edge(&vertex("a"), weighted("a -> z", 4.0), &vertex("z")).is_err());
    assert!(tree.add_edge(&vertex("a"), weighted("a -> c", 1.0), &vertex("b")).is_err());
    assert!(tree.remove_edge(&weighted("nope", 1.0)).is_err());
    assert!(tree.remove_vertex(&vertex("z")).is_err());

    assert_eq!(tree, before);
}

fn chain(n: usize) -> Vec<LabeledVertex> {
    (0..=n).map(|i| vertex(&format!("v{i}"))).collect()
}

proptest! {
    #[test]
    fn degree_symmetry(pairs in prop::collection::vec((0_usize..6, 0_usize..6), 1..20)) {
        let vertices = chain(5);
        let mut g: UndirectedGraph<LabeledVertex, LabeledEdge> = UndirectedGraph::new();
        for v in &vertices {
            g.add_vertex(v.clone()).unwrap();
        }

        for (i, (u, v)) in pairs.into_iter().enumerate() {
            let (u, v) = (&vertices[u], &vertices[v]);
            let du = g.degree(u).unwrap();
            let dv = g.degree(v).unwrap();
            let edge = LabeledEdge::new(format!("e{i}")).unwrap();

            g.add_edge(u, edge.clone(), v).unwrap();

            prop_assert!(g.adjacent_edges(u).unwrap().contains(&edge));
            prop_assert!(g.adjacent_edges(v).unwrap().contains(&edge));
            if u == v {
                prop_assert_eq!(g.degree(u).unwrap(), du + 2);
            } else {
                prop_assert_eq!(g.degree(u).unwrap(), du + 1);
                prop_assert_eq!(g.degree(v).unwrap(), dv + 1);
            }
        }
    }

    #[test]
    fn weight_is_sum_of_present_edges(
        weights in prop::collection::vec(-1000_i64..1000, 1..30),
        removals in prop::collection::vec(any::<bool>(), 30),
    ) {
        let vertices = chain(weights.len());
        let mut tree = SpanningTree::new(
            IntegerAddition,
            MapFn(|e: &(usize, i64)| e.1),
        );
        for v in &vertices {
            tree.add_vertex(v.clone()).unwrap();
        }

        let mut present = Vec::new();
        for (i, &w) in weights.iter().enumerate() {
            tree.add_edge(&vertices[i], (i, w), &vertices[i + 1]).unwrap();
            present.push(w);
            prop_assert_eq!(*tree.weight(), fold_all(&IntegerAddition, &present));
        }

        let mut kept = Vec::new();
        for (i, &w) in weights.iter().enumerate() {
            if removals[i] {
                tree.remove_edge(&(i, w)).unwrap();
            } else {
                kept.push(w);
            }
        }
        prop_assert_eq!(*tree.weight(), fold_all(&IntegerAddition, &kept));
        prop_assert_eq!(tree.size(), kept.len());
    }

    #[test]
    fn insert_then_remove_is_identity(
        base in prop::collection::vec(0.0_f64..100.0, 0..10),
        w in 0.0_f64..100.0,
    ) {
        let mut tree = Tree::new(RealAddition, EdgeWeight);
        let vertices = chain(base.len() + 1);
        for v in &vertices {
            tree.add_vertex(v.clone()).unwrap();
        }
        for (i, &bw) in base.iter().enumerate() {
            tree.add_edge(&vertices[i], weighted(&format!("b{i}"), bw), &vertices[i + 1]).unwrap();
        }

        let before = *tree.weight();
        let probe = weighted("probe", w);
        tree.add_edge(&vertices[0], probe.clone(), &vertices[base.len() + 1]).unwrap();
        tree.remove_edge(&probe).unwrap();

        prop_assert!((*tree.weight() - before).abs() <= 1e-9);
    }
}
