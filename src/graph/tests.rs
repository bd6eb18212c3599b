#![cfg(test)]

use proptest::prelude::*;

use super::*;
use crate::sortable::Sortable;
use crate::util::test_node::{node, TestNode};

fn undirected(nodes: &[&str], edges: &[(&str, &str)]) -> UndirectedGraph<TestNode> {
    let mut graph = UndirectedGraph::new();
    for name in nodes {
        graph.add_node(node(name));
    }
    for (from, to) in edges {
        graph.add_edge(node(from), node(to));
    }
    graph
}

fn directed(nodes: &[&str], edges: &[(&str, &str)]) -> DirectedGraph<TestNode> {
    let mut graph = DirectedGraph::new();
    for name in nodes {
        graph.add_node(node(name));
    }
    for (from, to) in edges {
        graph.add_edge(node(from), node(to));
    }
    graph
}

#[test]
fn test_add_node_is_idempotent() {
    let mut graph = directed(&["a", "b"], &[("a", "b")]);
    graph.add_node(node("a"));

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.neighbors(&node("a")), [node("b")], "Re-adding shouldn't reset neighbors.");
    assert_eq!(graph.nodes(), [node("a"), node("b")]);
}

#[test]
fn test_neighbors_of_absent_node() {
    let graph = directed(&["a"], &[]);
    assert!(graph.neighbors(&node("missing")).is_empty());
    assert!(!graph.has_node(&node("missing")));
    assert!(!graph.has_edge(&node("missing"), &node("a")));
}

#[test]
fn test_directed_edges() {
    let graph = directed(&["a", "b", "c"], &[("a", "b"), ("c", "a")]);

    assert!(graph.has_edge(&node("a"), &node("b")));
    assert!(!graph.has_edge(&node("b"), &node("a")), "Directed edges only go one way.");
    assert_eq!(
        graph.edges(),
        [
            Edge::directed(node("a"), node("b")),
            Edge::directed(node("c"), node("a")),
        ]
    );
    assert_eq!(graph.edges()[1].label(), "c -> a");
}

#[test]
fn test_directed_duplicate_edge() {
    let graph = directed(&["a", "b"], &[("a", "b"), ("a", "b")]);
    assert_eq!(graph.neighbors(&node("a")).len(), 2, "Neighbor lists keep every insertion.");
    assert_eq!(graph.edges().len(), 1, "Edges should be deduplicated.");
}

#[test]
fn test_undirected_edges() {
    let graph = undirected(&["a", "b"], &[("b", "a")]);

    assert!(graph.has_edge(&node("a"), &node("b")));
    assert!(graph.has_edge(&node("b"), &node("a")), "Both neighbor lists should be updated.");

    let edges = graph.edges();
    assert_eq!(edges.len(), 1, "An undirected edge should be listed once.");
    assert_eq!(edges[0].label(), "a <-> b", "The lesser node should come first.");
    assert_eq!(edges[0], Edge::undirected(node("b"), node("a")));
    assert!(!edges[0].is_directed());
}

#[test]
fn test_undirected_self_loop() {
    let graph = undirected(&["a"], &[("a", "a")]);
    assert_eq!(graph.neighbors(&node("a")), [node("a")], "A self-loop is recorded once.");
}

#[test]
fn test_edge_requires_existing_nodes() {
    let mut graph = directed(&["a"], &[("a", "b"), ("b", "a")]);

    assert!(!graph.has_node(&node("b")), "Nodes shouldn't be created implicitly.");
    assert!(graph.neighbors(&node("a")).is_empty());
    assert!(graph.edges().is_empty());

    assert_eq!(
        graph.try_add_edge(node("a"), node("b")),
        Err(MissingNode { endpoint: Endpoint::To })
    );
    assert_eq!(
        graph.try_add_edge(node("b"), node("a")),
        Err(MissingNode { endpoint: Endpoint::From })
    );
    let err = graph.try_add_edge(node("x"), node("y")).unwrap_err();
    assert!(err.endpoint.is_both());
    assert_eq!(err.to_string(), "Cannot add an edge, missing the source and target nodes!");

    graph.add_node(node("b"));
    assert_eq!(graph.try_add_edge(node("a"), node("b")), Ok(()));
    assert!(graph.has_edge(&node("a"), &node("b")));
}

#[test]
fn test_undirected_missing_endpoint_changes_nothing() {
    let mut graph = undirected(&["a"], &[]);
    assert!(graph.try_add_edge(node("a"), node("b")).is_err());
    assert!(graph.neighbors(&node("a")).is_empty(), "A failed insert shouldn't touch either side.");
}

#[test]
fn test_cycles() {
    let pair = undirected(&["a", "b"], &[("a", "b")]);
    assert!(is_acyclic(&pair), "A single undirected edge isn't a cycle.");

    let chain = undirected(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
    assert!(is_acyclic(&chain));

    let triangle = undirected(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
    assert!(is_cyclic(&triangle));

    let directed_chain = directed(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
    assert!(is_acyclic(&directed_chain));

    let directed_loop = directed(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
    assert!(is_cyclic(&directed_loop));

    let two_cycle = directed(&["a", "b"], &[("a", "b"), ("b", "a")]);
    assert!(is_cyclic(&two_cycle), "Opposite directed edges form a cycle.");

    let self_loop = directed(&["a"], &[("a", "a")]);
    assert!(is_cyclic(&self_loop));
    assert!(is_cyclic(&undirected(&["a"], &[("a", "a")])));

    let split = undirected(
        &["a", "b", "c", "x", "y", "z"],
        &[("a", "b"), ("x", "y"), ("y", "z"), ("z", "x")],
    );
    assert!(is_cyclic(&split), "A cycle in any component should be found.");
}

#[test]
fn test_cycles_in_diamond() {
    // Two paths to the same node aren't a directed cycle.
    let diamond = directed(&["a", "b", "c", "d"], &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]);
    assert!(is_acyclic(&diamond));

    let undirected_diamond =
        undirected(&["a", "b", "c", "d"], &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]);
    assert!(is_cyclic(&undirected_diamond));
}

#[test]
fn test_empty_graph() {
    let graph = UndirectedGraph::<TestNode>::new();
    assert!(is_acyclic(&graph));
    assert!(is_connected(&graph), "An empty graph is connected.");
    assert!(graph.edges().is_empty());
    assert_eq!(graph.to_string(), "");
}

#[test]
fn test_connectivity() {
    let connected = undirected(&["a", "b", "c"], &[("a", "b"), ("c", "b")]);
    assert!(is_connected(&connected));
    assert!(!is_disconnected(&connected));

    let split = undirected(&["a", "b", "c"], &[("a", "b")]);
    assert!(is_disconnected(&split), "An isolated node disconnects the graph.");

    let single = undirected(&["a"], &[]);
    assert!(is_connected(&single));
}

#[test]
fn test_depth_first() {
    let graph = directed(
        &["a", "b", "c", "d", "e"],
        &[("a", "c"), ("a", "b"), ("b", "d"), ("c", "d"), ("d", "a")],
    );

    let start = node("a");
    let order: Vec<_> = depth_first(&graph, &start).into_iter().map(|n| n.0.as_str()).collect();
    assert_eq!(order, ["a", "c", "d", "b"], "Neighbors should be visited in insertion order.");

    let missing = node("missing");
    assert!(depth_first(&graph, &missing).is_empty());

    let isolated = node("e");
    assert_eq!(depth_first(&graph, &isolated), [&node("e")]);
}

#[test]
fn test_weighted_round_trip() {
    let mut graph = WeightedGraph::new();
    for name in ["a", "b", "c"] {
        graph.add_node(node(name));
    }
    graph.add_edge(node("a"), node("b"), 5);
    graph.add_edge(node("a"), node("c"), 2);
    graph.add_edge(node("a"), node("z"), 9);

    assert_eq!(graph.weight(&node("a"), &node("b")), Some(&5));
    assert_eq!(graph.weight(&node("b"), &node("a")), None, "Weighted edges are directed.");
    assert_eq!(graph.weight(&node("a"), &node("z")), None);
    assert!(!graph.has_node(&node("z")));
    assert_eq!(graph.neighbors(&node("a")), [node("b"), node("c")]);

    graph.add_edge(node("a"), node("b"), 7);
    assert_eq!(graph.weight(&node("a"), &node("b")), Some(&7), "Re-adding should reweight.");
    assert_eq!(graph.neighbors(&node("a")).len(), 2);
}

#[test]
fn test_weighted_edges() {
    let mut graph = WeightedGraph::new();
    graph.add_node(node("a"));
    graph.add_node(node("b"));
    assert_eq!(
        graph.try_add_edge(node("a"), node("c"), 1.5),
        Err(MissingNode { endpoint: Endpoint::To })
    );
    graph.add_edge(node("b"), node("a"), 0.5);
    graph.add_edge(node("a"), node("b"), 1.5);

    let edges = graph.edges();
    assert_eq!(edges, [
        WeightedEdge::new(node("a"), node("b"), 1.5),
        WeightedEdge::new(node("b"), node("a"), 0.5),
    ]);
    assert_eq!(edges[0].to_string(), "a -> b (1.5)");
    assert_eq!((edges[0].from(), edges[0].to(), *edges[0].weight()), (&node("a"), &node("b"), 1.5));

    let (from, to, weight) = edges[1].clone().into_parts();
    assert_eq!((from.0.as_str(), to.0.as_str(), weight), ("b", "a", 0.5));
    assert!(is_cyclic(&graph));
}

#[test]
fn test_display() {
    let graph = undirected(&["b", "a", "c"], &[("a", "b"), ("a", "c")]);
    assert_eq!(graph.to_string(), "0: a => [b, c]\n1: b => [a]\n2: c => [a]\n");

    let mut weighted = WeightedGraph::new();
    weighted.add_node(node("a"));
    weighted.add_node(node("b"));
    weighted.add_edge(node("a"), node("b"), 3);
    assert_eq!(weighted.to_string(), "0: a => [b: 3]\n1: b => []\n");
}

#[test]
fn test_edge_identity() {
    let edge = Edge::undirected(node("y"), node("x"));
    assert_eq!(edge.from(), &node("x"));
    assert_eq!(edge.to(), &node("y"));
    assert_eq!(edge.unique_key(), "x <-> y");
    assert_eq!(edge.to_string(), "x <-> y");

    let arrow = Edge::directed(node("y"), node("x"));
    assert!(!arrow.equal(&Edge::directed(node("x"), node("y"))));
    assert!(!arrow.equal(&edge), "Directed and undirected edges differ.");
    assert!(edge.less(&arrow), "Edges sort by their identity.");
    assert_eq!(arrow.into_nodes(), (node("y"), node("x")));
}

/// Ordered by rank only, so nodes of equal rank are incomparable without being equal.
#[derive(Debug, Clone, PartialEq)]
struct Ranked(u8, &'static str);

impl Sortable for Ranked {
    fn equal(&self, other: &Self) -> bool {
        self == other
    }

    fn less(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    fn unique(&self) -> std::borrow::Cow<'_, [u8]> {
        std::borrow::Cow::Owned(format!("{}{}", self.0, self.1).into_bytes())
    }
}

#[test]
fn test_undirected_edge_with_tied_nodes() {
    let (x, y) = (Ranked(1, "x"), Ranked(1, "y"));
    let forward = Edge::undirected(x.clone(), y.clone());
    let backward = Edge::undirected(y.clone(), x.clone());
    assert_eq!(forward.label(), backward.label(), "Tied nodes should still give one identity.");
    assert_eq!(forward, backward);

    let mut graph = UndirectedGraph::new();
    graph.add_node(x.clone());
    graph.add_node(y.clone());
    graph.add_edge(x.clone(), y.clone());
    graph.add_edge(y, x);
    assert_eq!(graph.edges().len(), 1);
}

fn dag_edges() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2_usize..12).prop_flat_map(|n| {
        let edge = (0..n, 0..n).prop_filter("no self-loops", |(a, b)| a != b);
        (Just(n), prop::collection::vec(edge, 0..24))
    })
}

proptest! {
    #[test]
    fn prop_forward_edges_are_acyclic((n, edges) in dag_edges()) {
        let nodes = TestNode::many(n, "n");
        let mut graph = DirectedGraph::new();
        for node in &nodes {
            graph.add_node(node.clone());
        }
        for &(a, b) in &edges {
            let (from, to) = (a.min(b), a.max(b));
            graph.add_edge(nodes[from].clone(), nodes[to].clone());
        }
        prop_assert!(is_acyclic(&graph));

        if let Some(&(a, b)) = edges.first() {
            let (from, to) = (a.min(b), a.max(b));
            graph.add_edge(nodes[to].clone(), nodes[from].clone());
            prop_assert!(is_cyclic(&graph), "A back edge should close a cycle.");
        }
    }

    #[test]
    fn prop_undirected_edges_listed_once((n, edges) in dag_edges()) {
        let nodes = TestNode::many(n, "n");
        let mut graph = UndirectedGraph::new();
        for node in &nodes {
            graph.add_node(node.clone());
        }
        for &(a, b) in &edges {
            graph.add_edge(nodes[a].clone(), nodes[b].clone());
            graph.add_edge(nodes[b].clone(), nodes[a].clone());
        }

        let listed = graph.edges();
        let mut expected: Vec<_> = edges.iter().map(|&(a, b)| (a.min(b), a.max(b))).collect();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(listed.len(), expected.len());
        prop_assert!(listed.windows(2).all(|w| w[0].less(&w[1])));
        for &(a, b) in &expected {
            prop_assert!(graph.has_edge(&nodes[a], &nodes[b]) && graph.has_edge(&nodes[b], &nodes[a]));
        }
    }
}
