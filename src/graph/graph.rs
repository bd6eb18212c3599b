use std::fmt::{self, Display, Formatter};

use tracing::debug;

use super::{Edge, MissingNode, WeightedEdge};
use crate::sortable::Sortable;
use crate::util::fmt::join_display;

/// The read side shared by every graph, and the contract traversal algorithms are written
/// against.
pub trait Graph<G: Sortable> {
    /// Adds `node` with no neighbors. Adding a node that is already present does nothing.
    fn add_node(&mut self, node: G);

    fn has_node(&self, node: &G) -> bool;

    /// Returns true if `to` is a neighbor of `from`.
    fn has_edge(&self, from: &G, to: &G) -> bool;

    /// All nodes, in ascending order.
    fn nodes(&self) -> &[G];

    /// The neighbors of `node`, or an empty slice if it isn't in the graph.
    fn neighbors(&self, node: &G) -> &[G];

    fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Whether an edge `a -> b` says nothing about `b -> a`.
    fn is_directed(&self) -> bool;
}

/// A graph whose edges carry no payload.
pub trait EdgeGraph<G: Sortable>: Graph<G> {
    /// Adds an edge between two existing nodes, or returns which endpoint is missing without
    /// modifying the graph.
    fn try_add_edge(&mut self, from: G, to: G) -> Result<(), MissingNode>;

    /// Adds an edge between two existing nodes. The edge is dropped if either endpoint is
    /// missing, nodes are never created implicitly.
    fn add_edge(&mut self, from: G, to: G) {
        let (from_key, to_key) = (from.unique_key(), to.unique_key());
        if let Err(err) = self.try_add_edge(from, to) {
            debug!(from = %from_key, to = %to_key, %err, "edge dropped");
        }
    }

    /// Every edge in the graph once, in ascending order of its identity.
    fn edges(&self) -> Vec<Edge<G>>;
}

/// A directed graph whose edges carry a weight.
pub trait WeightedEdgeGraph<G: Sortable, W>: Graph<G> {
    /// Adds or reweights the edge `from -> to`, or returns which endpoint is missing without
    /// modifying the graph.
    fn try_add_edge(&mut self, from: G, to: G, weight: W) -> Result<(), MissingNode>;

    /// Adds or reweights the edge `from -> to`. The edge is dropped if either endpoint is
    /// missing.
    fn add_edge(&mut self, from: G, to: G, weight: W) {
        let (from_key, to_key) = (from.unique_key(), to.unique_key());
        if let Err(err) = self.try_add_edge(from, to, weight) {
            debug!(from = %from_key, to = %to_key, %err, "weighted edge dropped");
        }
    }

    /// The weight of `from -> to`, or None if there is no such edge.
    fn weight(&self, from: &G, to: &G) -> Option<&W>;

    fn edges(&self) -> Vec<WeightedEdge<G, W>>;
}

/// Writes an adjacency dump, one `{position}: {node} => [{neighbors}]` line per node.
pub(crate) fn fmt_adjacency<G, T>(graph: &T, f: &mut Formatter<'_>) -> fmt::Result
where
    G: Sortable + Display,
    T: Graph<G> + ?Sized,
{
    for (i, node) in graph.nodes().iter().enumerate() {
        writeln!(f, "{i}: {node} => [{}]", join_display(graph.neighbors(node), ", "))?;
    }
    Ok(())
}
