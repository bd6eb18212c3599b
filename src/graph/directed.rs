use std::fmt::{self, Display, Formatter};

use super::{fmt_adjacency, Edge, EdgeGraph, Graph, MissingNode};
use crate::maps::SortableMap;
use crate::sets::SortableSet;
use crate::sortable::Sortable;

/// A directed graph stored as an adjacency list.
///
/// Adding the same edge twice records the neighbor twice, [`edges`](EdgeGraph::edges) still
/// lists it once.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of nodes in the graph.
/// - `d`: The out-degree of the node in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `add_node` | `O(n)` |
/// | `add_edge` | `O(1)`* |
/// | `has_node` | `O(1)`* |
/// | `has_edge` | `O(d)` |
/// | `neighbors` | `O(1)`* |
///
/// \* Hashing the unique key is linear in its length.
#[derive(Debug, Clone)]
pub struct DirectedGraph<G: Sortable> {
    pub(crate) adj: SortableMap<G, Vec<G>>,
}

impl<G: Sortable> DirectedGraph<G> {
    pub fn new() -> DirectedGraph<G> {
        DirectedGraph {
            adj: SortableMap::new(),
        }
    }
}

impl<G: Sortable> Graph<G> for DirectedGraph<G> {
    fn add_node(&mut self, node: G) {
        if !self.adj.contains(&node) {
            self.adj.put(node, Vec::new());
        }
    }

    fn has_node(&self, node: &G) -> bool {
        self.adj.contains(node)
    }

    fn has_edge(&self, from: &G, to: &G) -> bool {
        self.neighbors(from).iter().any(|n| n.equal(to))
    }

    fn nodes(&self) -> &[G] {
        self.adj.keys()
    }

    fn neighbors(&self, node: &G) -> &[G] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    fn is_directed(&self) -> bool {
        true
    }
}

impl<G: Sortable + Clone> EdgeGraph<G> for DirectedGraph<G> {
    fn try_add_edge(&mut self, from: G, to: G) -> Result<(), MissingNode> {
        MissingNode::check(self.has_node(&from), self.has_node(&to))?;
        if let Some(neighbors) = self.adj.get_mut(&from) {
            neighbors.push(to);
        }
        Ok(())
    }

    fn edges(&self) -> Vec<Edge<G>> {
        let mut edges = SortableSet::new();
        for (from, neighbors) in &self.adj {
            for to in neighbors {
                edges.add(Edge::directed(from.clone(), to.clone()));
            }
        }
        edges.into_values()
    }
}

impl<G: Sortable> Default for DirectedGraph<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Sortable + Display> Display for DirectedGraph<G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_adjacency(self, f)
    }
}
