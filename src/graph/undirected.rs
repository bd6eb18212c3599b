use std::fmt::{self, Display, Formatter};

use super::{fmt_adjacency, Edge, EdgeGraph, Graph, MissingNode};
use crate::maps::SortableMap;
use crate::sets::SortableSet;
use crate::sortable::Sortable;

/// An undirected graph stored as an adjacency list. Every edge is recorded in the neighbor lists
/// of both of its nodes, a self-loop only once.
///
/// See [`DirectedGraph`](super::DirectedGraph) for the cost of each operation.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<G: Sortable> {
    pub(crate) adj: SortableMap<G, Vec<G>>,
}

impl<G: Sortable> UndirectedGraph<G> {
    pub fn new() -> UndirectedGraph<G> {
        UndirectedGraph {
            adj: SortableMap::new(),
        }
    }
}

impl<G: Sortable> Graph<G> for UndirectedGraph<G> {
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
        false
    }
}

impl<G: Sortable + Clone> EdgeGraph<G> for UndirectedGraph<G> {
    fn try_add_edge(&mut self, from: G, to: G) -> Result<(), MissingNode> {
        MissingNode::check(self.has_node(&from), self.has_node(&to))?;
        if !from.equal(&to) {
            if let Some(neighbors) = self.adj.get_mut(&to) {
                neighbors.push(from.clone());
            }
        }
        if let Some(neighbors) = self.adj.get_mut(&from) {
            neighbors.push(to);
        }
        Ok(())
    }

    fn edges(&self) -> Vec<Edge<G>> {
        let mut edges = SortableSet::new();
        for (node, neighbors) in &self.adj {
            for neighbor in neighbors {
                edges.add(Edge::undirected(node.clone(), neighbor.clone()));
            }
        }
        edges.into_values()
    }
}

impl<G: Sortable> Default for UndirectedGraph<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Sortable + Display> Display for UndirectedGraph<G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_adjacency(self, f)
    }
}
