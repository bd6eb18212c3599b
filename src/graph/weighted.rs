use std::fmt::{self, Display, Formatter};

use super::{Graph, MissingNode, WeightedEdge, WeightedEdgeGraph};
use crate::maps::SortableMap;
use crate::sets::SortableSet;
use crate::sortable::Sortable;

/// A directed graph whose edges carry a weight of type `W`. Each node maps its neighbors to the
/// weight of the edge leading there, so there is at most one edge per ordered pair of nodes.
#[derive(Debug, Clone)]
pub struct WeightedGraph<G: Sortable, W> {
    pub(crate) adj: SortableMap<G, SortableMap<G, W>>,
}

impl<G: Sortable, W> WeightedGraph<G, W> {
    pub fn new() -> WeightedGraph<G, W> {
        WeightedGraph {
            adj: SortableMap::new(),
        }
    }
}

impl<G: Sortable, W> Graph<G> for WeightedGraph<G, W> {
    fn add_node(&mut self, node: G) {
        if !self.adj.contains(&node) {
            self.adj.put(node, SortableMap::new());
        }
    }

    fn has_node(&self, node: &G) -> bool {
        self.adj.contains(node)
    }

    fn has_edge(&self, from: &G, to: &G) -> bool {
        self.adj.get(from).is_some_and(|tos| tos.contains(to))
    }

    fn nodes(&self) -> &[G] {
        self.adj.keys()
    }

    fn neighbors(&self, node: &G) -> &[G] {
        self.adj.get(node).map(SortableMap::keys).unwrap_or_default()
    }

    fn is_directed(&self) -> bool {
        true
    }
}

impl<G: Sortable + Clone, W: Clone> WeightedEdgeGraph<G, W> for WeightedGraph<G, W> {
    fn try_add_edge(&mut self, from: G, to: G, weight: W) -> Result<(), MissingNode> {
        MissingNode::check(self.has_node(&from), self.has_node(&to))?;
        if let Some(tos) = self.adj.get_mut(&from) {
            tos.put(to, weight);
        }
        Ok(())
    }

    fn weight(&self, from: &G, to: &G) -> Option<&W> {
        self.adj.get(from)?.get(to)
    }

    fn edges(&self) -> Vec<WeightedEdge<G, W>> {
        let mut edges = SortableSet::new();
        for (from, tos) in &self.adj {
            for (to, weight) in tos {
                edges.add(WeightedEdge::new(from.clone(), to.clone(), weight.clone()));
            }
        }
        edges.into_values()
    }
}

impl<G: Sortable, W> Default for WeightedGraph<G, W> {
    fn default() -> Self {
        Self::new()
    }
}

/// One `{position}: {node} => [{neighbor}: {weight}, ...]` line per node.
impl<G: Sortable + Display, W: Display> Display for WeightedGraph<G, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, (node, tos)) in self.adj.iter().enumerate() {
            let weights: Vec<String> = tos.iter().map(|(to, w)| format!("{to}: {w}")).collect();
            writeln!(f, "{i}: {node} => [{}]", weights.join(", "))?;
        }
        Ok(())
    }
}
