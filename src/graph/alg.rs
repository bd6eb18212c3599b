use tracing::trace;

use super::{Graph, UndirectedGraph};
use crate::sets::{OrderedSet, SortableSet};
use crate::sortable::Sortable;

/// Returns true if the graph contains a cycle.
///
/// Runs a depth first search from every unvisited node, keeping the nodes on the current path in
/// a recursion stack. A self-loop is a cycle, as is reaching a node that is still on the stack.
/// In an undirected graph the node the search just came from is exempt, so a single edge `a - b`
/// isn't reported as the cycle `a -> b -> a`.
pub fn is_cyclic<G, T>(graph: &T) -> bool
where
    G: Sortable,
    T: Graph<G> + ?Sized,
{
    let mut search = CycleSearch {
        graph,
        visited: SortableSet::new(),
        stack: SortableSet::new(),
    };

    graph
        .nodes()
        .iter()
        .any(|node| !search.visited.has(&node) && search.visit(node, None))
}

/// Returns true if the graph contains no cycle.
pub fn is_acyclic<G, T>(graph: &T) -> bool
where
    G: Sortable,
    T: Graph<G> + ?Sized,
{
    !is_cyclic(graph)
}

struct CycleSearch<'a, G: Sortable, T: ?Sized> {
    graph: &'a T,
    visited: SortableSet<&'a G>,
    stack: SortableSet<&'a G>,
}

impl<'a, G: Sortable, T: Graph<G> + ?Sized> CycleSearch<'a, G, T> {
    fn visit(&mut self, node: &'a G, parent: Option<&'a G>) -> bool {
        self.visited.add(node);
        self.stack.add(node);

        for neighbor in self.graph.neighbors(node) {
            if neighbor.equal(node) {
                trace!(node = %node.unique_key(), "self-loop found");
                return true;
            }

            if !self.visited.has(&neighbor) {
                if self.visit(neighbor, Some(node)) {
                    return true;
                }
            } else if self.stack.has(&neighbor) && !self.came_from(neighbor, parent) {
                trace!(
                    from = %node.unique_key(),
                    to = %neighbor.unique_key(),
                    "back edge found"
                );
                return true;
            }
        }

        self.stack.remove(&node);
        false
    }

    /// Whether `neighbor` is the node an undirected search arrived from.
    fn came_from(&self, neighbor: &G, parent: Option<&G>) -> bool {
        !self.graph.is_directed() && parent.is_some_and(|p| p.equal(neighbor))
    }
}

/// Returns true if every node of the graph can be reached from every other node. An empty graph
/// is connected.
pub fn is_connected<G: Sortable>(graph: &UndirectedGraph<G>) -> bool {
    let Some(start) = graph.nodes().first() else {
        return true;
    };

    let mut visited = OrderedSet::new();
    let mut pending = vec![start];
    while let Some(node) = pending.pop() {
        if visited.add(node.unique_key()) {
            pending.extend(graph.neighbors(node));
        }
    }

    trace!(
        visited = visited.len(),
        nodes = graph.node_count(),
        "connectivity checked"
    );
    visited.len() == graph.node_count()
}

/// Returns true if some pair of nodes has no path between them.
pub fn is_disconnected<G: Sortable>(graph: &UndirectedGraph<G>) -> bool {
    !is_connected(graph)
}

/// Returns the nodes reachable from `start` in depth first preorder, visiting neighbors in the
/// order they were added. Returns an empty list if `start` isn't in the graph.
pub fn depth_first<'a, G, T>(graph: &'a T, start: &'a G) -> Vec<&'a G>
where
    G: Sortable,
    T: Graph<G> + ?Sized,
{
    if !graph.has_node(start) {
        return Vec::new();
    }

    let mut order = Vec::new();
    let mut visited = OrderedSet::new();
    let mut pending = vec![start];
    while let Some(node) = pending.pop() {
        if visited.add(node.unique_key()) {
            order.push(node);
            pending.extend(graph.neighbors(node).iter().rev());
        }
    }
    order
}
