use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

use crate::sortable::Sortable;

/// An immutable edge between two nodes.
///
/// An edge's identity is the string `"{from} -> {to}"` when directed or `"{from} <-> {to}"` when
/// undirected, built from the nodes' [`unique_key`](Sortable::unique_key)s, and edges sort by
/// that identity. Undirected edges are stored with the lesser node first, ties broken by unique
/// key, so `(a, b)` and `(b, a)` are the same edge.
#[derive(Debug, Clone)]
pub struct Edge<G: Sortable> {
    from: G,
    to: G,
    directed: bool,
}

impl<G: Sortable> Edge<G> {
    pub const fn directed(from: G, to: G) -> Edge<G> {
        Edge {
            from,
            to,
            directed: true,
        }
    }

    pub fn undirected(a: G, b: G) -> Edge<G> {
        let swap = b.less(&a) || (!a.less(&b) && b.unique_key() < a.unique_key());
        let (from, to) = if swap { (b, a) } else { (a, b) };
        Edge {
            from,
            to,
            directed: false,
        }
    }

    pub const fn from(&self) -> &G {
        &self.from
    }

    pub const fn to(&self) -> &G {
        &self.to
    }

    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the edge's identity string.
    pub fn label(&self) -> String {
        let arrow = if self.directed { "->" } else { "<->" };
        format!("{} {arrow} {}", self.from.unique_key(), self.to.unique_key())
    }

    pub fn into_nodes(self) -> (G, G) {
        (self.from, self.to)
    }
}

impl<G: Sortable> Sortable for Edge<G> {
    fn equal(&self, other: &Self) -> bool {
        self.directed == other.directed && self.from.equal(&other.from) && self.to.equal(&other.to)
    }

    fn less(&self, other: &Self) -> bool {
        self.label() < other.label()
    }

    fn unique(&self) -> Cow<'_, [u8]> {
        Cow::Owned(self.label().into_bytes())
    }

    fn unique_key(&self) -> String {
        self.label()
    }
}

impl<G: Sortable> PartialEq for Edge<G> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<G: Sortable> Display for Edge<G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An immutable directed edge carrying a weight.
///
/// The identity is `"{from} -> {to}"`; the weight takes no part in equality or ordering.
#[derive(Debug, Clone)]
pub struct WeightedEdge<G: Sortable, W> {
    from: G,
    to: G,
    weight: W,
}

impl<G: Sortable, W> WeightedEdge<G, W> {
    pub const fn new(from: G, to: G, weight: W) -> WeightedEdge<G, W> {
        WeightedEdge { from, to, weight }
    }

    pub const fn from(&self) -> &G {
        &self.from
    }

    pub const fn to(&self) -> &G {
        &self.to
    }

    pub const fn weight(&self) -> &W {
        &self.weight
    }

    pub fn label(&self) -> String {
        format!("{} -> {}", self.from.unique_key(), self.to.unique_key())
    }

    pub fn into_parts(self) -> (G, G, W) {
        (self.from, self.to, self.weight)
    }
}

impl<G: Sortable, W> Sortable for WeightedEdge<G, W> {
    fn equal(&self, other: &Self) -> bool {
        self.from.equal(&other.from) && self.to.equal(&other.to)
    }

    fn less(&self, other: &Self) -> bool {
        self.label() < other.label()
    }

    fn unique(&self) -> Cow<'_, [u8]> {
        Cow::Owned(self.label().into_bytes())
    }

    fn unique_key(&self) -> String {
        self.label()
    }
}

impl<G: Sortable, W: PartialEq> PartialEq for WeightedEdge<G, W> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other) && self.weight == other.weight
    }
}

impl<G: Sortable, W: Display> Display for WeightedEdge<G, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.weight)
    }
}
