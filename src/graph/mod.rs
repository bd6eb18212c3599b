//! A module containing directed, undirected and weighted graphs over [`Sortable`] nodes, the
//! edges they produce and the algorithms that traverse them.
//!
//! Every graph stores an adjacency list in a [`SortableMap`](crate::maps::SortableMap), so
//! [`Graph::nodes`] is always in ascending order. Edges may only join nodes that are already in
//! the graph: [`EdgeGraph::add_edge`] silently drops anything else, while
//! [`EdgeGraph::try_add_edge`] reports it as a [`MissingNode`].
//!
//! [`Sortable`]: crate::sortable::Sortable

mod alg;
mod directed;
mod edge;
mod error;
mod graph;
mod undirected;
mod weighted;
mod tests;

pub use alg::*;
pub use directed::*;
pub use edge::*;
pub use error::*;
pub use graph::*;
pub use undirected::*;
pub use weighted::*;
