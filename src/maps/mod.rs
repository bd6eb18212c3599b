//! A module containing [`SortableMap`] and associated types.
//!
//! The map keeps its keys sorted, so iteration order is the keys' natural order unless a
//! [`MapIterator`] is built with another comparator.

mod iter;
mod sortable_map;

pub use iter::*;
pub use sortable_map::*;
