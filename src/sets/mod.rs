//! Sets which keep their elements sorted.
//!
//! Both sets pair a sorted [`Vec`] with a hash index: the Vec gives ordered iteration and binary
//! search, the index gives `O(1)` membership. The index always holds exactly the elements of the
//! Vec, and the Vec is always sorted between calls.
//!
//! - [`SortableSet`] orders by [`Sortable`](crate::sortable::Sortable) and indexes by the
//!   elements' unique keys.
//! - [`OrderedSet`] is the same structure for plain [`Ord`] + [`Hash`](std::hash::Hash) types.
//!
//! The [`Set`] trait provides set comparisons and borrowed iterators over set operations which
//! work between any two sets, regardless of their concrete types.

mod ordered_set;
mod set;
mod sortable_set;

pub use ordered_set::*;
pub use set::*;
pub use sortable_set::*;
