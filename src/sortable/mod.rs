//! The ordering capability every container and graph in this crate is generic over.
//!
//! A [`Sortable`] type can compare itself to another value of the same type (`equal`, `less`) and
//! produce a stable [`unique`](Sortable::unique) identity. The identity is what the ordered
//! containers use as their hash index key, so two distinct instances holding the same logical
//! value are treated as the same entry.
//!
//! [`Comparator`]s provide the three-way comparison used by the sort and search algorithms when
//! the natural order isn't wanted.
//!
//! [`DynSortable`] lets differently typed sortables share one container behind
//! `Box<dyn DynSortable>`. Comparing two values of different concrete types is a programmer error
//! and panics with [`IncompatibleTypes`].

mod comparator;
mod dyn_sortable;
mod error;
mod sortable;
mod tests;

pub use comparator::*;
pub use dyn_sortable::*;
pub use error::*;
pub use sortable::*;
