//! Generic ordered containers and graphs built on a single ordering capability.
//!
//! # Overview
//! Everything in this crate is generic over [`Sortable`](sortable::Sortable): a type that can
//! say whether two values are equal, whether one sorts before the other, and which bytes identify
//! it. From that alone the crate builds:
//! - [`sorts`] and [`search`]: quicksort, merge sort, binary insertion sort and lower bound binary
//!   search, all in place and all driven by a [`Comparator`](sortable::Comparator).
//! - [`sets`] and [`maps`]: containers that keep their items sorted in a [`Vec`] while indexing
//!   them by identity, so membership is a hash lookup and iteration is always ordered.
//! - [`graph`]: directed, undirected and weighted graphs stored as adjacency lists in a
//!   [`SortableMap`](maps::SortableMap), with cycle detection, connectivity and depth first
//!   traversal.
//!
//! # Error Handling
//! Comparing two type-erased sortables of different concrete types is a bug in the caller and
//! panics with an [`IncompatibleTypes`](sortable::IncompatibleTypes) message. Lookups that can
//! come up empty return an [`Option`], except [`arrays::last`] which panics like indexing does.
//! Adding an edge to a missing node is silently dropped by `add_edge` and reported as a
//! [`MissingNode`](graph::MissingNode) by `try_add_edge`.
//!
//! # Logging
//! The crate emits [`tracing`] events at `debug` and `trace` level and never installs a
//! subscriber.
//!
//! # Features
//! Each module sits behind a feature of the same name, with `graph` (and so everything else)
//! enabled by default.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "arrays")]
pub mod arrays;
#[cfg(feature = "graph")]
pub mod graph;
#[cfg(feature = "maps")]
pub mod maps;
#[cfg(feature = "search")]
pub mod search;
#[cfg(feature = "sets")]
pub mod sets;
#[cfg(feature = "sortable")]
pub mod sortable;
#[cfg(feature = "sorts")]
pub mod sorts;

pub(crate) mod util;
