//! Searches over sorted sequences.
//!
//! Every search here uses lower-bound semantics: the result is the position at which the key
//! could be inserted while keeping the sequence sorted, never a "not found" sentinel. Whether
//! the key is actually present is for the caller to decide (the ordered containers use their
//! hash index for that).

mod binary;

pub use binary::*;

/// A search strategy returning an insertion position for `key` in the sorted `items`.
pub trait Search<T> {
    fn search(&self, items: &[T], key: &T) -> usize;
}
