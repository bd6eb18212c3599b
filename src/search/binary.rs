use crate::search::Search;
use crate::sortable::{Comparator, Sortable};
use std::cmp::Ordering;

/// Binary search driven by a [`Comparator`].
///
/// # Time Complexity
/// | Case | Complexity |
/// |-|-|
/// | Best | `O(log n)` |
/// | Worst | `O(log n)` |
/// | Space | `O(1)` |
#[derive(Debug, Default, Clone, Copy)]
pub struct BinarySearch<C> {
    comparator: C,
}

impl<C> BinarySearch<C> {
    pub const fn new(comparator: C) -> BinarySearch<C> {
        BinarySearch { comparator }
    }
}

impl<T, C: Comparator<T>> Search<T> for BinarySearch<C> {
    fn search(&self, items: &[T], key: &T) -> usize {
        lower_bound_by(items, key, &self.comparator)
    }
}

/// Returns the index of the first element of `items` that isn't less than `key`, or
/// `items.len()` if every element is.
pub fn lower_bound_by<T, C: Comparator<T> + ?Sized>(items: &[T], key: &T, comparator: &C) -> usize {
    partition_point(items, |item| comparator.compare(item, key) == Ordering::Less)
}

/// Returns the index of the first element of `items` that is greater than `key`, or
/// `items.len()` if there is none. Inserting there places `key` after any equal elements.
pub fn upper_bound_by<T, C: Comparator<T> + ?Sized>(items: &[T], key: &T, comparator: &C) -> usize {
    partition_point(items, |item| comparator.compare(item, key) != Ordering::Greater)
}

/// Lower bound over [`Sortable`] items using their own `less`.
pub fn binary_of<T: Sortable>(items: &[T], key: &T) -> usize {
    partition_point(items, |item| item.less(key))
}

/// Lower bound over [`Ord`] items.
pub fn binary<T: Ord>(items: &[T], key: &T) -> usize {
    partition_point(items, |item| item < key)
}

/// Returns the first index for which `is_before` is false, assuming `items` is partitioned so
/// that all elements satisfying it come first.
fn partition_point<T>(items: &[T], mut is_before: impl FnMut(&T) -> bool) -> usize {
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        // Can't overflow: both bounds are at most items.len().
        let mid = low + (high - low) / 2;

        if is_before(&items[mid]) {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    low
}
