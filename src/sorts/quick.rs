use std::cmp::Ordering;
use std::mem;

use super::{should_sort, Sort};
use crate::sortable::{Comparator, Natural, Sortable};

/// Which element of a partition becomes the pivot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Pivot {
    /// The last element. Degrades to `O(n^2)` on already sorted input.
    #[default]
    Last,
    /// The middle element, which behaves better on sorted and reverse-sorted input.
    Middle,
}

/// Quicksort is a divide-and-conquer sort: partition around a pivot so that smaller elements
/// come first, then sort both sides.
///
/// Partitioning is Lomuto-style. Not stable.
///
/// # Time Complexity
/// | Case | Complexity |
/// |-|-|
/// | Best | `O(n log n)` |
/// | Average | `O(n log n)` |
/// | Worst | `O(n^2)` |
/// | Space | `O(log n)`* |
///
/// \* Recursion only descends into the smaller partition, the larger one is handled by looping.
#[derive(Debug, Default, Clone, Copy)]
pub struct Quicksort<C> {
    comparator: C,
    pivot: Pivot,
}

impl<C> Quicksort<C> {
    /// Creates a Quicksort using the last element of each partition as pivot.
    pub const fn new(comparator: C) -> Quicksort<C> {
        Quicksort {
            comparator,
            pivot: Pivot::Last,
        }
    }

    pub const fn with_pivot(comparator: C, pivot: Pivot) -> Quicksort<C> {
        Quicksort { comparator, pivot }
    }

    pub const fn pivot(&self) -> Pivot {
        self.pivot
    }
}

impl<T, C: Comparator<T>> Sort<T> for Quicksort<C> {
    fn sort(&self, items: &mut [T]) {
        quick(items, &self.comparator, self.pivot)
    }
}

/// Sorts [`Sortable`] items by their natural order, using the middle element as pivot.
pub fn quick_of<T: Sortable>(items: &mut [T]) {
    quick(items, &Natural, Pivot::Middle)
}

fn quick<T, C: Comparator<T> + ?Sized>(mut items: &mut [T], comparator: &C, pivot: Pivot) {
    while should_sort(items) {
        let split = partition(items, comparator, pivot);

        let (left, rest) = mem::take(&mut items).split_at_mut(split);
        // Skip the pivot, it is already in place.
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick(left, comparator, pivot);
            items = right;
        } else {
            quick(right, comparator, pivot);
            items = left;
        }
    }
}

/// Partitions `items` around the chosen pivot and returns the pivot's final index. Everything
/// before it compares less than the pivot, everything after doesn't.
fn partition<T, C: Comparator<T> + ?Sized>(items: &mut [T], comparator: &C, pivot: Pivot) -> usize {
    let last = items.len() - 1;

    if pivot == Pivot::Middle {
        items.swap(items.len() / 2, last);
    }

    let mut store = 0;
    for i in 0..last {
        if comparator.compare(&items[i], &items[last]) == Ordering::Less {
            items.swap(i, store);
            store += 1;
        }
    }

    items.swap(store, last);
    store
}
