use super::{should_sort, Sort};
use crate::search::upper_bound_by;
use crate::sortable::{Comparator, Natural, Sortable};

/// Binary insertion sort: a variation of insertion sort using binary search to find where each
/// element goes in the already sorted prefix.
///
/// Elements are inserted after any equal elements, which keeps the sort stable.
///
/// # Time Complexity
/// | Case | Complexity |
/// |-|-|
/// | Best | `O(n log n)` |
/// | Average | `O(n^2)` |
/// | Worst | `O(n^2)` |
/// | Space | `O(1)` |
///
/// The quadratic cases come from shifting, the number of comparisons is always `O(n log n)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BinarySort<C> {
    comparator: C,
}

impl<C> BinarySort<C> {
    pub const fn new(comparator: C) -> BinarySort<C> {
        BinarySort { comparator }
    }
}

impl<T, C: Comparator<T>> Sort<T> for BinarySort<C> {
    fn sort(&self, items: &mut [T]) {
        binary_insertion(items, &self.comparator)
    }
}

/// Sorts [`Sortable`] items by their natural order with a stable binary insertion sort.
pub fn binary_of<T: Sortable>(items: &mut [T]) {
    binary_insertion(items, &Natural)
}

fn binary_insertion<T, C: Comparator<T> + ?Sized>(items: &mut [T], comparator: &C) {
    if !should_sort(items) {
        return;
    }

    for i in 1..items.len() {
        let (sorted, rest) = items.split_at(i);
        let pos = upper_bound_by(sorted, &rest[0], comparator);

        // Already in place, nothing to shift.
        if pos == i {
            continue;
        }

        items[pos..=i].rotate_right(1);
    }
}
