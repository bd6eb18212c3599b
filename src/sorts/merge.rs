use std::cmp::Ordering;

use super::{should_sort, Sort};
use crate::sortable::{Comparator, Natural, Sortable};

/// Merge sort: split at the midpoint, sort both halves, then merge them by repeatedly taking the
/// lesser head. Ties take the left head, which makes the sort stable.
///
/// Merging works on positions rather than values, so elements are only ever swapped and `T`
/// doesn't need to be [`Clone`].
///
/// # Time Complexity
/// | Case | Complexity |
/// |-|-|
/// | Best | `O(n log n)` |
/// | Worst | `O(n log n)` |
/// | Space | `O(n)` |
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeSort<C> {
    comparator: C,
}

impl<C> MergeSort<C> {
    pub const fn new(comparator: C) -> MergeSort<C> {
        MergeSort { comparator }
    }
}

impl<T, C: Comparator<T>> Sort<T> for MergeSort<C> {
    fn sort(&self, items: &mut [T]) {
        merge_sort(items, &self.comparator)
    }
}

/// Sorts [`Sortable`] items by their natural order with a stable merge sort.
pub fn merge_of<T: Sortable>(items: &mut [T]) {
    merge_sort(items, &Natural)
}

fn merge_sort<T, C: Comparator<T> + ?Sized>(items: &mut [T], comparator: &C) {
    if !should_sort(items) {
        return;
    }

    let mid = items.len() / 2;
    let (left, right) = items.split_at_mut(mid);
    merge_sort(left, comparator);
    merge_sort(right, comparator);

    let order = join(items, mid, comparator);
    permute(items, order);
}

/// Merges the sorted runs `items[..mid]` and `items[mid..]`, returning for each destination
/// position the index of the element that belongs there.
fn join<T, C: Comparator<T> + ?Sized>(items: &[T], mid: usize, comparator: &C) -> Vec<usize> {
    let mut order = Vec::with_capacity(items.len());
    let (mut i, mut j) = (0, mid);

    while i < mid && j < items.len() {
        // Only take from the right when it is strictly smaller.
        if comparator.compare(&items[j], &items[i]) == Ordering::Less {
            order.push(j);
            j += 1;
        } else {
            order.push(i);
            i += 1;
        }
    }

    order.extend(i..mid);
    order.extend(j..items.len());
    order
}

/// Rearranges `items` so that position `d` holds what was at `order[d]`, following each cycle of
/// the permutation with swaps.
fn permute<T>(items: &mut [T], order: Vec<usize>) {
    let mut placed = vec![false; order.len()];

    for start in 0..order.len() {
        if placed[start] {
            continue;
        }

        // The element originally at `start` travels along the cycle until its destination.
        let mut dest = start;
        loop {
            placed[dest] = true;
            let src = order[dest];
            if src == start {
                break;
            }
            items.swap(dest, src);
            dest = src;
        }
    }
}
