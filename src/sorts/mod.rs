//! In-place sorting algorithms sharing the [`Sort`] contract.
//!
//! Each algorithm comes in two shapes: a sorter struct driven by a
//! [`Comparator`](crate::sortable::Comparator) and a free function sorting
//! [`Sortable`](crate::sortable::Sortable) items by their natural order.
//!
//! | Algorithm | Stable | Best | Worst | Extra space |
//! |-|-|-|-|-|
//! | [`Quicksort`] | no | `O(n log n)` | `O(n^2)` | `O(log n)` |
//! | [`MergeSort`] | yes | `O(n log n)` | `O(n log n)` | `O(n)` |
//! | [`BinarySort`] | yes | `O(n log n)` | `O(n^2)` | `O(1)` |

mod binary;
mod merge;
mod quick;

pub use binary::*;
pub use merge::*;
pub use quick::*;

/// Sorts a sequence in place, ascending.
pub trait Sort<T> {
    fn sort(&self, items: &mut [T]);
}

/// Sorts `items` with the provided `sorter`.
pub fn sort_with<T, S: Sort<T> + ?Sized>(items: &mut [T], sorter: &S) {
    sorter.sort(items)
}

const fn should_sort<T>(items: &[T]) -> bool {
    items.len() > 1
}
