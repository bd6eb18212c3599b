//! Helpers over plain slices.
//!
//! Note the two different empty-slice policies: [`last`] panics like indexing would, while
//! [`first`] returns [`None`].


/// Returns the last element of `items`.
///
/// # Panics
/// Panics if `items` is empty.
pub fn last<T>(items: &[T]) -> &T {
    match items.last() {
        Some(item) => item,
        None => panic!("Can't take the last element of an empty slice!"),
    }
}

/// Returns the first element of `items`, or None if it is empty.
pub const fn first<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// Returns true if `index` doesn't refer to an element of `items`.
pub const fn out_of_bounds<T>(items: &[T], index: usize) -> bool {
    index >= items.len()
}

/// Compares two slices that are sorted by the same order element-wise, without the `O(n * m)`
/// search needed for unordered slices.
pub fn sorted_equals_by<T>(a: &[T], b: &[T], mut eq: impl FnMut(&T, &T) -> bool) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| eq(x, y))
}

/// Returns true if every element of `wanted` has an equal element in `items`.
pub fn contains_all_by<T>(items: &[T], wanted: &[T], mut eq: impl FnMut(&T, &T) -> bool) -> bool {
    wanted.iter().all(|w| items.iter().any(|i| eq(i, w)))
}
