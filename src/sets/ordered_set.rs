use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};
use std::hash::Hash;
use std::slice;
use std::vec;

use super::Set;
use crate::arrays;
use crate::search;
use crate::sorts::{MergeSort, Sort};
use crate::util::fmt::join_display;

/// A set of [`Ord`] items kept in ascending order, with a [`HashSet`] index for membership.
///
/// Each element is stored twice (once in the order, once in the index), hence the [`Clone`]
/// bound.
///
/// See [`SortableSet`](super::SortableSet) for time complexities, which are the same.
#[derive(Debug, Clone)]
pub struct OrderedSet<T: Ord + Hash + Clone> {
    pub(crate) items: Vec<T>,
    pub(crate) index: HashSet<T>,
}

impl<T: Ord + Hash + Clone> OrderedSet<T> {
    pub fn new() -> OrderedSet<T> {
        OrderedSet {
            items: Vec::new(),
            index: HashSet::new(),
        }
    }

    pub fn with_cap(cap: usize) -> OrderedSet<T> {
        OrderedSet {
            items: Vec::with_capacity(cap),
            index: HashSet::with_capacity(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has(&self, item: &T) -> bool {
        self.index.contains(item)
    }

    /// Inserts `item` at its sorted position, returning false if it was already present.
    pub fn add(&mut self, item: T) -> bool {
        if self.index.contains(&item) {
            return false;
        }

        let pos = search::binary(&self.items, &item);
        self.index.insert(item.clone());
        self.items.insert(pos, item);
        true
    }

    pub fn remove(&mut self, item: &T) -> Option<T> {
        if !self.index.remove(item) {
            return None;
        }

        // Ord is total and the item is present, so the lower bound is its position.
        let pos = search::binary(&self.items, item);
        Some(self.items.remove(pos))
    }

    /// Returns the items in ascending order.
    pub fn values(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, i: usize) -> Option<&T> {
        if arrays::out_of_bounds(&self.items, i) {
            return None;
        }
        Some(&self.items[i])
    }

    /// Removes and returns the item at position `i`, or None if `i` is out of bounds.
    pub fn exclude(&mut self, i: usize) -> Option<T> {
        if arrays::out_of_bounds(&self.items, i) {
            return None;
        }
        let removed = self.items.remove(i);
        self.index.remove(&removed);
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Ord + Hash + Clone> Set<T> for OrderedSet<T> {
    fn has(&self, item: &T) -> bool {
        OrderedSet::has(self, item)
    }

    fn add(&mut self, item: T) -> bool {
        OrderedSet::add(self, item)
    }

    fn remove(&mut self, item: &T) -> Option<T> {
        OrderedSet::remove(self, item)
    }

    fn len(&self) -> usize {
        OrderedSet::len(self)
    }

    fn values(&self) -> &[T] {
        OrderedSet::values(self)
    }

    fn clear(&mut self) {
        OrderedSet::clear(self)
    }
}

impl<T: Ord + Hash + Clone> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Hash + Clone> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values: Vec<T> = iter.into_iter().collect();
        MergeSort::new(T::cmp).sort(&mut values);

        let mut set = OrderedSet::with_cap(values.len());
        for value in values {
            if set.index.insert(value.clone()) {
                set.items.push(value);
            }
        }
        set
    }
}

impl<T: Ord + Hash + Clone> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Ord + Hash + Clone> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Ord + Hash + Clone> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Ord + Hash + Clone> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Ord + Hash + Clone> Eq for OrderedSet<T> {}

impl<T: Ord + Hash + Clone + Display> Display for OrderedSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{{{}}}", join_display(&self.items, ", "))
    }
}
