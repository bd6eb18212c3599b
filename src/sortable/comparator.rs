use std::cmp::Ordering;

use super::Sortable;

/// A three-way comparison over `T`, used by the sorters and searches that take an explicit order.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a Comparator, so [`Ord::cmp`] can be passed directly.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    fn equals(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for F {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders [`Sortable`] values by their own `less` / `equal`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T: Sortable + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if a.less(b) {
            Ordering::Less
        } else if b.less(a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn equals(&self, a: &T, b: &T) -> bool {
        a.equal(b)
    }
}

/// Inverts the wrapped comparator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
