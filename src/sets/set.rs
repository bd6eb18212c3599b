use std::iter::{Chain, FusedIterator};
use std::slice;

/// The operations shared by this crate's sorted sets.
pub trait Set<T> {
    /// Returns true if the set contains an element equal to `item`.
    fn has(&self, item: &T) -> bool;

    /// Adds `item` to the set, returning false if an equal element was already present (in which
    /// case the set is unchanged).
    fn add(&mut self, item: T) -> bool;

    /// Removes the element equal to `item`, returning it if it was present.
    fn remove(&mut self, item: &T) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the elements of the set in ascending order.
    fn values(&self) -> &[T];

    /// Removes all elements.
    fn clear(&mut self);

    /// Returns true if both sets hold the same elements, whatever their concrete types.
    ///
    /// Sets of the same type also implement [`PartialEq`], which compares the sorted storage
    /// directly.
    fn equals<S: Set<T>>(&self, other: &S) -> bool
    where
        Self: Sized,
    {
        self.len() == other.len() && self.is_superset(other)
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    fn is_subset<S: Set<T>>(&self, other: &S) -> bool
    where
        Self: Sized,
    {
        other.is_superset(self)
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    fn is_superset<S: Set<T>>(&self, other: &S) -> bool
    where
        Self: Sized,
    {
        other.values().iter().all(|item| self.has(item))
    }

    /// Creates a borrowed iterator over all items that are in `self` but not `other`.
    /// (`self \ other`)
    fn difference<'a, S: Set<T>>(&'a self, other: &'a S) -> Difference<'a, T, S>
    where
        Self: Sized,
    {
        Difference {
            inner: self.values().iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in `self` or `other` but not both.
    /// (`self △ other`)
    fn symmetric_difference<'a, S: Set<T>>(
        &'a self,
        other: &'a S,
    ) -> SymmetricDifference<'a, T, Self, S>
    where
        Self: Sized,
    {
        SymmetricDifference {
            inner: self.difference(other).chain(other.difference(self)),
        }
    }

    /// Creates a borrowed iterator over all items that are in both `self` and `other`.
    /// (`self ∩ other`)
    fn intersection<'a, S: Set<T>>(&'a self, other: &'a S) -> Intersection<'a, T, S>
    where
        Self: Sized,
    {
        Intersection {
            inner: self.values().iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in either `self` or `other`.
    /// (`self ∪ other`)
    fn union<'a, S: Set<T>>(&'a self, other: &'a S) -> Union<'a, T, Self>
    where
        Self: Sized,
    {
        Union {
            inner: self.values().iter().chain(other.difference(self)),
        }
    }
}

pub struct Difference<'a, T: 'a, S: Set<T>> {
    pub(crate) inner: slice::Iter<'a, T>,
    pub(crate) other: &'a S,
}

impl<'a, T: 'a, S: Set<T>> Iterator for Difference<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| !other.has(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, T: 'a, S: Set<T>> FusedIterator for Difference<'a, T, S> {}

pub struct SymmetricDifference<'a, T: 'a, A: Set<T>, B: Set<T>> {
    pub(crate) inner: Chain<Difference<'a, T, B>, Difference<'a, T, A>>,
}

impl<'a, T: 'a, A: Set<T>, B: Set<T>> Iterator for SymmetricDifference<'a, T, A, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: 'a, A: Set<T>, B: Set<T>> FusedIterator for SymmetricDifference<'a, T, A, B> {}

pub struct Intersection<'a, T: 'a, S: Set<T>> {
    pub(crate) inner: slice::Iter<'a, T>,
    pub(crate) other: &'a S,
}

impl<'a, T: 'a, S: Set<T>> Iterator for Intersection<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| other.has(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, T: 'a, S: Set<T>> FusedIterator for Intersection<'a, T, S> {}

pub struct Union<'a, T: 'a, A: Set<T>> {
    pub(crate) inner: Chain<slice::Iter<'a, T>, Difference<'a, T, A>>,
}

impl<'a, T: 'a, A: Set<T>> Iterator for Union<'a, T, A> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: 'a, A: Set<T>> FusedIterator for Union<'a, T, A> {}
