//! Vectors.
//!
//! Unlike the matrices these are just a thin wrapper around a `Vec<T>`. The
//! wrapper exists so that the unknown and constant vectors of a
//! [`LinearSystem`](crate::linear_system::LinearSystem) have their own type
//! with arithmetic and a TeX representation (see [`crate::tex`]).

use std::fmt::Debug;
use std::ops::Index;

use num_traits::Num;

/// An owned vector.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Vector<T> {
    entries: Vec<T>,
}

impl<T> Vector<T> {
    /// Creates a vector from its entries.
    pub fn from_entries<U: Into<T>, I: IntoIterator<Item = U>>(
        entries: I,
    ) -> Self {
        Self { entries: entries.into_iter().map(Into::into).collect() }
    }

    /// Creates a vector of dimension `dim` from an iterator.
    ///
    /// Panics if the iterator yields fewer than `dim` elements.
    pub fn from_iter<I: Iterator<Item = T>>(dim: usize, iter: I) -> Self {
        let entries: Vec<_> = iter.take(dim).collect();
        assert_eq!(entries.len(), dim, "Iterator did not yield enough elements.");
        Self { entries }
    }

    /// The dimension (number of entries) of the vector.
    pub fn dim(&self) -> usize {
        self.entries.len()
    }

    /// Returns the entries as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T: Copy + Num> Vector<T> {
    /// The dot product with a slice of the same length, e.g. a row of a
    /// [`Matrix`](crate::matrix::Matrix).
    pub fn dot(&self, other: &[T]) -> T {
        debug_assert_eq!(self.dim(), other.len());
        self.entries
            .iter()
            .zip(other)
            .fold(T::zero(), |acc, (&l, &r)| acc + l * r)
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq, const D: usize> PartialEq<[T; D]> for Vector<T> {
    fn eq(&self, other: &[T; D]) -> bool {
        self.entries.as_slice() == other.as_slice()
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dot() {
        let a = Vector::<i64>::from_entries([1, -2, 3]);
        assert_eq!(a.dot(&[4, 5, -6]), 4 - 10 - 18);
        assert_eq!(Vector::<i64>::from_iter(0, std::iter::empty()).dot(&[]), 0);
    }

    #[test]
    fn index() {
        let v = Vector::<i64>::from_entries([7, 8]);
        assert_eq!(v[0], 7);
        assert_eq!(v[1], 8);
        assert_eq!(v, [7, 8]);
        assert_eq!(v.dim(), 2);
    }
}
