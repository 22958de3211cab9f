// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Iterator support for [`SimpleVector`].
//!
//! - `&SimpleVector` and `&mut SimpleVector` iterate as slices.
//! - [`IntoIter`] yields by value and supports double-ended iteration.
//! - `FromIterator` builds a vector with `capacity() == len()`.
//! - `Extend` grows with the usual doubling policy.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::simple_vector::SimpleVector;

/// Owned iterator returned by `SimpleVector::into_iter()`.
///
/// Spare slots past `len()` are dropped when the iterator is created.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        self.inner.nth(n)
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();

        let wanted = self.len().saturating_add(lower);
        if wanted > self.capacity() {
            self.reserve(wanted.max(self.capacity().saturating_mul(2)));
        }

        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
