// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::{Deref, DerefMut, Index, IndexMut};

use crate::array_ptr::ArrayPtr;
use crate::error::SimpleVectorError;

/// Capacity request consumed by [`SimpleVector::from_proxy`] and
/// `From<ReserveProxy>`.
///
/// Build one with [`reserve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveProxy {
    /// Number of element slots to pre-allocate.
    pub capacity_to_reserve: usize,
}

/// Returns a [`ReserveProxy`] asking for `capacity_to_reserve` slots.
///
/// ```rust
/// use simple_vector::{reserve, SimpleVector};
///
/// let v: SimpleVector<u8> = reserve(16).into();
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 16);
/// ```
#[inline]
pub fn reserve(capacity_to_reserve: usize) -> ReserveProxy {
    ReserveProxy {
        capacity_to_reserve,
    }
}

/// Test behaviour for injecting failures in `SimpleVector` operations.
///
/// This is only available with the `test_utils` feature and lets callers
/// exercise their handling of [`SimpleVectorError::AllocFailed`].
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust,ignore
/// // test_utils feature required in dev-dependencies
/// use simple_vector::{SimpleVector, SimpleVectorBehaviour, SimpleVectorError};
///
/// let mut v: SimpleVector<u8> = SimpleVector::from([1, 2]);
/// v.change_behaviour(SimpleVectorBehaviour::FailAtAlloc);
///
/// assert!(matches!(
///     v.try_reserve(64),
///     Err(SimpleVectorError::AllocFailed { capacity: 64 })
/// ));
///
/// // Nothing changed
/// assert_eq!(v.as_slice(), &[1, 2]);
/// assert_eq!(v.capacity(), 2);
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SimpleVectorBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every fallible allocation fails with `AllocFailed`.
    FailAtAlloc,
}

/// A growable, contiguous array built on top of [`ArrayPtr`].
///
/// `SimpleVector` tracks its logical length (`len`) and its allocated
/// capacity separately. Slots in `[len, capacity)` are initialized but are not
/// part of the sequence; growing into them overwrites them.
///
/// # Growth
///
/// - [`push_back`](SimpleVector::push_back) / [`insert`](SimpleVector::insert)
///   on a full vector double the capacity (`0 → 1 → 2 → 4 …`).
/// - [`resize`](SimpleVector::resize) past the capacity grows to
///   `max(new_len, 2 * capacity)`.
/// - [`reserve`](SimpleVector::reserve) grows to exactly the requested capacity.
///
/// Every reallocation builds the complete replacement block first, moves the
/// live elements into it and only then drops the old block. Nothing ever
/// shrinks the allocation.
///
/// # Access
///
/// - `v[i]` panics when `i >= len()`. It is a contract violation, not an error.
/// - [`at`](SimpleVector::at) reports [`SimpleVectorError::OutOfRange`] instead.
///
/// # Removal and `Drop`
///
/// - [`erase`](SimpleVector::erase) drops the removed value immediately by
///   resetting the freed tail slot to `T::default()`.
/// - [`pop_back`](SimpleVector::pop_back) and [`clear`](SimpleVector::clear)
///   only shorten the length. Removed values stay alive in their slots until
///   they are overwritten or the vector is dropped.
///
/// # Example
///
/// ```rust
/// use simple_vector::{simple_vector, SimpleVector};
///
/// let mut v: SimpleVector<i32> = simple_vector![1, 2, 3];
/// v.push_back(4);
/// v.insert(0, 0);
///
/// assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4]);
/// assert_eq!(v.capacity(), 6);
/// assert!(v.at(5).is_err());
/// ```
pub struct SimpleVector<T> {
    items: ArrayPtr<T>,
    size: usize,
    capacity: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: SimpleVectorBehaviour,
}

impl<T> SimpleVector<T> {
    fn from_parts(items: ArrayPtr<T>, size: usize, capacity: usize) -> Self {
        debug_assert!(size <= capacity);
        debug_assert_eq!(items.len(), capacity);

        Self {
            items,
            size,
            capacity,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: SimpleVectorBehaviour::default(),
        }
    }

    fn from_boxed(items: Box<[T]>) -> Self {
        let len = items.len();
        Self::from_parts(ArrayPtr::from(items), len, len)
    }

    /// Moves the live elements into `new_items` and adopts it.
    ///
    /// `[0, split)` keeps its offsets and `[split, len)` moves up by `gap`
    /// slots. Every reallocation goes through here. The old block is dropped
    /// after the swap, holding only whatever was swapped out of `new_items`.
    fn adopt(&mut self, mut new_items: ArrayPtr<T>, new_capacity: usize, split: usize, gap: usize) {
        debug_assert!(split <= self.size);
        debug_assert!(new_capacity >= self.size + gap);

        let size = self.size;
        {
            let old = self.items.as_mut_slice();
            let new = new_items.as_mut_slice();

            new[..split].swap_with_slice(&mut old[..split]);
            new[split + gap..size + gap].swap_with_slice(&mut old[split..size]);
        }

        self.items.swap(&mut new_items);
        self.capacity = new_capacity;
    }

    #[cold]
    #[inline(never)]
    fn reallocate(&mut self, new_capacity: usize)
    where
        T: Default,
    {
        self.adopt(ArrayPtr::new(new_capacity), new_capacity, self.size, 0);
    }

    #[inline]
    fn grown_capacity(&self) -> usize {
        self.capacity.saturating_mul(2).max(1)
    }

    /// Creates an empty vector. No allocation is performed.
    pub fn new() -> Self {
        Self::from_parts(ArrayPtr::null(), 0, 0)
    }

    /// Creates a vector of `size` default values; `len() == capacity() == size`.
    pub fn with_size(size: usize) -> Self
    where
        T: Default,
    {
        Self::from_parts(ArrayPtr::new(size), size, size)
    }

    /// Creates an empty vector with exactly `capacity` pre-allocated slots.
    pub fn with_capacity(capacity: usize) -> Self
    where
        T: Default,
    {
        Self::from_parts(ArrayPtr::new(capacity), 0, capacity)
    }

    /// Creates an empty vector sized by a [`ReserveProxy`].
    pub fn from_proxy(proxy: ReserveProxy) -> Self
    where
        T: Default,
    {
        Self::with_capacity(proxy.capacity_to_reserve)
    }

    /// Creates a vector of `size` clones of `value`.
    pub fn from_elem(size: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut items = Vec::with_capacity(size);
        items.resize(size, value);

        Self::from_boxed(items.into_boxed_slice())
    }

    /// Takes the contents out of `self`, leaving it empty with no allocation.
    ///
    /// This is the move-assignment primitive: `dst = src.take()`.
    pub fn take(&mut self) -> Self {
        core::mem::replace(self, Self::new())
    }

    /// Returns the number of elements in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVectorError::OutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, SimpleVectorError> {
        if index >= self.size {
            return Err(SimpleVectorError::OutOfRange {
                index,
                len: self.size,
            });
        }

        Ok(&self.items[index])
    }

    /// Mutable counterpart of [`SimpleVector::at`].
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVectorError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SimpleVectorError> {
        if index >= self.size {
            return Err(SimpleVectorError::OutOfRange {
                index,
                len: self.size,
            });
        }

        Ok(&mut self.items[index])
    }

    /// Sets the length to zero. Capacity and storage are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Changes the length to `new_size`.
    ///
    /// New elements are `T::default()`. Shrinking never reallocates; growing
    /// past the capacity reallocates to `max(new_size, 2 * capacity)`.
    pub fn resize(&mut self, new_size: usize)
    where
        T: Default,
    {
        if new_size > self.capacity {
            // Fresh block: [size, new_size) already holds defaults.
            self.reallocate(new_size.max(self.capacity.saturating_mul(2)));
        } else if new_size > self.size {
            for slot in &mut self.items.as_mut_slice()[self.size..new_size] {
                *slot = T::default();
            }
        }

        self.size = new_size;
    }

    /// Grows the capacity to exactly `new_capacity`. No-op if it already fits.
    pub fn reserve(&mut self, new_capacity: usize)
    where
        T: Default,
    {
        if new_capacity <= self.capacity {
            return;
        }

        self.reallocate(new_capacity);
    }

    /// Fallible counterpart of [`SimpleVector::reserve`].
    ///
    /// # Errors
    ///
    /// Returns [`SimpleVectorError::CapacityOverflow`] or
    /// [`SimpleVectorError::AllocFailed`]. The vector is unchanged on error.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), SimpleVectorError>
    where
        T: Default,
    {
        if new_capacity <= self.capacity {
            return Ok(());
        }

        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, SimpleVectorBehaviour::FailAtAlloc) {
            return Err(SimpleVectorError::AllocFailed {
                capacity: new_capacity,
            });
        }

        let new_items = ArrayPtr::try_new(new_capacity)?;
        self.adopt(new_items, new_capacity, self.size, 0);

        Ok(())
    }

    /// Appends `value`, doubling the capacity when full.
    #[inline]
    pub fn push_back(&mut self, value: T)
    where
        T: Default,
    {
        self.insert(self.size, value);
    }

    /// Appends clones of every element of `other`.
    pub fn extend_from_slice(&mut self, other: &[T])
    where
        T: Clone + Default,
    {
        let new_size = self.size + other.len();

        if new_size > self.capacity {
            self.reallocate(new_size.max(self.capacity.saturating_mul(2)));
        }

        for (slot, value) in self.items.as_mut_slice()[self.size..new_size]
            .iter_mut()
            .zip(other)
        {
            slot.clone_from(value);
        }

        self.size = new_size;
    }

    /// Removes the last element from the sequence.
    ///
    /// The element stays in its slot until it is overwritten or the vector
    /// is dropped.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn pop_back(&mut self) {
        assert!(!self.is_empty(), "pop_back on an empty SimpleVector");
        self.size -= 1;
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// Returns the inserted element in its final location. On a full vector
    /// the capacity doubles (or becomes 1 when it was 0).
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T
    where
        T: Default,
    {
        let size = self.size;
        assert!(
            index <= size,
            "insertion index (is {index}) should be <= len (is {size})"
        );

        if size < self.capacity {
            // Spare slot at `size` rotates down to `index`, rightmost first.
            let items = self.items.as_mut_slice();
            items[index..=size].rotate_right(1);
            items[index] = value;
        } else {
            let new_capacity = self.grown_capacity();
            let mut new_items = ArrayPtr::new(new_capacity);
            new_items[index] = value;

            // Leave a one-slot gap at `index` for the value placed above.
            self.adopt(new_items, new_capacity, index, 1);
        }

        self.size += 1;
        &mut self.items[index]
    }

    /// Removes the element at `index`, shifting `[index + 1, len)` one slot left.
    ///
    /// Returns the element that now occupies `index`, or `None` when the last
    /// element was removed. Never reallocates.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> Option<&mut T>
    where
        T: Default,
    {
        let size = self.size;
        assert!(
            index < size,
            "removal index (is {index}) should be < len (is {size})"
        );

        let items = self.items.as_mut_slice();
        items[index..size].rotate_left(1);
        self.size = size - 1;

        // Drop the erased value now rather than leaving it in the spare slot.
        items[size - 1] = T::default();

        self.as_mut_slice().get_mut(index)
    }

    /// Exchanges contents with `other` in O(1): buffers, lengths and capacities.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        self.items.swap(&mut other.items);
        core::mem::swap(&mut self.size, &mut other.size);
        core::mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Returns the sequence `[0, len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.size]
    }

    /// Returns the sequence `[0, len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items.as_mut_slice()[..self.size]
    }

    /// Returns a pointer to the first slot of the buffer.
    ///
    /// Dangling (but never dereferenced through safe APIs) when nothing is allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    /// Mutable counterpart of [`SimpleVector::as_ptr`].
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.items.as_mut_ptr()
    }

    /// Converts into a `Vec<T>` holding exactly the sequence `[0, len)`.
    pub fn into_vec(self) -> Vec<T> {
        let size = self.size;
        let mut items = self.items.into_boxed_slice().into_vec();
        items.truncate(size);
        items
    }

    /// Converts into a boxed slice holding exactly the sequence `[0, len)`.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.into_vec().into_boxed_slice()
    }

    /// Changes the failure-injection behaviour.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: SimpleVectorBehaviour) {
        self.behaviour = behaviour;
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    /// Deep copy with `capacity() == len()`.
    fn clone(&self) -> Self {
        Self::from(self.as_slice())
    }

    /// Copy-and-swap: `self` is untouched if cloning `source` panics.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap_with(&mut copy);
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(items: &[T]) -> Self {
        Self::from_boxed(items.to_vec().into_boxed_slice())
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_boxed(Box::new(items))
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_boxed(items.into_boxed_slice())
    }
}

impl<T> From<Box<[T]>> for SimpleVector<T> {
    fn from(items: Box<[T]>) -> Self {
        Self::from_boxed(items)
    }
}

impl<T: Default> From<ReserveProxy> for SimpleVector<T> {
    fn from(proxy: ReserveProxy) -> Self {
        Self::from_proxy(proxy)
    }
}

impl<T> From<SimpleVector<T>> for Vec<T> {
    fn from(items: SimpleVector<T>) -> Self {
        items.into_vec()
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.size,
            "index out of bounds: the len is {} but the index is {index}",
            self.size
        );
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.size,
            "index out of bounds: the len is {} but the index is {index}",
            self.size
        );
        &mut self.items[index]
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SimpleVector")
            .field("items", &self.as_slice())
            .field("len", &self.size)
            .field("capacity", &self.capacity)
            .finish()
    }
}

/// Creates a [`SimpleVector`] from a list of elements, like `vec!`.
///
/// ```rust
/// use simple_vector::{simple_vector, SimpleVector};
///
/// let a: SimpleVector<i32> = simple_vector![];
/// let b = simple_vector![7; 3];
/// let c = simple_vector![1, 2, 3];
///
/// assert!(a.is_empty());
/// assert_eq!(b.as_slice(), &[7, 7, 7]);
/// assert_eq!(c.capacity(), 3);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVector::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($x),+])
    };
}
