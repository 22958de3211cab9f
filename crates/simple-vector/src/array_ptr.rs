// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ArrayPtr - exclusive owner of one fixed-length heap block.
//!
//! The block length is fixed at construction. `ArrayPtr` has no notion of a
//! logical size; that bookkeeping belongs to [`SimpleVector`](crate::SimpleVector).

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use core::ptr::NonNull;

use crate::error::SimpleVectorError;

/// Move-only owner of a heap-allocated `[T]` block.
///
/// The handle is either null (no allocation) or refers to exactly one block
/// that no other `ArrayPtr` references. `ArrayPtr` is intentionally not
/// `Clone`: ownership moves, it is never shared.
///
/// # Example
///
/// ```rust
/// use simple_vector::ArrayPtr;
///
/// let mut a = ArrayPtr::<u32>::new(4);
/// a[1] = 7;
///
/// let mut b = ArrayPtr::<u32>::null();
/// a.swap(&mut b);
///
/// assert!(a.is_null());
/// assert_eq!(b.as_slice(), &[0, 7, 0, 0]);
/// ```
pub struct ArrayPtr<T> {
    raw: Option<Box<[T]>>,
}

impl<T> ArrayPtr<T> {
    /// Creates a null `ArrayPtr` that owns nothing.
    #[inline]
    pub const fn null() -> Self {
        Self { raw: None }
    }

    /// Allocates `size` default-initialized elements.
    ///
    /// A `size` of zero performs no allocation and yields a null pointer.
    pub fn new(size: usize) -> Self
    where
        T: Default,
    {
        if size == 0 {
            return Self::null();
        }

        let mut items = Vec::with_capacity(size);
        items.resize_with(size, T::default);

        Self {
            raw: Some(items.into_boxed_slice()),
        }
    }

    /// Fallible counterpart of [`ArrayPtr::new`].
    ///
    /// # Errors
    ///
    /// - [`SimpleVectorError::CapacityOverflow`] if `size` elements of `T`
    ///   do not fit in `isize::MAX` bytes.
    /// - [`SimpleVectorError::AllocFailed`] if the allocator refuses the block.
    pub fn try_new(size: usize) -> Result<Self, SimpleVectorError>
    where
        T: Default,
    {
        if size == 0 {
            return Ok(Self::null());
        }

        let bytes = size
            .checked_mul(core::mem::size_of::<T>())
            .ok_or(SimpleVectorError::CapacityOverflow)?;

        if bytes > isize::MAX as usize {
            return Err(SimpleVectorError::CapacityOverflow);
        }

        let mut items = Vec::new();
        items
            .try_reserve_exact(size)
            .map_err(|_| SimpleVectorError::AllocFailed { capacity: size })?;
        items.resize_with(size, T::default);

        Ok(Self {
            raw: Some(items.into_boxed_slice()),
        })
    }

    /// Takes ownership of a block previously handed out by `release`
    /// (or produced by [`Box::into_raw`]).
    ///
    /// A null `raw` yields a null `ArrayPtr`.
    ///
    /// # Safety
    ///
    /// `raw` must be null or come from `Box::<[T]>::into_raw` (or an
    /// equivalent leak), and no other owner may use or free it afterwards.
    pub unsafe fn from_raw(raw: *mut [T]) -> Self {
        if raw.is_null() {
            return Self::null();
        }

        // SAFETY: guaranteed by the caller.
        Self {
            raw: Some(unsafe { Box::from_raw(raw) }),
        }
    }

    /// Gives up ownership of the block without freeing it.
    ///
    /// The `ArrayPtr` becomes null. The caller owns the returned block and
    /// must hand it back to [`ArrayPtr::from_raw`] for it to be freed.
    #[must_use]
    pub(crate) fn release(&mut self) -> Option<NonNull<[T]>> {
        self.raw.take().map(|items| NonNull::from(Box::leak(items)))
    }

    /// Returns `true` if this `ArrayPtr` owns a block.
    #[inline]
    pub fn is_some(&self) -> bool {
        self.raw.is_some()
    }

    /// Returns `true` if this `ArrayPtr` owns nothing.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.raw.is_none()
    }

    /// Returns the allocated length (zero when null).
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.as_deref().map_or(0, <[T]>::len)
    }

    /// Returns `true` if the allocated length is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the start of the block without transferring ownership.
    ///
    /// A null `ArrayPtr` returns a dangling, well-aligned pointer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.raw
            .as_deref()
            .map_or(NonNull::<T>::dangling().as_ptr().cast_const(), <[T]>::as_ptr)
    }

    /// Mutable counterpart of [`ArrayPtr::as_ptr`].
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.raw
            .as_deref_mut()
            .map_or(NonNull::<T>::dangling().as_ptr(), <[T]>::as_mut_ptr)
    }

    /// Returns the whole allocated block as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.raw.as_deref().unwrap_or(&[])
    }

    /// Returns the whole allocated block as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.raw.as_deref_mut().unwrap_or(&mut [])
    }

    /// Exchanges the owned blocks of `self` and `other`. O(1), no allocation.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.raw, &mut other.raw);
    }

    /// Converts into a boxed slice, consuming the owner.
    pub fn into_boxed_slice(mut self) -> Box<[T]> {
        match self.release() {
            // SAFETY: `release` leaked this block from a `Box<[T]>` and
            // `self` no longer references it.
            Some(raw) => unsafe { Box::from_raw(raw.as_ptr()) },
            None => Box::new([]),
        }
    }
}

impl<T> Default for ArrayPtr<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> From<Box<[T]>> for ArrayPtr<T> {
    fn from(items: Box<[T]>) -> Self {
        if items.is_empty() {
            return Self::null();
        }

        Self { raw: Some(items) }
    }
}

impl<T> From<Vec<T>> for ArrayPtr<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from(items.into_boxed_slice())
    }
}

impl<T> Index<usize> for ArrayPtr<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        assert!(self.is_some(), "ArrayPtr: indexed a null buffer");
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for ArrayPtr<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(self.is_some(), "ArrayPtr: indexed a null buffer");
        &mut self.as_mut_slice()[index]
    }
}

impl<T> core::fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ArrayPtr")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
