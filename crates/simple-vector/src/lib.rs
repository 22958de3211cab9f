// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array built on an exclusively owned heap buffer.
//!
//! The crate is two strictly layered types:
//!
//! - [`ArrayPtr<T>`]: move-only owner of one fixed-length heap block. It knows
//!   the allocated length and nothing else.
//! - [`SimpleVector<T>`]: a dynamic array that owns one `ArrayPtr` at a time
//!   and tracks its logical length and capacity separately.
//!
//! # Core Guarantees
//!
//! - **Build, then discard**: every reallocation constructs the full
//!   replacement block before the old one is dropped. If building it panics
//!   (e.g. in `T::default()`), the vector is left exactly as it was.
//! - **Amortized growth**: a full vector doubles its capacity on insertion
//!   (`0 → 1 → 2 → 4 …`). Nothing ever shrinks the allocation.
//! - **Move-only friendly**: insertion, push and erase move elements, they
//!   never clone them. Only `T: Default` is needed to fill spare slots.
//! - **Two failure classes**: `v[i]` out of range panics (contract violation);
//!   [`SimpleVector::at`] returns [`SimpleVectorError::OutOfRange`].
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use simple_vector::{simple_vector, SimpleVector, SimpleVectorError};
//!
//! fn example() -> Result<(), SimpleVectorError> {
//!     let mut v = SimpleVector::new();
//!     for i in 0..5 {
//!         v.push_back(i);
//!     }
//!
//!     assert_eq!(v.len(), 5);
//!     assert_eq!(v.capacity(), 8);
//!
//!     v.erase(0);
//!     v.insert(2, 42);
//!     assert_eq!(v, simple_vector![1, 2, 42, 3, 4]);
//!
//!     assert_eq!(*v.at(2)?, 42);
//!     assert!(v.at(5).is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Reserving Capacity
//!
//! ```rust
//! use simple_vector::{reserve, SimpleVector};
//!
//! let mut v: SimpleVector<u64> = SimpleVector::from(reserve(100));
//! assert!(v.is_empty());
//! assert_eq!(v.capacity(), 100);
//!
//! v.resize(10);
//! assert_eq!(v.capacity(), 100);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `SimpleVector<T>` as a sequence.
//! - `test_utils`: exposes [`SimpleVectorBehaviour`] to inject allocation
//!   failures into [`SimpleVector::try_reserve`].
//!
//! ```toml
//! [dev-dependencies]
//! simple-vector = { version = "*", features = ["test_utils"] }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod array_ptr;
mod cmp;
mod error;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod simple_vector;

#[cfg(test)]
mod tests;

pub use array_ptr::ArrayPtr;
pub use error::SimpleVectorError;
pub use iter::IntoIter;
pub use simple_vector::{ReserveProxy, SimpleVector, reserve};

#[cfg(any(test, feature = "test_utils"))]
pub use simple_vector::SimpleVectorBehaviour;
