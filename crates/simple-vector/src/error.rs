// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for simple-vector.

use thiserror::Error;

/// Errors returned by the checked operations of
/// [`SimpleVector`](crate::SimpleVector) and [`ArrayPtr`](crate::ArrayPtr).
///
/// Only recoverable conditions are represented here. Contract violations such
/// as indexing past the end with `[]` or popping an empty vector panic instead.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum SimpleVectorError {
    /// Checked access with an index at or past the logical length.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The logical length at the time of the access.
        len: usize,
    },

    /// The requested capacity does not fit in `isize::MAX` bytes.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The allocator could not provide a block for the requested capacity.
    #[error("allocation of {capacity} elements failed")]
    AllocFailed {
        /// The capacity that was requested.
        capacity: usize,
    },
}
