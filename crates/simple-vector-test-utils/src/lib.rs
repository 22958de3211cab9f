// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for simple-vector crates.
//!
//! - [`NonCopyable`]: a move-only probe. It implements neither `Clone` nor
//!   `Copy`, so any container path that tries to duplicate it fails to compile.
//! - [`DropCounter`]: records every drop in a shared counter.
//!
//! ## License
//!
//! GPL-3.0-only

mod drop_counter;
mod non_copyable;

pub use drop_counter::DropCounter;
pub use non_copyable::{NON_COPYABLE_DEFAULT, NonCopyable};
