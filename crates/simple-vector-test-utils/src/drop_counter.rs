// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::rc::Rc;

/// Value that increments a shared counter when dropped.
///
/// `DropCounter::default()` is not attached to any counter, so filler values
/// created by a container do not show up in the count.
#[derive(Debug, Default)]
pub struct DropCounter {
    counter: Option<Rc<Cell<usize>>>,
    value: usize,
}

impl DropCounter {
    /// Creates a value attached to `counter`.
    pub fn new(counter: &Rc<Cell<usize>>, value: usize) -> Self {
        Self {
            counter: Some(Rc::clone(counter)),
            value,
        }
    }

    /// Returns the payload.
    pub fn value(&self) -> usize {
        self.value
    }

    /// Returns `true` if dropping this value will be counted.
    pub fn is_tracked(&self) -> bool {
        self.counter.is_some()
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        if let Some(counter) = &self.counter {
            counter.set(counter.get() + 1);
        }
    }
}
