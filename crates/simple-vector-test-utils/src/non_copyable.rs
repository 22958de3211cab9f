// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Value assigned by [`NonCopyable::default`].
pub const NON_COPYABLE_DEFAULT: usize = 5;

/// Move-only probe value.
///
/// Deliberately not `Clone`: a container that compiles with
/// `NonCopyable` elements never duplicates them.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonCopyable {
    x: usize,
}

impl NonCopyable {
    /// Creates a probe holding `x`.
    pub fn new(x: usize) -> Self {
        Self { x }
    }

    /// Returns the held value.
    pub fn x(&self) -> usize {
        self.x
    }
}

impl Default for NonCopyable {
    fn default() -> Self {
        Self::new(NON_COPYABLE_DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_value() {
        assert_eq!(NonCopyable::default().x(), NON_COPYABLE_DEFAULT);
    }

    #[test]
    fn test_move_keeps_value() {
        let a = NonCopyable::new(42);
        let b = a;
        assert_eq!(b.x(), 42);
    }
}
