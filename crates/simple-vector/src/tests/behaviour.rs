// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{SimpleVector, SimpleVectorBehaviour, SimpleVectorError, simple_vector};

#[test]
fn test_behaviour_default_is_none() {
    assert_eq!(SimpleVectorBehaviour::default(), SimpleVectorBehaviour::None);
}

#[test]
fn test_fail_at_alloc() {
    let mut v = simple_vector![1u8, 2];
    let addr = v.as_ptr();

    v.change_behaviour(SimpleVectorBehaviour::FailAtAlloc);
    let result = v.try_reserve(64);

    assert_eq!(
        result,
        Err(SimpleVectorError::AllocFailed { capacity: 64 })
    );

    // Nothing changed
    assert_eq!(v, [1, 2]);
    assert_eq!(v.capacity(), 2);
    assert_eq!(v.as_ptr(), addr);
}

#[test]
fn test_fail_at_alloc_is_sticky() {
    let mut v: SimpleVector<u8> = SimpleVector::new();
    v.change_behaviour(SimpleVectorBehaviour::FailAtAlloc);

    assert!(v.try_reserve(1).is_err());
    assert!(v.try_reserve(2).is_err());
    assert_eq!(v.capacity(), 0);
}

#[test]
fn test_fail_at_alloc_skipped_when_capacity_fits() {
    let mut v: SimpleVector<u8> = SimpleVector::with_capacity(8);
    v.change_behaviour(SimpleVectorBehaviour::FailAtAlloc);

    assert!(v.try_reserve(8).is_ok());
}

#[test]
fn test_reset_behaviour() {
    let mut v = simple_vector![1u8, 2];

    v.change_behaviour(SimpleVectorBehaviour::FailAtAlloc);
    assert!(v.try_reserve(4).is_err());

    v.change_behaviour(SimpleVectorBehaviour::None);
    assert!(v.try_reserve(4).is_ok());
    assert_eq!(v.capacity(), 4);
    assert_eq!(v, [1, 2]);
}

#[test]
fn test_alloc_failed_message() {
    let err = SimpleVectorError::AllocFailed { capacity: 64 };
    assert_eq!(err.to_string(), "allocation of 64 elements failed");
}

#[test]
fn test_capacity_overflow_message() {
    assert_eq!(
        SimpleVectorError::CapacityOverflow.to_string(),
        "capacity overflow"
    );
}
