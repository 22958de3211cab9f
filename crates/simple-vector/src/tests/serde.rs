// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{SimpleVector, simple_vector};

#[test]
fn test_serialize_live_elements_only() {
    let mut v = simple_vector![1, 2, 3, 4];
    v.pop_back();
    v.reserve(16);

    let json = serde_json::to_string(&v).expect("Failed to serialize");

    assert_eq!(json, "[1,2,3]");
}

#[test]
fn test_serialize_empty() {
    let v: SimpleVector<u8> = SimpleVector::new();

    let json = serde_json::to_string(&v).expect("Failed to serialize");

    assert_eq!(json, "[]");
}

#[test]
fn test_deserialize() {
    let v: SimpleVector<u32> =
        serde_json::from_str("[10, 20, 30]").expect("Failed to deserialize");

    assert_eq!(v, [10, 20, 30]);
    assert!(v.capacity() >= v.len());
}

#[test]
fn test_deserialize_nested() {
    let v: SimpleVector<SimpleVector<String>> =
        serde_json::from_str(r#"[["a"], [], ["b", "c"]]"#).expect("Failed to deserialize");

    assert_eq!(v.len(), 3);
    assert_eq!(v[0], [String::from("a")]);
    assert!(v[1].is_empty());
    assert_eq!(v[2].as_slice(), &["b", "c"]);
}

#[test]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<SimpleVector<u32>, _> = serde_json::from_str("{\"a\": 1}");

    let err = result.expect_err("Expected a type error");
    assert!(err.to_string().contains("a sequence"));
}

#[test]
fn test_deserialize_rejects_bad_element() {
    let result: Result<SimpleVector<u8>, _> = serde_json::from_str("[1, 300]");
    assert!(result.is_err());
}
