// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::SimpleVector;

#[derive(Debug, Clone)]
enum Op {
    PushBack(u16),
    PopBack,
    Insert(usize, u16),
    Erase(usize),
    Resize(usize),
    Reserve(usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u16>().prop_map(Op::PushBack),
        2 => Just(Op::PopBack),
        3 => (any::<usize>(), any::<u16>()).prop_map(|(i, x)| Op::Insert(i, x)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => (0..64usize).prop_map(Op::Resize),
        1 => (0..64usize).prop_map(Op::Reserve),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn operations_match_vec_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut v: SimpleVector<u16> = SimpleVector::new();
        let mut model: Vec<u16> = Vec::new();

        for op in ops {
            let old_capacity = v.capacity();

            match op {
                Op::PushBack(x) => {
                    v.push_back(x);
                    model.push(x);
                }
                Op::PopBack => {
                    if !model.is_empty() {
                        v.pop_back();
                        model.pop();
                    }
                }
                Op::Insert(i, x) => {
                    let index = i % (model.len() + 1);
                    prop_assert_eq!(*v.insert(index, x), x);
                    model.insert(index, x);
                }
                Op::Erase(i) => {
                    if !model.is_empty() {
                        let index = i % model.len();
                        let next = v.erase(index).copied();
                        model.remove(index);
                        prop_assert_eq!(next, model.get(index).copied());
                    }
                }
                Op::Resize(n) => {
                    v.resize(n);
                    model.resize(n, 0);
                }
                Op::Reserve(n) => {
                    v.reserve(n);
                    prop_assert!(v.capacity() >= n);
                }
                Op::Clear => {
                    v.clear();
                    model.clear();
                }
            }

            // Capacity never shrinks
            prop_assert!(v.capacity() >= old_capacity);
            prop_assert!(v.len() <= v.capacity());
            prop_assert_eq!(v.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn push_back_capacity_is_power_of_two(count in 1..=512usize) {
        let mut v: SimpleVector<u8> = SimpleVector::new();

        for i in 0..count {
            v.push_back(i as u8);
        }

        prop_assert_eq!(v.len(), count);
        prop_assert_eq!(v.capacity(), count.next_power_of_two());
    }

    #[test]
    fn ordering_matches_slice_ordering(
        a in prop::collection::vec(any::<u8>(), 0..16),
        b in prop::collection::vec(any::<u8>(), 0..16)
    ) {
        let va = SimpleVector::from(a.clone());
        let vb = SimpleVector::from(b.clone());

        prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
        prop_assert_eq!(va == vb, a == b);
    }

    #[test]
    fn at_matches_get(
        items in prop::collection::vec(any::<i32>(), 0..32),
        index in 0..64usize
    ) {
        let v = SimpleVector::from(items.clone());

        prop_assert_eq!(v.at(index).ok(), items.get(index));
    }
}
