// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `serde` support for [`SimpleVector`].
//!
//! - **Serialize**: as a sequence of the `len()` live elements.
//! - **Deserialize**: from any sequence; capacity follows the usual growth policy.

use core::fmt;
use core::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

use crate::simple_vector::SimpleVector;

// Upper bound on pre-allocation driven by an untrusted size hint.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for SimpleVector<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;

        let mut seq = s.serialize_seq(Some(self.len()))?;
        for item in self.as_slice() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct SimpleVectorVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for SimpleVectorVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = SimpleVector<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let hint = seq.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut out = SimpleVector::with_capacity(hint);

        while let Some(item) = seq.next_element::<T>()? {
            out.push_back(item);
        }

        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for SimpleVector<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(SimpleVectorVisitor(PhantomData))
    }
}
