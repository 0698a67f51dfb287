// This file is part of elastic-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`ElasticVec`](crate::ElasticVec).
//!
//! - **Serialize**: as a sequence of the live elements.
//! - **Deserialize**: from any sequence. Elements are appended one by one, so
//!   the resulting capacity follows the usual doubling policy. Allocation
//!   failures surface as a custom deserialization error.

// Crate imports
use crate::vec::ElasticVec;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Serialize> Serialize for ElasticVec<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for VecVisitor<T> {
    type Value = ElasticVec<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = ElasticVec::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem).map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ElasticVec<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor(PhantomData))
    }
}
