// This file is part of elastic-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`ElasticVec`](crate::ElasticVec).
//!
//! Read-only `Index` mirroring slice behavior:
//! - panics on out-of-bounds;
//! - accepts a single position or any range form;
//! - views are restricted to the live prefix `[0..len)`.

// Crate imports
use crate::vec::ElasticVec;

// Core imports
use core::{ops::Index, slice::SliceIndex};

impl<T, I: SliceIndex<[T]>> Index<I> for ElasticVec<T> {
    type Output = I::Output;
    fn index(&self, i: I) -> &Self::Output {
        &self.as_slice()[i]
    }
}
