// This file is part of elastic-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::ElasticVec;

impl<T> ElasticVec<T> {
    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the pointer is non-null and aligned even when nothing is
        // allocated, and by invariant `buf[..len]` is initialized.
        unsafe { core::slice::from_raw_parts(self.buf.ptr(), self.len) }
    }
}
