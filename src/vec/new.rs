// This file is part of elastic-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawBuf, vec::ElasticVec};

impl<T> ElasticVec<T> {
    /// Constructs an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Constructs a vector holding `count` copies of `value`.
    ///
    /// Storage is allocated for exactly `count` elements, so
    /// `len() == capacity() == count` on success. `count == 0` allocates
    /// nothing.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityOverflow`] if `count` elements cannot be described by a
    /// valid layout, [`Error::AllocFailed`] if the allocator refuses.
    pub fn from_elem(count: usize, value: T) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut v = Self {
            buf: RawBuf::with_capacity(count)?,
            len: 0,
        };
        if count > 0 {
            for _ in 1..count {
                // SAFETY: `len < count == capacity` inside the loop.
                unsafe { v.push_unchecked(value.clone()) };
            }
            // SAFETY: one slot remains.
            unsafe { v.push_unchecked(value) };
        }
        Ok(v)
    }

    /// Constructs a vector holding `count` copies of `T::default()`.
    ///
    /// See [`from_elem`](Self::from_elem).
    #[inline]
    pub fn from_default(count: usize) -> Result<Self, Error>
    where
        T: Clone + Default,
    {
        Self::from_elem(count, T::default())
    }
}
