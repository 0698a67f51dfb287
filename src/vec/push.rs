// This file is part of elastic-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::ElasticVec};

impl<T> ElasticVec<T> {
    /// Appends `value`, doubling the capacity first if the vector is full.
    ///
    /// On error the vector is unchanged and `value` is dropped.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.len == self.capacity() {
            self.grow()?;
        }
        // SAFETY: either there was spare capacity, or `grow` just added some.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    fn grow(&mut self) -> Result<(), Error> {
        let cap = self.capacity();
        let new_cap = if cap == 0 {
            Self::MIN_NON_ZERO_CAP
        } else {
            cap.checked_mul(2).ok_or(Error::CapacityOverflow)?
        };
        self.buf.resize(new_cap)
    }
}
