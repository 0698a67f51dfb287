// This file is part of elastic-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::ElasticVec};

impl<T> ElasticVec<T> {
    /// Removes the last element and returns it.
    ///
    /// Halves the capacity afterwards if `2 * len < capacity`.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if there is nothing to remove. If the shrinking
    /// reallocation fails, the element is put back and the allocation error is
    /// returned; the vector is unchanged either way.
    pub fn pop(&mut self) -> Result<T, Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }

        self.len -= 1;
        // SAFETY: slot `len` was the last live slot. It is now outside the
        // live prefix, so reading it out transfers ownership to us.
        let value = unsafe { self.buf.ptr().add(self.len).read() };

        if let Err(err) = self.shrink_if_sparse() {
            // SAFETY: a failed resize keeps the old block, so the slot we just
            // vacated is still inside the buffer.
            unsafe { self.push_unchecked(value) };
            return Err(err);
        }
        Ok(value)
    }

    /// Removes and drops the last element.
    ///
    /// Same shrink policy and errors as [`pop`](Self::pop).
    #[inline]
    pub fn remove_last(&mut self) -> Result<(), Error> {
        self.pop().map(drop)
    }

    fn shrink_if_sparse(&mut self) -> Result<(), Error> {
        let cap = self.capacity();
        // `2 * len < cap`, written so it cannot overflow (`len <= cap`).
        if self.len < cap - self.len {
            self.buf.resize(cap / 2)?;
        }
        Ok(())
    }
}
