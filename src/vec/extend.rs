// This file is part of elastic-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawBuf, vec::ElasticVec};

impl<T: Clone> ElasticVec<T> {
    /// Appends a clone of each element of `src`, in order.
    ///
    /// Each append follows the growth policy of [`push`](Self::push).
    ///
    /// # Errors
    ///
    /// Stops at the first allocation failure. Elements appended before the
    /// failure stay in the vector.
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error> {
        for x in src {
            self.push(x.clone())?;
        }
        Ok(())
    }

    /// Clones the vector into a new allocation of exactly `len()` slots.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let mut out = Self {
            buf: RawBuf::with_capacity(self.len)?,
            len: 0,
        };
        for x in self.iter() {
            // SAFETY: `out` has room for `self.len` elements and receives
            // exactly that many.
            unsafe { out.push_unchecked(x.clone()) };
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::ElasticVec;

    #[test]
    fn test_extend_from_slice_appends_in_order() {
        let mut v = ElasticVec::from_elem(1, 10).unwrap();
        v.extend_from_slice(&[20, 30, 40]).unwrap();
        assert_eq!(v, [10, 20, 30, 40]);
        assert_eq!(v.capacity(), 4);
        v.extend_from_slice(&[]).unwrap();
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn test_try_clone_of_empty_does_not_allocate() {
        let v: ElasticVec<u8> = ElasticVec::new();
        let w = v.try_clone().unwrap();
        assert!(w.is_empty());
        assert_eq!(w.capacity(), 0);
    }
}
