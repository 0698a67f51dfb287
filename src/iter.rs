// This file is part of elastic-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`ElasticVec`](crate::ElasticVec).
//!
//! - `IntoIter<T>` takes over the vector's buffer and yields by value. It
//!   supports `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`.
//! - `&ElasticVec` iterates as a slice.

// Crate imports
use crate::{raw::RawBuf, vec::ElasticVec};

// Core imports
use core::{fmt, iter::FusedIterator, mem, ptr};

/// Owned iterator returned by `ElasticVec::into_iter()`.
///
/// Dropping it drops the elements that were not yielded and frees the buffer.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    front: usize,
    back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `buf[front..back]` is exactly the set of initialized slots
        // still owned by the iterator.
        unsafe { core::slice::from_raw_parts(self.buf.ptr().add(self.front), self.back - self.front) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` was initialized and is now outside `front..back`,
            // so it is read exactly once.
            Some(unsafe { self.buf.ptr().add(i).read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let skip = n.min(self.back - self.front);
        // SAFETY: `front + skip <= back`, and those slots are initialized.
        let skipped = ptr::slice_from_raw_parts_mut(unsafe { self.buf.ptr().add(self.front) }, skip);
        // Advance first so a panicking destructor cannot cause a double drop.
        self.front += skip;
        // SAFETY: the skipped slots are no longer in `front..back`.
        unsafe { ptr::drop_in_place(skipped) };
        self.next()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: as in `next`, for the slot just removed from the back.
            Some(unsafe { self.buf.ptr().add(self.back).read() })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let skip = n.min(self.back - self.front);
        self.back -= skip;
        // SAFETY: `buf[back..back + skip]` was initialized and has just left
        // `front..back`.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.ptr().add(self.back),
                skip,
            ))
        };
        self.next_back()
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let rest: *mut [T] = ptr::slice_from_raw_parts_mut(
            // SAFETY: `front <= back <= capacity`.
            unsafe { self.buf.ptr().add(self.front) },
            self.back - self.front,
        );
        // SAFETY: the unyielded slots are initialized and owned by us.
        unsafe { ptr::drop_in_place(rest) }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a ElasticVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<T> IntoIterator for ElasticVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = mem::replace(&mut self.len, 0);
        // `self` is left empty and drops as a no-op.
        let buf = mem::replace(&mut self.buf, RawBuf::new());
        IntoIter {
            buf,
            front: 0,
            back,
        }
    }
}
