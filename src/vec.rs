// This file is part of elastic-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `ElasticVec` type and its inherent API.
//!
//! `ElasticVec<T>` owns one contiguous heap block and tracks how many of its
//! slots hold live values. Appends grow the block by doubling when it is full;
//! removals halve it once fewer than half of the slots are live.

mod extend;
mod new;
mod pop;
mod push;
mod slice;

// Crate imports
use crate::raw::RawBuf;

// Core imports
use core::{
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    ptr,
};

/// A heap-allocated, growable vector with doubling growth and halving shrink.
///
/// # Layout and invariants
///
/// Internally, `ElasticVec<T>` maintains:
///
/// - a raw buffer with room for `capacity` values of `T`; and
/// - a logical length `len` with `0 <= len <= capacity`.
///
/// Exactly the prefix `buf[..len]` is initialized. Slots `buf[len..capacity]`
/// are uninitialized and never read, written, or dropped, except for the
/// single write that makes slot `len` live during an append.
///
/// # Growth and shrink
///
/// - Appending to a full vector doubles its capacity (a zero capacity becomes
///   [`MIN_NON_ZERO_CAP`](Self::MIN_NON_ZERO_CAP)).
/// - After a removal, if `2 * len < capacity`, the capacity is halved
///   (integer division). Halving to `0` frees the buffer.
///
/// The gap between the two thresholds means alternating push/pop around a
/// capacity boundary reallocates at most once.
///
/// ```
/// use elastic_vec::ElasticVec;
///
/// let mut v = ElasticVec::from_elem(2, 0).unwrap();
/// v.push(2).unwrap();
/// v.push(515).unwrap();
/// v.push(151).unwrap();
/// assert_eq!((v.len(), v.capacity()), (5, 8));
/// assert_eq!(v, [0, 0, 2, 515, 151]);
///
/// for _ in 0..3 {
///     v.remove_last().unwrap();
/// }
/// assert_eq!((v.len(), v.capacity()), (2, 4));
/// ```
///
/// # Failure
///
/// Every operation that may touch the allocator returns
/// `Result<_, `[`Error`](crate::Error)`>`. On failure the vector is unchanged:
/// the previous buffer and all live values are kept.
///
/// Removing from an empty vector returns [`Error::Empty`](crate::Error::Empty)
/// rather than panicking.
///
/// # Views
///
/// Only read-only views of the contents are exposed ([`as_slice`](Self::as_slice),
/// [`iter`](Self::iter), `Deref<Target = [T]>`, indexing).
pub struct ElasticVec<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
}

impl<T> ElasticVec<T> {
    /// Capacity chosen when appending to a vector that has none.
    pub const MIN_NON_ZERO_CAP: usize = 1;

    /// Returns the number of slots available without reallocating.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Writes `value` into slot `len` and makes it live.
    ///
    /// # Safety
    ///
    /// `self.len < self.capacity()` must hold.
    #[inline]
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        // SAFETY: the caller guarantees slot `len` lies inside the buffer, and
        // by invariant it is uninitialized.
        unsafe { self.buf.ptr().add(self.len).write(value) };
        self.len += 1;
    }
}

impl<T> Drop for ElasticVec<T> {
    fn drop(&mut self) {
        // SAFETY: exactly `buf[..len]` is initialized. Dropping the slice runs
        // each destructor once, in index order. `buf` then frees the block.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len)) }
    }
}

impl<T> Default for ElasticVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ElasticVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElasticVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

/// Space-separated elements, e.g. `0 0 2 515 151`.
impl<T: fmt::Display> fmt::Display for ElasticVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut items = self.iter();
        if let Some(first) = items.next() {
            write!(f, "{first}")?;
            for item in items {
                write!(f, " {item}")?;
            }
        }
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for ElasticVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for ElasticVec<T> {}

impl<T: PartialEq> PartialEq<[T]> for ElasticVec<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq> PartialEq<&[T]> for ElasticVec<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}
impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for ElasticVec<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for ElasticVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for ElasticVec<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for ElasticVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Borrow<[T]> for ElasticVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
