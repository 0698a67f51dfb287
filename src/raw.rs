// This file is part of elastic-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Owned, uninitialized storage for `ElasticVec`.
//!
//! `RawBuf<T>` is the only place that talks to the global allocator. It owns a
//! block sized for `capacity` slots of `T` and knows nothing about which slots
//! hold live values; that bookkeeping belongs to the vector.
//!
//! Zero-sized `T` never allocates. The capacity is still tracked so that the
//! vector's growth and shrink policy is observable for every element type.

// Crate imports
use crate::error::Error;

// Core imports
use core::{
    marker::PhantomData,
    mem::{align_of, size_of},
    ptr::NonNull,
};

// Alloc imports
use alloc::alloc::{alloc, dealloc, realloc, Layout};

pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: `RawBuf<T>` uniquely owns its allocation, like `Box<[T]>`.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access only hands out `*mut T` to code that already upholds
// the vector's aliasing rules.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    const IS_ZST: bool = size_of::<T>() == 0;

    /// An empty buffer: capacity `0`, dangling pointer, nothing allocated.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates storage for exactly `cap` slots.
    pub(crate) fn with_capacity(cap: usize) -> Result<Self, Error> {
        let mut buf = Self::new();
        buf.resize(cap)?;
        Ok(buf)
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    /// Pointer to slot `0`. Always non-null and aligned, even when nothing is
    /// allocated.
    #[inline]
    pub(crate) const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Moves the storage to a block of exactly `new_cap` slots.
    ///
    /// The first `min(old_cap, new_cap)` slots are carried over bytewise. On
    /// error the old block and its contents are untouched.
    ///
    /// Callers shrinking the buffer must have already moved or dropped every
    /// live value at or beyond `new_cap`.
    pub(crate) fn resize(&mut self, new_cap: usize) -> Result<(), Error> {
        if new_cap == self.cap {
            return Ok(());
        }
        if Self::IS_ZST {
            self.cap = new_cap;
            return Ok(());
        }
        if new_cap == 0 {
            self.release();
            return Ok(());
        }

        let new_layout = Layout::array::<T>(new_cap).map_err(|_| Error::CapacityOverflow)?;
        let raw = if self.cap == 0 {
            // SAFETY: `T` is not zero-sized and `new_cap > 0`, so the layout
            // has a non-zero size.
            unsafe { alloc(new_layout) }
        } else {
            // SAFETY: `self.ptr` was allocated with `self.current_layout()`,
            // and `new_layout.size()` is non-zero and at most `isize::MAX`.
            unsafe {
                realloc(
                    self.ptr.as_ptr().cast::<u8>(),
                    self.current_layout(),
                    new_layout.size(),
                )
            }
        };

        // A null return leaves the old block allocated and owned by us.
        self.ptr = NonNull::new(raw.cast::<T>()).ok_or(Error::AllocFailed)?;
        self.cap = new_cap;
        Ok(())
    }

    /// Frees the block (if any) and returns to the empty state.
    pub(crate) fn release(&mut self) {
        if !Self::IS_ZST && self.cap != 0 {
            // SAFETY: a non-zero capacity for a sized `T` means `self.ptr` is
            // a live allocation made with `self.current_layout()`.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), self.current_layout()) };
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    fn current_layout(&self) -> Layout {
        // SAFETY: this exact layout passed `Layout::array` when the block was
        // allocated, so size and alignment are valid.
        unsafe { Layout::from_size_align_unchecked(size_of::<T>() * self.cap, align_of::<T>()) }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.release();
    }
}
