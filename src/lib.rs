// This file is part of elastic-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `elastic-vec`
//!
//! A `no_std` (with `alloc`), heap-allocated, growable vector whose capacity
//! follows a fixed hysteresis policy.
//!
//! The core type, [`ElasticVec<T>`], owns one contiguous buffer and tracks a
//! logical length `len ∈ 0..=capacity`. Only the `[0..len)` prefix holds live
//! values.
//!
//! ## Capacity policy
//!
//! - **Growth**: appending to a full vector doubles its capacity. An empty
//!   buffer grows to [`ElasticVec::MIN_NON_ZERO_CAP`].
//! - **Shrink**: after a removal, if `2 * len < capacity`, the capacity is
//!   halved. Reaching capacity `0` frees the buffer.
//!
//! Growing at "full" and shrinking at "under half full" keeps alternating
//! push/pop from reallocating on every call.
//!
//! ## Failure
//!
//! Nothing aborts on allocation failure. Constructors, [`ElasticVec::push`],
//! [`ElasticVec::pop`] and [`ElasticVec::remove_last`] return
//! `Result<_, `[`Error`]`>` and leave the vector exactly as it was on error.
//! Removing from an empty vector is reported as [`Error::Empty`].
//!
//! Zero-sized element types never allocate but report the same capacities as
//! any other `T`.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `ElasticVec<T>`.
//!
//! ## Example
//!
//! ```rust
//! use elastic_vec::ElasticVec;
//!
//! let mut v = ElasticVec::from_elem(3, 7).unwrap();
//! assert_eq!((v.len(), v.capacity()), (3, 3));
//!
//! v.push(8).unwrap();
//! assert_eq!(v.capacity(), 6);
//! assert_eq!(v.as_slice(), &[7, 7, 7, 8]);
//!
//! assert_eq!(v.pop(), Ok(8));
//! assert_eq!(v.to_string(), "7 7 7");
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod raw;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use vec::ElasticVec;
