// This file is part of elastic-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `ElasticVec`.
//!
//! These errors represent storage and precondition failures.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`ElasticVec`](crate::ElasticVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The global allocator could not satisfy a storage request.
    ///
    /// The vector is left exactly as it was before the call.
    AllocFailed,
    /// The requested capacity does not fit in `usize`, or its byte size
    /// exceeds `isize::MAX`.
    CapacityOverflow,
    /// A removal was attempted on an empty vector.
    Empty,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocFailed => f.write_str("memory allocation failed"),
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::Empty => f.write_str("vector is empty"),
        }
    }
}

impl CoreError for Error {}
