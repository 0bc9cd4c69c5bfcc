// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors returned by stores, adapters and sequences.
//!
//! Every failure here is a caller error: an index past the end, a range that
//! runs backwards, two sequences that can't be joined. Nothing is transient and
//! nothing is retried. An operation that returns `Err` has not touched the
//! receiver.
//!
//! # Error codes
//!
//! | Variant           | Code | Canonical message           |
//! |-------------------|------|-----------------------------|
//! | `IndexOutOfRange` | 2    | Index out of range          |
//! | `InvalidArgument` | 3    | Invalid argument            |
//! | `EmptyContainer`  | 4    | Container is empty          |
//! | `InvalidSize`     | 8    | Invalid size specified      |
//! | `InvalidRange`    | 9    | Invalid range specified     |
//! | `InvalidPosition` | 13   | Invalid position            |
//! | `TypeMismatch`    | 14   | Type mismatch               |

use thiserror::Error;

/// Stable numeric identifiers for each error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCode {
    IndexOutOfRange = 2,
    InvalidArgument = 3,
    EmptyContainer = 4,
    InvalidSize = 8,
    InvalidRange = 9,
    InvalidPosition = 13,
    TypeMismatch = 14,
}

impl ErrorCode {
    /// Numeric code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Canonical human-readable message, without any detail suffix.
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::IndexOutOfRange => "Index out of range",
            ErrorCode::InvalidArgument => "Invalid argument",
            ErrorCode::EmptyContainer => "Container is empty",
            ErrorCode::InvalidSize => "Invalid size specified",
            ErrorCode::InvalidRange => "Invalid range specified",
            ErrorCode::InvalidPosition => "Invalid position",
            ErrorCode::TypeMismatch => "Type mismatch",
        }
    }
}

/// Errors produced by sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Index outside `[0, len)` for access, or `[0, len]` for insertion.
    #[error("Index out of range: index {index}, length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Front, back, get or delete on a zero-length container.
    #[error("Container is empty")]
    EmptyContainer,

    /// A size or capacity request that can't be honoured.
    #[error("Invalid size specified: {requested}")]
    InvalidSize { requested: i128 },

    /// Half-open range violating `start <= end <= len`.
    #[error("Invalid range specified: [{start}, {end}) over length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// Operands of combine/concat have incompatible kinds.
    #[error("Type mismatch: cannot join {left} with {right}")]
    TypeMismatch { left: String, right: String },

    /// Malformed caller input at the collaborator boundary.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Caller-supplied position outside the operation's domain.
    #[error("Invalid position: {0}")]
    InvalidPosition(String),
}

impl SequenceError {
    /// Kind of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SequenceError::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
            SequenceError::EmptyContainer => ErrorCode::EmptyContainer,
            SequenceError::InvalidSize { .. } => ErrorCode::InvalidSize,
            SequenceError::InvalidRange { .. } => ErrorCode::InvalidRange,
            SequenceError::TypeMismatch { .. } => ErrorCode::TypeMismatch,
            SequenceError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            SequenceError::InvalidPosition(_) => ErrorCode::InvalidPosition,
        }
    }

    pub(crate) fn type_mismatch(left: impl ToString, right: impl ToString) -> Self {
        SequenceError::TypeMismatch {
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SequenceError>;

/// Check `index < len`.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(SequenceError::IndexOutOfRange { index, len })
    }
}

/// Check `index <= len` (an insertion point).
#[inline]
pub(crate) fn check_insertion_point(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(SequenceError::IndexOutOfRange { index, len })
    }
}

/// Check the half-open range `[start, end)` against `len`.
#[inline]
pub(crate) fn check_range(start: usize, end: usize, len: usize) -> Result<()> {
    if start <= end && end <= len {
        Ok(())
    } else {
        Err(SequenceError::InvalidRange { start, end, len })
    }
}
