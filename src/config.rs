// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Growth policy for array-backed sequences.
//!
//! Capacity starts at `initial_capacity` and, whenever a mutation needs more
//! room than is allocated, jumps to `max(required, factor * capacity)`. With
//! the default factor of 2 that makes `add_to_end` amortized O(1).

use serde::Serialize;

use crate::error::{Result, SequenceError};

/// Capacity growth settings for [`crate::ArraySequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrowthPolicy {
    initial_capacity: usize,
    factor: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            factor: Self::DEFAULT_FACTOR,
        }
    }
}

impl GrowthPolicy {
    pub const DEFAULT_INITIAL_CAPACITY: usize = 1;
    pub const DEFAULT_FACTOR: usize = 2;
    /// Upper bound on the up-front allocation a policy may request.
    pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;
    /// Upper bound on the growth factor.
    pub const MAX_FACTOR: usize = 16;

    /// Validated policy.
    ///
    /// `initial_capacity` must lie in `1..=MAX_INITIAL_CAPACITY` (`InvalidSize`)
    /// and `factor` in `2..=MAX_FACTOR` (`InvalidArgument`). A factor below 2
    /// loses the amortized bound.
    pub fn new(initial_capacity: usize, factor: usize) -> Result<Self> {
        if initial_capacity == 0 || initial_capacity > Self::MAX_INITIAL_CAPACITY {
            return Err(SequenceError::InvalidSize {
                requested: initial_capacity as i128,
            });
        }
        if !(2..=Self::MAX_FACTOR).contains(&factor) {
            return Err(SequenceError::InvalidArgument(format!(
                "growth factor must lie in 2..={}, got {}",
                Self::MAX_FACTOR,
                factor
            )));
        }
        Ok(Self {
            initial_capacity,
            factor,
        })
    }

    #[inline]
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    #[inline]
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Capacity to move to when `required` slots are needed and `current`
    /// are allocated. Returns `current` when it already suffices.
    #[inline]
    pub fn next_capacity(&self, current: usize, required: usize) -> usize {
        if required <= current {
            current
        } else {
            required.max(current.saturating_mul(self.factor))
        }
    }
}
