// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the backing stores and the growth policy.
//!
//! Debug-mode assertions that re-check the structural invariants after every
//! mutation. They cost nothing in release builds (`debug_assert!`) and catch
//! a broken relink or an off-by-one in the shift loops at the point where it
//! happens instead of three operations later.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function           | Invariant                                   |
//! |-----------------------------|---------------------------------------------|
//! | `check_array_len`           | `len <= capacity`                           |
//! | `check_array_spare_slots`   | `[len, capacity)` parked at `T::default()`  |
//! | `check_list_ends`           | head/tail emptiness, tail link, slot count  |
//! | `check_list_store`          | all of the above plus a walk of the chain   |
//! | `check_growth`              | `new = max(required, factor * old)`         |
//!
//! `check_list_ends` is O(1) and runs after every list mutation.
//! `check_list_store` walks the chain, so it only runs after bulk builds and
//! arena compaction, both of which are O(n) already.

use thiserror::Error;

use crate::store::{ArrayStore, ListStore};

/// A structural invariant that a store failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// Array logical length exceeds its allocated slots.
    #[error("len {len} > capacity {capacity}")]
    LengthExceedsCapacity { len: usize, capacity: usize },
    /// A slot past the logical end holds a non-default value.
    #[error("spare slot {position} holds a live value")]
    DirtySpareSlot { position: usize },
    /// Presence of head/tail disagrees with the node count.
    #[error("head present: {has_head}, tail present: {has_tail}, but count is {count}")]
    DanglingEnds {
        has_head: bool,
        has_tail: bool,
        count: usize,
    },
    /// A `next` link points at a vacant or missing slot.
    #[error("link after node {position} points at a vacant slot")]
    BrokenLink { position: usize },
    /// Walking the chain visits a different number of nodes than recorded.
    #[error("count {claimed} but walked {walked} nodes")]
    ChainLengthMismatch { claimed: usize, walked: usize },
    /// The recorded tail is not the last node of the chain.
    #[error("tail is not the last node of the chain")]
    StaleTail,
    /// Occupied arena slots that are not reachable from the head.
    #[error("{occupied} occupied slots for {count} linked nodes")]
    LeakedNodes { occupied: usize, count: usize },
}

// ============================================================================
// ARRAY STORE CONTRACTS
// ============================================================================

/// Check `len <= capacity`.
///
/// # Panics (debug builds only)
/// Panics if the logical length runs past the allocation.
#[inline]
pub fn check_array_len<T>(store: &ArrayStore<T>) {
    debug_assert!(
        store.len() <= store.capacity(),
        "Contract violation: ArrayStore len {} > capacity {}",
        store.len(),
        store.capacity()
    );
}

/// Check that every slot in `[len, capacity)` is parked at the default value.
pub fn check_array_spare_slots<T: Default + PartialEq>(
    store: &ArrayStore<T>,
) -> Result<(), InvariantError> {
    if store.len() > store.capacity() {
        return Err(InvariantError::LengthExceedsCapacity {
            len: store.len(),
            capacity: store.capacity(),
        });
    }
    let parked = T::default();
    match store.spare_slots().iter().position(|slot| *slot != parked) {
        Some(offset) => Err(InvariantError::DirtySpareSlot {
            position: store.len() + offset,
        }),
        None => Ok(()),
    }
}

// ============================================================================
// LIST STORE CONTRACTS
// ============================================================================

/// Check head, tail and slot count without walking the chain.
///
/// # Panics (debug builds only)
/// Panics with the violated invariant.
#[inline]
pub fn check_list_ends<T>(store: &ListStore<T>) {
    if cfg!(debug_assertions) {
        if let Err(violation) = store.check_ends() {
            panic!("Contract violation: ListStore - {}", violation);
        }
    }
}

/// Walk the chain and check head, tail and count.
///
/// # Panics (debug builds only)
/// Panics with the violated invariant.
#[inline]
pub fn check_list_store<T>(store: &ListStore<T>) {
    if cfg!(debug_assertions) {
        if let Err(violation) = store.verify() {
            panic!("Contract violation: ListStore - {}", violation);
        }
    }
}

// ============================================================================
// GROWTH POLICY CONTRACTS
// ============================================================================

/// Check a capacity step taken by the growth policy.
///
/// # Panics (debug builds only)
/// Panics if the new capacity is not `max(required, factor * old)` or does not
/// cover `required`.
#[inline]
pub fn check_growth(old: usize, new: usize, required: usize, factor: usize) {
    debug_assert!(
        new >= required,
        "Contract violation: growth to {} does not cover required {}",
        new,
        required
    );
    debug_assert_eq!(
        new,
        required.max(old.saturating_mul(factor)),
        "Contract violation: growth from {} should be max({}, {} * {})",
        old,
        required,
        factor,
        old
    );
}
