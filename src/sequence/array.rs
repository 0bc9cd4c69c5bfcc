// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Array-backed sequence with amortized growth.
//!
//! The store is a plain exact-fit buffer; this adapter decides when to grow
//! it. Before any mutation that needs one more slot than is allocated, the
//! capacity moves to `max(required, factor * capacity)`, then the logical
//! length is bumped inside the new headroom.
//!
//! | Operation      | Cost                          |
//! |----------------|-------------------------------|
//! | `at`           | O(1)                          |
//! | `add_to_end`   | amortized O(1)                |
//! | `add_to_front` | O(n) shift                    |
//! | `insert(v, i)` | O(n - i) shift                |
//! | `delete(i)`    | O(n - i) shift                |

use std::fmt;

use serde::ser::{Serialize, Serializer};
use tracing::trace;

use crate::config::GrowthPolicy;
use crate::error::{check_index, check_insertion_point, Result, SequenceError};
use crate::sequence::{BackingKind, SequenceOps};
use crate::store::ArrayStore;

/// Mutable sequence over an [`ArrayStore`].
#[derive(Clone)]
pub struct ArraySequence<T> {
    store: ArrayStore<T>,
    policy: GrowthPolicy,
}

impl<T: Clone + Default> ArraySequence<T> {
    /// Empty sequence with the default growth policy.
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Empty sequence with `policy.initial_capacity()` slots allocated.
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        let mut store = ArrayStore::new();
        store.reserve_exact(policy.initial_capacity());
        Self { store, policy }
    }

    /// Sequence of `len` default values.
    pub fn with_len(len: usize) -> Result<Self> {
        let policy = GrowthPolicy::default();
        let store = ArrayStore::with_len(len)?;
        Ok(Self::from_store(store, policy))
    }

    /// Sequence holding a copy of `items`, capacity `max(len, initial)`.
    pub fn from_slice(items: &[T]) -> Self {
        Self::from_store(ArrayStore::from_slice(items), GrowthPolicy::default())
    }

    /// Same as [`from_slice`](Self::from_slice) with an explicit policy.
    pub fn from_slice_with_policy(items: &[T], policy: GrowthPolicy) -> Self {
        Self::from_store(ArrayStore::from_slice(items), policy)
    }

    fn from_store(mut store: ArrayStore<T>, policy: GrowthPolicy) -> Self {
        store.reserve_exact(policy.initial_capacity());
        Self { store, policy }
    }

    /// Grow so that at least `required` slots are allocated.
    fn ensure_capacity(&mut self, required: usize) -> Result<()> {
        let current = self.store.capacity();
        if required <= current {
            return Ok(());
        }
        let next = self.policy.next_capacity(current, required);
        crate::contracts::check_growth(current, next, required, self.policy.factor());
        trace!(from = current, to = next, required, "growing array sequence");
        self.store.try_reserve_exact(next)
    }

    /// Make room for `additional` more elements, growing per the policy.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let required = self
            .store
            .len()
            .checked_add(additional)
            .ok_or(SequenceError::InvalidSize {
                requested: self.store.len() as i128 + additional as i128,
            })?;
        self.ensure_capacity(required)
    }

    /// Allocated slots. Always `>= size()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    #[inline]
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Replace the element at `index`, returning the old value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.store.set(index, value)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.store.as_slice()
    }

    /// Bump the length by one and return the index of the new last slot.
    fn grow_by_one(&mut self) -> Result<usize> {
        let len = self.store.len();
        let required = len.checked_add(1).ok_or(SequenceError::InvalidSize {
            requested: len as i128 + 1,
        })?;
        self.ensure_capacity(required)?;
        self.store.resize(required)?;
        Ok(len)
    }
}

impl<T: Clone + Default> SequenceOps for ArraySequence<T> {
    type Item = T;

    const BACKING: BackingKind = BackingKind::Array;

    fn front(&self) -> Result<&T> {
        if self.store.is_empty() {
            return Err(SequenceError::EmptyContainer);
        }
        self.store.get(0)
    }

    fn back(&self) -> Result<&T> {
        match self.store.len() {
            0 => Err(SequenceError::EmptyContainer),
            len => self.store.get(len - 1),
        }
    }

    fn at(&self, index: usize) -> Result<&T> {
        self.store.get(index)
    }

    #[inline]
    fn size(&self) -> usize {
        self.store.len()
    }

    fn slice(&self, start: usize, end: usize) -> Result<Self> {
        let store = self.store.sub_range(start, end)?;
        Ok(Self::from_store(store, self.policy))
    }

    fn combine(&self, other: &Self) -> Result<Self> {
        let total = self.size().checked_add(other.size()).ok_or(SequenceError::InvalidSize {
            requested: self.size() as i128 + other.size() as i128,
        })?;
        let mut store = ArrayStore::with_capacity(total.max(self.policy.initial_capacity()))?;
        store.resize(total)?;
        let (left, right) = store.as_mut_slice().split_at_mut(self.size());
        left.clone_from_slice(self.as_slice());
        right.clone_from_slice(other.as_slice());
        Ok(Self {
            store,
            policy: self.policy,
        })
    }

    fn add_to_end(&mut self, value: T) -> Result<&mut Self> {
        let slot = self.grow_by_one()?;
        self.store.set(slot, value)?;
        Ok(self)
    }

    fn add_to_front(&mut self, value: T) -> Result<&mut Self> {
        self.insert(value, 0)
    }

    fn insert(&mut self, value: T, index: usize) -> Result<&mut Self> {
        check_insertion_point(index, self.store.len())?;
        self.grow_by_one()?;
        // The fresh default slot at the end rotates into `index`.
        self.store.as_mut_slice()[index..].rotate_right(1);
        self.store.set(index, value)?;
        Ok(self)
    }

    fn delete(&mut self, index: usize) -> Result<&mut Self> {
        if self.store.is_empty() {
            return Err(SequenceError::EmptyContainer);
        }
        check_index(index, self.store.len())?;
        self.store.remove(index)?;
        Ok(self)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.store.iter()
    }
}

impl<T: Clone + Default> Default for ArraySequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArraySequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArraySequence")
            .field("items", &self.store.as_slice())
            .field("capacity", &self.store.capacity())
            .finish()
    }
}

impl<T: Clone + Default> FromIterator<T> for ArraySequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_store(iter.into_iter().collect(), GrowthPolicy::default())
    }
}

impl<T: Serialize> Serialize for ArraySequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.store.serialize(serializer)
    }
}
