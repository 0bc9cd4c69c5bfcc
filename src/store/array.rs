// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Contiguous buffer with a logical length separate from its capacity.
//!
//! The buffer always holds exactly `capacity` initialized slots. Slots in
//! `[len, capacity)` are parked at `T::default()` so that growing the logical
//! length never exposes a stale value.
//!
//! # Invariants
//!
//! - `len <= capacity`
//! - every slot in `[len, capacity)` equals `T::default()` (checked by
//!   `contracts::check_array_spare_slots` for `T: PartialEq`)
//!
//! There is no amortization here. `resize` past the capacity re-allocates to
//! exactly the requested length, and `reserve_exact` is the only way to get
//! headroom. The doubling policy lives in [`crate::ArraySequence`].

use std::fmt;
use std::mem;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::{check_index, check_range, Result, SequenceError};

/// Largest number of slots a buffer of `T` may hold.
#[inline]
fn max_slots<T>() -> usize {
    isize::MAX as usize / mem::size_of::<T>().max(1)
}

/// Growable contiguous buffer.
#[derive(Clone)]
pub struct ArrayStore<T> {
    slots: Vec<T>,
    len: usize,
}

impl<T> ArrayStore<T> {
    /// Empty store with zero capacity.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Bounds-checked read.
    pub fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.len)?;
        Ok(&self.slots[index])
    }

    /// Live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Slots past the logical end. Only the contracts look at these.
    pub(crate) fn spare_slots(&self) -> &[T] {
        &self.slots[self.len..]
    }
}

impl<T: Default> ArrayStore<T> {
    /// Empty store with `capacity` pre-allocated slots.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut store = Self::new();
        store.try_reserve_exact(capacity)?;
        Ok(store)
    }

    /// Store of `len` default values, capacity exactly `len`.
    pub fn with_len(len: usize) -> Result<Self> {
        let mut store = Self::new();
        store.resize(len)?;
        Ok(store)
    }

    /// Replace the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        check_index(index, self.len)?;
        Ok(mem::replace(&mut self.slots[index], value))
    }

    /// Grow the physical buffer to exactly `capacity` slots.
    ///
    /// A no-op when the buffer is already at least that large; the buffer
    /// never shrinks through this call. Fails with `InvalidSize` when the
    /// buffer would exceed `isize::MAX` bytes or the allocator refuses it.
    pub fn try_reserve_exact(&mut self, capacity: usize) -> Result<()> {
        if capacity <= self.slots.len() {
            return Ok(());
        }
        let invalid = || SequenceError::InvalidSize {
            requested: capacity as i128,
        };
        if capacity > max_slots::<T>() {
            return Err(invalid());
        }
        self.slots
            .try_reserve_exact(capacity - self.slots.len())
            .map_err(|_| invalid())?;
        self.slots.resize_with(capacity, T::default);
        Ok(())
    }

    /// Like [`try_reserve_exact`](Self::try_reserve_exact).
    ///
    /// # Panics
    /// Panics wherever `try_reserve_exact` would return an error.
    pub fn reserve_exact(&mut self, capacity: usize) {
        if let Err(err) = self.try_reserve_exact(capacity) {
            panic!("capacity overflow: {}", err);
        }
    }

    /// Set the logical length.
    ///
    /// Growing fills `[len, new_len)` with defaults, re-allocating to exactly
    /// `new_len` if the capacity is too small. Shrinking parks the discarded
    /// tail at `T::default()` and keeps the capacity.
    pub fn resize(&mut self, new_len: usize) -> Result<()> {
        if new_len > self.slots.len() {
            self.try_reserve_exact(new_len)?;
        }
        if new_len < self.len {
            self.slots[new_len..self.len].fill_with(T::default);
        } else {
            self.slots[self.len..new_len].fill_with(T::default);
        }
        self.len = new_len;
        crate::contracts::check_array_len(self);
        Ok(())
    }

    /// Remove the element at `index`, shifting the suffix left by one.
    ///
    /// O(len - index).
    pub fn remove(&mut self, index: usize) -> Result<T> {
        check_index(index, self.len)?;
        let removed = mem::take(&mut self.slots[index]);
        // The vacated slot rides the rotation to position len - 1.
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        crate::contracts::check_array_len(self);
        Ok(removed)
    }
}

impl<T: Clone + Default> ArrayStore<T> {
    /// Copy `items` into a store whose capacity equals `items.len()`.
    pub fn from_slice(items: &[T]) -> Self {
        Self {
            slots: items.to_vec(),
            len: items.len(),
        }
    }

    /// Copy of the half-open range `[start, end)` in a freshly owned store.
    pub fn sub_range(&self, start: usize, end: usize) -> Result<Self> {
        check_range(start, end, self.len)?;
        Ok(Self::from_slice(&self.slots[start..end]))
    }
}

impl<T> Default for ArrayStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStore")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("items", &self.as_slice())
            .finish()
    }
}

impl<T: Default> FromIterator<T> for ArrayStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let slots: Vec<T> = iter.into_iter().collect();
        let len = slots.len();
        Self { slots, len }
    }
}

impl<'a, T> IntoIterator for &'a ArrayStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Serialize> Serialize for ArrayStore<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}
