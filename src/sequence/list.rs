// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! List-backed sequence.
//!
//! A thin binding of the contract onto [`ListStore`]. Ends are O(1); anything
//! indexed walks from the head.

use std::fmt;

use serde::ser::{Serialize, Serializer};

use crate::error::{check_index, Result};
use crate::sequence::{BackingKind, SequenceOps};
use crate::store::ListStore;

/// Mutable sequence over a [`ListStore`].
#[derive(Clone)]
pub struct ListSequence<T> {
    store: ListStore<T>,
}

impl<T: Clone> ListSequence<T> {
    pub fn new() -> Self {
        Self {
            store: ListStore::new(),
        }
    }

    /// Sequence holding a copy of `items`.
    pub fn from_slice(items: &[T]) -> Self {
        Self {
            store: ListStore::from_slice(items),
        }
    }

    /// Replace the element at `index`, returning the old value. O(index).
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.store.set(index, value)
    }

    /// The underlying chain, for structural checks.
    pub fn store(&self) -> &ListStore<T> {
        &self.store
    }
}

impl<T: Clone> SequenceOps for ListSequence<T> {
    type Item = T;

    const BACKING: BackingKind = BackingKind::List;

    fn front(&self) -> Result<&T> {
        self.store.first()
    }

    fn back(&self) -> Result<&T> {
        self.store.last()
    }

    /// Bounds are checked here rather than in the store, so an empty list
    /// reports `IndexOutOfRange` like an empty array does.
    fn at(&self, index: usize) -> Result<&T> {
        check_index(index, self.store.len())?;
        self.store.get(index)
    }

    #[inline]
    fn size(&self) -> usize {
        self.store.len()
    }

    fn slice(&self, start: usize, end: usize) -> Result<Self> {
        Ok(Self {
            store: self.store.sub_range(start, end)?,
        })
    }

    fn combine(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            store: self.store.concat(&other.store),
        })
    }

    fn add_to_end(&mut self, value: T) -> Result<&mut Self> {
        self.store.append(value);
        Ok(self)
    }

    fn add_to_front(&mut self, value: T) -> Result<&mut Self> {
        self.store.prepend(value);
        Ok(self)
    }

    fn insert(&mut self, value: T, index: usize) -> Result<&mut Self> {
        self.store.insert_at(value, index)?;
        Ok(self)
    }

    fn delete(&mut self, index: usize) -> Result<&mut Self> {
        self.store.remove(index)?;
        Ok(self)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.store.iter()
    }
}

impl<T: Clone> Default for ListSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ListSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ListSequence").field(&self.store).finish()
    }
}

impl<T> FromIterator<T> for ListSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            store: iter.into_iter().collect(),
        }
    }
}

impl<T: Serialize> Serialize for ListSequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.store.serialize(serializer)
    }
}
