// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Copy-on-write wrapper.
//!
//! `Immutable<S>` exposes the same operations as `S`, but every structural
//! one clones the inner sequence, applies the mutable primitive to the clone
//! and hands the clone back. The receiver is never touched, so holding a
//! reference to an immutable sequence is as good as holding a snapshot.
//!
//! ```text
//!   seq ──add_to_end(4)──► clone ──► push 4 ──► new Immutable
//!    │
//!    └── still [1, 2, 3]
//! ```
//!
//! A failed operation returns the error before anything is wrapped; the
//! partially built clone is simply dropped.

use std::fmt;

use serde::ser::{Serialize, Serializer};
use tracing::trace;

use crate::error::Result;
use crate::sequence::{ArraySequence, BackingKind, ListSequence, SequenceOps};

/// Persistent view over a mutable sequence type.
#[derive(Clone)]
pub struct Immutable<S> {
    inner: S,
}

/// Immutable sequence over an array store.
pub type ImmutableArraySequence<T> = Immutable<ArraySequence<T>>;

/// Immutable sequence over a linked store.
pub type ImmutableListSequence<T> = Immutable<ListSequence<T>>;

impl<S: SequenceOps> Immutable<S> {
    /// Freeze `inner`. Ownership moves in, so nothing else can mutate it.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Clone the payload, run `op` on the clone, wrap the result.
    fn with_copy<F>(&self, op: &'static str, f: F) -> Result<Self>
    where
        F: FnOnce(&mut S) -> Result<&mut S>,
    {
        let backing = S::BACKING;
        trace!(op, %backing, size = self.inner.size(), "copy-on-write");
        let mut copy = self.inner.clone();
        f(&mut copy)?;
        Ok(Self { inner: copy })
    }

    pub fn front(&self) -> Result<&S::Item> {
        self.inner.front()
    }

    pub fn back(&self) -> Result<&S::Item> {
        self.inner.back()
    }

    pub fn at(&self, index: usize) -> Result<&S::Item> {
        self.inner.at(index)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &S::Item> {
        self.inner.iter()
    }

    /// New sequence with `value` appended.
    pub fn add_to_end(&self, value: S::Item) -> Result<Self> {
        self.with_copy("add_to_end", |s| s.add_to_end(value))
    }

    /// New sequence with `value` prepended.
    pub fn add_to_front(&self, value: S::Item) -> Result<Self> {
        self.with_copy("add_to_front", |s| s.add_to_front(value))
    }

    /// New sequence with `value` at `index`.
    pub fn insert(&self, value: S::Item, index: usize) -> Result<Self> {
        self.with_copy("insert", |s| s.insert(value, index))
    }

    /// New sequence without the element at `index`.
    pub fn delete(&self, index: usize) -> Result<Self> {
        self.with_copy("delete", |s| s.delete(index))
    }

    pub fn slice(&self, start: usize, end: usize) -> Result<Self> {
        Ok(Self {
            inner: self.inner.slice(start, end)?,
        })
    }

    pub fn combine(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            inner: self.inner.combine(&other.inner)?,
        })
    }

    /// Independent copy. Indistinguishable from `copy` for an immutable value.
    pub fn reference(&self) -> Self {
        self.clone()
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }

    #[inline]
    pub fn backing(&self) -> BackingKind {
        S::BACKING
    }

    pub fn as_inner(&self) -> &S {
        &self.inner
    }

    /// Thaw into a mutable sequence.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: fmt::Debug> fmt::Debug for Immutable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Immutable").field(&self.inner).finish()
    }
}

impl<S: Serialize> Serialize for Immutable<S> {
    fn serialize<Ser: Serializer>(
        &self,
        serializer: Ser,
    ) -> std::result::Result<Ser::Ok, Ser::Error> {
        self.inner.serialize(serializer)
    }
}
