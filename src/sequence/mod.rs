// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The sequence contract and the adapters that implement it.
//!
//! [`SequenceOps`] is the operation set every backing exposes identically.
//! Two mutable adapters implement it ([`ArraySequence`], [`ListSequence`]) and
//! [`Immutable`] wraps either of them with copy-on-write semantics.
//!
//! # Contract
//!
//! | Operation        | Fails with                                       |
//! |------------------|--------------------------------------------------|
//! | `front`/`back`   | `EmptyContainer`                                 |
//! | `at(i)`          | `IndexOutOfRange` unless `i < size`              |
//! | `slice(a, b)`    | `InvalidRange` unless `a <= b <= size`           |
//! | `insert(v, i)`   | `IndexOutOfRange` unless `i <= size`             |
//! | `delete(i)`      | `EmptyContainer` if empty, else `IndexOutOfRange`|
//! | `size`           | never                                            |
//!
//! Every check runs before storage is touched, so an `Err` means the receiver
//! is exactly as it was.

mod array;
mod immutable;
mod list;

pub use array::ArraySequence;
pub use immutable::{Immutable, ImmutableArraySequence, ImmutableListSequence};
pub use list::ListSequence;

use std::fmt;

use serde::Serialize;

use crate::error::Result;

/// Which store a sequence delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackingKind {
    Array,
    List,
}

impl fmt::Display for BackingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackingKind::Array => write!(f, "array"),
            BackingKind::List => write!(f, "list"),
        }
    }
}

/// Whether structural operations mutate in place or copy first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mutability {
    Mutable,
    Immutable,
}

impl fmt::Display for Mutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutability::Mutable => write!(f, "mutable"),
            Mutability::Immutable => write!(f, "immutable"),
        }
    }
}

/// A concrete variant: one backing kind crossed with one mutability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SequenceKind {
    pub backing: BackingKind,
    pub mutability: Mutability,
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mutability, self.backing)
    }
}

/// The operation set shared by array- and list-backed sequences.
///
/// Structural primitives mutate in place and hand back `&mut Self` so calls
/// can be chained. Copy-on-write behaviour is layered on top by [`Immutable`].
pub trait SequenceOps: Clone {
    type Item;

    /// Backing kind of every value of this type.
    const BACKING: BackingKind;

    fn front(&self) -> Result<&Self::Item>;
    fn back(&self) -> Result<&Self::Item>;
    fn at(&self, index: usize) -> Result<&Self::Item>;
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Half-open `[start, end)` copy with the same backing.
    fn slice(&self, start: usize, end: usize) -> Result<Self>;

    /// `self ++ other` in fresh storage.
    fn combine(&self, other: &Self) -> Result<Self>;

    fn add_to_end(&mut self, value: Self::Item) -> Result<&mut Self>;
    fn add_to_front(&mut self, value: Self::Item) -> Result<&mut Self>;
    fn insert(&mut self, value: Self::Item, index: usize) -> Result<&mut Self>;
    fn delete(&mut self, index: usize) -> Result<&mut Self>;

    fn iter(&self) -> impl Iterator<Item = &Self::Item>;
}
