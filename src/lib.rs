// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Generic sequence containers over interchangeable backings.
//!
//! One operation set, two storage strategies, two mutation disciplines.
//! A contiguous buffer with amortized growth and a singly linked chain both
//! implement [`SequenceOps`]; either can be used in place or wrapped in
//! [`Immutable`] for copy-on-write semantics. [`Sequence`] folds the four
//! combinations into one handle with explicit aliasing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │    store     │────▶│     sequence     │────▶│    handle    │
//! │ (ArrayStore, │     │ (SequenceOps,    │     │  (Sequence,  │
//! │  ListStore)  │     │  ArraySequence,  │     │   aliasing)  │
//! └──────────────┘     │  ListSequence,   │     └──────────────┘
//!        │             │  Immutable)      │            │
//!        │             └──────────────────┘            ▼
//!        │                      │              ┌──────────────┐
//!        ▼                      ▼              │   dynamic    │
//! ┌─────────────────────────────────────┐      │ (AnySequence)│
//! │            contracts.rs             │      └──────────────┘
//! │  (debug-build invariant checks,     │
//! │   InvariantError)                   │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Variants
//!
//! | Backing | Mutable          | Immutable                  | `reference()` |
//! |---------|------------------|----------------------------|---------------|
//! | array   | `ArraySequence`  | `ImmutableArraySequence`   | alias / copy  |
//! | list    | `ListSequence`   | `ImmutableListSequence`    | alias / copy  |
//!
//! # Usage
//!
//! ```
//! use seqkit::{BackingKind, Mutability, Sequence};
//!
//! let seq = Sequence::new(BackingKind::List, Mutability::Mutable);
//! seq.add_to_end(1)?.add_to_end(2)?.add_to_front(0)?;
//! assert_eq!(seq.to_vec(), vec![0, 1, 2]);
//!
//! let frozen = Sequence::from_slice(BackingKind::Array, Mutability::Immutable, &[1, 2]);
//! let grown = frozen.add_to_end(3)?;
//! assert_eq!(frozen.size(), 2);
//! assert_eq!(grown.size(), 3);
//! # Ok::<(), seqkit::SequenceError>(())
//! ```

pub mod config;
pub mod contracts;
pub mod dynamic;
pub mod error;
pub mod handle;
pub mod sequence;
pub mod store;
pub mod testing;

pub use config::GrowthPolicy;
pub use contracts::InvariantError;
pub use dynamic::{AnySequence, AnyValue, ElementKind};
pub use error::{ErrorCode, Result, SequenceError};
pub use handle::Sequence;
pub use sequence::{
    ArraySequence, BackingKind, Immutable, ImmutableArraySequence, ImmutableListSequence,
    ListSequence, Mutability, SequenceKind, SequenceOps,
};
pub use store::{ArrayStore, ListStore};
