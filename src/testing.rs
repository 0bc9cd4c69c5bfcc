// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::handle::Sequence;
use crate::sequence::{BackingKind, Mutability, SequenceKind};

/// Every `(backing, mutability)` combination, mutable ones first.
pub fn all_kinds() -> [SequenceKind; 4] {
    [
        SequenceKind {
            backing: BackingKind::Array,
            mutability: Mutability::Mutable,
        },
        SequenceKind {
            backing: BackingKind::List,
            mutability: Mutability::Mutable,
        },
        SequenceKind {
            backing: BackingKind::Array,
            mutability: Mutability::Immutable,
        },
        SequenceKind {
            backing: BackingKind::List,
            mutability: Mutability::Immutable,
        },
    ]
}

/// Integer sequence of the given kind.
pub fn int_sequence(kind: SequenceKind, items: &[i64]) -> Sequence<i64> {
    Sequence::from_slice(kind.backing, kind.mutability, items)
}

/// The backing kind that is not `backing`.
pub fn other_backing(backing: BackingKind) -> BackingKind {
    match backing {
        BackingKind::Array => BackingKind::List,
        BackingKind::List => BackingKind::Array,
    }
}
