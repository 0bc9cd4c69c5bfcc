// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Backing stores: the raw containers the sequence adapters delegate to.
//!
//! Neither store knows about growth policy or mutability. They validate their
//! arguments, keep their own invariants, and hand out freshly owned copies
//! for sub-ranges.

mod array;
mod list;

pub use array::ArrayStore;
pub use list::{Iter as ListIter, ListStore};
