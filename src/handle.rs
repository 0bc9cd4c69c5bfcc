// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One handle type over all four sequence variants.
//!
//! [`Sequence`] is a closed tagged union of `{array, list} x {mutable,
//! immutable}`. Every variant answers the same calls, so callers pick a
//! backing at construction time and never again.
//!
//! # Aliasing
//!
//! Mutable variants keep their adapter behind `Rc<RefCell<_>>`:
//!
//! ```text
//!   a ──┐
//!       ├──► Rc<RefCell<ArraySequence>>     a.reference() shares the cell
//!   b ──┘
//!
//!   c ──────► Rc<RefCell<ArraySequence>>    a.copy() gets a new one
//! ```
//!
//! Structural calls on a mutable handle change the shared cell and return
//! another handle to it, so `a.add_to_end(1)?` is visible through `b`.
//! Immutable handles hold their adapter by value; `reference()` degrades to
//! a copy and structural calls return a new handle.
//!
//! Borrows of the cell never outlive a single method call, so the runtime
//! borrow check cannot fail from safe use of this API.

use std::cell::RefCell;
use std::fmt;
use std::ops::Add;
use std::rc::Rc;

use serde::ser::{Serialize, SerializeSeq, Serializer};
use tracing::debug;

use crate::config::GrowthPolicy;
use crate::error::{Result, SequenceError};
use crate::sequence::{
    ArraySequence, BackingKind, Immutable, ImmutableArraySequence, ImmutableListSequence,
    ListSequence, Mutability, SequenceKind, SequenceOps,
};
use crate::store::ListIter;

enum Variant<T> {
    Array(Rc<RefCell<ArraySequence<T>>>),
    List(Rc<RefCell<ListSequence<T>>>),
    ImmutableArray(ImmutableArraySequence<T>),
    ImmutableList(ImmutableListSequence<T>),
}

/// Borrowed adapter, whichever variant it came from.
enum View<'a, T> {
    Array(&'a ArraySequence<T>),
    List(&'a ListSequence<T>),
}

/// Owned adapter waiting to be wrapped with a mutability.
enum Payload<T> {
    Array(ArraySequence<T>),
    List(ListSequence<T>),
}

enum ViewIter<'a, T> {
    Array(std::slice::Iter<'a, T>),
    List(ListIter<'a, T>),
}

impl<'a, T> Iterator for ViewIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match self {
            ViewIter::Array(it) => it.next(),
            ViewIter::List(it) => it.next(),
        }
    }
}

impl<'a, T: Clone + Default> View<'a, T> {
    fn size(&self) -> usize {
        match self {
            View::Array(s) => s.size(),
            View::List(s) => s.size(),
        }
    }

    fn front(&self) -> Result<&'a T> {
        match *self {
            View::Array(s) => s.front(),
            View::List(s) => s.front(),
        }
    }

    fn back(&self) -> Result<&'a T> {
        match *self {
            View::Array(s) => s.back(),
            View::List(s) => s.back(),
        }
    }

    fn at(&self, index: usize) -> Result<&'a T> {
        match *self {
            View::Array(s) => s.at(index),
            View::List(s) => s.at(index),
        }
    }

    fn iter(&self) -> ViewIter<'a, T> {
        match *self {
            View::Array(s) => ViewIter::Array(s.as_slice().iter()),
            View::List(s) => ViewIter::List(s.store().iter()),
        }
    }

    fn to_payload(&self) -> Payload<T> {
        match *self {
            View::Array(s) => Payload::Array(s.clone()),
            View::List(s) => Payload::List(s.clone()),
        }
    }
}

/// Runs one structural primitive against whichever variant `$self` holds.
///
/// Mutable variants change the shared cell and hand back an alias; immutable
/// variants hand back the new sequence the wrapper produced.
macro_rules! structural {
    ($self:ident, $s:ident => $op:expr) => {
        match &$self.variant {
            Variant::Array(cell) => {
                {
                    let mut guard = cell.borrow_mut();
                    let $s = &mut *guard;
                    $op?;
                }
                Ok($self.reference())
            }
            Variant::List(cell) => {
                {
                    let mut guard = cell.borrow_mut();
                    let $s = &mut *guard;
                    $op?;
                }
                Ok($self.reference())
            }
            Variant::ImmutableArray($s) => Ok(Self::from_variant(Variant::ImmutableArray($op?))),
            Variant::ImmutableList($s) => Ok(Self::from_variant(Variant::ImmutableList($op?))),
        }
    };
}

/// A sequence of `T` over one of the four backing variants.
pub struct Sequence<T> {
    variant: Variant<T>,
}

impl<T: Clone + Default> Sequence<T> {
    fn from_variant(variant: Variant<T>) -> Self {
        Self { variant }
    }

    fn assemble(payload: Payload<T>, mutability: Mutability) -> Self {
        let variant = match (payload, mutability) {
            (Payload::Array(s), Mutability::Mutable) => Variant::Array(Rc::new(RefCell::new(s))),
            (Payload::List(s), Mutability::Mutable) => Variant::List(Rc::new(RefCell::new(s))),
            (Payload::Array(s), Mutability::Immutable) => {
                Variant::ImmutableArray(Immutable::new(s))
            }
            (Payload::List(s), Mutability::Immutable) => Variant::ImmutableList(Immutable::new(s)),
        };
        Self { variant }
    }

    fn with_view<R>(&self, f: impl FnOnce(View<'_, T>) -> R) -> R {
        match &self.variant {
            Variant::Array(cell) => f(View::Array(&cell.borrow())),
            Variant::List(cell) => f(View::List(&cell.borrow())),
            Variant::ImmutableArray(imm) => f(View::Array(imm.as_inner())),
            Variant::ImmutableList(imm) => f(View::List(imm.as_inner())),
        }
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Empty sequence of the given variant.
    pub fn new(backing: BackingKind, mutability: Mutability) -> Self {
        let payload = match backing {
            BackingKind::Array => Payload::Array(ArraySequence::new()),
            BackingKind::List => Payload::List(ListSequence::new()),
        };
        Self::assemble(payload, mutability)
    }

    /// Sequence holding a copy of `items`.
    pub fn from_slice(backing: BackingKind, mutability: Mutability, items: &[T]) -> Self {
        let payload = match backing {
            BackingKind::Array => Payload::Array(ArraySequence::from_slice(items)),
            BackingKind::List => Payload::List(ListSequence::from_slice(items)),
        };
        Self::assemble(payload, mutability)
    }

    /// Array-backed sequence holding `items`, growing per `policy`.
    pub fn array_with_policy(policy: GrowthPolicy, mutability: Mutability, items: &[T]) -> Self {
        Self::assemble(
            Payload::Array(ArraySequence::from_slice_with_policy(items, policy)),
            mutability,
        )
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    pub fn kind(&self) -> SequenceKind {
        SequenceKind {
            backing: self.backing(),
            mutability: self.mutability(),
        }
    }

    pub fn backing(&self) -> BackingKind {
        match self.variant {
            Variant::Array(_) | Variant::ImmutableArray(_) => BackingKind::Array,
            Variant::List(_) | Variant::ImmutableList(_) => BackingKind::List,
        }
    }

    pub fn mutability(&self) -> Mutability {
        match self.variant {
            Variant::Array(_) | Variant::List(_) => Mutability::Mutable,
            Variant::ImmutableArray(_) | Variant::ImmutableList(_) => Mutability::Immutable,
        }
    }

    /// Allocated slots for array backings, `None` for lists.
    pub fn capacity(&self) -> Option<usize> {
        self.with_view(|view| match view {
            View::Array(s) => Some(s.capacity()),
            View::List(_) => None,
        })
    }

    /// True when both handles share one mutable store.
    pub fn is_alias_of(&self, other: &Self) -> bool {
        match (&self.variant, &other.variant) {
            (Variant::Array(a), Variant::Array(b)) => Rc::ptr_eq(a, b),
            (Variant::List(a), Variant::List(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn front(&self) -> Result<T> {
        self.with_view(|view| view.front().cloned())
    }

    pub fn back(&self) -> Result<T> {
        self.with_view(|view| view.back().cloned())
    }

    pub fn at(&self, index: usize) -> Result<T> {
        self.with_view(|view| view.at(index).cloned())
    }

    pub fn size(&self) -> usize {
        self.with_view(|view| view.size())
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Snapshot of the elements, front to back.
    pub fn to_vec(&self) -> Vec<T> {
        self.with_view(|view| view.iter().cloned().collect())
    }

    // ------------------------------------------------------------------
    // Derivation
    // ------------------------------------------------------------------

    /// Half-open `[start, end)` copy with the same variant.
    pub fn slice(&self, start: usize, end: usize) -> Result<Self> {
        let payload = self.with_view(|view| match view {
            View::Array(s) => s.slice(start, end).map(Payload::Array),
            View::List(s) => s.slice(start, end).map(Payload::List),
        })?;
        Ok(Self::assemble(payload, self.mutability()))
    }

    /// `self ++ other` in fresh storage, with the receiver's mutability.
    ///
    /// Fails with `TypeMismatch` when the backings differ. Mutability may
    /// differ; use [`concat`](Self::concat) to require it to match too.
    pub fn combine(&self, other: &Self) -> Result<Self> {
        let payload = self.with_view(|left| {
            other.with_view(|right| match (left, right) {
                (View::Array(l), View::Array(r)) => l.combine(r).map(Payload::Array),
                (View::List(l), View::List(r)) => l.combine(r).map(Payload::List),
                _ => {
                    debug!(
                        left = %self.backing(),
                        right = %other.backing(),
                        "rejected combine across backings"
                    );
                    Err(SequenceError::type_mismatch(self.backing(), other.backing()))
                }
            })
        })?;
        Ok(Self::assemble(payload, self.mutability()))
    }

    /// Like [`combine`](Self::combine), but both operands must be the same
    /// variant. This is what `&a + &b` calls.
    pub fn concat(&self, other: &Self) -> Result<Self> {
        if self.kind() != other.kind() {
            debug!(left = %self.kind(), right = %other.kind(), "rejected concat across variants");
            return Err(SequenceError::type_mismatch(self.kind(), other.kind()));
        }
        self.combine(other)
    }

    /// Another handle to this sequence.
    ///
    /// Mutable: shares the store, so later mutations are seen through both.
    /// Immutable: an independent copy, since nothing can mutate it anyway.
    pub fn reference(&self) -> Self {
        let variant = match &self.variant {
            Variant::Array(cell) => Variant::Array(Rc::clone(cell)),
            Variant::List(cell) => Variant::List(Rc::clone(cell)),
            Variant::ImmutableArray(imm) => Variant::ImmutableArray(imm.reference()),
            Variant::ImmutableList(imm) => Variant::ImmutableList(imm.reference()),
        };
        Self::from_variant(variant)
    }

    /// Independent deep copy, same variant.
    pub fn copy(&self) -> Self {
        let payload = self.with_view(|view| view.to_payload());
        Self::assemble(payload, self.mutability())
    }

    // ------------------------------------------------------------------
    // Structural operations
    // ------------------------------------------------------------------

    pub fn add_to_end(&self, value: T) -> Result<Self> {
        structural!(self, s => s.add_to_end(value))
    }

    pub fn add_to_front(&self, value: T) -> Result<Self> {
        structural!(self, s => s.add_to_front(value))
    }

    /// Insert `value` so that it ends up at `index`. `index == size` appends.
    pub fn insert(&self, value: T, index: usize) -> Result<Self> {
        structural!(self, s => s.insert(value, index))
    }

    pub fn delete(&self, index: usize) -> Result<Self> {
        structural!(self, s => s.delete(index))
    }
}

impl<T: Clone + Default> Clone for Sequence<T> {
    /// Deep copy. Use [`Sequence::reference`] to alias.
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: Clone + Default + PartialEq> PartialEq for Sequence<T> {
    /// Element-wise; backing and mutability are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.with_view(|left| {
            other.with_view(|right| left.size() == right.size() && left.iter().eq(right.iter()))
        })
    }
}

impl<T: Clone + Default> Add for &Sequence<T> {
    type Output = Result<Sequence<T>>;

    fn add(self, rhs: Self) -> Self::Output {
        self.concat(rhs)
    }
}

impl<T: Clone + Default> Default for Sequence<T> {
    fn default() -> Self {
        Self::new(BackingKind::Array, Mutability::Mutable)
    }
}

impl<T: Clone + Default> FromIterator<T> for Sequence<T> {
    /// Collects into a mutable array-backed sequence.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::assemble(
            Payload::Array(iter.into_iter().collect()),
            Mutability::Mutable,
        )
    }
}

impl<T: Clone + Default> From<ArraySequence<T>> for Sequence<T> {
    fn from(seq: ArraySequence<T>) -> Self {
        Self::assemble(Payload::Array(seq), Mutability::Mutable)
    }
}

impl<T: Clone + Default> From<ListSequence<T>> for Sequence<T> {
    fn from(seq: ListSequence<T>) -> Self {
        Self::assemble(Payload::List(seq), Mutability::Mutable)
    }
}

impl<T: Clone + Default> From<ImmutableArraySequence<T>> for Sequence<T> {
    fn from(seq: ImmutableArraySequence<T>) -> Self {
        Self::from_variant(Variant::ImmutableArray(seq))
    }
}

impl<T: Clone + Default> From<ImmutableListSequence<T>> for Sequence<T> {
    fn from(seq: ImmutableListSequence<T>) -> Self {
        Self::from_variant(Variant::ImmutableList(seq))
    }
}

impl<T: Clone + Default + fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_view(|view| {
            f.debug_struct("Sequence")
                .field("kind", &self.kind())
                .field("items", &view.iter().collect::<Vec<_>>())
                .finish()
        })
    }
}

impl<T: Clone + Default + fmt::Display> fmt::Display for Sequence<T> {
    /// `[1, 2, 3]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_view(|view| {
            write!(f, "[")?;
            for (i, item) in view.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", item)?;
            }
            write!(f, "]")
        })
    }
}

impl<T: Clone + Default + Serialize> Serialize for Sequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.with_view(|view| {
            let mut seq = serializer.serialize_seq(Some(view.size()))?;
            for item in view.iter() {
                seq.serialize_element(item)?;
            }
            seq.end()
        })
    }
}
