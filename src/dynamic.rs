// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type-erased sequences for heterogeneous collections.
//!
//! `Sequence<T>` settles element-type agreement at compile time. Front-ends
//! that keep several sequences of different element types side by side need
//! the check at runtime instead, so [`AnySequence`] closes over the element
//! kinds the front-end understands and turns a mismatch into `TypeMismatch`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::config::GrowthPolicy;
use crate::error::{Result, SequenceError};
use crate::handle::Sequence;
use crate::sequence::{BackingKind, Mutability, SequenceKind};

/// Element types an [`AnySequence`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Int,
    Float,
    Text,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Int => write!(f, "int"),
            ElementKind::Float => write!(f, "float"),
            ElementKind::Text => write!(f, "text"),
        }
    }
}

impl FromStr for ElementKind {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "int" => Ok(ElementKind::Int),
            "float" => Ok(ElementKind::Float),
            "text" => Ok(ElementKind::Text),
            other => Err(SequenceError::InvalidArgument(format!(
                "unknown element kind '{}'",
                other
            ))),
        }
    }
}

/// One element crossing the type-erased boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl AnyValue {
    pub fn kind(&self) -> ElementKind {
        match self {
            AnyValue::Int(_) => ElementKind::Int,
            AnyValue::Float(_) => ElementKind::Float,
            AnyValue::Text(_) => ElementKind::Text,
        }
    }

    /// Parse `raw` as an element of `kind`. Text accepts anything.
    pub fn parse(kind: ElementKind, raw: &str) -> Result<Self> {
        let raw = raw.trim();
        match kind {
            ElementKind::Int => raw.parse().map(AnyValue::Int).map_err(|_| {
                SequenceError::InvalidArgument(format!("'{}' is not an integer", raw))
            }),
            ElementKind::Float => raw.parse().map(AnyValue::Float).map_err(|_| {
                SequenceError::InvalidArgument(format!("'{}' is not a number", raw))
            }),
            ElementKind::Text => Ok(AnyValue::Text(raw.to_string())),
        }
    }
}

impl fmt::Display for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyValue::Int(v) => write!(f, "{}", v),
            AnyValue::Float(v) => write!(f, "{}", v),
            AnyValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// A [`Sequence`] whose element type is known only at runtime.
#[derive(Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnySequence {
    Int(Sequence<i64>),
    Float(Sequence<f64>),
    Text(Sequence<String>),
}

/// Everything about a new sequence except its element type.
struct Shape {
    backing: BackingKind,
    mutability: Mutability,
    policy: Option<GrowthPolicy>,
}

impl Shape {
    fn typed<T: Clone + Default>(&self, items: &[T]) -> Sequence<T> {
        match self.policy {
            Some(policy) => Sequence::array_with_policy(policy, self.mutability, items),
            None => Sequence::from_slice(self.backing, self.mutability, items),
        }
    }

    fn build(&self, element: ElementKind, values: &[AnyValue]) -> Result<AnySequence> {
        fn collect<T>(
            element: ElementKind,
            values: &[AnyValue],
            pick: impl Fn(&AnyValue) -> Option<T>,
        ) -> Result<Vec<T>> {
            values
                .iter()
                .map(|v| pick(v).ok_or_else(|| SequenceError::type_mismatch(element, v.kind())))
                .collect()
        }

        Ok(match element {
            ElementKind::Int => {
                let items = collect(element, values, |v| match v {
                    AnyValue::Int(i) => Some(*i),
                    _ => None,
                })?;
                AnySequence::Int(self.typed(&items))
            }
            ElementKind::Float => {
                let items = collect(element, values, |v| match v {
                    AnyValue::Float(x) => Some(*x),
                    _ => None,
                })?;
                AnySequence::Float(self.typed(&items))
            }
            ElementKind::Text => {
                let items = collect(element, values, |v| match v {
                    AnyValue::Text(s) => Some(s.clone()),
                    _ => None,
                })?;
                AnySequence::Text(self.typed(&items))
            }
        })
    }
}

/// Apply `$body` to the typed sequence, whatever its element type.
macro_rules! each {
    ($self:expr, $s:ident => $body:expr) => {
        match $self {
            AnySequence::Int($s) => $body,
            AnySequence::Float($s) => $body,
            AnySequence::Text($s) => $body,
        }
    };
}

/// Like `each!`, re-wrapping a `Result<Sequence<_>>` in the same variant.
macro_rules! rewrap {
    ($self:expr, $s:ident => $body:expr) => {
        match $self {
            AnySequence::Int($s) => $body.map(AnySequence::Int),
            AnySequence::Float($s) => $body.map(AnySequence::Float),
            AnySequence::Text($s) => $body.map(AnySequence::Text),
        }
    };
}

/// Pair a sequence with a value of the matching element kind.
macro_rules! with_value {
    ($self:expr, $value:expr, ($s:ident, $v:ident) => $body:expr) => {
        match ($self, $value) {
            (AnySequence::Int($s), AnyValue::Int($v)) => $body.map(AnySequence::Int),
            (AnySequence::Float($s), AnyValue::Float($v)) => $body.map(AnySequence::Float),
            (AnySequence::Text($s), AnyValue::Text($v)) => $body.map(AnySequence::Text),
            (seq, value) => Err(SequenceError::type_mismatch(
                seq.element_kind(),
                value.kind(),
            )),
        }
    };
}

impl AnySequence {
    /// Empty sequence of the given element kind and variant.
    pub fn new(element: ElementKind, backing: BackingKind, mutability: Mutability) -> Self {
        match element {
            ElementKind::Int => AnySequence::Int(Sequence::new(backing, mutability)),
            ElementKind::Float => AnySequence::Float(Sequence::new(backing, mutability)),
            ElementKind::Text => AnySequence::Text(Sequence::new(backing, mutability)),
        }
    }

    /// Sequence holding `values`, all of which must be of kind `element`.
    pub fn from_values(
        element: ElementKind,
        backing: BackingKind,
        mutability: Mutability,
        values: &[AnyValue],
    ) -> Result<Self> {
        let shape = Shape {
            backing,
            mutability,
            policy: None,
        };
        shape.build(element, values)
    }

    /// Array-backed sequence holding `values`, growing per `policy`.
    pub fn array_with_policy(
        element: ElementKind,
        policy: GrowthPolicy,
        mutability: Mutability,
        values: &[AnyValue],
    ) -> Result<Self> {
        let shape = Shape {
            backing: BackingKind::Array,
            mutability,
            policy: Some(policy),
        };
        shape.build(element, values)
    }

    /// Parse each of `raw` as an `element` and build a sequence from them.
    pub fn parse(
        element: ElementKind,
        backing: BackingKind,
        mutability: Mutability,
        raw: &[&str],
    ) -> Result<Self> {
        let values = raw
            .iter()
            .map(|r| AnyValue::parse(element, r))
            .collect::<Result<Vec<_>>>()?;
        Self::from_values(element, backing, mutability, &values)
    }

    pub fn element_kind(&self) -> ElementKind {
        match self {
            AnySequence::Int(_) => ElementKind::Int,
            AnySequence::Float(_) => ElementKind::Float,
            AnySequence::Text(_) => ElementKind::Text,
        }
    }

    pub fn kind(&self) -> SequenceKind {
        each!(self, s => s.kind())
    }

    pub fn size(&self) -> usize {
        each!(self, s => s.size())
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn capacity(&self) -> Option<usize> {
        each!(self, s => s.capacity())
    }

    pub fn is_alias_of(&self, other: &Self) -> bool {
        match (self, other) {
            (AnySequence::Int(a), AnySequence::Int(b)) => a.is_alias_of(b),
            (AnySequence::Float(a), AnySequence::Float(b)) => a.is_alias_of(b),
            (AnySequence::Text(a), AnySequence::Text(b)) => a.is_alias_of(b),
            _ => false,
        }
    }

    pub fn front(&self) -> Result<AnyValue> {
        match self {
            AnySequence::Int(s) => s.front().map(AnyValue::Int),
            AnySequence::Float(s) => s.front().map(AnyValue::Float),
            AnySequence::Text(s) => s.front().map(AnyValue::Text),
        }
    }

    pub fn back(&self) -> Result<AnyValue> {
        match self {
            AnySequence::Int(s) => s.back().map(AnyValue::Int),
            AnySequence::Float(s) => s.back().map(AnyValue::Float),
            AnySequence::Text(s) => s.back().map(AnyValue::Text),
        }
    }

    pub fn at(&self, index: usize) -> Result<AnyValue> {
        match self {
            AnySequence::Int(s) => s.at(index).map(AnyValue::Int),
            AnySequence::Float(s) => s.at(index).map(AnyValue::Float),
            AnySequence::Text(s) => s.at(index).map(AnyValue::Text),
        }
    }

    pub fn to_values(&self) -> Vec<AnyValue> {
        match self {
            AnySequence::Int(s) => s.to_vec().into_iter().map(AnyValue::Int).collect(),
            AnySequence::Float(s) => s.to_vec().into_iter().map(AnyValue::Float).collect(),
            AnySequence::Text(s) => s.to_vec().into_iter().map(AnyValue::Text).collect(),
        }
    }

    pub fn slice(&self, start: usize, end: usize) -> Result<Self> {
        rewrap!(self, s => s.slice(start, end))
    }

    /// Typed `combine`; element kinds must match as well as backings.
    pub fn combine(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (AnySequence::Int(a), AnySequence::Int(b)) => a.combine(b).map(AnySequence::Int),
            (AnySequence::Float(a), AnySequence::Float(b)) => a.combine(b).map(AnySequence::Float),
            (AnySequence::Text(a), AnySequence::Text(b)) => a.combine(b).map(AnySequence::Text),
            _ => {
                debug!(
                    left = %self.element_kind(),
                    right = %other.element_kind(),
                    "rejected combine across element kinds"
                );
                Err(SequenceError::type_mismatch(
                    self.element_kind(),
                    other.element_kind(),
                ))
            }
        }
    }

    /// Typed `concat`; element kinds and the full variant must match.
    pub fn concat(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (AnySequence::Int(a), AnySequence::Int(b)) => a.concat(b).map(AnySequence::Int),
            (AnySequence::Float(a), AnySequence::Float(b)) => a.concat(b).map(AnySequence::Float),
            (AnySequence::Text(a), AnySequence::Text(b)) => a.concat(b).map(AnySequence::Text),
            _ => {
                debug!(
                    left = %self.element_kind(),
                    right = %other.element_kind(),
                    "rejected concat across element kinds"
                );
                Err(SequenceError::type_mismatch(
                    self.element_kind(),
                    other.element_kind(),
                ))
            }
        }
    }

    pub fn reference(&self) -> Self {
        match self {
            AnySequence::Int(s) => AnySequence::Int(s.reference()),
            AnySequence::Float(s) => AnySequence::Float(s.reference()),
            AnySequence::Text(s) => AnySequence::Text(s.reference()),
        }
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn add_to_end(&self, value: AnyValue) -> Result<Self> {
        with_value!(self, value, (s, v) => s.add_to_end(v))
    }

    pub fn add_to_front(&self, value: AnyValue) -> Result<Self> {
        with_value!(self, value, (s, v) => s.add_to_front(v))
    }

    pub fn insert(&self, value: AnyValue, index: usize) -> Result<Self> {
        with_value!(self, value, (s, v) => s.insert(v, index))
    }

    pub fn delete(&self, index: usize) -> Result<Self> {
        rewrap!(self, s => s.delete(index))
    }
}

impl fmt::Display for AnySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        each!(self, s => write!(f, "{}", s))
    }
}

impl fmt::Debug for AnySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        each!(self, s => f
            .debug_tuple("AnySequence")
            .field(&self.element_kind())
            .field(s)
            .finish())
    }
}
