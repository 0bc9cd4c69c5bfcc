// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Operation scripts for `seqkit run`.
//!
//! Each `--op` string parses into an [`Op`]. Running a script threads one
//! current handle through the ops: structural ops replace it with whatever
//! they return, which for a mutable sequence is an alias of the same store
//! and for an immutable one is a fresh sequence. Each step records the
//! receiver as it looks afterwards next to what the op returned, so the
//! difference between the two disciplines shows up in the report.
//!
//! Positions are parsed as signed integers so that negative input can be
//! reported as `InvalidPosition` rather than as a parse failure.

use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use seqkit::{AnySequence, AnyValue, BackingKind, ElementKind, SequenceError, SequenceKind};

/// One scripted operation. Element values stay raw until the element kind
/// of the target sequence is known.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    PushBack(String),
    PushFront(String),
    Insert(String, usize),
    Delete(usize),
    Slice(usize, usize),
    Combine(BackingKind, Vec<String>),
    At(usize),
    Front,
    Back,
    Reference,
    Copy,
}

/// Parse a position: non-negative integer or `InvalidPosition`.
pub fn parse_position(raw: &str) -> seqkit::Result<usize> {
    let signed: i64 = raw
        .trim()
        .parse()
        .map_err(|_| SequenceError::InvalidPosition(format!("'{}' is not an integer", raw)))?;
    usize::try_from(signed)
        .map_err(|_| SequenceError::InvalidPosition(format!("{} is negative", signed)))
}

/// Parse a size: non-negative integer or `InvalidSize`.
pub fn parse_size(signed: i64) -> seqkit::Result<usize> {
    usize::try_from(signed).map_err(|_| SequenceError::InvalidSize {
        requested: signed as i128,
    })
}

/// Split a comma separated value list. An empty string means no values.
pub fn split_values(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|v| v.trim().to_string()).collect()
}

fn parse_backing(raw: &str) -> seqkit::Result<BackingKind> {
    match raw {
        "array" => Ok(BackingKind::Array),
        "list" => Ok(BackingKind::List),
        other => Err(SequenceError::InvalidArgument(format!(
            "unknown backing '{}'",
            other
        ))),
    }
}

impl FromStr for Op {
    type Err = SequenceError;

    fn from_str(s: &str) -> seqkit::Result<Self> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let op = match words.as_slice() {
            ["push-back", v] => Op::PushBack(v.to_string()),
            ["push-front", v] => Op::PushFront(v.to_string()),
            ["insert", v, i] => Op::Insert(v.to_string(), parse_position(i)?),
            ["delete", i] => Op::Delete(parse_position(i)?),
            ["slice", a, b] => Op::Slice(parse_position(a)?, parse_position(b)?),
            ["combine", backing, values] => {
                Op::Combine(parse_backing(backing)?, split_values(values))
            }
            ["combine", backing] => Op::Combine(parse_backing(backing)?, Vec::new()),
            ["at", i] => Op::At(parse_position(i)?),
            ["front"] => Op::Front,
            ["back"] => Op::Back,
            ["reference"] => Op::Reference,
            ["copy"] => Op::Copy,
            _ => {
                return Err(SequenceError::InvalidArgument(format!(
                    "cannot parse operation '{}'",
                    s.trim()
                )))
            }
        };
        Ok(op)
    }
}

/// What one op did.
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub op: String,
    /// The receiver after the op ran.
    pub receiver: Vec<AnyValue>,
    /// The sequence the op returned, if it returns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returned: Option<Vec<AnyValue>>,
    /// The element the op read, if it reads one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<AnyValue>,
    /// Whether the returned handle shares the receiver's store.
    pub aliased: bool,
}

/// Everything `seqkit run` prints.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub kind: SequenceKind,
    pub element: ElementKind,
    pub initial: Vec<AnyValue>,
    pub steps: Vec<Step>,
    #[serde(rename = "final")]
    pub final_items: Vec<AnyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
}

/// Run `ops` against `seq`, stopping at the first error.
pub fn execute(seq: AnySequence, ops: &[(String, Op)]) -> seqkit::Result<Report> {
    let kind = seq.kind();
    let element = seq.element_kind();
    let initial = seq.to_values();
    let mut current = seq;
    let mut steps = Vec::with_capacity(ops.len());

    for (text, op) in ops {
        debug!(op = %text, size = current.size(), "applying");
        let (next, value) = apply(&current, op)?;
        let step = Step {
            op: text.clone(),
            receiver: current.to_values(),
            returned: next.as_ref().map(AnySequence::to_values),
            value,
            aliased: next.as_ref().is_some_and(|n| n.is_alias_of(&current)),
        };
        steps.push(step);
        if let Some(next) = next {
            current = next;
        }
    }

    Ok(Report {
        kind,
        element,
        initial,
        steps,
        final_items: current.to_values(),
        capacity: current.capacity(),
    })
}

/// One op: the sequence it returned and the element it read.
fn apply(
    current: &AnySequence,
    op: &Op,
) -> seqkit::Result<(Option<AnySequence>, Option<AnyValue>)> {
    let element = current.element_kind();
    let value = |raw: &str| AnyValue::parse(element, raw);
    let returned = match op {
        Op::PushBack(v) => current.add_to_end(value(v.as_str())?)?,
        Op::PushFront(v) => current.add_to_front(value(v.as_str())?)?,
        Op::Insert(v, i) => current.insert(value(v.as_str())?, *i)?,
        Op::Delete(i) => current.delete(*i)?,
        Op::Slice(a, b) => current.slice(*a, *b)?,
        Op::Combine(backing, values) => {
            let raw: Vec<&str> = values.iter().map(String::as_str).collect();
            let other = AnySequence::parse(element, *backing, current.kind().mutability, &raw)?;
            current.combine(&other)?
        }
        Op::Reference => current.reference(),
        Op::Copy => current.copy(),
        Op::At(i) => return Ok((None, Some(current.at(*i)?))),
        Op::Front => return Ok((None, Some(current.front()?))),
        Op::Back => return Ok((None, Some(current.back()?))),
    };
    Ok((Some(returned), None))
}
