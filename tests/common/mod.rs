//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;
use seqkit::{ErrorCode, Sequence, SequenceError};

// Re-export canonical test utilities from seqkit::testing
pub use seqkit::testing::{all_kinds, int_sequence, other_backing};

// ============================================================================
// OPERATION SCRIPTS
// ============================================================================

/// One structural step, applied identically to a sequence and to a `Vec`.
#[derive(Debug, Clone)]
pub enum ScriptOp {
    PushBack(i64),
    PushFront(i64),
    Insert(i64, usize),
    Delete(usize),
    Slice(usize, usize),
}

/// Apply `op` to a plain vector the way the contract says a sequence should.
///
/// Returns the new contents, or the error kind the sequence must report.
pub fn oracle_apply(model: &[i64], op: &ScriptOp) -> Result<Vec<i64>, ErrorCode> {
    let mut next = model.to_vec();
    match *op {
        ScriptOp::PushBack(v) => next.push(v),
        ScriptOp::PushFront(v) => next.insert(0, v),
        ScriptOp::Insert(v, i) => {
            if i > next.len() {
                return Err(ErrorCode::IndexOutOfRange);
            }
            next.insert(i, v);
        }
        ScriptOp::Delete(i) => {
            if next.is_empty() {
                return Err(ErrorCode::EmptyContainer);
            }
            if i >= next.len() {
                return Err(ErrorCode::IndexOutOfRange);
            }
            next.remove(i);
        }
        ScriptOp::Slice(a, b) => {
            if a > b || b > next.len() {
                return Err(ErrorCode::InvalidRange);
            }
            next = next[a..b].to_vec();
        }
    }
    Ok(next)
}

/// Apply `op` to a sequence, returning whatever the operation returns.
pub fn sequence_apply(seq: &Sequence<i64>, op: &ScriptOp) -> Result<Sequence<i64>, SequenceError> {
    match *op {
        ScriptOp::PushBack(v) => seq.add_to_end(v),
        ScriptOp::PushFront(v) => seq.add_to_front(v),
        ScriptOp::Insert(v, i) => seq.insert(v, i),
        ScriptOp::Delete(i) => seq.delete(i),
        ScriptOp::Slice(a, b) => seq.slice(a, b),
    }
}

/// Random operation with indices that are sometimes out of range.
pub fn script_op_strategy() -> impl Strategy<Value = ScriptOp> {
    prop_oneof![
        3 => any::<i64>().prop_map(ScriptOp::PushBack),
        2 => any::<i64>().prop_map(ScriptOp::PushFront),
        2 => (any::<i64>(), 0usize..12).prop_map(|(v, i)| ScriptOp::Insert(v, i)),
        2 => (0usize..12).prop_map(ScriptOp::Delete),
        1 => (0usize..12, 0usize..12).prop_map(|(a, b)| ScriptOp::Slice(a, b)),
    ]
}

/// Random initial contents.
pub fn items_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1000i64..1000, 0..10)
}
