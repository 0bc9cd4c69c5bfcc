// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for structural operations on every sequence variant.
//!
//! Each operation is applied to the handle and to a plain `Vec`. Properties:
//! - Contents match the `Vec` after every successful step
//! - A step fails exactly when the `Vec` would reject it, with the same code
//! - A failed step leaves the receiver untouched
//! - Array capacity never drops below the length

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqkit::{BackingKind, ErrorCode, Mutability, Sequence};

#[derive(Arbitrary, Debug)]
enum Op {
    PushBack(i16),
    PushFront(i16),
    Insert(i16, u8),
    Delete(u8),
    Slice(u8, u8),
    At(u8),
    Combine(Vec<i16>),
}

#[derive(Arbitrary, Debug)]
struct Input {
    list: bool,
    immutable: bool,
    initial: Vec<i16>,
    ops: Vec<Op>,
}

fn oracle(model: &[i16], op: &Op) -> Result<Vec<i16>, ErrorCode> {
    let mut next = model.to_vec();
    match *op {
        Op::PushBack(v) => next.push(v),
        Op::PushFront(v) => next.insert(0, v),
        Op::Insert(v, i) => {
            let i = i as usize;
            if i > next.len() {
                return Err(ErrorCode::IndexOutOfRange);
            }
            next.insert(i, v);
        }
        Op::Delete(i) => {
            let i = i as usize;
            if next.is_empty() {
                return Err(ErrorCode::EmptyContainer);
            }
            if i >= next.len() {
                return Err(ErrorCode::IndexOutOfRange);
            }
            next.remove(i);
        }
        Op::Slice(a, b) => {
            let (a, b) = (a as usize, b as usize);
            if a > b || b > next.len() {
                return Err(ErrorCode::InvalidRange);
            }
            next = next[a..b].to_vec();
        }
        Op::At(_) => {}
        Op::Combine(ref other) => next.extend_from_slice(other),
    }
    Ok(next)
}

fn apply(seq: &Sequence<i16>, op: &Op) -> seqkit::Result<Sequence<i16>> {
    match *op {
        Op::PushBack(v) => seq.add_to_end(v),
        Op::PushFront(v) => seq.add_to_front(v),
        Op::Insert(v, i) => seq.insert(v, i as usize),
        Op::Delete(i) => seq.delete(i as usize),
        Op::Slice(a, b) => seq.slice(a as usize, b as usize),
        Op::At(_) => Ok(seq.reference()),
        Op::Combine(ref other) => {
            let other = Sequence::from_slice(seq.backing(), Mutability::Immutable, other);
            seq.combine(&other)
        }
    }
}

fuzz_target!(|input: Input| {
    let backing = if input.list { BackingKind::List } else { BackingKind::Array };
    let mutability = if input.immutable { Mutability::Immutable } else { Mutability::Mutable };

    // Long chains slow every iteration without reaching new states
    let initial: Vec<i16> = input.initial.into_iter().take(64).collect();
    let mut model = initial.clone();
    let mut seq = Sequence::from_slice(backing, mutability, &initial);

    for op in input.ops.iter().take(64) {
        if let Op::At(i) = *op {
            let i = i as usize;
            match seq.at(i) {
                Ok(v) => assert_eq!(Some(&v), model.get(i)),
                Err(err) => {
                    assert!(i >= model.len());
                    assert_eq!(err.code(), ErrorCode::IndexOutOfRange);
                }
            }
            continue;
        }

        let before = seq.to_vec();
        match (apply(&seq, op), oracle(&model, op)) {
            (Ok(next), Ok(expected)) => {
                assert_eq!(next.to_vec(), expected, "{op:?}");
                assert_eq!(next.kind(), seq.kind());
                if mutability == Mutability::Immutable {
                    assert_eq!(seq.to_vec(), before, "immutable receiver changed");
                }
                model = expected;
                seq = next;
            }
            (Err(err), Err(code)) => {
                assert_eq!(err.code(), code, "{op:?}");
                assert_eq!(seq.to_vec(), before, "failed op changed receiver");
            }
            (got, want) => panic!(
                "{op:?}: handle {:?}, oracle {want:?}",
                got.map(|s| s.to_vec())
            ),
        }

        assert_eq!(seq.size(), model.len());
        if let Some(capacity) = seq.capacity() {
            assert!(seq.size() <= capacity);
        }
    }
});
