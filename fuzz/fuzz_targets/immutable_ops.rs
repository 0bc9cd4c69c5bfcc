// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for copy-on-write persistence.
//!
//! Every version an immutable sequence ever produced must keep its contents
//! for as long as it lives, no matter what is derived from it later. The
//! target keeps a pool of versions with their expected contents and derives
//! new ones from random members of the pool.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqkit::{ArraySequence, Immutable, ListSequence, SequenceOps};

#[derive(Arbitrary, Debug)]
enum Op {
    PushBack(u8, i32),
    PushFront(u8, i32),
    Insert(u8, i32, u8),
    Delete(u8, u8),
    Slice(u8, u8, u8),
    Combine(u8, u8),
    Reference(u8),
}

#[derive(Arbitrary, Debug)]
struct Input {
    list: bool,
    seed: Vec<i32>,
    ops: Vec<Op>,
}

const MAX_VERSIONS: usize = 32;

fn run<S>(seed: &[i32], ops: &[Op])
where
    S: SequenceOps<Item = i32> + FromIterator<i32>,
{
    let mut pool: Vec<(Immutable<S>, Vec<i32>)> =
        vec![(Immutable::new(seed.iter().copied().collect()), seed.to_vec())];

    for op in ops {
        let pick = |i: u8| i as usize % pool.len();
        let derived = match *op {
            Op::PushBack(p, v) => {
                let (seq, items) = &pool[pick(p)];
                let mut expected = items.clone();
                expected.push(v);
                seq.add_to_end(v).ok().map(|s| (s, expected))
            }
            Op::PushFront(p, v) => {
                let (seq, items) = &pool[pick(p)];
                let mut expected = items.clone();
                expected.insert(0, v);
                seq.add_to_front(v).ok().map(|s| (s, expected))
            }
            Op::Insert(p, v, i) => {
                let (seq, items) = &pool[pick(p)];
                let i = i as usize;
                let result = seq.insert(v, i);
                assert_eq!(result.is_ok(), i <= items.len());
                result.ok().map(|s| {
                    let mut expected = items.clone();
                    expected.insert(i, v);
                    (s, expected)
                })
            }
            Op::Delete(p, i) => {
                let (seq, items) = &pool[pick(p)];
                let i = i as usize;
                let result = seq.delete(i);
                assert_eq!(result.is_ok(), i < items.len());
                result.ok().map(|s| {
                    let mut expected = items.clone();
                    expected.remove(i);
                    (s, expected)
                })
            }
            Op::Slice(p, a, b) => {
                let (seq, items) = &pool[pick(p)];
                let (a, b) = (a as usize, b as usize);
                let result = seq.slice(a, b);
                assert_eq!(result.is_ok(), a <= b && b <= items.len());
                result.ok().map(|s| (s, items[a..b].to_vec()))
            }
            Op::Combine(l, r) => {
                let (left, left_items) = &pool[pick(l)];
                let (right, right_items) = &pool[pick(r)];
                let mut expected = left_items.clone();
                expected.extend_from_slice(right_items);
                left.combine(right).ok().map(|s| (s, expected))
            }
            Op::Reference(p) => {
                let (seq, items) = &pool[pick(p)];
                Some((seq.reference(), items.clone()))
            }
        };

        if let Some((seq, expected)) = derived {
            if expected.len() <= 256 {
                if pool.len() == MAX_VERSIONS {
                    pool.remove(0);
                }
                pool.push((seq, expected));
            }
        }

        for (seq, expected) in &pool {
            assert_eq!(seq.size(), expected.len());
            assert!(seq.iter().eq(expected.iter()));
        }
    }
}

fuzz_target!(|input: Input| {
    let seed: Vec<i32> = input.seed.into_iter().take(64).collect();
    let ops: Vec<Op> = input.ops.into_iter().take(128).collect();

    if input.list {
        run::<ListSequence<i32>>(&seed, &ops);
    } else {
        run::<ArraySequence<i32>>(&seed, &ops);
    }
});
