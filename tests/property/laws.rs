//! Algebraic laws every variant has to satisfy.

use proptest::prelude::*;

use super::common::{all_kinds, int_sequence, items_strategy, other_backing};
use seqkit::{ErrorCode, Mutability, SequenceKind};

fn kind_strategy() -> impl Strategy<Value = SequenceKind> {
    (0usize..4).prop_map(|i| all_kinds()[i])
}

proptest! {
    /// `s.copy().add_to_end(v)` grows by one and leaves `s` alone.
    #[test]
    fn prop_copy_then_add(items in items_strategy(), v in any::<i64>(), kind in kind_strategy()) {
        let seq = int_sequence(kind, &items);
        let grown = seq.copy().add_to_end(v).unwrap();
        prop_assert_eq!(grown.size(), seq.size() + 1);
        prop_assert_eq!(grown.back(), Ok(v));
        prop_assert_eq!(seq.to_vec(), items);
    }

    /// `insert(v, i)` puts `v` at `i` and shifts the suffix right by one.
    #[test]
    fn prop_insert_shifts(
        items in items_strategy(),
        v in any::<i64>(),
        pick in any::<prop::sample::Index>(),
        kind in kind_strategy(),
    ) {
        let i = pick.index(items.len() + 1);
        let seq = int_sequence(kind, &items);
        let out = seq.insert(v, i).unwrap().to_vec();

        prop_assert_eq!(out[i], v);
        prop_assert_eq!(&out[..i], &items[..i]);
        prop_assert_eq!(&out[i + 1..], &items[i..]);
    }

    /// `slice(a, b)` has `b - a` elements, and the full slice equals the source.
    #[test]
    fn prop_slice_size(
        items in items_strategy(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
        kind in kind_strategy(),
    ) {
        let seq = int_sequence(kind, &items);
        let (mut a, mut b) = (a.index(items.len() + 1), b.index(items.len() + 1));
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        let part = seq.slice(a, b).unwrap();
        prop_assert_eq!(part.size(), b - a);
        prop_assert_eq!(part.to_vec(), items[a..b].to_vec());
        prop_assert!(seq.slice(0, seq.size()).unwrap() == seq);
    }

    /// `combine` concatenates and sizes add up.
    #[test]
    fn prop_combine_concatenates(
        left in items_strategy(),
        right in items_strategy(),
        kind in kind_strategy(),
        other_mutability in prop::bool::ANY,
    ) {
        let mut right_kind = kind;
        if other_mutability {
            right_kind.mutability = Mutability::Immutable;
        }
        let l = int_sequence(kind, &left);
        let r = int_sequence(right_kind, &right);
        let joined = l.combine(&r).unwrap();

        prop_assert_eq!(joined.size(), left.len() + right.len());
        let expected: Vec<i64> = left.iter().chain(right.iter()).copied().collect();
        prop_assert_eq!(joined.to_vec(), expected);
        prop_assert_eq!(joined.kind(), kind);
    }

    /// Combining across backings fails and mutates neither side.
    #[test]
    fn prop_combine_mismatch(
        left in items_strategy(),
        right in items_strategy(),
        kind in kind_strategy(),
    ) {
        let mut right_kind = kind;
        right_kind.backing = other_backing(kind.backing);
        let l = int_sequence(kind, &left);
        let r = int_sequence(right_kind, &right);

        let err = l.combine(&r).unwrap_err();
        prop_assert_eq!(err.code(), ErrorCode::TypeMismatch);
        prop_assert_eq!(l.to_vec(), left);
        prop_assert_eq!(r.to_vec(), right);
    }

    /// Immutable `add_to_front` returns size + 1 and leaves the original.
    #[test]
    fn prop_immutable_add_to_front(
        items in items_strategy(),
        v in any::<i64>(),
        pick in 0usize..2,
    ) {
        let kind = all_kinds()[2 + pick];
        let seq = int_sequence(kind, &items);
        let out = seq.add_to_front(v).unwrap();
        prop_assert_eq!(out.size(), items.len() + 1);
        prop_assert_eq!(out.front(), Ok(v));
        prop_assert_eq!(seq.to_vec(), items);
    }

    /// Equality looks only at elements.
    #[test]
    fn prop_equality_ignores_kind(
        items in items_strategy(),
        a in kind_strategy(),
        b in kind_strategy(),
    ) {
        prop_assert!(int_sequence(a, &items) == int_sequence(b, &items));
    }
}
