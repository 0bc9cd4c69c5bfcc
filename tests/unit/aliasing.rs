//! Reference, copy and copy-on-write semantics across all four variants.

use super::common::{all_kinds, int_sequence, other_backing};
use seqkit::{BackingKind, Mutability, Sequence, SequenceError};

#[test]
fn test_reference_depends_on_mutability() {
    for kind in all_kinds() {
        let seq = int_sequence(kind, &[1, 2, 3]);
        let other = seq.reference();
        seq.add_to_end(4).unwrap();

        match kind.mutability {
            Mutability::Mutable => {
                assert!(other.is_alias_of(&seq), "{}", kind);
                assert_eq!(other.to_vec(), vec![1, 2, 3, 4], "{}", kind);
            }
            Mutability::Immutable => {
                assert!(!other.is_alias_of(&seq), "{}", kind);
                assert_eq!(other.to_vec(), vec![1, 2, 3], "{}", kind);
                assert_eq!(seq.to_vec(), vec![1, 2, 3], "{}", kind);
            }
        }
    }
}

#[test]
fn test_copy_never_aliases() {
    for kind in all_kinds() {
        let seq = int_sequence(kind, &[1, 2, 3]);
        let copy = seq.copy();
        assert_eq!(copy.kind(), kind);
        assert!(!copy.is_alias_of(&seq));

        let grown = copy.add_to_front(0).unwrap();
        assert_eq!(seq.to_vec(), vec![1, 2, 3], "{}", kind);
        assert_eq!(grown.to_vec(), vec![0, 1, 2, 3], "{}", kind);
    }
}

#[test]
fn test_mutable_ops_return_the_receiver() {
    for backing in [BackingKind::Array, BackingKind::List] {
        let seq: Sequence<i64> = Sequence::new(backing, Mutability::Mutable);
        let returned = seq
            .add_to_end(1)
            .and_then(|s| s.add_to_end(2))
            .and_then(|s| s.insert(9, 1))
            .and_then(|s| s.delete(0))
            .unwrap();
        assert!(returned.is_alias_of(&seq));
        assert_eq!(seq.to_vec(), vec![9, 2]);
    }
}

#[test]
fn test_immutable_ops_return_new_sequences() {
    for backing in [BackingKind::Array, BackingKind::List] {
        let seq = Sequence::from_slice(backing, Mutability::Immutable, &[1, 2]);
        let fronted = seq.add_to_front(0).unwrap();
        assert_eq!(fronted.size(), seq.size() + 1);
        assert_eq!(fronted.kind(), seq.kind());
        assert_eq!(seq.to_vec(), vec![1, 2]);
    }
}

#[test]
fn test_slice_and_combine_are_fresh() {
    for kind in all_kinds() {
        let seq = int_sequence(kind, &[1, 2, 3, 4]);
        let other = int_sequence(kind, &[5]);

        let mid = seq.slice(1, 3).unwrap();
        let joined = seq.combine(&other).unwrap();
        assert!(!mid.is_alias_of(&seq));
        assert!(!joined.is_alias_of(&seq));
        assert!(!joined.is_alias_of(&other));

        mid.delete(0).unwrap();
        joined.delete(0).unwrap();
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4], "{}", kind);
        assert_eq!(other.to_vec(), vec![5], "{}", kind);
    }
}

#[test]
fn test_combine_across_backings_touches_nothing() {
    for kind in all_kinds() {
        let seq = int_sequence(kind, &[1, 2]);
        let mut other_kind = kind;
        other_kind.backing = other_backing(kind.backing);
        let other = int_sequence(other_kind, &[3]);

        let err = seq.combine(&other).unwrap_err();
        assert_eq!(
            err,
            SequenceError::TypeMismatch {
                left: kind.backing.to_string(),
                right: other_kind.backing.to_string(),
            }
        );
        assert_eq!(seq.to_vec(), vec![1, 2]);
        assert_eq!(other.to_vec(), vec![3]);
    }
}

#[test]
fn test_concat_names_full_kinds() {
    let a = Sequence::from_slice(BackingKind::Array, Mutability::Mutable, &[1]);
    let b = Sequence::from_slice(BackingKind::Array, Mutability::Immutable, &[2]);
    let err = (&a + &b).unwrap_err();
    assert_eq!(
        err,
        SequenceError::TypeMismatch {
            left: "mutable array".into(),
            right: "immutable array".into(),
        }
    );
    assert_eq!(a.combine(&b).unwrap().to_vec(), vec![1, 2]);
}

#[test]
fn test_clone_is_deep() {
    let seq = Sequence::from_slice(BackingKind::List, Mutability::Mutable, &[1]);
    let cloned = seq.clone();
    seq.add_to_end(2).unwrap();
    assert_eq!(cloned.to_vec(), vec![1]);
    assert_eq!(cloned, Sequence::from_slice(BackingKind::Array, Mutability::Immutable, &[1]));
}
