//! Tests for the array store and the array-backed adapter.

use seqkit::contracts::check_array_spare_slots;
use seqkit::{ArraySequence, ArrayStore, GrowthPolicy, SequenceError, SequenceOps};

#[test]
fn test_capacity_tracks_doubling() {
    let mut seq: ArraySequence<i64> = ArraySequence::new();
    let mut capacities = Vec::new();
    for i in 0..33 {
        seq.add_to_end(i).unwrap();
        capacities.push(seq.capacity());
        assert!(seq.size() <= seq.capacity());
    }
    capacities.dedup();
    assert_eq!(capacities, vec![1, 2, 4, 8, 16, 32, 64]);
}

#[test]
fn test_custom_policy_growth() {
    let policy = GrowthPolicy::new(3, 3).unwrap();
    let mut seq: ArraySequence<u8> = ArraySequence::with_policy(policy);
    assert_eq!(seq.capacity(), 3);
    for i in 0..4 {
        seq.add_to_end(i).unwrap();
    }
    assert_eq!(seq.capacity(), 9);
    assert_eq!(seq.policy(), policy);

    // Derived sequences keep the receiver's policy.
    let mut half = seq.slice(0, 2).unwrap();
    assert_eq!(half.policy(), policy);
    assert_eq!(half.capacity(), 3);
    half.add_to_end(9).unwrap().add_to_end(9).unwrap();
    assert_eq!(half.capacity(), 9);
}

#[test]
fn test_huge_reserve_is_an_error() {
    let mut seq: ArraySequence<i64> = ArraySequence::from_slice(&[1, 2, 3]);
    let capacity = seq.capacity();
    assert!(matches!(
        seq.reserve(1usize << 45),
        Err(SequenceError::InvalidSize { .. })
    ));
    assert_eq!(seq.as_slice(), &[1, 2, 3]);
    assert_eq!(seq.capacity(), capacity);

    // The sequence is still usable afterwards.
    seq.add_to_end(4).unwrap();
    assert_eq!(seq.back(), Ok(&4));
}

#[test]
fn test_growth_factor_is_bounded() {
    assert!(matches!(
        GrowthPolicy::new(1, 1 << 50),
        Err(SequenceError::InvalidArgument(_))
    ));
}

#[test]
fn test_add_to_front_shifts_everything() {
    let mut seq = ArraySequence::from_slice(&[2, 3]);
    seq.add_to_front(1).unwrap().add_to_front(0).unwrap();
    assert_eq!(seq.as_slice(), &[0, 1, 2, 3]);
}

#[test]
fn test_insert_at_every_position() {
    for i in 0..=4 {
        let mut seq = ArraySequence::from_slice(&[0, 1, 2, 3]);
        seq.insert(99, i).unwrap();
        assert_eq!(seq.at(i), Ok(&99));
        assert_eq!(seq.size(), 5);
        let rest: Vec<i32> = seq.iter().copied().filter(|&v| v != 99).collect();
        assert_eq!(rest, vec![0, 1, 2, 3]);
    }
}

#[test]
fn test_delete_every_position() {
    for i in 0..4 {
        let mut seq = ArraySequence::from_slice(&[0, 1, 2, 3]);
        seq.delete(i).unwrap();
        let mut expected = vec![0, 1, 2, 3];
        expected.remove(i);
        assert_eq!(seq.as_slice(), expected.as_slice());
    }
}

#[test]
fn test_spare_slots_stay_default_through_churn() {
    let mut seq: ArraySequence<String> = ArraySequence::new();
    for word in ["a", "b", "c", "d", "e"] {
        seq.add_to_end(word.to_string()).unwrap();
    }
    seq.delete(4).unwrap().delete(0).unwrap().delete(1).unwrap();
    let words: Vec<&str> = seq.iter().map(String::as_str).collect();
    assert_eq!(words, vec!["b", "d"]);

    // Rebuild the store through the public API to check the spare slots.
    let mut store = ArrayStore::from_slice(seq.as_slice());
    store.resize(8).unwrap();
    store.resize(2).unwrap();
    check_array_spare_slots(&store).unwrap();
}

#[test]
fn test_set_replaces_in_place() {
    let mut seq = ArraySequence::from_slice(&[1, 2, 3]);
    assert_eq!(seq.set(1, 20), Ok(2));
    assert_eq!(seq.as_slice(), &[1, 20, 3]);
    assert!(matches!(
        seq.set(3, 0),
        Err(SequenceError::IndexOutOfRange { index: 3, len: 3 })
    ));
}

#[test]
fn test_store_resize_is_exact() {
    let mut store: ArrayStore<i32> = ArrayStore::new();
    store.resize(5).unwrap();
    assert_eq!(store.capacity(), 5);
    store.resize(6).unwrap();
    assert_eq!(store.capacity(), 6);
    store.resize(0).unwrap();
    assert_eq!(store.capacity(), 6);
    assert!(store.is_empty());
}

#[test]
fn test_store_remove_returns_value() {
    let mut store = ArrayStore::from_slice(&[5, 6, 7]);
    assert_eq!(store.remove(0), Ok(5));
    assert_eq!(store.remove(1), Ok(7));
    assert_eq!(store.as_slice(), &[6]);
}

#[test]
fn test_collect_and_serialize() {
    let seq: ArraySequence<i32> = (1..=3).collect();
    assert_eq!(seq.as_slice(), &[1, 2, 3]);
    assert_eq!(serde_json::to_string(&seq).unwrap(), "[1,2,3]");
}
