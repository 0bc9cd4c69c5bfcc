//! Error kinds, codes and the worked examples from the contract.

use super::common::{all_kinds, int_sequence};
use seqkit::{ErrorCode, GrowthPolicy, SequenceError};

#[test]
fn test_codes_and_messages() {
    let cases = [
        (
            SequenceError::IndexOutOfRange { index: 5, len: 3 },
            2,
            "Index out of range",
        ),
        (SequenceError::InvalidArgument("x".into()), 3, "Invalid argument"),
        (SequenceError::EmptyContainer, 4, "Container is empty"),
        (
            SequenceError::InvalidSize { requested: -1 },
            8,
            "Invalid size specified",
        ),
        (
            SequenceError::InvalidRange {
                start: 2,
                end: 1,
                len: 3,
            },
            9,
            "Invalid range specified",
        ),
        (SequenceError::InvalidPosition("-1".into()), 13, "Invalid position"),
        (
            SequenceError::TypeMismatch {
                left: "array".into(),
                right: "list".into(),
            },
            14,
            "Type mismatch",
        ),
    ];

    for (err, code, message) in cases {
        assert_eq!(err.code().code(), code);
        assert_eq!(err.code().message(), message);
        assert!(err.to_string().starts_with(message), "{}", err);
    }
}

#[test]
fn test_worked_example_build() {
    for kind in all_kinds() {
        let seq = int_sequence(kind, &[]);
        let seq = seq
            .add_to_end(1)
            .and_then(|s| s.add_to_end(2))
            .and_then(|s| s.add_to_front(0))
            .unwrap();
        assert_eq!(seq.to_vec(), vec![0, 1, 2]);
        assert_eq!(seq.front(), Ok(0));
        assert_eq!(seq.back(), Ok(2));
        assert_eq!(seq.size(), 3);
    }
}

#[test]
fn test_worked_example_slice_and_combine() {
    for kind in all_kinds() {
        let seq = int_sequence(kind, &[1, 2, 3, 4]);
        assert_eq!(seq.slice(1, 3).unwrap().to_vec(), vec![2, 3]);

        let left = int_sequence(kind, &[1, 2]);
        let right = int_sequence(kind, &[3, 4]);
        assert_eq!(left.combine(&right).unwrap().to_vec(), vec![1, 2, 3, 4]);
    }
}

#[test]
fn test_worked_example_failures() {
    for kind in all_kinds() {
        let empty = int_sequence(kind, &[]);
        assert_eq!(empty.delete(0).unwrap_err().code(), ErrorCode::EmptyContainer);
        assert_eq!(empty.front().unwrap_err().code(), ErrorCode::EmptyContainer);
        assert_eq!(empty.back().unwrap_err().code(), ErrorCode::EmptyContainer);
        assert_eq!(empty.at(0).unwrap_err().code(), ErrorCode::IndexOutOfRange);

        let three = int_sequence(kind, &[1, 2, 3]);
        assert_eq!(
            three.at(5).unwrap_err(),
            SequenceError::IndexOutOfRange { index: 5, len: 3 }
        );
        assert_eq!(three.insert(0, 4).unwrap_err().code(), ErrorCode::IndexOutOfRange);
        assert_eq!(three.delete(3).unwrap_err().code(), ErrorCode::IndexOutOfRange);
        assert_eq!(three.slice(2, 1).unwrap_err().code(), ErrorCode::InvalidRange);
        assert_eq!(three.slice(0, 4).unwrap_err().code(), ErrorCode::InvalidRange);
        assert_eq!(three.to_vec(), vec![1, 2, 3]);
    }
}

#[test]
fn test_insert_at_size_appends() {
    for kind in all_kinds() {
        let seq = int_sequence(kind, &[1, 2, 3]);
        let out = seq.insert(4, 3).unwrap();
        assert_eq!(out.back(), Ok(4));
    }
}

#[test]
fn test_policy_validation() {
    assert_eq!(
        GrowthPolicy::new(0, 2).unwrap_err().code(),
        ErrorCode::InvalidSize
    );
    assert_eq!(
        GrowthPolicy::new(1, 1).unwrap_err().code(),
        ErrorCode::InvalidArgument
    );
    assert_eq!(GrowthPolicy::default(), GrowthPolicy::new(1, 2).unwrap());
}
