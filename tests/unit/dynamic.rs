//! Type-erased sequences: element-kind checks at runtime.

use seqkit::{
    AnySequence, AnyValue, BackingKind, ElementKind, ErrorCode, Mutability, SequenceError,
};

fn text(values: &[&str], backing: BackingKind) -> AnySequence {
    AnySequence::parse(ElementKind::Text, backing, Mutability::Mutable, values).unwrap()
}

#[test]
fn test_element_kinds_must_match() {
    let words = text(&["a", "b"], BackingKind::List);
    let numbers =
        AnySequence::parse(ElementKind::Float, BackingKind::List, Mutability::Mutable, &["1.5"])
            .unwrap();

    let err = words.combine(&numbers).unwrap_err();
    assert_eq!(
        err,
        SequenceError::TypeMismatch {
            left: "text".into(),
            right: "float".into(),
        }
    );
    assert_eq!(words.size(), 2);
    assert_eq!(numbers.size(), 1);
}

#[test]
fn test_backing_still_checked() {
    let list = text(&["a"], BackingKind::List);
    let array = text(&["b"], BackingKind::Array);
    assert_eq!(
        list.combine(&array).unwrap_err(),
        SequenceError::TypeMismatch {
            left: "list".into(),
            right: "array".into(),
        }
    );
    assert_eq!(
        list.combine(&text(&["c"], BackingKind::List)).unwrap().to_string(),
        "[a, c]"
    );
}

#[test]
fn test_values_round_through_the_boundary() {
    let seq = AnySequence::new(ElementKind::Int, BackingKind::Array, Mutability::Immutable);
    let seq = seq
        .add_to_end(AnyValue::Int(2))
        .and_then(|s| s.add_to_front(AnyValue::Int(1)))
        .and_then(|s| s.insert(AnyValue::Int(3), 2))
        .unwrap();
    assert_eq!(seq.front(), Ok(AnyValue::Int(1)));
    assert_eq!(seq.back(), Ok(AnyValue::Int(3)));
    assert_eq!(seq.element_kind(), ElementKind::Int);
    assert_eq!(seq.kind().mutability, Mutability::Immutable);

    let err = seq.insert(AnyValue::Float(0.5), 0).unwrap_err();
    assert_eq!(err.code(), ErrorCode::TypeMismatch);
}

#[test]
fn test_parse_rejects_bad_input() {
    let err = AnySequence::parse(
        ElementKind::Int,
        BackingKind::Array,
        Mutability::Mutable,
        &["1", "two"],
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidArgument);
}

#[test]
fn test_json_is_a_plain_array() {
    let seq = text(&["x", "y"], BackingKind::Array);
    assert_eq!(serde_json::to_string(&seq).unwrap(), r#"["x","y"]"#);
    assert_eq!(
        serde_json::to_string(&AnyValue::Float(2.5)).unwrap(),
        "2.5"
    );
}
