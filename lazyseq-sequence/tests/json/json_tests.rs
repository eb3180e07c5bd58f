// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyseq_sequence::prelude::*;
use serde_json::{json, Value};

#[test]
fn test_from_json_object_sorted_by_key() -> anyhow::Result<()> {
    // Arrange
    let document = json!({ "zeta": 1, "alpha": "a", "mid": [true] });

    // Act
    let members = Sequence::from_json_object(&document, true)?;
    let keys = members.map(|(key, _)| key).to_vec();

    // Assert
    assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
    assert_eq!(members.known_length(), Ok(3));
    Ok(())
}

#[test]
fn test_from_json_object_rejects_other_kinds() {
    // Arrange
    let document = json!([1, 2, 3]);

    // Act
    let result = Sequence::from_json_object(&document, false);

    // Assert
    assert_eq!(
        result.unwrap_err(),
        SequenceError::type_mismatch("object", "array")
    );
}

#[test]
fn test_to_object_round_trips_filtered_members() -> anyhow::Result<()> {
    // Arrange
    let document = json!({ "a": 1, "b": 2, "c": 3 });

    // Act
    let odd = Sequence::from_json_object(&document, true)?
        .filter(|(_, value)| value.as_i64().is_some_and(|v| v % 2 == 1))
        .to_object();

    // Assert
    assert_eq!(odd, json!({ "a": 1, "c": 3 }));
    Ok(())
}

#[test]
fn test_to_object_later_keys_win() {
    let pairs = Sequence::from_vec(vec![
        ("k".to_string(), json!(1)),
        ("k".to_string(), json!(2)),
    ]);
    assert_eq!(pairs.to_object(), json!({ "k": 2 }));
}

#[test]
fn test_from_json_array() -> anyhow::Result<()> {
    // Arrange
    let document = json!([1, "two", null]);

    // Act
    let items = Sequence::from_json_array(&document)?;
    let kinds = items
        .map(|item| match item {
            Value::Number(_) => "number",
            Value::String(_) => "string",
            _ => "other",
        })
        .to_vec();

    // Assert
    assert_eq!(kinds, vec!["number", "string", "other"]);
    assert!(matches!(
        Sequence::from_json_array(&json!(null)),
        Err(SequenceError::TypeMismatch { expected: "array", .. })
    ));
    Ok(())
}
