// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyseq_sequence::prelude::*;
use lazyseq_test_utils::Probe;

#[test]
fn test_head_pulls_one_value() -> anyhow::Result<()> {
    // Arrange
    let probe = Probe::new();

    // Act
    let first = probe.naturals().head()?;

    // Assert
    assert_eq!(first, 0);
    assert_eq!(probe.advances(), 1);
    assert!(probe.closed());
    Ok(())
}

#[test]
fn test_head_on_empty_is_an_error() {
    // Arrange
    let empty = Sequence::<i32>::EMPTY;

    // Act
    let result = empty.head();

    // Assert
    assert_eq!(result, Err(SequenceError::empty_sequence("head")));
    assert!(result.is_err_and(|e| e.is_empty_sequence()));
    assert_eq!(empty.head_or(42), 42);
}

#[test]
fn test_get_by_index() -> anyhow::Result<()> {
    // Arrange
    let letters = Sequence::from_str("lazy");

    // Act & Assert
    assert_eq!(letters.get(0)?, 'l');
    assert_eq!(letters.get(3)?, 'y');
    assert_eq!(letters.get_or(4, '?'), '?');
    Ok(())
}

#[test]
fn test_get_out_of_range_names_the_index() {
    // Arrange
    let values = Sequence::from_vec(vec![1, 2, 3]);

    // Act
    let error = values.get(10).unwrap_err();

    // Assert
    assert!(error.is_empty_sequence());
    assert_eq!(error.to_string(), "Empty sequence: get(10): head");
}

#[test]
fn test_get_stops_after_the_index() -> anyhow::Result<()> {
    // Arrange
    let probe = Probe::new();

    // Act
    let value = probe.naturals().get(4)?;

    // Assert
    assert_eq!(value, 4);
    assert_eq!(probe.advances(), 5);
    Ok(())
}

#[test]
fn test_last_value() -> anyhow::Result<()> {
    // Arrange
    let values = Sequence::range(0, 5, 1, false);

    // Act & Assert
    assert_eq!(values.last_value()?, 4);
    assert_eq!(
        Sequence::<i32>::EMPTY.last_value(),
        Err(SequenceError::empty_sequence("last_value"))
    );
    assert_eq!(Sequence::<i32>::EMPTY.last_value_or(-1), -1);
    Ok(())
}
