// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyseq_sequence::prelude::*;
use lazyseq_test_utils::test_data::people;
use lazyseq_test_utils::{Person, Probe};

#[test]
fn test_difference_removes_values_of_any_operand() {
    // Arrange
    let values = Sequence::from_vec(vec![1, 2, 3, 4, 2, 5]);

    // Act
    let rest = values.difference(&[Sequence::from_vec(vec![2]), Sequence::from_vec(vec![4, 9])]);

    // Assert
    assert_eq!(rest.to_vec(), vec![1, 3, 5]);
}

#[test]
fn test_intersection_requires_every_operand() {
    // Arrange
    let values = Sequence::from_vec(vec![1, 2, 3, 2, 5]);

    // Act
    let common = values.intersection(&[
        Sequence::from_vec(vec![2, 3, 5]),
        Sequence::from_vec(vec![2, 9, 5]),
    ]);

    // Assert
    assert_eq!(common.to_vec(), vec![2, 2, 5]);
}

#[test]
fn test_set_operations_without_operands() {
    let values = Sequence::from_vec(vec![1, 2]);
    assert_eq!(values.difference(&[]).to_vec(), vec![1, 2]);
    assert_eq!(values.intersection(&[]).to_vec(), vec![1, 2]);
}

#[test]
fn test_operands_are_materialized_on_first_pull() {
    // Arrange
    let probe = Probe::new();
    let rest = Sequence::from_vec(vec![1, 2, 3]).difference(&[probe.values(vec![2])]);
    assert_eq!(probe.starts(), 0);

    // Act
    let values = rest.to_vec();

    // Assert
    assert_eq!(values, vec![1, 3]);
    assert_eq!(probe.starts(), 1);
}

#[test]
fn test_difference_by_user_equality() {
    // Arrange
    let everyone = people();
    let thirty = Sequence::from_vec(vec![Person::new("Someone", 30)]);

    // Act
    let others = everyone
        .difference_by(&[thirty], Person::same_age)
        .map(|p| p.name);

    // Assert
    assert_eq!(others.to_vec(), vec!["Alice", "Charlie"]);
}

#[test]
fn test_intersection_by_user_equality() {
    // Arrange
    let words = Sequence::from_vec(vec!["Apple", "berry", "Cherry"]);
    let lower = Sequence::from_vec(vec!["apple", "cherry"]);
    let upper = Sequence::from_vec(vec!["CHERRY", "APPLE", "BERRY"]);

    // Act
    let common = words.intersection_by(&[lower, upper], |a, b| a.eq_ignore_ascii_case(b));

    // Assert
    assert_eq!(common.to_vec(), vec!["Apple", "Cherry"]);
}
