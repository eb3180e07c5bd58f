// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyseq_sequence::prelude::*;
use lazyseq_test_utils::test_data::{people, person_alice, person_charlie, words};
use lazyseq_test_utils::Probe;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_take_while_stops_at_first_failure() {
    // Arrange
    let probe = Probe::new();

    // Act
    let values = probe.naturals().take_while(|v| *v < 4).to_vec();

    // Assert
    assert_eq!(values, vec![0, 1, 2, 3]);
    assert_eq!(probe.advances(), 5);
    assert!(probe.closed());
}

#[test]
fn test_drop_while_keeps_later_matches() {
    // Arrange
    let values = Sequence::from_vec(vec![1, 2, 5, 1, 7]);

    // Act
    let rest = values.drop_while(|v| *v < 3);

    // Assert
    assert_eq!(rest.to_vec(), vec![5, 1, 7]);
}

#[test]
fn test_slice_and_friends() {
    // Arrange
    let digits = Sequence::range(0, 10, 1, false);

    // Act & Assert
    assert_eq!(digits.slice(2, Some(5)).to_vec(), vec![2, 3, 4]);
    assert_eq!(digits.slice(8, None).to_vec(), vec![8, 9]);
    assert_eq!(digits.slice(5, Some(5)).to_vec(), Vec::<i32>::new());
    assert_eq!(digits.drop(7).to_vec(), vec![7, 8, 9]);
    assert_eq!(digits.tail().take(2).to_vec(), vec![1, 2]);
    assert_eq!(digits.take(20).length(), 10);
}

#[test]
fn test_slice_closes_upstream_at_end() {
    // Arrange
    let probe = Probe::new();

    // Act
    let values = probe.naturals().slice(3, Some(6)).to_vec();

    // Assert
    assert_eq!(values, vec![3, 4, 5]);
    assert_eq!(probe.advances(), 6);
    assert!(probe.closed());
}

#[test]
fn test_compress_stops_with_shorter_flags() {
    // Arrange
    let letters = Sequence::from_str("abcd");
    let flags = Sequence::from_vec(vec![true, false, true]);

    // Act
    let kept = letters.compress(&flags);

    // Assert
    assert_eq!(kept.to_vec(), vec!['a', 'c']);
}

#[test]
fn test_nub_keeps_first_occurrences() {
    let values = Sequence::from_vec(vec![1, 2, 1, 3, 2, 3, 4]);
    assert_eq!(values.nub().to_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn test_nub_by_custom_equality() {
    // Arrange
    let values = Sequence::from_vec(vec![1, 2, 4, 5, 3, 6]);

    // Act
    let by_remainder = values.nub_by(|a, b| a % 3 == b % 3);

    // Assert
    assert_eq!(by_remainder.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_nub_state_is_per_traversal() {
    let distinct = words().map(|w| w.len()).nub();
    assert_eq!(distinct.to_vec(), vec![5, 6, 7, 9]);
    assert_eq!(distinct.to_vec(), vec![5, 6, 7, 9]);
}

#[test]
fn test_greater_and_lesser_keep_ties() {
    // Arrange
    let values = Sequence::from_vec(vec![3, 1, 3, 2, 1]);

    // Act & Assert
    assert_eq!(values.greater(), vec![3, 3]);
    assert_eq!(values.lesser(), vec![1, 1]);
    assert!(Sequence::<i32>::EMPTY.greater().is_empty());
}

#[test]
fn test_greater_by_and_lesser_by() {
    // Arrange
    let everyone = people();

    // Act
    let oldest = everyone.greater_by(|p| p.age);
    let youngest = everyone.lesser_by(|p| p.age);
    let closest_to_thirty = everyone.lesser_by(|p| p.age.abs_diff(30));

    // Assert
    assert_eq!(oldest, vec![person_charlie()]);
    assert_eq!(youngest, vec![person_alice()]);
    assert_eq!(
        closest_to_thirty.iter().map(|p| p.name).collect::<Vec<_>>(),
        vec!["Bob", "Diane"]
    );
}

#[test]
fn test_greater_skips_incomparable_values() {
    let values = Sequence::from_vec(vec![1.0, f64::NAN, 3.0, 3.0]);
    assert_eq!(values.greater(), vec![3.0, 3.0]);
}

#[test]
fn test_greater_and_lesser_skip_incomparable_first_value() {
    // Arrange
    let values = Sequence::from_vec(vec![f64::NAN, 1.0, 3.0, 3.0]);

    // Act
    let greatest = values.greater();
    let least = values.lesser();

    // Assert
    assert_eq!(greatest, vec![3.0, 3.0]);
    assert_eq!(least, vec![1.0]);
}

#[test]
fn test_greater_by_skips_incomparable_keys() {
    // Arrange
    let readings = Sequence::from_vec(vec![("broken", f64::NAN), ("low", 0.5), ("high", 2.5)]);

    // Act
    let highest = readings.greater_by(|(_, level)| *level);

    // Assert
    assert_eq!(highest, vec![("high", 2.5)]);
}

#[test]
fn test_greater_by_evaluates_each_value_once() {
    // Arrange
    let evaluations = AtomicUsize::new(0);
    let values = Sequence::from_vec(vec![4, 9, 2, 9, 7]);

    // Act
    let greatest = values.greater_by(|v| {
        evaluations.fetch_add(1, Ordering::SeqCst);
        *v
    });

    // Assert
    assert_eq!(greatest, vec![9, 9]);
    assert_eq!(evaluations.load(Ordering::SeqCst), 5);
}
