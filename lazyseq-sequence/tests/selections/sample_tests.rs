// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyseq_sequence::prelude::*;
use std::collections::HashSet;

#[test]
fn test_sample_with_zero_generator_replaces_first_slot() {
    // Arrange
    let values = Sequence::from_vec(vec![1, 2, 3, 4, 5]);

    // Act
    let picked = values.sample_with(2, || 0.0);

    // Assert
    assert_eq!(picked, vec![5, 2]);
}

#[test]
fn test_sample_with_high_generator_skips_out_of_reservoir_slots() {
    // Arrange
    let values = Sequence::from_vec(vec![1, 2, 3, 4, 5]);

    // Act
    let picked = values.sample_with(2, || 0.999);

    // Assert
    assert_eq!(picked, vec![1, 3]);
}

#[test]
fn test_sample_picks_distinct_members() {
    // Arrange
    let values = Sequence::range(0, 100, 1, false);
    let members: HashSet<i32> = values.to_set();

    // Act
    let picked = values.sample(5);

    // Assert
    assert_eq!(picked.len(), 5);
    assert!(picked.iter().all(|v| members.contains(v)));
    assert_eq!(picked.iter().collect::<HashSet<_>>().len(), 5);
}

#[test]
fn test_sample_of_short_sequence_returns_everything() {
    let values = Sequence::from_vec(vec!['x', 'y']);
    assert_eq!(values.sample(10), vec!['x', 'y']);
}

#[test]
fn test_sample_size_is_at_least_one() {
    let values = Sequence::from_vec(vec![7, 8, 9]);
    assert_eq!(values.sample(0).len(), 1);
}

#[test]
fn test_sample_seeded_is_reproducible() {
    // Arrange
    let values = Sequence::range(0, 1000, 1, false);

    // Act
    let first = values.sample_seeded(10, 42);
    let second = values.sample_seeded(10, 42);

    // Assert
    assert_eq!(first, second);
    assert_eq!(first.len(), 10);
}

#[test]
fn test_sample_of_unbounded_size_returns_everything() {
    let values = Sequence::from_vec(vec![1, 2, 3]);
    assert_eq!(values.sample(usize::MAX), vec![1, 2, 3]);
}
