// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyseq_core::IterCursor;
use lazyseq_sequence::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_container_constructors() {
    // Arrange
    let slice = [1, 2, 3];

    // Act
    let from_slice = Sequence::from_slice(&slice);
    let from_values = Sequence::from_values(slice.iter().map(|v| v * 2));
    let from_into: Sequence<i32> = vec![7, 8].into();
    let collected: Sequence<char> = "hey".chars().collect();

    // Assert
    assert_eq!(from_slice.to_vec(), vec![1, 2, 3]);
    assert_eq!(from_values.to_vec(), vec![2, 4, 6]);
    assert_eq!(from_into.to_vec(), vec![7, 8]);
    assert_eq!(collected.to_vec(), vec!['h', 'e', 'y']);
    assert_eq!(from_slice.variant(), "array");
}

#[test]
fn test_from_str_is_per_character() {
    // Arrange
    let text = Sequence::from_string(String::from("añb"));

    // Act & Assert
    assert_eq!(text.to_vec(), vec!['a', 'ñ', 'b']);
    assert_eq!(text.variant(), "string");
}

#[test]
fn test_from_map_sorting() {
    // Arrange
    let mut scores = HashMap::new();
    scores.insert("carol", 3);
    scores.insert("alice", 1);
    scores.insert("bob", 2);

    // Act
    let sorted = Sequence::from_map(scores.clone(), true);
    let unsorted = Sequence::from_map(scores, false);

    // Assert
    assert_eq!(
        sorted.to_vec(),
        vec![("alice", 1), ("bob", 2), ("carol", 3)]
    );
    assert_eq!(unsorted.length(), 3);
    assert_eq!(sorted.known_length(), Ok(3));
}

#[test]
fn test_from_fn_calls_factory_per_traversal() {
    // Arrange
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let squares = Sequence::from_fn(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        (1..4).map(|v| v * v)
    });

    // Act
    let first = squares.to_vec();
    let second = squares.to_vec();

    // Assert
    assert_eq!(first, vec![1, 4, 9]);
    assert_eq!(second, first);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(squares.variant(), "generator");
}

#[test]
fn test_from_cursor_fn() {
    let letters = Sequence::from_cursor_fn(|| IterCursor::new("xyz".chars()));
    assert_eq!(letters.to_vec(), vec!['x', 'y', 'z']);
    assert_eq!(letters.to_vec(), vec!['x', 'y', 'z']);
}

#[test]
fn test_from_iter_once_second_traversal_is_empty() {
    // Arrange
    let once = Sequence::from_iter_once(vec![1, 2, 3]);

    // Act
    let first = once.to_vec();
    let second = once.to_vec();

    // Assert
    assert_eq!(first, vec![1, 2, 3]);
    assert!(second.is_empty());
    assert_eq!(once.variant(), "iterator");
}

#[test]
fn test_repeat() {
    // Arrange
    let three = Sequence::repeat("hi", Some(3));
    let forever = Sequence::repeat(0u8, None);

    // Act & Assert
    assert_eq!(three.to_vec(), vec!["hi", "hi", "hi"]);
    assert_eq!(three.known_length(), Ok(3));
    assert_eq!(forever.take(4).to_vec(), vec![0, 0, 0, 0]);
    assert!(forever.known_length().is_err());
}

#[test]
fn test_iterate_starts_with_seed() {
    // Arrange
    let powers = Sequence::iterate(|v| v * 2, 1u64, Some(5));
    let unbounded = Sequence::iterate(|s: &String| format!("{s}a"), String::new(), None);

    // Act & Assert
    assert_eq!(powers.to_vec(), vec![1, 2, 4, 8, 16]);
    assert_eq!(unbounded.get_or(3, String::new()), "aaa");
}
