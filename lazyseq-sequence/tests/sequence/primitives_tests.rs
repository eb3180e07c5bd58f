// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyseq_sequence::prelude::*;
use lazyseq_sequence::BoxCursor;
use lazyseq_test_utils::{assert_restartable, Probe};

#[test]
fn test_building_a_pipeline_pulls_nothing() {
    // Arrange
    let probe = Probe::new();

    // Act
    let pipeline = probe
        .naturals()
        .map(|v| v * 3)
        .filter(|v| v % 2 == 0)
        .scanl(0, |acc, v, _, _| acc + v)
        .take(4);

    // Assert
    assert_eq!(probe.advances(), 0);
    assert_eq!(probe.starts(), 0);
    assert_eq!(pipeline.to_vec(), vec![0, 6, 18, 36]);
}

#[test]
fn test_container_backed_sequence_is_restartable() {
    // Arrange
    let sequence = Sequence::from_vec(vec![3, 1, 2]).map(|v| v * 10);

    // Act
    let values = assert_restartable(&sequence);

    // Assert
    assert_eq!(values, vec![30, 10, 20]);
}

#[test]
fn test_every_traversal_starts_a_new_cursor() {
    // Arrange
    let probe = Probe::new();
    let sequence = probe.values(vec![1, 2, 3]);

    // Act
    let first = sequence.to_vec();
    let second = sequence.iter().collect::<Vec<_>>();

    // Assert
    assert_eq!(first, second);
    assert_eq!(probe.starts(), 2);
}

#[test]
fn test_filtered_map_receives_upstream_index() {
    // Arrange
    let letters = Sequence::from_vec(vec!['a', 'b', 'c', 'd']);

    // Act
    let labels = letters.filtered_map(|v, i, _| format!("{i}:{v}"), |v, _, _| *v != 'b');

    // Assert
    assert_eq!(labels.to_vec(), vec!["0:a", "2:c", "3:d"]);
}

#[test]
fn test_filtered_map_with_state_is_fresh_per_traversal() {
    // Arrange
    let running = Sequence::from_vec(vec![1, 2, 3]).filtered_map_with(
        || 0,
        |total, v, _, _| {
            *total += v;
            *total
        },
        |_, _, _, _| true,
    );

    // Act
    let first = running.to_vec();
    let second = running.to_vec();

    // Assert
    assert_eq!(first, vec![1, 3, 6]);
    assert_eq!(second, vec![1, 3, 6]);
}

#[test]
fn test_scanl_never_emits_initial() {
    // Arrange
    let values = Sequence::from_vec(vec![1, 2, 3]);

    // Act
    let running = values.scanl(100, |acc, v, _, _| acc + v);
    let over_empty = Sequence::<i32>::EMPTY.scanl(100, |acc, v, _, _| acc + v);

    // Assert
    assert_eq!(running.to_vec(), vec![101, 103, 106]);
    assert!(over_empty.to_vec().is_empty());
}

#[test]
fn test_reduce_returns_initial_on_empty() {
    let total = Sequence::<i32>::empty().reduce(7, |acc, v, _, _| acc + v);
    assert_eq!(total, 7);
}

#[test]
fn test_try_reduce_returns_user_error_unchanged() {
    // Arrange
    let probe = Probe::new();
    let sequence = probe.naturals();

    // Act
    let result: std::result::Result<u64, String> = sequence.try_reduce(0, |acc, v, _, _| {
        if v == 4 {
            return Err(format!("refused {v}"));
        }
        Ok(acc + v)
    });

    // Assert
    assert_eq!(result, Err("refused 4".to_string()));
    assert_eq!(probe.advances(), 5);
    assert!(probe.closed());
}

#[test]
fn test_try_reduce_ok() -> anyhow::Result<()> {
    let total = Sequence::from_vec(vec![1, 2, 3]).try_reduce(0, |acc, v, _, _| {
        Ok::<_, SequenceError>(acc + v)
    })?;
    assert_eq!(total, 6);
    Ok(())
}

#[test]
fn test_empty_sequence_is_shared_constant() {
    // Arrange
    let empty: Sequence<String> = Sequence::EMPTY;

    // Act & Assert
    assert_eq!(empty.variant(), "empty");
    assert!(empty.to_vec().is_empty());
    assert_eq!(empty.known_length(), Ok(0));
    assert_eq!(Sequence::<String>::default().variant(), "empty");
}

#[test]
fn test_known_length_capability() {
    // Arrange
    let array = Sequence::from_vec(vec![1, 2, 3]);
    let text = Sequence::from_str("héllo");
    let generated = Sequence::range(0, 10, 1, false);
    let derived = array.map(|v| v + 1);

    // Act & Assert
    assert_eq!(array.known_length(), Ok(3));
    assert_eq!(text.known_length(), Ok(5));
    assert_eq!(
        generated.known_length(),
        Err(SequenceError::unimplemented("known_length", "enumeration"))
    );
    assert!(matches!(
        derived.known_length(),
        Err(SequenceError::UnimplementedOperation { variant: "derived", .. })
    ));
}

#[test]
fn test_custom_producer() {
    // Arrange
    struct Countdown(u32);

    impl Producer<u32> for Countdown {
        fn cursor(&self) -> BoxCursor<u32> {
            lazyseq_core::IterCursor::new((1..=self.0).rev()).boxed()
        }

        fn size(&self) -> lazyseq_sequence::Result<usize> {
            Ok(self.0 as usize)
        }

        fn variant(&self) -> &'static str {
            "countdown"
        }
    }

    // Act
    let sequence = Sequence::from_producer(Countdown(3));

    // Assert
    assert_eq!(sequence.to_vec(), vec![3, 2, 1]);
    assert_eq!(sequence.known_length(), Ok(3));
    assert_eq!(format!("{sequence:?}"), "Sequence { variant: \"countdown\", .. }");
}

#[test]
fn test_borrowed_sequence_iterates() {
    let sequence = Sequence::from_vec(vec![1, 2, 3]);
    let mut total = 0;
    for v in &sequence {
        total += v;
    }
    assert_eq!(total, 6);
}
