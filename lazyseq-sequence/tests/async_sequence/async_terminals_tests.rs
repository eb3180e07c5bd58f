// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyseq_sequence::prelude::*;
use lazyseq_test_utils::Probe;

#[tokio::test]
async fn test_reduce_close_short_circuits() {
    // Arrange
    let probe = Probe::new();
    let sequence = probe.naturals().to_async();

    // Act
    let total = sequence
        .reduce(0, |acc, v, _, handle| {
            if v == 4 {
                handle.close();
            }
            acc + v
        })
        .await;

    // Assert
    assert_eq!(total, 10);
    assert_eq!(probe.advances(), 5);
    assert!(probe.closed());
}

#[tokio::test]
async fn test_try_reduce_propagates_error() {
    // Arrange
    let sequence = AsyncSequence::from_values(vec![1, 2, -3, 4]);

    // Act
    let positive: std::result::Result<i32, String> = sequence
        .try_reduce(0, |acc, v, index, _| {
            if v < 0 {
                return Err(format!("negative at {index}"));
            }
            Ok(acc + v)
        })
        .await;
    let total = sequence
        .take(2)
        .try_reduce(0, |acc, v, _, _| Ok::<_, String>(acc + v))
        .await;

    // Assert
    assert_eq!(positive, Err("negative at 2".to_string()));
    assert_eq!(total, Ok(3));
}

#[tokio::test]
async fn test_head_and_head_or() -> anyhow::Result<()> {
    // Arrange
    let values = AsyncSequence::from_values(vec!["a", "b"]);
    let empty = values.filter(|_| false);

    // Act
    let head = values.head().await?;
    let missing = empty.head().await;

    // Assert
    assert_eq!(head, "a");
    assert!(missing.is_err_and(|e| e.is_empty_sequence()));
    assert_eq!(empty.head_or("z").await, "z");
    Ok(())
}

#[tokio::test]
async fn test_any_and_all_stop_early() {
    // Arrange
    let probe = Probe::new();
    let naturals = probe.naturals().to_async();

    // Act
    let found = naturals.any(|v| *v == 3).await;
    let after_any = probe.advances();
    let all_small = naturals.all(|v| *v < 2).await;

    // Assert
    assert!(found);
    assert_eq!(after_any, 4);
    assert!(!all_small);
    assert_eq!(probe.advances(), 4 + 3);
}

#[tokio::test]
async fn test_any_and_all_on_empty() {
    let empty = AsyncSequence::<i32>::from_values(Vec::new());
    assert!(!empty.any(|_| true).await);
    assert!(empty.all(|_| false).await);
}

#[tokio::test]
async fn test_length_and_is_empty() {
    // Arrange
    let probe = Probe::new();
    let naturals = probe.naturals().to_async();

    // Act & Assert
    assert!(!naturals.is_empty().await);
    assert_eq!(probe.advances(), 1);
    assert_eq!(naturals.take(7).length().await, 7);
    assert!(AsyncSequence::<u8>::from_values(vec![]).is_empty().await);
}

#[tokio::test]
async fn test_for_each_returns_last_result() {
    // Arrange
    let values = AsyncSequence::from_values(vec![10, 20, 30]);
    let mut seen = Vec::new();

    // Act
    let last = values
        .for_each(|v, index| {
            seen.push(index);
            v / 10
        })
        .await;
    let on_empty = values.take(0).for_each(|v, _| v).await;

    // Assert
    assert_eq!(last, Some(3));
    assert_eq!(seen, vec![0, 1, 2]);
    assert_eq!(on_empty, None);
}
