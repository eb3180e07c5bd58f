// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use lazyseq_sequence::prelude::*;
use lazyseq_test_utils::{collect_stream, Probe};
use std::time::Duration;

#[tokio::test]
async fn test_to_async_keeps_values_and_order() {
    // Arrange
    let sequence = Sequence::from_vec(vec![3, 1, 2]).to_async();

    // Act
    let values = sequence.to_vec().await;

    // Assert
    assert_eq!(values, vec![3, 1, 2]);
}

#[tokio::test]
async fn test_async_pipeline_is_lazy_and_restartable() {
    // Arrange
    let probe = Probe::new();
    let pipeline = probe
        .naturals()
        .to_async()
        .map(|v| v * 10)
        .filter(|v| v % 20 == 0)
        .take(3);

    // Act
    let before = probe.starts();
    let first = pipeline.to_vec().await;
    let second = pipeline.to_vec().await;

    // Assert
    assert_eq!(before, 0);
    assert_eq!(first, vec![0, 20, 40]);
    assert_eq!(second, first);
    assert_eq!(probe.starts(), 2);
}

#[tokio::test]
async fn test_async_take_closes_upstream() {
    // Arrange
    let probe = Probe::new();
    let firsts = probe.naturals().to_async().take(2);

    // Act
    let values = firsts.to_vec().await;

    // Assert
    assert_eq!(values, vec![0, 1]);
    assert_eq!(probe.advances(), 2);
    assert!(probe.closed());
}

#[tokio::test]
async fn test_from_stream_fn_with_pending_polls() {
    // Arrange
    let ticks = AsyncSequence::from_stream_fn(|| {
        futures::stream::iter(1..=3).then(|v| async move {
            tokio::time::sleep(Duration::from_millis(1)).await;
            v
        })
    });

    // Act
    let doubled = ticks.map(|v| v * 2).to_vec().await;

    // Assert
    assert_eq!(doubled, vec![2, 4, 6]);
}

#[tokio::test]
async fn test_slice_drop_and_while_operators() {
    // Arrange
    let values = AsyncSequence::from_values(vec![1, 2, 3, 4, 5, 1]);

    // Act
    let sliced = values.slice(1, Some(3)).to_vec().await;
    let dropped = values.drop(4).to_vec().await;
    let leading = values.take_while(|v| *v < 3).to_vec().await;
    let trailing = values.drop_while(|v| *v < 3).to_vec().await;

    // Assert
    assert_eq!(sliced, vec![2, 3]);
    assert_eq!(dropped, vec![5, 1]);
    assert_eq!(leading, vec![1, 2]);
    assert_eq!(trailing, vec![3, 4, 5, 1]);
}

#[tokio::test]
async fn test_scanl_and_filtered_map_with() {
    // Arrange
    let values = Sequence::range(1, 5, 1, false).to_async();

    // Act
    let running = values.scanl(0, |acc, v, _, _| acc + v).to_vec().await;
    let labelled = values
        .filtered_map_with(
            || 0usize,
            |seen, v, index, _| {
                *seen += 1;
                format!("{index}:{v}:{seen}")
            },
            |_, v, _, _| v % 2 == 0,
        )
        .to_vec()
        .await;

    // Assert
    assert_eq!(running, vec![1, 3, 6, 10]);
    assert_eq!(labelled, vec!["1:2:1", "3:4:2"]);
}

#[tokio::test]
async fn test_async_concat_starts_operands_lazily() {
    // Arrange
    let first = Probe::new();
    let second = Probe::new();
    let joined = first
        .values(vec![1, 2])
        .to_async()
        .concat(&[second.values(vec![3, 4]).to_async()]);

    // Act
    let head = joined.take(2).to_vec().await;
    let all = joined.to_vec().await;

    // Assert
    assert_eq!(head, vec![1, 2]);
    assert_eq!(all, vec![1, 2, 3, 4]);
    assert_eq!(first.starts(), 2);
    assert_eq!(second.starts(), 1);
}

#[tokio::test]
async fn test_stream_view() {
    // Arrange
    let probe = Probe::new();
    let sequence = probe.naturals().to_async().map(|v| v + 1);

    // Act
    let values = collect_stream(sequence.stream().take(3)).await;

    // Assert
    assert_eq!(values, vec![1, 2, 3]);
    assert!(probe.closed());
}
