// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{Stream, StreamExt};
use lazyseq_sequence::prelude::*;
use std::fmt::Debug;

/// Traverse `sequence` twice and assert both traversals agree; returns the values.
pub fn assert_restartable<T>(sequence: &Sequence<T>) -> Vec<T>
where
    T: PartialEq + Debug + Send + 'static,
{
    let first = sequence.to_vec();
    let second = sequence.to_vec();
    assert_eq!(first, second, "second traversal differs from the first");
    first
}

/// Drain `stream` into a vector.
pub async fn collect_stream<S>(stream: S) -> Vec<S::Item>
where
    S: Stream,
{
    stream.collect().await
}
