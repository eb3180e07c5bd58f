// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Scan kernel, the running-fold primitive.

use alloc::sync::Arc;
use lazyseq_core::{CursorHandle, Feed, Kernel};

/// Left fold that emits every intermediate accumulator.
///
/// The first emitted value is `fold(initial, first, 0, handle)`; `initial`
/// itself is never emitted, so an empty upstream scans to an empty production.
pub struct Scan<A, F> {
    acc: Option<A>,
    fold: Arc<F>,
}

impl<A, F> Scan<A, F> {
    /// Start a scan from `initial`.
    pub const fn new(initial: A, fold: Arc<F>) -> Self {
        Self {
            acc: Some(initial),
            fold,
        }
    }
}

impl<T, A, F> Kernel<T> for Scan<A, F>
where
    A: Clone,
    F: Fn(A, T, usize, &mut CursorHandle) -> A,
{
    type Output = A;

    fn feed(&mut self, value: T, index: usize, handle: &mut CursorHandle) -> Feed<A> {
        // The accumulator is only absent while the fold runs.
        let Some(acc) = self.acc.take() else {
            return Feed::Skip;
        };
        let next = (self.fold)(acc, value, index, handle);
        self.acc = Some(next.clone());
        Feed::Emit(next)
    }
}
