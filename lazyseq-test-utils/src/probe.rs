// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pull and close accounting for traversals.

use lazyseq_core::{Cursor, Step};
use lazyseq_sequence::Sequence;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared counters observing every cursor wrapped through it.
///
/// Clones share the counters, so a probe can be moved into a sequence factory
/// and still be read by the test.
#[derive(Debug, Clone, Default)]
pub struct Probe {
    advances: Arc<AtomicUsize>,
    closes: Arc<AtomicUsize>,
    starts: Arc<AtomicUsize>,
}

impl Probe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `cursor` so that its advances and closes are counted.
    pub fn wrap<C: Cursor>(&self, cursor: C) -> ProbeCursor<C> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        ProbeCursor {
            inner: cursor,
            probe: self.clone(),
        }
    }

    /// Sequence producing the values of `sequence` through probed cursors.
    pub fn sequence<T: Send + 'static>(&self, sequence: &Sequence<T>) -> Sequence<T> {
        let probe = self.clone();
        let sequence = sequence.clone();
        Sequence::from_cursor_fn(move || probe.wrap(sequence.cursor()))
    }

    /// Probed `0, 1, 2, ...` without end.
    pub fn naturals(&self) -> Sequence<u64> {
        self.sequence(&Sequence::enum_from(0))
    }

    /// Probed copy of `values`.
    pub fn values<T: Clone + Send + Sync + 'static>(&self, values: Vec<T>) -> Sequence<T> {
        self.sequence(&Sequence::from_vec(values))
    }

    /// Number of `advance` calls across every probed cursor.
    pub fn advances(&self) -> usize {
        self.advances.load(Ordering::SeqCst)
    }

    /// Number of `close` calls across every probed cursor.
    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    /// Whether any probed cursor was closed.
    pub fn closed(&self) -> bool {
        self.close_count() > 0
    }

    /// Number of probed cursors started.
    pub fn starts(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }
}

/// Cursor reporting to a [`Probe`].
#[derive(Debug)]
pub struct ProbeCursor<C> {
    inner: C,
    probe: Probe,
}

impl<C: Cursor> Cursor for ProbeCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Step<C::Item> {
        self.probe.advances.fetch_add(1, Ordering::SeqCst);
        self.inner.advance()
    }

    fn close(&mut self) {
        self.probe.closes.fetch_add(1, Ordering::SeqCst);
        self.inner.close();
    }
}
