// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filtered-map kernel, the selection primitive.

use alloc::sync::Arc;
use lazyseq_core::{CursorHandle, Feed, Kernel};

/// Check-then-transform step with per-traversal state.
///
/// For every upstream value, `check_fn` decides whether it is kept; kept values
/// are handed to `value_fn` and its result is emitted. Both callbacks share
/// `state`, which is created fresh for every traversal by the sequence layer.
///
/// The callbacks are shared between traversals through `Arc`, which is why they
/// are `Fn` and all mutable state goes through `state`.
///
/// # Examples
///
/// ```rust
/// use lazyseq_core::{Cursor, CursorHandle, IterCursor, Step};
/// use lazyseq_generators::{FilteredMap, KernelCursor};
/// use std::sync::Arc;
///
/// let kernel = FilteredMap::new(
///     (),
///     Arc::new(|_: &mut (), v: i32, _: usize, _: &mut CursorHandle| v * 10),
///     Arc::new(|_: &mut (), v: &i32, _: usize, _: &mut CursorHandle| v % 2 == 1),
/// );
/// let mut cursor = KernelCursor::new(IterCursor::new(1..5), kernel);
///
/// assert_eq!(cursor.advance(), Step::Produced(10));
/// assert_eq!(cursor.advance(), Step::Produced(30));
/// assert_eq!(cursor.advance(), Step::Completed);
/// ```
pub struct FilteredMap<S, V, C> {
    state: S,
    value_fn: Arc<V>,
    check_fn: Arc<C>,
}

impl<S, V, C> FilteredMap<S, V, C> {
    /// Build a kernel around freshly created `state`.
    pub const fn new(state: S, value_fn: Arc<V>, check_fn: Arc<C>) -> Self {
        Self {
            state,
            value_fn,
            check_fn,
        }
    }
}

impl<T, R, S, V, C> Kernel<T> for FilteredMap<S, V, C>
where
    V: Fn(&mut S, T, usize, &mut CursorHandle) -> R,
    C: Fn(&mut S, &T, usize, &mut CursorHandle) -> bool,
{
    type Output = R;

    fn feed(&mut self, value: T, index: usize, handle: &mut CursorHandle) -> Feed<R> {
        if !(self.check_fn)(&mut self.state, &value, index, handle) {
            return Feed::Skip;
        }
        Feed::Emit((self.value_fn)(&mut self.state, value, index, handle))
    }
}
