// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Asynchronous flavor of [`Sequence`](crate::Sequence).
//!
//! [`AsyncSequence`] holds a factory of [`AsyncCursor`]s. Its lazy operators run
//! the same kernels as the synchronous ones through
//! [`AsyncKernelCursor`], and its terminals are `async fn`s folding over
//! the cursor adapted into a [`Stream`].
//!
//! Callbacks stay synchronous; only the pulls suspend.

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use futures::{Stream, StreamExt};
use lazyseq_core::{
    AsyncCursor, AsyncCursorExt, AsyncCursorThunk, BoxAsyncCursor, CursorHandle, CursorStream,
    Kernel, Result, SequenceError, StreamCursor,
};
use lazyseq_generators::{
    AsyncConcat, AsyncKernelCursor, DropWhile, FilteredMap, Scan, Slice, TakeWhile,
};

type AsyncCursorFactory<T> = Arc<dyn Fn() -> BoxAsyncCursor<T> + Send + Sync>;

/// Immutable, lazily evaluated, restartable asynchronous sequence.
///
/// # Examples
///
/// ```
/// use lazyseq_sequence::prelude::*;
///
/// # #[tokio::main]
/// # async fn main() {
/// let squares = Sequence::range(1, 5, 1, false).to_async().map(|v| v * v);
///
/// assert_eq!(squares.to_vec().await, vec![1, 4, 9, 16]);
/// # }
/// ```
pub struct AsyncSequence<T> {
    factory: AsyncCursorFactory<T>,
}

impl<T: Send + 'static> AsyncSequence<T> {
    /// Sequence over the cursors created by `factory`, one per traversal.
    pub fn from_cursor_fn<C, F>(factory: F) -> Self
    where
        C: AsyncCursor<Item = T> + Send + 'static,
        F: Fn() -> C + Send + Sync + 'static,
    {
        Self {
            factory: Arc::new(move || Box::pin(factory()) as BoxAsyncCursor<T>),
        }
    }

    /// Sequence over the streams created by `factory`, one per traversal.
    pub fn from_stream_fn<S, F>(factory: F) -> Self
    where
        S: Stream<Item = T> + Send + 'static,
        F: Fn() -> S + Send + Sync + 'static,
    {
        Self::from_cursor_fn(move || StreamCursor::new(factory()))
    }

    /// Sequence over a copy of `values`.
    pub fn from_values(values: Vec<T>) -> Self
    where
        T: Clone + Sync,
    {
        let values: Arc<[T]> = values.into();
        Self::from_stream_fn(move || futures::stream::iter(values.to_vec()))
    }

    /// Start a new traversal.
    pub fn cursor(&self) -> BoxAsyncCursor<T> {
        (self.factory)()
    }

    /// Adapt a new traversal into a [`Stream`]. Dropping the stream closes it.
    pub fn stream(&self) -> CursorStream<BoxAsyncCursor<T>> {
        self.cursor().into_stream()
    }

    /// Sequence running a fresh kernel, built by `kernel`, over every traversal
    /// of this one; see [`Sequence::with_kernel`](crate::Sequence::with_kernel).
    pub fn with_kernel<K, F>(&self, kernel: F) -> AsyncSequence<K::Output>
    where
        K: Kernel<T> + Send + 'static,
        K::Output: Send + 'static,
        F: Fn() -> K + Send + Sync + 'static,
    {
        let upstream = self.clone();
        AsyncSequence::from_cursor_fn(move || AsyncKernelCursor::new(upstream.cursor(), kernel()))
    }

    /// Check-then-transform with per-traversal state; see
    /// [`Sequence::filtered_map_with`](crate::Sequence::filtered_map_with).
    pub fn filtered_map_with<S, R, I, V, C>(&self, init: I, value_fn: V, check_fn: C) -> AsyncSequence<R>
    where
        S: Send + 'static,
        R: Send + 'static,
        I: Fn() -> S + Send + Sync + 'static,
        V: Fn(&mut S, T, usize, &mut CursorHandle) -> R + Send + Sync + 'static,
        C: Fn(&mut S, &T, usize, &mut CursorHandle) -> bool + Send + Sync + 'static,
    {
        let value_fn = Arc::new(value_fn);
        let check_fn = Arc::new(check_fn);
        self.with_kernel(move || {
            FilteredMap::new(init(), Arc::clone(&value_fn), Arc::clone(&check_fn))
        })
    }

    /// Stateless check-then-transform.
    pub fn filtered_map<R, V, C>(&self, value_fn: V, check_fn: C) -> AsyncSequence<R>
    where
        R: Send + 'static,
        V: Fn(T, usize, &mut CursorHandle) -> R + Send + Sync + 'static,
        C: Fn(&T, usize, &mut CursorHandle) -> bool + Send + Sync + 'static,
    {
        self.filtered_map_with(
            || (),
            move |_, value, index, handle| value_fn(value, index, handle),
            move |_, value, index, handle| check_fn(value, index, handle),
        )
    }

    /// Transform every value.
    pub fn map<R, F>(&self, f: F) -> AsyncSequence<R>
    where
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        self.filtered_map(move |value, _, _| f(value), |_, _, _| true)
    }

    /// Keep the values satisfying `predicate`.
    pub fn filter<P>(&self, predicate: P) -> AsyncSequence<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.filtered_map(|value, _, _| value, move |value, _, _| predicate(value))
    }

    /// Values up to, not including, the first one failing `predicate`.
    pub fn take_while<P>(&self, predicate: P) -> AsyncSequence<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let predicate = Arc::new(predicate);
        self.with_kernel(move || TakeWhile::new(Arc::clone(&predicate)))
    }

    /// Every value from the first one failing `predicate` on.
    pub fn drop_while<P>(&self, predicate: P) -> AsyncSequence<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let predicate = Arc::new(predicate);
        self.with_kernel(move || DropWhile::new(Arc::clone(&predicate)))
    }

    /// Values at indices `begin..end` (`None` for no end).
    pub fn slice(&self, begin: usize, end: Option<usize>) -> AsyncSequence<T> {
        self.with_kernel(move || Slice::new(begin, end))
    }

    /// The first `n` values.
    pub fn take(&self, n: usize) -> AsyncSequence<T> {
        self.slice(0, Some(n))
    }

    /// Every value but the first `n`.
    pub fn drop(&self, n: usize) -> AsyncSequence<T> {
        self.slice(n, None)
    }

    /// Running left fold: emits every intermediate accumulator.
    pub fn scanl<A, F>(&self, initial: A, fold: F) -> AsyncSequence<A>
    where
        A: Clone + Send + Sync + 'static,
        F: Fn(A, T, usize, &mut CursorHandle) -> A + Send + Sync + 'static,
    {
        let fold = Arc::new(fold);
        self.with_kernel(move || Scan::new(initial.clone(), Arc::clone(&fold)))
    }

    /// This sequence followed by every operand, in order.
    pub fn concat(&self, others: &[AsyncSequence<T>]) -> AsyncSequence<T> {
        let mut operands = Vec::with_capacity(others.len() + 1);
        operands.push(self.clone());
        operands.extend(others.iter().cloned());
        AsyncSequence::from_cursor_fn(move || {
            AsyncConcat::new(operands.iter().map(|operand| {
                let operand = operand.clone();
                Box::new(move || operand.cursor()) as AsyncCursorThunk<T>
            }))
        })
    }

    /// Left fold of the whole sequence.
    ///
    /// Closing the handle ends the traversal early and returns the accumulator
    /// including that step.
    pub async fn reduce<A, F>(&self, initial: A, mut fold: F) -> A
    where
        F: FnMut(A, T, usize, &mut CursorHandle) -> A,
    {
        let mut values = self.stream();
        let mut acc = initial;
        let mut handle = CursorHandle::new();
        let mut index = 0;
        while let Some(value) = values.next().await {
            acc = fold(acc, value, index, &mut handle);
            if handle.is_closed() {
                break;
            }
            index += 1;
        }
        acc
    }

    /// Left fold with a fallible step.
    ///
    /// # Errors
    ///
    /// The first error returned by `fold`, unchanged.
    pub async fn try_reduce<A, E, F>(&self, initial: A, mut fold: F) -> core::result::Result<A, E>
    where
        F: FnMut(A, T, usize, &mut CursorHandle) -> core::result::Result<A, E>,
    {
        let mut values = self.stream();
        let mut acc = initial;
        let mut handle = CursorHandle::new();
        let mut index = 0;
        while let Some(value) = values.next().await {
            acc = fold(acc, value, index, &mut handle)?;
            if handle.is_closed() {
                break;
            }
            index += 1;
        }
        Ok(acc)
    }

    /// Collect every value.
    pub async fn to_vec(&self) -> Vec<T> {
        self.reduce(Vec::new(), |mut values, value, _, _| {
            values.push(value);
            values
        })
        .await
    }

    /// Number of values, by traversing the sequence.
    pub async fn length(&self) -> usize {
        self.reduce(0, |count, _, _, _| count + 1).await
    }

    /// Whether the sequence produces nothing. Pulls at most one value.
    pub async fn is_empty(&self) -> bool {
        self.reduce(true, |_, _, _, handle| {
            handle.close();
            false
        })
        .await
    }

    /// Whether some value satisfies `predicate`. Stops at the first success.
    pub async fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.reduce(false, |any, value, _, handle| {
            if predicate(&value) {
                handle.close();
                return true;
            }
            any
        })
        .await
    }

    /// Whether every value satisfies `predicate`. Stops at the first failure.
    pub async fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.reduce(true, |all, value, _, handle| {
            if predicate(&value) {
                return all;
            }
            handle.close();
            false
        })
        .await
    }

    /// First value.
    ///
    /// # Errors
    ///
    /// [`SequenceError::EmptySequence`] if there is none.
    pub async fn head(&self) -> Result<T> {
        self.reduce(None, |_, value, _, handle| {
            handle.close();
            Some(value)
        })
        .await
        .ok_or_else(|| SequenceError::empty_sequence("head"))
    }

    /// First value, or `default`.
    pub async fn head_or(&self, default: T) -> T {
        self.head().await.unwrap_or(default)
    }

    /// Calls `do_fn(value, index)` for every value; returns the last result.
    pub async fn for_each<R, D>(&self, mut do_fn: D) -> Option<R>
    where
        D: FnMut(T, usize) -> R,
    {
        self.reduce(None, |_, value, index, _| Some(do_fn(value, index)))
            .await
    }
}

impl<T> Clone for AsyncSequence<T> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<T> fmt::Debug for AsyncSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncSequence").finish_non_exhaustive()
    }
}
