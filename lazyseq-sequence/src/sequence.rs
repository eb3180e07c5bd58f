// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The [`Sequence`] type and its two primitives.
//!
//! A sequence is nothing but a shared [`Producer`]: something that can start a
//! fresh [`Cursor`] on demand. Every operator builds a new sequence whose
//! producer starts its cursor from the cursors of its operands, so building a
//! pipeline never pulls a value.
//!
//! Two primitives carry almost the whole operator suite:
//!
//! - [`filtered_map`](Sequence::filtered_map) (and its stateful form
//!   [`filtered_map_with`](Sequence::filtered_map_with)) for every lazy
//!   selection or transformation;
//! - [`reduce`](Sequence::reduce) for every terminal aggregate.
//!
//! Both hand a [`CursorHandle`] to the user callbacks. Closing it stops the
//! traversal after the current value and closes the upstream cursors.

use crate::async_sequence::AsyncSequence;
use alloc::sync::Arc;
use core::fmt;
use lazyseq_core::{
    BoxCursor, Cursor, CursorFactory, CursorHandle, CursorIter, EmptyCursor, Kernel, ReadyCursor,
    Result, SequenceError,
};
use lazyseq_generators::{FilteredMap, KernelCursor, Scan};

/// A source of values that can be traversed any number of times.
///
/// Implementors only provide [`cursor`](Producer::cursor); every operator of
/// [`Sequence`] comes for free. [`size`](Producer::size) is an optional
/// capability for producers that know their length without a traversal.
pub trait Producer<T>: Send + Sync {
    /// Start a new, independent traversal.
    fn cursor(&self) -> BoxCursor<T>;

    /// Exact number of values, when known without traversing.
    fn size(&self) -> Result<usize> {
        Err(SequenceError::unimplemented("known_length", self.variant()))
    }

    /// Short name of the producer kind, used in error messages and `Debug`.
    fn variant(&self) -> &'static str;
}

/// Producer backed by a cursor factory: generator functions and every derived
/// sequence.
pub(crate) struct FactoryProducer<T> {
    pub(crate) factory: CursorFactory<T>,
    pub(crate) variant: &'static str,
}

impl<T> Producer<T> for FactoryProducer<T> {
    fn cursor(&self) -> BoxCursor<T> {
        (self.factory)()
    }

    fn variant(&self) -> &'static str {
        self.variant
    }
}

enum Source<T> {
    Empty,
    Shared(Arc<dyn Producer<T>>),
}

/// Immutable, lazily evaluated, restartable sequence of values.
///
/// Cloning is cheap: clones share the same producer.
///
/// # Examples
///
/// ```
/// use lazyseq_sequence::prelude::*;
///
/// let evens = Sequence::range(0, 10, 1, false).filter(|v| v % 2 == 0);
///
/// assert_eq!(evens.to_vec(), vec![0, 2, 4, 6, 8]);
/// assert_eq!(evens.sum(0), 20);
/// ```
pub struct Sequence<T> {
    source: Source<T>,
}

impl<T> Sequence<T> {
    /// The sequence without values. Every `Sequence::<T>::EMPTY` is the same
    /// stateless value; there is nothing to allocate or initialize.
    pub const EMPTY: Self = Self {
        source: Source::Empty,
    };

    /// Short name of the underlying producer kind.
    pub fn variant(&self) -> &'static str {
        match &self.source {
            Source::Empty => "empty",
            Source::Shared(producer) => producer.variant(),
        }
    }
}

impl<T: Send + 'static> Sequence<T> {
    /// The empty sequence, same as [`Sequence::EMPTY`].
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Sequence over any custom [`Producer`].
    pub fn from_producer(producer: impl Producer<T> + 'static) -> Self {
        Self {
            source: Source::Shared(Arc::new(producer)),
        }
    }

    pub(crate) fn from_factory(
        variant: &'static str,
        factory: impl Fn() -> BoxCursor<T> + Send + Sync + 'static,
    ) -> Self {
        Self::from_producer(FactoryProducer {
            factory: Arc::new(factory),
            variant,
        })
    }

    /// Sequence derived from other sequences through `factory`.
    pub(crate) fn derived(factory: impl Fn() -> BoxCursor<T> + Send + Sync + 'static) -> Self {
        Self::from_factory("derived", factory)
    }

    /// Start a new traversal.
    pub fn cursor(&self) -> BoxCursor<T> {
        match &self.source {
            Source::Empty => EmptyCursor::new().boxed(),
            Source::Shared(producer) => producer.cursor(),
        }
    }

    /// Iterate over a new traversal. Dropping the iterator closes the traversal.
    pub fn iter(&self) -> CursorIter<BoxCursor<T>> {
        self.cursor().into_values()
    }

    /// Length of the sequence when the producer knows it without traversing.
    ///
    /// # Errors
    ///
    /// [`SequenceError::UnimplementedOperation`] for producers that can only
    /// learn their length by traversing, such as generators and derived
    /// sequences. Use [`length`](crate::PropertyExt::length) for those.
    pub fn known_length(&self) -> Result<usize> {
        match &self.source {
            Source::Empty => Ok(0),
            Source::Shared(producer) => producer.size(),
        }
    }

    /// Sequence running a fresh kernel, built by `kernel`, over every traversal
    /// of this one.
    ///
    /// This is the single path through which every lazy operator of both
    /// flavors is applied; see [`AsyncSequence::with_kernel`].
    pub fn with_kernel<K, F>(&self, kernel: F) -> Sequence<K::Output>
    where
        K: Kernel<T> + Send + 'static,
        K::Output: Send + 'static,
        F: Fn() -> K + Send + Sync + 'static,
    {
        let upstream = self.clone();
        Sequence::derived(move || KernelCursor::new(upstream.cursor(), kernel()).boxed())
    }

    /// Check-then-transform with per-traversal state.
    ///
    /// `init` creates the state each time a traversal starts. For every upstream
    /// value, `check_fn` decides whether it is kept; kept values are transformed
    /// by `value_fn`. Both receive the 0-based upstream index and the traversal's
    /// [`CursorHandle`].
    pub fn filtered_map_with<S, R, I, V, C>(&self, init: I, value_fn: V, check_fn: C) -> Sequence<R>
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

    /// Stateless check-then-transform, the selection primitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyseq_sequence::prelude::*;
    ///
    /// let labels = Sequence::from_vec(vec!['a', 'b', 'c', 'd']).filtered_map(
    ///     |v, i, _| format!("{i}:{v}"),
    ///     |v, _, _| *v != 'b',
    /// );
    ///
    /// assert_eq!(labels.to_vec(), vec!["0:a", "2:c", "3:d"]);
    /// ```
    pub fn filtered_map<R, V, C>(&self, value_fn: V, check_fn: C) -> Sequence<R>
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
    pub fn map<R, F>(&self, f: F) -> Sequence<R>
    where
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        self.filtered_map(move |value, _, _| f(value), |_, _, _| true)
    }

    /// Keep the values satisfying `predicate`.
    pub fn filter<P>(&self, predicate: P) -> Sequence<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.filtered_map(|value, _, _| value, move |value, _, _| predicate(value))
    }

    /// Running left fold: emits every intermediate accumulator, never `initial`.
    pub fn scanl<A, F>(&self, initial: A, fold: F) -> Sequence<A>
    where
        A: Clone + Send + Sync + 'static,
        F: Fn(A, T, usize, &mut CursorHandle) -> A + Send + Sync + 'static,
    {
        let fold = Arc::new(fold);
        self.with_kernel(move || Scan::new(initial.clone(), Arc::clone(&fold)))
    }

    /// Left fold of the whole sequence, the aggregation primitive.
    ///
    /// Returns `initial` for an empty sequence. Closing the handle ends the
    /// traversal early and returns the accumulator including that step.
    pub fn reduce<A, F>(&self, initial: A, mut fold: F) -> A
    where
        F: FnMut(A, T, usize, &mut CursorHandle) -> A,
    {
        let mut acc = initial;
        let mut handle = CursorHandle::new();
        for (index, value) in self.iter().enumerate() {
            acc = fold(acc, value, index, &mut handle);
            if handle.is_closed() {
                break;
            }
        }
        acc
    }

    /// Left fold with a fallible step.
    ///
    /// # Errors
    ///
    /// The first error returned by `fold`, unchanged. The traversal is closed
    /// before it is returned.
    pub fn try_reduce<A, E, F>(&self, initial: A, mut fold: F) -> core::result::Result<A, E>
    where
        F: FnMut(A, T, usize, &mut CursorHandle) -> core::result::Result<A, E>,
    {
        let mut acc = initial;
        let mut handle = CursorHandle::new();
        for (index, value) in self.iter().enumerate() {
            acc = fold(acc, value, index, &mut handle)?;
            if handle.is_closed() {
                break;
            }
        }
        Ok(acc)
    }

    /// Asynchronous view of this sequence; every advance resolves immediately.
    pub fn to_async(&self) -> AsyncSequence<T> {
        let upstream = self.clone();
        AsyncSequence::from_cursor_fn(move || ReadyCursor::new(upstream.cursor()))
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        let source = match &self.source {
            Source::Empty => Source::Empty,
            Source::Shared(producer) => Source::Shared(Arc::clone(producer)),
        };
        Self { source }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("variant", &self.variant())
            .finish_non_exhaustive()
    }
}

impl<T: Send + 'static> IntoIterator for &Sequence<T> {
    type Item = T;
    type IntoIter = CursorIter<BoxCursor<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
