// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concrete producers and the constructors that build sequences over them.
//!
//! Container-backed producers (`array`, `map`, `string`) keep their data behind
//! an `Arc`, so every traversal reads the same immutable values and clones only
//! what it hands out. Generator-backed producers re-run their factory for every
//! traversal. The only producer that cannot be replayed is the single-use
//! `iterator` one.

use crate::sequence::{Producer, Sequence};
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use lazyseq_core::logging::warn;
use lazyseq_core::{BoxCursor, Cursor, EmptyCursor, IterCursor, Result, SequenceError};
use lazyseq_generators::{Enumeration, Iterate, Numeric, Repeat};
use parking_lot::Mutex;

/// Values of a shared slice.
pub struct ArrayProducer<T> {
    values: Arc<[T]>,
}

impl<T: Clone + Send + Sync + 'static> Producer<T> for ArrayProducer<T> {
    fn cursor(&self) -> BoxCursor<T> {
        let values = Arc::clone(&self.values);
        IterCursor::new((0..values.len()).map(move |i| values[i].clone())).boxed()
    }

    fn size(&self) -> Result<usize> {
        Ok(self.values.len())
    }

    fn variant(&self) -> &'static str {
        "array"
    }
}

/// Key-value entries of a mapping, as `(key, value)` pairs.
pub struct EntriesProducer<K, V> {
    entries: Arc<[(K, V)]>,
}

impl<K, V> Producer<(K, V)> for EntriesProducer<K, V>
where
    K: Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn cursor(&self) -> BoxCursor<(K, V)> {
        let entries = Arc::clone(&self.entries);
        IterCursor::new((0..entries.len()).map(move |i| entries[i].clone())).boxed()
    }

    fn size(&self) -> Result<usize> {
        Ok(self.entries.len())
    }

    fn variant(&self) -> &'static str {
        "map"
    }
}

/// Characters of a shared string.
pub struct StringProducer {
    text: Arc<str>,
}

struct CharsOf {
    text: Arc<str>,
    offset: usize,
}

impl Iterator for CharsOf {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.text.get(self.offset..)?.chars().next()?;
        self.offset += c.len_utf8();
        Some(c)
    }
}

impl Producer<char> for StringProducer {
    fn cursor(&self) -> BoxCursor<char> {
        IterCursor::new(CharsOf {
            text: Arc::clone(&self.text),
            offset: 0,
        })
        .boxed()
    }

    fn size(&self) -> Result<usize> {
        Ok(self.text.chars().count())
    }

    fn variant(&self) -> &'static str {
        "string"
    }
}

/// Wraps an iterator that can be traversed only once.
///
/// The first cursor takes the iterator; later cursors produce nothing and log a
/// warning.
pub struct OnceProducer<I> {
    iter: Mutex<Option<I>>,
}

impl<I> Producer<I::Item> for OnceProducer<I>
where
    I: Iterator + Send + 'static,
    I::Item: Send + 'static,
{
    fn cursor(&self) -> BoxCursor<I::Item> {
        match self.iter.lock().take() {
            Some(iter) => IterCursor::new(iter).boxed(),
            None => {
                warn!("single-use sequence traversed again, producing nothing");
                EmptyCursor::new().boxed()
            }
        }
    }

    fn variant(&self) -> &'static str {
        "iterator"
    }
}

/// A value repeated a number of times, or forever.
pub struct RepeatProducer<T> {
    value: T,
    times: Option<usize>,
}

impl<T: Clone + Send + Sync + 'static> Producer<T> for RepeatProducer<T> {
    fn cursor(&self) -> BoxCursor<T> {
        Repeat::new(self.value.clone(), self.times).boxed()
    }

    fn size(&self) -> Result<usize> {
        self.times
            .ok_or(SequenceError::unimplemented("known_length", self.variant()))
    }

    fn variant(&self) -> &'static str {
        "repeat"
    }
}

/// `seed, f(seed), f(f(seed)), ...`
pub struct IterateProducer<T, F> {
    seed: T,
    step: Arc<F>,
    times: Option<usize>,
}

impl<T, F> Producer<T> for IterateProducer<T, F>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(&T) -> T + Send + Sync + 'static,
{
    fn cursor(&self) -> BoxCursor<T> {
        Iterate::new(self.seed.clone(), Arc::clone(&self.step), self.times).boxed()
    }

    fn size(&self) -> Result<usize> {
        self.times
            .ok_or(SequenceError::unimplemented("known_length", self.variant()))
    }

    fn variant(&self) -> &'static str {
        "iterate"
    }
}

/// Arithmetic progression.
pub struct EnumerationProducer<N> {
    from: N,
    to: Option<N>,
    step: N,
    inclusive: bool,
}

impl<N: Numeric> Producer<N> for EnumerationProducer<N> {
    fn cursor(&self) -> BoxCursor<N> {
        Enumeration::new(self.from, self.to, self.step, self.inclusive).boxed()
    }

    fn variant(&self) -> &'static str {
        "enumeration"
    }
}

impl<T: Clone + Send + Sync + 'static> Sequence<T> {
    /// Sequence over the values of a vector.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self::from_producer(ArrayProducer {
            values: values.into(),
        })
    }

    /// Sequence over clones of the values of a slice.
    pub fn from_slice(values: &[T]) -> Self {
        Self::from_producer(ArrayProducer {
            values: values.into(),
        })
    }

    /// Sequence over an explicit list of values, collected once.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        Self::from_vec(values.into_iter().collect())
    }

    /// `value`, `times` times (`None` for no end).
    pub fn repeat(value: T, times: Option<usize>) -> Self {
        Self::from_producer(RepeatProducer { value, times })
    }

    /// `seed`, `step(seed)`, `step(step(seed))`, ... limited to `times` values
    /// (`None` for no end). `step` is only called when a value is pulled.
    pub fn iterate<F>(step: F, seed: T, times: Option<usize>) -> Self
    where
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        Self::from_producer(IterateProducer {
            seed,
            step: Arc::new(step),
            times,
        })
    }
}

impl<K, V> Sequence<(K, V)>
where
    K: Ord + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Sequence over the entries of a mapping, optionally sorted by key.
    ///
    /// Entries are collected once. Without `sort_keys` they keep the mapping's
    /// own iteration order.
    pub fn from_map(entries: impl IntoIterator<Item = (K, V)>, sort_keys: bool) -> Self {
        let mut entries: Vec<(K, V)> = entries.into_iter().collect();
        if sort_keys {
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        }
        Self::from_producer(EntriesProducer {
            entries: entries.into(),
        })
    }
}

impl Sequence<char> {
    /// Sequence over the characters of `text`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        Self::from_producer(StringProducer { text: text.into() })
    }

    /// Sequence over the characters of an owned string.
    pub fn from_string(text: String) -> Self {
        Self::from_producer(StringProducer { text: text.into() })
    }
}

impl<T: Send + 'static> Sequence<T> {
    /// Restartable sequence over whatever `factory` returns, called once per
    /// traversal.
    pub fn from_fn<I, F>(factory: F) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
        F: Fn() -> I + Send + Sync + 'static,
    {
        Self::from_factory("generator", move || {
            IterCursor::new(factory().into_iter()).boxed()
        })
    }

    /// Restartable sequence over the cursors returned by `factory`.
    pub fn from_cursor_fn<C, F>(factory: F) -> Self
    where
        C: Cursor<Item = T> + Send + 'static,
        F: Fn() -> C + Send + Sync + 'static,
    {
        Self::from_factory("generator", move || factory().boxed())
    }

    /// Single-use sequence over `iter`.
    ///
    /// The first traversal consumes the iterator. Every later traversal produces
    /// nothing and logs a warning.
    pub fn from_iter_once<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        Self::from_producer(OnceProducer {
            iter: Mutex::new(Some(iter.into_iter())),
        })
    }
}

impl<N: Numeric> Sequence<N> {
    /// `from, from + step, ...` up to `to`, which is produced only when
    /// `inclusive`. A negative step counts down.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    pub fn range(from: N, to: N, step: N, inclusive: bool) -> Self {
        assert!(step != N::ZERO, "range step must not be zero");
        Self::from_producer(EnumerationProducer {
            from,
            to: Some(to),
            step,
            inclusive,
        })
    }

    /// `from, then, ...` up to and including `to`; the step is `then - from`.
    ///
    /// Unsigned types cannot express a negative step, so for them `then` must be
    /// greater than `from`.
    ///
    /// # Panics
    ///
    /// Panics if `then == from`, or if `then - from` is not representable in `N`.
    pub fn enum_from_then_to(from: N, then: N, to: N) -> Self {
        Self::range(from, to, Self::derived_step(from, then), true)
    }

    /// `from, then, ...` without end; the step is `then - from`.
    ///
    /// Unsigned types cannot express a negative step, so for them `then` must be
    /// greater than `from`.
    ///
    /// # Panics
    ///
    /// Panics if `then == from`, or if `then - from` is not representable in `N`.
    pub fn enum_from_then(from: N, then: N) -> Self {
        let step = Self::derived_step(from, then);
        assert!(step != N::ZERO, "range step must not be zero");
        Self::from_producer(EnumerationProducer {
            from,
            to: None,
            step,
            inclusive: true,
        })
    }

    fn derived_step(from: N, then: N) -> N {
        let step = then.difference(from);
        assert!(
            (then > from) == (step > N::ZERO),
            "range step from {from:?} to {then:?} is not representable"
        );
        step
    }

    /// `from, from + 1, ...` up to and including `to`.
    pub fn enum_from_to(from: N, to: N) -> Self {
        Self::range(from, to, N::ONE, true)
    }

    /// `from, from + 1, ...` without end.
    pub fn enum_from(from: N) -> Self {
        Self::from_producer(EnumerationProducer {
            from,
            to: None,
            step: N::ONE,
            inclusive: true,
        })
    }
}

impl<T: Clone + Send + Sync + 'static> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: Clone + Send + Sync + 'static> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}
