// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators that rearrange, repeat or expand a single sequence.
//!
//! `reverse`, `sorted`, `sorted_by`, `permutations` and `combinations` need the
//! whole upstream in memory. They still pull nothing until their own first
//! advance.

use crate::conversions::ConversionExt;
use crate::sequence::Sequence;
use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp::Ordering;
use lazyseq_core::logging::debug;
use lazyseq_core::{Cursor, CursorFactory, CursorThunk, IterCursor};
use lazyseq_generators::{Combinations, Concat, Cycle, Flatten, Permutations, SharedBuffer};

/// Extension trait providing the unary operators of [`Sequence`].
pub trait UnaryExt<T: Send + 'static> {
    /// Values in reverse order.
    fn reverse(&self) -> Sequence<T>;

    /// Values in ascending order. The sort is stable.
    fn sorted(&self) -> Sequence<T>
    where
        T: Ord;

    /// Values ordered by `compare`. The sort is stable.
    fn sorted_by<C>(&self, compare: C) -> Sequence<T>
    where
        C: Fn(&T, &T) -> Ordering + Send + Sync + 'static;

    /// The values again and again, `times` times (`None` for no end).
    ///
    /// Every repetition is a new traversal of this sequence. A repetition that
    /// produces nothing ends the cycle.
    fn cycle(&self, times: Option<usize>) -> Sequence<T>;

    /// `value` followed by the values of this sequence.
    fn cons(&self, value: T) -> Sequence<T>
    where
        T: Clone + Sync;

    /// Memoized view: upstream is traversed at most once and every traversal
    /// replays the values pulled so far, pulling more only when needed.
    fn buffered(&self) -> Sequence<T>
    where
        T: Clone;

    /// Every arrangement of `k` values at distinct positions.
    fn permutations(&self, k: usize) -> Sequence<Vec<T>>
    where
        T: Clone;

    /// Every selection of `k` values, in order of positions.
    fn combinations(&self, k: usize) -> Sequence<Vec<T>>
    where
        T: Clone;

    /// The values of the sequences returned by `f`, one after the other.
    fn flat_map<U, F>(&self, f: F) -> Sequence<U>
    where
        U: Send + 'static,
        F: Fn(T) -> Sequence<U> + Send + Sync + 'static;
}

impl<T: Send + 'static> UnaryExt<T> for Sequence<T> {
    fn reverse(&self) -> Sequence<T> {
        materialized(self, "reverse", |values| values.reverse())
    }

    fn sorted(&self) -> Sequence<T>
    where
        T: Ord,
    {
        materialized(self, "sorted", |values| values.sort())
    }

    fn sorted_by<C>(&self, compare: C) -> Sequence<T>
    where
        C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        materialized(self, "sorted_by", move |values| values.sort_by(|a, b| compare(a, b)))
    }

    fn cycle(&self, times: Option<usize>) -> Sequence<T> {
        let upstream = self.clone();
        let factory: CursorFactory<T> = Arc::new(move || upstream.cursor());
        Sequence::derived(move || Cycle::new(Arc::clone(&factory), times).boxed())
    }

    fn cons(&self, value: T) -> Sequence<T>
    where
        T: Clone + Sync,
    {
        let upstream = self.clone();
        Sequence::derived(move || {
            let head = value.clone();
            let upstream = upstream.clone();
            let operands: [CursorThunk<T>; 2] = [
                Box::new(move || IterCursor::new(core::iter::once(head)).boxed()),
                Box::new(move || upstream.cursor()),
            ];
            Concat::new(operands).boxed()
        })
    }

    fn buffered(&self) -> Sequence<T>
    where
        T: Clone,
    {
        let upstream = self.clone();
        let buffer = SharedBuffer::new(Box::new(move || upstream.cursor()));
        Sequence::from_factory("buffered", move || buffer.cursor().boxed())
    }

    fn permutations(&self, k: usize) -> Sequence<Vec<T>>
    where
        T: Clone,
    {
        let upstream = self.clone();
        Sequence::derived(move || Permutations::new(upstream.cursor(), k).boxed())
    }

    fn combinations(&self, k: usize) -> Sequence<Vec<T>>
    where
        T: Clone,
    {
        let upstream = self.clone();
        Sequence::derived(move || Combinations::new(upstream.cursor(), k).boxed())
    }

    fn flat_map<U, F>(&self, f: F) -> Sequence<U>
    where
        U: Send + 'static,
        F: Fn(T) -> Sequence<U> + Send + Sync + 'static,
    {
        let upstream = self.clone();
        let f = Arc::new(f);
        Sequence::derived(move || {
            let f = Arc::clone(&f);
            Flatten::new(upstream.cursor(), move |value| f(value).cursor()).boxed()
        })
    }
}

impl<U: Send + 'static> Sequence<Sequence<U>> {
    /// The values of every inner sequence, one after the other.
    pub fn flat(&self) -> Sequence<U> {
        self.flat_map(|inner| inner)
    }
}

/// Sequence whose traversals collect upstream on their first advance and
/// produce the values as rearranged by `arrange`.
fn materialized<T, F>(upstream: &Sequence<T>, operation: &'static str, arrange: F) -> Sequence<T>
where
    T: Send + 'static,
    F: Fn(&mut Vec<T>) + Send + Sync + 'static,
{
    let upstream = upstream.clone();
    let arrange = Arc::new(arrange);
    Sequence::derived(move || {
        let upstream = upstream.clone();
        let arrange = Arc::clone(&arrange);
        let start: CursorThunk<T> = Box::new(move || {
            let mut values = upstream.to_vec();
            debug!("{operation} materialized {} value(s)", values.len());
            arrange(&mut values);
            IterCursor::new(values.into_iter()).boxed()
        });
        Concat::new([start]).boxed()
    })
}
