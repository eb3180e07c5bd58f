// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators combining a sequence with other sequences.

use crate::conversions::ConversionExt;
use crate::sequence::Sequence;
use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::hash::Hash;
use lazyseq_core::logging::debug;
use lazyseq_core::{Cursor, CursorThunk};
use lazyseq_generators::{Concat, Product, ZipPair, ZipWith};
use std::collections::HashSet;

/// Extension trait providing the variadic operators of [`Sequence`].
pub trait VariadicExt<T: Send + 'static> {
    /// This sequence followed by every operand, in order. Operand cursors are
    /// started only when the previous one is exhausted.
    fn concat(&self, others: &[Sequence<T>]) -> Sequence<T>;

    /// Vectors of the values at the same position in this sequence and every
    /// operand. Ends with the shortest.
    fn zip(&self, others: &[Sequence<T>]) -> Sequence<Vec<T>>;

    /// Like [`zip`](Self::zip), combining each vector with `zip_fn(values, index)`.
    fn zip_with<R, F>(&self, others: &[Sequence<T>], zip_fn: F) -> Sequence<R>
    where
        R: Send + 'static,
        F: Fn(Vec<T>, usize) -> R + Send + Sync + 'static;

    /// Pairs of the values at the same position in this sequence and `other`.
    fn zip_pair<U: Send + 'static>(&self, other: &Sequence<U>) -> Sequence<(T, U)>;

    /// Cartesian product with every operand. The last operand varies fastest.
    ///
    /// The operands are buffered on the first advance; this sequence is streamed.
    fn product(&self, others: &[Sequence<T>]) -> Sequence<Vec<T>>
    where
        T: Clone;

    /// Values of this sequence present in no operand.
    fn difference(&self, others: &[Sequence<T>]) -> Sequence<T>
    where
        T: Eq + Hash;

    /// Like [`difference`](Self::difference), comparing with `equality`.
    fn difference_by<E>(&self, others: &[Sequence<T>], equality: E) -> Sequence<T>
    where
        E: Fn(&T, &T) -> bool + Send + Sync + 'static;

    /// Values of this sequence present in every operand.
    fn intersection(&self, others: &[Sequence<T>]) -> Sequence<T>
    where
        T: Eq + Hash;

    /// Like [`intersection`](Self::intersection), comparing with `equality`.
    fn intersection_by<E>(&self, others: &[Sequence<T>], equality: E) -> Sequence<T>
    where
        E: Fn(&T, &T) -> bool + Send + Sync + 'static;
}

impl<T: Send + 'static> VariadicExt<T> for Sequence<T> {
    fn concat(&self, others: &[Sequence<T>]) -> Sequence<T> {
        let operands = operands(self, others);
        Sequence::derived(move || Concat::new(thunks(&operands)).boxed())
    }

    fn zip(&self, others: &[Sequence<T>]) -> Sequence<Vec<T>> {
        self.zip_with(others, |values, _| values)
    }

    fn zip_with<R, F>(&self, others: &[Sequence<T>], zip_fn: F) -> Sequence<R>
    where
        R: Send + 'static,
        F: Fn(Vec<T>, usize) -> R + Send + Sync + 'static,
    {
        let operands = operands(self, others);
        let zip_fn = Arc::new(zip_fn);
        Sequence::derived(move || {
            let cursors = operands.iter().map(Sequence::cursor).collect();
            ZipWith::new(cursors, Arc::clone(&zip_fn)).boxed()
        })
    }

    fn zip_pair<U: Send + 'static>(&self, other: &Sequence<U>) -> Sequence<(T, U)> {
        let left = self.clone();
        let right = other.clone();
        Sequence::derived(move || ZipPair::new(left.cursor(), right.cursor()).boxed())
    }

    fn product(&self, others: &[Sequence<T>]) -> Sequence<Vec<T>>
    where
        T: Clone,
    {
        let outer = self.clone();
        let inner = others.to_vec();
        Sequence::derived(move || Product::new(outer.cursor(), thunks(&inner)).boxed())
    }

    fn difference(&self, others: &[Sequence<T>]) -> Sequence<T>
    where
        T: Eq + Hash,
    {
        let others = others.to_vec();
        self.filtered_map_with(
            || None,
            |_, value, _, _| value,
            move |excluded: &mut Option<HashSet<T>>, value, _, _| {
                let excluded = excluded.get_or_insert_with(|| {
                    let union = others.iter().flat_map(|other| other.iter()).collect::<HashSet<_>>();
                    debug!("difference materialized {} distinct value(s)", union.len());
                    union
                });
                !excluded.contains(value)
            },
        )
    }

    fn difference_by<E>(&self, others: &[Sequence<T>], equality: E) -> Sequence<T>
    where
        E: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        let others = others.to_vec();
        self.filtered_map_with(
            || None,
            |_, value, _, _| value,
            move |operands: &mut Option<Vec<Vec<T>>>, value, _, _| {
                let operands = operands.get_or_insert_with(|| materialize(&others, "difference_by"));
                !operands
                    .iter()
                    .any(|operand| operand.iter().any(|other| equality(value, other)))
            },
        )
    }

    fn intersection(&self, others: &[Sequence<T>]) -> Sequence<T>
    where
        T: Eq + Hash,
    {
        let others = others.to_vec();
        self.filtered_map_with(
            || None,
            |_, value, _, _| value,
            move |sets: &mut Option<Vec<HashSet<T>>>, value, _, _| {
                let sets = sets.get_or_insert_with(|| {
                    let sets: Vec<HashSet<T>> = others.iter().map(ConversionExt::to_set).collect();
                    debug!(
                        "intersection materialized {} operand(s), {} distinct value(s) in total",
                        sets.len(),
                        sets.iter().map(HashSet::len).sum::<usize>()
                    );
                    sets
                });
                sets.iter().all(|set| set.contains(value))
            },
        )
    }

    fn intersection_by<E>(&self, others: &[Sequence<T>], equality: E) -> Sequence<T>
    where
        E: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        let others = others.to_vec();
        self.filtered_map_with(
            || None,
            |_, value, _, _| value,
            move |operands: &mut Option<Vec<Vec<T>>>, value, _, _| {
                let operands =
                    operands.get_or_insert_with(|| materialize(&others, "intersection_by"));
                operands
                    .iter()
                    .all(|operand| operand.iter().any(|other| equality(value, other)))
            },
        )
    }
}

fn operands<T>(first: &Sequence<T>, others: &[Sequence<T>]) -> Vec<Sequence<T>> {
    let mut operands = Vec::with_capacity(others.len() + 1);
    operands.push(first.clone());
    operands.extend(others.iter().cloned());
    operands
}

fn thunks<T: Send + 'static>(sequences: &[Sequence<T>]) -> Vec<CursorThunk<T>> {
    sequences
        .iter()
        .map(|sequence| {
            let sequence = sequence.clone();
            Box::new(move || sequence.cursor()) as CursorThunk<T>
        })
        .collect()
}

fn materialize<T: Send + 'static>(sequences: &[Sequence<T>], operation: &'static str) -> Vec<Vec<T>> {
    let values: Vec<Vec<T>> = sequences.iter().map(ConversionExt::to_vec).collect();
    debug!(
        "{operation} materialized {} operand(s), {} value(s) in total",
        values.len(),
        values.iter().map(Vec::len).sum::<usize>()
    );
    values
}
