// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Selection operators: which values of a sequence are kept.
//!
//! The lazy selections run kernels shared with
//! [`AsyncSequence`](crate::AsyncSequence) or are built on
//! [`filtered_map`](Sequence::filtered_map); the ones that pick single values
//! (`head`, `get`, `last_value`, `greater`, `sample`, ...) are folds over
//! [`reduce`](Sequence::reduce) and stop pulling as soon as they know the
//! answer.

use crate::sequence::Sequence;
use crate::variadic::VariadicExt;
use alloc::format;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::hash::Hash;
use lazyseq_core::{Result, ResultExt, SequenceError};
use lazyseq_generators::{DropWhile, Slice, TakeWhile};
use std::collections::HashSet;

/// Extension trait providing the selection operators of [`Sequence`].
pub trait SelectionExt<T: Send + 'static> {
    /// The first `n` values. Upstream is closed right after the `n`-th value.
    ///
    /// `take(0)` completes on its first pull.
    fn take(&self, n: usize) -> Sequence<T>;

    /// Values up to, not including, the first one failing `predicate`.
    fn take_while<P>(&self, predicate: P) -> Sequence<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static;

    /// Every value but the first `n`.
    fn drop(&self, n: usize) -> Sequence<T>;

    /// Every value from the first one failing `predicate` on.
    fn drop_while<P>(&self, predicate: P) -> Sequence<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static;

    /// Values at indices `begin..end` (`None` for no end).
    fn slice(&self, begin: usize, end: Option<usize>) -> Sequence<T>;

    /// Every value but the first.
    fn tail(&self) -> Sequence<T>;

    /// Values whose flag at the same position is `true`. Stops with the shorter
    /// of the two sequences.
    fn compress(&self, flags: &Sequence<bool>) -> Sequence<T>;

    /// First occurrence of every value.
    ///
    /// Membership is checked in a hash set, O(1) amortized per value.
    fn nub(&self) -> Sequence<T>
    where
        T: Eq + Hash + Clone;

    /// First occurrence of every value, as decided by `equality`.
    ///
    /// Each value is compared with every value kept so far: O(n) per value,
    /// O(n²) for the whole traversal.
    fn nub_by<E>(&self, equality: E) -> Sequence<T>
    where
        T: Clone,
        E: Fn(&T, &T) -> bool + Send + Sync + 'static;

    /// First value.
    ///
    /// # Errors
    ///
    /// [`SequenceError::EmptySequence`] if there is none.
    fn head(&self) -> Result<T>;

    /// First value, or `default`.
    fn head_or(&self, default: T) -> T;

    /// Value at `index`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::EmptySequence`] if the sequence is shorter.
    fn get(&self, index: usize) -> Result<T>;

    /// Value at `index`, or `default`.
    fn get_or(&self, index: usize, default: T) -> T;

    /// Last value.
    ///
    /// # Errors
    ///
    /// [`SequenceError::EmptySequence`] if there is none.
    fn last_value(&self) -> Result<T>;

    /// Last value, or `default`.
    fn last_value_or(&self, default: T) -> T;

    /// All the values tied for the greatest, in order of appearance.
    fn greater(&self) -> Vec<T>
    where
        T: PartialOrd;

    /// All the values tied for the greatest `evaluation`, in order of appearance.
    fn greater_by<K, F>(&self, evaluation: F) -> Vec<T>
    where
        K: PartialOrd,
        F: Fn(&T) -> K;

    /// All the values tied for the least, in order of appearance.
    fn lesser(&self) -> Vec<T>
    where
        T: PartialOrd;

    /// All the values tied for the least `evaluation`, in order of appearance.
    fn lesser_by<K, F>(&self, evaluation: F) -> Vec<T>
    where
        K: PartialOrd,
        F: Fn(&T) -> K;

    /// Up to `n` values chosen at random by reservoir sampling.
    fn sample(&self, n: usize) -> Vec<T>;

    /// Like [`sample`](Self::sample) with a seeded generator, for reproducible
    /// selections.
    fn sample_seeded(&self, n: usize, seed: u64) -> Vec<T>;

    /// Reservoir sampling driven by `rng`, which must return values in `[0, 1)`.
    ///
    /// The first `n` values fill the reservoir. For every later value at index
    /// `i`, `r = floor(rng() * i)` is drawn and slot `r` is replaced when
    /// `r < n`. `n` is at least 1.
    fn sample_with<R>(&self, n: usize, rng: R) -> Vec<T>
    where
        R: FnMut() -> f64;
}

impl<T: Send + 'static> SelectionExt<T> for Sequence<T> {
    fn take(&self, n: usize) -> Sequence<T> {
        self.slice(0, Some(n))
    }

    fn take_while<P>(&self, predicate: P) -> Sequence<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let predicate = Arc::new(predicate);
        self.with_kernel(move || TakeWhile::new(Arc::clone(&predicate)))
    }

    fn drop(&self, n: usize) -> Sequence<T> {
        self.slice(n, None)
    }

    fn drop_while<P>(&self, predicate: P) -> Sequence<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let predicate = Arc::new(predicate);
        self.with_kernel(move || DropWhile::new(Arc::clone(&predicate)))
    }

    fn slice(&self, begin: usize, end: Option<usize>) -> Sequence<T> {
        self.with_kernel(move || Slice::new(begin, end))
    }

    fn tail(&self) -> Sequence<T> {
        self.drop(1)
    }

    fn compress(&self, flags: &Sequence<bool>) -> Sequence<T> {
        self.zip_pair(flags)
            .filtered_map(|(value, _), _, _| value, |(_, flag), _, _| *flag)
    }

    fn nub(&self) -> Sequence<T>
    where
        T: Eq + Hash + Clone,
    {
        self.filtered_map_with(
            HashSet::new,
            |_, value, _, _| value,
            |seen, value, _, _| seen.insert(value.clone()),
        )
    }

    fn nub_by<E>(&self, equality: E) -> Sequence<T>
    where
        T: Clone,
        E: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.filtered_map_with(
            Vec::new,
            |_, value, _, _| value,
            move |kept: &mut Vec<T>, value, _, _| {
                if kept.iter().any(|other| equality(value, other)) {
                    return false;
                }
                kept.push(value.clone());
                true
            },
        )
    }

    fn head(&self) -> Result<T> {
        self.reduce(None, |_, value, _, handle| {
            handle.close();
            Some(value)
        })
        .ok_or_else(|| SequenceError::empty_sequence("head"))
    }

    fn head_or(&self, default: T) -> T {
        self.head().unwrap_or(default)
    }

    fn get(&self, index: usize) -> Result<T> {
        self.slice(index, Some(index.saturating_add(1)))
            .head()
            .context(format!("get({index})"))
    }

    fn get_or(&self, index: usize, default: T) -> T {
        self.get(index).unwrap_or(default)
    }

    fn last_value(&self) -> Result<T> {
        self.reduce(None, |_, value, _, _| Some(value))
            .ok_or_else(|| SequenceError::empty_sequence("last_value"))
    }

    fn last_value_or(&self, default: T) -> T {
        self.last_value().unwrap_or(default)
    }

    fn greater(&self) -> Vec<T>
    where
        T: PartialOrd,
    {
        extremes(self, Ordering::Greater, |a, b| a.partial_cmp(b))
    }

    fn greater_by<K, F>(&self, evaluation: F) -> Vec<T>
    where
        K: PartialOrd,
        F: Fn(&T) -> K,
    {
        extremes_by(self, Ordering::Greater, evaluation)
    }

    fn lesser(&self) -> Vec<T>
    where
        T: PartialOrd,
    {
        extremes(self, Ordering::Less, |a, b| a.partial_cmp(b))
    }

    fn lesser_by<K, F>(&self, evaluation: F) -> Vec<T>
    where
        K: PartialOrd,
        F: Fn(&T) -> K,
    {
        extremes_by(self, Ordering::Less, evaluation)
    }

    fn sample(&self, n: usize) -> Vec<T> {
        let mut rng = fastrand::Rng::new();
        self.sample_with(n, move || rng.f64())
    }

    fn sample_seeded(&self, n: usize, seed: u64) -> Vec<T> {
        let mut rng = fastrand::Rng::with_seed(seed);
        self.sample_with(n, move || rng.f64())
    }

    fn sample_with<R>(&self, n: usize, mut rng: R) -> Vec<T>
    where
        R: FnMut() -> f64,
    {
        let n = n.max(1);
        self.reduce(Vec::<T>::new(), |mut reservoir, value, index, _| {
            if index < n {
                reservoir.push(value);
            } else {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
                let slot = (rng() * index as f64).floor() as usize;
                if slot < n {
                    reservoir[slot] = value;
                }
            }
            reservoir
        })
    }
}

/// Single-pass selection of every value tied for the extreme `wanted` by
/// `compare`. A strictly better value discards the ties kept so far. A value
/// that does not compare with itself, like NaN, is skipped.
fn extremes<T, C>(sequence: &Sequence<T>, wanted: Ordering, compare: C) -> Vec<T>
where
    T: Send + 'static,
    C: Fn(&T, &T) -> Option<Ordering>,
{
    sequence.reduce(Vec::new(), |mut kept, value, _, _| {
        if compare(&value, &value).is_none() {
            return kept;
        }
        match kept.first().map_or(Some(wanted), |best| compare(&value, best)) {
            Some(Ordering::Equal) => kept.push(value),
            Some(ordering) if ordering == wanted => kept = vec![value],
            _ => {}
        }
        kept
    })
}

/// Like [`extremes`], comparing evaluations. Each value is evaluated once and
/// the evaluation of the current best is kept alongside the ties.
fn extremes_by<T, K, F>(sequence: &Sequence<T>, wanted: Ordering, evaluation: F) -> Vec<T>
where
    T: Send + 'static,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let initial: (Option<K>, Vec<T>) = (None, Vec::new());
    let (_, kept) = sequence.reduce(initial, |(best, mut kept), value, _, _| {
        let key = evaluation(&value);
        if key.partial_cmp(&key).is_none() {
            return (best, kept);
        }
        match best.as_ref().map_or(Some(wanted), |best| key.partial_cmp(best)) {
            Some(Ordering::Equal) => {
                kept.push(value);
                (best, kept)
            }
            Some(ordering) if ordering == wanted => (Some(key), vec![value]),
            _ => (best, kept),
        }
    });
    kept
}
