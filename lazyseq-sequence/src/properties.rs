// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Queries about the contents of a sequence.

use crate::selections::SelectionExt;
use crate::sequence::Sequence;

/// Extension trait providing the property queries of [`Sequence`].
pub trait PropertyExt<T: Send + 'static> {
    /// Whether `value` occurs. Stops at the first occurrence.
    fn has(&self, value: &T) -> bool
    where
        T: PartialEq;

    /// Whether a value equal to `value` according to `equality` occurs.
    fn has_by<E>(&self, value: &T, equality: E) -> bool
    where
        E: FnMut(&T, &T) -> bool;

    /// Positions at or after `from` where `value` occurs.
    fn indices_of(&self, value: T, from: usize) -> Sequence<usize>
    where
        T: PartialEq + Sync;

    /// First position at or after `from` where `value` occurs.
    fn index_of(&self, value: T, from: usize) -> Option<usize>
    where
        T: PartialEq + Sync;

    /// Positions at or after `from` of the values satisfying `condition`.
    fn indices_where<P>(&self, condition: P, from: usize) -> Sequence<usize>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static;

    /// First position at or after `from` of a value satisfying `condition`.
    fn index_where<P>(&self, condition: P, from: usize) -> Option<usize>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static;

    /// Whether the sequence produces nothing. Pulls at most one value.
    fn is_empty(&self) -> bool;

    /// Number of values, by traversing the sequence.
    fn length(&self) -> usize;
}

impl<T: Send + 'static> PropertyExt<T> for Sequence<T> {
    fn has(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.has_by(value, |a, b| a == b)
    }

    fn has_by<E>(&self, value: &T, mut equality: E) -> bool
    where
        E: FnMut(&T, &T) -> bool,
    {
        self.reduce(false, |found, candidate, _, handle| {
            if equality(&candidate, value) {
                handle.close();
                return true;
            }
            found
        })
    }

    fn indices_of(&self, value: T, from: usize) -> Sequence<usize>
    where
        T: PartialEq + Sync,
    {
        self.indices_where(move |candidate| *candidate == value, from)
    }

    fn index_of(&self, value: T, from: usize) -> Option<usize>
    where
        T: PartialEq + Sync,
    {
        self.indices_of(value, from).head().ok()
    }

    fn indices_where<P>(&self, condition: P, from: usize) -> Sequence<usize>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.filtered_map(
            |_, index, _| index,
            move |value, index, _| index >= from && condition(value),
        )
    }

    fn index_where<P>(&self, condition: P, from: usize) -> Option<usize>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.indices_where(condition, from).head().ok()
    }

    fn is_empty(&self) -> bool {
        self.reduce(true, |_, _, _, handle| {
            handle.close();
            false
        })
    }

    fn length(&self) -> usize {
        self.reduce(0, |count, _, _, _| count + 1)
    }
}
