// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Aggregating operators, all of them folds over [`Sequence::reduce`].

use crate::sequence::Sequence;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Display;
use core::hash::Hash;
use core::ops::{Add, Mul};
use std::collections::HashMap;

/// Extension trait providing the aggregating operators of [`Sequence`].
pub trait ReductionExt<T: Send + 'static> {
    /// Whether every value satisfies `predicate`. Stops at the first failure.
    fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// Whether some value satisfies `predicate`. Stops at the first success.
    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// Like [`all`](Self::all), but `predicate` sees every value.
    fn all_strict<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// Like [`any`](Self::any), but `predicate` sees every value.
    fn any_strict<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// Number of occurrences of every value.
    fn histogram(&self) -> HashMap<T, usize>
    where
        T: Eq + Hash;

    /// Number of values for every key.
    fn histogram_by<K, F>(&self, key: F) -> HashMap<K, usize>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K;

    /// Values grouped by key, each group in order of appearance.
    fn group_by<K, F>(&self, key: F) -> HashMap<K, Vec<T>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K;

    /// General grouping: `grouping(previous_group, value, index)` builds the new
    /// group of the value's key, `previous_group` being `None` for a new key.
    fn group_by_with<K, G, F, A>(&self, key: F, grouping: A) -> HashMap<K, G>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
        A: FnMut(Option<G>, T, usize) -> G;

    /// `prefix` followed by the values separated by `separator`.
    fn join(&self, separator: &str, prefix: &str) -> String
    where
        T: Display;

    /// `initial` plus every value.
    fn sum<A>(&self, initial: A) -> A
    where
        A: Add<T, Output = A>;

    /// `initial` times every value.
    fn multiplication<A>(&self, initial: A) -> A
    where
        A: Mul<T, Output = A>;

    /// Greatest value, or `floor` if no value is greater.
    fn max(&self, floor: T) -> T
    where
        T: PartialOrd;

    /// Least value, or `ceiling` if no value is less.
    fn min(&self, ceiling: T) -> T
    where
        T: PartialOrd;

    /// Greatest value according to `compare`, starting from `default`. The first
    /// of equal values wins.
    fn max_by<C>(&self, compare: C, default: T) -> T
    where
        C: FnMut(&T, &T) -> Ordering;

    /// Least value according to `compare`, starting from `default`. The first of
    /// equal values wins.
    fn min_by<C>(&self, compare: C, default: T) -> T
    where
        C: FnMut(&T, &T) -> Ordering;

    /// Calls `do_fn(value, index)` for every value; returns the last result.
    fn for_each<R, D>(&self, do_fn: D) -> Option<R>
    where
        D: FnMut(T, usize) -> R;

    /// Calls `do_fn(value, index)` for every value satisfying
    /// `if_fn(&value, index)`; returns the last result, `None` if never called.
    fn for_each_if<R, D, I>(&self, do_fn: D, if_fn: I) -> Option<R>
    where
        D: FnMut(T, usize) -> R,
        I: FnMut(&T, usize) -> bool;
}

impl<T: Send + 'static> ReductionExt<T> for Sequence<T> {
    fn all<P>(&self, mut predicate: P) -> bool
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
    }

    fn any<P>(&self, mut predicate: P) -> bool
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
    }

    fn all_strict<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.reduce(true, |all, value, _, _| predicate(&value) && all)
    }

    fn any_strict<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.reduce(false, |any, value, _, _| predicate(&value) || any)
    }

    fn histogram(&self) -> HashMap<T, usize>
    where
        T: Eq + Hash,
    {
        self.reduce(HashMap::new(), |mut counts, value, _, _| {
            *counts.entry(value).or_insert(0) += 1;
            counts
        })
    }

    fn histogram_by<K, F>(&self, key: F) -> HashMap<K, usize>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        self.group_by_with(key, |count, _, _| count.unwrap_or(0) + 1)
    }

    fn group_by<K, F>(&self, key: F) -> HashMap<K, Vec<T>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        self.group_by_with(key, |group: Option<Vec<T>>, value, _| {
            let mut group = group.unwrap_or_default();
            group.push(value);
            group
        })
    }

    fn group_by_with<K, G, F, A>(&self, mut key: F, mut grouping: A) -> HashMap<K, G>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
        A: FnMut(Option<G>, T, usize) -> G,
    {
        self.reduce(HashMap::new(), |mut groups, value, index, _| {
            let k = key(&value);
            let previous = groups.remove(&k);
            groups.insert(k, grouping(previous, value, index));
            groups
        })
    }

    fn join(&self, separator: &str, prefix: &str) -> String
    where
        T: Display,
    {
        self.reduce(String::from(prefix), |mut joined, value, index, _| {
            if index > 0 {
                joined.push_str(separator);
            }
            joined.push_str(&value.to_string());
            joined
        })
    }

    fn sum<A>(&self, initial: A) -> A
    where
        A: Add<T, Output = A>,
    {
        self.reduce(initial, |total, value, _, _| total + value)
    }

    fn multiplication<A>(&self, initial: A) -> A
    where
        A: Mul<T, Output = A>,
    {
        self.reduce(initial, |product, value, _, _| product * value)
    }

    fn max(&self, floor: T) -> T
    where
        T: PartialOrd,
    {
        self.reduce(floor, |max, value, _, _| if value > max { value } else { max })
    }

    fn min(&self, ceiling: T) -> T
    where
        T: PartialOrd,
    {
        self.reduce(ceiling, |min, value, _, _| if value < min { value } else { min })
    }

    fn max_by<C>(&self, mut compare: C, default: T) -> T
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.reduce(default, |max, value, _, _| {
            if compare(&max, &value) == Ordering::Less {
                value
            } else {
                max
            }
        })
    }

    fn min_by<C>(&self, mut compare: C, default: T) -> T
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.reduce(default, |min, value, _, _| {
            if compare(&min, &value) == Ordering::Greater {
                value
            } else {
                min
            }
        })
    }

    fn for_each<R, D>(&self, do_fn: D) -> Option<R>
    where
        D: FnMut(T, usize) -> R,
    {
        self.for_each_if(do_fn, |_, _| true)
    }

    fn for_each_if<R, D, I>(&self, mut do_fn: D, mut if_fn: I) -> Option<R>
    where
        D: FnMut(T, usize) -> R,
        I: FnMut(&T, usize) -> bool,
    {
        self.reduce(None, |last, value, index, _| {
            if if_fn(&value, index) {
                Some(do_fn(value, index))
            } else {
                last
            }
        })
    }
}
