// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conversions of a sequence into windows and collections.

use crate::sequence::Sequence;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::hash::Hash;
use lazyseq_core::Cursor;
use lazyseq_generators::{KernelCursor, Peephole};
use std::collections::{HashMap, HashSet};

/// Extension trait providing the conversions of [`Sequence`].
pub trait ConversionExt<T: Send + 'static> {
    /// Sliding windows of `size` consecutive values.
    fn peephole(&self, size: usize) -> Sequence<Vec<T>>
    where
        T: Clone;

    /// Collect every value.
    fn to_vec(&self) -> Vec<T>;

    /// Append every value to `values` and return it.
    fn extend_vec(&self, values: Vec<T>) -> Vec<T>;

    /// Collect every distinct value.
    fn to_set(&self) -> HashSet<T>
    where
        T: Eq + Hash;
}

impl<T: Send + 'static> ConversionExt<T> for Sequence<T> {
    fn peephole(&self, size: usize) -> Sequence<Vec<T>>
    where
        T: Clone,
    {
        let upstream = self.clone();
        Sequence::derived(move || KernelCursor::new(upstream.cursor(), Peephole::new(size)).boxed())
    }

    fn to_vec(&self) -> Vec<T> {
        self.extend_vec(Vec::new())
    }

    fn extend_vec(&self, values: Vec<T>) -> Vec<T> {
        self.reduce(values, |mut values, value, _, _| {
            values.push(value);
            values
        })
    }

    fn to_set(&self) -> HashSet<T>
    where
        T: Eq + Hash,
    {
        self.reduce(HashSet::new(), |mut set, value, _, _| {
            set.insert(value);
            set
        })
    }
}

impl<K: Send + 'static, V: Send + 'static> Sequence<(K, V)> {
    /// Collect `(key, value)` pairs into a map. Later keys overwrite earlier ones.
    pub fn to_map(&self) -> HashMap<K, V>
    where
        K: Eq + Hash,
    {
        self.reduce(HashMap::new(), |mut map, (key, value), _, _| {
            map.insert(key, value);
            map
        })
    }

    /// Collect `(key, value)` pairs into an ordered map.
    pub fn to_btree_map(&self) -> BTreeMap<K, V>
    where
        K: Ord,
    {
        self.reduce(BTreeMap::new(), |mut map, (key, value), _, _| {
            map.insert(key, value);
            map
        })
    }
}
