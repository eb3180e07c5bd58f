// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Permutations and combinations.
//!
//! Both cursors need random access to the source values, so the whole source is
//! materialized on the first advance. Nothing is pulled before that.

use alloc::vec::Vec;
use lazyseq_core::logging::debug;
use lazyseq_core::{BoxCursor, Cursor, Step};

enum Source<T> {
    Pending(BoxCursor<T>),
    Pool(Vec<T>),
    Done,
}

impl<T> Source<T> {
    /// Materialize the source if needed; `None` once the production is over.
    fn pool(&mut self, operation: &str) -> Option<&[T]> {
        if let Source::Pending(cursor) = self {
            let mut values = Vec::new();
            while let Step::Produced(value) = cursor.advance() {
                values.push(value);
            }
            cursor.close();
            debug!("{operation} materialized {} value(s)", values.len());
            *self = Source::Pool(values);
        }
        match self {
            Source::Pool(pool) => Some(pool),
            _ => None,
        }
    }

    fn close(&mut self) {
        if let Source::Pending(cursor) = self {
            cursor.close();
        }
        *self = Source::Done;
    }
}

fn pick<T: Clone>(pool: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| pool[i].clone()).collect()
}

/// Every selection of `k` values, in lexicographic order of positions.
///
/// `k` larger than the source length produces nothing; `k == 0` produces a
/// single empty selection.
pub struct Combinations<T> {
    source: Source<T>,
    k: usize,
    indices: Option<Vec<usize>>,
}

impl<T> Combinations<T> {
    pub fn new(source: BoxCursor<T>, k: usize) -> Self {
        Self {
            source: Source::Pending(source),
            k,
            indices: None,
        }
    }
}

impl<T: Clone> Cursor for Combinations<T> {
    type Item = Vec<T>;

    fn advance(&mut self) -> Step<Vec<T>> {
        let k = self.k;
        let Some(pool) = self.source.pool("combinations") else {
            return Step::Completed;
        };
        let n = pool.len();

        let Some(indices) = self.indices.as_mut() else {
            if k > n {
                self.source.close();
                return Step::Completed;
            }
            let first: Vec<usize> = (0..k).collect();
            let values = pick(pool, &first);
            self.indices = Some(first);
            return Step::Produced(values);
        };

        // Right-most position that can still move forward.
        let Some(i) = (0..k).rev().find(|&i| indices[i] != i + n - k) else {
            self.source.close();
            return Step::Completed;
        };
        indices[i] += 1;
        for j in i + 1..k {
            indices[j] = indices[j - 1] + 1;
        }
        Step::Produced(pick(pool, indices))
    }

    fn close(&mut self) {
        self.source.close();
    }
}

/// Every arrangement of `k` distinct positions, each exactly once.
///
/// Arrangements are produced in lexicographic order of positions.
pub struct Permutations<T> {
    source: Source<T>,
    k: usize,
    state: Option<(Vec<usize>, Vec<usize>)>,
}

impl<T> Permutations<T> {
    pub fn new(source: BoxCursor<T>, k: usize) -> Self {
        Self {
            source: Source::Pending(source),
            k,
            state: None,
        }
    }
}

impl<T: Clone> Cursor for Permutations<T> {
    type Item = Vec<T>;

    fn advance(&mut self) -> Step<Vec<T>> {
        let k = self.k;
        let Some(pool) = self.source.pool("permutations") else {
            return Step::Completed;
        };
        let n = pool.len();

        let Some((indices, cycles)) = self.state.as_mut() else {
            if k > n {
                self.source.close();
                return Step::Completed;
            }
            let indices: Vec<usize> = (0..n).collect();
            let cycles: Vec<usize> = (n - k + 1..=n).rev().collect();
            let values = pick(pool, &indices[..k]);
            self.state = Some((indices, cycles));
            return Step::Produced(values);
        };

        for i in (0..k).rev() {
            cycles[i] -= 1;
            if cycles[i] == 0 {
                indices[i..].rotate_left(1);
                cycles[i] = n - i;
            } else {
                let j = cycles[i];
                indices.swap(i, n - j);
                return Step::Produced(pick(pool, &indices[..k]));
            }
        }
        self.source.close();
        Step::Completed
    }

    fn close(&mut self) {
        self.source.close();
    }
}
