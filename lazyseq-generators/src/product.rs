// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cartesian product.
//!
//! The outer operand is streamed, every other operand has to be traversed once
//! per outer value and is therefore buffered in memory on the first advance.
//! The memory cost is the sum of the lengths of the inner operands.

use alloc::vec;
use alloc::vec::Vec;
use lazyseq_core::logging::debug;
use lazyseq_core::{BoxCursor, Cursor, CursorThunk, Step};

enum Inner<T> {
    Pending(Vec<CursorThunk<T>>),
    Buffered(Vec<Vec<T>>),
}

/// Produces every combination of one value per operand.
///
/// Combinations come in lexicographic order of operand position: the right-most
/// operand varies fastest, as in an odometer. Any empty operand makes the whole
/// product empty.
pub struct Product<T> {
    outer: BoxCursor<T>,
    inner: Inner<T>,
    head: Option<T>,
    positions: Vec<usize>,
    done: bool,
}

impl<T: Clone> Product<T> {
    /// Product of `outer` with the productions started by `inner`.
    pub fn new(outer: BoxCursor<T>, inner: Vec<CursorThunk<T>>) -> Self {
        Self {
            outer,
            inner: Inner::Pending(inner),
            head: None,
            positions: Vec::new(),
            done: false,
        }
    }

    fn finish(&mut self) {
        if !self.done {
            self.done = true;
            self.head = None;
            self.outer.close();
        }
    }

    fn buffer(&mut self) -> bool {
        if let Inner::Pending(thunks) = &mut self.inner {
            let pools: Vec<Vec<T>> = thunks
                .drain(..)
                .map(|start| start().into_values().collect())
                .collect();
            debug!(
                "product buffered {} inner operand(s), {} value(s) in total",
                pools.len(),
                pools.iter().map(Vec::len).sum::<usize>()
            );
            self.positions = vec![0; pools.len()];
            self.inner = Inner::Buffered(pools);
        }
        match &self.inner {
            Inner::Buffered(pools) => pools.iter().all(|pool| !pool.is_empty()),
            Inner::Pending(_) => false,
        }
    }
}

impl<T: Clone> Cursor for Product<T> {
    type Item = Vec<T>;

    fn advance(&mut self) -> Step<Vec<T>> {
        if self.done {
            return Step::Completed;
        }
        if !self.buffer() {
            self.finish();
            return Step::Completed;
        }
        if self.head.is_none() {
            match self.outer.advance() {
                Step::Produced(value) => self.head = Some(value),
                Step::Completed => {
                    self.finish();
                    return Step::Completed;
                }
            }
        }
        let (Some(head), Inner::Buffered(pools)) = (&self.head, &self.inner) else {
            return Step::Completed;
        };

        let mut combination = Vec::with_capacity(pools.len() + 1);
        combination.push(head.clone());
        combination.extend(
            pools
                .iter()
                .zip(&self.positions)
                .map(|(pool, &position)| pool[position].clone()),
        );

        // Odometer: the last wheel turns first; a full rollover asks for a new head.
        let mut wheel = self.positions.len();
        loop {
            if wheel == 0 {
                self.head = None;
                break;
            }
            wheel -= 1;
            self.positions[wheel] += 1;
            if self.positions[wheel] < pools[wheel].len() {
                break;
            }
            self.positions[wheel] = 0;
        }

        Step::Produced(combination)
    }

    fn close(&mut self) {
        self.finish();
    }
}
