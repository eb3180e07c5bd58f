// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lock-step composition of productions.

use alloc::sync::Arc;
use alloc::vec::Vec;
use lazyseq_core::{BoxCursor, Cursor, Step};

/// Advances every operand once per step and combines the values with `zip_fn`.
///
/// The production completes as soon as any operand completes; at that point,
/// or when closed, all operand cursors are closed together. Zipping no operand
/// at all produces nothing.
pub struct ZipWith<T, F> {
    operands: Vec<BoxCursor<T>>,
    zip_fn: Arc<F>,
    index: usize,
    done: bool,
}

impl<T, F> ZipWith<T, F> {
    /// Zip `operands` in lock-step.
    pub fn new(operands: Vec<BoxCursor<T>>, zip_fn: Arc<F>) -> Self {
        let done = operands.is_empty();
        Self {
            operands,
            zip_fn,
            index: 0,
            done,
        }
    }

    fn finish(&mut self) {
        if !self.done {
            self.done = true;
            self.operands.iter_mut().for_each(|operand| operand.close());
        }
    }
}

impl<T, R, F> Cursor for ZipWith<T, F>
where
    F: Fn(Vec<T>, usize) -> R,
{
    type Item = R;

    fn advance(&mut self) -> Step<R> {
        if self.done {
            return Step::Completed;
        }
        let mut values = Vec::with_capacity(self.operands.len());
        for operand in &mut self.operands {
            match operand.advance() {
                Step::Produced(value) => values.push(value),
                Step::Completed => {
                    self.finish();
                    return Step::Completed;
                }
            }
        }
        let index = self.index;
        self.index += 1;
        Step::Produced((self.zip_fn)(values, index))
    }

    fn close(&mut self) {
        self.finish();
    }
}

/// Two-operand zip over heterogeneous value types.
pub struct ZipPair<A, B> {
    left: BoxCursor<A>,
    right: BoxCursor<B>,
    done: bool,
}

impl<A, B> ZipPair<A, B> {
    pub fn new(left: BoxCursor<A>, right: BoxCursor<B>) -> Self {
        Self {
            left,
            right,
            done: false,
        }
    }

    fn finish(&mut self) {
        if !self.done {
            self.done = true;
            self.left.close();
            self.right.close();
        }
    }
}

impl<A, B> Cursor for ZipPair<A, B> {
    type Item = (A, B);

    fn advance(&mut self) -> Step<(A, B)> {
        if self.done {
            return Step::Completed;
        }
        let Step::Produced(left) = self.left.advance() else {
            self.finish();
            return Step::Completed;
        };
        let Step::Produced(right) = self.right.advance() else {
            self.finish();
            return Step::Completed;
        };
        Step::Produced((left, right))
    }

    fn close(&mut self) {
        self.finish();
    }
}
