// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Constant and iterated productions.

use alloc::sync::Arc;
use lazyseq_core::{Cursor, Step};

/// Produces clones of one value, `times` times or forever.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: Option<T>,
    remaining: Option<usize>,
}

impl<T: Clone> Repeat<T> {
    pub const fn new(value: T, times: Option<usize>) -> Self {
        Self {
            value: Some(value),
            remaining: times,
        }
    }
}

impl<T: Clone> Cursor for Repeat<T> {
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        match self.remaining.as_mut() {
            Some(0) => self.value = None,
            Some(remaining) => *remaining -= 1,
            None => {}
        }
        self.value.clone().into()
    }

    fn close(&mut self) {
        self.value = None;
    }
}

/// Produces `seed`, `f(seed)`, `f(f(seed))`, ...
///
/// Every value is computed on the advance that produces it; `f` is never
/// called ahead of demand.
pub struct Iterate<T, F> {
    seed: Option<T>,
    last: Option<T>,
    step: Arc<F>,
    remaining: Option<usize>,
    done: bool,
}

impl<T, F> Iterate<T, F> {
    /// Iterate `step` from `seed`, `times` values or forever.
    pub const fn new(seed: T, step: Arc<F>, times: Option<usize>) -> Self {
        Self {
            seed: Some(seed),
            last: None,
            step,
            remaining: times,
            done: false,
        }
    }
}

impl<T: Clone, F: Fn(&T) -> T> Cursor for Iterate<T, F> {
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        if self.done {
            return Step::Completed;
        }
        match self.remaining.as_mut() {
            Some(0) => {
                self.close();
                return Step::Completed;
            }
            Some(remaining) => *remaining -= 1,
            None => {}
        }
        let next = match (self.seed.take(), self.last.as_ref()) {
            (Some(seed), _) => seed,
            (None, Some(last)) => (self.step)(last),
            (None, None) => return Step::Completed,
        };
        self.last = Some(next.clone());
        Step::Produced(next)
    }

    fn close(&mut self) {
        self.done = true;
        self.seed = None;
        self.last = None;
    }
}
