// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use lazyseq_core::{CursorHandle, Feed, Kernel};

/// Sliding window over the last `size` values.
///
/// The first window is emitted once `size` values have been seen, then one
/// window per further value. Fewer than `size` values emit nothing.
#[derive(Debug, Clone)]
pub struct Peephole<T> {
    window: VecDeque<T>,
    size: usize,
}

impl<T> Peephole<T> {
    pub fn new(size: usize) -> Self {
        Self {
            window: VecDeque::with_capacity(size + 1),
            size,
        }
    }
}

impl<T: Clone> Kernel<T> for Peephole<T> {
    type Output = Vec<T>;

    fn feed(&mut self, value: T, _index: usize, _handle: &mut CursorHandle) -> Feed<Vec<T>> {
        self.window.push_back(value);
        if self.window.len() > self.size {
            self.window.pop_front();
        }
        if self.window.len() == self.size {
            Feed::Emit(self.window.iter().cloned().collect())
        } else {
            Feed::Skip
        }
    }
}
