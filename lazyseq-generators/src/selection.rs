// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Positional and predicate-driven selection kernels.

use alloc::sync::Arc;
use lazyseq_core::{CursorHandle, Feed, Kernel};

/// Values at upstream indices `begin..end`, `end` being optional.
///
/// The handle is closed together with the last value of the range, so
/// upstream is never pulled past `end`. An empty range still pulls one value
/// before it can complete.
#[derive(Debug, Clone, Copy)]
pub struct Slice {
    begin: usize,
    end: Option<usize>,
}

impl Slice {
    pub const fn new(begin: usize, end: Option<usize>) -> Self {
        Self { begin, end }
    }
}

impl<T> Kernel<T> for Slice {
    type Output = T;

    fn feed(&mut self, value: T, index: usize, handle: &mut CursorHandle) -> Feed<T> {
        if let Some(end) = self.end {
            if index >= end {
                handle.close();
                return Feed::Skip;
            }
            if index + 1 == end {
                handle.close();
            }
        }
        if index < self.begin {
            return Feed::Skip;
        }
        Feed::Emit(value)
    }
}

/// Values up to, not including, the first one failing the predicate.
pub struct TakeWhile<P> {
    predicate: Arc<P>,
}

impl<P> TakeWhile<P> {
    pub const fn new(predicate: Arc<P>) -> Self {
        Self { predicate }
    }
}

impl<T, P: Fn(&T) -> bool> Kernel<T> for TakeWhile<P> {
    type Output = T;

    fn feed(&mut self, value: T, _index: usize, handle: &mut CursorHandle) -> Feed<T> {
        if (self.predicate)(&value) {
            return Feed::Emit(value);
        }
        handle.close();
        Feed::Skip
    }
}

/// Every value from the first one failing the predicate on.
///
/// Once a value fails, the predicate is not called again.
pub struct DropWhile<P> {
    dropping: bool,
    predicate: Arc<P>,
}

impl<P> DropWhile<P> {
    pub const fn new(predicate: Arc<P>) -> Self {
        Self {
            dropping: true,
            predicate,
        }
    }
}

impl<T, P: Fn(&T) -> bool> Kernel<T> for DropWhile<P> {
    type Output = T;

    fn feed(&mut self, value: T, _index: usize, _handle: &mut CursorHandle) -> Feed<T> {
        if self.dropping && (self.predicate)(&value) {
            return Feed::Skip;
        }
        self.dropping = false;
        Feed::Emit(value)
    }
}
