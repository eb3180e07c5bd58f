// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyseq_core::{BoxCursor, Cursor, CursorFactory, Step};

/// Replays a production a number of times, or forever.
///
/// Each repetition starts a fresh cursor from `factory`. A repetition that
/// produces nothing ends the cycle, so an empty source never spins.
pub struct Cycle<T> {
    factory: CursorFactory<T>,
    active: Option<BoxCursor<T>>,
    remaining: Option<usize>,
    produced: bool,
    done: bool,
}

impl<T> Cycle<T> {
    /// Cycle `times` repetitions of `factory`'s production (`None` for no end).
    pub fn new(factory: CursorFactory<T>, times: Option<usize>) -> Self {
        Self {
            factory,
            active: None,
            remaining: times,
            produced: false,
            done: false,
        }
    }

    fn finish(&mut self) {
        self.done = true;
        if let Some(mut cursor) = self.active.take() {
            cursor.close();
        }
    }
}

impl<T> Cursor for Cycle<T> {
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        while !self.done {
            if self.active.is_none() {
                match self.remaining.as_mut() {
                    Some(0) => {
                        self.finish();
                        break;
                    }
                    Some(remaining) => *remaining -= 1,
                    None => {}
                }
                self.active = Some((self.factory)());
                self.produced = false;
            }
            let Some(cursor) = self.active.as_mut() else {
                continue;
            };
            match cursor.advance() {
                Step::Produced(value) => {
                    self.produced = true;
                    return Step::Produced(value);
                }
                Step::Completed => {
                    cursor.close();
                    self.active = None;
                    if !self.produced {
                        self.finish();
                    }
                }
            }
        }
        Step::Completed
    }

    fn close(&mut self) {
        self.finish();
    }
}
