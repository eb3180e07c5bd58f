// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyseq_core::{BoxCursor, Cursor, Step};

/// Flattens one level: every outer value is turned into a cursor by `expand`
/// and that cursor is drained before the next outer value is pulled.
pub struct Flatten<C: Cursor, F, T> {
    outer: C,
    expand: F,
    inner: Option<BoxCursor<T>>,
    done: bool,
}

impl<C: Cursor, F, T> Flatten<C, F, T>
where
    F: FnMut(C::Item) -> BoxCursor<T>,
{
    pub fn new(outer: C, expand: F) -> Self {
        Self {
            outer,
            expand,
            inner: None,
            done: false,
        }
    }

    fn finish(&mut self) {
        if !self.done {
            self.done = true;
            if let Some(mut inner) = self.inner.take() {
                inner.close();
            }
            self.outer.close();
        }
    }
}

impl<C: Cursor, F, T> Cursor for Flatten<C, F, T>
where
    F: FnMut(C::Item) -> BoxCursor<T>,
{
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        while !self.done {
            if let Some(inner) = self.inner.as_mut() {
                match inner.advance() {
                    Step::Produced(value) => return Step::Produced(value),
                    Step::Completed => {
                        inner.close();
                        self.inner = None;
                    }
                }
            }
            match self.outer.advance() {
                Step::Produced(value) => self.inner = Some((self.expand)(value)),
                Step::Completed => self.finish(),
            }
        }
        Step::Completed
    }

    fn close(&mut self) {
        self.finish();
    }
}
