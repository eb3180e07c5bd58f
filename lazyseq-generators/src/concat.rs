// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sequential composition of productions.
//!
//! Both flavors keep their operands in an [`Operands`] queue, which owns the
//! lazy start, retirement and close rules. The flavors only differ in how the
//! active operand is pulled.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::ready;
use lazyseq_core::{AsyncCursor, AsyncCursorThunk, BoxAsyncCursor, BoxCursor, Cursor, CursorThunk, Step};

/// Queue of operand starters with at most one started operand.
struct Operands<C> {
    active: Option<C>,
    pending: VecDeque<Box<dyn FnOnce() -> C + Send>>,
}

impl<C> Operands<C> {
    fn new(operands: impl IntoIterator<Item = Box<dyn FnOnce() -> C + Send>>) -> Self {
        Self {
            active: None,
            pending: operands.into_iter().collect(),
        }
    }

    /// The operand to pull from, starting the next one if none is active.
    fn active(&mut self) -> Option<&mut C> {
        if self.active.is_none() {
            let start = self.pending.pop_front()?;
            self.active = Some(start());
        }
        self.active.as_mut()
    }

    /// Forget the active operand after it completed.
    fn retire(&mut self) {
        self.active = None;
    }

    fn close(&mut self, close: impl FnOnce(&mut C)) {
        if let Some(mut cursor) = self.active.take() {
            close(&mut cursor);
        }
        self.pending.clear();
    }
}

/// Produces the values of every operand, one operand after the other.
///
/// Operands are started lazily: an operand's cursor is only created once all the
/// previous operands completed. Closing the concatenation closes the active
/// operand and discards the ones not yet started.
pub struct Concat<T> {
    operands: Operands<BoxCursor<T>>,
}

impl<T> Concat<T> {
    /// Concatenate the productions started by `operands`, in order.
    pub fn new(operands: impl IntoIterator<Item = CursorThunk<T>>) -> Self {
        Self {
            operands: Operands::new(operands),
        }
    }
}

impl<T> Cursor for Concat<T> {
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        while let Some(cursor) = self.operands.active() {
            match cursor.advance() {
                Step::Produced(value) => return Step::Produced(value),
                Step::Completed => {
                    cursor.close();
                    self.operands.retire();
                }
            }
        }
        Step::Completed
    }

    fn close(&mut self) {
        self.operands.close(|cursor| cursor.close());
    }
}

/// Asynchronous counterpart of [`Concat`].
pub struct AsyncConcat<T> {
    operands: Operands<BoxAsyncCursor<T>>,
}

impl<T> AsyncConcat<T> {
    /// Concatenate the productions started by `operands`, in order.
    pub fn new(operands: impl IntoIterator<Item = AsyncCursorThunk<T>>) -> Self {
        Self {
            operands: Operands::new(operands),
        }
    }
}

impl<T> AsyncCursor for AsyncConcat<T> {
    type Item = T;

    fn poll_advance(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Step<T>> {
        let operands = &mut self.get_mut().operands;
        while let Some(cursor) = operands.active() {
            match ready!(cursor.as_mut().poll_advance(cx)) {
                Step::Produced(value) => return Poll::Ready(Step::Produced(value)),
                Step::Completed => {
                    cursor.as_mut().close();
                    operands.retire();
                }
            }
        }
        Poll::Ready(Step::Completed)
    }

    fn close(self: Pin<&mut Self>) {
        self.get_mut().operands.close(|cursor| cursor.as_mut().close());
    }
}
