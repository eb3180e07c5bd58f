// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pull-agnostic operator steps.
//!
//! A [`Kernel`] holds the per-traversal state of an operator and decides what
//! to do with one upstream value. It never pulls by itself. The pulling is left
//! to a driver, and there is one driver per flavor: a synchronous one built on
//! [`Cursor::advance`](crate::Cursor::advance) and an asynchronous one built on
//! [`AsyncCursor::poll_advance`](crate::AsyncCursor::poll_advance). Both flavors
//! therefore run the exact same operator logic.

use crate::handle::CursorHandle;

/// What a kernel does with the value it was fed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed<R> {
    /// Emit this value downstream
    Emit(R),
    /// Discard the value and pull the next one
    Skip,
}

impl<R> Feed<R> {
    /// Converts from `Feed<R>` to `Option<R>`.
    pub fn emitted(self) -> Option<R> {
        match self {
            Feed::Emit(v) => Some(v),
            Feed::Skip => None,
        }
    }
}

/// Operator logic applied to each upstream value in turn.
///
/// `index` is the 0-based position of `value` in the upstream traversal. The
/// kernel may call `handle.close()`; the driver then honors the returned
/// [`Feed`] for this value and stops pulling afterwards.
pub trait Kernel<T> {
    /// The type of the emitted values.
    type Output;

    /// Process one upstream value.
    fn feed(&mut self, value: T, index: usize, handle: &mut CursorHandle) -> Feed<Self::Output>;
}
