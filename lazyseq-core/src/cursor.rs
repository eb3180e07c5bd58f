// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Synchronous production protocol.
//!
//! A [`Cursor`] is a single-use traversal handle: it hands out values with
//! [`advance`](Cursor::advance) until it reports [`Step::Completed`], and can be
//! stopped at any time with [`close`](Cursor::close). Both operations are safe to
//! repeat; after either exhaustion or close the cursor keeps reporting
//! `Completed` without touching its source again.
//!
//! `close` is part of the trait rather than an optional capability. Sources that
//! have nothing to release go through [`IterCursor`], whose close simply drops
//! the wrapped iterator.

use crate::step::Step;
use alloc::boxed::Box;
use alloc::sync::Arc;
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// Pull-based production of values.
pub trait Cursor {
    /// The type of the produced values.
    type Item;

    /// Produce the next value, or `Completed` once the production is over.
    fn advance(&mut self) -> Step<Self::Item>;

    /// Stop the production and release whatever the cursor holds.
    ///
    /// Idempotent. Every later `advance()` returns `Completed`.
    fn close(&mut self);

    /// Adapt this cursor into an [`Iterator`] that closes it when dropped.
    fn into_values(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter::new(self)
    }

    /// Box this cursor behind the erased [`BoxCursor`] type.
    fn boxed(self) -> BoxCursor<Self::Item>
    where
        Self: Sized + Send + 'static,
    {
        Box::new(self)
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }

    fn close(&mut self) {
        (**self).close();
    }
}

/// Type-erased cursor, the unit every sequence factory produces.
pub type BoxCursor<T> = Box<dyn Cursor<Item = T> + Send>;

/// Deferred creation of a cursor that is run at most once.
pub type CursorThunk<T> = Box<dyn FnOnce() -> BoxCursor<T> + Send>;

/// Reusable cursor factory, invoked once per traversal.
pub type CursorFactory<T> = Arc<dyn Fn() -> BoxCursor<T> + Send + Sync>;

/// Close shim for plain iterators.
///
/// The wrapped iterator is dropped on exhaustion or on `close`, so a source
/// that would keep producing stops exactly where it was closed.
///
/// # Example
///
/// ```
/// use lazyseq_core::{Cursor, IterCursor, Step};
///
/// let mut cursor = IterCursor::new(0..);
/// assert_eq!(cursor.advance(), Step::Produced(0));
///
/// cursor.close();
/// assert_eq!(cursor.advance(), Step::Completed);
/// ```
#[derive(Debug, Clone)]
pub struct IterCursor<I> {
    iter: Option<I>,
}

impl<I: Iterator> IterCursor<I> {
    /// Wrap an iterator.
    pub fn new(iter: I) -> Self {
        Self { iter: Some(iter) }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn advance(&mut self) -> Step<I::Item> {
        match self.iter.as_mut().and_then(Iterator::next) {
            Some(value) => Step::Produced(value),
            None => {
                self.iter = None;
                Step::Completed
            }
        }
    }

    fn close(&mut self) {
        self.iter = None;
    }
}

/// Cursor over nothing.
#[derive(Debug)]
pub struct EmptyCursor<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> EmptyCursor<T> {
    /// Create a cursor that is already exhausted.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for EmptyCursor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        Step::Completed
    }

    fn close(&mut self) {}
}

/// Iterator view of a cursor.
///
/// Dropping the iterator closes the cursor, so a `for` loop that `break`s, a
/// `?` that returns early, or a panic that unwinds all release the production.
pub struct CursorIter<C: Cursor> {
    cursor: C,
}

impl<C: Cursor> CursorIter<C> {
    /// Wrap a cursor.
    pub const fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Close the underlying cursor without dropping the iterator.
    pub fn close(&mut self) {
        self.cursor.close();
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        self.cursor.advance().produced()
    }
}

impl<C: Cursor> FusedIterator for CursorIter<C> {}

impl<C: Cursor> Drop for CursorIter<C> {
    fn drop(&mut self) {
        self.cursor.close();
    }
}
