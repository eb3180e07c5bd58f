// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Asynchronous production protocol.
//!
//! [`AsyncCursor`] mirrors [`Cursor`](crate::Cursor) with one suspension point per
//! advance. The contract is the same: repeated advances after `Completed` keep
//! returning `Completed`, and `close` is idempotent and immediate.
//!
//! Only one advance may be in flight per cursor. `Pin<&mut Self>` already makes
//! that exclusive for safe code, so nothing here locks.

use crate::cursor::Cursor;
use crate::step::Step;
use alloc::boxed::Box;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use pin_project::{pin_project, pinned_drop};

/// Pull-based production of values through a suspension point.
pub trait AsyncCursor {
    /// The type of the produced values.
    type Item;

    /// Attempt to produce the next value.
    fn poll_advance(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Step<Self::Item>>;

    /// Stop the production. Idempotent.
    fn close(self: Pin<&mut Self>);
}

impl<C: AsyncCursor + ?Sized> AsyncCursor for Pin<Box<C>> {
    type Item = C::Item;

    fn poll_advance(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Step<Self::Item>> {
        self.get_mut().as_mut().poll_advance(cx)
    }

    fn close(self: Pin<&mut Self>) {
        self.get_mut().as_mut().close();
    }
}

/// Type-erased asynchronous cursor.
pub type BoxAsyncCursor<T> = Pin<Box<dyn AsyncCursor<Item = T> + Send>>;

/// Deferred creation of an asynchronous cursor that is run at most once.
pub type AsyncCursorThunk<T> = Box<dyn FnOnce() -> BoxAsyncCursor<T> + Send>;

/// Convenience methods for [`AsyncCursor`]s.
pub trait AsyncCursorExt: AsyncCursor {
    /// Future resolving to the next step of this cursor.
    fn advance(&mut self) -> Advance<'_, Self>
    where
        Self: Unpin,
    {
        Advance {
            cursor: Pin::new(self),
        }
    }

    /// Adapt this cursor into a [`Stream`] that closes it when dropped.
    fn into_stream(self) -> CursorStream<Self>
    where
        Self: Sized,
    {
        CursorStream { cursor: self }
    }
}

impl<C: AsyncCursor + ?Sized> AsyncCursorExt for C {}

/// Future returned by [`AsyncCursorExt::advance`].
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Advance<'a, C: ?Sized> {
    cursor: Pin<&'a mut C>,
}

impl<C: AsyncCursor + ?Sized> Future for Advance<'_, C> {
    type Output = Step<C::Item>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.get_mut().cursor.as_mut().poll_advance(cx)
    }
}

/// Close shim for [`Stream`]s.
///
/// The stream is dropped in place on exhaustion or on `close`.
#[pin_project]
pub struct StreamCursor<S> {
    #[pin]
    stream: Option<S>,
}

impl<S: Stream> StreamCursor<S> {
    /// Wrap a stream.
    pub const fn new(stream: S) -> Self {
        Self {
            stream: Some(stream),
        }
    }
}

impl<S: Stream> AsyncCursor for StreamCursor<S> {
    type Item = S::Item;

    fn poll_advance(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Step<S::Item>> {
        let mut this = self.project();
        let Some(stream) = this.stream.as_mut().as_pin_mut() else {
            return Poll::Ready(Step::Completed);
        };
        match stream.poll_next(cx) {
            Poll::Ready(Some(value)) => Poll::Ready(Step::Produced(value)),
            Poll::Ready(None) => {
                this.stream.set(None);
                Poll::Ready(Step::Completed)
            }
            Poll::Pending => Poll::Pending,
        }
    }

    fn close(self: Pin<&mut Self>) {
        self.project().stream.set(None);
    }
}

/// Asynchronous view of a synchronous cursor; every advance resolves immediately.
#[derive(Debug)]
pub struct ReadyCursor<C> {
    inner: C,
}

impl<C: Cursor + Unpin> ReadyCursor<C> {
    /// Wrap a synchronous cursor.
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Cursor + Unpin> AsyncCursor for ReadyCursor<C> {
    type Item = C::Item;

    fn poll_advance(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Step<C::Item>> {
        Poll::Ready(self.get_mut().inner.advance())
    }

    fn close(self: Pin<&mut Self>) {
        self.get_mut().inner.close();
    }
}

/// [`Stream`] view of an asynchronous cursor, closing it when dropped.
#[pin_project(PinnedDrop)]
pub struct CursorStream<C: AsyncCursor> {
    #[pin]
    cursor: C,
}

impl<C: AsyncCursor> Stream for CursorStream<C> {
    type Item = C::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<C::Item>> {
        self.project().cursor.poll_advance(cx).map(Step::produced)
    }
}

#[pinned_drop]
impl<C: AsyncCursor> PinnedDrop for CursorStream<C> {
    fn drop(self: Pin<&mut Self>) {
        self.project().cursor.close();
    }
}
