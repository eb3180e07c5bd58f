// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Drivers that run a [`Kernel`] over an upstream cursor.
//!
//! [`KernelCursor`] pulls with `advance()`, [`AsyncKernelCursor`] with
//! `poll_advance()`. Apart from how the next upstream value is obtained the two
//! loops are identical:
//!
//! 1. pull the next upstream value, propagating `Completed`;
//! 2. feed it to the kernel together with its upstream index;
//! 3. if the kernel closed the handle, close upstream and remember it;
//! 4. emit or skip according to the kernel's verdict.

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::ready;
use lazyseq_core::logging::debug;
use lazyseq_core::{AsyncCursor, Cursor, CursorHandle, Feed, Kernel, Step};
use pin_project::pin_project;

/// Synchronous kernel driver.
pub struct KernelCursor<C, K> {
    upstream: C,
    kernel: K,
    index: usize,
    done: bool,
}

impl<C: Cursor, K: Kernel<C::Item>> KernelCursor<C, K> {
    /// Drive `kernel` with the values of `upstream`. Nothing is pulled yet.
    pub const fn new(upstream: C, kernel: K) -> Self {
        Self {
            upstream,
            kernel,
            index: 0,
            done: false,
        }
    }

    fn finish(&mut self) {
        if !self.done {
            self.done = true;
            self.upstream.close();
        }
    }
}

impl<C: Cursor, K: Kernel<C::Item>> Cursor for KernelCursor<C, K> {
    type Item = K::Output;

    fn advance(&mut self) -> Step<K::Output> {
        while !self.done {
            let Step::Produced(value) = self.upstream.advance() else {
                self.finish();
                break;
            };
            let index = self.index;
            self.index += 1;

            let mut handle = CursorHandle::new();
            let fed = self.kernel.feed(value, index, &mut handle);
            if handle.is_closed() {
                debug!("kernel closed its cursor at index {index}");
                self.finish();
            }
            if let Feed::Emit(out) = fed {
                return Step::Produced(out);
            }
        }
        Step::Completed
    }

    fn close(&mut self) {
        self.finish();
    }
}

/// Asynchronous kernel driver.
#[pin_project]
pub struct AsyncKernelCursor<C, K> {
    #[pin]
    upstream: C,
    kernel: K,
    index: usize,
    done: bool,
}

impl<C: AsyncCursor, K: Kernel<C::Item>> AsyncKernelCursor<C, K> {
    /// Drive `kernel` with the values of `upstream`. Nothing is polled yet.
    pub const fn new(upstream: C, kernel: K) -> Self {
        Self {
            upstream,
            kernel,
            index: 0,
            done: false,
        }
    }
}

impl<C: AsyncCursor, K: Kernel<C::Item>> AsyncCursor for AsyncKernelCursor<C, K> {
    type Item = K::Output;

    fn poll_advance(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Step<K::Output>> {
        let mut this = self.project();
        while !*this.done {
            let Step::Produced(value) = ready!(this.upstream.as_mut().poll_advance(cx)) else {
                *this.done = true;
                this.upstream.as_mut().close();
                break;
            };
            let index = *this.index;
            *this.index += 1;

            let mut handle = CursorHandle::new();
            let fed = this.kernel.feed(value, index, &mut handle);
            if handle.is_closed() {
                debug!("kernel closed its async cursor at index {index}");
                *this.done = true;
                this.upstream.as_mut().close();
            }
            if let Feed::Emit(out) = fed {
                return Poll::Ready(Step::Produced(out));
            }
        }
        Poll::Ready(Step::Completed)
    }

    fn close(self: Pin<&mut Self>) {
        let this = self.project();
        if !*this.done {
            *this.done = true;
            this.upstream.close();
        }
    }
}
