// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cooperative cancellation handle passed to user callbacks.

/// Handle through which a callback asks the traversal that called it to stop.
///
/// Every value, check and fold callback receives a `&mut CursorHandle`. Calling
/// [`close`](CursorHandle::close) does not unwind anything: the driver finishes
/// processing the current value, then closes its upstream cursor and reports
/// `Completed` from then on.
///
/// # Example
///
/// ```
/// use lazyseq_core::CursorHandle;
///
/// let mut handle = CursorHandle::new();
/// assert!(!handle.is_closed());
///
/// handle.close();
/// handle.close();
/// assert!(handle.is_closed());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CursorHandle {
    closed: bool,
}

impl CursorHandle {
    /// Create an open handle.
    pub const fn new() -> Self {
        Self { closed: false }
    }

    /// Request early termination of the traversal. Idempotent.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Whether a close was requested.
    pub const fn is_closed(&self) -> bool {
        self.closed
    }
}
