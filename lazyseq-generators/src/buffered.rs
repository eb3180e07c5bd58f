// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Memoized replay of a production.
//!
//! A [`SharedBuffer`] starts its upstream on the first demand and caches every
//! value it pulls. Each [`BufferCursor`] reads the cache at its own position and
//! only pulls upstream when it runs past the end of the cache, so the upstream
//! is traversed at most once no matter how many cursors replay it.

use alloc::sync::Arc;
use alloc::vec::Vec;
use lazyseq_core::{BoxCursor, Cursor, CursorThunk, Step};
use parking_lot::Mutex;

enum Upstream<T> {
    Pending(CursorThunk<T>),
    Active(BoxCursor<T>),
    Exhausted,
}

struct Shared<T> {
    cache: Vec<T>,
    upstream: Upstream<T>,
}

impl<T: Clone> Shared<T> {
    fn value_at(&mut self, position: usize) -> Option<T> {
        while position >= self.cache.len() {
            if let Upstream::Pending(_) = self.upstream {
                if let Upstream::Pending(start) =
                    core::mem::replace(&mut self.upstream, Upstream::Exhausted)
                {
                    self.upstream = Upstream::Active(start());
                }
            }
            let Upstream::Active(cursor) = &mut self.upstream else {
                return None;
            };
            match cursor.advance() {
                Step::Produced(value) => self.cache.push(value),
                Step::Completed => {
                    cursor.close();
                    self.upstream = Upstream::Exhausted;
                }
            }
        }
        self.cache.get(position).cloned()
    }
}

impl<T> Drop for Shared<T> {
    fn drop(&mut self) {
        if let Upstream::Active(cursor) = &mut self.upstream {
            cursor.close();
        }
    }
}

/// Upstream production shared by every [`BufferCursor`] it hands out.
pub struct SharedBuffer<T> {
    shared: Arc<Mutex<Shared<T>>>,
}

impl<T> SharedBuffer<T> {
    /// Buffer the production started by `source`. Nothing is pulled yet.
    pub fn new(source: CursorThunk<T>) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                cache: Vec::new(),
                upstream: Upstream::Pending(source),
            })),
        }
    }

    /// A new replay from the first value.
    pub fn cursor(&self) -> BufferCursor<T> {
        BufferCursor {
            shared: Arc::clone(&self.shared),
            position: 0,
            closed: false,
        }
    }

    /// Number of values pulled from upstream so far.
    pub fn cached(&self) -> usize {
        self.shared.lock().cache.len()
    }
}

/// One replay of a [`SharedBuffer`].
///
/// Closing a replay does not close the shared upstream; it is closed when
/// exhausted or when the buffer and all its replays are dropped.
pub struct BufferCursor<T> {
    shared: Arc<Mutex<Shared<T>>>,
    position: usize,
    closed: bool,
}

impl<T: Clone> Cursor for BufferCursor<T> {
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        if self.closed {
            return Step::Completed;
        }
        match self.shared.lock().value_at(self.position) {
            Some(value) => {
                self.position += 1;
                Step::Produced(value)
            }
            None => {
                self.closed = true;
                Step::Completed
            }
        }
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
