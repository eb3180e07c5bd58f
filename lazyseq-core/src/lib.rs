// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Production protocol for lazy sequences.
//!
//! This crate defines what it means to be a source of values:
//!
//! - [`Cursor`] / [`AsyncCursor`]: single-use, pull-based productions with a
//!   mandatory, idempotent `close`
//! - [`Step`]: the result of one advance
//! - [`CursorHandle`]: the cooperative short-circuit signal handed to callbacks
//! - [`Kernel`]: operator logic that both cursor flavors drive identically
//! - [`SequenceError`]: the library's error type
//!
//! Operators live in `lazyseq-generators`; the `Sequence` type lives in
//! `lazyseq-sequence`.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

extern crate alloc;

pub mod async_cursor;
pub mod cursor;
pub mod error;
pub mod handle;
pub mod kernel;
pub mod logging;
pub mod step;

pub use self::async_cursor::{
    Advance, AsyncCursor, AsyncCursorExt, AsyncCursorThunk, BoxAsyncCursor, CursorStream, ReadyCursor,
    StreamCursor,
};
pub use self::cursor::{
    BoxCursor, Cursor, CursorFactory, CursorIter, CursorThunk, EmptyCursor, IterCursor,
};
pub use self::error::{Result, ResultExt, SequenceError};
pub use self::handle::CursorHandle;
pub use self::kernel::{Feed, Kernel};
pub use self::step::Step;
