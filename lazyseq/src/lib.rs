// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Lazyseq
//!
//! Lazy, immutable and restartable sequences with a composable operator algebra.
//!
//! ## Overview
//!
//! A [`Sequence`] describes how to produce values rather than holding them.
//! Operators return new sequences and pull nothing; only terminal operations
//! (`to_vec`, `reduce`, `head`, ...) start a traversal. Every traversal is
//! independent, so the same sequence can be consumed any number of times.
//!
//! Short-circuiting goes through a [`CursorHandle`]: an operator or a terminal
//! that has seen enough closes it, and the whole chain stops pulling and
//! releases its upstream cursors.
//!
//! ## Crates
//!
//! - `lazyseq-core`: the cursor protocol, kernels, handles and errors
//! - `lazyseq-generators`: the cursors behind every operator
//! - `lazyseq-sequence`: [`Sequence`], [`AsyncSequence`] and the operator traits
//!
//! ## Quick Start
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let evens = Sequence::enum_from(1u64)
//!     .filter(|v| v % 2 == 0)
//!     .map(|v| v * v)
//!     .take(3);
//!
//! assert_eq!(evens.to_vec(), vec![4, 16, 36]);
//! assert_eq!(evens.sum(0), 56);
//! ```

pub use lazyseq_core::{
    AsyncCursor, BoxAsyncCursor, BoxCursor, Cursor, CursorHandle, IterCursor, Result, ResultExt,
    SequenceError, Step,
};
pub use lazyseq_generators::Numeric;
pub use lazyseq_sequence::{
    AsyncSequence, ConversionExt, Producer, PropertyExt, ReductionExt, SelectionExt, Sequence,
    UnaryExt, VariadicExt,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use lazyseq_sequence::prelude::*;
}
