// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy, restartable sequences with a composable operator algebra.
//!
//! A [`Sequence`] describes how to produce values; it never holds them. Every
//! operator returns a new sequence without pulling anything, and every
//! traversal (`iter`, `to_vec`, `reduce`, ...) starts a fresh cursor, so the
//! same sequence can be traversed again and gives the same values.
//!
//! # Architecture
//!
//! - **[`Sequence`]**: a shared [`Producer`] plus the two primitives
//!   [`filtered_map`](Sequence::filtered_map) and [`reduce`](Sequence::reduce)
//! - **Extension traits**: each operator family is an extension trait built on
//!   the primitives, see [`prelude`]
//! - **[`AsyncSequence`]**: the same primitives over asynchronous cursors,
//!   running the same kernels
//!
//! ## Operator Categories
//!
//! ### Selection
//!
//! - **[`take`](SelectionExt::take)**, **[`slice`](SelectionExt::slice)**,
//!   **[`take_while`](SelectionExt::take_while)**: stop pulling as soon as the
//!   selection is over, closing upstream
//! - **[`nub`](SelectionExt::nub)**: first occurrence of every value
//! - **[`sample`](SelectionExt::sample)**: reservoir sampling
//!
//! ### Unary
//!
//! - **[`sorted`](UnaryExt::sorted)**, **[`reverse`](UnaryExt::reverse)**:
//!   materialize upstream on the first pull
//! - **[`buffered`](UnaryExt::buffered)**: memoized traversal
//! - **[`flat_map`](UnaryExt::flat_map)**, **[`cycle`](UnaryExt::cycle)**
//!
//! ### Variadic
//!
//! - **[`concat`](VariadicExt::concat)**, **[`zip_with`](VariadicExt::zip_with)**,
//!   **[`product`](VariadicExt::product)**
//! - **[`difference`](VariadicExt::difference)**,
//!   **[`intersection`](VariadicExt::intersection)**
//!
//! ### Terminals
//!
//! - [`ReductionExt`], [`ConversionExt`] and [`PropertyExt`], all folds over
//!   [`reduce`](Sequence::reduce)
//!
//! # Short-circuit
//!
//! Callbacks receive a [`CursorHandle`]. Closing it ends the traversal once the
//! current value is processed and closes every upstream cursor:
//!
//! ```
//! use lazyseq_sequence::prelude::*;
//!
//! let first_big = Sequence::enum_from(1u64).reduce(0, |_, v, _, handle| {
//!     if v * v > 50 {
//!         handle.close();
//!     }
//!     v
//! });
//!
//! assert_eq!(first_big, 8);
//! ```
//!
//! # Feature Flags
//!
//! - `std` (default): standard library support
//! - `json` (default): `serde_json` producers and [`Sequence::to_object`]
//! - `tracing`: route logging through `tracing`

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

extern crate alloc;

pub mod async_sequence;
pub mod conversions;
#[cfg(feature = "json")]
mod json;
pub mod prelude;
pub mod producers;
pub mod properties;
pub mod reductions;
pub mod selections;
pub mod sequence;
pub mod unary;
pub mod variadic;

// Re-export commonly used types
pub use async_sequence::AsyncSequence;
pub use conversions::ConversionExt;
pub use lazyseq_core::{
    AsyncCursor, BoxCursor, Cursor, CursorHandle, Result, ResultExt, SequenceError, Step,
};
pub use lazyseq_generators::Numeric;
pub use properties::PropertyExt;
pub use reductions::ReductionExt;
pub use selections::SelectionExt;
pub use sequence::{Producer, Sequence};
pub use unary::UnaryExt;
pub use variadic::VariadicExt;
