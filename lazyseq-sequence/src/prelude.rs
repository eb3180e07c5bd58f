// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the sequence types and every operator trait.
//!
//! ```
//! use lazyseq_sequence::prelude::*;
//!
//! let words = Sequence::from_vec(vec!["b", "a", "c"]).sorted().join(", ", "");
//! assert_eq!(words, "a, b, c");
//! ```
//!
//! # Contents
//!
//! ## Extension Traits (Operators)
//!
//! - [`SelectionExt`] - Which values are kept: `take`, `slice`, `nub`, `head`, `sample`, ...
//! - [`UnaryExt`] - Rearranging and expanding: `reverse`, `sorted`, `cycle`, `flat_map`, ...
//! - [`VariadicExt`] - Combining sequences: `concat`, `zip`, `product`, `difference`, ...
//! - [`ReductionExt`] - Aggregates: `sum`, `max`, `group_by`, `join`, ...
//! - [`ConversionExt`] - Windows and collections: `peephole`, `to_vec`, `to_set`
//! - [`PropertyExt`] - Queries: `has`, `index_of`, `is_empty`, `length`
//!
//! ## Types
//!
//! - [`Sequence`] / [`AsyncSequence`] - The sync and async sequences
//! - [`Producer`] - Custom sources
//! - [`CursorHandle`] - Short-circuit signal handed to callbacks
//! - [`SequenceError`] / [`Result`] - Errors

pub use crate::async_sequence::AsyncSequence;
pub use crate::conversions::ConversionExt;
pub use crate::properties::PropertyExt;
pub use crate::reductions::ReductionExt;
pub use crate::selections::SelectionExt;
pub use crate::sequence::{Producer, Sequence};
pub use crate::unary::UnaryExt;
pub use crate::variadic::VariadicExt;
pub use lazyseq_core::{Cursor, CursorHandle, Result, ResultExt, SequenceError};
