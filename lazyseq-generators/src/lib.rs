// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Generator library for lazyseq.
//!
//! Everything here is a building block that knows nothing about `Sequence`:
//!
//! - **Kernels** ([`FilteredMap`], [`Scan`], [`Peephole`], [`Slice`],
//!   [`TakeWhile`], [`DropWhile`]) hold per-traversal
//!   operator state and are run by the [`KernelCursor`] / [`AsyncKernelCursor`]
//!   drivers, so the sync and async flavors share a single implementation.
//! - **Cursors** ([`Concat`], [`ZipWith`], [`Product`], [`Combinations`],
//!   [`Permutations`], [`Cycle`], [`Repeat`], [`Iterate`], [`Enumeration`],
//!   [`Flatten`], [`BufferCursor`]) compose whole productions.
//!
//! Every cursor here closes what it started: on exhaustion, on `close`, and on
//! the short-circuit requested by a kernel through its `CursorHandle`.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

extern crate alloc;

pub mod buffered;
pub mod combinatorics;
pub mod concat;
pub mod cycle;
pub mod drive;
pub mod enumeration;
pub mod filtered_map;
pub mod flatten;
pub mod peephole;
pub mod product;
pub mod repeat;
pub mod scan;
pub mod selection;
pub mod zip;

pub use self::buffered::{BufferCursor, SharedBuffer};
pub use self::combinatorics::{Combinations, Permutations};
pub use self::concat::{AsyncConcat, Concat};
pub use self::cycle::Cycle;
pub use self::drive::{AsyncKernelCursor, KernelCursor};
pub use self::enumeration::{Enumeration, Numeric};
pub use self::filtered_map::FilteredMap;
pub use self::flatten::Flatten;
pub use self::peephole::Peephole;
pub use self::product::Product;
pub use self::repeat::{Iterate, Repeat};
pub use self::scan::Scan;
pub use self::selection::{DropWhile, Slice, TakeWhile};
pub use self::zip::{ZipPair, ZipWith};
