// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the lazyseq workspace.
//!
//! This crate is meant for development and testing only.
//!
//! # Key Types
//!
//! ## `Probe`
//!
//! Counts the pulls a traversal makes and records whether it was closed. This
//! is how laziness and short-circuit behavior are observed from the outside:
//!
//! ```rust
//! use lazyseq_sequence::prelude::*;
//! use lazyseq_test_utils::Probe;
//!
//! let probe = Probe::new();
//! let firsts = probe.naturals().take(3);
//! assert_eq!(probe.advances(), 0);
//!
//! assert_eq!(firsts.to_vec(), vec![0, 1, 2]);
//! assert_eq!(probe.advances(), 3);
//! assert!(probe.closed());
//! ```
//!
//! ## Test Fixtures
//!
//! - `Person` - A keyed record with deliberate `age` ties
//! - `test_data` - Pre-built people and word lists
//!
//! # Module Organization
//!
//! - `probe` - `Probe` and `ProbeCursor`
//! - `person` - The `Person` fixture
//! - `test_data` - Fixture constructors
//! - `helpers` - Assertion helpers

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod person;
pub mod probe;
pub mod test_data;

// Re-export commonly used test utilities
pub use helpers::{assert_restartable, collect_stream};
pub use person::Person;
pub use probe::{Probe, ProbeCursor};
