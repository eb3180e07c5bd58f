// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the lazyseq library
//!
//! Only three things can go wrong inside the library itself: asking a terminal
//! operation for a value an empty production cannot supply, asking a producer
//! for a capability it does not have, and building a producer from a source of
//! the wrong shape. Errors raised by user callbacks are never wrapped here; see
//! `try_reduce` on the sequence types.
//!
//! # Examples
//!
//! ```
//! use lazyseq_core::{Result, SequenceError};
//!
//! fn first_even(values: &[i32]) -> Result<i32> {
//!     values
//!         .iter()
//!         .copied()
//!         .find(|v| v % 2 == 0)
//!         .ok_or_else(|| SequenceError::empty_sequence("no even value"))
//! }
//!
//! assert!(first_even(&[1, 3]).is_err());
//! ```

/// Root error type for all lazyseq operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// A terminal operation needed a value but the production was empty
    ///
    /// Raised by `head`, `get` and `last_value` when no default is supplied.
    #[error("Empty sequence: {context}")]
    EmptySequence {
        /// What was being looked for
        context: String,
    },

    /// A capability operator was invoked on a producer that does not supply it
    #[error("Operation `{operation}` is not implemented for `{variant}`")]
    UnimplementedOperation {
        /// Name of the capability
        operation: &'static str,
        /// Name of the producer variant
        variant: &'static str,
    },

    /// A producer was given a source of the wrong shape
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Shape the producer accepts
        expected: &'static str,
        /// Description of what was supplied
        found: String,
    },
}

impl SequenceError {
    /// Create an empty-sequence error with the given context
    pub fn empty_sequence(context: impl Into<String>) -> Self {
        Self::EmptySequence {
            context: context.into(),
        }
    }

    /// Create an unimplemented-operation error
    pub const fn unimplemented(operation: &'static str, variant: &'static str) -> Self {
        Self::UnimplementedOperation { operation, variant }
    }

    /// Create a type-mismatch error
    pub fn type_mismatch(expected: &'static str, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected,
            found: found.into(),
        }
    }

    /// Returns `true` if this error reports an empty production
    #[must_use]
    pub const fn is_empty_sequence(&self) -> bool {
        matches!(self, Self::EmptySequence { .. })
    }
}

/// Specialized Result type for lazyseq operations
pub type Result<T> = std::result::Result<T, SequenceError>;

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Prefix the context of an empty-sequence error
    ///
    /// Other variants already carry their own description and pass through
    /// unchanged.
    ///
    /// # Errors
    /// Returns `Err(SequenceError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| match e {
            SequenceError::EmptySequence { context: inner } => SequenceError::EmptySequence {
                context: format!("{}: {inner}", context.into()),
            },
            other => other,
        })
    }
}
