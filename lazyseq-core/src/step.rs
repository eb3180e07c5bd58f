// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// The outcome of one `advance()` on a cursor.
///
/// Once a cursor has returned `Completed` it keeps returning `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<T> {
    /// The next value of the production
    Produced(T),
    /// The production is exhausted or was closed
    Completed,
}

impl<T> Step<T> {
    /// Returns `true` if this is a `Produced`.
    pub const fn is_produced(&self) -> bool {
        matches!(self, Step::Produced(_))
    }

    /// Returns `true` if this is `Completed`.
    pub const fn is_completed(&self) -> bool {
        matches!(self, Step::Completed)
    }

    /// Converts from `Step<T>` to `Option<T>`.
    pub fn produced(self) -> Option<T> {
        match self {
            Step::Produced(v) => Some(v),
            Step::Completed => None,
        }
    }

    /// Maps a `Step<T>` to `Step<U>` by applying a function to the produced value.
    pub fn map<U, F>(self, f: F) -> Step<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Step::Produced(v) => Step::Produced(f(v)),
            Step::Completed => Step::Completed,
        }
    }

    /// Returns the produced value, panicking on `Completed`.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Completed`.
    pub fn unwrap(self) -> T {
        match self {
            Step::Produced(v) => v,
            Step::Completed => panic!("called `Step::unwrap()` on a `Completed` value"),
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Step::Produced(v),
            None => Step::Completed,
        }
    }
}

impl<T> From<Step<T>> for Option<T> {
    fn from(step: Step<T>) -> Self {
        step.produced()
    }
}
