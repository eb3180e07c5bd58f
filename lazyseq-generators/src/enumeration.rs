// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Arithmetic progressions.

use core::fmt::Debug;
use lazyseq_core::{Cursor, Step};

/// Numbers that can drive an [`Enumeration`].
pub trait Numeric: Copy + PartialOrd + Debug + Send + Sync + 'static {
    const ZERO: Self;
    const ONE: Self;

    /// `self + step`, or `None` when the result is not representable.
    fn advance_by(self, step: Self) -> Option<Self>;

    /// `self - other`, used to derive a step from two consecutive values.
    fn difference(self, other: Self) -> Self;
}

macro_rules! impl_numeric_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn advance_by(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }

                fn difference(self, other: Self) -> Self {
                    self.wrapping_sub(other)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn advance_by(self, step: Self) -> Option<Self> {
                    let next = self + step;
                    next.is_finite().then_some(next)
                }

                fn difference(self, other: Self) -> Self {
                    self - other
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

/// `from, from + step, from + 2 * step, ...` up to an optional bound.
///
/// With a positive step the bound is an upper bound, with a negative step a lower
/// one. `inclusive` decides whether a value equal to the bound is produced.
/// Without a bound the enumeration runs until the next value is no longer
/// representable.
#[derive(Debug, Clone)]
pub struct Enumeration<N> {
    next: Option<N>,
    to: Option<N>,
    step: N,
    inclusive: bool,
}

impl<N: Numeric> Enumeration<N> {
    /// # Panics
    ///
    /// Panics if `step` is zero.
    pub fn new(from: N, to: Option<N>, step: N, inclusive: bool) -> Self {
        assert!(step != N::ZERO, "enumeration step must not be zero");
        Self {
            next: Some(from),
            to,
            step,
            inclusive,
        }
    }

    fn within_bound(&self, value: N) -> bool {
        let Some(to) = self.to else {
            return true;
        };
        match (self.step > N::ZERO, self.inclusive) {
            (true, true) => value <= to,
            (true, false) => value < to,
            (false, true) => value >= to,
            (false, false) => value > to,
        }
    }
}

impl<N: Numeric> Cursor for Enumeration<N> {
    type Item = N;

    fn advance(&mut self) -> Step<N> {
        let Some(value) = self.next.filter(|&value| self.within_bound(value)) else {
            self.next = None;
            return Step::Completed;
        };
        self.next = value.advance_by(self.step);
        Step::Produced(value)
    }

    fn close(&mut self) {
        self.next = None;
    }
}
