// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Record used to exercise the keyed operators (`group_by`, `greater_by`,
/// `sorted_by`, `difference_by`) where ties on `age` matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Person {
    pub name: &'static str,
    pub age: u32,
}

impl Person {
    #[must_use]
    pub const fn new(name: &'static str, age: u32) -> Self {
        Self { name, age }
    }

    /// Whether `self` and `other` fall into the same `age` group.
    #[must_use]
    pub const fn same_age(&self, other: &Self) -> bool {
        self.age == other.age
    }
}
