// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::person::Person;
use lazyseq_sequence::Sequence;

pub const fn person_alice() -> Person {
    Person::new("Alice", 25)
}

pub const fn person_bob() -> Person {
    Person::new("Bob", 30)
}

pub const fn person_charlie() -> Person {
    Person::new("Charlie", 35)
}

pub const fn person_diane() -> Person {
    Person::new("Diane", 30)
}

/// Alice, Bob, Charlie and Diane, in that order. Bob and Diane share an age.
pub fn people() -> Sequence<Person> {
    Sequence::from_vec(vec![
        person_alice(),
        person_bob(),
        person_charlie(),
        person_diane(),
    ])
}

pub fn words() -> Sequence<&'static str> {
    Sequence::from_vec(vec!["apple", "banana", "cherry", "avocado", "blueberry"])
}
