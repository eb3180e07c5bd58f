// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyseq_sequence::prelude::*;

#[test]
fn test_range_exclusive_and_inclusive() {
    assert_eq!(Sequence::range(0, 10, 3, false).to_vec(), vec![0, 3, 6, 9]);
    assert_eq!(Sequence::range(0, 9, 3, false).to_vec(), vec![0, 3, 6]);
    assert_eq!(Sequence::range(0, 9, 3, true).to_vec(), vec![0, 3, 6, 9]);
}

#[test]
fn test_range_counts_down_with_negative_step() {
    assert_eq!(Sequence::range(10, 0, -3, false).to_vec(), vec![10, 7, 4, 1]);
    assert_eq!(Sequence::range(3, 0, -1, true).to_vec(), vec![3, 2, 1, 0]);
}

#[test]
fn test_range_with_wrong_direction_is_empty() {
    assert!(Sequence::range(5, 0, 1, false).to_vec().is_empty());
    assert!(Sequence::range(0, 5, -1, true).to_vec().is_empty());
}

#[test]
fn test_float_range() {
    let quarters = Sequence::range(0.0, 1.0, 0.25, false);
    assert_eq!(quarters.to_vec(), vec![0.0, 0.25, 0.5, 0.75]);
}

#[test]
#[should_panic(expected = "range step must not be zero")]
fn test_range_with_zero_step_panics() {
    let _ = Sequence::range(0, 10, 0, false);
}

#[test]
fn test_enum_from_then_to() {
    assert_eq!(
        Sequence::enum_from_then_to(1, 3, 9).to_vec(),
        vec![1, 3, 5, 7, 9]
    );
    assert_eq!(
        Sequence::enum_from_then_to(5, 4, 2).to_vec(),
        vec![5, 4, 3, 2]
    );
}

#[test]
fn test_enum_from_then_is_unbounded() {
    assert_eq!(
        Sequence::enum_from_then(0u32, 5).take(3).to_vec(),
        vec![0, 5, 10]
    );
    assert_eq!(
        Sequence::enum_from_then(0i64, -2).take(3).to_vec(),
        vec![0, -2, -4]
    );
}

#[test]
#[should_panic(expected = "range step from 5 to 3 is not representable")]
fn test_enum_from_then_to_descending_unsigned_panics() {
    let _ = Sequence::enum_from_then_to(5u32, 3, 0);
}

#[test]
#[should_panic(expected = "is not representable")]
fn test_enum_from_then_descending_unsigned_panics() {
    let _ = Sequence::enum_from_then(2u8, 1);
}

#[test]
fn test_enum_from_then_to_descending_signed() {
    assert_eq!(
        Sequence::enum_from_then_to(5i32, 3, 0).to_vec(),
        vec![5, 3, 1]
    );
}

#[test]
fn test_enum_from_to_and_enum_from() {
    assert_eq!(Sequence::enum_from_to(1, 4).to_vec(), vec![1, 2, 3, 4]);
    assert_eq!(Sequence::enum_from(7usize).take(3).to_vec(), vec![7, 8, 9]);
}

#[test]
fn test_enum_from_stops_at_type_max() {
    let tail = Sequence::enum_from(u8::MAX - 2).to_vec();
    assert_eq!(tail, vec![253, 254, 255]);
}
