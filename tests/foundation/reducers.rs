//! Integration tests for the two digit-sum reducers
//!
//! The name reducer keeps any multiple of 11; the date reducer keeps a
//! first-pass total whose digits are all the same.

use numerology_foundation::{
    digit_sum, is_master_number, is_repdigit, reduce_date_digits, reduce_digit_total,
    reduce_name_sum, total_digits,
};
use proptest::prelude::*;

// =============================================================================
// Name Reducer
// =============================================================================

#[test]
fn name_reducer_examples() {
    assert_eq!(reduce_name_sum(12), 3);
    assert_eq!(reduce_name_sum(26), 8);
    assert_eq!(reduce_name_sum(11), 11);
    assert_eq!(reduce_name_sum(22), 22);
    assert_eq!(reduce_name_sum(33), 33);
    assert_eq!(reduce_name_sum(55), 55);
    // 38 -> 11, kept
    assert_eq!(reduce_name_sum(38), 11);
}

#[test]
fn name_reducer_zero() {
    assert_eq!(reduce_name_sum(0), 0);
}

// =============================================================================
// Date Reducer
// =============================================================================

#[test]
fn date_reducer_life_path() {
    // 1+9+9+0+1+1 = 21 -> 3
    assert_eq!(total_digits(&[1990, 1, 1]), 21);
    assert_eq!(reduce_date_digits(&[1990, 1, 1]), 3);
}

#[test]
fn date_reducer_keeps_first_pass_twenty_two() {
    // 2+0+2+2+9+7 = 22
    assert_eq!(reduce_date_digits(&[2022, 9, 7]), 22);
}

#[test]
fn date_reducer_keeps_eleven_on_first_pass_only() {
    // 2+0+0+0+1+8 = 11
    assert_eq!(reduce_date_digits(&[2000, 1, 8]), 11);
    // 1+9+9+9+1+2+2+9 = 42 -> 6
    assert_eq!(reduce_date_digits(&[1999, 12, 29]), 6);
    // 38 -> 11 -> 2
    assert_eq!(reduce_digit_total(38), 2);
}

#[test]
fn date_reducer_all_zero() {
    assert_eq!(reduce_date_digits(&[0, 0, 0]), 0);
}

#[test]
fn master_numbers() {
    for n in [11, 22, 33] {
        assert!(is_master_number(n));
        assert!(is_repdigit(n));
    }
    // any positive multiple of 11, not just 11/22/33
    assert!(is_master_number(44));
    assert!(is_master_number(99));
    assert_eq!(reduce_name_sum(44), 44);
    assert!(!is_master_number(0));
    assert!(!is_master_number(9));
    assert_eq!(digit_sum(2024), 8);
}

proptest! {
    #[test]
    fn name_reducer_fixed_points(sum in 0u32..100_000) {
        let r = reduce_name_sum(sum);
        prop_assert!(r <= 9 || r % 11 == 0);
        prop_assert_eq!(reduce_name_sum(r), r);
    }

    #[test]
    fn date_reducer_result_shape(y in 0u32..10_000, m in 0u32..13, d in 0u32..32) {
        let r = reduce_date_digits(&[y, m, d]);
        prop_assert!(r <= 9 || is_repdigit(r));
    }
}
