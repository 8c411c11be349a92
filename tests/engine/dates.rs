//! Tests for date-derived numbers

use numerology_engine::{
    DEFAULT_MAX_AGE, birthday_number, challenge_number, life_path_number, maturity_number,
    personal_year_numbers,
};
use proptest::prelude::*;

#[test]
fn life_path_examples() {
    assert_eq!(life_path_number(1990, 1, 1), 3);
    // 2+0+2+2+0+9+0+7 = 22, kept
    assert_eq!(life_path_number(2022, 9, 7), 22);
    // 1+9+8+5+1+2+2+5 = 33, kept
    assert_eq!(life_path_number(1985, 12, 25), 33);
}

#[test]
fn birthday_and_challenge() {
    assert_eq!(birthday_number(1), 1);
    assert_eq!(birthday_number(29), 11);
    assert_eq!(birthday_number(28), 1);
    assert_eq!(challenge_number(1, 1), 2);
    assert_eq!(challenge_number(12, 31), 7);
}

#[test]
fn maturity_examples() {
    assert_eq!(maturity_number(3, 3), 6);
    // 11 + 18 = 29, digits 11, kept
    assert_eq!(maturity_number(11, 18), 11);
    // 11 + 11 = 22, digits 4
    assert_eq!(maturity_number(11, 11), 4);
    // 9 + 8 = 17 -> 8
    assert_eq!(maturity_number(9, 8), 8);
}

#[test]
fn personal_years_start_at_birth() {
    let years = personal_year_numbers(1990, 1, 1, DEFAULT_MAX_AGE);
    assert_eq!(years.len(), 121);
    assert_eq!(years[0].year, 1990);
    assert_eq!(years[0].age, 0);
    assert_eq!(years[0].result, life_path_number(1990, 1, 1));
    // 1+9+9+1+1+1 = 22
    assert_eq!(years[1].result, 22);
    assert_eq!(years[34].year, 2024);
    assert_eq!(years[34].result, 1);
}

#[test]
fn personal_years_end_at_last_representable_year() {
    let years = personal_year_numbers(u32::MAX - 1, 1, 1, DEFAULT_MAX_AGE);
    assert_eq!(years.len(), 2);
    assert_eq!(years[1].year, u32::MAX);
    assert_eq!(years[1].age, 1);
}

#[test]
fn personal_years_zero_max_age() {
    let years = personal_year_numbers(2000, 6, 15, 0);
    assert_eq!(years.len(), 1);
    assert_eq!(years[0].year, 2000);
}

proptest! {
    #[test]
    fn personal_years_are_contiguous(
        year in 1u32..3000,
        month in 1u32..13,
        day in 1u32..32,
        max_age in 0u32..150,
    ) {
        let years = personal_year_numbers(year, month, day, max_age);
        prop_assert_eq!(years.len(), max_age as usize + 1);
        for (i, entry) in years.iter().enumerate() {
            prop_assert_eq!(entry.age, i as u32);
            prop_assert_eq!(entry.year, year + entry.age);
            prop_assert_eq!(entry.result, life_path_number(entry.year, month, day));
        }
    }
}
