//! Date-derived numbers: life path, birthday, challenge, maturity, and
//! the personal-year series.
//!
//! All of them go through [`reduce_date_digits`], which keeps a first-pass
//! repdigit (`22`, `33`, `44`, ...) and otherwise reduces to one digit.

use numerology_foundation::{BirthDate, reduce_date_digits};

/// Default upper age for [`personal_year_numbers`].
pub const DEFAULT_MAX_AGE: u32 = 120;

/// Largest `max_age` a [`ReadingConfig`](crate::ReadingConfig) will use.
pub const MAX_AGE_LIMIT: u32 = 1000;

/// Life path number: every digit of year, month, and day.
#[must_use]
pub fn life_path_number(year: u32, month: u32, day: u32) -> u32 {
    reduce_date_digits(&[year, month, day])
}

/// Birthday number: the digits of the day alone.
#[must_use]
pub fn birthday_number(day: u32) -> u32 {
    reduce_date_digits(&[0, 0, day])
}

/// Challenge number: the digits of month and day.
#[must_use]
pub fn challenge_number(month: u32, day: u32) -> u32 {
    reduce_date_digits(&[0, month, day])
}

/// Maturity number: the digits of `life_path + destiny`.
#[must_use]
pub fn maturity_number(life_path: u32, destiny: u32) -> u32 {
    reduce_date_digits(&[life_path + destiny])
}

/// One row of the personal-year series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonalYear {
    /// Calendar year (`birth year + age`).
    pub year: u32,
    /// Age in that year.
    pub age: u32,
    /// The personal-year number.
    pub result: u32,
}

/// Personal-year numbers for ages `0..=max_age`, in age order.
///
/// Each entry reduces the digits of `(year + age, month, day)`. The series
/// has `max_age + 1` entries unless `year + age` would pass `u32::MAX`, in
/// which case it ends at the last representable year.
#[must_use]
pub fn personal_year_numbers(year: u32, month: u32, day: u32, max_age: u32) -> Vec<PersonalYear> {
    (0..=max_age)
        .map_while(|age| {
            let year = year.checked_add(age)?;
            Some(PersonalYear {
                year,
                age,
                result: reduce_date_digits(&[year, month, day]),
            })
        })
        .collect()
}

/// [`life_path_number`] for a [`BirthDate`].
#[must_use]
pub fn life_path_for(date: BirthDate) -> u32 {
    life_path_number(date.year, date.month, date.day)
}

/// [`personal_year_numbers`] for a [`BirthDate`].
#[must_use]
pub fn personal_years_for(date: BirthDate, max_age: u32) -> Vec<PersonalYear> {
    personal_year_numbers(date.year, date.month, date.day, max_age)
}
