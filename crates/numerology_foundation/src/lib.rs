//! Core types, letter buckets, and digit-sum reducers for numerology.
//!
//! This crate provides:
//! - [`Spelling`] and [`BirthDate`] - Validated inputs
//! - [`letters`] - The nine letter buckets and the vowel table
//! - [`digits`] - The name reducer and the date reducer
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digits;
pub mod error;
pub mod letters;
pub mod types;

pub use digits::{
    digit_sum, is_master_number, is_repdigit, reduce_date_digits, reduce_digit_total,
    reduce_name_sum, total_digits,
};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use letters::{LETTER_GROUPS, VOWELS, is_vowel, letter_bucket, vowel_value};
pub use types::{BirthDate, Spelling};
