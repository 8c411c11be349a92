//! Derived numbers, intensity rankings, life lessons, and personal years.
//!
//! This crate provides:
//! - [`name`] - Destiny, soul, and personality numbers
//! - [`date`] - Life path, birthday, challenge, maturity, personal years
//! - [`intensity`] - Bucket frequency ranking
//! - [`lesson`] - Buckets missing from a spelling
//! - [`Reading`] - Everything at once for one name and birth date
//!
//! Every function is pure; the same inputs always give the same output.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod date;
pub mod intensity;
pub mod lesson;
pub mod name;
pub mod reading;

pub use date::{
    DEFAULT_MAX_AGE, MAX_AGE_LIMIT, PersonalYear, birthday_number, challenge_number,
    life_path_number, maturity_number, personal_year_numbers,
};
pub use intensity::{IntensityEntry, IntensityNumbers, intensity_numbers};
pub use lesson::life_lesson_numbers;
pub use name::{destiny_number, personality_number, soul_number};
pub use reading::{CoreNumber, Reading, ReadingConfig};
