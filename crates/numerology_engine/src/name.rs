//! Name-derived numbers: destiny, soul, and personality.
//!
//! All three score letters and reduce the total with
//! [`reduce_name_sum`], which keeps every multiple of 11.
//!
//! These take `&str` rather than [`Spelling`](numerology_foundation::Spelling)
//! so callers can score partial input. Characters outside `a`-`z` score 0.

use numerology_foundation::{is_vowel, letter_bucket, reduce_name_sum, vowel_value};

/// Destiny number: every letter, scored by bucket.
#[must_use]
pub fn destiny_number(spelling: &str) -> u32 {
    reduce_name_sum(spelling.chars().map(letter_bucket).sum())
}

/// Soul number: vowels only, scored by the vowel table.
#[must_use]
pub fn soul_number(spelling: &str) -> u32 {
    reduce_name_sum(spelling.chars().filter_map(vowel_value).sum())
}

/// Personality number: everything that is not a vowel, scored by bucket.
#[must_use]
pub fn personality_number(spelling: &str) -> u32 {
    reduce_name_sum(
        spelling
            .chars()
            .filter(|&c| !is_vowel(c))
            .map(letter_bucket)
            .sum(),
    )
}
