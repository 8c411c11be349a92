//! Life lessons: the bucket values a spelling never touches.

use numerology_foundation::letter_bucket;

/// Values in 1-9 with no letter in the spelling, ascending.
#[must_use]
pub fn life_lesson_numbers(spelling: &str) -> Vec<u32> {
    let mut present = [false; 10];
    for ch in spelling.chars() {
        present[letter_bucket(ch) as usize] = true;
    }
    (1..=9).filter(|&n| !present[n as usize]).collect()
}
