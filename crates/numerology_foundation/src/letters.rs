//! Letter-to-number mapping.
//!
//! Every lowercase Latin letter belongs to exactly one of nine buckets
//! (1-9). Bucket 0 holds no letters and doubles as the "no match" value for
//! anything outside `a`-`z`.
//!
//! ```text
//! 1: a j s    4: d m v    7: g p y
//! 2: b k t    5: e n w    8: h q z
//! 3: c l u    6: f o x    9: i r
//! ```

/// The fixed bucket definitions, indexed by bucket number.
///
/// Bucket 9 has two members; 26 letters do not divide evenly into nine.
pub const LETTER_GROUPS: [&str; 10] = [
    "", "ajs", "bkt", "clu", "dmv", "enw", "fox", "gpy", "hqz", "ir",
];

/// The vowels, which feed the soul number.
pub const VOWELS: &str = "aiueo";

/// Reverse lookup from `letter - b'a'` to bucket, built from [`LETTER_GROUPS`].
const BUCKET_BY_LETTER: [u8; 26] = build_reverse_table();

#[allow(clippy::cast_possible_truncation)]
const fn build_reverse_table() -> [u8; 26] {
    let mut table = [0u8; 26];
    let mut bucket = 0;
    while bucket < LETTER_GROUPS.len() {
        let members = LETTER_GROUPS[bucket].as_bytes();
        let mut i = 0;
        while i < members.len() {
            table[(members[i] - b'a') as usize] = bucket as u8;
            i += 1;
        }
        bucket += 1;
    }
    table
}

/// Returns the bucket (1-9) for a lowercase letter, or 0 for anything else.
#[must_use]
pub fn letter_bucket(ch: char) -> u32 {
    if ch.is_ascii_lowercase() {
        u32::from(BUCKET_BY_LETTER[(ch as u8 - b'a') as usize])
    } else {
        0
    }
}

/// Returns true for `a`, `i`, `u`, `e`, `o`.
#[must_use]
pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(ch)
}

/// Value of a vowel for the soul number.
///
/// This is its own table, not the bucket mapping: `a=1 u=3 e=5 o=6 i=9`.
#[must_use]
pub fn vowel_value(ch: char) -> Option<u32> {
    match ch {
        'a' => Some(1),
        'u' => Some(3),
        'e' => Some(5),
        'o' => Some(6),
        'i' => Some(9),
        _ => None,
    }
}
