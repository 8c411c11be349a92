//! Hiragana to romaji transliteration.
//!
//! Scans left to right, preferring a two-character digraph over a single
//! character. Characters with no table entry pass through unchanged, so
//! romaji input comes out as it went in (apart from the nasal rule below).
//!
//! A bare `n` that is followed by a syllable starting with `b`, `m`, or `p`
//! is written `m`: `しんぶん` becomes `shimbun`. The rule looks only at the
//! single character after the `n`.

use crate::syllables::{lookup, lookup_char};

/// One emitted unit of the transliteration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Syllable {
    /// The kana (or passthrough characters) consumed.
    pub source: String,
    /// The romanization written for it.
    pub roman: String,
}

/// Converts hiragana into a romanized spelling.
pub struct Transliterator;

impl Transliterator {
    /// Splits the input into syllables with their romanizations.
    #[must_use]
    pub fn syllables(input: &str) -> Vec<Syllable> {
        let chars: Vec<char> = input.chars().collect();
        let mut syllables = Vec::with_capacity(chars.len());
        let mut i = 0;

        while i < chars.len() {
            let pair: Option<String> = chars.get(i..i + 2).map(|p| p.iter().collect());
            let digraph = pair.as_deref().and_then(lookup);
            let (source, mut roman) = match (pair, digraph) {
                (Some(pair), Some(roman)) => {
                    i += 1;
                    (pair, roman.to_string())
                }
                _ => (chars[i].to_string(), romanize_char(chars[i])),
            };

            if roman == "n" {
                if let Some(&next) = chars.get(i + 1) {
                    if starts_bilabial(&romanize_char(next)) {
                        roman = "m".to_string();
                    }
                }
            }

            syllables.push(Syllable { source, roman });
            i += 1;
        }

        syllables
    }

    /// Transliterates the input into a single string.
    #[must_use]
    pub fn transliterate(input: &str) -> String {
        Self::syllables(input)
            .into_iter()
            .map(|s| s.roman)
            .collect()
    }
}

/// Shorthand for [`Transliterator::transliterate`].
#[must_use]
pub fn transliterate(input: &str) -> String {
    Transliterator::transliterate(input)
}

fn romanize_char(ch: char) -> String {
    lookup_char(ch).map_or_else(|| ch.to_string(), str::to_string)
}

fn starts_bilabial(roman: &str) -> bool {
    matches!(roman.chars().next(), Some('b' | 'm' | 'p'))
}
