//! Name input classification.
//!
//! A name is accepted either as all-hiragana or as all-lowercase romaji.
//! Mixed scripts are rejected before transliteration.

use numerology_foundation::{Error, Result, Spelling};

use crate::transliterator::transliterate;

/// A raw name, classified by script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameInput {
    /// Hiragana only (`ぁ`..=`ん`).
    Hiragana(String),
    /// Lowercase Latin letters only.
    Latin(String),
}

impl NameInput {
    /// Classifies raw input.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSpelling` for empty input or input that is neither
    /// all hiragana nor all lowercase Latin.
    pub fn classify(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::invalid_spelling(raw, "name is empty"));
        }
        if raw.chars().all(is_hiragana) {
            return Ok(Self::Hiragana(raw.to_string()));
        }
        if raw.chars().all(|c| c.is_ascii_lowercase()) {
            return Ok(Self::Latin(raw.to_string()));
        }
        Err(Error::invalid_spelling(
            raw,
            "use hiragana only or lowercase letters only",
        ))
    }

    /// The input as typed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hiragana(s) | Self::Latin(s) => s,
        }
    }

    /// Produces the romanized spelling.
    ///
    /// Latin input goes through the transliterator as well, so the nasal
    /// rule applies to it (`shinbun` becomes `shimbun`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidCharacter` when a kana has no romanization (a lone
    /// small `っ` or `ゃ`, for example).
    pub fn to_spelling(&self) -> Result<Spelling> {
        Spelling::new(transliterate(self.as_str()))
    }
}

/// Parses and romanizes a name in one step.
///
/// # Errors
///
/// See [`NameInput::classify`] and [`NameInput::to_spelling`].
pub fn spelling_from_name(raw: &str) -> Result<Spelling> {
    NameInput::classify(raw)?.to_spelling()
}

fn is_hiragana(ch: char) -> bool {
    ('\u{3041}'..='\u{3093}').contains(&ch)
}
