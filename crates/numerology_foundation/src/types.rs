//! Validated inputs: [`Spelling`] and [`BirthDate`].

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A romanized name: a non-empty run of `a`-`z`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Spelling(String);

impl Spelling {
    /// Validates and wraps a spelling.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSpelling` for empty input and `InvalidCharacter` for
    /// the first character outside `a`-`z`.
    pub fn new(input: impl Into<String>) -> Result<Self> {
        let input = input.into();
        if input.is_empty() {
            return Err(Error::invalid_spelling(input, "spelling is empty"));
        }
        if let Some((position, ch)) = input
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_lowercase())
        {
            return Err(Error::invalid_character(ch, position));
        }
        Ok(Self(input))
    }

    /// The spelling as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the letters.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a `Spelling` is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The same letters in ascending order.
    ///
    /// Every derived number ignores letter order, so this hides the name
    /// without changing the reading.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut letters: Vec<char> = self.0.chars().collect();
        letters.sort_unstable();
        Self(letters.into_iter().collect())
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Spelling {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Spelling {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Spelling {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Spelling> for String {
    fn from(value: Spelling) -> Self {
        value.0
    }
}

/// A birth date as three independent digit sources.
///
/// No calendar validation is performed; `2023-02-31` is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BirthDate {
    /// Calendar year.
    pub year: u32,
    /// Month, 1-12 in well-formed input.
    pub month: u32,
    /// Day of month.
    pub day: u32,
}

impl BirthDate {
    /// Creates a birth date.
    #[must_use]
    pub const fn new(year: u32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Parses `YYYY-MM-DD` (leading zeros optional).
    ///
    /// # Errors
    ///
    /// Returns `InvalidBirthDate` unless the input is exactly three
    /// `-`-separated unsigned integers.
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(Error::invalid_birth_date(
                input,
                "expected YYYY-MM-DD",
            ));
        }

        let mut fields = [0u32; 3];
        for (slot, (part, name)) in fields
            .iter_mut()
            .zip(parts.iter().zip(["year", "month", "day"]))
        {
            *slot = part
                .parse()
                .map_err(|_| Error::invalid_birth_date(input, format!("bad {name}: '{part}'")))?;
        }

        Ok(Self::new(fields[0], fields[1], fields[2]))
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for BirthDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
