//! Share links that reproduce a reading.
//!
//! A link carries the spelling with its letters sorted and the birth date:
//! `https://example.com/?spel=aaaknt&birth=1990-01-01`. Every number is
//! independent of letter order, so the sorted spelling gives the same reading
//! without showing the name as typed.

use numerology_foundation::{BirthDate, Result, Spelling};
use numerology_kana::spelling_from_name;

/// Inputs recovered from a share query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareQuery {
    /// The `spel` parameter, if present.
    pub spelling: Option<Spelling>,
    /// The `birth` parameter, if present.
    pub birth: Option<BirthDate>,
}

impl ShareQuery {
    /// Both inputs, when the query carried both.
    #[must_use]
    pub fn complete(&self) -> Option<(&Spelling, BirthDate)> {
        Some((self.spelling.as_ref()?, self.birth?))
    }
}

/// Builds a share link. Any query already on `base` is replaced.
#[must_use]
pub fn share_link(base: &str, spelling: &Spelling, birth: BirthDate) -> String {
    let base = base.split('?').next().unwrap_or(base);
    format!("{base}?spel={}&birth={birth}", spelling.sorted())
}

/// Parses a share query, a full link, or a bare `key=value&...` string.
///
/// Unknown keys are ignored. A Latin `spel` is taken as is, since a sorted
/// spelling can put `n` before `p` and must not be re-romanized. Hiragana is
/// romanized as at the prompt.
///
/// # Errors
///
/// Returns the validation error for a `spel` or `birth` value that is present
/// but malformed.
pub fn parse_query(query: &str) -> Result<ShareQuery> {
    let query = match query.split_once('?') {
        Some((_, rest)) => rest,
        None => query,
    };

    let mut parsed = ShareQuery::default();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "spel" => parsed.spelling = Some(parse_spel(value)?),
            "birth" => parsed.birth = Some(BirthDate::parse(value)?),
            _ => {}
        }
    }
    Ok(parsed)
}

fn parse_spel(value: &str) -> Result<Spelling> {
    if value.chars().all(|c| c.is_ascii_lowercase()) {
        Spelling::new(value)
    } else {
        spelling_from_name(value)
    }
}
