//! Explanations for core numbers.
//!
//! Answers "why is my destiny 3?" by listing what each letter or date part
//! contributed and how the total was reduced.
//!
//! # Example
//!
//! ```text
//! destiny = 3
//!   t=2 a=1 n=5 a=1 k=2 a=1
//!   12 -> 3 (single digit)
//! ```

use std::fmt;

use numerology_engine::{CoreNumber, destiny_number, life_path_number};
use numerology_foundation::{BirthDate, Spelling, digit_sum, is_vowel, letter_bucket, vowel_value};

use crate::reduction::{ReductionTrace, trace_date_digits, trace_name_sum};

// =============================================================================
// Contribution
// =============================================================================

/// One input to a sum: a letter, or a date part with its digit sum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contribution {
    /// What was scored (`"t"`, `"year 1990"`, ...).
    pub label: String,
    /// Points it added to the total.
    pub value: u32,
}

impl Contribution {
    /// Creates a contribution.
    #[must_use]
    pub fn new(label: impl Into<String>, value: u32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

// =============================================================================
// Explanation
// =============================================================================

/// How a core number was computed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Explanation {
    /// The number explained.
    pub number: CoreNumber,
    /// Inputs to the starting sum, in input order.
    pub contributions: Vec<Contribution>,
    /// The reduction from starting sum to result.
    pub trace: ReductionTrace,
}

impl Explanation {
    /// The final value.
    #[must_use]
    pub fn result(&self) -> u32 {
        self.trace.result()
    }

    /// Sum of all contributions.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.contributions.iter().map(|c| c.value).sum()
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} = {}", self.number, self.result())?;
        let parts: Vec<String> = self
            .contributions
            .iter()
            .map(|c| format!("{}={}", c.label, c.value))
            .collect();
        if !parts.is_empty() {
            writeln!(f, "  {}", parts.join(" "))?;
        }
        write!(f, "  {}", self.trace)
    }
}

/// Explains one core number for the given inputs.
#[must_use]
pub fn explain(number: CoreNumber, spelling: &Spelling, birth: BirthDate) -> Explanation {
    let letters = || spelling.letters();
    match number {
        CoreNumber::Destiny => name_explanation(
            number,
            letters()
                .map(|c| Contribution::new(c, letter_bucket(c)))
                .collect(),
        ),
        CoreNumber::Soul => name_explanation(
            number,
            letters()
                .filter_map(|c| vowel_value(c).map(|v| Contribution::new(c, v)))
                .collect(),
        ),
        CoreNumber::Personality => name_explanation(
            number,
            letters()
                .filter(|&c| !is_vowel(c))
                .map(|c| Contribution::new(c, letter_bucket(c)))
                .collect(),
        ),
        CoreNumber::LifePath => date_explanation(
            number,
            &[("year", birth.year), ("month", birth.month), ("day", birth.day)],
        ),
        CoreNumber::Birthday => date_explanation(number, &[("day", birth.day)]),
        CoreNumber::Challenge => {
            date_explanation(number, &[("month", birth.month), ("day", birth.day)])
        }
        CoreNumber::Maturity => {
            let life_path = life_path_number(birth.year, birth.month, birth.day);
            let destiny = destiny_number(spelling.as_str());
            Explanation {
                number,
                contributions: vec![
                    Contribution::new("life-path", life_path),
                    Contribution::new("destiny", destiny),
                ],
                trace: trace_date_digits(&[life_path + destiny]),
            }
        }
    }
}

/// Explains every core number, in display order.
#[must_use]
pub fn explain_all(spelling: &Spelling, birth: BirthDate) -> Vec<Explanation> {
    CoreNumber::ALL
        .into_iter()
        .map(|n| explain(n, spelling, birth))
        .collect()
}

fn name_explanation(number: CoreNumber, contributions: Vec<Contribution>) -> Explanation {
    let total = contributions.iter().map(|c| c.value).sum();
    Explanation {
        number,
        contributions,
        trace: trace_name_sum(total),
    }
}

fn date_explanation(number: CoreNumber, parts: &[(&str, u32)]) -> Explanation {
    let contributions = parts
        .iter()
        .map(|(name, part)| Contribution::new(format!("{name} {part}"), digit_sum(*part)))
        .collect();
    let values: Vec<u32> = parts.iter().map(|(_, part)| *part).collect();
    Explanation {
        number,
        contributions,
        trace: trace_date_digits(&values),
    }
}
