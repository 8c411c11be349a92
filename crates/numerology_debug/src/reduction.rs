//! Step-by-step digit-sum reduction.
//!
//! Mirrors the two reducers in `numerology_foundation::digits`, recording
//! every intermediate value and the rule that ended the reduction.

use std::fmt;

use numerology_foundation::{digit_sum, is_master_number, is_repdigit, total_digits};

/// Why a reduction stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Reached 0-9.
    SingleDigit,
    /// Name reducer: the value is a multiple of 11.
    MasterMultipleOfEleven,
    /// Date reducer: the first-pass sum has identical digits.
    Repdigit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleDigit => write!(f, "single digit"),
            Self::MasterMultipleOfEleven => write!(f, "master number (multiple of 11)"),
            Self::Repdigit => write!(f, "master number (repeated digit)"),
        }
    }
}

/// The values a reducer visited, first to last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReductionTrace {
    /// Starting sum followed by every reduced value. Never empty.
    pub steps: Vec<u32>,
    /// The rule that stopped the reduction.
    pub reason: StopReason,
}

impl ReductionTrace {
    /// The final value.
    #[must_use]
    pub fn result(&self) -> u32 {
        self.steps.last().copied().unwrap_or_default()
    }

    /// The starting sum.
    #[must_use]
    pub fn start(&self) -> u32 {
        self.steps.first().copied().unwrap_or_default()
    }
}

impl fmt::Display for ReductionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain: Vec<String> = self.steps.iter().map(u32::to_string).collect();
        write!(f, "{} ({})", chain.join(" -> "), self.reason)
    }
}

/// Traces the name reducer starting from a letter-score total.
#[must_use]
pub fn trace_name_sum(sum: u32) -> ReductionTrace {
    let mut steps = vec![sum];
    let mut current = sum;
    while current > 9 && !is_master_number(current) {
        current = digit_sum(current);
        steps.push(current);
    }
    let reason = if current > 9 {
        StopReason::MasterMultipleOfEleven
    } else {
        StopReason::SingleDigit
    };
    ReductionTrace { steps, reason }
}

/// Traces the date reducer over the digits of `parts`.
#[must_use]
pub fn trace_date_digits(parts: &[u32]) -> ReductionTrace {
    trace_digit_total(total_digits(parts))
}

/// Traces the date reducer from an already-summed total.
#[must_use]
pub fn trace_digit_total(sum: u32) -> ReductionTrace {
    let mut steps = vec![sum];
    if sum > 9 && is_repdigit(sum) {
        return ReductionTrace {
            steps,
            reason: StopReason::Repdigit,
        };
    }
    let mut current = sum;
    while current > 9 {
        current = digit_sum(current);
        steps.push(current);
    }
    ReductionTrace {
        steps,
        reason: StopReason::SingleDigit,
    }
}
