//! Introspection for numerology readings.
//!
//! This crate provides:
//! - [`reduction`] - step-by-step digit-sum reductions
//! - [`explain`] - per-letter and per-part breakdowns of each core number
//! - [`trace`] - a bounded event tracer for readings

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod explain;
pub mod reduction;
pub mod trace;

pub use explain::{Contribution, Explanation, explain, explain_all};
pub use reduction::{ReductionTrace, StopReason, trace_date_digits, trace_digit_total, trace_name_sum};
pub use trace::{
    HumanFormatter, TraceBuffer, TraceEvent, TraceFormatter, TraceOutput, TraceRecord, Tracer,
    TracerConfig,
};
