//! Trace output formatting.

use super::record::{TraceEvent, TraceRecord};

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records, one per line.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Formats trace records in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        use std::fmt::Write;
        let mut line = String::new();

        if self.show_ids {
            let _ = write!(line, "[{:06}] ", record.id);
        }
        let _ = write!(line, "R{:04} ", record.reading);
        if self.show_timestamps {
            let _ = write!(line, "{:>10} ", Self::format_timestamp(record.timestamp_ns));
        }

        match &record.event {
            TraceEvent::Transliterated { input, spelling } => {
                let _ = write!(line, "  ROMANIZE {input} -> {spelling}");
            }
            TraceEvent::InputRejected { input, reason } => {
                let _ = write!(line, "  REJECT {input:?}: {reason}");
            }
            TraceEvent::ReadingStart { spelling, birth } => {
                let _ = write!(line, "=== READING {spelling} {birth} ===");
            }
            TraceEvent::NumberComputed { number, value } => {
                let _ = write!(line, "    {number} = {value}");
            }
            TraceEvent::ReadingEnd { personal_years } => {
                let _ = write!(line, "=== END ({personal_years} personal years) ===");
            }
        }

        line
    }
}
