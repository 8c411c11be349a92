//! Event tracing for readings.
//!
//! Records what happened while inputs were romanized, validated, and scored.
//! Recording is a no-op when the tracer is disabled.
//!
//! # Example
//!
//! ```text
//! R0001 === READING tanaka 1990-01-01 ===
//! R0001     life-path = 3
//! R0001     destiny = 3
//! ...
//! R0001 === END (121 personal years) ===
//! ```

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::TraceBuffer;
pub use format::{HumanFormatter, TraceFormatter};
pub use record::{TraceEvent, TraceRecord};

use std::io::{self, Write};
use std::time::Instant;

use numerology_engine::Reading;

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (records are still buffered).
    #[default]
    None,
    /// Write each record to stderr as it is recorded.
    Stderr,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in the buffer.
    pub buffer_size: usize,
    /// Where to output traces.
    pub output: TraceOutput,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 10_000,
            output: TraceOutput::None,
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to output to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records reading events into a bounded buffer.
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    current_reading: u64,
    start_time: Instant,
    formatter: HumanFormatter,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            current_reading: 0,
            start_time: Instant::now(),
            formatter: HumanFormatter::new(),
        }
    }

    /// Creates a disabled tracer.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates an enabled tracer that writes to stderr.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self::new(TracerConfig::new().enabled().to_stderr())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Sets the trace output destination.
    pub fn set_output(&mut self, output: TraceOutput) {
        self.config.output = output;
    }

    /// Sequence number of the most recent reading.
    #[must_use]
    pub fn current_reading(&self) -> u64 {
        self.current_reading
    }

    /// Records a trace event.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled {
            return;
        }
        self.record_internal(event);
    }

    fn record_internal(&mut self, event: TraceEvent) {
        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        self.buffer.push(self.current_reading, timestamp_ns, event);

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.latest() {
                let line = self.formatter.format(record);
                let _ = writeln!(io::stderr(), "{line}");
            }
        }
    }

    /// Formats records with the human formatter.
    #[must_use]
    pub fn format_records(&self, records: &[&TraceRecord]) -> String {
        self.formatter.format_many(records)
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Clears the trace buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    // -------------------------------------------------------------------------
    // Convenience methods for common events
    // -------------------------------------------------------------------------

    /// Records a romanization.
    #[inline]
    pub fn transliterated(&mut self, input: &str, spelling: &str) {
        self.record(TraceEvent::Transliterated {
            input: input.to_string(),
            spelling: spelling.to_string(),
        });
    }

    /// Records rejected input.
    #[inline]
    pub fn input_rejected(&mut self, input: &str, reason: impl ToString) {
        self.record(TraceEvent::InputRejected {
            input: input.to_string(),
            reason: reason.to_string(),
        });
    }

    /// Records a whole reading: a start marker, every core number, and an end
    /// marker. Starts a new reading sequence number.
    pub fn reading(&mut self, reading: &Reading) {
        if !self.config.enabled {
            return;
        }
        self.current_reading += 1;
        self.record(TraceEvent::ReadingStart {
            spelling: reading.spelling.to_string(),
            birth: reading.birth,
        });
        for (number, value) in reading.core_numbers() {
            self.record(TraceEvent::NumberComputed { number, value });
        }
        self.record(TraceEvent::ReadingEnd {
            personal_years: reading.personal_years.len(),
        });
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

// =============================================================================
// Tests
// =============================================================================
