//! Trace event and record types.

use numerology_engine::CoreNumber;
use numerology_foundation::BirthDate;

// =============================================================================
// Trace Event
// =============================================================================

/// Events recorded while turning inputs into a reading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// A name was romanized.
    Transliterated {
        /// The name as typed.
        input: String,
        /// The romanized result.
        spelling: String,
    },

    /// Input was refused at the boundary.
    InputRejected {
        /// The rejected input.
        input: String,
        /// The error message.
        reason: String,
    },

    /// A reading has started.
    ReadingStart {
        /// The spelling being scored.
        spelling: String,
        /// The birth date.
        birth: BirthDate,
    },

    /// A core number was computed.
    NumberComputed {
        /// Which number.
        number: CoreNumber,
        /// Its value.
        value: u32,
    },

    /// A reading has finished.
    ReadingEnd {
        /// Length of the personal-year series.
        personal_years: usize,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Transliterated { .. } => "transliterated",
            Self::InputRejected { .. } => "input-rejected",
            Self::ReadingStart { .. } => "reading-start",
            Self::NumberComputed { .. } => "number-computed",
            Self::ReadingEnd { .. } => "reading-end",
        }
    }

    /// Returns true if this is a reading boundary event.
    #[must_use]
    pub fn is_reading_boundary(&self) -> bool {
        matches!(self, Self::ReadingStart { .. } | Self::ReadingEnd { .. })
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A timestamped trace record.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Unique record ID within the session.
    pub id: u64,
    /// Sequence number of the reading this event belongs to.
    pub reading: u64,
    /// Timestamp in nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The trace event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, reading: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            reading,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}
