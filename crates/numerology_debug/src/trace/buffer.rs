//! Ring buffer for trace records.
//!
//! Keeps the most recent records, discarding the oldest when full.

use std::collections::VecDeque;

use super::record::{TraceEvent, TraceRecord};

/// A bounded buffer of trace records, oldest first.
#[derive(Clone, Debug)]
pub struct TraceBuffer {
    records: VecDeque<TraceRecord>,
    max_size: usize,
    next_id: u64,
}

impl TraceBuffer {
    /// Creates a new trace buffer with the given maximum size.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_size.min(1024)),
            max_size,
            next_id: 0,
        }
    }

    /// Pushes a new event, evicting the oldest record if over capacity.
    ///
    /// Returns the assigned record ID.
    pub fn push(&mut self, reading: u64, timestamp_ns: u64, event: TraceEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.records
            .push_back(TraceRecord::new(id, reading, timestamp_ns, event));
        while self.records.len() > self.max_size {
            self.records.pop_front();
        }

        id
    }

    /// Returns the number of records in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total records ever pushed, including evicted ones.
    #[must_use]
    pub fn total_recorded(&self) -> u64 {
        self.next_id
    }

    /// Iterates over records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter()
    }

    /// The most recent record.
    #[must_use]
    pub fn latest(&self) -> Option<&TraceRecord> {
        self.records.back()
    }

    /// The last `n` records, oldest first.
    #[must_use]
    pub fn last_n(&self, n: usize) -> Vec<&TraceRecord> {
        let skip = self.records.len().saturating_sub(n);
        self.records.iter().skip(skip).collect()
    }

    /// All records belonging to one reading.
    #[must_use]
    pub fn for_reading(&self, reading: u64) -> Vec<&TraceRecord> {
        self.records.iter().filter(|r| r.reading == reading).collect()
    }

    /// Removes every record; IDs keep counting up.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::new(10_000)
    }
}
