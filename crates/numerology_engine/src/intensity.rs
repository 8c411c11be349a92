//! Intensity ranking: how often each bucket appears in a spelling.

use std::collections::BTreeMap;

use numerology_foundation::letter_bucket;

/// One bucket and how many letters of the spelling fall in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntensityEntry {
    /// Bucket value (1-9 for well-formed spellings).
    pub value: u32,
    /// Occurrences in the spelling.
    pub count: u32,
}

/// The ranking plus its one-line summary.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntensityNumbers {
    /// Sorted by count descending, then value ascending.
    pub ranking: Vec<IntensityEntry>,
    /// Values sharing a count joined with `=`, count groups joined with `>`.
    ///
    /// `tanaka` gives `1>2>5`.
    pub text: String,
}

impl IntensityNumbers {
    /// Highest count in the ranking, 0 when empty.
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.ranking.first().map_or(0, |e| e.count)
    }

    /// Values tied for the highest count.
    #[must_use]
    pub fn dominant(&self) -> Vec<u32> {
        let max = self.max_count();
        self.ranking
            .iter()
            .take_while(|e| e.count == max)
            .map(|e| e.value)
            .collect()
    }

    /// Count for a bucket value, 0 if absent.
    #[must_use]
    pub fn count_of(&self, value: u32) -> u32 {
        self.ranking
            .iter()
            .find(|e| e.value == value)
            .map_or(0, |e| e.count)
    }
}

/// Tallies buckets and ranks them.
#[must_use]
pub fn intensity_numbers(spelling: &str) -> IntensityNumbers {
    let mut counts: BTreeMap<u32, u32> = BTreeMap::new();
    for ch in spelling.chars() {
        *counts.entry(letter_bucket(ch)).or_insert(0) += 1;
    }

    let mut ranking: Vec<IntensityEntry> = counts
        .into_iter()
        .map(|(value, count)| IntensityEntry { value, count })
        .collect();
    ranking.sort_by(|a, b| b.count.cmp(&a.count).then(a.value.cmp(&b.value)));

    let text = summarize(&ranking);
    IntensityNumbers { ranking, text }
}

fn summarize(ranking: &[IntensityEntry]) -> String {
    ranking
        .chunk_by(|a, b| a.count == b.count)
        .map(|group| {
            group
                .iter()
                .map(|e| e.value.to_string())
                .collect::<Vec<_>>()
                .join("=")
        })
        .collect::<Vec<_>>()
        .join(">")
}
