//! Plain-text tables for a [`Reading`].
//!
//! Three tables, matching what a reading shows:
//!
//! - core numbers with their label, meaning, and overview
//! - intensity ranking, with life lessons appended as count-0 rows
//! - personal years, current year repeated first
//!
//! Emphasised rows are wrapped in ANSI bold when highlighting is on and
//! marked with `*` otherwise.

use std::fmt::Write;

use numerology_engine::Reading;

use crate::annotations::{core_label, core_meaning, number_overview, unlucky_year_label};
use crate::share::share_link;

/// Report rendering options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    /// Emphasise rows with ANSI bold instead of a `*` marker.
    pub highlight: bool,
    /// Include the personal-year table.
    pub show_years: bool,
    /// Base URL for a share link; omitted when `None`.
    pub share_base: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            highlight: true,
            show_years: true,
            share_base: None,
        }
    }
}

impl ReportConfig {
    /// Creates a report configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to turn highlighting on or off.
    #[must_use]
    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    /// Builder method to include or drop the personal-year table.
    #[must_use]
    pub fn with_years(mut self, show_years: bool) -> Self {
        self.show_years = show_years;
        self
    }

    /// Builder method to append a share link.
    #[must_use]
    pub fn with_share_base(mut self, base: impl Into<String>) -> Self {
        self.share_base = Some(base.into());
        self
    }
}

fn overview(n: u32) -> &'static str {
    number_overview(n).unwrap_or("-")
}

fn row(out: &mut String, cells: &[String], emphasised: bool, config: &ReportConfig) {
    let line = cells.join(" | ");
    let _ = if config.highlight {
        if emphasised {
            writeln!(out, "  \x1b[1m{line}\x1b[0m")
        } else {
            writeln!(out, "  {line}")
        }
    } else {
        let marker = if emphasised { '*' } else { ' ' };
        writeln!(out, "{marker} {line}")
    };
}

fn header(out: &mut String, cells: &[&str]) {
    let _ = writeln!(out, "  {}", cells.join(" | "));
}

/// Core numbers in display order.
#[must_use]
pub fn core_table(reading: &Reading, config: &ReportConfig) -> String {
    let mut out = String::new();
    header(&mut out, &["", "説明", "ナンバー", "概要"]);
    for (number, value) in reading.core_numbers() {
        row(
            &mut out,
            &[
                core_label(number).to_string(),
                core_meaning(number).to_string(),
                value.to_string(),
                overview(value).to_string(),
            ],
            false,
            config,
        );
    }
    out
}

/// Intensity ranking followed by life lessons.
///
/// Rows at the highest count are emphasised, as is every life lesson.
#[must_use]
pub fn intensity_table(reading: &Reading, config: &ReportConfig) -> String {
    let mut out = String::new();
    let max = reading.intensity.max_count();
    header(&mut out, &["能力値", "ナンバー", "概要"]);
    for entry in &reading.intensity.ranking {
        row(
            &mut out,
            &[
                entry.count.to_string(),
                entry.value.to_string(),
                overview(entry.value).to_string(),
            ],
            entry.count == max,
            config,
        );
    }
    for &lesson in &reading.life_lessons {
        row(
            &mut out,
            &["0".to_string(), lesson.to_string(), overview(lesson).to_string()],
            true,
            config,
        );
    }
    out
}

/// Personal years from age 0, with the current year repeated as the first row.
#[must_use]
pub fn years_table(reading: &Reading, config: &ReportConfig) -> String {
    let mut out = String::new();
    header(&mut out, &["西暦", "年齢", "ナンバー", "厄年", "概要"]);
    let current = reading.current_personal_year();
    let lead = current.into_iter();
    for year in lead.chain(reading.personal_years.iter()) {
        row(
            &mut out,
            &[
                year.year.to_string(),
                year.age.to_string(),
                year.result.to_string(),
                unlucky_year_label(year.age).unwrap_or("").to_string(),
                overview(year.result).to_string(),
            ],
            year.year == reading.current_year,
            config,
        );
    }
    out
}

/// The full report: heading, every table the config asks for, and the
/// share link.
#[must_use]
pub fn render(reading: &Reading, config: &ReportConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", reading.spelling, reading.birth);
    let _ = writeln!(out);
    let _ = writeln!(out, "基本");
    out.push_str(&core_table(reading, config));
    let _ = writeln!(out);
    let _ = writeln!(out, "能力値 {}", reading.intensity.text);
    out.push_str(&intensity_table(reading, config));
    if config.show_years {
        let _ = writeln!(out);
        let _ = writeln!(out, "パーソナルイヤー");
        out.push_str(&years_table(reading, config));
    }
    if let Some(base) = &config.share_base {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", share_link(base, &reading.spelling, reading.birth));
    }
    out
}
