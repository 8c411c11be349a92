//! End-to-end tests across every layer
//!
//! Tests are organized into modules:
//! - `pipeline`: Hiragana in, report out
//! - `persistence`: Saving and loading readings
//! - `sharing`: Share links between sessions
//! - `repl`: Scripted REPL sessions

mod persistence;
mod pipeline;
mod repl;
mod sharing;

use numerology_engine::ReadingConfig;
use numerology_runtime::{ReportConfig, Session};

/// A session with a fixed year and plain output.
pub fn session() -> Session {
    Session::new()
        .with_reading_config(ReadingConfig::new().with_max_age(40).with_current_year(2024))
        .with_report_config(ReportConfig::new().with_highlight(false))
}
