//! REPL, CLI, report tables, and serialization for numerology readings.
//!
//! This crate provides:
//! - [`Repl`] - Interactive command loop
//! - [`Session`] - Inputs, the current reading, and settings
//! - [`report`] - Plain-text tables with descriptive annotations
//! - [`share`] - Share links that reproduce a reading
//! - [`serialize`] - Saving and loading readings as `MessagePack`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod annotations;
pub mod editor;
pub mod repl;
pub mod report;
pub mod serialize;
pub mod session;
pub mod share;

pub use annotations::{core_label, core_meaning, number_overview, unlucky_year_label};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Command, Repl, TraceCommand};
pub use report::{ReportConfig, render};
pub use serialize::{SavedReading, from_bytes, load_from_file, save_to_file, to_bytes};
pub use session::Session;
pub use share::{ShareQuery, parse_query, share_link};
