//! Numerology - readings from a name and a birth date
//!
//! This crate re-exports all layers of the numerology system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: numerology_runtime    — REPL, CLI, report tables, share links, save/load
//! Layer 2: numerology_debug      — Reduction traces, explanations, event tracing
//! Layer 1: numerology_engine     — Core numbers, intensity, life lessons, personal years
//!          numerology_kana       — Hiragana to romaji transliteration
//! Layer 0: numerology_foundation — Spelling, BirthDate, letter buckets, reducers, Error
//! ```

pub use numerology_debug as debug;
pub use numerology_engine as engine;
pub use numerology_foundation as foundation;
pub use numerology_kana as kana;
pub use numerology_runtime as runtime;
