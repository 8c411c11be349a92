//! Hiragana to romaji transliteration for numerology spellings.
//!
//! This crate turns a name typed in hiragana into the lowercase Latin
//! spelling the numerology engine scores.
//!
//! # Pipeline
//!
//! ```text
//! "しんぶん"
//!     │
//!     ▼
//! ┌──────────────┐
//! │ CLASSIFY     │  → NameInput::Hiragana
//! └──────────────┘
//!     │
//!     ▼
//! ┌──────────────┐
//! │ SYLLABLES    │  → [し→shi, ん→m, ぶ→bu, ん→n]
//! └──────────────┘
//!     │
//!     ▼
//! ┌──────────────┐
//! │ SPELLING     │  → "shimbun"
//! └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`syllables`] - The kana to romaji table
//! - [`transliterator`] - Digraph-first scanning and nasal assimilation
//! - [`input`] - Script classification and spelling validation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod input;
pub mod syllables;
pub mod transliterator;

pub use input::{NameInput, spelling_from_name};
pub use transliterator::{Syllable, Transliterator, transliterate};
