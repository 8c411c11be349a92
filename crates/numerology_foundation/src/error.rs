//! Error types for the numerology system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! The calculation functions themselves are total; errors only arise at the
//! typed input boundary and in the runtime (files, serialization).

use std::fmt;

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for numerology operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid spelling error.
    #[must_use]
    pub fn invalid_spelling(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSpelling {
            input: input.into(),
            reason: reason.into(),
        })
    }

    /// Creates an invalid character error.
    #[must_use]
    pub fn invalid_character(ch: char, position: usize) -> Self {
        Self::new(ErrorKind::InvalidCharacter { ch, position })
    }

    /// Creates an invalid birth date error.
    #[must_use]
    pub fn invalid_birth_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidBirthDate {
            input: input.into(),
            reason: reason.into(),
        })
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A name could not be turned into a spelling.
    #[error("invalid spelling '{input}': {reason}")]
    InvalidSpelling {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A character outside `a`-`z` reached the spelling boundary.
    #[error("unsupported character {ch:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Zero-based character index.
        position: usize,
    },

    /// A birth date string could not be parsed.
    #[error("invalid birth date '{input}': {reason}")]
    InvalidBirthDate {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Bad argument to a command or option.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// File system failure.
    #[error("io error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source label (command, file, or query key).
    pub source: Option<String>,
    /// Column in the source, if known.
    pub column: Option<usize>,
    /// Chain of operations that led to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the column.
    #[must_use]
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(col) = self.column {
                write!(f, ":{col}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
