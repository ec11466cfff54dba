//! Error types for Quill.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result type used throughout Quill.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Quill operations.
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

    /// Creates an unknown command error.
    #[must_use]
    pub fn unknown_command(line: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand { line: line.into() })
    }

    /// Creates a malformed command error describing the first divergence.
    #[must_use]
    pub fn malformed_command(
        line: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::MalformedCommand {
            line: line.into(),
            expected: expected.into(),
            found: found.into(),
        })
    }

    /// Creates a text not found error.
    #[must_use]
    pub fn text_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::TextNotFound(name.into()))
    }

    /// Returns true if this error was produced by command diagnosis.
    #[must_use]
    pub const fn is_command_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UnknownCommand { .. } | ErrorKind::MalformedCommand { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The leading word matches no known command keyword.
    #[error("unknown command: \"{line}\"")]
    UnknownCommand {
        /// The normalized command line.
        line: String,
    },

    /// The keyword was recognized but a later word breaks its grammar.
    #[error("\"{line}\" expected {expected}, found {found}")]
    MalformedCommand {
        /// The normalized command line.
        line: String,
        /// What the grammar expected at the first divergence.
        expected: String,
        /// What the line contained there.
        found: String,
    },

    /// No text with the given name exists.
    #[error("text not found: {0}")]
    TextNotFound(String),

    /// I/O error (file operations).
    #[error("I/O error: {0}")]
    IoError(String),

    /// State could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Internal error (terminal failures and the like).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Script file the command came from.
    pub source: Option<String>,
    /// Line number in the script (1-indexed).
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        } else if let Some(line) = self.line {
            write!(f, "at line {line}")?;
        }
        Ok(())
    }
}
