//! Text areas and cursors.
//!
//! These are the values handed to an editor engine once a command line
//! has been matched and validated.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named text area.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Text {
    /// Name the text is addressed by.
    pub name: String,
    /// Text content.
    pub data: String,
    /// Cursors placed inside this text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cursors: Vec<Cursor>,
}

impl Text {
    /// Creates a text with no cursors.
    #[must_use]
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
            cursors: Vec::new(),
        }
    }
}

/// One end of a cursor: either a character position or a word.
///
/// A destination captured from a command line always has exactly one of the
/// two fields set. An empty token leaves both unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CursorDestination {
    /// Position, when the token was a run of digits.
    pub position: Option<usize>,
    /// Word, for any other token.
    pub word: Option<String>,
}

impl CursorDestination {
    /// Destination at a numeric position.
    #[must_use]
    pub const fn at(position: usize) -> Self {
        Self {
            position: Some(position),
            word: None,
        }
    }

    /// Destination at a word.
    #[must_use]
    pub fn word(word: impl Into<String>) -> Self {
        Self {
            position: None,
            word: Some(word.into()),
        }
    }

    /// Classifies a captured token.
    ///
    /// Digit runs that fit in `usize` become positions, everything else a word.
    #[must_use]
    pub fn classify(token: &str) -> Self {
        if token.is_empty() {
            return Self::default();
        }
        if token.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(position) = token.parse() {
                return Self::at(position);
            }
        }
        Self::word(token)
    }

    /// Returns true if neither field is populated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.position.is_none() && self.word.is_none()
    }
}

impl fmt::Display for CursorDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.position, &self.word) {
            (Some(position), _) => write!(f, "{position}"),
            (None, Some(word)) => f.write_str(word),
            (None, None) => f.write_str("<none>"),
        }
    }
}

/// A cursor spanning two destinations inside a target text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cursor {
    /// Cursor name.
    pub name: String,
    /// Name of the text the cursor was placed in, if it resolved.
    pub target: Option<String>,
    /// Starting destination.
    pub from: CursorDestination,
    /// True when the cursor points forward (`->`).
    pub ahead: bool,
    /// Ending destination.
    pub to: CursorDestination,
}
