//! Command-line grammar matching for Quill.
//!
//! This crate turns editor commands like "cursor c1 notes 3 -> 9" into typed
//! command values, or explains exactly where a line went wrong.
//!
//! # Architecture
//!
//! ```text
//! "cursor  c1 notes 3 -> 9"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → "cursor c1 notes 3 -> 9", [cursor, c1, notes, 3, ->, 9]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GRAMMAR         │  → Input, Format, Cursor, Send, Print, End
//! │ REGISTRY        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐      no match     ┌─────────────────┐
//! │ MATCHER         │ ────────────────▶ │ DIAGNOSER       │ → expected direction, found 9
//! └─────────────────┘                   └─────────────────┘
//!          │
//!          ▼
//!   Command::Cursor { name: c1, target: notes, from: 3, ahead, to: 9 }
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Whitespace normalization and positioned words
//! - [`grammar`] - Grammar elements and the built-in registry
//! - [`matcher`] - Full-line matching and capture extraction
//! - [`diagnose`] - First-divergence diagnosis for unmatched lines
//! - [`command`] - Typed command values

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod diagnose;
pub mod grammar;
pub mod matcher;
pub mod tokenizer;

pub use command::{Command, CursorCmd, FormatCmd, InputCmd, PrintCmd, SendCmd};
pub use diagnose::{Diagnosis, MistakeDiagnoser};
pub use grammar::{CommandKind, Element, Grammar, GrammarRegistry};
pub use matcher::{MatchOutcome, Matcher};
pub use tokenizer::{IndexedWord, InputTokenizer};
