//! Dispatch, REPL, CLI, and serialization for Quill.
//!
//! This crate provides:
//! - [`Dispatcher`] - Routes matched commands to a [`TextEngine`]
//! - [`TextStore`] - In-memory text engine
//! - [`Interpreter`] - Line and script execution
//! - [`Repl`] - Interactive read-eval-print loop
//! - Print output and text store serialization

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod dispatch;
pub mod editor;
pub mod engine;
pub mod highlight;
pub mod interpreter;
pub mod repl;
pub mod serialize;
pub mod store;

pub use config::ReplConfig;
pub use dispatch::Dispatcher;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use engine::{AreaPrompt, TextEngine};
pub use interpreter::{Interpreter, ScriptReport};
pub use repl::Repl;
pub use store::TextStore;
