//! Core types and errors for Quill.
//!
//! This crate provides:
//! - [`Text`] - A named text area held by an editor engine
//! - [`Cursor`] and [`CursorDestination`] - Cursor placement inside a text
//! - [`Error`] - Command diagnostics and runtime errors with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod text;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use text::{Cursor, CursorDestination, Text};
