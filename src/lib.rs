//! Quill - line-oriented command interpreter
//!
//! This crate re-exports all layers of the Quill system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: quill_runtime    — Dispatcher, text store, REPL, CLI, serialization
//! Layer 1: quill_parser     — Tokenizer, grammars, matcher, mistake diagnosis
//! Layer 0: quill_foundation — Core types (Text, Cursor, Error)
//! ```

pub use quill_foundation as foundation;
pub use quill_parser as parser;
pub use quill_runtime as runtime;
