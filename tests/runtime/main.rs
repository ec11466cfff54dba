//! Integration tests for the quill_runtime crate.
//!
//! Tests that drive the interpreter end to end:
//! - Command sessions against the in-memory store
//! - Script files with text areas and error context
//! - State persistence

mod script_tests;
mod session_tests;
mod state_tests;
