//! Integration tests for the quill_parser crate.
//!
//! Tests for the command line pipeline:
//! - Tokenization
//! - Grammar matching
//! - Mistake diagnosis
//! - Grammar round-trips

mod diagnosis_tests;
mod matching_tests;
mod roundtrip_tests;
mod tokenizer_tests;
