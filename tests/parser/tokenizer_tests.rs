//! Tokenizer tests.
//!
//! Tests for normalizing raw input and splitting it into indexed words.

use quill_parser::tokenizer::InputTokenizer;

#[test]
fn tokenize_empty_input() {
    assert!(InputTokenizer::tokenize("").is_empty());
}

#[test]
fn tokenize_padded_input() {
    let words = InputTokenizer::tokenize("  a   b ");

    let values: Vec<_> = words.iter().map(|w| w.value.as_str()).collect();
    assert_eq!(values, vec!["a", "b"]);
    assert!(words[0].position < words[1].position);
}

#[test]
fn tokenize_keeps_direction_markers() {
    let words = InputTokenizer::tokenize("cursor c1 notes a <- b");
    assert_eq!(words[4].value, "<-");
    assert_eq!(words[4].position, 4);
}

#[test]
fn normalize_collapses_mixed_whitespace() {
    assert_eq!(
        InputTokenizer::normalize("\tinput  notes\n hello "),
        "input notes hello"
    );
}

#[test]
fn normalize_is_idempotent_on_samples() {
    for sample in ["", " ", "a", " a  b\t", "print\n\nreport"] {
        let once = InputTokenizer::normalize(sample);
        assert_eq!(InputTokenizer::normalize(&once), once);
    }
}
