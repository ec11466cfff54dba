//! Mistake diagnosis tests.
//!
//! Tests that unmatched lines report the first divergence from the
//! grammar selected by their keyword.

use quill_foundation::ErrorKind;
use quill_parser::diagnose::END_OF_LINE;
use quill_parser::{Diagnosis, GrammarRegistry, Matcher, MistakeDiagnoser};

fn diagnose(line: &str) -> Diagnosis {
    MistakeDiagnoser::diagnose(GrammarRegistry::builtin(), line)
}

fn expected_found(line: &str) -> (String, String) {
    match Matcher::new().parse(line).unwrap_err().kind {
        ErrorKind::MalformedCommand {
            expected, found, ..
        } => (expected, found),
        other => panic!("expected malformed command, got {other:?}"),
    }
}

#[test]
fn unknown_keyword_is_never_malformed() {
    for line in ["jump", "open notes", "prints", "sendx a b"] {
        assert_eq!(diagnose(line), Diagnosis::UnknownCommand, "{line}");
        let err = Matcher::new().parse(line).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnknownCommand { .. }));
    }
}

#[test]
fn quit_with_trailing_word() {
    assert_eq!(
        expected_found("quit now"),
        (END_OF_LINE.to_string(), "now".to_string())
    );
}

#[test]
fn cursor_missing_target_names_category() {
    let (expected, found) = expected_found("cursor myfile 3 -> 9");
    assert_eq!(expected, "direction");
    assert_eq!(found, "9");
    assert!(!expected.contains('('));
}

#[test]
fn send_with_extra_word() {
    assert_eq!(
        expected_found("send a b c"),
        (END_OF_LINE.to_string(), "c".to_string())
    );
}

#[test]
fn short_cursor_line() {
    assert_eq!(
        expected_found("cursor c1"),
        ("word".to_string(), END_OF_LINE.to_string())
    );
}

#[test]
fn format_with_spaced_separators() {
    assert_eq!(
        expected_found("format notes . ,"),
        (END_OF_LINE.to_string(), ",".to_string())
    );
}

#[test]
fn message_quotes_normalized_line() {
    let err = Matcher::new().parse("  quit    now ").unwrap_err();
    assert_eq!(err.to_string(), "\"quit now\" expected end of line, found now");
}
