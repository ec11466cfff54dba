//! Grammar matching tests.
//!
//! Tests for full-line matching and capture extraction.

use quill_foundation::{CursorDestination, ErrorKind};
use quill_parser::{
    Command, CursorCmd, FormatCmd, InputCmd, MatchOutcome, Matcher, PrintCmd, SendCmd,
};

fn parse(line: &str) -> Command {
    Matcher::new().parse(line).expect("line should match")
}

#[test]
fn print_without_name() {
    assert_eq!(parse("print"), Command::Print(PrintCmd { name: None }));
}

#[test]
fn print_with_name() {
    assert_eq!(
        parse("print report"),
        Command::Print(PrintCmd {
            name: Some("report".to_string())
        })
    );
}

#[test]
fn send_source_and_target() {
    assert_eq!(
        parse("send alpha beta"),
        Command::Send(SendCmd {
            source_name: "alpha".to_string(),
            target_name: "beta".to_string(),
        })
    );
}

#[test]
fn cursor_with_positions() {
    assert_eq!(
        parse("cursor c1 target 3 -> 9"),
        Command::Cursor(CursorCmd {
            name: "c1".to_string(),
            target: "target".to_string(),
            from: CursorDestination::at(3),
            ahead: true,
            to: CursorDestination::at(9),
        })
    );
}

#[test]
fn cursor_with_words() {
    assert_eq!(
        parse("cursor c1 target word1 <- word2"),
        Command::Cursor(CursorCmd {
            name: "c1".to_string(),
            target: "target".to_string(),
            from: CursorDestination::word("word1"),
            ahead: false,
            to: CursorDestination::word("word2"),
        })
    );
}

#[test]
fn cursor_mixed_destinations() {
    let Command::Cursor(cmd) = parse("cursor c2 notes start -> 12") else {
        panic!("expected cursor command");
    };
    assert_eq!(cmd.from.word.as_deref(), Some("start"));
    assert_eq!(cmd.to.position, Some(12));
}

#[test]
fn input_keeps_inline_text() {
    assert_eq!(
        parse("input notes Dear reader, hello."),
        Command::Input(InputCmd {
            name: "notes".to_string(),
            data: Some("Dear reader, hello.".to_string()),
        })
    );
}

#[test]
fn format_splits_separator_run() {
    assert_eq!(
        parse("format notes ,."),
        Command::Format(FormatCmd {
            name: "notes".to_string(),
            separators: Some(vec![",".to_string(), ".".to_string()]),
        })
    );
}

#[test]
fn keyword_casing_is_irrelevant() {
    for line in ["PRINT report", "Print report", "pRiNt report"] {
        assert_eq!(parse(line), parse("print report"));
    }
}

#[test]
fn input_takes_priority_over_later_grammars() {
    // "input" lines may contain any text, including other keywords
    assert!(matches!(parse("input print send a b"), Command::Input(_)));
}

#[test]
fn quit_is_left_to_the_caller() {
    let matcher = Matcher::new();
    assert!(matcher.is_end("QUIT"));
    assert_eq!(matcher.try_match("quit"), MatchOutcome::Unmatched);
}

#[test]
fn partial_match_never_escapes() {
    assert_eq!(Matcher::new().try_match("send a b c"), MatchOutcome::Unmatched);
    let err = Matcher::new().parse("send a b c").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedCommand { .. }));
}
