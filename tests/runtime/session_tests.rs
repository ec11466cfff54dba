//! Interpreter session tests.

use quill_foundation::{Error, ErrorKind, Result};
use quill_runtime::{AreaPrompt, Interpreter, TextEngine, TextStore};

/// Answers every area prompt with canned text, recording what was shown.
struct CannedArea {
    answer: &'static str,
    shown: Vec<Option<String>>,
}

impl CannedArea {
    fn new(answer: &'static str) -> Self {
        Self {
            answer,
            shown: Vec::new(),
        }
    }
}

impl AreaPrompt for CannedArea {
    fn prompt_area(&mut self, _name: &str, existing: Option<&str>) -> Result<String> {
        self.shown.push(existing.map(String::from));
        Ok(self.answer.to_string())
    }
}

struct Session {
    interp: Interpreter<TextStore>,
    area: CannedArea,
    out: Vec<u8>,
}

impl Session {
    fn new() -> Self {
        Self {
            interp: Interpreter::new(TextStore::new()),
            area: CannedArea::new("from prompt"),
            out: Vec::new(),
        }
    }

    fn run(&mut self, line: &str) -> std::result::Result<bool, Error> {
        self.interp.execute(line, &mut self.area, &mut self.out)
    }

    fn output(&self) -> String {
        String::from_utf8(self.out.clone()).unwrap()
    }
}

#[test]
fn full_editing_session() {
    let mut s = Session::new();
    assert!(s.run("input draft Hello there. How are you?").unwrap());
    assert!(s.run("format draft").unwrap());
    assert!(s.run("cursor c1 draft 0 -> 5").unwrap());
    assert!(s.run("send draft final").unwrap());
    assert!(s.run("print final").unwrap());
    assert!(!s.run("quit").unwrap());

    let store = s.interp.engine();
    assert_eq!(store.get("draft").unwrap().data, "Hello there.\nHow are you?");
    assert_eq!(store.get("draft").unwrap().cursors[0].name, "c1");
    assert!(s.output().contains("\"name\": \"final\""));
}

#[test]
fn input_without_data_uses_prompt() {
    let mut s = Session::new();
    s.run("input notes").unwrap();
    s.run("input notes").unwrap();

    assert_eq!(s.area.shown, vec![None, Some("from prompt".to_string())]);
    assert_eq!(s.interp.engine().get("notes").unwrap().data, "from prompt");
}

#[test]
fn print_everything_as_json_array() {
    let mut s = Session::new();
    s.run("input a 1").unwrap();
    s.run("input b 2").unwrap();
    s.run("print").unwrap();

    let out = s.output();
    assert!(out.trim_start().starts_with('['));
    assert!(out.contains("\"data\": \"1\""));
    assert!(out.contains("\"data\": \"2\""));
}

#[test]
fn command_errors_leave_session_usable() {
    let mut s = Session::new();
    let err = s.run("cursor myfile 3 -> 9").unwrap_err();
    assert!(err.is_command_error());
    assert_eq!(
        err.to_string(),
        "\"cursor myfile 3 -> 9\" expected direction, found 9"
    );

    let err = s.run("explode").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownCommand { .. }));

    assert!(s.run("input ok yes").unwrap());
    assert_eq!(s.interp.engine().len(), 1);
}

#[test]
fn cursor_on_missing_text_is_engine_error() {
    let mut s = Session::new();
    let err = s.run("cursor c1 nowhere 1 -> 2").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TextNotFound(_)));
}

#[test]
fn whitespace_only_lines_are_ignored() {
    let mut s = Session::new();
    assert!(s.run("   \t ").unwrap());
    assert!(s.interp.engine().print(None).unwrap().is_empty());
}
