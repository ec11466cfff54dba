//! Script execution tests.

use std::fs;
use std::path::PathBuf;

use quill_runtime::{Interpreter, TextStore};

fn write_script(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("quill-{}-{name}.qs", std::process::id()));
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn script_file_runs_to_quit() {
    let path = write_script(
        "ok",
        "# build a letter\ninput letter\nDear reader.\nThanks!\n.\nformat letter\nquit\nsend letter never\n",
    );
    let mut interp = Interpreter::new(TextStore::new());
    let mut out = Vec::new();
    let report = interp.run_script(&path, ".", false, &mut out).unwrap();
    let _ = fs::remove_file(&path);

    assert!(report.ended);
    assert_eq!(report.executed, 2);
    assert_eq!(
        interp.engine().get("letter").unwrap().data,
        "Dear reader.\nThanks!"
    );
    assert!(interp.engine().get("never").is_none());
}

#[test]
fn script_error_points_at_file_and_line() {
    let path = write_script("bad", "input a b\nprint a b\n");
    let mut interp = Interpreter::new(TextStore::new());
    let mut out = Vec::new();
    let err = interp.run_script(&path, ".", false, &mut out).unwrap_err();
    let _ = fs::remove_file(&path);

    let ctx = err.context.expect("script errors carry context");
    assert_eq!(ctx.line, Some(2));
    assert!(ctx.source.unwrap().ends_with("bad.qs"));
}

#[test]
fn missing_script_is_io_error() {
    let mut interp = Interpreter::new(TextStore::new());
    let mut out = Vec::new();
    let err = interp
        .run_script(&PathBuf::from("/nonexistent/quill.qs"), ".", false, &mut out)
        .unwrap_err();
    assert!(matches!(err.kind, quill_foundation::ErrorKind::IoError(_)));
}
