//! State persistence tests.

use quill_runtime::{Interpreter, TextStore, serialize};

#[test]
fn session_state_survives_save_and_load() {
    let mut interp = Interpreter::new(TextStore::new());
    let mut out = Vec::new();
    interp
        .run_source(
            "state.qs",
            "input notes one. two.\nformat notes\ncursor c notes 0 -> two\n",
            ".",
            false,
            &mut out,
        )
        .unwrap();
    let store = interp.into_engine();

    let path = std::env::temp_dir().join(format!("quill-state-it-{}.qst", std::process::id()));
    serialize::save_to_file(&store, &path).unwrap();
    let restored = serialize::load_from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(restored, store);
    let notes = restored.get("notes").unwrap();
    assert_eq!(notes.data, "one.\ntwo.");
    assert_eq!(notes.cursors[0].to.word.as_deref(), Some("two"));
}
