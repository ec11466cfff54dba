//! Grammar round-trip tests.
//!
//! Valid instances generated from each grammar must match back into the
//! command they were rendered from.

use proptest::prelude::*;
use quill_foundation::CursorDestination;
use quill_parser::{
    Command, CursorCmd, FormatCmd, InputCmd, MatchOutcome, Matcher, PrintCmd, SendCmd,
};

const KEYWORDS: [&str; 6] = ["input", "format", "cursor", "send", "print", "quit"];

fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}".prop_filter("keywords are reserved", |s| {
        !KEYWORDS.contains(&s.as_str())
    })
}

fn destination() -> impl Strategy<Value = CursorDestination> {
    prop_oneof![
        (0usize..100_000).prop_map(CursorDestination::at),
        "[a-z][a-z0-9]{0,6}".prop_map(CursorDestination::word),
    ]
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (name(), proptest::option::of("[a-z]{1,6}( [a-z.,]{1,6}){0,4}"))
            .prop_map(|(name, data)| Command::Input(InputCmd { name, data })),
        (name(), proptest::option::of(proptest::collection::vec("[.,;:!?]", 1..5)))
            .prop_map(|(name, separators)| Command::Format(FormatCmd { name, separators })),
        (name(), name(), destination(), any::<bool>(), destination()).prop_map(
            |(name, target, from, ahead, to)| Command::Cursor(CursorCmd {
                name,
                target,
                from,
                ahead,
                to,
            })
        ),
        (name(), name()).prop_map(|(source_name, target_name)| Command::Send(SendCmd {
            source_name,
            target_name,
        })),
        proptest::option::of(name()).prop_map(|name| Command::Print(PrintCmd { name })),
    ]
}

proptest! {
    #[test]
    fn rendered_commands_match_back(cmd in command()) {
        let line = cmd.to_string();
        prop_assert_eq!(Matcher::new().try_match(&line), MatchOutcome::Matched(cmd));
    }

    #[test]
    fn uppercase_keyword_matches_identically(cmd in command()) {
        let line = cmd.to_string();
        let (keyword, rest) = line.split_once(' ').unwrap_or((line.as_str(), ""));
        let shouted = format!("{} {rest}", keyword.to_uppercase());
        prop_assert_eq!(
            Matcher::new().try_match(&shouted),
            Matcher::new().try_match(&line)
        );
    }
}
