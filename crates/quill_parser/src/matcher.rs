//! Full-line grammar matching.
//!
//! Tries each grammar in priority order and extracts captures into a typed
//! [`Command`]. Lines that match nothing are handed to the diagnoser.

use quill_foundation::{CursorDestination, Result};
use regex::Captures;
use tracing::{debug, trace};

use crate::command::{Command, CursorCmd, FormatCmd, InputCmd, PrintCmd, SendCmd};
use crate::diagnose::MistakeDiagnoser;
use crate::grammar::{CommandKind, FORWARD, GrammarRegistry};
use crate::tokenizer::InputTokenizer;

/// Result of trying every grammar against a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A grammar matched the whole line
    Matched(Command),
    /// No grammar matched
    Unmatched,
}

/// Matches command lines against a grammar registry.
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'r> {
    registry: &'r GrammarRegistry,
}

impl Matcher<'static> {
    /// Creates a matcher over the built-in grammars.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(GrammarRegistry::builtin())
    }
}

impl Default for Matcher<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Matcher<'r> {
    /// Creates a matcher over the given registry.
    #[must_use]
    pub const fn with_registry(registry: &'r GrammarRegistry) -> Self {
        Self { registry }
    }

    /// The registry this matcher uses.
    #[must_use]
    pub const fn registry(&self) -> &'r GrammarRegistry {
        self.registry
    }

    /// Returns true if the line is the terminating command.
    #[must_use]
    pub fn is_end(&self, line: &str) -> bool {
        let normalized = InputTokenizer::normalize(line);
        self.registry
            .get(CommandKind::End)
            .is_some_and(|g| g.regex().is_match(&normalized))
    }

    /// Tries every command grammar in priority order.
    #[must_use]
    pub fn try_match(&self, line: &str) -> MatchOutcome {
        let normalized = InputTokenizer::normalize(line);

        for grammar in self.registry.iter() {
            if grammar.kind() == CommandKind::End {
                continue;
            }
            let Some(caps) = grammar.regex().captures(&normalized) else {
                continue;
            };
            if let Some(command) = Self::extract(grammar.kind(), &caps) {
                debug!(grammar = grammar.name(), line = %normalized, "matched command");
                return MatchOutcome::Matched(command);
            }
        }

        trace!(line = %normalized, "no grammar matched");
        MatchOutcome::Unmatched
    }

    /// Parses a line into a command, diagnosing the first mistake on failure.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCommand` if the keyword is not recognized, or
    /// `MalformedCommand` describing the first divergence from its grammar.
    pub fn parse(&self, line: &str) -> Result<Command> {
        match self.try_match(line) {
            MatchOutcome::Matched(command) => Ok(command),
            MatchOutcome::Unmatched => {
                let diagnosis = MistakeDiagnoser::diagnose(self.registry, line);
                Err(diagnosis.into_error(&InputTokenizer::normalize(line)))
            }
        }
    }

    /// Builds the typed command from captures. `None` if a required capture
    /// is missing.
    fn extract(kind: CommandKind, caps: &Captures<'_>) -> Option<Command> {
        let command = match kind {
            CommandKind::Input => Command::Input(InputCmd {
                name: capture(caps, 1)?,
                data: capture(caps, 2),
            }),
            CommandKind::Format => Command::Format(FormatCmd {
                name: capture(caps, 1)?,
                separators: capture(caps, 2).map(|run| run.chars().map(String::from).collect()),
            }),
            CommandKind::Cursor => Command::Cursor(CursorCmd {
                name: capture(caps, 1)?,
                target: capture(caps, 2)?,
                from: CursorDestination::classify(caps.get(3)?.as_str()),
                ahead: caps.get(4)?.as_str() == FORWARD,
                to: CursorDestination::classify(caps.get(5)?.as_str()),
            }),
            CommandKind::Send => Command::Send(SendCmd {
                source_name: capture(caps, 1)?,
                target_name: capture(caps, 2)?,
            }),
            CommandKind::Print => Command::Print(PrintCmd {
                name: capture(caps, 1),
            }),
            CommandKind::End => return None,
        };
        Some(command)
    }
}

fn capture(caps: &Captures<'_>, index: usize) -> Option<String> {
    caps.get(index)
        .map(|m| m.as_str().to_string())
        .filter(|s| !s.is_empty())
}
