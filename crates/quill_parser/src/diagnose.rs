//! Mistake diagnosis.
//!
//! When no grammar matches a line, finds the grammar sharing its keyword and
//! reports the first word that breaks it.

use quill_foundation::Error;
use tracing::debug;

use crate::grammar::GrammarRegistry;
use crate::tokenizer::InputTokenizer;

/// Shown when a line ends early, or where a line should have ended.
pub const END_OF_LINE: &str = "end of line";

/// Outcome of diagnosing an unmatched line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnosis {
    /// The leading word is no command keyword
    UnknownCommand,
    /// The keyword is known; this is the first divergence
    Mistake {
        /// What the grammar wanted
        expected: String,
        /// What the line had
        found: String,
    },
}

impl Diagnosis {
    /// Converts the diagnosis into an error for the given line.
    #[must_use]
    pub fn into_error(self, line: &str) -> Error {
        match self {
            Self::UnknownCommand => Error::unknown_command(line),
            Self::Mistake { expected, found } => Error::malformed_command(line, expected, found),
        }
    }

    fn mistake(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::Mistake {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// Diagnoses lines that matched no grammar.
pub struct MistakeDiagnoser;

impl MistakeDiagnoser {
    /// Finds the first divergence between `line` and the grammar selected by
    /// its leading word.
    #[must_use]
    pub fn diagnose(registry: &GrammarRegistry, line: &str) -> Diagnosis {
        let words = InputTokenizer::tokenize(line);

        let Some(first) = words.first() else {
            return Diagnosis::UnknownCommand;
        };
        let Some(grammar) = registry.select(&first.value) else {
            debug!(keyword = %first.value, "unknown command keyword");
            return Diagnosis::UnknownCommand;
        };

        let elements = grammar.elements();
        let mut aligned = 0;

        for word in &words {
            let Some(element) = elements.get(word.position) else {
                return Self::report(grammar.name(), Diagnosis::mistake(END_OF_LINE, &word.value));
            };
            aligned = word.position + 1;
            if element.absorbs_rest() {
                break;
            }
            if !element.accepts(&word.value) {
                return Self::report(
                    grammar.name(),
                    Diagnosis::mistake(element.category(), &word.value),
                );
            }
        }

        // Every word fit; the line stopped before a required element
        if let Some(missing) = elements[aligned..].iter().find(|e| !e.is_optional()) {
            return Self::report(grammar.name(), Diagnosis::mistake(missing.category(), END_OF_LINE));
        }

        // Every word fit and nothing required is missing, yet the grammar
        // rejected the line as a whole
        Self::report(
            grammar.name(),
            Diagnosis::mistake(grammar.usage(), InputTokenizer::normalize(line)),
        )
    }

    fn report(grammar: &str, diagnosis: Diagnosis) -> Diagnosis {
        if let Diagnosis::Mistake { expected, found } = &diagnosis {
            debug!(grammar, %expected, %found, "malformed command");
        }
        diagnosis
    }
}
