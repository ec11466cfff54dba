//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use quill_parser::GrammarRegistry;
use quill_parser::grammar::{BACKWARD, FORWARD};

/// Highlighter for command lines.
pub struct CommandHighlighter {
    keywords: Vec<&'static str>,
}

impl CommandHighlighter {
    /// Creates a highlighter for the built-in command keywords.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keywords: GrammarRegistry::builtin().keywords(),
        }
    }

    /// Highlight a line of input.
    ///
    /// The leading keyword is bold green when known, directions are cyan and
    /// numbers magenta. Whitespace is preserved as typed.
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim().is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut first = true;
        let mut rest = line;

        while !rest.is_empty() {
            let ws_len = rest.len() - rest.trim_start().len();
            result.push_str(&rest[..ws_len]);
            rest = &rest[ws_len..];

            let word_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..word_len];
            rest = &rest[word_len..];
            if word.is_empty() {
                continue;
            }

            if first {
                first = false;
                if self.keywords.iter().any(|k| k.eq_ignore_ascii_case(word)) {
                    result.push_str("\x1b[1;32m"); // bold green
                } else {
                    result.push_str("\x1b[31m"); // red
                }
            } else if word == FORWARD || word == BACKWARD {
                result.push_str("\x1b[36m"); // cyan
            } else if word.bytes().all(|b| b.is_ascii_digit()) {
                result.push_str("\x1b[35m"); // magenta
            } else {
                result.push_str(word);
                continue;
            }
            result.push_str(word);
            result.push_str("\x1b[0m");
        }

        Cow::Owned(result)
    }
}

impl Default for CommandHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
