//! In-memory text engine.

use quill_foundation::{Cursor, Error, Result, Text};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::engine::TextEngine;

/// Separators used when a format command names none.
pub const DEFAULT_SEPARATORS: [&str; 3] = [".", "!", "?"];

/// Texts kept in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStore {
    texts: Vec<Text>,
}

impl TextStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of texts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Returns true if the store holds no texts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Gets a text by exact name (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Text> {
        self.texts.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Text> {
        self.texts
            .iter_mut()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Builds the name matcher for a lookup. `*` matches any run of characters.
    fn name_pattern(pattern: &str) -> Option<Regex> {
        if !pattern.contains('*') {
            return None;
        }
        let body = pattern
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        Regex::new(&format!("(?i)^{body}$")).ok()
    }
}

/// Breaks `data` into lines after each separator character.
fn reflow(data: &str, separators: &[String]) -> String {
    let mut out = String::with_capacity(data.len());
    let mut line_start = false;

    for ch in data.chars() {
        if line_start && ch.is_whitespace() {
            continue;
        }
        line_start = false;
        out.push(ch);
        if separators.iter().any(|s| s.chars().eq(std::iter::once(ch))) {
            out.push('\n');
            line_start = true;
        }
    }

    // Drop the break pushed after a trailing separator
    if line_start {
        out.pop();
    }
    out
}

impl TextEngine for TextStore {
    fn lookup_texts(&self, pattern: &str) -> Vec<Text> {
        match Self::name_pattern(pattern) {
            Some(re) => self
                .texts
                .iter()
                .filter(|t| re.is_match(&t.name))
                .cloned()
                .collect(),
            None => self.get(pattern).cloned().into_iter().collect(),
        }
    }

    fn add_text(&mut self, text: Text) -> Result<()> {
        trace!(name = %text.name, "storing text");
        if let Some(existing) = self.get_mut(&text.name) {
            existing.data = text.data;
            if !text.cursors.is_empty() {
                existing.cursors = text.cursors;
            }
        } else {
            self.texts.push(text);
        }
        Ok(())
    }

    fn format(&mut self, name: &str, separators: Option<&[String]>) -> Result<()> {
        let defaults: Vec<String>;
        let separators = match separators {
            Some(separators) => separators,
            None => {
                defaults = DEFAULT_SEPARATORS.iter().map(ToString::to_string).collect();
                &defaults
            }
        };
        let text = self
            .get_mut(name)
            .ok_or_else(|| Error::text_not_found(name))?;
        text.data = reflow(&text.data, separators);
        Ok(())
    }

    fn add_cursor(&mut self, cursor: Cursor) -> Result<()> {
        let Some(target) = cursor.target.clone() else {
            return Err(Error::text_not_found(format!("target of cursor {}", cursor.name)));
        };
        let text = self
            .get_mut(&target)
            .ok_or_else(|| Error::text_not_found(&target))?;
        text.cursors.retain(|c| c.name != cursor.name);
        text.cursors.push(cursor);
        Ok(())
    }

    fn send_text(&mut self, source: &str, target: &str) -> Result<()> {
        let data = self
            .get(source)
            .map(|t| t.data.clone())
            .ok_or_else(|| Error::text_not_found(source))?;

        match self.get_mut(target) {
            Some(text) if text.data.is_empty() => text.data = data,
            Some(text) => {
                text.data.push('\n');
                text.data.push_str(&data);
            }
            None => self.texts.push(Text::new(target, data)),
        }
        Ok(())
    }

    fn print(&self, name: Option<&str>) -> Result<Vec<Text>> {
        match name {
            None => Ok(self.texts.clone()),
            Some(name) => {
                let texts = self.lookup_texts(name);
                if texts.is_empty() {
                    return Err(Error::text_not_found(name));
                }
                Ok(texts)
            }
        }
    }
}
