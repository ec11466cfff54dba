//! Collaborator interfaces the dispatcher drives.

use quill_foundation::{Cursor, Result, Text};

/// A text-buffer engine that stores and mutates named texts.
pub trait TextEngine {
    /// Texts whose name matches `pattern`, in a stable order.
    fn lookup_texts(&self, pattern: &str) -> Vec<Text>;

    /// Creates or replaces a text.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the text.
    fn add_text(&mut self, text: Text) -> Result<()>;

    /// Reflows a text so each separator ends a line.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not exist.
    fn format(&mut self, name: &str, separators: Option<&[String]>) -> Result<()>;

    /// Places a cursor in its target text.
    ///
    /// # Errors
    ///
    /// Returns an error if the target did not resolve.
    fn add_cursor(&mut self, cursor: Cursor) -> Result<()>;

    /// Appends the source text to the target text.
    ///
    /// # Errors
    ///
    /// Returns an error if the source does not exist.
    fn send_text(&mut self, source: &str, target: &str) -> Result<()>;

    /// Texts to print: every text, or those matching `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot produce the texts.
    fn print(&self, name: Option<&str>) -> Result<Vec<Text>>;
}

/// Interactive acquisition of a multi-line text area.
pub trait AreaPrompt {
    /// Asks the user for the content of `name`, showing `existing` if any.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn prompt_area(&mut self, name: &str, existing: Option<&str>) -> Result<String>;
}
