//! Configuration for the interactive REPL.

/// Configuration for the interactive REPL.
///
/// Controls prompts, the banner, and multi-line area entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Primary prompt.
    pub prompt: String,

    /// Prompt shown while entering a multi-line text area.
    pub continuation_prompt: String,

    /// Whether to show the welcome banner.
    pub show_banner: bool,

    /// A line holding only this string ends a text area.
    pub area_terminator: String,

    /// Maximum number of history entries kept by the line editor.
    pub history_size: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "quill> ".to_string(),
            continuation_prompt: "..... ".to_string(),
            show_banner: true,
            area_terminator: ".".to_string(),
            history_size: 1000,
        }
    }
}

impl ReplConfig {
    /// Builder method to set the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to set the continuation prompt.
    #[must_use]
    pub fn with_continuation_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.continuation_prompt = prompt.into();
        self
    }

    /// Builder method to enable/disable the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to set the area terminator line.
    #[must_use]
    pub fn with_area_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.area_terminator = terminator.into();
        self
    }

    /// Builder method to set the history size.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }
}
