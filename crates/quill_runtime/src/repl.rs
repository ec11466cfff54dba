//! The main REPL implementation.

use std::io::{self, Write};

use quill_foundation::{Error, ErrorKind, Result};

use crate::config::ReplConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::engine::AreaPrompt;
use crate::interpreter::Interpreter;
use crate::store::TextStore;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Interpreter holding the text store.
    interpreter: Interpreter<TextStore>,

    /// Prompts, banner and area settings.
    config: ReplConfig,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(config: ReplConfig) -> Result<Self> {
        let editor = RustylineEditor::new(config.history_size)?;
        Ok(Self::with_editor(editor).with_config(config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor and default configuration.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            interpreter: Interpreter::new(TextStore::new()),
            config: ReplConfig::default(),
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Starts from an existing text store.
    #[must_use]
    pub fn with_store(mut self, store: TextStore) -> Self {
        self.interpreter = Interpreter::new(store);
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.config.show_banner = false;
        self
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Returns a reference to the interpreter.
    #[must_use]
    pub const fn interpreter(&self) -> &Interpreter<TextStore> {
        &self.interpreter
    }

    /// Returns a mutable reference to the interpreter.
    pub fn interpreter_mut(&mut self) -> &mut Interpreter<TextStore> {
        &mut self.interpreter
    }

    /// Consumes the REPL, returning the text store.
    pub fn into_store(self) -> TextStore {
        self.interpreter.into_engine()
    }

    /// Runs the REPL loop until `quit` or EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.config.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if line.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&line);
        self.eval(&line)
    }

    /// Executes one line, printing any error.
    ///
    /// Returns `Ok(false)` after the terminating command.
    ///
    /// # Errors
    ///
    /// Only output failures are returned; command errors are printed.
    pub fn eval(&mut self, line: &str) -> Result<bool> {
        let mut area = EditorArea {
            editor: &mut self.editor,
            prompt: &self.config.continuation_prompt,
            terminator: &self.config.area_terminator,
        };
        let stdout = io::stdout();
        let mut out = stdout.lock();

        let result = self.interpreter.execute(line, &mut area, &mut out);
        let _ = out.flush();

        match result {
            Ok(proceed) => Ok(proceed),
            Err(e) => {
                print_error(&e);
                Ok(true)
            }
        }
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36mQuill\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Commands: input, format, cursor, send, print. Type quit or Ctrl+D to exit.");
        println!(
            "A text area is ended by a line holding only '{}'.\n",
            self.config.area_terminator
        );

        let _ = io::stdout().flush();
    }
}

/// Prints an error to stderr.
pub fn print_error(error: &Error) {
    match &error.context {
        Some(ctx) => eprintln!("\x1b[31mError: {error} ({ctx})\x1b[0m"),
        None => eprintln!("\x1b[31mError: {error}\x1b[0m"),
    }
}

/// Reads a text area from the line editor.
struct EditorArea<'a, E: LineEditor> {
    editor: &'a mut E,
    prompt: &'a str,
    terminator: &'a str,
}

impl<E: LineEditor> AreaPrompt for EditorArea<'_, E> {
    fn prompt_area(&mut self, name: &str, existing: Option<&str>) -> Result<String> {
        println!("Enter text for '{name}', end with '{}':", self.terminator);
        if let Some(existing) = existing {
            println!("\x1b[2m{existing}\x1b[0m");
        }

        let mut area = Vec::new();
        loop {
            match self.editor.read_continuation(self.prompt)? {
                ReadResult::Line(line) if line.trim() == self.terminator => {
                    return Ok(area.join("\n"));
                }
                ReadResult::Line(line) => area.push(line),
                ReadResult::Interrupted => {
                    return Err(Error::new(ErrorKind::Internal(
                        "text entry cancelled".to_string(),
                    )));
                }
                ReadResult::Eof => {
                    return Err(Error::new(ErrorKind::Internal(
                        "unexpected EOF in text area".to_string(),
                    )));
                }
            }
        }
    }
}
