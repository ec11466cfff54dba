//! Line interpreter.
//!
//! Runs one command line at a time against a text engine, and whole script
//! files line by line.

use std::fs;
use std::io::Write;
use std::path::Path;

use quill_foundation::{Error, ErrorContext, ErrorKind, Result};
use quill_parser::{InputTokenizer, Matcher};
use tracing::{debug, warn};

use crate::dispatch::Dispatcher;
use crate::engine::{AreaPrompt, TextEngine};

/// Outcome of running a script.
#[derive(Debug, Default)]
pub struct ScriptReport {
    /// Commands that ran successfully.
    pub executed: usize,
    /// Errors skipped in keep-going mode, with file and line context.
    pub errors: Vec<Error>,
    /// True if the script hit the terminating command.
    pub ended: bool,
}

/// Runs command lines against an engine.
#[derive(Debug)]
pub struct Interpreter<T: TextEngine> {
    engine: T,
    matcher: Matcher<'static>,
}

impl<T: TextEngine> Interpreter<T> {
    /// Creates an interpreter over the built-in grammars.
    pub fn new(engine: T) -> Self {
        Self {
            engine,
            matcher: Matcher::new(),
        }
    }

    /// Returns a reference to the engine.
    pub const fn engine(&self) -> &T {
        &self.engine
    }

    /// Returns a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut T {
        &mut self.engine
    }

    /// Consumes the interpreter, returning the engine.
    pub fn into_engine(self) -> T {
        self.engine
    }

    /// Executes one line.
    ///
    /// Returns `Ok(false)` when the line is the terminating command and
    /// `Ok(true)` otherwise. Blank lines do nothing.
    ///
    /// # Errors
    ///
    /// Returns a command error for lines that match no grammar, or any error
    /// raised while dispatching.
    pub fn execute<P, W>(&mut self, line: &str, prompt: &mut P, out: &mut W) -> Result<bool>
    where
        P: AreaPrompt + ?Sized,
        W: Write + ?Sized,
    {
        let normalized = InputTokenizer::normalize(line);
        if normalized.is_empty() {
            return Ok(true);
        }
        if self.matcher.is_end(&normalized) {
            debug!("end of input requested");
            return Ok(false);
        }

        let command = self.matcher.parse(&normalized)?;
        Dispatcher::dispatch(command, &mut self.engine, prompt, out)?;
        Ok(true)
    }

    /// Runs a script file.
    ///
    /// Lines starting with `#` are comments. An input command without inline
    /// data takes the following lines up to `terminator` as its text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or the first failing
    /// line's error (with file and line context) unless `keep_going` is set.
    pub fn run_script<W: Write + ?Sized>(
        &mut self,
        path: &Path,
        terminator: &str,
        keep_going: bool,
        out: &mut W,
    ) -> Result<ScriptReport> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::IoError(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        })?;
        self.run_source(&path.display().to_string(), &source, terminator, keep_going, out)
    }

    /// Runs script text. `name` is used in error context.
    ///
    /// # Errors
    ///
    /// Returns the first failing line's error unless `keep_going` is set.
    pub fn run_source<W: Write + ?Sized>(
        &mut self,
        name: &str,
        source: &str,
        terminator: &str,
        keep_going: bool,
        out: &mut W,
    ) -> Result<ScriptReport> {
        let mut lines = ScriptLines::new(source, terminator);
        let mut report = ScriptReport::default();

        while let Some((number, line)) = lines.next_line() {
            if line.trim_start().starts_with('#') {
                continue;
            }
            let blank = line.trim().is_empty();

            match self.execute(&line, &mut lines, out) {
                Ok(true) => {
                    if !blank {
                        report.executed += 1;
                    }
                }
                Ok(false) => {
                    report.ended = true;
                    break;
                }
                Err(e) => {
                    let e = e.with_context(ErrorContext::new().with_source(name).with_line(number));
                    if !keep_going {
                        return Err(e);
                    }
                    warn!(source = name, line = number, error = %e, "skipping failed line");
                    report.errors.push(e);
                }
            }
        }

        Ok(report)
    }
}

/// Script lines, doubling as the area prompt for input commands.
struct ScriptLines {
    lines: Vec<String>,
    next: usize,
    terminator: String,
}

impl ScriptLines {
    fn new(source: &str, terminator: &str) -> Self {
        Self {
            lines: source.lines().map(String::from).collect(),
            next: 0,
            terminator: terminator.to_string(),
        }
    }

    /// Next line with its 1-indexed number.
    fn next_line(&mut self) -> Option<(usize, String)> {
        let line = self.lines.get(self.next)?.clone();
        self.next += 1;
        Some((self.next, line))
    }
}

impl AreaPrompt for ScriptLines {
    fn prompt_area(&mut self, _name: &str, _existing: Option<&str>) -> Result<String> {
        let mut area = Vec::new();
        while let Some((_, line)) = self.next_line() {
            if line.trim() == self.terminator {
                return Ok(area.join("\n"));
            }
            area.push(line);
        }
        Err(Error::new(ErrorKind::Internal(format!(
            "text area not closed with '{}'",
            self.terminator
        ))))
    }
}
