//! Routes matched commands to the text engine.

use std::io::Write;

use quill_foundation::{Cursor, Result, Text};
use quill_parser::Command;
use tracing::debug;

use crate::engine::{AreaPrompt, TextEngine};
use crate::serialize;

/// Maps each command variant to exactly one engine call.
pub struct Dispatcher;

impl Dispatcher {
    /// Dispatches a command.
    ///
    /// Input commands without inline data prompt for it first. Print output
    /// is written to `out` as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the engine, the prompt, or the writer.
    pub fn dispatch<T, P, W>(command: Command, engine: &mut T, prompt: &mut P, out: &mut W) -> Result<()>
    where
        T: TextEngine + ?Sized,
        P: AreaPrompt + ?Sized,
        W: Write + ?Sized,
    {
        debug!(kind = %command.kind(), "dispatching command");

        match command {
            Command::Input(cmd) => {
                let data = match cmd.data {
                    Some(data) => data,
                    None => {
                        let existing = engine
                            .lookup_texts(&cmd.name)
                            .into_iter()
                            .next()
                            .map(|t| t.data);
                        prompt.prompt_area(&cmd.name, existing.as_deref())?
                    }
                };
                engine.add_text(Text::new(cmd.name, data))
            }
            Command::Format(cmd) => engine.format(&cmd.name, cmd.separators.as_deref()),
            Command::Cursor(cmd) => {
                let target = engine
                    .lookup_texts(&cmd.target)
                    .into_iter()
                    .next()
                    .map(|t| t.name);
                engine.add_cursor(Cursor {
                    name: cmd.name,
                    target,
                    from: cmd.from,
                    ahead: cmd.ahead,
                    to: cmd.to,
                })
            }
            Command::Send(cmd) => engine.send_text(&cmd.source_name, &cmd.target_name),
            Command::Print(cmd) => {
                let texts = engine.print(cmd.name.as_deref())?;
                serialize::write_texts(out, &texts)
            }
        }
    }
}
