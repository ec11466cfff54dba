//! Typed commands.
//!
//! A [`Command`] is only built from a line that fully matched its grammar.

use std::fmt;

use quill_foundation::CursorDestination;

use crate::grammar::{BACKWARD, CommandKind, FORWARD};

/// Create or replace a text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputCmd {
    /// Text name
    pub name: String,
    /// Inline data; absent means it must be prompted for
    pub data: Option<String>,
}

/// Reflow a text around separator characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatCmd {
    /// Text name
    pub name: String,
    /// One-character separators, in the order given
    pub separators: Option<Vec<String>>,
}

/// Place a cursor in a text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CursorCmd {
    /// Cursor name
    pub name: String,
    /// Reference to the target text, resolved at dispatch
    pub target: String,
    /// Start of the cursor
    pub from: CursorDestination,
    /// True for `->`, false for `<-`
    pub ahead: bool,
    /// End of the cursor
    pub to: CursorDestination,
}

/// Append one text to another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendCmd {
    /// Text to copy from
    pub source_name: String,
    /// Text to append to
    pub target_name: String,
}

/// Print one text, or every text when no name is given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintCmd {
    /// Name or pattern of the texts to print
    pub name: Option<String>,
}

/// A matched command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `input <name> [<text>]`
    Input(InputCmd),
    /// `format <name> [<separators>]`
    Format(FormatCmd),
    /// `cursor <name> <target> <from> <direction> <to>`
    Cursor(CursorCmd),
    /// `send <source> <target>`
    Send(SendCmd),
    /// `print [<name>]`
    Print(PrintCmd),
}

impl Command {
    /// The grammar this command came from.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::Input(_) => CommandKind::Input,
            Self::Format(_) => CommandKind::Format,
            Self::Cursor(_) => CommandKind::Cursor,
            Self::Send(_) => CommandKind::Send,
            Self::Print(_) => CommandKind::Print,
        }
    }
}

/// Renders the canonical command line.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(cmd) => {
                write!(f, "input {}", cmd.name)?;
                if let Some(data) = &cmd.data {
                    write!(f, " {data}")?;
                }
                Ok(())
            }
            Self::Format(cmd) => {
                write!(f, "format {}", cmd.name)?;
                if let Some(separators) = &cmd.separators {
                    write!(f, " {}", separators.concat())?;
                }
                Ok(())
            }
            Self::Cursor(cmd) => write!(
                f,
                "cursor {} {} {} {} {}",
                cmd.name,
                cmd.target,
                cmd.from,
                if cmd.ahead { FORWARD } else { BACKWARD },
                cmd.to
            ),
            Self::Send(cmd) => write!(f, "send {} {}", cmd.source_name, cmd.target_name),
            Self::Print(cmd) => match &cmd.name {
                Some(name) => write!(f, "print {name}"),
                None => f.write_str("print"),
            },
        }
    }
}
