//! Quill CLI entry point.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use quill_foundation::Result;
use quill_runtime::repl::print_error;
use quill_runtime::{Repl, ReplConfig, TextStore, serialize};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "quill",
    version,
    about = "Line-oriented command interpreter for named text areas",
    after_help = "REPL COMMANDS:\n    input <name> [<text>]\n    format <name> [<separators>]\n    cursor <name> <text> <from> <-|-> <to>\n    send <source> <target>\n    print [<name>]\n    quit"
)]
struct Cli {
    /// Script files to run before starting the REPL
    files: Vec<PathBuf>,

    /// Run the files and exit (no REPL)
    #[arg(short, long)]
    batch: bool,

    /// Load texts from this file at start and save them on exit
    #[arg(long, value_name = "PATH")]
    state: Option<PathBuf>,

    /// Continue past failing script lines
    #[arg(long)]
    keep_going: bool,

    /// Hide the welcome banner
    #[arg(long)]
    no_banner: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let store = match &cli.state {
        Some(path) if path.exists() => {
            info!(path = %path.display(), "loading state");
            serialize::load_from_file(path)?
        }
        _ => TextStore::new(),
    };

    let config = ReplConfig::default().with_banner(!cli.no_banner && cli.files.is_empty());
    let mut repl = Repl::new(config)?.with_store(store);

    let outcome = run_session(cli, &mut repl);
    if let Some(path) = &cli.state {
        info!(path = %path.display(), "saving state");
    }
    serialize::save_after(outcome, repl.interpreter().engine(), cli.state.as_deref())
}

/// Runs the script files, then the REPL unless in batch mode or a script
/// ended the session.
fn run_session(cli: &Cli, repl: &mut Repl) -> Result<()> {
    let terminator = repl.config().area_terminator.clone();

    for file in &cli.files {
        let report = repl.interpreter_mut().run_script(
            file,
            &terminator,
            cli.keep_going,
            &mut io::stdout().lock(),
        )?;
        debug!(
            file = %file.display(),
            executed = report.executed,
            failed = report.errors.len(),
            "script finished"
        );
        for e in &report.errors {
            print_error(e);
        }
        if report.ended {
            return Ok(());
        }
    }

    if !cli.batch {
        repl.run()?;
    }
    Ok(())
}
