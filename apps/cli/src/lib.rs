//! # tabsplit CLI Library
//!
//! The presentation layer for tabsplit: collects participants, calls the
//! core calculator, prints the results.
//!
//! ## Module Organization
//! ```text
//! tabsplit_cli/
//! ├── lib.rs          ◄─── You are here (argument parsing, logging, run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── roster.rs   ◄─── Participants with stable ids
//! │   └── config.rs   ◄─── Environment configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports, coercion logging
//! │   ├── calculate.rs◄─── One-shot calculation
//! │   └── session.rs  ◄─── Interactive roster editing
//! ├── render.rs       ◄─── Table / JSON output
//! └── error.rs        ◄─── CLI error type and exit codes
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use commands::calculate::CalculateArgs;
use commands::session::{Session, SessionArgs};
use error::{CliError, CliResult, EXIT_SUCCESS};
use state::AppConfig;

/// Split a shared bill (13% tax plus tip) and see who owes whom.
#[derive(Debug, Parser)]
#[command(name = "tabsplit", version, about)]
pub struct Cli {
    /// More log output on stderr (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split a bill given on the command line or in a JSON file
    Calculate(CalculateArgs),

    /// Edit participants interactively and calculate on demand
    Session(SessionArgs),
}

/// Runs the CLI and returns the process exit code.
///
/// ## Startup Sequence
/// 1. Parse arguments
/// 2. Initialize tracing (stderr)
/// 3. Load configuration from the environment
/// 4. Dispatch the subcommand
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    info!("Starting tabsplit");

    match dispatch(cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            if !matches!(err, CliError::NothingToCalculate) {
                error!(%err, "command failed");
            }
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn dispatch(cli: Cli) -> CliResult<()> {
    let config = AppConfig::load()?;
    let stdout = io::stdout();

    match cli.command {
        Command::Calculate(args) => commands::calculate::run(&args, &config, &mut stdout.lock()),
        Command::Session(args) => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            Session::from_args(&args, &config).run(stdin.lock(), &mut stdout.lock(), prompt)
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tabsplit_cli=trace` - Show trace for the CLI only
/// - Default: WARN, plus INFO for tabsplit (raised by `-v`)
///
/// Logs go to stderr so reports on stdout stay clean for pipes.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Filter used when `RUST_LOG` is unset. `tabsplit` covers both crates.
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn,tabsplit=info",
        1 => "warn,tabsplit=debug",
        _ => "trace",
    }
}
