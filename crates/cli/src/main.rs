//! Bootguard CLI - start-up configuration resolution for a hosted analytics server.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Install the tracing subscriber.
//! - Run start-up resolution and print or check the result.
//!
//! Does NOT handle:
//! - Resolution rules or the override guard (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values are visible
//!   to every later read of the environment.
//! - Logs go to stderr; stdout carries command output only.

mod args;
mod commands;
mod error;
mod formatters;

use args::{Cli, Commands};
use bootguard_config::{Bootstrap, SourceReader, resolver::resolve_log_level};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing
    if let Err(e) = Bootstrap::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    // RUST_LOG wins; otherwise the hosted process log level applies.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(resolve_log_level(&SourceReader::process())));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(&cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Resolve {
            format,
            show_secrets,
        } => {
            let format: formatters::OutputFormat = format.parse()?;
            let config = commands::bootstrap(cli)?;
            commands::resolve::run(&config, format, *show_secrets)
        }
        Commands::Check { require_network } => {
            let config = commands::bootstrap(cli)?;
            commands::check::run(&config, *require_network)
        }
        Commands::GenerateSecret => commands::generate_secret::run(),
    }
}
