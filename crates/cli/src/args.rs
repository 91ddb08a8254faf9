//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not read resolution inputs; `SUPERSET_HOME` and friends are read
//!   by the config crate so the CLI and library agree on precedence.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bootguard")]
#[command(about = "Resolve and enforce start-up database configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  bootguard resolve\n  bootguard resolve --format env --show-secrets\n  bootguard check --require-network\n  bootguard --override-file ./override.json resolve\n  bootguard generate-secret\n"
)]
pub struct Cli {
    /// Home directory for the local fallback database (overrides SUPERSET_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// JSON override file applied between the two resolution passes
    #[arg(long, global = true, value_name = "FILE")]
    pub override_file: Option<PathBuf>,

    /// Skip the override step entirely
    #[arg(long, global = true, conflicts_with = "override_file")]
    pub no_override: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the effective settings
    Resolve {
        /// Output format (json, yaml, env)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Print the secret and connection password instead of masking them
        #[arg(long)]
        show_secrets: bool,
    },

    /// Report where the connection string came from
    Check {
        /// Fail with exit code 3 when only the local fallback database is available
        #[arg(long)]
        require_network: bool,
    },

    /// Print a freshly generated secret
    GenerateSecret,
}
