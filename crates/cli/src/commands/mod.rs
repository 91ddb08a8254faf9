//! CLI command implementations.

pub mod check;
pub mod generate_secret;
pub mod resolve;

use anyhow::{Context, Result};
use bootguard_config::{Bootstrap, EffectiveConfig};

use crate::args::Cli;

/// Run start-up resolution with the global flags applied.
pub fn bootstrap(cli: &Cli) -> Result<EffectiveConfig> {
    let mut bootstrap = Bootstrap::new();

    if let Some(ref home) = cli.home {
        bootstrap = bootstrap.with_home(home.clone());
    }

    // Blank paths fall back to discovery.
    if let Some(ref path) = cli.override_file
        && !path.as_os_str().is_empty()
    {
        bootstrap = bootstrap.with_override_path(path.clone());
    }

    if cli.no_override {
        bootstrap = bootstrap.without_overrides();
    }

    bootstrap.run().context("Failed to resolve configuration")
}
