//! Resolve command: print the effective settings.

use anyhow::Result;
use bootguard_config::EffectiveConfig;
use tracing::info;

use crate::formatters::{OutputFormat, format_settings};

pub fn run(config: &EffectiveConfig, format: OutputFormat, show_secrets: bool) -> Result<()> {
    if show_secrets {
        info!("Printing unmasked secret and connection credentials");
    }

    let output = format_settings(&config.to_settings(show_secrets), format)?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
