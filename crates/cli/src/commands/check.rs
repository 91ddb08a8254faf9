//! Check command: report the origin of the connection string.
//!
//! Responsibilities:
//! - Print the origin, the redacted connection string, and the trust phase.
//! - Refuse the local fallback when a networked database is required.
//!
//! Does NOT handle:
//! - Connectivity; a networked origin is not probed.

use anyhow::Result;
use bootguard_config::EffectiveConfig;

use crate::error::LocalFallbackRefused;

pub fn run(config: &EffectiveConfig, require_network: bool) -> Result<()> {
    let uri = config.connection_uri();

    println!("origin: {}", uri.origin());
    println!("connection_uri: {}", uri.redacted());
    println!("phase: {}", config.trust().phase());
    println!("generated_secret: {}", config.secret().is_generated());

    if require_network && uri.is_local_fallback() {
        return Err(LocalFallbackRefused {
            uri: uri.value().to_string(),
        }
        .into());
    }

    Ok(())
}
