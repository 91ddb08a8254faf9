//! Generate-secret command.

use anyhow::Result;
use bootguard_config::generate_secret;
use secrecy::ExposeSecret;

/// Print a fresh secret suitable for `SUPERSET_SECRET_KEY`.
pub fn run() -> Result<()> {
    let secret = generate_secret();
    println!("{}", secret.expose_secret());
    Ok(())
}
