//! Resolution of connection strings and secrets from environment sources.
//!
//! Responsibilities:
//! - Apply the completeness predicate and scheme normalization to candidates.
//! - Walk the candidate priority chain down to the local fallback.
//! - Resolve the signing secret, rejecting deny-listed placeholders.
//! - Derive the examples URI and the cache/queue endpoints.
//!
//! Does NOT handle:
//! - Running override steps or phase ordering (see `guard`).
//! - Creating the local fallback directory (see `bootstrap`).
//!
//! Invariants / Assumptions:
//! - Resolution never fails for missing configuration; absence falls through.
//! - Resolution is idempotent and does not mutate its sources.
//! - Log events never contain credentials in full.

mod ancillary;
mod error;
mod predicate;
mod secret;
mod uri;

pub use ancillary::{CacheEndpoints, resolve_examples_uri, resolve_log_level};
pub use error::{ConfigError, Fallthrough};
pub use predicate::{is_complete, normalize_scheme, preview, redact_uri};
pub use secret::{SecretProvisioner, generate_secret, resolve_secret};
pub use uri::{Resolution, UriResolver, read_candidates, read_components, resolve};

#[cfg(test)]
mod tests;
