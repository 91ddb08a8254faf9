//! Data model for configuration resolution.
//!
//! Responsibilities:
//! - Define connection candidates, component sets, and resolved URIs.
//! - Define the secret value and the placeholder deny-list.
//! - Define the trust state written by the override guard.
//! - Define the settings map handed to override steps and to the host process.
//!
//! Does NOT handle:
//! - Reading values from the environment (see `source`).
//! - Resolution logic (see `resolver`) or phase ordering (see `guard`).
//!
//! Invariants:
//! - Secret material uses `secrecy::SecretString` and is redacted in `Debug`.
//! - `ResolvedUri` never prints a password in `Debug` or `Display`.
//! - `TrustState` exposes no mutating API outside this crate.

mod secret;
mod settings;
mod trust;
mod uri;

pub use secret::{DenyList, SecretValue};
pub use settings::{
    BROKER_URL, CACHE_REDIS_URL, CONNECTION_URI, EXAMPLES_URI, LOG_LEVEL, RESULTS_BACKEND_URL,
    SECRET_VALUE, Settings,
};
pub use trust::{TrustPhase, TrustState};
pub use uri::{CandidateOrigin, ComponentSet, ConnectionCandidate, MissingComponents, ResolvedUri};
