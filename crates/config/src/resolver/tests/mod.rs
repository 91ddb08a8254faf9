//! Tests for connection URI and secret resolution.
//!
//! Responsibilities:
//! - Test the candidate priority chain and fallthrough behavior.
//! - Test secret deny-list handling and generation.
//! - Test examples URI, cache endpoints, and log level derivation.
//!
//! Invariants:
//! - Tests resolve against `MapEnv` snapshots, never the process environment,
//!   so they need no serialization.

use crate::source::{MapEnv, SourceReader};

pub mod uri_tests;

/// A reader over a snapshot built from `(name, value)` pairs.
pub fn reader(vars: &[(&str, &str)]) -> SourceReader<MapEnv> {
    SourceReader::new(vars.iter().copied().collect())
}
