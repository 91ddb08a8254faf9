//! Shared test utilities for bootguard integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Clear every variable resolution reads so host values never leak in.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Each command gets its own home directory; callers keep the `TempDir` alive.

use assert_cmd::Command;
use tempfile::TempDir;

/// Variables read during resolution.
const RESOLUTION_VARS: &[&str] = &[
    "SQLALCHEMY_DATABASE_URI",
    "DATABASE_URL",
    "DATABASE_DIALECT",
    "DATABASE_USER",
    "DATABASE_PASSWORD",
    "DATABASE_HOST",
    "DATABASE_PORT",
    "DATABASE_DB",
    "PGUSER",
    "PGPASSWORD",
    "PGHOST",
    "PGPORT",
    "PGDATABASE",
    "SUPERSET_HOME",
    "SUPERSET_SECRET_KEY",
    "SECRET_KEY",
    "SUPERSET__SQLALCHEMY_EXAMPLES_URI",
    "EXAMPLES_USER",
    "EXAMPLES_PASSWORD",
    "EXAMPLES_HOST",
    "EXAMPLES_PORT",
    "EXAMPLES_DB",
    "REDIS_HOST",
    "REDIS_PORT",
    "REDIS_CELERY_DB",
    "REDIS_RESULTS_DB",
    "SUPERSET_LOG_LEVEL",
    "BOOTGUARD_OVERRIDE_PATH",
    "RUST_LOG",
];

/// Returns a hermetic `bootguard` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Resolution variables are cleared to ensure no leakage from the host.
/// - `SUPERSET_HOME` points at a fresh temporary directory.
pub fn bootguard_cmd() -> (Command, TempDir) {
    let home = TempDir::new().expect("temp home");
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("bootguard");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for var in RESOLUTION_VARS {
        cmd.env_remove(var);
    }
    cmd.env("SUPERSET_HOME", home.path());

    (cmd, home)
}

/// Clear resolution variables on a command built without `bootguard_cmd`.
#[allow(dead_code)]
pub fn clear_resolution_env(cmd: &mut Command) {
    for var in RESOLUTION_VARS {
        cmd.env_remove(var);
    }
}
