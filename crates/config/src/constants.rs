//! Centralized constants for the bootguard workspace.
//!
//! Environment variable names are the deployment contract: they match what
//! hosting platforms and the container templates inject, so renaming any of
//! them is a breaking change for existing deployments.

// =============================================================================
// Connection URI Sources
// =============================================================================

/// Explicit, fully-formed connection URI (highest priority).
pub const ENV_EXPLICIT_URI: &str = "SQLALCHEMY_DATABASE_URI";

/// Alternate fully-formed connection URI, as injected by managed platforms.
pub const ENV_ALT_URI: &str = "DATABASE_URL";

/// Connection dialect. Has no platform alias.
pub const ENV_DIALECT: &str = "DATABASE_DIALECT";

/// Primary component family.
pub const ENV_USER: &str = "DATABASE_USER";
pub const ENV_PASSWORD: &str = "DATABASE_PASSWORD";
pub const ENV_HOST: &str = "DATABASE_HOST";
pub const ENV_PORT: &str = "DATABASE_PORT";
pub const ENV_DATABASE: &str = "DATABASE_DB";

/// Platform-injected alias family (libpq conventions).
pub const ENV_PG_USER: &str = "PGUSER";
pub const ENV_PG_PASSWORD: &str = "PGPASSWORD";
pub const ENV_PG_HOST: &str = "PGHOST";
pub const ENV_PG_PORT: &str = "PGPORT";
pub const ENV_PG_DATABASE: &str = "PGDATABASE";

/// Default dialect used for component assembly.
pub const DEFAULT_DIALECT: &str = "postgresql";

/// Default port used for component assembly.
pub const DEFAULT_PORT: &str = "5432";

/// Legacy scheme emitted by some providers, rejected by the driver layer.
pub const LEGACY_SCHEME: &str = "postgres://";

/// Scheme the legacy one is rewritten to.
pub const NORMALIZED_SCHEME: &str = "postgresql://";

// =============================================================================
// Local Fallback
// =============================================================================

/// Home directory that roots the local fallback database.
pub const ENV_HOME: &str = "SUPERSET_HOME";

/// Home directory used when `SUPERSET_HOME` is unset.
pub const DEFAULT_HOME: &str = "/app/superset_home";

/// File name of the local fallback database inside the home directory.
pub const LOCAL_FALLBACK_DB_FILE: &str = "superset.db";

// =============================================================================
// Secret
// =============================================================================

/// Secret candidates, in priority order.
pub const ENV_SECRET: &str = "SUPERSET_SECRET_KEY";
pub const ENV_SECRET_ALIAS: &str = "SECRET_KEY";

/// Placeholder secrets shipped with templated deployments.
///
/// Exact-match only. Extend this list when a new placeholder is found.
pub const DEFAULT_DENIED_SECRETS: &[&str] =
    &["CHANGE_ME_SECRET_KEY_PLEASE", "THISISINSECURE", "CHANGE_ME"];

/// Number of random bytes in a generated secret (256 bits).
pub const GENERATED_SECRET_BYTES: usize = 32;

// =============================================================================
// Examples Database
// =============================================================================

pub const ENV_EXAMPLES_URI: &str = "SUPERSET__SQLALCHEMY_EXAMPLES_URI";
pub const ENV_EXAMPLES_USER: &str = "EXAMPLES_USER";
pub const ENV_EXAMPLES_PASSWORD: &str = "EXAMPLES_PASSWORD";
pub const ENV_EXAMPLES_HOST: &str = "EXAMPLES_HOST";
pub const ENV_EXAMPLES_PORT: &str = "EXAMPLES_PORT";
pub const ENV_EXAMPLES_DB: &str = "EXAMPLES_DB";

// =============================================================================
// Cache & Queue Endpoints
// =============================================================================

pub const ENV_REDIS_HOST: &str = "REDIS_HOST";
pub const ENV_REDIS_PORT: &str = "REDIS_PORT";
pub const ENV_REDIS_CELERY_DB: &str = "REDIS_CELERY_DB";
pub const ENV_REDIS_RESULTS_DB: &str = "REDIS_RESULTS_DB";

pub const DEFAULT_REDIS_HOST: &str = "redis";
pub const DEFAULT_REDIS_PORT: &str = "6379";
pub const DEFAULT_REDIS_CELERY_DB: &str = "0";
pub const DEFAULT_REDIS_RESULTS_DB: &str = "1";

// =============================================================================
// Logging & Overrides
// =============================================================================

/// Log level for the hosted process.
pub const ENV_LOG_LEVEL: &str = "SUPERSET_LOG_LEVEL";

/// Log level used when `SUPERSET_LOG_LEVEL` is unset or unknown.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Explicit path to the override file.
pub const ENV_OVERRIDE_PATH: &str = "BOOTGUARD_OVERRIDE_PATH";

/// Override file name looked up in the home directory.
pub const DEFAULT_OVERRIDE_FILE: &str = "superset_config_override.json";

/// Maximum characters of a candidate shown in log previews.
pub const PREVIEW_MAX_CHARS: usize = 30;
