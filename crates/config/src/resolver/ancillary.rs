//! Secondary settings derived alongside the main connection string.
//!
//! Responsibilities:
//! - Resolve the examples database URI (explicit or assembled, never templated).
//! - Read cache/queue endpoints with defaults.
//! - Read the hosted process log level.
//!
//! Does NOT handle:
//! - Backend selection or connectivity; these are plain assignments.

use secrecy::SecretString;
use serde::Serialize;
use tracing::debug;

use super::predicate::normalize_scheme;
use crate::constants::{
    DEFAULT_DIALECT, DEFAULT_LOG_LEVEL, DEFAULT_REDIS_CELERY_DB, DEFAULT_REDIS_HOST,
    DEFAULT_REDIS_PORT, DEFAULT_REDIS_RESULTS_DB, ENV_DIALECT, ENV_EXAMPLES_DB, ENV_EXAMPLES_HOST,
    ENV_EXAMPLES_PASSWORD, ENV_EXAMPLES_PORT, ENV_EXAMPLES_URI, ENV_EXAMPLES_USER, ENV_LOG_LEVEL,
    ENV_REDIS_CELERY_DB, ENV_REDIS_HOST, ENV_REDIS_PORT, ENV_REDIS_RESULTS_DB,
};
use crate::model::ComponentSet;
use crate::source::{EnvSource, SourceReader};

/// Resolve the examples database URI.
///
/// The explicit variable wins. Otherwise all `EXAMPLES_*` components,
/// including the port, must be present; a partial set yields `None`. The
/// dialect comes from `DATABASE_DIALECT`, not from the resolved main URI.
pub fn resolve_examples_uri<E: EnvSource>(reader: &SourceReader<E>) -> Option<String> {
    if let Some(explicit) = reader.read(ENV_EXAMPLES_URI) {
        return Some(normalize_scheme(&explicit));
    }

    let components = ComponentSet {
        dialect: reader.read(ENV_DIALECT),
        user: reader.read(ENV_EXAMPLES_USER),
        password: reader
            .read(ENV_EXAMPLES_PASSWORD)
            .map(|p| SecretString::new(p.into())),
        host: reader.read(ENV_EXAMPLES_HOST),
        port: reader.read(ENV_EXAMPLES_PORT),
        database: reader.read(ENV_EXAMPLES_DB),
    };

    match components.assemble(DEFAULT_DIALECT, None) {
        Ok(uri) => Some(uri),
        Err(missing) => {
            debug!(%missing, "Examples database not configured");
            None
        }
    }
}

/// Normalized log level from `SUPERSET_LOG_LEVEL`.
///
/// Unknown levels fall back to `info`.
pub fn resolve_log_level<E: EnvSource>(reader: &SourceReader<E>) -> String {
    let level = reader.read_or(ENV_LOG_LEVEL, DEFAULT_LOG_LEVEL).to_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => level,
        "warning" => "warn".to_string(),
        "critical" | "fatal" => "error".to_string(),
        _ => DEFAULT_LOG_LEVEL.to_string(),
    }
}

/// Cache and task-queue endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheEndpoints {
    pub host: String,
    pub port: String,
    pub celery_db: String,
    pub results_db: String,
}

impl Default for CacheEndpoints {
    fn default() -> Self {
        Self {
            host: DEFAULT_REDIS_HOST.to_string(),
            port: DEFAULT_REDIS_PORT.to_string(),
            celery_db: DEFAULT_REDIS_CELERY_DB.to_string(),
            results_db: DEFAULT_REDIS_RESULTS_DB.to_string(),
        }
    }
}

impl CacheEndpoints {
    pub fn from_reader<E: EnvSource>(reader: &SourceReader<E>) -> Self {
        Self {
            host: reader.read_or(ENV_REDIS_HOST, DEFAULT_REDIS_HOST),
            port: reader.read_or(ENV_REDIS_PORT, DEFAULT_REDIS_PORT),
            celery_db: reader.read_or(ENV_REDIS_CELERY_DB, DEFAULT_REDIS_CELERY_DB),
            results_db: reader.read_or(ENV_REDIS_RESULTS_DB, DEFAULT_REDIS_RESULTS_DB),
        }
    }

    /// Task queue broker.
    pub fn broker_url(&self) -> String {
        self.redis_url(&self.celery_db)
    }

    /// Task result backend. The cache shares this database.
    pub fn results_url(&self) -> String {
        self.redis_url(&self.results_db)
    }

    fn redis_url(&self, db: &str) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, db)
    }
}
