//! Connection URI resolution.
//!
//! Responsibilities:
//! - Read the explicit/alternate URI candidates and the component families.
//! - Pick the first present-and-complete candidate, normalizing its scheme.
//! - Fall back to component assembly, then to the local file database.
//!
//! Does NOT handle:
//! - Override steps or publishing the trusted value (see `guard`).
//! - Creating the local fallback directory (see `bootstrap`).
//!
//! Invariants:
//! - Priority: explicit URI > alternate URI > components > local fallback.
//! - No merging across candidates once one is accepted.
//! - A present but incomplete candidate is invalid, not absent: it is logged
//!   at warning level and skipped.
//! - The primary component family wins over the platform alias family.

use std::path::{Path, PathBuf};

use secrecy::SecretString;
use tracing::{debug, info, warn};

use super::error::Fallthrough;
use super::predicate::{is_complete, normalize_scheme, preview, redact_uri};
use crate::constants::{
    DEFAULT_DIALECT, DEFAULT_HOME, DEFAULT_PORT, ENV_ALT_URI, ENV_DATABASE, ENV_DIALECT,
    ENV_EXPLICIT_URI, ENV_HOME, ENV_HOST, ENV_PASSWORD, ENV_PG_DATABASE, ENV_PG_HOST,
    ENV_PG_PASSWORD, ENV_PG_PORT, ENV_PG_USER, ENV_PORT, ENV_USER, LOCAL_FALLBACK_DB_FILE,
};
use crate::model::{
    CandidateOrigin, ComponentSet, ConnectionCandidate, MissingComponents, ResolvedUri,
};
use crate::source::{EnvSource, SourceReader};

/// The outcome of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The accepted connection string.
    pub uri: ResolvedUri,
    /// Candidates passed over before `uri` was accepted, in priority order.
    pub skipped: Vec<Fallthrough>,
}

/// Read the full-URI candidates in priority order.
pub fn read_candidates<E: EnvSource>(reader: &SourceReader<E>) -> [ConnectionCandidate; 2] {
    [
        ConnectionCandidate::new(CandidateOrigin::ExplicitUri, reader.read(ENV_EXPLICIT_URI)),
        ConnectionCandidate::new(CandidateOrigin::AltUri, reader.read(ENV_ALT_URI)),
    ]
}

/// Read connection components, folding the alias family into the primary one.
pub fn read_components<E: EnvSource>(reader: &SourceReader<E>) -> ComponentSet {
    ComponentSet {
        dialect: reader.read(ENV_DIALECT),
        user: reader.first_of(&[ENV_USER, ENV_PG_USER]),
        password: reader
            .first_of(&[ENV_PASSWORD, ENV_PG_PASSWORD])
            .map(|p| SecretString::new(p.into())),
        host: reader.first_of(&[ENV_HOST, ENV_PG_HOST]),
        port: reader.first_of(&[ENV_PORT, ENV_PG_PORT]),
        database: reader.first_of(&[ENV_DATABASE, ENV_PG_DATABASE]),
    }
}

/// Resolve a connection string from prioritized candidates.
///
/// Never fails: when nothing richer resolves, `local_fallback` is returned.
pub fn resolve(
    candidates: &[ConnectionCandidate],
    components: &ComponentSet,
    local_fallback: &str,
) -> Resolution {
    let mut skipped = Vec::new();

    for candidate in candidates {
        let origin = candidate.origin();
        match candidate.raw_value() {
            None => {
                debug!(%origin, "Connection URI candidate not set");
                skipped.push(Fallthrough::AbsentSource { origin });
            }
            Some(raw) if is_complete(raw) => {
                let value = normalize_scheme(raw);
                info!(%origin, uri = %redact_uri(&value), "Using connection URI");
                return Resolution {
                    uri: ResolvedUri::new(value, origin),
                    skipped,
                };
            }
            Some(raw) => {
                let preview = preview(raw);
                warn!(
                    %origin,
                    %preview,
                    "Connection URI is incomplete, building from components instead"
                );
                skipped.push(Fallthrough::MalformedCandidate { origin, preview });
            }
        }
    }

    match components.assemble(DEFAULT_DIALECT, Some(DEFAULT_PORT)) {
        Ok(value) => {
            info!(
                origin = %CandidateOrigin::Components,
                uri = %redact_uri(&value),
                "Using connection URI built from components"
            );
            return Resolution {
                uri: ResolvedUri::new(value, CandidateOrigin::Components),
                skipped,
            };
        }
        Err(MissingComponents(missing)) => {
            warn!(
                missing = %missing.join(","),
                "Connection components incomplete"
            );
            skipped.push(Fallthrough::MissingRequiredComponents { missing });
        }
    }

    warn!(
        uri = %local_fallback,
        "FALLING BACK TO LOCAL DATABASE: no networked database is configured"
    );
    Resolution {
        uri: ResolvedUri::new(local_fallback.to_string(), CandidateOrigin::LocalFallback),
        skipped,
    }
}

/// Resolves the connection string from an environment source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriResolver {
    home: PathBuf,
}

impl UriResolver {
    /// A resolver whose local fallback is rooted at `home`.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// A resolver whose home comes from `SUPERSET_HOME`, with the default
    /// home when unset.
    pub fn from_reader<E: EnvSource>(reader: &SourceReader<E>) -> Self {
        Self::new(reader.read_or(ENV_HOME, DEFAULT_HOME))
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Path of the local fallback database file.
    pub fn local_fallback_path(&self) -> PathBuf {
        self.home.join(LOCAL_FALLBACK_DB_FILE)
    }

    /// The deterministic file-backed connection string.
    pub fn local_fallback(&self) -> String {
        format!("sqlite:///{}", self.local_fallback_path().display())
    }

    /// Run one resolution pass against `reader`.
    pub fn resolve_from<E: EnvSource>(&self, reader: &SourceReader<E>) -> Resolution {
        let candidates = read_candidates(reader);
        let components = read_components(reader);
        resolve(&candidates, &components, &self.local_fallback())
    }
}
