//! Start-up configuration resolution for a hosted web analytics server.
//!
//! This crate resolves the database connection string and signing secret from
//! environment variables, runs an untrusted override step between two
//! resolution passes, and guarantees the environment-derived connection
//! string is what the host process finally sees.

pub mod bootstrap;
pub mod constants;
pub mod guard;
pub mod model;
pub mod resolver;
pub mod source;

pub use bootstrap::{Bootstrap, EffectiveConfig, REDACTED, prepare_local_fallback};
pub use guard::{
    DiscardedOverride, FileOverrides, FnOverride, GuardOutcome, NoOverrides, OverrideError,
    OverrideGuard, OverrideStep,
};
pub use model::{
    CandidateOrigin, ComponentSet, ConnectionCandidate, DenyList, MissingComponents, ResolvedUri,
    SecretValue, Settings, TrustPhase, TrustState,
};
pub use resolver::{
    CacheEndpoints, ConfigError, Fallthrough, Resolution, SecretProvisioner, UriResolver,
    generate_secret, is_complete, normalize_scheme, preview, redact_uri, resolve, resolve_secret,
};
pub use source::{EnvSource, MapEnv, ProcessEnv, SourceReader, env_var_or_none};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
