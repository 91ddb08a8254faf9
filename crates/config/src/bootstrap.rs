//! Start-up orchestration.
//!
//! Responsibilities:
//! - Sequence secret resolution, the guarded URI resolution, and local
//!   fallback preparation in that order.
//! - Seed the settings the override step sees (examples URI, cache
//!   endpoints, log level).
//! - Produce the `EffectiveConfig` the hosting process reads.
//!
//! Does NOT handle:
//! - Resolution rules (see `resolver`) or phase semantics (see `guard`).
//! - Installing a tracing subscriber (left to the binary).
//!
//! Invariants / Assumptions:
//! - The secret is bound before any override step runs.
//! - `secret_value` is reserved; an override step cannot set it.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use secrecy::ExposeSecret;
use tracing::{info, warn};

use crate::guard::{FileOverrides, NoOverrides, OverrideGuard, OverrideStep};
use crate::model::{
    BROKER_URL, CACHE_REDIS_URL, CONNECTION_URI, DenyList, EXAMPLES_URI, LOG_LEVEL,
    RESULTS_BACKEND_URL, ResolvedUri, SECRET_VALUE, SecretValue, Settings, TrustState,
};
use crate::resolver::{
    CacheEndpoints, ConfigError, SecretProvisioner, UriResolver, resolve_examples_uri,
    resolve_log_level,
};
use crate::source::{EnvSource, ProcessEnv, SourceReader};

/// Placeholder shown for secrets in redacted output.
pub const REDACTED: &str = "***";

/// Which override step `Bootstrap::run` uses.
enum OverrideChoice {
    /// Discover the override file.
    Discover(Option<PathBuf>),
    Disabled,
    Custom(Box<dyn OverrideStep>),
}

/// Builder that runs the full start-up resolution once.
pub struct Bootstrap<E = ProcessEnv> {
    env: E,
    home: Option<PathBuf>,
    overrides: OverrideChoice,
    deny_list: DenyList,
}

impl Default for Bootstrap<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl Bootstrap<ProcessEnv> {
    /// A bootstrap over the live process environment.
    pub fn new() -> Self {
        Self::with_env(ProcessEnv)
    }
}

impl<E: EnvSource> Bootstrap<E> {
    /// A bootstrap over an arbitrary environment source.
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            home: None,
            overrides: OverrideChoice::Discover(None),
            deny_list: DenyList::default(),
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax or
    /// cannot be read. Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the local fallback home (takes precedence over `SUPERSET_HOME`).
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Use a specific override file instead of discovering one.
    pub fn with_override_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.overrides = OverrideChoice::Discover(Some(path.into()));
        self
    }

    /// Use a custom override step.
    pub fn with_override_step(mut self, step: impl OverrideStep + 'static) -> Self {
        self.overrides = OverrideChoice::Custom(Box::new(step));
        self
    }

    /// Skip the override step entirely.
    pub fn without_overrides(mut self) -> Self {
        self.overrides = OverrideChoice::Disabled;
        self
    }

    pub fn with_deny_list(mut self, deny_list: DenyList) -> Self {
        self.deny_list = deny_list;
        self
    }

    /// Resolve everything and return the effective configuration.
    pub fn run(self) -> Result<EffectiveConfig, ConfigError> {
        let reader = SourceReader::new(&self.env);

        // The secret must be bound before anything else runs.
        let secret = SecretProvisioner::new()
            .with_deny_list(self.deny_list)
            .resolve(&reader);

        let resolver = match self.home {
            Some(home) => UriResolver::new(home),
            None => UriResolver::from_reader(&reader),
        };
        let settings = seed_settings(&reader);

        let step: Box<dyn OverrideStep> = match self.overrides {
            OverrideChoice::Discover(explicit) => {
                Box::new(FileOverrides::discover(explicit, &reader, resolver.home()))
            }
            OverrideChoice::Disabled => Box::new(NoOverrides),
            OverrideChoice::Custom(step) => step,
        };

        let outcome = OverrideGuard::new().run(
            || resolver.resolve_from(&reader).uri,
            &step,
            settings,
        )?;

        let mut settings = outcome.settings;
        if settings.remove(SECRET_VALUE).is_some() {
            warn!(
                step = step.name(),
                "Override attempted to set the secret; ignored because it is bound before overrides"
            );
        }

        if outcome.trust.uri().is_local_fallback() {
            prepare_local_fallback(resolver.home())?;
        }

        if secret.is_generated() {
            info!("Using a generated secret; sessions will not survive a restart");
        }

        Ok(EffectiveConfig {
            trust: outcome.trust,
            secret,
            settings,
        })
    }
}

/// Settings known before the override step runs.
fn seed_settings<E: EnvSource>(reader: &SourceReader<E>) -> Settings {
    let cache = CacheEndpoints::from_reader(reader);
    let mut settings = Settings::new();
    if let Some(examples) = resolve_examples_uri(reader) {
        settings.insert(EXAMPLES_URI, examples);
    }
    settings.insert(CACHE_REDIS_URL, cache.results_url());
    settings.insert(BROKER_URL, cache.broker_url());
    settings.insert(RESULTS_BACKEND_URL, cache.results_url());
    settings.insert(LOG_LEVEL, resolve_log_level(reader));
    settings
}

/// Ensure the local fallback home exists and is writable.
///
/// Failure is fatal: there is nothing left to fall back to.
pub fn prepare_local_fallback(home: &Path) -> Result<(), ConfigError> {
    let unwritable = |source| ConfigError::LocalFallbackUnwritable {
        path: home.to_path_buf(),
        source,
    };

    fs::create_dir_all(home).map_err(unwritable)?;

    let marker = home.join(".bootguard-write-check");
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&marker)
        .map_err(unwritable)?;
    fs::remove_file(&marker).map_err(unwritable)?;
    Ok(())
}

/// The configuration a process runs with, resolved once at start-up.
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    trust: TrustState,
    secret: SecretValue,
    settings: Settings,
}

impl EffectiveConfig {
    pub fn trust(&self) -> &TrustState {
        &self.trust
    }

    pub fn connection_uri(&self) -> &ResolvedUri {
        self.trust.uri()
    }

    pub fn secret(&self) -> &SecretValue {
        &self.secret
    }

    /// Settings after overrides, excluding the secret.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The full output surface.
    ///
    /// With `expose_secrets` false, the secret is replaced by `***` and the
    /// connection string password is masked.
    pub fn to_settings(&self, expose_secrets: bool) -> Settings {
        let mut out = self.settings.clone();
        let uri = self.connection_uri();
        if expose_secrets {
            out.insert(CONNECTION_URI, uri.value());
            out.insert(SECRET_VALUE, self.secret.expose_secret());
        } else {
            out.insert(CONNECTION_URI, uri.redacted());
            out.insert(SECRET_VALUE, REDACTED);
        }
        out
    }
}
