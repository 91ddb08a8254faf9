//! Override steps run between the guard's two resolution passes.
//!
//! Responsibilities:
//! - Define the `OverrideStep` extension point.
//! - Provide the no-op step, a closure adapter, and the JSON file step.
//!
//! Does NOT handle:
//! - Protecting the trusted connection string (see `OverrideGuard`).
//!
//! Invariants:
//! - A missing override file is not an error: the step becomes a no-op.
//! - A present but unreadable or non-object file is a fatal error.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::constants::{DEFAULT_OVERRIDE_FILE, ENV_OVERRIDE_PATH};
use crate::model::Settings;
use crate::source::{EnvSource, SourceReader};

/// Errors raised by override steps.
#[derive(Error, Debug)]
pub enum OverrideError {
    #[error("Failed to read override file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse override file at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Override file at {path} must contain a JSON object")]
    NotAnObject { path: PathBuf },

    /// A custom step refused to produce settings.
    #[error("Override step '{step}' failed: {message}")]
    Rejected { step: String, message: String },
}

/// An untrusted step that may rewrite any configuration name.
///
/// Invoked exactly once per start-up, between the two guard phases.
pub trait OverrideStep {
    /// Short name used in log events.
    fn name(&self) -> &str {
        "override"
    }

    fn apply_overrides(&self, settings: Settings) -> Result<Settings, OverrideError>;
}

impl<T: OverrideStep + ?Sized> OverrideStep for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn apply_overrides(&self, settings: Settings) -> Result<Settings, OverrideError> {
        (**self).apply_overrides(settings)
    }
}

/// No override collaborator: phase B does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl OverrideStep for NoOverrides {
    fn name(&self) -> &str {
        "none"
    }

    fn apply_overrides(&self, settings: Settings) -> Result<Settings, OverrideError> {
        Ok(settings)
    }
}

/// Adapts a closure into an `OverrideStep`.
pub struct FnOverride<F> {
    name: String,
    apply: F,
}

impl<F> FnOverride<F>
where
    F: Fn(Settings) -> Result<Settings, OverrideError>,
{
    pub fn new(name: impl Into<String>, apply: F) -> Self {
        Self {
            name: name.into(),
            apply,
        }
    }
}

impl<F> OverrideStep for FnOverride<F>
where
    F: Fn(Settings) -> Result<Settings, OverrideError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply_overrides(&self, settings: Settings) -> Result<Settings, OverrideError> {
        (self.apply)(settings)
    }
}

/// Merges a JSON object of `name -> value` pairs into the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOverrides {
    path: PathBuf,
}

impl FileOverrides {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Locate the override file.
    ///
    /// Precedence: `explicit`, then `BOOTGUARD_OVERRIDE_PATH`, then the
    /// default file name inside `home`.
    pub fn discover<E: EnvSource>(
        explicit: Option<PathBuf>,
        reader: &SourceReader<E>,
        home: &Path,
    ) -> Self {
        let path = explicit
            .or_else(|| reader.read(ENV_OVERRIDE_PATH).map(PathBuf::from))
            .unwrap_or_else(|| home.join(DEFAULT_OVERRIDE_FILE));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the override file; `Ok(None)` when it does not exist.
    pub fn load(&self) -> Result<Option<Settings>, OverrideError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(OverrideError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|source| OverrideError::Parse {
                path: self.path.clone(),
                source,
            })?;

        Settings::try_from(value)
            .map(Some)
            .map_err(|_| OverrideError::NotAnObject {
                path: self.path.clone(),
            })
    }
}

impl OverrideStep for FileOverrides {
    fn name(&self) -> &str {
        "file"
    }

    fn apply_overrides(&self, mut settings: Settings) -> Result<Settings, OverrideError> {
        match self.load()? {
            Some(overrides) => {
                let count = overrides.len();
                let replaced = settings.merge(overrides);
                info!(
                    path = %self.path.display(),
                    names = count,
                    replaced = ?replaced,
                    "Loaded override configuration"
                );
            }
            None => {
                info!(
                    path = %self.path.display(),
                    "No override file found, using default configuration"
                );
            }
        }
        Ok(settings)
    }
}
