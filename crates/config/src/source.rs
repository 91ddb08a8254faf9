//! Environment lookup for configuration sources.
//!
//! Responsibilities:
//! - Abstract environment variable lookup behind `EnvSource`.
//! - Provide `SourceReader` with default-value and alias-family helpers.
//! - Provide a snapshot source (`MapEnv`) for deterministic resolution.
//!
//! Does NOT handle:
//! - Validation or normalization of values (see `resolver`).
//! - `.env` file loading (see `Bootstrap::load_dotenv`).
//!
//! Invariants:
//! - Lookups never fail; an unavailable value is `None`.
//! - Empty or whitespace-only values are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use std::collections::BTreeMap;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(non_blank)
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        // No trimming needed, return original to avoid allocation
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}

/// A source of named string values.
pub trait EnvSource {
    /// Raw lookup. Implementations must not filter or trim.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// A captured set of environment values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.vars.remove(name)
    }

    /// Capture the named variables from the process environment.
    ///
    /// Unset names are simply not present in the snapshot.
    pub fn capture<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let vars = names
            .into_iter()
            .filter_map(|name| std::env::var(name).ok().map(|v| (name.to_string(), v)))
            .collect();
        Self { vars }
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

/// Pure lookup over an `EnvSource` with default values.
#[derive(Debug, Clone, Copy)]
pub struct SourceReader<E> {
    env: E,
}

impl SourceReader<ProcessEnv> {
    /// A reader over the live process environment.
    pub fn process() -> Self {
        Self { env: ProcessEnv }
    }
}

impl<E: EnvSource> SourceReader<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Read a value; blank values count as absent.
    pub fn read(&self, name: &str) -> Option<String> {
        self.env.lookup(name).and_then(non_blank)
    }

    /// Read a value, falling back to `default` when absent.
    pub fn read_or(&self, name: &str, default: &str) -> String {
        self.read(name).unwrap_or_else(|| default.to_string())
    }

    /// First present value among `names`, in order.
    pub fn first_of(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| self.read(name))
    }

    /// First present value among `names` along with the name that supplied it.
    pub fn first_named<'n>(&self, names: &[&'n str]) -> Option<(&'n str, String)> {
        names
            .iter()
            .find_map(|name| self.read(name).map(|value| (*name, value)))
    }
}
