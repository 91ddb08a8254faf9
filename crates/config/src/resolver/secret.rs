//! Signing secret resolution.
//!
//! Responsibilities:
//! - Take the first present secret candidate.
//! - Reject deny-listed placeholders and generate a strong replacement.
//!
//! Does NOT handle:
//! - Ordering relative to other subsystems; callers must resolve the secret
//!   before anything performs secret-dependent validation (see `bootstrap`).
//!
//! Invariants:
//! - The returned value is never empty and never deny-listed.
//! - Generated values carry 256 bits of entropy, base64 URL-safe encoded.
//! - Log events name the variable only, never the value.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngExt;
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

use crate::constants::{ENV_SECRET, ENV_SECRET_ALIAS, GENERATED_SECRET_BYTES};
use crate::model::{DenyList, SecretValue};
use crate::source::{EnvSource, SourceReader};

/// Generate a fresh URL-safe secret from the thread-local CSPRNG.
pub fn generate_secret() -> SecretString {
    let mut bytes = [0u8; GENERATED_SECRET_BYTES];
    rand::rng().fill(&mut bytes);
    SecretString::new(URL_SAFE_NO_PAD.encode(bytes).into())
}

/// A generated secret that is guaranteed not to be deny-listed.
fn generate_allowed(deny_list: &DenyList) -> SecretString {
    loop {
        let secret = generate_secret();
        if !deny_list.contains(secret.expose_secret()) {
            return secret;
        }
    }
}

/// Resolve a secret from `candidates` in order.
///
/// Absent or deny-listed values are replaced by a generated secret.
pub fn resolve_secret<E: EnvSource>(
    reader: &SourceReader<E>,
    candidates: &[&str],
    deny_list: &DenyList,
) -> SecretValue {
    match reader.first_named(candidates) {
        Some((name, value)) if deny_list.contains(&value) => {
            warn!(
                var = name,
                "Secret is a known placeholder; generating a random secret instead"
            );
            SecretValue::generated(generate_allowed(deny_list))
        }
        Some((name, value)) => {
            info!(var = name, "Using secret from environment");
            SecretValue::provided(SecretString::new(value.into()))
        }
        None => {
            info!("No secret configured; generating a random secret");
            SecretValue::generated(generate_allowed(deny_list))
        }
    }
}

/// Secret resolution with a fixed candidate list and deny-list.
#[derive(Debug, Clone)]
pub struct SecretProvisioner {
    candidates: Vec<String>,
    deny_list: DenyList,
}

impl Default for SecretProvisioner {
    fn default() -> Self {
        Self {
            candidates: vec![ENV_SECRET.to_string(), ENV_SECRET_ALIAS.to_string()],
            deny_list: DenyList::default(),
        }
    }
}

impl SecretProvisioner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deny_list(mut self, deny_list: DenyList) -> Self {
        self.deny_list = deny_list;
        self
    }

    pub fn with_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates = candidates.into_iter().map(Into::into).collect();
        self
    }

    pub fn deny_list(&self) -> &DenyList {
        &self.deny_list
    }

    pub fn resolve<E: EnvSource>(&self, reader: &SourceReader<E>) -> SecretValue {
        let names: Vec<&str> = self.candidates.iter().map(String::as_str).collect();
        resolve_secret(reader, &names, &self.deny_list)
    }
}
