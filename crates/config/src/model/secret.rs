//! Secret value and placeholder deny-list.

use std::collections::BTreeSet;

use secrecy::{ExposeSecret, SecretString};

use crate::constants::DEFAULT_DENIED_SECRETS;

/// The secret a process signs with.
///
/// Never empty and never a deny-listed placeholder.
#[derive(Debug, Clone)]
pub struct SecretValue {
    value: SecretString,
    generated: bool,
}

impl SecretValue {
    pub(crate) fn provided(value: SecretString) -> Self {
        Self {
            value,
            generated: false,
        }
    }

    pub(crate) fn generated(value: SecretString) -> Self {
        Self {
            value,
            generated: true,
        }
    }

    pub fn secret(&self) -> &SecretString {
        &self.value
    }

    /// True when no acceptable candidate existed and the value was generated.
    pub fn is_generated(&self) -> bool {
        self.generated
    }
}

impl ExposeSecret<str> for SecretValue {
    fn expose_secret(&self) -> &str {
        self.value.expose_secret()
    }
}

/// Known-insecure placeholder secrets, matched exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenyList {
    values: BTreeSet<String>,
}

impl Default for DenyList {
    fn default() -> Self {
        Self::new(DEFAULT_DENIED_SECRETS.iter().copied())
    }
}

impl DenyList {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// An empty list. Only absence triggers generation.
    pub fn empty() -> Self {
        Self {
            values: BTreeSet::new(),
        }
    }

    /// Add placeholders to the list.
    pub fn with<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
