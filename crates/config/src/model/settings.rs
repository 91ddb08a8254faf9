//! Process-wide configuration names.
//!
//! `Settings` is the surface the hosting process reads once resolution is
//! complete, and the value an override step receives and returns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Trusted connection string. Re-asserted after every override step.
pub const CONNECTION_URI: &str = "connection_uri";
/// Signing secret. Bound before overrides run; reserved.
pub const SECRET_VALUE: &str = "secret_value";
/// Connection string for the bundled example datasets.
pub const EXAMPLES_URI: &str = "examples_uri";
pub const CACHE_REDIS_URL: &str = "cache_redis_url";
pub const BROKER_URL: &str = "broker_url";
pub const RESULTS_BACKEND_URL: &str = "results_backend_url";
pub const LOG_LEVEL: &str = "log_level";

/// An ordered map of configuration names to JSON values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    values: BTreeMap<String, Value>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// The value under `name` if it is a JSON string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Value::as_str)
    }

    /// Insert a value, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Merge `other` into `self`; `other` wins on conflicts.
    ///
    /// Returns the names whose previous value was replaced.
    pub fn merge(&mut self, other: Settings) -> Vec<String> {
        let mut replaced = Vec::new();
        for (name, value) in other.values {
            if let Some(previous) = self.values.insert(name.clone(), value)
                && self.values.get(&name) != Some(&previous)
            {
                replaced.push(name);
            }
        }
        replaced
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Settings {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl TryFrom<Value> for Settings {
    type Error = Value;

    /// Accepts only JSON objects; anything else is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_reports_only_changed_names() {
        let mut base = Settings::new();
        base.insert("a", "1");
        base.insert("b", "2");

        let mut overlay = Settings::new();
        overlay.insert("a", "1");
        overlay.insert("b", "changed");
        overlay.insert("c", true);

        let replaced = base.merge(overlay);

        assert_eq!(replaced, vec!["b".to_string()]);
        assert_eq!(base.get_str("b"), Some("changed"));
        assert_eq!(base.get("c"), Some(&json!(true)));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn test_try_from_rejects_non_objects() {
        assert!(Settings::try_from(json!(["a"])).is_err());
        let settings = Settings::try_from(json!({"log_level": "debug"})).unwrap();
        assert_eq!(settings.get_str(LOG_LEVEL), Some("debug"));
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let mut settings = Settings::new();
        settings.insert(CONNECTION_URI, "sqlite:////tmp/x.db");
        let rendered = serde_json::to_value(&settings).unwrap();
        assert_eq!(rendered, json!({"connection_uri": "sqlite:////tmp/x.db"}));
    }
}
