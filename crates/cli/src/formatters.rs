//! Output formatters for resolved settings.
//!
//! Responsibilities:
//! - Parse the `--format` value.
//! - Render a `Settings` map as JSON, YAML, or `NAME=value` lines.
//!
//! Does NOT handle:
//! - Redaction; callers pass settings that are already masked or not.

use anyhow::Result;
use bootguard_config::Settings;
use std::str::FromStr;

/// Output format for `resolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Env,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "env" | "dotenv" => Ok(OutputFormat::Env),
            _ => anyhow::bail!(
                "Invalid output format: {}. Valid options: json, yaml, env",
                s
            ),
        }
    }
}

/// Render `settings` in the requested format.
pub fn format_settings(settings: &Settings, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(settings)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(settings)?),
        OutputFormat::Env => Ok(format_env(settings)),
    }
}

/// One `NAME=value` line per setting, names upper-cased.
///
/// Strings are written raw; other values as compact JSON.
fn format_env(settings: &Settings) -> String {
    let mut out = String::new();
    for (name, value) in settings.iter() {
        let rendered = match value.as_str() {
            Some(s) => s.to_string(),
            None => value.to_string(),
        };
        out.push_str(&name.to_uppercase());
        out.push('=');
        out.push_str(&rendered);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Settings {
        let mut settings = Settings::new();
        settings.insert("connection_uri", "postgresql://u:***@h:5432/d");
        settings.insert("row_limit", 5000);
        settings.insert("feature_flags", json!({"alerts": true}));
        settings
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("env".parse::<OutputFormat>().unwrap(), OutputFormat::Env);
        assert!("table".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_json_output_parses_back() {
        let out = format_settings(&sample(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["row_limit"], json!(5000));
        assert_eq!(parsed["connection_uri"], json!("postgresql://u:***@h:5432/d"));
    }

    #[test]
    fn test_yaml_output() {
        let out = format_settings(&sample(), OutputFormat::Yaml).unwrap();
        assert!(out.contains("row_limit: 5000"));
    }

    #[test]
    fn test_env_output() {
        let out = format_settings(&sample(), OutputFormat::Env).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "CONNECTION_URI=postgresql://u:***@h:5432/d",
                r#"FEATURE_FLAGS={"alerts":true}"#,
                "ROW_LIMIT=5000",
            ]
        );
    }
}
