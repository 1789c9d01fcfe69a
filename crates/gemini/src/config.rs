// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Provider configuration, read from a YAML file.
//!
//! ```yaml
//! api_key: "AIza..."
//! model: gemini-2.0-flash
//! base_url: https://generativelanguage.googleapis.com
//! timeout_seconds: 60
//! ```
//!
//! `GEMINI_API_KEY` in the environment replaces `api_key`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use diagnostics::*;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// May be empty; requests then fail upstream and fall back.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

/// Shown in place of a configured key in `Debug` output.
pub(crate) fn redacted_key(key: &str) -> &'static str {
    if key.is_empty() { "" } else { "***" }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &redacted_key(&self.api_key))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl GeminiConfig {
    /// Full `generateContent` URL, without the key.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Replace the API key when an override is present and non-empty.
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = key.trim().to_string();
        }
        self
    }

    /// Apply the `GEMINI_API_KEY` environment override.
    pub fn with_env(self) -> Self {
        self.with_api_key_override(std::env::var(API_KEY_ENV).ok())
    }
}

/// Load configuration from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GeminiConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

    let config: GeminiConfig =
        serde_yaml_ng::from_str(&content).with_context(|| "Failed to parse YAML configuration")?;

    let config = config.with_env();
    validate_config(&config)?;
    Ok(config)
}

/// Load configuration, using defaults when the file does not exist
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<GeminiConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    let shown = path.display().to_string();
    info!("Config file {shown} not found, using defaults", shown: shown);
    let config = GeminiConfig::default().with_env();
    validate_config(&config)?;
    Ok(config)
}

/// Validate configuration
pub fn validate_config(config: &GeminiConfig) -> Result<()> {
    if config.model.trim().is_empty() {
        anyhow::bail!("model cannot be empty");
    }

    if config.model.contains('/') || config.model.contains(':') {
        anyhow::bail!("model must be a bare model name, got '{}'", config.model);
    }

    if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
        anyhow::bail!(
            "base_url must start with http:// or https://, got '{}'",
            config.base_url
        );
    }

    if config.timeout_seconds == 0 {
        anyhow::bail!("timeout_seconds must be greater than 0");
    }

    if config.api_key.is_empty() {
        warn!("No API key configured; generated content will use fallback text");
    }

    Ok(())
}

/// Write an example configuration file
pub fn create_example_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let example = GeminiConfig {
        api_key: "your-gemini-api-key".to_string(),
        ..GeminiConfig::default()
    };

    let yaml = serde_yaml_ng::to_string(&example)
        .with_context(|| "Failed to serialize example configuration")?;
    let content = format!(
        "# Kathputli Atlas content provider configuration\n\
         # {API_KEY_ENV} in the environment overrides api_key.\n{yaml}"
    );

    std::fs::write(&path, content).with_context(|| {
        format!("Failed to write config file: {}", path.as_ref().display())
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let config = GeminiConfig::default();
        assert_eq!(
            config.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );

        let config = GeminiConfig {
            base_url: "http://127.0.0.1:8080/".to_string(),
            model: "gemini-1.5-pro".to_string(),
            ..GeminiConfig::default()
        };
        assert_eq!(
            config.endpoint(),
            "http://127.0.0.1:8080/v1beta/models/gemini-1.5-pro:generateContent"
        );
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = GeminiConfig {
            api_key: "AIza-secret".to_string(),
            ..GeminiConfig::default()
        };
        let shown = format!("{config:?}");
        assert!(!shown.contains("AIza-secret"));
        assert!(shown.contains("api_key: \"***\""));
        assert!(shown.contains(DEFAULT_MODEL));

        assert!(format!("{:?}", GeminiConfig::default()).contains("api_key: \"\""));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: GeminiConfig = serde_yaml_ng::from_str("api_key: abc\n").unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_api_key_override() {
        let config = GeminiConfig::default();
        assert_eq!(
            config.clone().with_api_key_override(Some(" k1 ".into())).api_key,
            "k1"
        );
        let keyed = GeminiConfig {
            api_key: "file".into(),
            ..GeminiConfig::default()
        };
        assert_eq!(keyed.clone().with_api_key_override(Some("".into())).api_key, "file");
        assert_eq!(keyed.with_api_key_override(None).api_key, "file");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_model = GeminiConfig {
            model: " ".into(),
            ..GeminiConfig::default()
        };
        assert!(validate_config(&bad_model).is_err());

        let path_model = GeminiConfig {
            model: "models/gemini".into(),
            ..GeminiConfig::default()
        };
        assert!(validate_config(&path_model).is_err());

        let bad_url = GeminiConfig {
            base_url: "ftp://example.com".into(),
            ..GeminiConfig::default()
        };
        assert!(validate_config(&bad_url).is_err());

        let zero_timeout = GeminiConfig {
            timeout_seconds: 0,
            ..GeminiConfig::default()
        };
        assert!(validate_config(&zero_timeout).is_err());

        assert!(validate_config(&GeminiConfig::default()).is_ok());
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kathputli.yaml");
        std::fs::write(&path, "model: gemini-1.5-flash\ntimeout_seconds: 5\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_load_config_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "timeout_seconds: [not a number\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse YAML configuration"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_or_default(dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(load_config(dir.path().join("absent.yaml")).is_err());
    }

    #[test]
    fn test_example_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("example.yaml");
        create_example_config(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# Kathputli Atlas"));
        let parsed: GeminiConfig = serde_yaml_ng::from_str(&text).unwrap();
        assert_eq!(parsed.api_key, "your-gemini-api-key");
        assert_eq!(parsed.model, DEFAULT_MODEL);
    }
}
