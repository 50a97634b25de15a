//! Process configuration read from the environment
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: OPENAI_BASE_URL for OpenAI-compatible endpoints
//! - 1.0.0: OpenAI key, model, request timeout, log level

use anyhow::{anyhow, Result};
use std::env;
use std::time::Duration;

use crate::features::completion::{ModelSettings, DEFAULT_MODEL};

#[derive(Debug, Clone)]
pub struct Config {
    /// Missing keys are tolerated until the first completion request
    pub openai_api_key: Option<String>,
    /// Empty means the public OpenAI API
    pub openai_base_url: String,
    pub openai_model: String,
    pub openai_timeout_secs: Option<u64>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let openai_timeout_secs = match non_empty("OPENAI_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| anyhow!("Invalid OPENAI_TIMEOUT_SECS `{raw}`: {e}"))?;
                if secs == 0 {
                    return Err(anyhow!("OPENAI_TIMEOUT_SECS must be greater than zero"));
                }
                Some(secs)
            }
            None => None,
        };

        Ok(Config {
            openai_api_key: non_empty("OPENAI_API_KEY"),
            openai_base_url: non_empty("OPENAI_BASE_URL").unwrap_or_default(),
            openai_model: non_empty("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_timeout_secs,
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn model_settings(&self) -> ModelSettings {
        ModelSettings::with_model(self.openai_model.clone())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.openai_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert!(config.openai_api_key.is_none());
        assert!(config.openai_base_url.is_empty());
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.log_level, "info");
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_reads_values() {
        let config = config_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:8080/v1"),
            ("OPENAI_MODEL", "gpt-4.1-mini"),
            ("OPENAI_TIMEOUT_SECS", "45"),
            ("LOG_LEVEL", "debug"),
        ])
        .unwrap();

        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.openai_base_url, "http://localhost:8080/v1");
        assert_eq!(config.openai_model, "gpt-4.1-mini");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(45)));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_blank_key_is_missing() {
        let config = config_from(&[("OPENAI_API_KEY", "  ")]).unwrap();
        assert!(config.openai_api_key.is_none());
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        assert!(config_from(&[("OPENAI_TIMEOUT_SECS", "soon")]).is_err());
        assert!(config_from(&[("OPENAI_TIMEOUT_SECS", "0")]).is_err());
    }

    #[test]
    fn test_model_settings_use_fixed_temperature() {
        let config = config_from(&[("OPENAI_MODEL", "gpt-4o")]).unwrap();
        let settings = config.model_settings();
        assert_eq!(settings.model, "gpt-4o");
        assert_eq!(settings.temperature, 0.2);
    }
}
