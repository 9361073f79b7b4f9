//! Configuration management for the `TravelCraft` client
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::TravelCraftError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TravelCraft` client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelCraftConfig {
    /// Itinerary webhook configuration
    #[serde(default)]
    pub webhook: WebhookConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Itinerary webhook settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Endpoint that receives the trip request
    #[serde(default = "default_webhook_url")]
    pub url: String,
    /// User agent sent with the request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
    /// OTLP/HTTP traces endpoint; span export is off when unset
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

// Default value functions
fn default_webhook_url() -> String {
    "https://workflowly.online/webhook/travel-planner".to_string()
}

fn default_user_agent() -> String {
    format!("TravelCraft/{}", crate::VERSION)
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: default_webhook_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            otlp_endpoint: None,
        }
    }
}

impl TravelCraftConfig {
    /// Load configuration from the default file location and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // TRAVELCRAFT_WEBHOOK__URL -> webhook.url
        builder = builder.add_source(
            Environment::with_prefix("TRAVELCRAFT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TravelCraftConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travelcraft").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.webhook.url.is_empty() {
            self.webhook.url = default_webhook_url();
        }
        if self.webhook.user_agent.is_empty() {
            self.webhook.user_agent = default_user_agent();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self
            .logging
            .otlp_endpoint
            .as_deref()
            .is_some_and(str::is_empty)
        {
            self.logging.otlp_endpoint = None;
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_urls()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_urls(&self) -> Result<()> {
        if !is_http_url(&self.webhook.url) {
            return Err(TravelCraftError::config(
                "Webhook URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        if let Some(endpoint) = &self.logging.otlp_endpoint {
            if !is_http_url(endpoint) {
                return Err(TravelCraftError::config(
                    "OTLP endpoint must be a valid HTTP or HTTPS URL",
                )
                .into());
            }
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelCraftError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelCraftError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    reqwest::Url::parse(url).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TravelCraftConfig::default();
        assert_eq!(
            config.webhook.url,
            "https://workflowly.online/webhook/travel-planner"
        );
        assert!(config.webhook.user_agent.starts_with("TravelCraft/"));
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.logging.otlp_endpoint.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TravelCraftConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_format() {
        let mut config = TravelCraftConfig::default();
        config.logging.format = "xml".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_config_validation_webhook_scheme() {
        let mut config = TravelCraftConfig::default();
        config.webhook.url = "ftp://example.com/hook".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Webhook URL"));
    }

    #[rstest]
    #[case("https://workflowly.online/webhook/travel-planner", true)]
    #[case("http://127.0.0.1:8080/hook", true)]
    #[case("http://", false)]
    #[case("https://", false)]
    #[case("http//example.com", false)]
    #[case("ftp://example.com/hook", false)]
    #[case("", false)]
    fn test_is_http_url(#[case] url: &str, #[case] valid: bool) {
        assert_eq!(is_http_url(url), valid);
    }

    #[test]
    fn test_config_validation_rejects_hostless_otlp_endpoint() {
        let mut config = TravelCraftConfig::default();
        config.logging.otlp_endpoint = Some("http://".to_string());
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("OTLP endpoint"));
    }

    #[test]
    fn test_apply_defaults_fills_empty_values() {
        let mut config = TravelCraftConfig::default();
        config.webhook.url.clear();
        config.logging.level.clear();
        config.logging.otlp_endpoint = Some(String::new());

        config.apply_defaults();

        assert_eq!(config.webhook.url, default_webhook_url());
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.otlp_endpoint.is_none());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[webhook]\nurl = \"http://127.0.0.1:9000/hook\"\n\n[logging]\nlevel = \"debug\""
        )
        .unwrap();

        let config = TravelCraftConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.webhook.url, "http://127.0.0.1:9000/hook");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[logging]\nformat = \"yaml\"").unwrap();

        let result = TravelCraftConfig::load_from_path(Some(file.path().to_path_buf()));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = TravelCraftConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("travelcraft"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
