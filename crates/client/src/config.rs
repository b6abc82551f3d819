//! Application configuration loaded from environment variables.
//!
//! Built once at process start and passed by reference to whatever creates
//! the API client.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `APP_NAME` - Display name (default: Ecommerce Platform)
//! - `APP_VERSION` - Display version (default: 1.0.0)
//! - `API_BASE_URL` - Backend API base URL (default: <http://localhost:3001>)
//! - `API_TOKEN` - Bearer token sent with every API request

use secrecy::SecretString;
use thiserror::Error;

/// Default display name.
pub const DEFAULT_APP_NAME: &str = "Ecommerce Platform";
/// Default display version.
pub const DEFAULT_APP_VERSION: &str = "1.0.0";
/// Backend address used in local development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Display metadata; not used by the client.
    pub app: AppInfo,
    /// Backend API settings.
    pub api: ApiConfig,
}

/// Application name and version, for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_APP_NAME.to_string(),
            version: DEFAULT_APP_VERSION.to_string(),
        }
    }
}

impl std::fmt::Display for AppInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{}", self.name, self.version)
    }
}

/// Backend API settings.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct ApiConfig {
    /// Prefix every request path is appended to.
    pub base_url: String,
    /// Bearer token sent as `Authorization`, if any.
    pub auth_token: Option<SecretString>,
}

impl ApiConfig {
    /// Settings for `base_url` without authentication.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field(
                "auth_token",
                &self.auth_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `API_BASE_URL` is not an absolute http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Unset and empty variables both fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `API_BASE_URL` is not an absolute http(s) URL.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let app = AppInfo {
            name: get("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            version: get("APP_VERSION").unwrap_or_else(|| DEFAULT_APP_VERSION.to_string()),
        };

        let base_url = get("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        validate_base_url(&base_url, "API_BASE_URL")?;

        let api = ApiConfig {
            base_url,
            auth_token: get("API_TOKEN").map(SecretString::from),
        };

        Ok(Self { app, api })
    }
}

/// Validate that a base URL is absolute and uses http or https.
fn validate_base_url(value: &str, var_name: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("unsupported scheme '{}'", parsed.scheme()),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.app.name, "Ecommerce Platform");
        assert_eq!(config.app.version, "1.0.0");
        assert_eq!(config.api.base_url, "http://localhost:3001");
        assert!(config.api.auth_token.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("APP_NAME", "Corner Shop"),
            ("APP_VERSION", "2.3.0"),
            ("API_BASE_URL", "https://api.example.com/v1"),
            ("API_TOKEN", "tok_live_abc123"),
        ]))
        .unwrap();

        assert_eq!(config.app.to_string(), "Corner Shop v2.3.0");
        assert_eq!(config.api.base_url, "https://api.example.com/v1");
        assert_eq!(
            config.api.auth_token.unwrap().expose_secret(),
            "tok_live_abc123"
        );
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("API_BASE_URL", ""), ("API_TOKEN", "  ")]))
                .unwrap();

        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert!(config.api.auth_token.is_none());
    }

    #[test]
    fn test_invalid_base_url() {
        let result = AppConfig::from_lookup(lookup_from(&[("API_BASE_URL", "localhost:3001/api")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));

        let result = AppConfig::from_lookup(lookup_from(&[("API_BASE_URL", "ftp://example.com")]));
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid environment variable API_BASE_URL: unsupported scheme 'ftp'"
        );
    }

    #[test]
    fn test_api_config_debug_redacts_token() {
        let config = ApiConfig {
            base_url: "http://localhost:3001".to_string(),
            auth_token: Some(SecretString::from("super_secret_token")),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("http://localhost:3001"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_token"));
    }
}
