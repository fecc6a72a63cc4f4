//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `BACKEND_URL` - Base URL of the hosted backend project
//! - `BACKEND_API_KEY` - API key for the hosted backend (table + auth APIs)
//!
//! ## Optional
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `SESSION_FILE` - Path for persisted local session state (default: in-memory)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate, 0.0-1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Hosted backend configuration
    pub backend: BackendConfig,
    /// Path for persisted local session state (in-memory when unset)
    pub session_file: Option<PathBuf>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// Hosted backend configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct BackendConfig {
    /// Base URL of the hosted project (e.g., <https://abc.supabase.example>)
    pub project_url: String,
    /// API key sent as `apikey` and bearer token
    pub api_key: SecretString,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("project_url", &self.project_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honored.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing, a value does not
    /// parse, or a secret looks like an unconfigured placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = optional_env("ADMIN_HOST")
            .unwrap_or_else(|| "127.0.0.1".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_HOST".into(), format!("{e}")))?;

        let port = optional_env("ADMIN_PORT")
            .unwrap_or_else(|| "3001".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_PORT".into(), format!("{e}")))?;

        Ok(Self {
            host,
            port,
            backend: BackendConfig::from_env()?,
            session_file: optional_env("SESSION_FILE").map(PathBuf::from),
            sentry_dsn: optional_env("SENTRY_DSN"),
            sentry_environment: optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_rate("SENTRY_SAMPLE_RATE", 1.0)?,
            sentry_traces_sample_rate: parse_rate("SENTRY_TRACES_SAMPLE_RATE", 0.0)?,
        })
    }

    /// The socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl BackendConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let project_url = require_env("BACKEND_URL")?;
        validate_backend_url(&project_url)?;

        let api_key = require_env("BACKEND_API_KEY")?;
        reject_placeholder("BACKEND_API_KEY", &api_key)?;

        Ok(Self {
            project_url: project_url.trim_end_matches('/').to_string(),
            api_key: SecretString::from(api_key),
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_rate(name: &str, default: f32) -> Result<f32, ConfigError> {
    let Some(raw) = optional_env(name) else {
        return Ok(default);
    };
    let rate: f32 = raw
        .parse()
        .map_err(|e| ConfigError::InvalidEnvVar(name.into(), format!("{e}")))?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidEnvVar(
            name.into(),
            format!("{rate} is outside 0.0..=1.0"),
        ));
    }
    Ok(rate)
}

fn validate_backend_url(raw: &str) -> Result<(), ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("BACKEND_URL".into(), format!("{e}")))?;
    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ConfigError::InvalidEnvVar(
            "BACKEND_URL".into(),
            format!("unsupported scheme: {}", url.scheme()),
        ));
    }
    Ok(())
}

/// Reject secrets that still look like template placeholders.
fn reject_placeholder(name: &str, value: &str) -> Result<(), ConfigError> {
    let lowered = value.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lowered.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                name.to_string(),
                format!("value matches placeholder pattern '{pattern}'"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_secrets_rejected() {
        assert!(reject_placeholder("KEY", "your-api-key-here").is_err());
        assert!(reject_placeholder("KEY", "CHANGEME").is_err());
        assert!(reject_placeholder("KEY", "sb_2f8a91c4e7d3b6f0a5").is_ok());
    }

    #[test]
    fn test_backend_url_validation() {
        assert!(validate_backend_url("https://abc.supabase.example").is_ok());
        assert!(validate_backend_url("http://localhost:54321").is_ok());
        assert!(validate_backend_url("ftp://abc.example").is_err());
        assert!(validate_backend_url("not a url").is_err());
    }

    #[test]
    fn test_backend_config_debug_redacts_key() {
        let config = BackendConfig {
            project_url: "https://abc.supabase.example".to_string(),
            api_key: SecretString::from("sb_2f8a91c4e7d3b6f0a5".to_string()),
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sb_2f8a91c4e7d3b6f0a5"));
    }
}
