//! Configuration Types
//!
//! All configuration structures with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{github, probe, server};
use crate::types::{LensError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerSettings,

    /// Hosting provider API settings
    pub github: GithubSettings,

    /// Link probe retry settings
    pub probe: ProbeSettings,

    /// Per-request limits
    pub request: RequestSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            github: GithubSettings::default(),
            probe: ProbeSettings::default(),
            request: RequestSettings::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `LensError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(LensError::Config(
                "server.port must be greater than 0".to_string(),
            ));
        }

        if self.github.timeout_secs == 0 {
            return Err(LensError::Config(
                "github.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.github.readme_variants.is_empty() {
            return Err(LensError::Config(
                "github.readme_variants must list at least one file name".to_string(),
            ));
        }

        if self.probe.factor < 1.0 {
            return Err(LensError::Config(format!(
                "probe.factor must be at least 1.0, got {}",
                self.probe.factor
            )));
        }

        if self.probe.min_delay_ms > self.probe.max_delay_ms {
            return Err(LensError::Config(format!(
                "probe.min_delay_ms ({}) exceeds probe.max_delay_ms ({})",
                self.probe.min_delay_ms, self.probe.max_delay_ms
            )));
        }

        if self.probe.attempt_timeout_secs == 0 {
            return Err(LensError::Config(
                "probe.attempt_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.request.timeout_secs == 0 {
            return Err(LensError::Config(
                "request.timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Server
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Directory of static assets (holds the `/try` page)
    pub static_dir: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: server::DEFAULT_HOST.to_string(),
            port: server::DEFAULT_PORT,
            static_dir: PathBuf::from(server::STATIC_DIR),
        }
    }
}

impl ServerSettings {
    /// Get bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Hosting Provider
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubSettings {
    /// REST API base URL
    pub api_base: String,
    /// User-Agent header (required by the API)
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// README file names, tried in order
    pub readme_variants: Vec<String>,
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            api_base: github::API_BASE.to_string(),
            user_agent: format!("repolens/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: github::TIMEOUT_SECS,
            readme_variants: github::README_VARIANTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GithubSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// =============================================================================
// Link Probe
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeSettings {
    /// Retries after the initial attempt
    pub max_retries: usize,
    /// Delay before the first retry (milliseconds)
    pub min_delay_ms: u64,
    /// Cap on any single delay (milliseconds)
    pub max_delay_ms: u64,
    /// Backoff multiplier
    pub factor: f32,
    /// Timeout for one attempt (seconds)
    pub attempt_timeout_secs: u64,
    /// HTTP methods eligible for automatic retry
    pub retry_methods: Vec<String>,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            max_retries: probe::MAX_RETRIES,
            min_delay_ms: probe::MIN_DELAY_MS,
            max_delay_ms: probe::MAX_DELAY_MS,
            factor: probe::BACKOFF_FACTOR,
            attempt_timeout_secs: probe::ATTEMPT_TIMEOUT_SECS,
            retry_methods: vec!["GET".to_string(), "HEAD".to_string(), "OPTIONS".to_string()],
        }
    }
}

impl ProbeSettings {
    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_secs(self.attempt_timeout_secs)
    }
}

// =============================================================================
// Request
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestSettings {
    /// Overall deadline for one inspection (seconds)
    pub timeout_secs: u64,
}

impl Default for RequestSettings {
    fn default() -> Self {
        Self {
            timeout_secs: server::REQUEST_TIMEOUT_SECS,
        }
    }
}

impl RequestSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.bind_addr(), "0.0.0.0:3000");
        assert_eq!(
            config.github.readme_variants,
            vec!["README.md", "readme.md", "Readme.md"]
        );
        assert_eq!(config.probe.max_retries, 3);
    }

    #[test]
    fn test_validate_rejects_shrinking_backoff() {
        let mut config = Config::default();
        config.probe.factor = 0.5;
        assert!(matches!(config.validate(), Err(LensError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_delays() {
        let mut config = Config::default();
        config.probe.min_delay_ms = 10_000;
        config.probe.max_delay_ms = 100;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeouts() {
        let mut config = Config::default();
        config.request.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.github.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_variants() {
        let mut config = Config::default();
        config.github.readme_variants.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.probe.max_retries, 3);
    }
}
