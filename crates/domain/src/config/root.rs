use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::query::QueryConfig;
use super::upstream::UpstreamConfig;

/// Main configuration structure for nslookup-rs
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Name server, port, timeout and retry settings
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Query defaults (recursion, record type)
    #[serde(default)]
    pub query: QueryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. nslookup.toml in current directory
    /// 3. /etc/nslookup-rs/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("nslookup.toml").exists() {
            Self::from_file("nslookup.toml")?
        } else if std::path::Path::new("/etc/nslookup-rs/config.toml").exists() {
            Self::from_file("/etc/nslookup-rs/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.server {
            self.upstream.server = Some(server);
        }
        if let Some(port) = overrides.port {
            self.upstream.port = port;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.upstream.timeout_secs = timeout;
        }
        if let Some(recurse) = overrides.recursion_desired {
            self.query.recursion_desired = recurse;
        }
        if let Some(record_type) = overrides.record_type {
            self.query.default_type = record_type;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Timeout must be at least 1 second".to_string(),
            ));
        }

        if self.upstream.attempts == 0 {
            return Err(ConfigError::Validation(
                "Attempts must be at least 1".to_string(),
            ));
        }

        if let Some(server) = &self.upstream.server {
            if server.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Server address cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub port: Option<u16>,
    pub timeout_secs: Option<u64>,
    pub recursion_desired: Option<bool>,
    pub record_type: Option<String>,
    pub log_level: Option<String>,
}
