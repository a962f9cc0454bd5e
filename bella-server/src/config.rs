//! Configuration management for the Bella Italia static host
//!
//! Settings are resolved in three layers:
//! 1. Environment variables (highest priority)
//! 2. Configuration file (TOML format)
//! 3. Default values (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration
    pub server: ServerConfig,
    /// Built single-page app location
    pub site: SiteDirConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteDirConfig {
    /// Directory produced by `trunk build`
    pub dist_dir: PathBuf,
    /// Document served for client-side routes
    pub index_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    pub level: String,
    /// Directory for log files
    pub log_dir: PathBuf,
    /// Enable the JSON file layer
    pub file_logging_enabled: bool,
    /// Use JSON on the console as well
    pub json_format: bool,
    pub rotation: LogRotation,
}

/// Log file rotation policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for SiteDirConfig {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from("bella-ui/dist"),
            index_file: "index.html".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: PathBuf::from("/var/log/bella-italia"),
            file_logging_enabled: false,
            json_format: false,
            rotation: LogRotation::Daily,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SiteDirConfig {
    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join(&self.index_file)
    }
}

impl SiteConfig {
    /// Load configuration from environment variables and optional config file
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(config_path) = Self::find_config_file() {
            match Self::load_from_file(&config_path) {
                Ok(file_config) => config = file_config,
                // logging is not initialised yet
                Err(e) => eprintln!("Ignoring config file: {}", e),
            }
        }

        config.apply_env_overrides();
        config
    }

    /// Load configuration from a specific file path
    pub fn load_from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.clone(), e.to_string()))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let paths = [
            std::env::var("BELLA_CONFIG").ok().map(PathBuf::from),
            Some(PathBuf::from("/etc/bella-italia/config.toml")),
            Some(PathBuf::from("./config.toml")),
            Some(PathBuf::from("./bella-italia.toml")),
        ];

        paths.into_iter().flatten().find(|p| p.exists())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `BELLA_*` overrides read through `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server
        if let Some(host) = lookup("BELLA_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("BELLA_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }

        // Site
        if let Some(dir) = lookup("BELLA_DIST_DIR") {
            self.site.dist_dir = PathBuf::from(dir);
        }

        // Logging
        if let Some(level) = lookup("BELLA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(dir) = lookup("BELLA_LOG_DIR") {
            self.logging.log_dir = PathBuf::from(dir);
        }
        if let Some(enabled) = lookup("BELLA_FILE_LOGGING") {
            apply_flag("BELLA_FILE_LOGGING", &enabled, &mut self.logging.file_logging_enabled);
        }
        if let Some(json) = lookup("BELLA_JSON_LOGS") {
            apply_flag("BELLA_JSON_LOGS", &json, &mut self.logging.json_format);
        }
    }

    /// Generate a sample configuration file
    pub fn generate_sample() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if self.site.dist_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "Site dist directory cannot be empty".to_string(),
            ));
        }

        if self.site.index_file.is_empty() {
            return Err(ConfigError::Validation(
                "Index file name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Boolean environment value: true/1/yes/on or false/0/no/off
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn apply_flag(key: &str, value: &str, target: &mut bool) {
    match parse_flag(value) {
        Some(flag) => *target = flag,
        // logging is not initialised yet
        None => eprintln!("Ignoring {}={:?}: expected true/false, 1/0, yes/no or on/off", key, value),
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0:?}: {1}")]
    FileRead(PathBuf, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Config validation failed: {0}")]
    Validation(String),
}
