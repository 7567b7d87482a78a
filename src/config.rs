//! Configuration management for the Pathfinder application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::PathfinderError;
use crate::catalog::Catalog;
use crate::models::TravelMode;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the Pathfinder application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathfinderConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Initial state of the finder views
    pub defaults: DefaultsConfig,
    /// Place table source
    pub catalog: CatalogConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the built frontend
    pub static_dir: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or json)
    pub format: String,
}

/// Default travel modes for each view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub pathfinder_mode: TravelMode,
    pub trailhead_mode: TravelMode,
}

/// Where destinations and trailheads come from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// TOML catalog file; the built-in Juneau tables are used when unset
    pub path: Option<String>,
}

// Default value functions
fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "frontend/dist".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            pathfinder_mode: TravelMode::Walking,
            trailhead_mode: TravelMode::Driving,
        }
    }
}

impl PathfinderConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
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

        // PATHFINDER_SERVER__PORT=8080 overrides server.port
        builder = builder.add_source(
            Environment::with_prefix("PATHFINDER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: PathfinderConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pathfinder").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.server.static_dir.is_empty() {
            self.server.static_dir = default_static_dir();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.catalog.path.as_deref().is_some_and(str::is_empty) {
            self.catalog.path = None;
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_server()?;
        self.validate_string_values()?;
        self.validate_catalog_path()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(PathfinderError::config("Server port cannot be 0").into());
        }
        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(PathfinderError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(PathfinderError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }

    fn validate_catalog_path(&self) -> Result<()> {
        if let Some(path) = &self.catalog.path {
            if !PathBuf::from(path).exists() {
                return Err(
                    PathfinderError::config(format!("Catalog file not found: {path}")).into(),
                );
            }
        }
        Ok(())
    }

    /// Load the configured catalog, falling back to the built-in tables
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog.path {
            Some(path) => {
                Catalog::load(path).with_context(|| format!("Failed to load catalog from {path}"))
            }
            None => Ok(Catalog::juneau()),
        }
    }

    /// Address the HTTP server binds to
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PathfinderConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "frontend/dist");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.defaults.pathfinder_mode, TravelMode::Walking);
        assert_eq!(config.defaults.trailhead_mode, TravelMode::Driving);
        assert!(config.catalog.path.is_none());
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = PathfinderConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = PathfinderConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_config_validation_zero_port() {
        let mut config = PathfinderConfig::default();
        config.server.port = 0;
        assert!(config.validate().unwrap_err().to_string().contains("port"));
    }

    #[test]
    fn test_config_validation_missing_catalog() {
        let mut config = PathfinderConfig::default();
        config.catalog.path = Some("/nonexistent/places.toml".to_string());
        assert!(config.validate().unwrap_err().to_string().contains("Catalog file not found"));
    }

    #[test]
    fn test_apply_defaults_fills_empty_values() {
        let mut config = PathfinderConfig::default();
        config.logging.level = String::new();
        config.server.host = String::new();
        config.catalog.path = Some(String::new());
        config.apply_defaults();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 8088\n\n[defaults]\npathfinder_mode = \"transit\"\n\n[logging]\nformat = \"json\""
        )
        .unwrap();

        let config = PathfinderConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.defaults.pathfinder_mode, TravelMode::Transit);
        assert_eq!(config.defaults.trailhead_mode, TravelMode::Driving);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_load_catalog_defaults_to_juneau() {
        let config = PathfinderConfig::default();
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog, Catalog::juneau());
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = PathfinderConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("pathfinder"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }
}
