//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub nav: NavConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Navigation bar settings
#[derive(Debug, Clone, Deserialize)]
pub struct NavConfig {
    /// Text shown next to the logo icon
    #[serde(default = "default_brand")]
    pub brand: String,

    #[serde(default = "default_logo_icon")]
    pub logo_icon: String,

    /// Prefix the logo link with the page's base path like the other links
    #[serde(default)]
    pub prefix_logo: bool,
}

fn default_brand() -> String {
    "SATY Analytics".to_string()
}

fn default_logo_icon() -> String {
    "fas fa-chart-line".to_string()
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            logo_icon: default_logo_icon(),
            prefix_logo: false,
        }
    }
}

/// Static site injection settings
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Directory names skipped while walking the site
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Include hidden files and directories
    #[serde(default)]
    pub include_hidden: bool,
}

fn default_exclude_dirs() -> Vec<String> {
    vec!["assets".to_string(), "node_modules".to_string()]
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: default_exclude_dirs(),
            include_hidden: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Standard config file locations, in search order
    #[cfg(feature = "site")]
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("saty-nav").join("config.toml")),
            Some(PathBuf::from("./saty-nav.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from default locations or environment.
    ///
    /// Returns the file the config came from, if any. A config file that
    /// exists but cannot be loaded is an error, not a silent fallback.
    #[cfg(feature = "site")]
    pub fn load_default() -> Result<(Self, Option<PathBuf>), ConfigError> {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first of `candidates` that exists, with environment
    /// overrides; environment defaults when none exists
    pub fn load_first(candidates: &[PathBuf]) -> Result<(Self, Option<PathBuf>), ConfigError> {
        match candidates.iter().find(|path| path.exists()) {
            Some(path) => Ok((Self::load_with_env(path)?, Some(path.clone()))),
            None => Ok((Self::from_env(), None)),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(brand) = std::env::var("SATY_NAV_BRAND") {
            self.nav.brand = brand;
        }

        if let Ok(level) = std::env::var("SATY_NAV_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SATY_NAV_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# SATY Navigation Configuration
#
# Environment variables override these settings:
# - SATY_NAV_BRAND
# - SATY_NAV_LOG_LEVEL
# - SATY_NAV_LOG_FORMAT

[nav]
# Text shown next to the logo
brand = "SATY Analytics"

# Font Awesome classes for the logo icon
logo_icon = "fas fa-chart-line"

# Prefix the logo link with the page's base path (the logo links to a bare
# "index.html" when false)
prefix_logo = false

[site]
# Directory names skipped when injecting into a site
exclude_dirs = ["assets", "node_modules"]

# Include hidden files and directories
include_hidden = false

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
