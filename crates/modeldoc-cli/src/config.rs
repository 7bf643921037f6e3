//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON/TOML)
//!
//! Command-line arguments take precedence over every configured value.

use crate::error::{Error, Result};
use modeldoc_core::{DocumentFormat, DEFAULT_FILE_NAME};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Format used when `--format` is not given
    pub default_format: Option<DocumentFormat>,

    /// XML documentation file used when `--xml-doc` is not given
    pub xml_documentation: Option<PathBuf>,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Save documents into this directory instead of printing them
    pub directory: Option<PathBuf>,

    /// File name for saved documents
    pub file_name: String,

    /// Append to the saved file instead of overwriting it
    pub append: bool,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,

    /// Log file path
    pub file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: DEFAULT_FILE_NAME.to_string(),
            append: false,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => {
                return Err(Error::InvalidFormat {
                    path: path.to_path_buf(),
                    expected: "YAML, JSON or TOML".to_string(),
                })
            }
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in &Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) if !path.exists() => Err(Error::FileNotFound {
                path: path.to_path_buf(),
            }),
            Some(path) => Self::from_file(path)
                .map_err(|e| Error::config(format!("{}: {}", path.display(), e))),
            None => Self::load(),
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            // Current directory
            PathBuf::from(".modeldoc.yaml"),
            PathBuf::from(".modeldoc.yml"),
            PathBuf::from(".modeldoc.json"),
            PathBuf::from(".modeldoc.toml"),
        ];

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let modeldoc_dir = config_dir.join("modeldoc");
            paths.push(modeldoc_dir.join("config.yaml"));
            paths.push(modeldoc_dir.join("config.json"));
            paths.push(modeldoc_dir.join("config.toml"));
        }

        // Home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".modeldoc.yaml"));
            paths.push(home_dir.join(".modeldoc.json"));
            paths.push(home_dir.join(".modeldoc.toml"));
        }

        paths
    }
}
