//! Configuration for the loxscan driver.
//!
//! Settings come from an optional `loxscan.toml`; command-line flags are
//! applied on top by the binary.

use std::fmt;
use std::path::{Path, PathBuf};

use dirs::config_dir;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DrvError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "loxscan.toml";

/// How tokens are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `TYPE lexeme literal` line per token.
    #[default]
    Text,
    /// A JSON array of token objects.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Driver configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Token output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Whether the trailing `EOF` token is printed.
    #[serde(default = "default_true")]
    pub show_eof: bool,

    /// Prompt shown by the interactive mode.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Keep an in-memory line history in the interactive mode.
    #[serde(default = "default_true")]
    pub history: bool,
}

fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_eof: true,
            prompt: default_prompt(),
            history: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches the current directory first, then the user's configuration
    /// directory (`<config_dir>/loxscan/loxscan.toml`). Returns the defaults
    /// if neither exists.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DrvError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DrvError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in the user configuration directory.
    fn check_user_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("loxscan").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_user_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.show_eof);
        assert_eq!(config.prompt, "> ");
        assert!(config.history);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml("format = \"json\"").unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.show_eof);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_bad_format_rejected() {
        let err = Config::from_toml("format = \"xml\"").unwrap_err();
        assert!(matches!(err, DrvError::Config(_)));
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &config_path,
            "show_eof = false\nprompt = \"lox> \"\nhistory = false\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(
            config,
            Config {
                format: OutputFormat::Text,
                show_eof: false,
                prompt: "lox> ".to_string(),
                history: false,
            }
        );
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/loxscan.toml"));
        assert!(matches!(result, Err(DrvError::Config(_))));
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
