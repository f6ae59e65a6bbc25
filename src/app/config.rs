//! Configuration for the ini-dump tool
//!
//! Precedence: CLI flags > `--config` file > default config file > defaults.
//! The default file lives at `<config dir>/ini-stream/config.json`. A broken
//! default file is logged and ignored; a broken `--config` file is an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::cli::CliArgs;
use crate::parser::Options;

/// Dump configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Parser limits and feature flags
    pub parser: Options,
    /// How entries are printed
    pub output: OutputFormat,
    /// Print every error and skipped line, not just the first error
    pub list_errors: bool,
}

/// Output format for dumped entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `section.name=value`, one per line
    #[default]
    Text,
    /// One JSON document per file
    Json,
}

impl Config {
    /// Build the effective configuration for a run
    pub fn load_with_args(args: &CliArgs) -> Result<Self, ConfigError> {
        Self::layered(args, Self::default_config_path())
    }

    fn layered(args: &CliArgs, fallback: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match (&args.config, fallback) {
            (Some(explicit), _) => Self::from_file(explicit)?,
            (None, Some(path)) if path.is_file() => Self::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!("ignoring default config: {}", e);
                Self::default()
            }),
            (None, _) => Self::default(),
        };
        config.apply_cli_args(args);
        Ok(config)
    }

    /// Read a JSON config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// `<config dir>/ini-stream/config.json`, when the platform has one
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ini-stream").join("config.json"))
    }

    fn apply_cli_args(&mut self, args: &CliArgs) {
        if args.json {
            self.output = OutputFormat::Json;
        }
        if args.text {
            self.output = OutputFormat::Text;
        }
        if args.no_multiline {
            self.parser.allow_multiline = false;
        }
        if args.no_bom {
            self.parser.allow_bom = false;
        }
        self.list_errors |= args.errors;
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
