//! Application glue module
//!
//! Command line and configuration for the `ini-dump` tool.

mod cli;
mod config;

pub use cli::{exit_code, CliArgs, FileStatus};
pub use config::{Config, ConfigError, OutputFormat};
