//! Parser limits and feature flags

use serde::{Deserialize, Serialize};

/// Default raw line buffer size in bytes, terminator slot included
pub const DEFAULT_MAX_LINE: usize = 5000;
/// Default maximum section name length in bytes
pub const DEFAULT_MAX_SECTION: usize = 4096;
/// Default maximum property name length in bytes
pub const DEFAULT_MAX_NAME: usize = 50;
/// Default maximum property value length in bytes
pub const DEFAULT_MAX_VALUE: usize = 255;

/// Length limits applied while parsing
///
/// Lines longer than `max_line - 1` bytes are split into several lines.
/// Sections, names and values over their maximum are skipped, never
/// truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_line: usize,
    pub max_section: usize,
    pub max_name: usize,
    pub max_value: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_line: DEFAULT_MAX_LINE,
            max_section: DEFAULT_MAX_SECTION,
            max_name: DEFAULT_MAX_NAME,
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}

/// Parser options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Length limits
    pub limits: Limits,
    /// Treat indented lines after a property as additional values for it
    pub allow_multiline: bool,
    /// Strip a UTF-8 byte order mark from the first line
    pub allow_bom: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            allow_multiline: true,
            allow_bom: true,
        }
    }
}

impl Options {
    /// Set the length limits
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Enable or disable multi-line continuation
    pub fn multiline(mut self, enabled: bool) -> Self {
        self.allow_multiline = enabled;
        self
    }

    /// Enable or disable BOM stripping
    pub fn bom(mut self, enabled: bool) -> Self {
        self.allow_bom = enabled;
        self
    }
}
