//! Error types for INI parsing

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Status returned for a clean parse
pub const STATUS_OK: i32 = 0;
/// Status returned when the input path could not be opened
pub const STATUS_OPEN_FAILED: i32 = -1;

/// Fatal parse error
///
/// Only opening the input is fatal. Malformed lines and read failures are
/// recorded in the [`ParseReport`](crate::ParseReport).
#[derive(Error, Debug)]
pub enum Error {
    /// The input path could not be opened for reading
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Legacy integer status for this error
    pub fn status(&self) -> i32 {
        match self {
            Error::Open { .. } => STATUS_OPEN_FAILED,
        }
    }
}

/// Result type for parse operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why a line was recorded as an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// `[section` with no closing bracket
    MissingClosingBracket,
    /// Property line with neither `=` nor `:` outside a comment
    MissingDelimiter,
    /// The handler returned `false`
    HandlerRejected,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ErrorKind::MissingClosingBracket => "missing closing ']' on section line",
            ErrorKind::MissingDelimiter => "missing '=' or ':' on property line",
            ErrorKind::HandlerRejected => "entry rejected by handler",
        };
        f.write_str(msg)
    }
}

/// Why a line was skipped without being reported as an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    SectionTooLong,
    NameTooLong,
    ValueTooLong,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SkipReason::SectionTooLong => "section name too long",
            SkipReason::NameTooLong => "property name too long",
            SkipReason::ValueTooLong => "property value too long",
        };
        f.write_str(msg)
    }
}

/// An error recorded against a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineError {
    /// 1-based line number
    pub line: usize,
    pub kind: ErrorKind,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

/// A read failure that ended the scan early
///
/// Lines read before the failure have been classified and dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadError {
    /// Line that could not be read, 1-based
    pub line: usize,
    pub message: String,
}

impl ReadError {
    pub(crate) fn new(line: usize, source: &io::Error) -> Self {
        Self {
            line,
            message: source.to_string(),
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "read failed on line {}: {}", self.line, self.message)
    }
}

/// A line that was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}
