//! ini-stream: a streaming INI parser
//!
//! Sections are `[name]` headers, properties are `name = value` or
//! `name : value`, comments start with `;` or `#`. Indented lines after a
//! property are further values for the same name.
//!
//! Each triple is handed to a callback as it is found:
//!
//! ```
//! let mut seen = Vec::new();
//! let report = ini_stream::parse_str("[core]\nindent = 4\n", |section, name, value| {
//!     seen.push(format!("{section}.{name}={value}"));
//!     true
//! });
//! assert_eq!(seen, ["core.indent=4"]);
//! assert_eq!(report.status(), 0);
//! ```
//!
//! - `parser`: line classifier, bounded line reader, events and reports
//! - `app`: command line and configuration for the `ini-dump` tool
//! - `error`: fatal errors and per-line error kinds

pub mod app;
pub mod error;
pub mod parser;

use std::io::Read;
use std::path::Path;

pub use error::{
    Error, ErrorKind, LineError, ReadError, Result, SkipReason, SkippedLine, STATUS_OK,
    STATUS_OPEN_FAILED,
};
pub use parser::{Entry, Event, Limits, Options, ParseReport, Parser};

/// Parse a stream with default options
///
/// A read failure ends the scan early; see [`ParseReport::read_error`].
pub fn parse_stream<R, F>(reader: R, handler: F) -> ParseReport
where
    R: Read,
    F: FnMut(&str, &str, &str) -> bool,
{
    Parser::new().parse(reader, handler)
}

/// Open and parse a file with default options
///
/// A path that cannot be opened gives [`Error::Open`], whose
/// [`status`](Error::status) is [`STATUS_OPEN_FAILED`].
pub fn parse_path<P, F>(path: P, handler: F) -> Result<ParseReport>
where
    P: AsRef<Path>,
    F: FnMut(&str, &str, &str) -> bool,
{
    Parser::new().parse_path(path, handler)
}

/// Parse a string with default options
pub fn parse_str<F>(input: &str, handler: F) -> ParseReport
where
    F: FnMut(&str, &str, &str) -> bool,
{
    Parser::new().parse_str(input, handler)
}
