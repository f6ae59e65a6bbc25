//! Parse summary

use serde::Serialize;

use crate::error::{ErrorKind, LineError, ReadError, SkipReason, SkippedLine, STATUS_OK};

/// Summary of a completed parse
///
/// `first_error` is the line of the first error and is never overwritten.
/// `errors` and `skipped` list every occurrence in line order. A read
/// failure ends the scan but keeps everything found before it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Line of the first error, if any
    pub first_error: Option<usize>,
    /// Every error line
    pub errors: Vec<LineError>,
    /// Every line skipped for exceeding a length limit
    pub skipped: Vec<SkippedLine>,
    /// Number of lines consumed
    pub lines: usize,
    /// Number of handler invocations
    pub entries: usize,
    /// Set when the stream failed before end of input
    pub read_error: Option<ReadError>,
}

impl ParseReport {
    /// True when no error was recorded
    pub fn is_ok(&self) -> bool {
        self.first_error.is_none()
    }

    /// True when the whole stream was read
    pub fn is_complete(&self) -> bool {
        self.read_error.is_none()
    }

    /// Legacy integer status: `0`, or the line of the first error
    pub fn status(&self) -> i32 {
        self.first_error
            .map_or(STATUS_OK, |line| i32::try_from(line).unwrap_or(i32::MAX))
    }

    pub(crate) fn record_error(&mut self, line: usize, kind: ErrorKind) {
        tracing::debug!(line, %kind, "parse error");
        self.first_error.get_or_insert(line);
        self.errors.push(LineError { line, kind });
    }

    pub(crate) fn record_read_error(&mut self, line: usize, source: &std::io::Error) {
        tracing::warn!(line, "read failed: {}", source);
        self.read_error = Some(ReadError::new(line, source));
    }

    pub(crate) fn record_skip(&mut self, line: usize, reason: SkipReason) {
        tracing::debug!(line, %reason, "line skipped");
        self.skipped.push(SkippedLine { line, reason });
    }
}
