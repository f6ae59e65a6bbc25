//! INI stream parser
//!
//! Drives the line reader and the classifier, dispatches every
//! section/name/value triple to a handler and keeps the error record.
//!
//! Errors never stop the scan. A line that is malformed, or whose entry the
//! handler rejects, is recorded and parsing carries on with the next line.
//! The report keeps the first error line for the legacy integer status and
//! lists every error for diagnostics.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::classify::{lossy, LineClassifier, Outcome};
use super::events::{Entry, Events};
use super::options::Options;
use super::reader::LineReader;
use super::report::ParseReport;
use crate::error::{Error, ErrorKind, Result};

/// The INI parser
///
/// Holds only options; every parse call gets fresh state, so one parser can
/// be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: Options,
}

impl Parser {
    /// Create a parser with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Get the parser options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parse a stream, calling `handler(section, name, value)` for each entry.
    ///
    /// The strings passed to the handler are only valid for the duration of
    /// the call. Returning `false` marks the line as an error; parsing
    /// continues either way. A read failure ends the scan and is kept in
    /// [`ParseReport::read_error`].
    pub fn parse<R, F>(&self, reader: R, handler: F) -> ParseReport
    where
        R: Read,
        F: FnMut(&str, &str, &str) -> bool,
    {
        self.parse_buffered(BufReader::new(reader), handler)
    }

    /// Parse an in-memory string
    pub fn parse_str<F>(&self, input: &str, handler: F) -> ParseReport
    where
        F: FnMut(&str, &str, &str) -> bool,
    {
        self.parse_buffered(input.as_bytes(), handler)
    }

    /// Open `path` and parse it
    ///
    /// Failing to open the file is the only error.
    pub fn parse_path<P, F>(&self, path: P, handler: F) -> Result<ParseReport>
    where
        P: AsRef<Path>,
        F: FnMut(&str, &str, &str) -> bool,
    {
        let file = open(path.as_ref())?;
        Ok(self.parse(file, handler))
    }

    /// Parse a stream and collect every entry
    pub fn parse_collect<R: Read>(&self, reader: R) -> (Vec<Entry>, ParseReport) {
        let mut entries = Vec::new();
        let report = self.parse_numbered(BufReader::new(reader), |line, section, name, value| {
            entries.push(Entry::new(line, section, name, value));
            true
        });
        (entries, report)
    }

    /// Open `path` and collect every entry
    pub fn collect_path<P: AsRef<Path>>(&self, path: P) -> Result<(Vec<Entry>, ParseReport)> {
        let file = open(path.as_ref())?;
        Ok(self.parse_collect(file))
    }

    /// Lazily iterate over the events of a stream
    pub fn events<R: Read>(&self, reader: R) -> Events<BufReader<R>> {
        Events::new(BufReader::new(reader), self.options)
    }

    fn parse_buffered<R, F>(&self, reader: R, mut handler: F) -> ParseReport
    where
        R: BufRead,
        F: FnMut(&str, &str, &str) -> bool,
    {
        self.parse_numbered(reader, |_, section, name, value| handler(section, name, value))
    }

    fn parse_numbered<R, F>(&self, reader: R, mut handler: F) -> ParseReport
    where
        R: BufRead,
        F: FnMut(usize, &str, &str, &str) -> bool,
    {
        let mut reader = LineReader::new(reader, self.options.limits.max_line);
        let mut classifier = LineClassifier::new(self.options);
        let mut report = ParseReport::default();
        let mut buf = Vec::with_capacity(256);

        loop {
            match reader.read_line(&mut buf) {
                Ok(true) => {},
                Ok(false) => break,
                Err(e) => {
                    report.record_read_error(classifier.line_number() + 1, &e);
                    break;
                },
            }

            let outcome = classifier.classify(&buf);
            let line = classifier.line_number();
            tracing::trace!(line, ?outcome, "classified");

            let accepted = match outcome {
                Outcome::Ignored | Outcome::Section => continue,
                Outcome::Continuation { value } => handler(
                    line,
                    classifier.section(),
                    classifier.previous_name(),
                    &lossy(value),
                ),
                Outcome::Property { name, value } => {
                    handler(line, classifier.section(), &lossy(name), &lossy(value))
                },
                Outcome::Skipped(reason) => {
                    report.record_skip(line, reason);
                    continue;
                },
                Outcome::Invalid(kind) => {
                    report.record_error(line, kind);
                    continue;
                },
            };

            report.entries += 1;
            if !accepted {
                report.record_error(line, ErrorKind::HandlerRejected);
            }
        }

        report.lines = classifier.line_number();
        report
    }
}

fn open(path: &Path) -> Result<File> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "parsing file");
    Ok(file)
}
