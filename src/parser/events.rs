//! Pull-based parsing
//!
//! [`Events`] yields owned [`Event`]s one line at a time instead of calling
//! a handler. Nothing can reject an entry here, so
//! [`ErrorKind::HandlerRejected`](crate::ErrorKind::HandlerRejected) never
//! appears.

use std::io::BufRead;

use serde::Serialize;

use super::classify::{lossy, LineClassifier, Outcome};
use super::options::Options;
use super::reader::LineReader;
use crate::error::{LineError, ReadError, SkippedLine};

/// An owned section/name/value triple
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    /// 1-based line the value came from
    pub line: usize,
    pub section: String,
    pub name: String,
    pub value: String,
}

impl Entry {
    pub fn new(line: usize, section: &str, name: &str, value: &str) -> Self {
        Self {
            line,
            section: section.to_owned(),
            name: name.to_owned(),
            value: value.to_owned(),
        }
    }
}

/// Something found on a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Entry(Entry),
    Error(LineError),
    Skipped(SkippedLine),
    /// The stream failed; always the last event
    ReadError(ReadError),
}

/// Lazy iterator over the events of a stream
///
/// Ends with [`Event::ReadError`] if the stream fails.
#[derive(Debug)]
pub struct Events<R> {
    reader: LineReader<R>,
    classifier: LineClassifier,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> Events<R> {
    pub(crate) fn new(reader: R, options: Options) -> Self {
        Self {
            reader: LineReader::new(reader, options.limits.max_line),
            classifier: LineClassifier::new(options),
            buf: Vec::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Events<R> {
    type Item = Event;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            match self.reader.read_line(&mut self.buf) {
                Ok(true) => {},
                Ok(false) => {
                    self.done = true;
                    break;
                },
                Err(e) => {
                    self.done = true;
                    let line = self.classifier.line_number() + 1;
                    return Some(Event::ReadError(ReadError::new(line, &e)));
                },
            }

            let outcome = self.classifier.classify(&self.buf);
            let line = self.classifier.line_number();
            let event = match outcome {
                Outcome::Ignored | Outcome::Section => continue,
                Outcome::Continuation { value } => Event::Entry(Entry::new(
                    line,
                    self.classifier.section(),
                    self.classifier.previous_name(),
                    &lossy(value),
                )),
                Outcome::Property { name, value } => Event::Entry(Entry::new(
                    line,
                    self.classifier.section(),
                    &lossy(name),
                    &lossy(value),
                )),
                Outcome::Skipped(reason) => Event::Skipped(SkippedLine { line, reason }),
                Outcome::Invalid(kind) => Event::Error(LineError { line, kind }),
            };
            return Some(event);
        }
        None
    }
}
