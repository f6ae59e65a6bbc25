//! Line classification
//!
//! The per-line state machine. Each raw line is stripped and classified as
//! a comment, a continuation of the previous property, a section header or
//! a name/value pair. The classifier carries the current section and the
//! most recent property name from one line to the next; nothing else
//! survives between lines.
//!
//! Classification order:
//! 1. Blank, or starting with `;` / `#`: ignored
//! 2. Indented, with a previous property: continuation value
//! 3. Starting with `[`: section header
//! 4. Anything else: `name = value` or `name : value`
//!
//! A NUL byte ends the line; anything after it is ignored.

use std::borrow::Cow;

use super::options::Options;
use super::scan::{
    find_char_or_comment, find_comment, find_last_char_before_comment, is_comment_marker,
    leading_space, lskip, rstrip,
};
use crate::error::{ErrorKind, SkipReason};

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// What a single line turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// Blank line or whole-line comment
    Ignored,
    /// Extra value for the previous property name
    Continuation { value: &'a [u8] },
    /// The current section changed
    Section,
    /// A name/value pair; the name is now the previous property name
    Property { name: &'a [u8], value: &'a [u8] },
    /// Well formed but over a length limit
    Skipped(SkipReason),
    /// Structurally invalid
    Invalid(ErrorKind),
}

/// Carries parse state across lines
#[derive(Debug)]
pub struct LineClassifier {
    options: Options,
    section: String,
    previous_name: String,
    line_number: usize,
}

impl LineClassifier {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            section: String::new(),
            previous_name: String::new(),
            line_number: 0,
        }
    }

    /// Current section, empty before the first header
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Most recent property name, empty after a section header
    pub fn previous_name(&self) -> &str {
        &self.previous_name
    }

    /// Number of the line last classified, 1-based
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Classify the next raw line
    pub fn classify<'a>(&mut self, raw: &'a [u8]) -> Outcome<'a> {
        self.line_number += 1;

        let raw = match raw.iter().position(|&b| b == 0) {
            Some(nul) => &raw[..nul],
            None => raw,
        };
        let mut line = raw;
        if self.line_number == 1 && self.options.allow_bom {
            line = line.strip_prefix(BOM).unwrap_or(line);
        }
        let bom_len = raw.len() - line.len();
        let line = rstrip(line);
        let indent = leading_space(line);
        let content = &line[indent..];
        // Content starts past the first byte of the raw line
        let indented = bom_len + indent > 0;
        let continues = self.options.allow_multiline && indented && !self.previous_name.is_empty();

        match content.first() {
            None => Outcome::Ignored,
            Some(&b) if is_comment_marker(b) => Outcome::Ignored,
            Some(_) if continues => Outcome::Continuation { value: content },
            Some(b'[') => self.section_header(&content[1..]),
            Some(_) => self.property(content),
        }
    }

    fn section_header(&mut self, rest: &[u8]) -> Outcome<'static> {
        let Some(end) = find_last_char_before_comment(rest, b']') else {
            return Outcome::Invalid(ErrorKind::MissingClosingBracket);
        };
        let name = &rest[..end];
        if name.len() > self.options.limits.max_section {
            return Outcome::Skipped(SkipReason::SectionTooLong);
        }
        self.section = lossy(name).into_owned();
        self.previous_name.clear();
        Outcome::Section
    }

    fn property<'a>(&mut self, content: &'a [u8]) -> Outcome<'a> {
        let mut at = find_char_or_comment(content, b'=');
        if content.get(at) != Some(&b'=') {
            at = find_char_or_comment(content, b':');
        }
        if !matches!(content.get(at), Some(b'=') | Some(b':')) {
            return Outcome::Invalid(ErrorKind::MissingDelimiter);
        }

        let name = rstrip(&content[..at]);
        let value = lskip(&content[at + 1..]);
        let value = rstrip(&value[..find_comment(value)]);

        let limits = &self.options.limits;
        if name.len() > limits.max_name {
            return Outcome::Skipped(SkipReason::NameTooLong);
        }
        if value.len() > limits.max_value {
            return Outcome::Skipped(SkipReason::ValueTooLong);
        }

        self.previous_name = lossy(name).into_owned();
        Outcome::Property { name, value }
    }
}

/// Decode raw bytes for the handler
pub fn lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
