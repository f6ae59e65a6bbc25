//! Bounded line reader
//!
//! Splits a byte stream into raw lines of at most `max_line - 1` bytes.
//! A longer physical line comes back in pieces, each piece counted as a
//! line of its own.

use std::io::{self, BufRead};

/// Reads raw lines out of a buffered stream
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    /// Longest line returned, terminator included
    capacity: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Create a reader for a line buffer of `max_line` bytes
    pub fn new(inner: R, max_line: usize) -> Self {
        Self {
            inner,
            capacity: max_line.saturating_sub(1).max(1),
        }
    }

    /// Read the next line into `buf`, replacing its contents.
    ///
    /// The `\n` terminator is kept when present. Returns `false` at end of
    /// stream.
    pub fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<bool> {
        buf.clear();
        loop {
            let available = match self.inner.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(!buf.is_empty());
            }

            let room = self.capacity - buf.len();
            let window = &available[..available.len().min(room)];
            let (used, done) = match window.iter().position(|&b| b == b'\n') {
                Some(i) => (i + 1, true),
                None => (window.len(), buf.len() + window.len() >= self.capacity),
            };
            buf.extend_from_slice(&window[..used]);
            self.inner.consume(used);

            if done {
                return Ok(true);
            }
        }
    }
}
