//! INI stream parser
//!
//! Reads a byte stream line by line and reports every section/name/value
//! triple without building a document tree.

mod classify;
mod events;
mod options;
mod reader;
mod report;
mod scan;
mod state;

pub use events::{Entry, Event, Events};
pub use options::{
    Limits, Options, DEFAULT_MAX_LINE, DEFAULT_MAX_NAME, DEFAULT_MAX_SECTION, DEFAULT_MAX_VALUE,
};
pub use report::ParseReport;
pub use state::Parser;
