//! Command line for the ini-dump tool

use std::path::PathBuf;

use clap::Parser;

use crate::parser::ParseReport;

/// CLI arguments for ini-dump
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "ini-dump")]
#[command(version)]
#[command(
    about = "Print the section/name/value triples of INI files",
    after_help = "With no FILE, or when FILE is -, reads stdin.\n\
                  Exit status: 0 clean, 1 parse errors, 2 unreadable input or config."
)]
pub struct CliArgs {
    /// Load options from a JSON config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output entries as JSON
    #[arg(short, long, conflicts_with = "text")]
    pub json: bool,

    /// Output entries as section.name=value
    #[arg(short, long)]
    pub text: bool,

    /// List every error and skipped line
    #[arg(short, long)]
    pub errors: bool,

    /// Treat indented lines as ordinary lines
    #[arg(long)]
    pub no_multiline: bool,

    /// Keep a UTF-8 byte order mark on line 1
    #[arg(long)]
    pub no_bom: bool,

    /// INI files to read
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl CliArgs {
    /// Inputs to read, `-` meaning stdin
    pub fn inputs(&self) -> Vec<PathBuf> {
        if self.files.is_empty() {
            vec![PathBuf::from("-")]
        } else {
            self.files.clone()
        }
    }
}

/// How one input fared, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileStatus {
    Clean,
    ParseErrors,
    Failed,
}

impl FileStatus {
    /// Classify a finished parse
    pub fn of(report: &ParseReport) -> Self {
        if !report.is_complete() {
            FileStatus::Failed
        } else if !report.is_ok() {
            FileStatus::ParseErrors
        } else {
            FileStatus::Clean
        }
    }

    /// Process exit code for this status
    pub fn code(self) -> u8 {
        match self {
            FileStatus::Clean => 0,
            FileStatus::ParseErrors => 1,
            FileStatus::Failed => 2,
        }
    }
}

/// Exit code for a whole run: the worst status seen, 0 when there were none
pub fn exit_code<I>(statuses: I) -> u8
where
    I: IntoIterator<Item = FileStatus>,
{
    statuses
        .into_iter()
        .max()
        .unwrap_or(FileStatus::Clean)
        .code()
}
