//! ini-dump
//!
//! Parses INI files and prints every section/name/value triple.
//! Reads stdin when no file is given.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser as _;
use ini_stream::app::{exit_code, CliArgs, Config, FileStatus, OutputFormat};
use ini_stream::{Entry, ParseReport, Parser};
use serde::Serialize;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = CliArgs::parse();

    let config = match Config::load_with_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(FileStatus::Failed.code());
        },
    };

    let parser = Parser::with_options(config.parser);
    let mut statuses = Vec::new();

    for path in args.inputs() {
        let status = match dump_one(&parser, &path, &config) {
            Ok(status) => status,
            Err(e) => {
                eprintln!("Error writing output: {}", e);
                return ExitCode::from(FileStatus::Failed.code());
            },
        };
        statuses.push(status);
    }

    ExitCode::from(exit_code(statuses))
}

/// Parse and print one input
fn dump_one(parser: &Parser, path: &Path, config: &Config) -> serde_json::Result<FileStatus> {
    let result = if path.as_os_str() == "-" {
        Ok(parser.parse_collect(io::stdin().lock()))
    } else {
        parser.collect_path(path)
    };

    let (entries, report) = match result {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::error!(status = e.status(), "{}", e);
            eprintln!("{}", e);
            return Ok(FileStatus::Failed);
        },
    };
    tracing::info!(
        path = %path.display(),
        lines = report.lines,
        entries = report.entries,
        "parsed"
    );

    print_dump(path, &entries, &report, config)?;
    if let Some(e) = &report.read_error {
        eprintln!("{}: {}", path.display(), e);
    }
    Ok(FileStatus::of(&report))
}

#[derive(Serialize)]
struct Dump<'a> {
    path: String,
    status: i32,
    entries: &'a [Entry],
    report: &'a ParseReport,
}

fn print_dump(
    path: &Path,
    entries: &[Entry],
    report: &ParseReport,
    config: &Config,
) -> serde_json::Result<()> {
    match config.output {
        OutputFormat::Text => {
            for entry in entries {
                if entry.section.is_empty() {
                    println!("{}={}", entry.name, entry.value);
                } else {
                    println!("{}.{}={}", entry.section, entry.name, entry.value);
                }
            }
        },
        OutputFormat::Json => {
            let dump = Dump {
                path: path.display().to_string(),
                status: report.status(),
                entries,
                report,
            };
            println!("{}", serde_json::to_string_pretty(&dump)?);
        },
    }

    if config.list_errors {
        for error in &report.errors {
            eprintln!("{}: error: {}", path.display(), error);
        }
        for skipped in &report.skipped {
            eprintln!("{}: skipped: {}", path.display(), skipped);
        }
    } else if let Some(line) = report.first_error {
        eprintln!("{}: first error on line {}", path.display(), line);
    }
    Ok(())
}
