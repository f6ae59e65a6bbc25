//! Golden tests for the INI parser
//!
//! Each test feeds a complete document to the parser and compares the
//! ordered list of dispatched triples and the final status against the
//! expected values.

use ini_stream::{ErrorKind, Event, Limits, Options, ParseReport, Parser};

type Triple = (String, String, String);

/// Helper to run a golden test
fn run_golden_test(parser: &Parser, input: &str) -> (Vec<Triple>, ParseReport) {
    let mut triples = Vec::new();
    let report = parser.parse(input.as_bytes(), |section, name, value| {
        triples.push((section.to_string(), name.to_string(), value.to_string()));
        true
    });
    (triples, report)
}

fn expect(triples: &[(&str, &str, &str)]) -> Vec<Triple> {
    triples
        .iter()
        .map(|(s, n, v)| (s.to_string(), n.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Realistic documents
// ============================================================================

#[test]
fn test_editorconfig_document() {
    let input = "\
# EditorConfig is awesome: https://EditorConfig.org

root = true

[*]
end_of_line = lf
insert_final_newline = true

; Matches multiple files with brace expansion notation
[*.{js,py}]
charset = utf-8

[*.py]
indent_style = space
indent_size = 4

[Makefile]
indent_style = tab

[lib/**.js]
indent_style = space ; inline comment
indent_size = 2
";
    let (triples, report) = run_golden_test(&Parser::new(), input);

    assert_eq!(report.status(), 0);
    assert_eq!(
        triples,
        expect(&[
            ("", "root", "true"),
            ("*", "end_of_line", "lf"),
            ("*", "insert_final_newline", "true"),
            ("*.{js,py}", "charset", "utf-8"),
            ("*.py", "indent_style", "space"),
            ("*.py", "indent_size", "4"),
            ("Makefile", "indent_style", "tab"),
            ("lib/**.js", "indent_style", "space"),
            ("lib/**.js", "indent_size", "2"),
        ])
    );
}

#[test]
fn test_python_style_continuations() {
    let input = "\
[paths]
search = /usr/lib
    /usr/local/lib
\t/opt/lib
after : done
";
    let (triples, report) = run_golden_test(&Parser::new(), input);

    assert!(report.is_ok());
    assert_eq!(
        triples,
        expect(&[
            ("paths", "search", "/usr/lib"),
            ("paths", "search", "/usr/local/lib"),
            ("paths", "search", "/opt/lib"),
            ("paths", "after", "done"),
        ])
    );
}

#[test]
fn test_crlf_line_endings() {
    let input = "[win]\r\nkey = value\r\n\r\nother=x\r\n";
    let (triples, report) = run_golden_test(&Parser::new(), input);

    assert!(report.is_ok());
    assert_eq!(
        triples,
        expect(&[("win", "key", "value"), ("win", "other", "x")])
    );
}

#[test]
fn test_bom_is_stripped() {
    let input = "\u{feff}[s]\nk=v\n";
    let (triples, report) = run_golden_test(&Parser::new(), input);

    assert!(report.is_ok());
    assert_eq!(triples, expect(&[("s", "k", "v")]));
}

// ============================================================================
// Errors and recovery
// ============================================================================

#[test]
fn test_errors_do_not_stop_parsing() {
    let input = "\
[good]
a = 1
[broken
b = 2
this line has no delimiter
[next]
c = 3
";
    let (triples, report) = run_golden_test(&Parser::new(), input);

    assert_eq!(report.status(), 3);
    assert_eq!(
        report.errors.iter().map(|e| (e.line, e.kind)).collect::<Vec<_>>(),
        vec![(3, ErrorKind::MissingClosingBracket), (5, ErrorKind::MissingDelimiter)]
    );
    assert_eq!(
        triples,
        expect(&[("good", "a", "1"), ("good", "b", "2"), ("next", "c", "3")])
    );
    assert_eq!(report.lines, 7);
}

#[test]
fn test_handler_rejection_reports_first_line() {
    let input = "port = 80\nport = http\nport = x\n";
    let mut accepted = Vec::new();
    let report = Parser::new().parse(input.as_bytes(), |_, _, value| match value.parse::<u16>() {
        Ok(port) => {
            accepted.push(port);
            true
        },
        Err(_) => false,
    });

    assert_eq!(accepted, vec![80]);
    assert_eq!(report.status(), 2);
    assert_eq!(report.errors.len(), 2);
    assert!(report
        .errors
        .iter()
        .all(|e| e.kind == ErrorKind::HandlerRejected));
}

#[test]
fn test_multiline_disabled_reports_indented_line() {
    let parser = Parser::with_options(Options::default().multiline(false));
    let (triples, report) = run_golden_test(&parser, "key=line1\n  line2\n");

    assert_eq!(triples, expect(&[("", "key", "line1")]));
    assert_eq!(report.status(), 2);
}

#[test]
fn test_oversized_fields_are_skipped() {
    let parser = Parser::with_options(Options::default().limits(Limits {
        max_name: 8,
        max_value: 8,
        ..Limits::default()
    }));
    let input = "short=ok\nwaytoolongname=x\nk=waytoolongvalue\n";
    let (triples, report) = run_golden_test(&parser, input);

    assert_eq!(triples, expect(&[("", "short", "ok")]));
    assert!(report.is_ok());
    assert_eq!(report.skipped.len(), 2);
}

#[test]
fn test_default_value_limit() {
    let value = "v".repeat(255);
    let input = format!("fits={value}\ntoo_long={value}v\n");
    let (triples, report) = run_golden_test(&Parser::new(), &input);

    assert_eq!(triples.len(), 1);
    assert_eq!(triples[0].2.len(), 255);
    assert!(report.is_ok());
}

// ============================================================================
// Event iterator
// ============================================================================

#[test]
fn test_events_match_callbacks() {
    let input = "[a]\nx=1\n  y\nbad\n[b]\nz : 2 ; c\n";
    let parser = Parser::new();

    let (triples, _) = run_golden_test(&parser, input);
    let events: Vec<Event> = parser.events(input.as_bytes()).collect();

    let from_events: Vec<Triple> = events
        .iter()
        .filter_map(|event| match event {
            Event::Entry(e) => Some((e.section.clone(), e.name.clone(), e.value.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(triples, from_events);
    assert!(events
        .iter()
        .any(|event| matches!(event, Event::Error(e) if e.line == 4)));
}
