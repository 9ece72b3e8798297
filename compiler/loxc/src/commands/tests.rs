use std::io::Cursor;

use lox_diagnostic::emitter::{ColorMode, TerminalEmitter};
use pretty_assertions::assert_eq;

use super::*;

fn emitter() -> TerminalEmitter<Vec<u8>> {
    TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
}

fn text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| panic!("non-UTF-8 output: {e}"))
}

// === run_source ===

#[test]
fn prints_one_token_per_line() {
    let mut out = Vec::new();
    let mut diags = emitter();
    let mut queue = DiagnosticQueue::new();
    let errors = run_source("(!=)", &mut queue, &mut out, &mut diags)
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(errors, 0);
    assert_eq!(text(out), "LEFT_PAREN (\nBANG_EQUAL !=\nRIGHT_PAREN )\nEOF\n");
    assert_eq!(text(diags.into_inner()), "");
}

#[test]
fn reports_errors_and_keeps_scanning() {
    let mut out = Vec::new();
    let mut diags = emitter();
    let mut queue = DiagnosticQueue::new();
    let errors = run_source("+@-", &mut queue, &mut out, &mut diags)
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(errors, 1);
    assert_eq!(text(out), "PLUS +\nMINUS -\nEOF\n");
    assert_eq!(
        text(diags.into_inner()),
        "[line 0] error[E0001]: unrecognized character '@'\n"
    );
    assert_eq!(queue.error_count(), 0);
}

#[test]
fn limited_queue_notes_dropped_errors() {
    let mut out = Vec::new();
    let mut diags = emitter();
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig { error_limit: 2 });
    let errors = run_source("@#$%", &mut queue, &mut out, &mut diags)
        .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(errors, 4);
    assert_eq!(
        text(diags.into_inner()),
        "[line 0] error[E0001]: unrecognized character '@'\n\
         [line 0] error[E0001]: unrecognized character '#'\n\
         note: 2 further errors not shown (error limit reached)\n"
    );
}

// === run_file ===

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
    let path = dir.path().join("missing.lox");
    let mut out = Vec::new();
    let result = run_file(&path, &mut out, &mut emitter());
    assert!(matches!(result, Err(CliError::Io { .. })));
    assert!(out.is_empty());
}

#[test]
fn file_with_errors_ends_with_summary() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
    let path = dir.path().join("bad.lox");
    std::fs::write(&path, "#\n$ // trailing\n").unwrap_or_else(|e| panic!("{e}"));

    let mut out = Vec::new();
    let mut diags = emitter();
    let errors = run_file(&path, &mut out, &mut diags).unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(errors, 2);
    assert_eq!(text(out), "EOF\n");
    assert_eq!(
        text(diags.into_inner()),
        "[line 0] error[E0001]: unrecognized character '#'\n\
         [line 1] error[E0001]: unrecognized character '$'\n\
         error: 2 errors reported\n"
    );
}

#[test]
fn file_reports_every_error_past_default_limit() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
    let path = dir.path().join("many.lox");
    std::fs::write(&path, "@".repeat(150)).unwrap_or_else(|e| panic!("{e}"));

    let mut out = Vec::new();
    let mut diags = emitter();
    let errors = run_file(&path, &mut out, &mut diags).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(errors, 150);

    let stderr = text(diags.into_inner());
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 151);
    assert!(lines[..150]
        .iter()
        .all(|l| *l == "[line 0] error[E0001]: unrecognized character '@'"));
    assert_eq!(lines[150], "error: 150 errors reported");
}

// === run_prompt ===

#[test]
fn prompt_scans_each_line_fresh() {
    let input = Cursor::new("+\n\n@\n-");
    let mut out = Vec::new();
    let mut diags = emitter();
    run_prompt(input, &mut out, &mut diags).unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(
        text(out),
        "> PLUS +\nEOF\n> EOF\n> EOF\n> MINUS -\nEOF\n> \n"
    );
    // Every line restarts at line 0.
    assert_eq!(
        text(diags.into_inner()),
        "[line 0] error[E0001]: unrecognized character '@'\n"
    );
}

#[test]
fn prompt_ends_cleanly_on_empty_input() {
    let mut out = Vec::new();
    run_prompt(Cursor::new(""), &mut out, &mut emitter()).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(text(out), "> \n");
}

#[test]
fn prompt_accepts_crlf_lines() {
    let mut out = Vec::new();
    run_prompt(Cursor::new("*\r\n"), &mut out, &mut emitter()).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(text(out), "> STAR *\nEOF\n> \n");
}
