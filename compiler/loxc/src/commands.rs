//! The script and prompt commands.
//!
//! Both print one token per line (`KIND lexeme`) to `out` and send
//! diagnostics through a [`DiagnosticEmitter`]. Scanning is fresh for every
//! input: a script is one input, each prompt line is another. Both collect
//! without an error limit, so every unrecognized character is shown.

use std::io::{BufRead, Write};
use std::path::Path;

use lox_diagnostic::emitter::DiagnosticEmitter;
use lox_diagnostic::{DiagnosticConfig, DiagnosticQueue};
use lox_lexer::{scan_with_sink, LexerConfig};

use crate::CliError;

/// Scan `source`, print its tokens and emit its diagnostics.
///
/// Returns the number of lexical errors reported. The queue is drained;
/// if its limit dropped any errors, a note says how many.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn run_source<W, E>(
    source: &str,
    queue: &mut DiagnosticQueue,
    out: &mut W,
    emitter: &mut E,
) -> Result<usize, CliError>
where
    W: Write,
    E: DiagnosticEmitter + ?Sized,
{
    let output = scan_with_sink(source, &LexerConfig::default(), queue);
    for token in &output.tokens {
        writeln!(out, "{token}")?;
    }
    out.flush()?;

    let error_count = queue.error_count();
    let suppressed = queue.suppressed_count();
    emitter.emit_all(&queue.flush());
    emitter.emit_suppressed(suppressed);
    emitter.flush();
    Ok(error_count)
}

/// Scan the file at `path`, ending with a summary line if it had errors.
///
/// Returns the number of lexical errors reported.
#[tracing::instrument(level = "debug", skip(out, emitter))]
pub fn run_file<W, E>(path: &Path, out: &mut W, emitter: &mut E) -> Result<usize, CliError>
where
    W: Write,
    E: DiagnosticEmitter + ?Sized,
{
    let source = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    let error_count = run_source(&source, &mut queue, out, emitter)?;
    if error_count > 0 {
        emitter.emit_summary(error_count);
        emitter.flush();
    }
    tracing::debug!(error_count, "script scanned");
    Ok(error_count)
}

/// Interactive loop: prompt, read a line, scan it, repeat until end of input.
///
/// An error on one line never affects the next.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_prompt<R, W, E>(mut input: R, out: &mut W, emitter: &mut E) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
    E: DiagnosticEmitter + ?Sized,
{
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        let read = input.read_line(&mut line).map_err(|source| CliError::Io {
            path: "<stdin>".into(),
            source,
        })?;
        if read == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let source = line.strip_suffix('\n').unwrap_or(&line);
        run_source(source, &mut queue, out, emitter)?;
        queue.reset();
    }
}

#[cfg(test)]
mod tests;
