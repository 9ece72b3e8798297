//! Diagnostic sink trait and the collecting queue.
//!
//! Features:
//! - Optional error limit; dropped errors are still counted
//! - Report-order preservation (scanners report left to right)
//! - `reset` for hosts that reuse one queue across inputs (the prompt)

use crate::Diagnostic;

/// Receiver for diagnostics reported by a phase.
///
/// Reporting never alters the reporter's control flow.
pub trait DiagnosticSink {
    /// Record one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);

    /// Record an error with just a line and a message.
    fn report_error(&mut self, line: u32, message: &str) {
        self.report(Diagnostic::error(line, message));
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Configuration for diagnostic collection.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig { error_limit: 100 }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limit.
    pub fn unlimited() -> Self {
        DiagnosticConfig { error_limit: 0 }
    }
}

/// Queue for collecting diagnostics in report order.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// let output = lox_lexer::scan_with_sink(source, &LexerConfig::default(), &mut queue);
/// for diag in queue.flush() { emitter.emit(&diag); }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    /// Collected diagnostics.
    diagnostics: Vec<Diagnostic>,
    /// Count of errors, including suppressed ones.
    error_count: usize,
    /// Errors dropped because the limit was reached.
    suppressed: usize,
    /// Configuration.
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic to the queue.
    ///
    /// Returns `true` if the diagnostic was kept, `false` if the error limit
    /// dropped it. Dropped errors still count towards [`error_count`].
    ///
    /// [`error_count`]: Self::error_count
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        let limit_reached = self.limit_reached();
        self.error_count += 1;
        if limit_reached {
            self.suppressed += 1;
            return false;
        }
        self.diagnostics.push(diag);
        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Number of errors reported, including those dropped by the limit.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Number of errors dropped by the limit.
    pub fn suppressed_count(&self) -> usize {
        self.suppressed
    }

    /// Return the collected diagnostics in report order and clear the queue.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let result = std::mem::take(&mut self.diagnostics);
        self.reset();
        result
    }

    /// Forget everything reported so far, keeping the configuration.
    pub fn reset(&mut self) {
        self.diagnostics.clear();
        self.error_count = 0;
        self.suppressed = 0;
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}
