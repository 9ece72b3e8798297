//! Diagnostic collection and rendering for the Lox toolchain.
//!
//! Phases report problems through the [`DiagnosticSink`] trait. The host
//! usually passes a [`DiagnosticQueue`], then renders what it collected with
//! an [`emitter`] and picks an exit code from the error count.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue, DiagnosticSink};
