//! Lox scanner driver.
//!
//! Library half of the `lox` binary: argument parsing, the script and
//! prompt commands, and logging setup. `main.rs` only wires these to the
//! process's standard streams and exit code.

pub mod commands;
mod error;
pub mod options;

pub use commands::{run_file, run_prompt, run_source};
pub use error::{exit_code, CliError, USAGE};
pub use options::{CliOptions, Command};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug logging.
///
/// Call once at startup. Respects `RUST_LOG` for filtering, e.g.
/// `RUST_LOG=lox_lexer=trace`. Without `RUST_LOG` nothing is installed.
/// `LOX_LOG_TREE=1` renders spans as an indented tree instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);
        if std::env::var("LOX_LOG_TREE").is_ok_and(|v| v == "1") {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    });
}
