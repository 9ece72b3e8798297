//! Driver errors and their exit codes.

use std::io;
use std::path::PathBuf;

/// Usage line shown for bad command lines and at the top of `--help`.
pub const USAGE: &str = "Usage: lox [script]";

/// Process exit codes.
pub mod exit_code {
    /// Bad command line.
    pub const USAGE: u8 = 1;
    /// A file could not be read or output could not be written.
    pub const IO: u8 = 1;
    /// The script contained lexical errors.
    pub const LEX_ERROR: u8 = 2;
}

/// Anything that stops the driver before or while running a command.
///
/// Lexical errors are not `CliError`s: they are reported as diagnostics and
/// only affect the exit code.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{}", USAGE)]
    Usage,

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{0}' for --color (expected auto, always or never)")]
    InvalidColor(String),

    #[error("{}", read_failure(.path, .source))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Exit code the process should terminate with.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage | CliError::UnknownOption(_) | CliError::InvalidColor(_) => {
                exit_code::USAGE
            }
            CliError::Io { .. } | CliError::Output(_) => exit_code::IO,
        }
    }

    /// Whether the usage line should follow the message.
    pub fn wants_usage(&self) -> bool {
        matches!(self, CliError::UnknownOption(_) | CliError::InvalidColor(_))
    }
}

fn read_failure(path: &std::path::Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}
