//! Command-line options.
//!
//! ```text
//! lox [--color=auto|always|never] [script]
//! lox --help | --version
//! ```

use std::path::PathBuf;

use lox_diagnostic::emitter::ColorMode;

use crate::CliError;

/// What the driver should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Read lines from standard input and scan each one.
    Prompt,
    /// Scan one file.
    Script(PathBuf),
    Help,
    Version,
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub command: Command,
    /// How diagnostics are colored on stderr.
    pub color: ColorMode,
}

impl CliOptions {
    /// Parse arguments, excluding the program name.
    ///
    /// Options may appear before or after the script path. `--help` and
    /// `--version` win over everything else on the line.
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut color = ColorMode::Auto;
        let mut script: Option<PathBuf> = None;
        let mut help = false;
        let mut version = false;

        for arg in args {
            let arg: String = arg.into();
            if let Some(value) = arg.strip_prefix("--color=") {
                color = ColorMode::from_flag(value)
                    .ok_or_else(|| CliError::InvalidColor(value.to_string()))?;
            } else if arg == "--help" || arg == "-h" {
                help = true;
            } else if arg == "--version" || arg == "-V" {
                version = true;
            } else if arg.len() > 1 && arg.starts_with('-') {
                return Err(CliError::UnknownOption(arg));
            } else if script.is_some() {
                return Err(CliError::Usage);
            } else {
                script = Some(PathBuf::from(arg));
            }
        }

        let command = if help {
            Command::Help
        } else if version {
            Command::Version
        } else {
            script.map_or(Command::Prompt, Command::Script)
        };
        Ok(CliOptions { command, color })
    }
}
