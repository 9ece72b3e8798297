//! Lox CLI
//!
//! `lox` starts an interactive prompt; `lox <script>` scans a file.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use lox_diagnostic::emitter::TerminalEmitter;
use loxc::{exit_code, init_tracing, CliError, run_file, run_prompt, CliOptions, Command, USAGE};

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            if err.wants_usage() {
                eprintln!("{USAGE}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn run() -> Result<ExitCode, CliError> {
    let options = CliOptions::parse(std::env::args().skip(1))?;
    let mut emitter = TerminalEmitter::stderr(options.color, io::stderr().is_terminal());
    let mut out = io::stdout().lock();

    match options.command {
        Command::Help => {
            print_usage();
            Ok(ExitCode::SUCCESS)
        }
        Command::Version => {
            println!("lox {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        Command::Script(path) => {
            let errors = run_file(&path, &mut out, &mut emitter)?;
            if errors > 0 {
                Ok(ExitCode::from(exit_code::LEX_ERROR))
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        Command::Prompt => {
            run_prompt(io::stdin().lock(), &mut out, &mut emitter)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_usage() {
    println!("Lox scanner");
    println!();
    println!("{USAGE}");
    println!();
    println!("With no script, reads lines from standard input and prints");
    println!("the tokens of each one.");
    println!();
    println!("Options:");
    println!("  --color=<when>  Color diagnostics: auto (default), always, never");
    println!("  -h, --help      Show this help message");
    println!("  -V, --version   Show version information");
    println!();
    println!("Environment:");
    println!("  RUST_LOG        Enable debug logging (e.g. RUST_LOG=lox_lexer=trace)");
    println!("  LOX_LOG_TREE=1  Print log spans as a tree");
    println!();
    println!("Exit status: 0 on success, 1 on usage or I/O errors,");
    println!("2 if the script contains lexical errors.");
}
