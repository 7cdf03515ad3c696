//! Taintinfo CLI entry point.
//!
//! Dispatches the single action argument (`current`, `list`, or
//! `taint=<flags>`) to the decoder and maps failures to exit codes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use tracing::debug;

use taintinfo::logging;
use taintinfo::query::{self, QueryWarning};
use taintinfo::report;
use taintinfo::source::{self, SourceError};
use taintinfo::style::{ColorConfig, ColorMode};

/// Exit status for out-of-memory conditions; everything else fatal is 1.
const EXIT_OUT_OF_MEMORY: u8 = 2;

/// Prefix of the flag-query action argument.
const QUERY_PREFIX: &str = "taint=";

/// Query and decode the Linux kernel taint status.
#[derive(Debug, Parser)]
#[command(name = "taintinfo", version, about)]
struct Cli {
    /// Action to perform: `current`, `list`, or `taint=<flags>`.
    action: Option<String>,

    /// When to emit ANSI color escapes.
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorMode,

    /// Read the taint status from this file instead of the kernel default.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    logging::init_cli();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
            ) =>
        {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            print_syntax();
            return ExitCode::FAILURE;
        }
    };

    let colors = ColorConfig::from_mode(cli.color);

    match cli.action.as_deref() {
        Some("current") => run_current(cli.file, &colors),
        Some("list") => {
            print!("{}", report::render_flag_list());
            ExitCode::SUCCESS
        }
        Some(action) => match action.strip_prefix(QUERY_PREFIX) {
            Some(query_chars) => run_query(query_chars, &colors),
            None => {
                print_syntax();
                ExitCode::FAILURE
            }
        },
        None => {
            print_syntax();
            ExitCode::FAILURE
        }
    }
}

/// Read the current taint status and render the analysis report.
fn run_current(file: Option<PathBuf>, colors: &ColorConfig) -> ExitCode {
    let path = file.unwrap_or_else(|| PathBuf::from(source::TAINT_STATUS_FILE));

    match source::read_taint_status(&path) {
        Ok(status) => {
            print!("{}", report::render_analysis(status, colors));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}{err}{}", colors.alert(), colors.reset());
            match err {
                SourceError::OutOfMemory => ExitCode::from(EXIT_OUT_OF_MEMORY),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

/// Decode a flag-character query and render the analysis report.
fn run_query(query_chars: &str, colors: &ColorConfig) -> ExitCode {
    debug!(query = query_chars, "decoding flag query");

    let (status, warnings) = query::parse_flags(query_chars);
    for warning in &warnings {
        print_warning(warning, colors);
    }
    print!("{}", report::render_analysis(status, colors));
    ExitCode::SUCCESS
}

/// Report a query warning to stderr, Warn-colored.
fn print_warning(warning: &QueryWarning, colors: &ColorConfig) {
    let warn = colors.warn();
    let reset = colors.reset();
    match warning {
        QueryWarning::UnknownFlag(flag_char) => {
            eprintln!("{warn}Warning: Unknown taint flag '{flag_char}' ignored.{reset}");
        }
        QueryWarning::Conflict {
            set_char,
            unset_char,
        } => {
            eprintln!("{warn}Warning: Conflicting taint flags '{set_char}' and '{unset_char}'{reset}");
            eprintln!("{warn}         Using taint-enabling flag '{set_char}'{reset}");
        }
    }
}

/// Print the syntax summary for a missing or unrecognized action.
fn print_syntax() {
    println!("Syntax: taintinfo {{ current | list | taint=<flags> }}");
    println!(
        "        current      Display information about the current taint status of the running kernel"
    );
    println!("        list         List all known taint flags and their descriptions");
    println!("        taint=flags  Display information about the specified taint flags");
    println!();
}
