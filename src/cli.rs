// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Command-line interface parsing and argument validation.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::reformat::{FormatMode, LanguageTag};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const LONG_ABOUT: &str =
    "Lexical re-indenter for brace code, JSON, tag markup and stylesheets.

Reads files (or stdin when no inputs or '-' are given) and re-indents
them using only lexical cues: braces, brackets, statement terminators
and tags. Profiles are resolved from file extensions, the configuration
file, or forced with -l/--language. The default mode prints formatted
text to stdout; --check reports files that would change; --write
rewrites them in place.";

#[derive(Parser, Debug)]
#[command(
    name = "retab",
    version = VERSION,
    about = "Lexical re-indenter for brace code, JSON, markup and stylesheets",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    #[arg(
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Text,
        long_help = "Select CLI output format for reports and diagnostics. text is default; json enables machine-readable output."
    )]
    pub format: OutputFormat,
    #[arg(
        short = 'l',
        long = "language",
        value_name = "NAME",
        long_help = "Force one profile for all inputs: brace-a, brace-b, json, markup or stylesheet."
    )]
    pub language: Option<String>,
    #[arg(
        long = "check",
        action = ArgAction::SetTrue,
        conflicts_with = "write",
        long_help = "Report files whose formatting would change without touching them. Exits 1 when differences are found."
    )]
    pub check: bool,
    #[arg(
        long = "write",
        action = ArgAction::SetTrue,
        long_help = "Rewrite input files in place with their formatted contents."
    )]
    pub write: bool,
    #[arg(
        long = "config",
        value_name = "FILE",
        long_help = "Read configuration from FILE instead of ./.retab.toml."
    )]
    pub config: Option<PathBuf>,
    #[arg(
        short = 'q',
        long = "quiet",
        action = ArgAction::SetTrue,
        long_help = "Suppress warnings and the run summary. Errors are still reported."
    )]
    pub quiet: bool,
    #[arg(
        value_name = "FILE",
        long_help = "Input files. With no files, or a single '-', source text is read from stdin."
    )]
    pub inputs: Vec<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Validated run configuration derived from raw CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: FormatMode,
    pub output_format: OutputFormat,
    pub quiet: bool,
    pub config_path: Option<PathBuf>,
    pub language: Option<LanguageTag>,
    pub inputs: Vec<PathBuf>,
    pub use_stdin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    message: String,
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

fn cli_error(message: impl Into<String>) -> CliError {
    CliError {
        message: message.into(),
    }
}

pub fn validate_cli(cli: &Cli) -> Result<RunOptions, CliError> {
    let language = match &cli.language {
        Some(name) => Some(LanguageTag::resolve(name).ok_or_else(|| {
            cli_error(format!(
                "unknown language '{name}' (expected brace-a, brace-b, json, markup or stylesheet)"
            ))
        })?),
        None => None,
    };

    let stdin_markers = cli
        .inputs
        .iter()
        .filter(|path| path.as_os_str() == "-")
        .count();
    let use_stdin = cli.inputs.is_empty() || (cli.inputs.len() == 1 && stdin_markers == 1);
    if stdin_markers > 0 && !use_stdin {
        return Err(cli_error("'-' cannot be combined with file inputs"));
    }

    let mode = if cli.write {
        FormatMode::Write
    } else if cli.check {
        FormatMode::Check
    } else {
        FormatMode::Stdout
    };
    if use_stdin && mode != FormatMode::Stdout {
        return Err(cli_error("--check and --write require file inputs"));
    }

    Ok(RunOptions {
        mode,
        output_format: cli.format,
        quiet: cli.quiet,
        config_path: cli.config.clone(),
        language,
        inputs: if use_stdin {
            Vec::new()
        } else {
            cli.inputs.clone()
        },
        use_stdin,
    })
}

#[cfg(test)]
mod tests {
    use super::{validate_cli, Cli, OutputFormat};
    use crate::reformat::{FormatMode, LanguageTag};
    use clap::Parser;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).expect("parse cli")
    }

    #[test]
    fn no_inputs_selects_stdin_stdout_mode() {
        let options = validate_cli(&parse(&["retab"])).expect("validate");
        assert!(options.use_stdin);
        assert_eq!(options.mode, FormatMode::Stdout);
        assert!(options.inputs.is_empty());
    }

    #[test]
    fn single_dash_selects_stdin() {
        let options = validate_cli(&parse(&["retab", "-"])).expect("validate");
        assert!(options.use_stdin);
    }

    #[test]
    fn dash_mixed_with_files_is_rejected() {
        let err = validate_cli(&parse(&["retab", "-", "a.json"])).expect_err("must fail");
        assert!(err.to_string().contains("cannot be combined"));
    }

    #[test]
    fn check_mode_with_stdin_is_rejected() {
        let err = validate_cli(&parse(&["retab", "--check"])).expect_err("must fail");
        assert!(err.to_string().contains("require file inputs"));
    }

    #[test]
    fn check_and_write_conflict_at_parse_time() {
        assert!(Cli::try_parse_from(["retab", "--check", "--write", "a.json"]).is_err());
    }

    #[test]
    fn language_flag_resolves_known_names() {
        let options =
            validate_cli(&parse(&["retab", "-l", "JSON", "data.txt"])).expect("validate");
        assert_eq!(options.language, Some(LanguageTag::Json));
        assert_eq!(options.inputs, vec![PathBuf::from("data.txt")]);
        assert!(!options.use_stdin);
    }

    #[test]
    fn unknown_language_name_is_rejected_with_choices() {
        let err =
            validate_cli(&parse(&["retab", "-l", "cobol", "a.json"])).expect_err("must fail");
        assert!(err.to_string().contains("unknown language 'cobol'"));
        assert!(err.to_string().contains("stylesheet"));
    }

    #[test]
    fn write_mode_and_json_format_are_parsed() {
        let options = validate_cli(&parse(&[
            "retab", "--write", "--format", "json", "-q", "a.css", "b.css",
        ]))
        .expect("validate");
        assert_eq!(options.mode, FormatMode::Write);
        assert_eq!(options.output_format, OutputFormat::Json);
        assert!(options.quiet);
        assert_eq!(options.inputs.len(), 2);
    }

    #[test]
    fn explicit_config_path_is_carried_through() {
        let options =
            validate_cli(&parse(&["retab", "--config", "fmt.toml", "a.json"])).expect("validate");
        assert_eq!(options.config_path, Some(PathBuf::from("fmt.toml")));
    }
}
