// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

// CLI entrypoint for retab.

use std::io::{self, Read};
use std::path::Path;
use std::process;

use clap::Parser;
use serde_json::json;

use retab::cli::{validate_cli, Cli, OutputFormat, RunOptions};
use retab::reformat::{
    FormatMode, ReformatConfig, ReformatDiagnostic, Reformatter, RunReport,
};

const DEFAULT_CONFIG_FILE: &str = ".retab.toml";

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();
    let options = match validate_cli(&cli) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            return 2;
        }
    };
    let mut config = match load_config(&options) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            return 2;
        }
    };
    config.language_override = options.language;
    let engine = Reformatter::new(config);

    if options.use_stdin {
        return run_stdin(&engine, &options);
    }
    match options.mode {
        FormatMode::Stdout => run_stdout(&engine, &options),
        FormatMode::Check | FormatMode::Write => run_batch(&engine, &options),
    }
}

fn load_config(options: &RunOptions) -> Result<ReformatConfig, String> {
    if let Some(path) = &options.config_path {
        return ReformatConfig::load_from_path(path).map_err(|err| err.to_string());
    }
    let default = Path::new(DEFAULT_CONFIG_FILE);
    if default.exists() {
        return ReformatConfig::load_from_path(default).map_err(|err| err.to_string());
    }
    Ok(ReformatConfig::default())
}

fn run_stdin(engine: &Reformatter, options: &RunOptions) -> i32 {
    let mut source = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut source) {
        eprintln!("error: failed to read stdin: {err}");
        return 2;
    }
    let output = engine.format_stream(&source);
    print!("{}", output.rendered);
    emit_diagnostics("(stdin)", &output.diagnostics, options);
    0
}

fn run_stdout(engine: &Reformatter, options: &RunOptions) -> i32 {
    for path in &options.inputs {
        match engine.format_path(path) {
            Ok(output) => {
                print!("{}", output.rendered);
                emit_diagnostics(&path.display().to_string(), &output.diagnostics, options);
            }
            Err(err) => {
                eprintln!("error: {}: {err}", path.display());
                return 2;
            }
        }
    }
    0
}

fn run_batch(engine: &Reformatter, options: &RunOptions) -> i32 {
    let report = match engine.run_paths_with_report(&options.inputs, options.mode) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            return 2;
        }
    };
    for file in &report.files {
        emit_diagnostics(&file.path.display().to_string(), &file.diagnostics, options);
    }
    emit_report(&report, options);
    if options.mode == FormatMode::Check && report.summary.files_changed > 0 {
        1
    } else {
        0
    }
}

fn emit_report(report: &RunReport, options: &RunOptions) {
    if options.output_format == OutputFormat::Json {
        let files: Vec<serde_json::Value> = report
            .files
            .iter()
            .map(|file| {
                json!({
                    "path": file.path.display().to_string(),
                    "language": file.language.map(|tag| tag.canonical_name()),
                    "changed": file.changed,
                    "warnings": file.diagnostics.len(),
                })
            })
            .collect();
        println!(
            "{}",
            json!({
                "files_seen": report.summary.files_seen,
                "files_changed": report.summary.files_changed,
                "warnings": report.summary.warnings,
                "files": files,
            })
        );
        return;
    }
    for file in &report.files {
        if !file.changed {
            continue;
        }
        match options.mode {
            FormatMode::Check => println!("would reformat {}", file.path.display()),
            FormatMode::Write => println!("reformatted {}", file.path.display()),
            FormatMode::Stdout => {}
        }
    }
    if !options.quiet {
        println!(
            "{} file(s) seen, {} changed",
            report.summary.files_seen, report.summary.files_changed
        );
    }
}

fn emit_diagnostics(origin: &str, diagnostics: &[ReformatDiagnostic], options: &RunOptions) {
    if options.quiet {
        return;
    }
    for diag in diagnostics {
        if options.output_format == OutputFormat::Json {
            eprintln!(
                "{}",
                json!({
                    "file": origin,
                    "line": diag.line_number,
                    "severity": "warning",
                    "message": diag.message,
                })
            );
        } else {
            eprintln!("{origin}:{}: warning: {}", diag.line_number, diag.message);
        }
    }
}
