// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::config::ReformatConfig;
use super::diagnostics::ReformatDiagnostic;
use super::markup::scan_markup;
use super::profile::LanguageTag;
use super::scanner::scan_braces;

/// Engine execution mode for path runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    Check,
    Write,
    Stdout,
}

/// Aggregate run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub files_seen: usize,
    pub files_changed: usize,
    pub warnings: usize,
    pub files_with_warnings: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReformatOutput {
    pub rendered: String,
    pub diagnostics: Vec<ReformatDiagnostic>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub language: Option<LanguageTag>,
    pub changed: bool,
    pub diagnostics: Vec<ReformatDiagnostic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunReport {
    pub summary: RunSummary,
    pub files: Vec<FileReport>,
}

/// Multi-profile re-indentation engine.
#[derive(Debug, Clone)]
pub struct Reformatter {
    config: ReformatConfig,
}

impl Reformatter {
    pub fn new(config: ReformatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReformatConfig {
        &self.config
    }

    /// Core contract: pure, never fails, right-trimmed output.
    pub fn format_source(&self, source: &str, tag: LanguageTag) -> String {
        self.format_source_with_diagnostics(source, tag).rendered
    }

    pub fn format_source_with_diagnostics(
        &self,
        source: &str,
        tag: LanguageTag,
    ) -> ReformatOutput {
        let mut diagnostics = Vec::new();
        let rendered = match tag.brace_profile() {
            Some(profile) => scan_braces(source, profile, &mut diagnostics),
            None => scan_markup(source, &mut diagnostics),
        };
        ReformatOutput {
            rendered,
            diagnostics,
        }
    }

    /// Profile for one path: CLI override, then extension map, then the
    /// configured default. `None` selects pass-through.
    pub fn resolve_tag(&self, path: &Path) -> Option<LanguageTag> {
        if let Some(tag) = self.config.language_override {
            return Some(tag);
        }
        let by_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.config.extension_map.get(&ext.to_ascii_lowercase()))
            .copied();
        by_extension.or(self.config.default_language)
    }

    /// Format stream input (stdin); resolution uses only the override and
    /// the configured default language.
    pub fn format_stream(&self, source: &str) -> ReformatOutput {
        let tag = self.config.language_override.or(self.config.default_language);
        self.shell_output(source, tag, "(stdin)")
    }

    pub fn format_path(&self, path: &Path) -> io::Result<ReformatOutput> {
        let input = fs::read_to_string(path)?;
        let tag = self.resolve_tag(path);
        Ok(self.shell_output(&input, tag, &path.display().to_string()))
    }

    pub fn format_path_to_string(&self, path: &Path) -> io::Result<String> {
        Ok(self.format_path(path)?.rendered)
    }

    pub fn run_paths(&self, paths: &[PathBuf], mode: FormatMode) -> io::Result<RunSummary> {
        let report = self.run_paths_with_report(paths, mode)?;
        Ok(report.summary)
    }

    pub fn run_paths_with_report(
        &self,
        paths: &[PathBuf],
        mode: FormatMode,
    ) -> io::Result<RunReport> {
        let mut report = RunReport {
            summary: RunSummary::default(),
            files: Vec::with_capacity(paths.len()),
        };
        for path in paths {
            report.summary.files_seen += 1;
            let input = fs::read_to_string(path)?;
            let language = self.resolve_tag(path);
            let output = self.shell_output(&input, language, &path.display().to_string());
            let changed = output.rendered != input;
            if changed {
                report.summary.files_changed += 1;
                if mode == FormatMode::Write {
                    fs::write(path, &output.rendered)?;
                }
            }
            if !output.diagnostics.is_empty() {
                report.summary.warnings += output.diagnostics.len();
                report.summary.files_with_warnings += 1;
            }
            report.files.push(FileReport {
                path: path.clone(),
                language,
                changed,
                diagnostics: output.diagnostics,
            });
        }
        Ok(report)
    }

    /// Outer shell around the pure core: pass-through for unresolved
    /// profiles and the final-newline policy for everything else.
    fn shell_output(
        &self,
        source: &str,
        tag: Option<LanguageTag>,
        origin: &str,
    ) -> ReformatOutput {
        let Some(tag) = tag else {
            return ReformatOutput {
                rendered: source.to_string(),
                diagnostics: vec![ReformatDiagnostic::new(
                    1,
                    format!("no language profile for {origin}; input left unchanged"),
                )],
            };
        };
        let mut output = self.format_source_with_diagnostics(source, tag);
        if self.config.final_newline && !output.rendered.is_empty() {
            output.rendered.push('\n');
        }
        output
    }
}
