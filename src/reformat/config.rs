// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

use super::profile::LanguageTag;

const BUILTIN_EXTENSIONS: &[(&str, LanguageTag)] = &[
    ("java", LanguageTag::BraceCodeA),
    ("c", LanguageTag::BraceCodeA),
    ("h", LanguageTag::BraceCodeA),
    ("cpp", LanguageTag::BraceCodeA),
    ("hpp", LanguageTag::BraceCodeA),
    ("cs", LanguageTag::BraceCodeA),
    ("js", LanguageTag::BraceCodeB),
    ("ts", LanguageTag::BraceCodeB),
    ("json", LanguageTag::Json),
    ("xml", LanguageTag::Markup),
    ("html", LanguageTag::Markup),
    ("htm", LanguageTag::Markup),
    ("svg", LanguageTag::Markup),
    ("css", LanguageTag::Stylesheet),
];

/// Engine-shell settings. The per-profile trigger tables and indent
/// widths are fixed; configuration only covers how inputs map to
/// profiles and how rendered text leaves the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReformatConfig {
    /// Append one newline to non-empty rendered output.
    pub final_newline: bool,
    /// Profile for paths whose extension resolves nothing. `None` means
    /// pass the input through unchanged with a diagnostic.
    pub default_language: Option<LanguageTag>,
    /// CLI-forced profile; wins over every per-path resolution.
    pub language_override: Option<LanguageTag>,
    /// Lowercased extension to profile map, seeded with the builtins.
    pub extension_map: HashMap<String, LanguageTag>,
}

impl Default for ReformatConfig {
    fn default() -> Self {
        Self {
            final_newline: true,
            default_language: None,
            language_override: None,
            extension_map: builtin_extension_map(),
        }
    }
}

pub fn builtin_extension_map() -> HashMap<String, LanguageTag> {
    BUILTIN_EXTENSIONS
        .iter()
        .map(|(ext, tag)| (ext.to_string(), *tag))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReformatConfigError {
    message: String,
}

impl ReformatConfigError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for ReformatConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ReformatConfigError {}

impl ReformatConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, ReformatConfigError> {
        let text = fs::read_to_string(path).map_err(|err| {
            ReformatConfigError::new(format!("failed to read '{}': {err}", path.display()))
        })?;
        Self::parse_toml(path, &text)
    }

    fn parse_toml(path: &Path, source: &str) -> Result<Self, ReformatConfigError> {
        let mut config = Self::default();
        let mut section = ConfigSection::Root;
        let mut seen_keys = HashSet::new();
        let mut seen_extensions = HashSet::new();

        for (index, raw_line) in source.lines().enumerate() {
            let line_no = index + 1;
            let line = strip_toml_comment(raw_line).trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with('[') {
                if !line.ends_with(']') {
                    return Err(config_error(path, line_no, "invalid section header"));
                }
                let name = line[1..line.len() - 1].trim();
                section = if name.eq_ignore_ascii_case("output") {
                    ConfigSection::Output
                } else if name.eq_ignore_ascii_case("languages") {
                    ConfigSection::Languages
                } else {
                    ConfigSection::Other
                };
                continue;
            }

            if section == ConfigSection::Other {
                continue;
            }

            let Some((raw_key, raw_value)) = line.split_once('=') else {
                return Err(config_error(path, line_no, "expected key = value"));
            };
            let key = raw_key.trim();
            let value = raw_value.trim();
            if key.is_empty() || value.is_empty() {
                return Err(config_error(path, line_no, "expected key = value"));
            }

            if section == ConfigSection::Languages {
                let extension = normalize_extension(key);
                if extension.is_empty() {
                    return Err(config_error(
                        path,
                        line_no,
                        format!("invalid extension '{}'", key),
                    ));
                }
                if !seen_extensions.insert(extension.clone()) {
                    return Err(config_error(
                        path,
                        line_no,
                        format!("duplicate extension '{}'", key),
                    ));
                }
                let tag = parse_language(path, line_no, key, value)?;
                config.extension_map.insert(extension, tag);
                continue;
            }

            let canonical_key = key.trim().to_ascii_lowercase().replace('-', "_");
            if !seen_keys.insert(canonical_key.clone()) {
                return Err(config_error(
                    path,
                    line_no,
                    format!("duplicate key '{}'", key),
                ));
            }

            match canonical_key.as_str() {
                "final_newline" => config.final_newline = parse_bool(path, line_no, key, value)?,
                "default_language" => {
                    config.default_language = Some(parse_language(path, line_no, key, value)?)
                }
                _ => {
                    return Err(config_error(
                        path,
                        line_no,
                        format!("unknown key '{}'", key),
                    ));
                }
            }
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSection {
    Root,
    Output,
    Languages,
    Other,
}

fn config_error(path: &Path, line_no: usize, message: impl Into<String>) -> ReformatConfigError {
    ReformatConfigError::new(format!(
        "{}:{}: {}",
        path.display(),
        line_no,
        message.into()
    ))
}

fn normalize_extension(key: &str) -> String {
    key.trim()
        .trim_start_matches('.')
        .to_ascii_lowercase()
}

fn parse_bool(
    path: &Path,
    line_no: usize,
    key: &str,
    value: &str,
) -> Result<bool, ReformatConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(config_error(
            path,
            line_no,
            format!("invalid boolean for '{}': {}", key, value),
        )),
    }
}

fn parse_string(
    path: &Path,
    line_no: usize,
    key: &str,
    value: &str,
) -> Result<String, ReformatConfigError> {
    let value = value.trim();
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        return Ok(value[1..value.len() - 1].to_string());
    }
    if value.contains(' ') || value.contains('\t') {
        return Err(config_error(
            path,
            line_no,
            format!("invalid string for '{}': {}", key, value),
        ));
    }
    Ok(value.to_string())
}

fn parse_language(
    path: &Path,
    line_no: usize,
    key: &str,
    value: &str,
) -> Result<LanguageTag, ReformatConfigError> {
    let name = parse_string(path, line_no, key, value)?;
    LanguageTag::resolve(&name).ok_or_else(|| {
        config_error(
            path,
            line_no,
            format!("unknown language '{}' for '{}'", name, key),
        )
    })
}

fn strip_toml_comment(line: &str) -> &str {
    let mut in_single = false;
    let mut in_double = false;
    let mut escaped = false;

    for (idx, ch) in line.char_indices() {
        match ch {
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single && !escaped => in_double = !in_double,
            '#' if !in_single && !in_double => return &line[..idx],
            _ => {}
        }

        escaped = in_double && ch == '\\' && !escaped;
        if ch != '\\' {
            escaped = false;
        }
    }
    line
}
