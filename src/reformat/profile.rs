// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

/// Language profile selecting one fixed set of formatting rules.
///
/// `BraceCodeA` and `BraceCodeB` are policy-identical; the split mirrors
/// the two brace-language entries the upstream selector presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageTag {
    BraceCodeA,
    BraceCodeB,
    Json,
    Markup,
    Stylesheet,
}

impl LanguageTag {
    /// Resolve a user-supplied profile name, case-insensitively.
    ///
    /// Returns `None` for unknown names; callers treat that as the
    /// pass-through default rather than an error.
    pub fn resolve(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "brace-a" | "brace" | "code" => Some(Self::BraceCodeA),
            "brace-b" | "script" => Some(Self::BraceCodeB),
            "json" => Some(Self::Json),
            "markup" | "xml" | "html" => Some(Self::Markup),
            "stylesheet" | "css" => Some(Self::Stylesheet),
            _ => None,
        }
    }

    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::BraceCodeA => "brace-a",
            Self::BraceCodeB => "brace-b",
            Self::Json => "json",
            Self::Markup => "markup",
            Self::Stylesheet => "stylesheet",
        }
    }

    /// Trigger table for the shared brace-family scan.
    ///
    /// `Markup` formats through the tag-depth pass instead and has no
    /// brace profile.
    pub(crate) fn brace_profile(self) -> Option<&'static BraceProfile> {
        match self {
            Self::BraceCodeA | Self::BraceCodeB => Some(&BRACE_CODE),
            Self::Json => Some(&JSON),
            Self::Stylesheet => Some(&STYLESHEET),
            Self::Markup => None,
        }
    }
}

/// Per-profile trigger table consumed by the shared scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BraceProfile {
    pub openers: &'static [char],
    pub closers: &'static [char],
    pub terminators: &'static [char],
    pub indent_unit: &'static str,
    /// Json drops bare spaces outside strings entirely.
    pub drop_bare_spaces: bool,
    /// Render `:` as `: ` outside strings.
    pub spaced_colon: bool,
    /// Force a single space before an opening brace (stylesheet rule heads).
    pub space_before_open: bool,
}

static BRACE_CODE: BraceProfile = BraceProfile {
    openers: &['{'],
    closers: &['}'],
    terminators: &[';'],
    indent_unit: "    ",
    drop_bare_spaces: false,
    spaced_colon: false,
    space_before_open: false,
};

static JSON: BraceProfile = BraceProfile {
    openers: &['{', '['],
    closers: &['}', ']'],
    terminators: &[','],
    indent_unit: "  ",
    drop_bare_spaces: true,
    spaced_colon: true,
    space_before_open: false,
};

static STYLESHEET: BraceProfile = BraceProfile {
    openers: &['{'],
    closers: &['}'],
    terminators: &[';'],
    indent_unit: "  ",
    drop_bare_spaces: false,
    spaced_colon: true,
    space_before_open: true,
};

/// Indent unit for the markup tag-depth pass.
pub(crate) const MARKUP_INDENT_UNIT: &str = "  ";
