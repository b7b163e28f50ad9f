// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Shared single-pass scan for the brace-family profiles.

use super::diagnostics::ReformatDiagnostic;
use super::emit::Emitter;
use super::profile::BraceProfile;

/// Re-indent `source` according to one brace-family trigger table.
///
/// The quote toggle is deliberately naive: a backslash-escaped quote ends
/// the string early. Inside a string every character is copied verbatim.
/// Input newlines outside strings are structural residue and are dropped
/// together with the line-leading whitespace that follows them; that is
/// what keeps the pass idempotent on its own output.
pub(crate) fn scan_braces(
    source: &str,
    profile: &BraceProfile,
    diagnostics: &mut Vec<ReformatDiagnostic>,
) -> String {
    let mut out = Emitter::with_capacity(source.len() + source.len() / 4);
    let mut depth = 0usize;
    let mut in_string = false;
    let mut string_open_line = 0usize;
    let mut line = 1usize;
    let mut at_line_start = true;
    let mut swallow_spaces = false;

    for ch in source.chars() {
        if ch == '\n' {
            line += 1;
        }
        if in_string {
            if ch == '"' {
                in_string = false;
            }
            out.push(ch);
            continue;
        }
        match ch {
            '"' => {
                in_string = true;
                string_open_line = line;
                at_line_start = false;
                swallow_spaces = false;
                out.push(ch);
            }
            '\n' | '\r' => {
                at_line_start = true;
                swallow_spaces = false;
            }
            ' ' | '\t' if at_line_start => {}
            ' ' if profile.drop_bare_spaces || swallow_spaces => {}
            _ => {
                at_line_start = false;
                swallow_spaces = false;
                if profile.openers.contains(&ch) {
                    if profile.space_before_open && !out.at_fresh_line() && !out.ends_with(' ') {
                        out.push(' ');
                    }
                    out.push(ch);
                    out.newline();
                    depth += 1;
                    out.indent(profile.indent_unit, depth);
                } else if profile.closers.contains(&ch) {
                    if !out.at_fresh_line() {
                        out.newline();
                    }
                    if depth == 0 {
                        diagnostics.push(ReformatDiagnostic::new(
                            line,
                            format!("closing '{ch}' has no matching opener; indent clamped at zero"),
                        ));
                    } else {
                        depth -= 1;
                    }
                    out.indent(profile.indent_unit, depth);
                    out.push(ch);
                    out.newline();
                    if depth > 0 {
                        out.indent(profile.indent_unit, depth);
                    }
                } else if profile.terminators.contains(&ch) {
                    out.push(ch);
                    out.newline();
                    out.indent(profile.indent_unit, depth);
                } else if ch == ':' && profile.spaced_colon {
                    out.push_str(": ");
                    swallow_spaces = true;
                } else {
                    out.push(ch);
                }
            }
        }
    }

    if in_string {
        diagnostics.push(ReformatDiagnostic::new(
            string_open_line,
            "string literal is never closed; remainder copied verbatim",
        ));
    }
    out.finish()
}
