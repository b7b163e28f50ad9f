// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Tag-depth pass for the markup profile.

use super::diagnostics::ReformatDiagnostic;
use super::emit::Emitter;
use super::profile::MARKUP_INDENT_UNIT;

/// Re-indent tag markup by nesting depth.
///
/// Depth only ever increases, and only for open tags that are not
/// self-closing (`/` directly before `>`). Closing tags (`</...>`) are
/// printed at the current depth and leave it unchanged. A quote inside a
/// tag suspends tag interpretation until the matching quote.
pub(crate) fn scan_markup(source: &str, diagnostics: &mut Vec<ReformatDiagnostic>) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = Emitter::with_capacity(source.len() + source.len() / 4);
    let mut depth = 0usize;
    let mut in_tag = false;
    let mut in_string = false;
    let mut string_open_line = 0usize;
    let mut closing_tag = false;
    let mut line = 1usize;
    let mut at_line_start = true;

    for (idx, &ch) in chars.iter().enumerate() {
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
            '"' if in_tag => {
                in_string = true;
                string_open_line = line;
                at_line_start = false;
                out.push(ch);
            }
            '\n' | '\r' => {
                at_line_start = true;
            }
            ' ' | '\t' if at_line_start => {}
            '<' if !in_tag => {
                at_line_start = false;
                if !out.at_fresh_line() {
                    out.newline();
                }
                out.indent(MARKUP_INDENT_UNIT, depth);
                in_tag = true;
                closing_tag = chars.get(idx + 1) == Some(&'/');
                out.push(ch);
            }
            '>' if in_tag => {
                at_line_start = false;
                out.push(ch);
                in_tag = false;
                let self_closing = idx > 0 && chars[idx - 1] == '/';
                if !self_closing && !closing_tag {
                    depth += 1;
                }
            }
            _ => {
                at_line_start = false;
                out.push(ch);
            }
        }
    }

    if in_string {
        diagnostics.push(ReformatDiagnostic::new(
            string_open_line,
            "attribute string is never closed; remainder copied verbatim",
        ));
    }
    out.finish()
}

#[cfg(test)]
mod tests {
    use super::scan_markup;
    use crate::reformat::ReformatDiagnostic;

    fn scan(source: &str) -> (String, Vec<ReformatDiagnostic>) {
        let mut diagnostics = Vec::new();
        let rendered = scan_markup(source, &mut diagnostics);
        (rendered, diagnostics)
    }

    #[test]
    fn open_tags_increase_depth_for_following_tags() {
        let (rendered, _) = scan("<a><b></b></a>");
        assert_eq!(rendered, "<a>\n  <b>\n    </b>\n    </a>");
    }

    #[test]
    fn self_closing_tag_does_not_change_depth() {
        let (rendered, _) = scan("<a><b/></a>");
        assert_eq!(rendered, "<a>\n  <b/>\n  </a>");
    }

    #[test]
    fn closing_tag_never_decrements_depth() {
        // Siblings after a closed element keep the drifted depth; this is
        // the preserved shallow behavior, not a stack-based indenter.
        let (rendered, _) = scan("<ul><li>one</li><li>two</li></ul>");
        assert_eq!(
            rendered,
            "<ul>\n  <li>one\n    </li>\n    <li>two\n      </li>\n      </ul>"
        );
    }

    #[test]
    fn text_content_stays_on_the_tag_line() {
        let (rendered, _) = scan("<p>hello world</p>");
        assert_eq!(rendered, "<p>hello world\n  </p>");
    }

    #[test]
    fn quoted_attribute_hides_angle_brackets() {
        let (rendered, _) = scan("<a href=\"x>y\"><b/></a>");
        assert_eq!(rendered, "<a href=\"x>y\">\n  <b/>\n  </a>");
    }

    #[test]
    fn unclosed_attribute_string_reports_and_copies_remainder() {
        let (rendered, diagnostics) = scan("<a href=\"broken><b>");
        assert_eq!(rendered, "<a href=\"broken><b>");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line_number, 1);
    }

    #[test]
    fn first_tag_gets_no_leading_blank_line() {
        let (rendered, _) = scan("<a/>");
        assert_eq!(rendered, "<a/>");
    }

    #[test]
    fn input_newlines_between_tags_are_rebuilt_not_copied() {
        let (rendered, _) = scan("<a>\n\n\n  <b/>\n</a>");
        assert_eq!(rendered, "<a>\n  <b/>\n  </a>");
    }

    #[test]
    fn stray_closing_angle_outside_tag_is_copied() {
        let (rendered, _) = scan("a > b");
        assert_eq!(rendered, "a > b");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let (rendered, diagnostics) = scan("");
        assert_eq!(rendered, "");
        assert!(diagnostics.is_empty());
    }
}
