// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

use std::fmt::{Display, Formatter};

/// Non-fatal scan observation tied to a 1-based input line.
///
/// Diagnostics never change the rendered output and never fail a call;
/// they exist so callers can surface degraded-input situations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReformatDiagnostic {
    pub line_number: usize,
    pub message: String,
}

impl ReformatDiagnostic {
    pub fn new(line_number: usize, message: impl Into<String>) -> Self {
        Self {
            line_number,
            message: message.into(),
        }
    }
}

impl Display for ReformatDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::ReformatDiagnostic;

    #[test]
    fn display_includes_line_number_and_message() {
        let diag = ReformatDiagnostic::new(3, "unmatched closer");
        assert_eq!(diag.to_string(), "line 3: unmatched closer");
    }
}
