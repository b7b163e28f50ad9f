// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

/// Append-only output buffer for one scan pass.
///
/// Owned exclusively by the invocation that created it; `finish` applies
/// the single final right-trim the scan contract requires.
#[derive(Debug, Default)]
pub(crate) struct Emitter {
    out: String,
}

impl Emitter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, ch: char) {
        self.out.push(ch);
    }

    pub fn push_str(&mut self, text: &str) {
        self.out.push_str(text);
    }

    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    pub fn indent(&mut self, unit: &str, depth: usize) {
        for _ in 0..depth {
            self.out.push_str(unit);
        }
    }

    /// True at the very start of output and directly after a newline.
    pub fn at_fresh_line(&self) -> bool {
        self.out.is_empty() || self.out.ends_with('\n')
    }

    pub fn ends_with(&self, ch: char) -> bool {
        self.out.ends_with(ch)
    }

    /// Right-trim once and hand the buffer out.
    pub fn finish(mut self) -> String {
        let trimmed_len = self.out.trim_end().len();
        self.out.truncate(trimmed_len);
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::Emitter;

    #[test]
    fn empty_buffer_counts_as_fresh_line() {
        let out = Emitter::with_capacity(0);
        assert!(out.at_fresh_line());
    }

    #[test]
    fn fresh_line_tracks_trailing_newline() {
        let mut out = Emitter::with_capacity(8);
        out.push('a');
        assert!(!out.at_fresh_line());
        out.newline();
        assert!(out.at_fresh_line());
    }

    #[test]
    fn indent_repeats_unit_depth_times() {
        let mut out = Emitter::with_capacity(8);
        out.indent("  ", 3);
        out.push('x');
        assert_eq!(out.finish(), "      x");
    }

    #[test]
    fn finish_right_trims_dangling_indent_and_newlines() {
        let mut out = Emitter::with_capacity(16);
        out.push_str("a;");
        out.newline();
        out.indent("    ", 1);
        assert_eq!(out.finish(), "a;");
    }
}
