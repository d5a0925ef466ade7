//! Line-ending, whitespace and per-line normalization.
//!
//! Line endings are unified before any other step. The collapse and trim
//! steps run last because every earlier step can leave blank lines or
//! doubled spaces behind.

use super::Transform;

/// Converts `\r\n` and lone `\r` line breaks to `\n`.
///
/// Every pattern after this step matches on `\n` only.
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizeLineEndings;

impl Transform for NormalizeLineEndings {
    fn name(&self) -> &'static str {
        "line-endings"
    }

    fn transform(&mut self, text: &mut String) {
        if text.contains('\r') {
            *text = text.replace("\r\n", "\n").replace('\r', "\n");
        }
    }
}

/// Most consecutive line breaks kept (two blank lines).
pub const DEFAULT_MAX_NEWLINES: usize = 3;

/// Collapses excessive whitespace.
///
/// - Limits runs of consecutive `\n` to a configurable maximum
/// - Collapses runs of space characters to a single space
///
/// Only U+0020 is collapsed; tabs and other blanks are left for
/// [`TrimLines`] or kept as they are.
pub struct CollapseWhitespace {
    max_consecutive_newlines: usize,
}

impl CollapseWhitespace {
    /// Create a new whitespace normalizer.
    pub fn new(max_consecutive_newlines: usize) -> Self {
        Self {
            max_consecutive_newlines,
        }
    }
}

impl Default for CollapseWhitespace {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NEWLINES)
    }
}

impl Transform for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse-whitespace"
    }

    fn transform(&mut self, text: &mut String) {
        let mut result = String::with_capacity(text.len());
        let mut prev_space = false;
        let mut newline_count = 0;

        for c in text.chars() {
            if c == '\n' {
                newline_count += 1;
                if newline_count <= self.max_consecutive_newlines {
                    result.push(c);
                }
                prev_space = false;
            } else if c == ' ' {
                newline_count = 0;
                if !prev_space {
                    result.push(' ');
                    prev_space = true;
                }
            } else {
                newline_count = 0;
                prev_space = false;
                result.push(c);
            }
        }

        *text = result;
    }
}

/// Strips leading and trailing whitespace from every line.
///
/// Lines are split on `\n` and rejoined with `\n`, so blank lines survive as
/// empty lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrimLines;

impl Transform for TrimLines {
    fn name(&self) -> &'static str {
        "trim-lines"
    }

    fn transform(&mut self, text: &mut String) {
        *text = text.split('\n').map(str::trim).collect::<Vec<_>>().join("\n");
    }
}
