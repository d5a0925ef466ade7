//! Removal of isolated single-letter lines.
//!
//! The scanner leaves stray characters (`c`, `B`) on their own line, usually
//! just before a paragraph break.

use std::sync::OnceLock;

use regex::Regex;

use super::Transform;

fn letter_line_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*[a-zA-Z]\s*\n\n").expect("valid letter line pattern"))
}

/// Deletes lines holding a single ASCII letter that precede a blank line.
///
/// Runs two passes. The first replaces the letter line and the blank line
/// after it with a paragraph break. The second catches letter lines the
/// first pass could not reach because a previous match consumed their
/// leading line break.
#[derive(Debug, Default, Clone, Copy)]
pub struct StrayLetters;

impl Transform for StrayLetters {
    fn name(&self) -> &'static str {
        "stray-letters"
    }

    fn transform(&mut self, text: &mut String) {
        let first = letter_line_pattern().replace_all(text, "\n\n").into_owned();
        *text = remove_before_paragraph_end(&first);
    }
}

/// Replaces `\n<letter>\n` with `\n` when another `\n` follows.
///
/// The trailing line break is only looked at, never consumed, so it can open
/// the next candidate.
fn remove_before_paragraph_end(text: &str) -> String {
    let re = letter_line_pattern();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut pos = 0;

    while let Some(m) = re.find_at(text, pos) {
        // The final newline stays in the buffer.
        let end = m.end() - 1;
        out.push_str(&text[last..m.start()]);
        out.push('\n');
        last = end;
        pos = end;
    }

    out.push_str(&text[last..]);
    out
}
