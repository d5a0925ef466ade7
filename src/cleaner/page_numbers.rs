//! Page-number stripping.
//!
//! Scanned pages carry their number in parentheses, and the scanner often
//! misreads the digits: `(10)`, `( 14 )`, `(i6)`, `(^ 7 )`, `(lO`.

use std::sync::OnceLock;

use regex::Regex;

use super::Transform;

/// Characters a page-number run may contain: digits, the letters and caret
/// commonly confused with digits, and whitespace.
const RUN: &str = r"[0-9iIlOo\^\s]+";

fn full_line_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // The closing paren is optional here; scans often lose it.
        Regex::new(&format!(r"\n\s*\(\s*{RUN}\s*\)?\s*\n")).expect("valid page line pattern")
    })
}

fn inline_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"\(\s*{RUN}\s*\)")).expect("valid inline page pattern"))
}

/// Removes page-number lines, then any page-number token left inline.
#[derive(Debug, Default, Clone, Copy)]
pub struct PageNumbers;

impl Transform for PageNumbers {
    fn name(&self) -> &'static str {
        "page-numbers"
    }

    fn transform(&mut self, text: &mut String) {
        let without_lines = full_line_pattern().replace_all(text, "\n");
        let without_inline = inline_pattern().replace_all(&without_lines, "");
        *text = without_inline.into_owned();
    }
}
