//! Rejoining words hyphenated across a line break.

use std::sync::OnceLock;

use regex::Regex;

use super::Transform;

fn split_word_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\w)-\s*\n\s*(\w)").expect("valid hyphenation pattern"))
}

/// Joins `for-\nward` into `forward`.
///
/// The hyphen, the line break and any whitespace around the break are
/// dropped. Both sides must be word characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dehyphenate;

impl Transform for Dehyphenate {
    fn name(&self) -> &'static str {
        "dehyphenate"
    }

    fn transform(&mut self, text: &mut String) {
        let joined = split_word_pattern().replace_all(text, "${1}${2}");
        *text = joined.into_owned();
    }
}
