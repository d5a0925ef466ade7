//! Section header normalization.
//!
//! Headings in the scans are set in capitals (`THE VALLEY OF LOVE`). They
//! are rewritten to title case and given one blank line on each side.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::Transform;

/// Words kept lowercase in a title unless they open it.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "of", "to", "in", "for", "on", "with", "at", "by",
    "from",
];

fn header_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // `\s` spans line breaks, so stacked capital lines form one header.
        Regex::new(
            r"(?:(?P<lead>\n)|\A)\s*(?P<header>[A-Z][A-Z\s,'\-]+[A-Z])(?:\s*(?P<trail>\n)|\s*\z)",
        )
        .expect("valid header pattern")
    })
}

/// Rewrites all-capitals header lines to title case.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderCase;

impl Transform for HeaderCase {
    fn name(&self) -> &'static str {
        "header-case"
    }

    fn transform(&mut self, text: &mut String) {
        let rewritten = header_pattern().replace_all(text, |caps: &Captures| {
            // No blank lines are added at the edges of the buffer.
            let lead = if caps.name("lead").is_some() { "\n\n" } else { "" };
            let trail = if caps.name("trail").is_some() { "\n\n" } else { "" };
            format!("{}{}{}", lead, title_case(&caps["header"]), trail)
        });
        *text = rewritten.into_owned();
    }
}

/// Convert a header to title case.
///
/// Lowercases the text, splits it on whitespace and capitalizes every word
/// except [`STOP_WORDS`]. The first word is always capitalized. Words are
/// rejoined with single spaces.
pub fn title_case(header: &str) -> String {
    header
        .to_lowercase()
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 || !STOP_WORDS.contains(&word) {
                capitalize(word)
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
