//! Literal OCR-error corrections.
//!
//! Each entry is an exact, case-sensitive substring replacement. Entries run
//! in table order and later ones may rely on earlier ones: the caret rule
//! must come first because several words below are spelled with the
//! apostrophe it produces.

use super::Transform;

/// Built-in corrections, in application order.
pub const BUILTIN_CORRECTIONS: &[(&str, &str)] = &[
    ("^", "'"),
    ("''", "'"),
    ("Ever^^one", "Everyone"),
    ("Everyone", "Everyone"),
    ("w'orld", "world"),
    ("ever}^one", "everyone"),
    ("tilings", "things"),
    ("forv'ard", "forward"),
    ("ferv'ent", "fervent"),
    ("dervdsh", "dervish"),
    ("der\\ush", "dervish"),
    ("rela>", "rela-"),
    (" Mv ", " My "),
    ("resdess", "restless"),
    ("everlasdng", "everlasting"),
    ("per'erse", "perverse"),
    ("ligh'-", "light"),
    // "1" read in place of "!"
    (" 1 \"", "!\""),
];

/// Applies an ordered table of literal replacements.
#[derive(Debug, Clone)]
pub struct OcrCorrections {
    table: Vec<(String, String)>,
}

impl OcrCorrections {
    /// The built-in table only.
    pub fn builtin() -> Self {
        Self {
            table: BUILTIN_CORRECTIONS
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }

    /// Append corrections after the existing ones.
    ///
    /// Entries with an empty pattern are skipped; replacing the empty string
    /// would interleave the replacement between every character.
    pub fn with_extra<I>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.table
            .extend(extra.into_iter().filter(|(from, _)| !from.is_empty()));
        self
    }

    /// The replacement table, in application order.
    pub fn table(&self) -> &[(String, String)] {
        &self.table
    }
}

impl Default for OcrCorrections {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Transform for OcrCorrections {
    fn name(&self) -> &'static str {
        "ocr-corrections"
    }

    fn transform(&mut self, text: &mut String) {
        for (from, to) in &self.table {
            if text.contains(from.as_str()) {
                *text = text.replace(from.as_str(), to);
            }
        }
    }
}
