//! OCR cleanup pipeline.
//!
//! [`clean`] runs the standard chain of transforms over a document buffer.
//! Line endings are first normalized to `\n` ([`NormalizeLineEndings`]), then:
//!
//! 1. [`PageNumbers`] - Page-number lines and inline page tokens
//! 2. [`StrayLetters`] - Single-letter noise lines before paragraph breaks
//! 3. [`HeaderCase`] - Capitalized headings to title case
//! 4. [`OcrCorrections`] - Ordered literal word fixes
//! 5. [`Dehyphenate`] - Words split across line breaks
//! 6. [`CollapseWhitespace`] - Blank-line and space runs
//! 7. [`TrimLines`] - Leading/trailing whitespace per line
//!
//! Order matters. Page numbers and stray letters go before header detection
//! so leftovers next to a heading do not break its match. The word fixes
//! expect apostrophes already normalized. Whitespace cleanup runs last.

mod corrections;
mod headers;
mod hyphenation;
mod page_numbers;
mod stray_letters;
mod transform;
mod whitespace;

pub use corrections::{OcrCorrections, BUILTIN_CORRECTIONS};
pub use headers::{title_case, HeaderCase, STOP_WORDS};
pub use hyphenation::Dehyphenate;
pub use page_numbers::PageNumbers;
pub use stray_letters::StrayLetters;
pub use transform::{Transform, TransformChain};
pub use whitespace::{
    CollapseWhitespace, NormalizeLineEndings, TrimLines, DEFAULT_MAX_NEWLINES,
};

use crate::config::Config;

/// Clean a document with the standard pipeline.
///
/// ```
/// let cleaned = ocrscrub::clean("THE VALLEY OF LOVE\n(3)\nHe told tilings.");
/// assert_eq!(cleaned, "The Valley of Love\n\nHe told things.");
/// ```
pub fn clean(raw: &str) -> String {
    Cleaner::standard().clean(raw)
}

/// The ordered cleanup chain.
pub struct Cleaner {
    chain: TransformChain,
}

impl Cleaner {
    /// The standard pipeline with the built-in corrections.
    pub fn standard() -> Self {
        Self::with_corrections(OcrCorrections::builtin())
    }

    /// The standard pipeline with extra corrections appended to the
    /// built-in table.
    pub fn with_extra_corrections<I>(extra: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self::with_corrections(OcrCorrections::builtin().with_extra(extra))
    }

    /// Build the pipeline described by a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_extra_corrections(config.corrections.pairs())
    }

    fn with_corrections(corrections: OcrCorrections) -> Self {
        let chain = TransformChain::new()
            .with(NormalizeLineEndings)
            .with(PageNumbers)
            .with(StrayLetters)
            .with(HeaderCase)
            .with(corrections)
            .with(Dehyphenate)
            .with(CollapseWhitespace::default())
            .with(TrimLines);
        Self { chain }
    }

    /// Run the pipeline over `raw` and return the cleaned text.
    pub fn clean(&mut self, raw: &str) -> String {
        let mut text = raw.to_string();
        self.chain.transform(&mut text);
        text
    }

    /// Step names in application order.
    pub fn steps(&self) -> Vec<&'static str> {
        self.chain.names()
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::standard()
    }
}
