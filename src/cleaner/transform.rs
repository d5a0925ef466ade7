//! Text transformation pipeline for OCR cleanup.
//!
//! This module provides the [`Transform`] trait and [`TransformChain`] for
//! applying in-place rewrites to a document buffer. Every cleanup step is a
//! `Transform`, and the cleaner is nothing more than a chain of them.
//!
//! # Example
//!
//! ```
//! use ocrscrub::cleaner::{Transform, TransformChain};
//!
//! /// Replaces tabs with single spaces.
//! struct Detab;
//!
//! impl Transform for Detab {
//!     fn name(&self) -> &'static str {
//!         "detab"
//!     }
//!
//!     fn transform(&mut self, text: &mut String) {
//!         *text = text.replace('\t', " ");
//!     }
//! }
//!
//! /// Upper-cases the whole buffer.
//! struct Shout;
//!
//! impl Transform for Shout {
//!     fn name(&self) -> &'static str {
//!         "shout"
//!     }
//!
//!     fn transform(&mut self, text: &mut String) {
//!         *text = text.to_uppercase();
//!     }
//! }
//!
//! let mut chain = TransformChain::new().with(Detab).with(Shout);
//! let mut text = String::from("hello\tworld");
//!
//! chain.transform(&mut text);
//!
//! assert_eq!(text, "HELLO WORLD");
//! ```

use tracing::debug;

/// A transformation that rewrites the document buffer in place.
///
/// # Infallibility
///
/// Transforms return `()`. A pattern that does not match is a no-op, so
/// there is nothing to report: malformed input simply passes through.
pub trait Transform {
    /// Short identifier used in log output.
    fn name(&self) -> &'static str;

    /// Apply this transformation to the buffer.
    fn transform(&mut self, text: &mut String);
}

/// A chain of transforms applied in sequence.
///
/// Each transform sees the result of the previous ones, so insertion order
/// is significant.
pub struct TransformChain {
    transforms: Vec<Box<dyn Transform>>,
}

impl TransformChain {
    /// Create an empty transform chain.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Add a transform to the end of the chain.
    ///
    /// Returns self for method chaining.
    pub fn with<T: Transform + 'static>(mut self, transform: T) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Check if the chain has no transforms.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Get the number of transforms in the chain.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Names of the transforms, in application order.
    pub fn names(&self) -> Vec<&'static str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }
}

impl Default for TransformChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for TransformChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    /// Apply all transforms in sequence.
    fn transform(&mut self, text: &mut String) {
        for transform in &mut self.transforms {
            let before = text.len();
            transform.transform(text);
            debug!(
                step = transform.name(),
                bytes_before = before,
                bytes_after = text.len(),
                "applied transform"
            );
        }
    }
}
