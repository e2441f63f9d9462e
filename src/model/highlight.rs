//! Highlighted run records.

use serde::{Deserialize, Serialize};

/// A highlighted run with non-blank text and its position in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRecord {
    /// Concatenated run text, trimmed
    pub text: String,

    /// Value of the highlight marker's `w:val`, or `"yellow"` when absent
    pub highlight_color: Option<String>,

    /// 0-based index among all paragraphs in the document
    pub paragraph_index: usize,

    /// 0-based index among runs found within the paragraph
    pub run_index: usize,
}

impl HighlightRecord {
    /// Sort key in document order.
    pub fn position(&self) -> (usize, usize) {
        (self.paragraph_index, self.run_index)
    }
}
