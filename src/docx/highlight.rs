//! Highlighted run extraction.

use super::walker::{self, DocumentTree, Namespaces};
use crate::error::Result;
use crate::model::HighlightRecord;

/// Color reported for a highlight marker without a `w:val` attribute.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "yellow";

const HIGHLIGHT: &str = "w:highlight";
const HIGHLIGHT_VAL: &str = "w:val";

/// Extracts highlighted text runs from a parsed document.
#[derive(Debug, Clone)]
pub struct HighlightExtractor {
    namespaces: Namespaces,
}

impl Default for HighlightExtractor {
    fn default() -> Self {
        Self::new(Namespaces::wordprocessing())
    }
}

impl HighlightExtractor {
    /// Create an extractor using the given namespace set.
    pub fn new(namespaces: Namespaces) -> Self {
        Self { namespaces }
    }

    /// The namespace set used for lookups.
    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    /// Collect one record per highlighted run with non-blank text, in
    /// paragraph-then-run order.
    ///
    /// Paragraph indices count every `w:p` in the document; run indices
    /// count every `w:r` found under that paragraph, highlighted or not.
    pub fn extract(&self, tree: &DocumentTree<'_>) -> Result<Vec<HighlightRecord>> {
        let ns = &self.namespaces;
        let paragraphs = tree.paragraphs(ns)?;
        let mut records = Vec::new();

        for (paragraph_index, paragraph) in paragraphs.iter().enumerate() {
            for (run_index, run) in walker::runs(*paragraph, ns)?.into_iter().enumerate() {
                if !walker::has_descendant_named(run, ns, HIGHLIGHT)? {
                    continue;
                }

                let text = walker::text_of(run, ns)?;
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }

                let color = match walker::find_descendant(run, ns, HIGHLIGHT)? {
                    Some(marker) => walker::attribute(marker, ns, HIGHLIGHT_VAL)?,
                    None => None,
                }
                .unwrap_or(DEFAULT_HIGHLIGHT_COLOR);

                records.push(HighlightRecord {
                    text: text.to_string(),
                    highlight_color: Some(color.to_string()),
                    paragraph_index,
                    run_index,
                });
            }
        }

        tracing::debug!(
            paragraphs = paragraphs.len(),
            records = records.len(),
            "extracted highlights"
        );
        Ok(records)
    }
}

/// Parse document XML and extract its highlighted runs.
///
/// # Example
///
/// ```
/// let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
///   <w:body><w:p><w:r><w:rPr><w:highlight w:val="green"/></w:rPr><w:t>World</w:t></w:r></w:p></w:body>
/// </w:document>"#;
///
/// let records = docmark::extract_highlights(xml)?;
/// assert_eq!(records[0].text, "World");
/// assert_eq!(records[0].highlight_color.as_deref(), Some("green"));
/// # Ok::<(), docmark::Error>(())
/// ```
pub fn extract_highlights(xml: &str) -> Result<Vec<HighlightRecord>> {
    let tree = DocumentTree::parse(xml)?;
    HighlightExtractor::default().extract(&tree)
}
