//! DOCX (Word) document handling.
//!
//! - [`part`]: reading the main document part and synthesizing minimal packages
//! - [`walker`]: namespace-aware paragraph/run/text traversal
//! - [`highlight`]: highlighted run extraction

pub mod highlight;
pub mod part;
pub mod walker;

pub use highlight::{extract_highlights, HighlightExtractor, DEFAULT_HIGHLIGHT_COLOR};
pub use part::{DOCUMENT_PART, DOCX_MEDIA_TYPE, STYLES_PART, XML_MEDIA_TYPE};
pub use walker::{DocumentTree, Namespaces, QName};
