//! # docmark
//!
//! Highlighted-text extraction and DOCX ⇄ XML round-tripping for Word
//! documents.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docmark::{extract_highlights_from_bytes, ProcessOptions};
//!
//! let data = std::fs::read("notes.docx")?;
//! for record in extract_highlights_from_bytes(&data, &ProcessOptions::default())? {
//!     println!(
//!         "[{}:{}] {} ({:?})",
//!         record.paragraph_index, record.run_index, record.text, record.highlight_color
//!     );
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Conversion
//!
//! ```no_run
//! use docmark::convert;
//!
//! let docx = std::fs::read("notes.docx")?;
//! let xml = convert::to_xml(&docx)?;
//! let rebuilt = convert::to_package(&xml)?;
//! assert_eq!(convert::to_xml(&rebuilt)?, xml);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod container;
pub mod convert;
pub mod docx;
pub mod error;
pub mod model;
pub mod options;
pub mod render;

// Re-exports
pub use container::{Package, PackageWriter, Relationship, Relationships};
pub use docx::{extract_highlights, DocumentTree, HighlightExtractor, Namespaces};
pub use error::{ConversionError, Error, Result};
pub use model::{suggested_filename, HighlightRecord, HighlightReport};
pub use options::ProcessOptions;

use convert::ConversionResult;
use std::path::Path;

/// Extract highlighted runs from DOCX bytes.
///
/// Extraction is all-or-nothing: any failure returns an error and no records.
pub fn extract_highlights_from_bytes(
    data: &[u8],
    options: &ProcessOptions,
) -> ConversionResult<Vec<HighlightRecord>> {
    options.check_size(data).map_err(convert::classify)?;
    let xml = convert::to_xml(data)?;
    extract_highlights(&xml).map_err(convert::classify)
}

/// Extract highlighted runs from a DOCX file.
///
/// # Example
///
/// ```no_run
/// let records = docmark::extract_highlights_from_file("notes.docx")?;
/// println!("{} highlighted runs", records.len());
/// # Ok::<(), docmark::ConversionError>(())
/// ```
pub fn extract_highlights_from_file(path: impl AsRef<Path>) -> ConversionResult<Vec<HighlightRecord>> {
    let data = std::fs::read(path.as_ref()).map_err(|e| ConversionError::Other(e.into()))?;
    extract_highlights_from_bytes(&data, &ProcessOptions::default())
}

/// Extract highlighted runs and wrap them in a timestamped report.
pub fn highlight_report(
    filename: &str,
    data: &[u8],
    options: &ProcessOptions,
) -> ConversionResult<HighlightReport> {
    let records = extract_highlights_from_bytes(data, options)?;
    Ok(HighlightReport::new(filename, records))
}

/// Extract the document XML from DOCX bytes, applying the size limit.
pub fn docx_to_xml(data: &[u8], options: &ProcessOptions) -> ConversionResult<String> {
    options.check_size(data).map_err(convert::classify)?;
    convert::to_xml(data)
}

/// Package XML bytes as a minimal DOCX, applying the size limit and the
/// optional well-formedness check.
pub fn xml_to_docx(data: &[u8], options: &ProcessOptions) -> ConversionResult<Vec<u8>> {
    options.check_size(data).map_err(convert::classify)?;
    convert::to_package_from_bytes(data, options.validate_xml)
}
