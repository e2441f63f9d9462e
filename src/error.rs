//! Error types for the docmark library.

use std::io;
use thiserror::Error;

/// Result type alias for docmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, walking, or writing a document package.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Zero-length input where document bytes were expected.
    #[error("Empty input")]
    EmptyInput,

    /// Input exceeds the configured size limit.
    #[error("Input too large: {size} bytes (limit {limit})")]
    InputTooLarge { size: usize, limit: usize },

    /// The input bytes are not a valid ZIP container.
    #[error("Corrupt archive: {0}")]
    CorruptArchive(String),

    /// A named part is absent from an otherwise valid archive.
    #[error("Part not found: {0}")]
    PartNotFound(String),

    /// A part's bytes are not valid UTF-8.
    #[error("Invalid encoding in {path}: {reason}")]
    InvalidEncoding { path: String, reason: String },

    /// The XML text is not well-formed.
    #[error("Malformed XML at {line}:{column}: {reason}")]
    MalformedXml {
        line: u32,
        column: u32,
        reason: String,
    },

    /// A qualified name used a prefix missing from the namespace set.
    #[error("Unknown namespace prefix in '{0}'")]
    UnknownNamespacePrefix(String),

    /// Error while writing a ZIP archive.
    #[error("ZIP write error: {0}")]
    Zip(String),

    /// Error during JSON serialization.
    #[error("JSON error: {0}")]
    Json(String),
}

impl Error {
    /// Build a `MalformedXml` error without position information.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedXml {
            line: 0,
            column: 0,
            reason: reason.into(),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            other => Error::CorruptArchive(other.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::malformed(err.to_string())
    }
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        let pos = err.pos();
        Error::MalformedXml {
            line: pos.row,
            column: pos.col,
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

/// User-facing failures of the DOCX/XML conversion operations.
///
/// The wrapped [`Error`] keeps the precise cause, so callers can still tell a
/// corrupt archive apart from a missing document part.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The input is not a usable DOCX package.
    #[error("Invalid DOCX package: {0}")]
    InvalidDocumentPackage(#[source] Error),

    /// The document text is not valid UTF-8.
    #[error("Invalid document encoding: {0}")]
    InvalidDocumentEncoding(#[source] Error),

    /// The XML text failed the well-formedness pre-check.
    #[error("Invalid XML: {0}")]
    InvalidXml(#[source] Error),

    /// Zero-length input.
    #[error("Empty file uploaded")]
    EmptyInput,

    /// Any other failure.
    #[error(transparent)]
    Other(Error),
}

impl ConversionError {
    /// The underlying library error, when one exists.
    pub fn cause(&self) -> Option<&Error> {
        match self {
            ConversionError::InvalidDocumentPackage(e)
            | ConversionError::InvalidDocumentEncoding(e)
            | ConversionError::InvalidXml(e)
            | ConversionError::Other(e) => Some(e),
            ConversionError::EmptyInput => None,
        }
    }
}
