//! Processing options configuration.

use crate::error::{Error, Result};
use crate::render::JsonFormat;

/// Default input size limit: 50 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 50 * 1024 * 1024;

/// Options for extraction and conversion.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Reject inputs larger than this many bytes (`None` for no limit)
    pub max_input_bytes: Option<usize>,

    /// Check XML well-formedness before packaging it into a DOCX
    pub validate_xml: bool,

    /// JSON layout for rendered reports
    pub json_format: JsonFormat,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            max_input_bytes: Some(DEFAULT_MAX_INPUT_BYTES),
            validate_xml: false,
            json_format: JsonFormat::Pretty,
        }
    }
}

impl ProcessOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input size limit.
    pub fn with_max_input_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = Some(limit);
        self
    }

    /// Remove the input size limit.
    pub fn without_size_limit(mut self) -> Self {
        self.max_input_bytes = None;
        self
    }

    /// Enable or disable the XML well-formedness pre-check.
    pub fn with_xml_validation(mut self, validate: bool) -> Self {
        self.validate_xml = validate;
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Reject empty or oversized input.
    pub fn check_size(&self, data: &[u8]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        match self.max_input_bytes {
            Some(limit) if data.len() > limit => Err(Error::InputTooLarge {
                size: data.len(),
                limit,
            }),
            _ => Ok(()),
        }
    }
}
