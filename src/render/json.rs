//! JSON renderer implementation.

use crate::error::Result;
use crate::model::HighlightReport;
use crate::options::ProcessOptions;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Convert a report to JSON.
pub fn to_json(report: &HighlightReport, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(report)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(report)?,
    };
    Ok(json)
}

/// Convert a report to JSON using the layout chosen in `options`.
pub fn to_json_with_options(report: &HighlightReport, options: &ProcessOptions) -> Result<String> {
    to_json(report, options.json_format)
}

/// Convert a report to pretty-printed JSON.
pub fn to_json_default(report: &HighlightReport) -> Result<String> {
    to_json(report, JsonFormat::Pretty)
}
