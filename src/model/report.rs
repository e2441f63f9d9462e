//! Extraction report envelope.

use super::HighlightRecord;
use serde::{Deserialize, Serialize};

/// Result of extracting highlights from one uploaded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightReport {
    /// Always `true`; failures are reported as errors, never as partial reports
    pub success: bool,

    /// Original file name
    pub filename: String,

    /// Number of records in `highlighted_texts`
    pub highlighted_text_count: usize,

    /// Records in paragraph-then-run order
    pub highlighted_texts: Vec<HighlightRecord>,

    /// Local processing time (ISO 8601)
    pub processed_at: String,
}

impl HighlightReport {
    /// Build a report stamped with the current local time.
    pub fn new(filename: impl Into<String>, records: Vec<HighlightRecord>) -> Self {
        let processed_at = chrono::Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string();
        Self::with_timestamp(filename, records, processed_at)
    }

    /// Build a report with an explicit timestamp.
    pub fn with_timestamp(
        filename: impl Into<String>,
        records: Vec<HighlightRecord>,
        processed_at: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            filename: filename.into(),
            highlighted_text_count: records.len(),
            highlighted_texts: records,
            processed_at: processed_at.into(),
        }
    }
}

/// Output file name for a converted upload: the input's base name with its
/// last extension replaced.
///
/// `suggested_filename("report.v2.docx", "xml")` is `"report.v2.xml"`.
pub fn suggested_filename(input_name: &str, extension: &str) -> String {
    let base = input_name.rsplit(['/', '\\']).next().unwrap_or(input_name);
    let stem = match base.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => base,
    };
    format!("{}.{}", stem, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_records() {
        let records = vec![HighlightRecord {
            text: "a".to_string(),
            highlight_color: Some("yellow".to_string()),
            paragraph_index: 0,
            run_index: 0,
        }];
        let report = HighlightReport::with_timestamp("notes.docx", records, "2026-01-01T00:00:00");
        assert!(report.success);
        assert_eq!(report.highlighted_text_count, 1);
        assert_eq!(report.filename, "notes.docx");
    }

    #[test]
    fn test_report_timestamp_format() {
        let report = HighlightReport::new("x.docx", Vec::new());
        assert!(chrono::NaiveDateTime::parse_from_str(&report.processed_at, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
        assert_eq!(report.highlighted_text_count, 0);
    }

    #[test]
    fn test_suggested_filename() {
        assert_eq!(suggested_filename("report.docx", "xml"), "report.xml");
        assert_eq!(suggested_filename("report.v2.DOCX", "xml"), "report.v2.xml");
        assert_eq!(suggested_filename("notes", "docx"), "notes.docx");
        assert_eq!(suggested_filename("dir/sub/notes.xml", "docx"), "notes.docx");
    }
}
