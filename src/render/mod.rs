//! Output rendering for extraction reports.
//!
//! # Example
//!
//! ```no_run
//! use docmark::{highlight_report, render::*, ProcessOptions};
//!
//! let data = std::fs::read("notes.docx")?;
//! let report = highlight_report("notes.docx", &data, &ProcessOptions::default())?;
//! let json = to_json(&report, JsonFormat::Pretty)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod json;

pub use json::{to_json, to_json_default, to_json_with_options, JsonFormat};
