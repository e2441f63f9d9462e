//! Output data model.
//!
//! Records produced by the highlight extractor and the report envelope that
//! wraps them. Both are plain values with no reference back to the XML tree.

mod highlight;
mod report;

pub use highlight::*;
pub use report::*;
