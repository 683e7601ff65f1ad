//! Resume field extraction module.

mod parser;
pub mod rules;

pub use parser::{extract_fields, ExtractionResult, ResumeParser, RuleBasedParser};

use std::path::Path;

use crate::document;

/// Read a document and extract a record from it, tagged with its source.
pub fn parse_document(path: &Path, parser: &dyn ResumeParser) -> crate::Result<ExtractionResult> {
    let text = document::extract_text(path)?;
    let mut result = parser.parse(&text);
    result.resume = result.resume.with_source(path);
    Ok(result)
}
