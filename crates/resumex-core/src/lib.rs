//! Core library for resume ingestion and management.
//!
//! This crate provides:
//! - Document text extraction (docx and PDF)
//! - Rule-based resume field extraction (contact, education, work, skills)
//! - A JSON-backed resume store with import, delete and lookup
//! - Keyword/date search and duplicate detection
//! - Duplicate report export to text and docx

pub mod error;
pub mod models;
pub mod document;
pub mod resume;
pub mod store;
pub mod query;
pub mod duplicates;
pub mod export;

pub use error::{ResumexError, Result};
pub use models::config::{ResumexConfig, StorageConfig, ImportConfig, ExportConfig};
pub use models::resume::{Resume, WorkExperience, ResumeDirectory, DEFAULT_DIRECTORY};
pub use document::{DocumentFormat, extract_text};
pub use resume::{ResumeParser, RuleBasedParser, ExtractionResult, extract_fields};
pub use store::{ResumeStore, ImportReport, ImportFailure, ImportOutcome};
pub use query::{SearchQuery, SearchField};
pub use duplicates::{DuplicateCheck, DuplicateCriterion, DuplicateGroup, DuplicateReport};
pub use export::{export_text, export_document};
