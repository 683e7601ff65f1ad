//! Rule-based resume parser composing the field extractors.

use std::time::Instant;

use tracing::debug;

use crate::models::resume::Resume;

use super::rules::{
    extract_address, extract_birth_date, extract_education, extract_email, extract_gender,
    extract_id_card, extract_name, extract_phone, extract_skills, extract_work_experiences,
};

/// Result of resume field extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted record. Identity, source and import time are the caller's business.
    pub resume: Resume,
    /// Fields that could not be found.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for resume parsing.
pub trait ResumeParser {
    /// Populate a record from plain text. Missing fields are left empty.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Parser running the fixed pipeline of pattern extractors.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedParser;

impl RuleBasedParser {
    pub fn new() -> Self {
        Self
    }
}

impl ResumeParser for RuleBasedParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        let mut warnings = Vec::new();
        let mut resume = Resume::new();

        debug!("Parsing resume from {} characters of text", text.len());

        match extract_name(text) {
            Some(name) => resume.name = name,
            None => warnings.push("Could not extract name".to_string()),
        }
        resume.gender = extract_gender(text).unwrap_or_default();
        resume.birth_date = extract_birth_date(text);
        resume.address = extract_address(text).unwrap_or_default();

        match extract_phone(text) {
            Some(phone) => resume.phone = phone,
            None => warnings.push("Could not extract phone".to_string()),
        }
        match extract_email(text) {
            Some(email) => resume.email = email,
            None => warnings.push("Could not extract email".to_string()),
        }
        resume.id_card = extract_id_card(text).unwrap_or_default();

        let education = extract_education(text);
        resume.first_education_school = education.first_school;
        resume.first_education_major = education.first_major;
        resume.highest_education_school = education.highest_school;
        resume.highest_education_major = education.highest_major;

        resume.work_experiences = extract_work_experiences(text);
        resume.skills = extract_skills(text);

        debug!(
            "Extracted resume '{}': {} work entries, {} skills, {} warnings",
            resume.name,
            resume.work_experiences.len(),
            resume.skills.len(),
            warnings.len()
        );

        ExtractionResult {
            resume,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Extract fields from text with the default parser.
pub fn extract_fields(text: &str) -> Resume {
    RuleBasedParser::new().parse(text).resume
}
