//! Rule-based field extractors for resumes.
//!
//! Every extractor reads the whole text on its own and returns `None` (or an
//! empty list) when nothing matches.

pub mod contact;
pub mod dates;
pub mod education;
pub mod patterns;
pub mod personal;
pub mod skills;
pub mod work;

pub use contact::{extract_email, extract_id_card, extract_phone, ContactExtractor, ContactKind};
pub use dates::{extract_birth_date, BirthDateExtractor};
pub use education::{apply_bachelor_overrides, extract_education, general_pass, EducationInfo};
pub use personal::{extract_address, extract_gender, extract_name};
pub use skills::extract_skills;
pub use work::extract_work_experiences;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
