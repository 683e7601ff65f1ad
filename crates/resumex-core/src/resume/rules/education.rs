//! School and major extraction.
//!
//! Two passes run in a fixed order:
//!
//! 1. The general pass collects every `大学/学院/学校：` and `专业：` line. The
//!    first match fills the first-degree field, the last fills the
//!    highest-degree field (one match fills both).
//! 2. The bachelor pass looks for a line mentioning `本科`. When it finds a
//!    school (or a `专业：` label) there, it overwrites the first-degree field
//!    set by the general pass. Highest-degree fields are never touched.

use super::patterns::{BACHELOR_MAJOR, BACHELOR_SCHOOL, MAJOR, SCHOOL};

/// Education fields of a resume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationInfo {
    pub first_school: String,
    pub first_major: String,
    pub highest_school: String,
    pub highest_major: String,
}

/// Run both passes.
pub fn extract_education(text: &str) -> EducationInfo {
    let mut info = general_pass(text);
    apply_bachelor_overrides(text, &mut info);
    info
}

/// First/last labelled school and major.
pub fn general_pass(text: &str) -> EducationInfo {
    let mut info = EducationInfo::default();

    let schools: Vec<String> = SCHOOL
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .collect();
    if let (Some(first), Some(last)) = (schools.first(), schools.last()) {
        info.first_school = first.clone();
        info.highest_school = last.clone();
    }

    let majors: Vec<String> = MAJOR
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .collect();
    if let (Some(first), Some(last)) = (majors.first(), majors.last()) {
        info.first_major = first.clone();
        info.highest_major = last.clone();
    }

    info
}

/// Overwrite first-degree fields with bachelor-specific matches.
///
/// Runs after [`general_pass`] and always wins when it matches. The school
/// capture is lazy on purpose: `本科：北京大学` yields the full name rather
/// than the bare `大学` suffix a greedy prefix would leave.
pub fn apply_bachelor_overrides(text: &str, info: &mut EducationInfo) {
    if let Some(school) = BACHELOR_SCHOOL
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|school| !school.is_empty())
    {
        info.first_school = school;
    }

    if let Some(caps) = BACHELOR_MAJOR.captures(text) {
        info.first_major = caps[1].trim().to_string();
    }
}
