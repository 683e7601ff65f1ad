//! Work experience extraction.

use crate::models::resume::WorkExperience;

use super::patterns::WORK_EXPERIENCE;

/// One entry per company-like line followed by a role fragment
/// (`岗位`/`职位`/`职务`). Entries for the same company are not merged.
pub fn extract_work_experiences(text: &str) -> Vec<WorkExperience> {
    WORK_EXPERIENCE
        .captures_iter(text)
        .map(|caps| WorkExperience {
            company: caps[1].trim().to_string(),
            position: caps[2].trim().to_string(),
            ..Default::default()
        })
        .collect()
}
