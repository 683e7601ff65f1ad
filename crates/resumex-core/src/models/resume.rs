//! Resume data models.
//!
//! Persisted keys are PascalCase so existing collection files stay readable.

use std::path::Path;

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::serde_time;

/// Directory label given to records that were never filed anywhere else.
pub const DEFAULT_DIRECTORY: &str = "default";

/// Structured record produced from one source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Resume {
    /// Opaque identifier, assigned once at creation.
    pub id: String,

    pub name: String,

    pub gender: String,

    #[serde(with = "serde_time::optional_date")]
    pub birth_date: Option<NaiveDate>,

    pub address: String,

    /// School of the highest degree.
    pub highest_education_school: String,

    pub highest_education_major: String,

    /// School of the first (bachelor) degree.
    pub first_education_school: String,

    pub first_education_major: String,

    pub phone: String,

    pub email: String,

    /// National ID card number.
    pub id_card: String,

    pub work_experiences: Vec<WorkExperience>,

    /// Skills in document order. Duplicates are kept.
    pub skills: Vec<String>,

    pub original_file_path: String,

    pub file_name: String,

    /// Set once when the record is admitted into the store.
    #[serde(with = "serde_time::datetime")]
    pub import_time: NaiveDateTime,

    pub directory: String,
}

impl Resume {
    /// Create an empty record with a fresh identifier.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: String::new(),
            gender: String::new(),
            birth_date: None,
            address: String::new(),
            highest_education_school: String::new(),
            highest_education_major: String::new(),
            first_education_school: String::new(),
            first_education_major: String::new(),
            phone: String::new(),
            email: String::new(),
            id_card: String::new(),
            work_experiences: Vec::new(),
            skills: Vec::new(),
            original_file_path: String::new(),
            file_name: String::new(),
            import_time: Local::now().naive_local(),
            directory: DEFAULT_DIRECTORY.to_string(),
        }
    }

    /// Record the source document this resume was extracted from.
    pub fn with_source(mut self, path: &Path) -> Self {
        self.original_file_path = path.to_string_lossy().into_owned();
        self.file_name = file_name_of(path);
        self
    }
}

impl Default for Resume {
    fn default() -> Self {
        Self::new()
    }
}

/// File name component used as the natural dedup key.
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Order records by import time, newest first.
pub fn sort_most_recent_first(resumes: &mut [Resume]) {
    resumes.sort_by(|a, b| b.import_time.cmp(&a.import_time));
}

/// One employment entry found in a resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WorkExperience {
    pub company: String,

    pub position: String,

    pub project: String,

    pub title: String,

    pub responsibilities: String,

    #[serde(with = "serde_time::optional_date")]
    pub start_date: Option<NaiveDate>,

    #[serde(with = "serde_time::optional_date")]
    pub end_date: Option<NaiveDate>,

    pub is_current_job: bool,
}

/// A named folder for filing resumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResumeDirectory {
    pub name: String,

    #[serde(with = "serde_time::datetime")]
    pub created_time: NaiveDateTime,
}

impl ResumeDirectory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_time: Local::now().naive_local(),
        }
    }
}
