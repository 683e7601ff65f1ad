//! Keyword and import-date search over a store snapshot.

use chrono::{Days, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::models::resume::Resume;
use crate::store::ResumeStore;

/// Which fields a keyword is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchField {
    /// Name, file name, phone or email.
    #[default]
    All,
    Name,
    FileName,
    Phone,
    Email,
}

/// Search parameters. Dates bound the import time, both ends inclusive of
/// their whole calendar day.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub keyword: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub field: SearchField,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, field: SearchField) -> Self {
        self.field = field;
        self
    }

    pub fn with_start_date(mut self, start: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self
    }

    pub fn with_end_date(mut self, end: Option<NaiveDate>) -> Self {
        self.end_date = end;
        self
    }

    /// Whether `resume` passes both the date and the keyword filter.
    pub fn matches(&self, resume: &Resume) -> bool {
        self.in_date_range(resume.import_time) && self.matches_keyword(resume)
    }

    fn in_date_range(&self, import_time: NaiveDateTime) -> bool {
        if let Some(start) = self.start_date {
            if import_time < start.and_time(chrono::NaiveTime::MIN) {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            // Exclusive bound at midnight after the end date.
            let limit = end
                .checked_add_days(Days::new(1))
                .map(|d| d.and_time(chrono::NaiveTime::MIN));
            if limit.is_some_and(|limit| import_time >= limit) {
                return false;
            }
        }
        true
    }

    fn matches_keyword(&self, resume: &Resume) -> bool {
        let keyword = self.keyword.as_str();
        if keyword.trim().is_empty() {
            return true;
        }

        match self.field {
            SearchField::Name => contains_ignore_case(&resume.name, keyword),
            SearchField::FileName => contains_ignore_case(&resume.file_name, keyword),
            SearchField::Phone => resume.phone.contains(keyword),
            SearchField::Email => contains_ignore_case(&resume.email, keyword),
            SearchField::All => {
                contains_ignore_case(&resume.name, keyword)
                    || contains_ignore_case(&resume.file_name, keyword)
                    || resume.phone.contains(keyword)
                    || contains_ignore_case(&resume.email, keyword)
            }
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Records matching `query`, in collection order.
pub fn filter_resumes(resumes: Vec<Resume>, query: &SearchQuery) -> Vec<Resume> {
    resumes.into_iter().filter(|r| query.matches(r)).collect()
}

impl ResumeStore {
    /// Search a fresh snapshot of the collection.
    pub fn search(&self, query: &SearchQuery) -> Vec<Resume> {
        let snapshot = self.load();
        let total = snapshot.len();
        let results = filter_resumes(snapshot, query);
        debug!("Search matched {} of {} resumes", results.len(), total);
        results
    }
}
