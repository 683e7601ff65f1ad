//! Duplicate detection by exact equality on identity fields.

use std::collections::HashMap;

use tracing::debug;

use crate::models::resume::Resume;
use crate::store::ResumeStore;

/// Identity field used to group records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuplicateCriterion {
    Name,
    Phone,
    Email,
    IdCard,
}

impl DuplicateCriterion {
    /// All criteria, in the order groups are reported.
    pub const ALL: [DuplicateCriterion; 4] = [Self::Name, Self::Phone, Self::Email, Self::IdCard];

    /// Prefix used in group labels.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::IdCard => "id card",
        }
    }

    fn value(self, resume: &Resume) -> &str {
        match self {
            Self::Name => &resume.name,
            Self::Phone => &resume.phone,
            Self::Email => &resume.email,
            Self::IdCard => &resume.id_card,
        }
    }
}

/// Which criteria to check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DuplicateCheck {
    pub name: bool,
    pub phone: bool,
    pub email: bool,
    pub id_card: bool,
}

impl DuplicateCheck {
    /// Check every criterion.
    pub fn all() -> Self {
        Self {
            name: true,
            phone: true,
            email: true,
            id_card: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.name || self.phone || self.email || self.id_card)
    }

    fn enabled(&self) -> impl Iterator<Item = DuplicateCriterion> + '_ {
        DuplicateCriterion::ALL.into_iter().filter(|c| match c {
            DuplicateCriterion::Name => self.name,
            DuplicateCriterion::Phone => self.phone,
            DuplicateCriterion::Email => self.email,
            DuplicateCriterion::IdCard => self.id_card,
        })
    }
}

/// Two or more records sharing one field value.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateGroup {
    pub criterion: DuplicateCriterion,
    pub value: String,
    pub members: Vec<Resume>,
}

impl DuplicateGroup {
    /// Key of the form `"<criterion>: <value>"`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.criterion.label(), self.value)
    }
}

/// Ordered duplicate groups. A record can belong to one group per criterion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DuplicateReport {
    pub groups: Vec<DuplicateGroup>,
}

impl DuplicateReport {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Find a group by its label.
    pub fn get(&self, label: &str) -> Option<&DuplicateGroup> {
        self.groups.iter().find(|g| g.label() == label)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DuplicateGroup> {
        self.groups.iter()
    }
}

/// Group `resumes` by each enabled criterion. Blank values never group;
/// groups keep the order in which their value first appears.
pub fn find_duplicates_in(resumes: &[Resume], check: &DuplicateCheck) -> DuplicateReport {
    let mut report = DuplicateReport::default();

    for criterion in check.enabled() {
        // Buckets stay in first-appearance order; the map only indexes them.
        let mut buckets: Vec<(&str, Vec<&Resume>)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for resume in resumes {
            let value = criterion.value(resume);
            if value.trim().is_empty() {
                continue;
            }
            match index.get(value) {
                Some(&i) => buckets[i].1.push(resume),
                None => {
                    index.insert(value, buckets.len());
                    buckets.push((value, vec![resume]));
                }
            }
        }

        report.groups.extend(
            buckets
                .into_iter()
                .filter(|(_, members)| members.len() > 1)
                .map(|(value, members)| DuplicateGroup {
                    criterion,
                    value: value.to_string(),
                    members: members.into_iter().cloned().collect(),
                }),
        );
    }

    report
}

impl ResumeStore {
    /// Detect duplicates in a fresh snapshot of the collection.
    pub fn find_duplicates(&self, check: &DuplicateCheck) -> DuplicateReport {
        let snapshot = self.load();
        let report = find_duplicates_in(&snapshot, check);
        debug!(
            "Found {} duplicate groups among {} resumes",
            report.len(),
            snapshot.len()
        );
        report
    }
}
