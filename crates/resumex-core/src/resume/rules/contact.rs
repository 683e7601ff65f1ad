//! Phone, email and national ID extraction.

use regex::Regex;

use super::FieldExtractor;
use super::patterns::{EMAIL, ID_CARD, PHONE};

/// Kind of contact token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// 11-digit mobile number.
    Phone,
    Email,
    /// 18-character national ID.
    IdCard,
}

impl ContactKind {
    fn pattern(self) -> &'static Regex {
        match self {
            Self::Phone => &*PHONE,
            Self::Email => &*EMAIL,
            Self::IdCard => &*ID_CARD,
        }
    }
}

/// Extractor returning the raw matched token for one contact kind.
pub struct ContactExtractor {
    kind: ContactKind,
}

impl ContactExtractor {
    pub fn new(kind: ContactKind) -> Self {
        Self { kind }
    }
}

impl FieldExtractor for ContactExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.kind.pattern().find(text).map(|m| m.as_str().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.kind
            .pattern()
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// First mobile number in the text.
pub fn extract_phone(text: &str) -> Option<String> {
    ContactExtractor::new(ContactKind::Phone).extract(text)
}

/// First email address in the text.
pub fn extract_email(text: &str) -> Option<String> {
    ContactExtractor::new(ContactKind::Email).extract(text)
}

/// First national ID number in the text.
pub fn extract_id_card(text: &str) -> Option<String> {
    ContactExtractor::new(ContactKind::IdCard).extract(text)
}
