//! Birth date extraction.

use chrono::NaiveDate;

use super::FieldExtractor;
use super::patterns::BIRTH_DATE;

/// Extracts year-month-day dates such as `1990年5月1日` or `1990-05-01`.
pub struct BirthDateExtractor;

impl BirthDateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BirthDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for BirthDateExtractor {
    type Output = NaiveDate;

    /// Only the first date-shaped token is considered; if it is not a real
    /// calendar date the result is `None`.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        BIRTH_DATE.captures(text).and_then(|caps| to_date(&caps))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        BIRTH_DATE
            .captures_iter(text)
            .filter_map(|caps| to_date(&caps))
            .collect()
    }
}

fn to_date(caps: &regex::Captures<'_>) -> Option<NaiveDate> {
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Extract the birth date from text.
pub fn extract_birth_date(text: &str) -> Option<NaiveDate> {
    BirthDateExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_chinese_date() {
        assert_eq!(
            extract_birth_date("出生日期：1990年5月1日"),
            NaiveDate::from_ymd_opt(1990, 5, 1)
        );
    }

    #[test]
    fn test_extract_separators() {
        assert_eq!(extract_birth_date("1988-12-03"), NaiveDate::from_ymd_opt(1988, 12, 3));
        assert_eq!(extract_birth_date("1988/2/3"), NaiveDate::from_ymd_opt(1988, 2, 3));
    }

    #[test]
    fn test_invalid_first_date_does_not_fall_through() {
        let text = "1990年2月30日\n1991年1月1日";
        assert_eq!(extract_birth_date(text), None);

        let all = BirthDateExtractor::new().extract_all(text);
        assert_eq!(all, vec![NaiveDate::from_ymd_opt(1991, 1, 1).unwrap()]);
    }

    #[test]
    fn test_no_date() {
        assert_eq!(extract_birth_date("手机：13900001111"), None);
    }
}
