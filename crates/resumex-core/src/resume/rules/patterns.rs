//! Common regex patterns for resume field extraction.
//!
//! Label patterns only ever consume the remainder of the labelled line.

use lazy_static::lazy_static;
use regex::Regex;

/// Address labels, highest priority first.
pub const ADDRESS_LABELS: [&str; 4] = ["地址", "住址", "现居", "居住地"];

/// Labels that introduce a skill list.
pub const SKILL_LABELS: [&str; 6] = ["技能", "专长", "能力", "掌握", "熟悉", "精通"];

/// Delimiters between items of a skill list.
pub const SKILL_DELIMITERS: [char; 5] = ['、', '，', ',', '；', ';'];

pub const MALE: &str = "男";
pub const FEMALE: &str = "女";

lazy_static! {
    // 1990年5月1日, 1990-5-1, 1990/05/01
    pub static ref BIRTH_DATE: Regex = Regex::new(
        r"([0-9]{4})[年\-/]([0-9]{1,2})[月\-/]([0-9]{1,2})日?"
    ).unwrap();

    // Mainland mobile number
    pub static ref PHONE: Regex = Regex::new(
        r"1[3-9][0-9]{9}"
    ).unwrap();

    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // 18-character resident ID, check digit may be X
    pub static ref ID_CARD: Regex = Regex::new(
        r"[0-9]{17}[0-9Xx]"
    ).unwrap();

    // 大学：… / 学院：… / 学校：…
    pub static ref SCHOOL: Regex = Regex::new(
        r"(?:大学|学院|学校)[：:][^\S\r\n]*([^\r\n]+)"
    ).unwrap();

    pub static ref MAJOR: Regex = Regex::new(
        r"专业[：:][^\S\r\n]*([^\r\n]+)"
    ).unwrap();

    // 本科 … 北京大学
    pub static ref BACHELOR_SCHOOL: Regex = Regex::new(
        r"本科[^\r\n：:]*?[：:]?[^\S\r\n]*([^\r\n]*?(?:大学|学院))"
    ).unwrap();

    // 本科 … 专业：…
    pub static ref BACHELOR_MAJOR: Regex = Regex::new(
        r"本科[^\r\n]*专业[：:][^\S\r\n]*([^\r\n]+)"
    ).unwrap();

    // Company line followed (possibly on the next line) by a role fragment
    pub static ref WORK_EXPERIENCE: Regex = Regex::new(
        r"([^\r\n]+公司|[^\r\n]+集团)[：:]?\s*([^\r\n]*(?:岗位|职位|职务)[^\r\n]*)"
    ).unwrap();

    pub static ref ADDRESS: Vec<Regex> = ADDRESS_LABELS.iter().map(|l| labeled_line(l)).collect();

    pub static ref SKILLS: Vec<Regex> = SKILL_LABELS.iter().map(|l| labeled_line(l)).collect();
}

/// `<label>` followed by a colon (full- or half-width); captures the rest of the line.
fn labeled_line(label: &str) -> Regex {
    Regex::new(&format!(
        r"{}[：:][^\S\r\n]*([^\r\n]+)",
        regex::escape(label)
    ))
    .unwrap()
}
