//! Name, gender and address heuristics.

use super::patterns::{ADDRESS, FEMALE, MALE};

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 10;

/// First line that looks like a personal name: 2-10 characters, letters
/// and whitespace only.
///
/// Any short alphabetic line qualifies, so headings such as "个人简历"
/// are picked up when they come first.
pub fn extract_name(text: &str) -> Option<String> {
    text.split('\n')
        .map(str::trim)
        .find(|line| looks_like_name(line))
        .map(str::to_string)
}

fn looks_like_name(line: &str) -> bool {
    let len = line.chars().count();
    (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len)
        && line.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
}

/// "男" wins whenever it appears anywhere; otherwise "女"; otherwise nothing.
pub fn extract_gender(text: &str) -> Option<String> {
    [MALE, FEMALE]
        .into_iter()
        .find(|token| text.contains(token))
        .map(str::to_string)
}

/// Remainder of the line after the first address label (in label priority
/// order) that is followed by a colon.
pub fn extract_address(text: &str) -> Option<String> {
    ADDRESS
        .iter()
        .find_map(|pattern| pattern.captures(text))
        .map(|caps| caps[1].trim().to_string())
        .filter(|address| !address.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_name_first_qualifying_line() {
        let text = "\n简历编号：001\n  张三  \n李四";
        assert_eq!(extract_name(text), Some("张三".to_string()));
    }

    #[test]
    fn test_extract_name_length_bounds() {
        assert_eq!(extract_name("男\n张"), None);
        assert_eq!(extract_name("abcdefghijk"), None);
        assert_eq!(extract_name("John Smith"), Some("John Smith".to_string()));
    }

    #[test]
    fn test_extract_name_rejects_digits_and_punctuation() {
        assert_eq!(extract_name("2024\n电话:123"), None);
    }

    #[test]
    fn test_extract_gender_priority() {
        assert_eq!(extract_gender("性别：女\n男朋友"), Some("男".to_string()));
        assert_eq!(extract_gender("性别：女"), Some("女".to_string()));
        assert_eq!(extract_gender("no marker"), None);
    }

    #[test]
    fn test_extract_address_label_priority() {
        let text = "现居：上海市浦东新区\n地址：北京市海淀区中关村大街1号";
        assert_eq!(
            extract_address(text),
            Some("北京市海淀区中关村大街1号".to_string())
        );
    }

    #[test]
    fn test_extract_address_half_width_colon() {
        assert_eq!(
            extract_address("居住地: 杭州 \r\n电话"),
            Some("杭州".to_string())
        );
    }

    #[test]
    fn test_extract_address_requires_colon() {
        assert_eq!(extract_address("地址 北京"), None);
    }
}
