//! Skill list extraction.

use super::patterns::{SKILL_DELIMITERS, SKILLS};

/// For every skill label, the first labelled line is split on list
/// delimiters. Results of all labels are concatenated without dedup.
pub fn extract_skills(text: &str) -> Vec<String> {
    SKILLS
        .iter()
        .filter_map(|pattern| pattern.captures(text))
        .flat_map(|caps| split_skill_list(&caps[1]))
        .collect()
}

fn split_skill_list(list: &str) -> Vec<String> {
    list.split(&SKILL_DELIMITERS[..])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_mixed_delimiters() {
        assert_eq!(
            extract_skills("技能：Rust、Go， Python,SQL；Linux; ;"),
            vec!["Rust", "Go", "Python", "SQL", "Linux"]
        );
    }

    #[test]
    fn test_labels_accumulate_in_label_order() {
        let text = "熟悉：Docker\n技能：Rust\n精通：Rust";
        assert_eq!(extract_skills(text), vec!["Rust", "Docker", "Rust"]);
    }

    #[test]
    fn test_only_first_line_per_label() {
        let text = "技能：A\n技能：B";
        assert_eq!(extract_skills(text), vec!["A"]);
    }

    #[test]
    fn test_label_without_colon_ignored() {
        assert!(extract_skills("专业技能 Rust").is_empty());
    }
}
