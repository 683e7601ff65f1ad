//! Duplicate report rendering to plain text and docx.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use tracing::info;

use crate::document::DocxWriter;
use crate::duplicates::DuplicateReport;
use crate::error::ExportError;
use crate::models::config::ExportConfig;

const INDENT: &str = "    ";

/// Lines of a duplicate report. Blank strings separate sections.
pub fn report_lines(
    report: &DuplicateReport,
    generated_at: NaiveDateTime,
    config: &ExportConfig,
) -> Vec<String> {
    let stamp = |t: NaiveDateTime| t.format(&config.timestamp_format).to_string();

    let mut lines = vec![
        config.title.clone(),
        format!("Generated: {}", stamp(generated_at)),
        format!("Found {} duplicate groups", report.len()),
        String::new(),
    ];

    for group in report.iter() {
        lines.push(group.label());
        lines.push(format!("Duplicates: {}", group.members.len()));
        lines.push(String::new());

        for resume in &group.members {
            lines.push(format!("{INDENT}Name: {}", resume.name));
            lines.push(format!("{INDENT}File: {}", resume.file_name));
            lines.push(format!("{INDENT}Phone: {}", resume.phone));
            lines.push(format!("{INDENT}Email: {}", resume.email));
            lines.push(format!("{INDENT}ID card: {}", resume.id_card));
            lines.push(format!("{INDENT}Imported: {}", stamp(resume.import_time)));
            lines.push(String::new());
        }
    }

    lines
}

/// Write the report as UTF-8 text, stamped with the current time.
pub fn export_text(
    report: &DuplicateReport,
    destination: &Path,
    config: &ExportConfig,
) -> Result<(), ExportError> {
    let generated_at = Local::now().naive_local();
    let mut content = report_lines(report, generated_at, config).join("\n");
    content.push('\n');

    fs::write(destination, content)?;
    info!("Exported {} groups to {}", report.len(), destination.display());
    Ok(())
}

/// Write the report as a docx document, one paragraph per line.
pub fn export_document(
    report: &DuplicateReport,
    destination: &Path,
    config: &ExportConfig,
) -> Result<(), ExportError> {
    let generated_at = Local::now().naive_local();
    let mut writer = DocxWriter::new();
    for line in report_lines(report, generated_at, config) {
        writer.add_paragraph(line);
    }

    writer.save(destination)?;
    info!("Exported {} groups to {}", report.len(), destination.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duplicates::{find_duplicates_in, DuplicateCheck};
    use crate::models::resume::Resume;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn sample_report() -> DuplicateReport {
        let import_time = NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap();
        let resumes: Vec<Resume> = ["a.docx", "b.pdf"]
            .iter()
            .map(|file| {
                let mut r = Resume::new();
                r.name = "张三".to_string();
                r.file_name = file.to_string();
                r.phone = "13800000000".to_string();
                r.import_time = import_time;
                r
            })
            .collect();
        let check = DuplicateCheck {
            phone: true,
            ..DuplicateCheck::default()
        };
        find_duplicates_in(&resumes, &check)
    }

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_report_lines_layout() {
        let lines = report_lines(&sample_report(), generated_at(), &ExportConfig::default());

        assert_eq!(
            &lines[..7],
            &[
                "Resume duplicate check",
                "Generated: 2024-06-01 12:00:00",
                "Found 1 duplicate groups",
                "",
                "phone: 13800000000",
                "Duplicates: 2",
                "",
            ]
        );
        assert_eq!(lines[7], "    Name: 张三");
        assert_eq!(lines[8], "    File: a.docx");
        assert_eq!(lines[12], "    Imported: 2024-05-06 07:08:09");
        assert_eq!(lines[15], "    File: b.pdf");
        assert_eq!(lines.len(), 7 + 2 * 7);
    }

    #[test]
    fn test_report_is_deterministic() {
        let report = sample_report();
        let config = ExportConfig::default();
        assert_eq!(
            report_lines(&report, generated_at(), &config),
            report_lines(&report, generated_at(), &config)
        );
    }

    #[test]
    fn test_empty_report() {
        let lines = report_lines(&DuplicateReport::default(), generated_at(), &ExportConfig::default());
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "Found 0 duplicate groups");
    }

    #[test]
    fn test_export_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        export_text(&sample_report(), &path, &ExportConfig::default()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Resume duplicate check\n"));
        assert!(content.contains("phone: 13800000000\nDuplicates: 2\n"));
        assert!(content.contains("    Name: 张三\n"));
    }

    #[test]
    fn test_export_document_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.docx");

        export_document(&sample_report(), &path, &ExportConfig::default()).unwrap();

        let text = crate::document::extract_text(&path).unwrap();
        assert!(text.contains("Resume duplicate check"));
        assert!(text.contains("phone: 13800000000"));
        assert!(text.contains("File: b.pdf"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("report.txt");
        let err = export_text(&sample_report(), &path, &ExportConfig::default()).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
