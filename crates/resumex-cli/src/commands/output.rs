//! Rendering of resume records for the terminal.

use resumex_core::models::resume::Resume;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text table
    Text,
}

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_resumes(resumes: &[Resume], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(resumes)?),
        OutputFormat::Csv => format_csv(resumes),
        OutputFormat::Text => Ok(format_table(resumes)),
    }
}

fn format_csv(resumes: &[Resume]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "id",
        "name",
        "gender",
        "birth_date",
        "phone",
        "email",
        "id_card",
        "highest_school",
        "highest_major",
        "first_school",
        "first_major",
        "skills",
        "file_name",
        "import_time",
        "directory",
    ])?;

    for r in resumes {
        wtr.write_record([
            &r.id,
            &r.name,
            &r.gender,
            &r.birth_date.map(|d| d.to_string()).unwrap_or_default(),
            &r.phone,
            &r.email,
            &r.id_card,
            &r.highest_education_school,
            &r.highest_education_major,
            &r.first_education_school,
            &r.first_education_major,
            &r.skills.join(";"),
            &r.file_name,
            &r.import_time.format(TIME_FORMAT).to_string(),
            &r.directory,
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_table(resumes: &[Resume]) -> String {
    let mut output = String::new();

    for r in resumes {
        output.push_str(&format!(
            "{}  {}  {}  {}  {}  {}\n",
            r.id,
            r.import_time.format(TIME_FORMAT),
            or_dash(&r.name),
            or_dash(&r.phone),
            or_dash(&r.email),
            r.file_name
        ));
    }

    output
}

/// Multi-line description of a single record.
pub fn format_detail(r: &Resume) -> String {
    let mut output = String::new();

    output.push_str(&format!("Resume: {}\n", r.id));
    output.push_str(&format!("File: {}\n", r.file_name));
    output.push_str(&format!("Source: {}\n", r.original_file_path));
    output.push_str(&format!("Imported: {}\n", r.import_time.format(TIME_FORMAT)));
    output.push_str(&format!("Directory: {}\n", r.directory));
    output.push('\n');

    output.push_str(&format!("Name: {}\n", r.name));
    output.push_str(&format!("Gender: {}\n", r.gender));
    if let Some(birth_date) = r.birth_date {
        output.push_str(&format!("Birth date: {}\n", birth_date));
    }
    output.push_str(&format!("Address: {}\n", r.address));
    output.push_str(&format!("Phone: {}\n", r.phone));
    output.push_str(&format!("Email: {}\n", r.email));
    output.push_str(&format!("ID card: {}\n", r.id_card));
    output.push('\n');

    output.push_str("Education:\n");
    output.push_str(&format!(
        "  Highest: {} {}\n",
        r.highest_education_school, r.highest_education_major
    ));
    output.push_str(&format!(
        "  Bachelor: {} {}\n",
        r.first_education_school, r.first_education_major
    ));

    if !r.work_experiences.is_empty() {
        output.push_str("\nWork experience:\n");
        for work in &r.work_experiences {
            output.push_str(&format!("  {} - {}\n", work.company, work.position));
        }
    }

    if !r.skills.is_empty() {
        output.push_str(&format!("\nSkills: {}\n", r.skills.join(", ")));
    }

    output
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
