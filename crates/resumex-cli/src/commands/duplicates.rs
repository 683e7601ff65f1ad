//! Duplicates command - group resumes sharing identity fields.

use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Args;
use console::style;

use resumex_core::duplicates::{DuplicateCheck, DuplicateReport};
use resumex_core::export::{export_document, export_text, report_lines};
use resumex_core::models::config::ExportConfig;

use super::Context;

/// Arguments for the duplicates command.
#[derive(Args)]
pub struct DuplicatesArgs {
    /// Group by name
    #[arg(long)]
    name: bool,

    /// Group by phone number
    #[arg(long)]
    phone: bool,

    /// Group by email
    #[arg(long)]
    email: bool,

    /// Group by ID card number
    #[arg(long)]
    id_card: bool,

    /// Write the report to a .txt or .docx file
    #[arg(short, long)]
    export: Option<PathBuf>,
}

pub fn run(args: DuplicatesArgs, ctx: &Context) -> anyhow::Result<()> {
    let (config, store) = ctx.open_store()?;

    let mut check = DuplicateCheck {
        name: args.name,
        phone: args.phone,
        email: args.email,
        id_card: args.id_card,
    };
    if check.is_empty() {
        check = DuplicateCheck::all();
    }

    let report = store.find_duplicates(&check);

    match &args.export {
        Some(destination) => {
            export(&report, destination, &config.export)?;
            println!(
                "{} Found {} duplicate groups, report written to {}",
                style("✓").green(),
                report.len(),
                destination.display()
            );
        }
        None => {
            for line in report_lines(&report, Local::now().naive_local(), &config.export) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn export(report: &DuplicateReport, destination: &Path, config: &ExportConfig) -> anyhow::Result<()> {
    let extension = destination
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "txt" => export_text(report, destination, config)?,
        "docx" => export_document(report, destination, config)?,
        _ => anyhow::bail!("Unsupported report format '{}', use .txt or .docx", extension),
    }

    Ok(())
}
