//! Import command - extract resumes from documents into the store.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use resumex_core::store::ImportOutcome;

use super::Context;

/// Arguments for the import command.
#[derive(Args)]
pub struct ImportArgs {
    /// Input files or glob patterns
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Replace resumes already imported from a file of the same name
    #[arg(long)]
    replace: bool,
}

pub fn run(args: ImportArgs, ctx: &Context) -> anyhow::Result<()> {
    let start = Instant::now();
    let (config, store) = ctx.open_store()?;
    let replace = args.replace || config.import.replace_existing;

    let files = expand_inputs(&args.inputs)?;
    if files.is_empty() {
        anyhow::bail!("No matching files found for: {}", args.inputs.join(" "));
    }

    println!(
        "{} Found {} files to import",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")?
            .progress_chars("=>-"),
    );

    let report = store.import_with(&files, replace, |path, outcome| {
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        match outcome {
            ImportOutcome::Imported(_) => pb.set_message(name),
            ImportOutcome::Skipped => debug!("{} already imported", name),
            ImportOutcome::Failed(_) => {}
        }
        pb.inc(1);
    })?;

    pb.finish_and_clear();

    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        report.total(),
        start.elapsed()
    );
    println!(
        "   {} imported, {} skipped, {} failed",
        style(report.imported.len()).green(),
        style(report.skipped.len()).yellow(),
        style(report.failed.len()).red()
    );

    if !report.skipped.is_empty() {
        println!();
        println!("{}", style("Already imported (use --replace to re-import):").yellow());
        for path in &report.skipped {
            println!("  - {}", path.display());
        }
    }

    if !report.failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for failure in &report.failed {
            println!("  - {}: {}", failure.path.display(), failure.error);
        }
    }

    Ok(())
}

/// Expand glob patterns. Inputs matching nothing are kept as literal paths
/// so that missing files show up as failures.
fn expand_inputs(inputs: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let matches: Vec<PathBuf> = glob(input)?
            .filter_map(|r| r.ok())
            .filter(|p| !p.is_dir())
            .collect();

        if matches.is_empty() {
            files.push(PathBuf::from(input));
        } else {
            files.extend(matches);
        }
    }

    Ok(files)
}
