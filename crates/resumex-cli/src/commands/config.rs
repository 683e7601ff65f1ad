//! Config command - inspect and edit the resumex config file.

use std::fs;
use std::path::Path;

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use resumex_core::models::config::ResumexConfig;

use super::Context;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration as JSON
    Show,

    /// Write a config file with default values
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one value, addressed as section.field (e.g. storage.data_dir)
    Get { key: String },

    /// Change one value; the value is parsed as JSON, else taken as a string
    Set { key: String, value: String },

    /// Print where the config file is looked up
    Path,
}

pub fn run(args: ConfigArgs, ctx: &Context) -> anyhow::Result<()> {
    let file = ctx.config_file();

    match args.command {
        ConfigCommand::Show => {
            if !file.exists() {
                eprintln!("{} {} does not exist, using defaults", style("ℹ").blue(), file.display());
            }
            println!("{}", serde_json::to_string_pretty(&ctx.load_config()?)?);
        }
        ConfigCommand::Init { force } => {
            if file.exists() && !force {
                anyhow::bail!("{} already exists (pass --force to replace it)", file.display());
            }
            ensure_parent(&file)?;
            ResumexConfig::default().save(&file)?;
            println!("{} Wrote default configuration to {}", style("✓").green(), file.display());
        }
        ConfigCommand::Get { key } => {
            let tree = serde_json::to_value(ctx.load_config()?)?;
            let value = tree
                .pointer(&pointer_for(&key))
                .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}", key))?;
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        ConfigCommand::Set { key, value } => {
            let new_value = serde_json::from_str(&value).unwrap_or(Value::String(value));
            set_value(&file, &key, new_value)?;
        }
        ConfigCommand::Path => {
            let state = if file.exists() {
                style("present").green()
            } else {
                style("missing, run `resumex config init`").yellow()
            };
            println!("{} ({})", file.display(), state);
        }
    }

    Ok(())
}

/// `storage.data_dir` -> `/storage/data_dir`
fn pointer_for(key: &str) -> String {
    key.split('.').map(|part| format!("/{}", part)).collect()
}

/// Replace one existing leaf of the stored file. Unknown keys are rejected
/// instead of being silently dropped by deserialization.
fn set_value(file: &Path, key: &str, new_value: Value) -> anyhow::Result<()> {
    let current = if file.exists() {
        ResumexConfig::from_file(file)?
    } else {
        ResumexConfig::default()
    };

    let mut tree = serde_json::to_value(&current)?;
    let slot = tree
        .pointer_mut(&pointer_for(key))
        .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}", key))?;
    let shown = new_value.to_string();
    *slot = new_value;

    let updated: ResumexConfig = serde_json::from_value(tree)
        .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?;
    ensure_parent(file)?;
    updated.save(file)?;

    println!("{} {} = {}", style("✓").green(), key, shown);
    Ok(())
}

fn ensure_parent(file: &Path) -> anyhow::Result<()> {
    if let Some(dir) = file.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
