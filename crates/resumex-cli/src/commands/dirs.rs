//! Dirs command - manage the directory catalogue.

use clap::{Args, Subcommand};
use console::style;

use super::Context;

/// Arguments for the dirs command.
#[derive(Args)]
pub struct DirsArgs {
    #[command(subcommand)]
    command: DirsCommand,
}

#[derive(Subcommand)]
enum DirsCommand {
    /// List directories
    List,

    /// Add a directory
    Add {
        /// Directory name
        name: String,
    },
}

pub fn run(args: DirsArgs, ctx: &Context) -> anyhow::Result<()> {
    let (_, store) = ctx.open_store()?;

    match args.command {
        DirsCommand::List => {
            for directory in store.load_directories() {
                println!(
                    "{}  {}",
                    directory.name,
                    style(directory.created_time.format("%Y-%m-%d %H:%M:%S")).dim()
                );
            }
        }
        DirsCommand::Add { name } => {
            let name = name.trim();
            if name.is_empty() {
                anyhow::bail!("Directory name must not be empty");
            }

            if store.add_directory(name)? {
                println!("{} Added directory {}", style("✓").green(), name);
            } else {
                println!("{} Directory {} already exists", style("ℹ").blue(), name);
            }
        }
    }

    Ok(())
}
