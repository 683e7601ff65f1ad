//! CLI application for resume ingestion and management.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, delete, dirs, duplicates, import, list, Context};

/// Resume manager - import resumes, search them and find duplicates
#[derive(Parser)]
#[command(name = "resumex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the resume collection (overrides the config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import resume documents (.docx, .pdf)
    Import(import::ImportArgs),

    /// List stored resumes, newest first
    List(list::ListArgs),

    /// Search stored resumes by keyword and import date
    Search(list::SearchArgs),

    /// Show one resume in full
    Show(list::ShowArgs),

    /// Delete a resume by id
    Delete(delete::DeleteArgs),

    /// Find resumes sharing a name, phone, email or ID card number
    Duplicates(duplicates::DuplicatesArgs),

    /// Manage resume directories
    Dirs(dirs::DirsArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let ctx = Context {
        config_path: cli.config,
        data_dir: cli.data_dir,
    };

    match cli.command {
        Commands::Import(args) => import::run(args, &ctx),
        Commands::List(args) => list::run_list(args, &ctx),
        Commands::Search(args) => list::run_search(args, &ctx),
        Commands::Show(args) => list::run_show(args, &ctx),
        Commands::Delete(args) => delete::run(args, &ctx),
        Commands::Duplicates(args) => duplicates::run(args, &ctx),
        Commands::Dirs(args) => dirs::run(args, &ctx),
        Commands::Config(args) => config::run(args, &ctx),
    }
}
