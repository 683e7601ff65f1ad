//! List, search and show commands - read the stored collection.

use chrono::NaiveDate;
use clap::Args;
use console::style;

use resumex_core::models::resume::sort_most_recent_first;
use resumex_core::query::{SearchField, SearchQuery};

use super::output::{format_detail, format_resumes, OutputFormat};
use super::Context;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Keyword (empty matches everything)
    #[arg(default_value = "")]
    keyword: String,

    /// Field the keyword is matched against
    #[arg(long, value_enum, default_value = "all")]
    field: FieldArg,

    /// Earliest import date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Latest import date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Resume id
    id: String,

    /// Print the stored record as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum FieldArg {
    All,
    Name,
    FileName,
    Phone,
    Email,
}

impl From<FieldArg> for SearchField {
    fn from(field: FieldArg) -> Self {
        match field {
            FieldArg::All => SearchField::All,
            FieldArg::Name => SearchField::Name,
            FieldArg::FileName => SearchField::FileName,
            FieldArg::Phone => SearchField::Phone,
            FieldArg::Email => SearchField::Email,
        }
    }
}

pub fn run_list(args: ListArgs, ctx: &Context) -> anyhow::Result<()> {
    let (_, store) = ctx.open_store()?;

    let mut resumes = store.load();
    sort_most_recent_first(&mut resumes);

    print!("{}", format_resumes(&resumes, args.format)?);
    if matches!(args.format, OutputFormat::Text) {
        eprintln!("{} {} resumes", style("ℹ").blue(), resumes.len());
    }

    Ok(())
}

pub fn run_search(args: SearchArgs, ctx: &Context) -> anyhow::Result<()> {
    if let (Some(from), Some(to)) = (args.from, args.to) {
        if from > to {
            anyhow::bail!("--from {} is after --to {}", from, to);
        }
    }

    let (_, store) = ctx.open_store()?;

    let query = SearchQuery::new(args.keyword)
        .with_field(args.field.into())
        .with_start_date(args.from)
        .with_end_date(args.to);

    let mut resumes = store.search(&query);
    sort_most_recent_first(&mut resumes);

    print!("{}", format_resumes(&resumes, args.format)?);
    if matches!(args.format, OutputFormat::Text) {
        eprintln!("{} {} matching resumes", style("ℹ").blue(), resumes.len());
    }

    Ok(())
}

pub fn run_show(args: ShowArgs, ctx: &Context) -> anyhow::Result<()> {
    let (_, store) = ctx.open_store()?;

    let Some(resume) = store.get_by_id(&args.id) else {
        anyhow::bail!("Resume not found: {}", args.id);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resume)?);
    } else {
        print!("{}", format_detail(&resume));
    }

    Ok(())
}
