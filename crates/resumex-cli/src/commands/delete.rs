//! Delete command - remove a resume by id.

use clap::Args;
use console::style;

use super::Context;

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Resume id
    id: String,
}

pub fn run(args: DeleteArgs, ctx: &Context) -> anyhow::Result<()> {
    let (_, store) = ctx.open_store()?;

    if !store.delete(&args.id)? {
        anyhow::bail!("Resume not found: {}", args.id);
    }

    println!("{} Deleted resume {}", style("✓").green(), args.id);
    Ok(())
}
