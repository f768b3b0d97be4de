//! `search` command.

use clap::Args;

use super::Context;
use super::common::{open_store, summary_line};

#[derive(Args)]
pub struct SearchArgs {
    /// Text to find in names, descriptions and tags (case-insensitive)
    query: String,

    /// Only search this category
    #[arg(long)]
    category: Option<String>,

    /// Only search presets of this type
    #[arg(long = "type", value_name = "TYPE")]
    preset_type: Option<String>,
}

pub fn run(args: SearchArgs, ctx: &Context) -> anyhow::Result<()> {
    let store = open_store(ctx)?;
    let results = store.search(
        &args.query,
        args.category.as_deref(),
        args.preset_type.as_deref(),
    );

    println!("\nFound {} presets:\n", results.len());
    for preset in results {
        println!("{}", summary_line(preset));
    }

    Ok(())
}
