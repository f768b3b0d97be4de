//! `list` command.

use clap::Args;

use super::Context;
use super::common::{open_store, print_entry, print_rule};

#[derive(Args)]
pub struct ListArgs {
    /// Only list presets in this category
    #[arg(long)]
    category: Option<String>,
}

pub fn run(args: ListArgs, ctx: &Context) -> anyhow::Result<()> {
    let store = open_store(ctx)?;

    let presets = match &args.category {
        Some(category) => store.presets_in_category(category),
        None => store.presets().collect(),
    };

    println!();
    print_rule();
    match &args.category {
        Some(category) => println!("Presets in category: {}", category),
        None => println!("All Presets ({} total)", presets.len()),
    }
    print_rule();
    println!();

    for preset in presets {
        print_entry(preset);
    }

    Ok(())
}
