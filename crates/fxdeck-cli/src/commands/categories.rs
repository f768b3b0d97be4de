//! `categories` and `add-category` commands.

use clap::Args;

use super::Context;
use super::common::{open_store, open_store_or_empty};

#[derive(Args)]
pub struct AddCategoryArgs {
    /// Category display name (e.g. "Lens Flares")
    name: String,
}

pub fn run(ctx: &Context) -> anyhow::Result<()> {
    let store = open_store(ctx)?;
    let categories = store.categories();

    println!("\nCategories ({}):\n", categories.len());
    for category in categories {
        let count = store.presets_in_category(category).len();
        println!("  {:30} ({} presets)", category, count);
    }

    Ok(())
}

pub fn add(args: AddCategoryArgs, ctx: &Context) -> anyhow::Result<()> {
    if args.name.trim().is_empty() {
        anyhow::bail!("Category name is required.");
    }

    let mut store = open_store_or_empty(ctx)?;
    let dir = store.add_category(&args.name)?;
    println!("Created category '{}' at {}", args.name, dir.display());
    Ok(())
}
