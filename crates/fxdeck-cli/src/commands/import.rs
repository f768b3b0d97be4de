//! `import` command.
//!
//! Imported presets are written to their category directories so they
//! persist after the command exits. A file already holding another preset is
//! never overwritten; the import is written beside it under a numbered name.

use clap::Args;
use fxdeck_store::paths::preset_path;
use std::path::PathBuf;

use super::Context;
use super::common::open_store_or_empty;

#[derive(Args)]
pub struct ImportArgs {
    /// Input JSON file produced by `export`
    input: PathBuf,
}

pub fn run(args: ImportArgs, ctx: &Context) -> anyhow::Result<()> {
    let mut store = open_store_or_empty(ctx)?;
    let report = store.import(&args.input)?;

    for &id in &report.imported {
        if let Some(preset) = store.get(id).cloned() {
            let path = store.save_unique(&preset)?;
            if path != preset_path(store.root(), &preset.category, &preset.name) {
                println!("  {} saved as {}", preset.name, path.display());
            }
        }
    }

    println!("Imported {} presets", report.count());
    if report.reassigned > 0 {
        println!("  ({} received new IDs to avoid conflicts)", report.reassigned);
    }
    Ok(())
}
