//! `export` command.

use clap::Args;
use std::path::PathBuf;

use super::Context;
use super::common::open_store;

#[derive(Args)]
pub struct ExportArgs {
    /// Output JSON file
    output: PathBuf,
}

pub fn run(args: ExportArgs, ctx: &Context) -> anyhow::Result<()> {
    let store = open_store(ctx)?;
    let count = store.export_all(&args.output)?;
    println!("Exported {} presets to: {}", count, args.output.display());
    Ok(())
}
