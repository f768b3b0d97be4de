//! `delete` command.

use clap::Args;
use fxdeck_store::PresetId;

use super::Context;
use super::common::open_store;

#[derive(Args)]
pub struct DeleteArgs {
    /// Preset id
    #[arg(allow_hyphen_values = true)]
    id: PresetId,
}

pub fn run(args: DeleteArgs, ctx: &Context) -> anyhow::Result<()> {
    let mut store = open_store(ctx)?;

    let name = store
        .get(args.id)
        .map(|p| p.name.clone())
        .ok_or_else(|| anyhow::anyhow!("Preset with ID {} not found.", args.id))?;

    store.delete(args.id)?;
    println!("Deleted preset '{}' (ID: {}).", name, args.id);
    Ok(())
}
