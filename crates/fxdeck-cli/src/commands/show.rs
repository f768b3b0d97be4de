//! `show` command.

use clap::Args;
use fxdeck_store::PresetId;

use super::Context;
use super::common::open_store;

#[derive(Args)]
pub struct ShowArgs {
    /// Preset id
    #[arg(allow_hyphen_values = true)]
    id: PresetId,
}

pub fn run(args: ShowArgs, ctx: &Context) -> anyhow::Result<()> {
    let store = open_store(ctx)?;
    let preset = store
        .get(args.id)
        .ok_or_else(|| anyhow::anyhow!("Preset with ID {} not found.", args.id))?;

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.chars().count()));
    println!();
    println!("ID:          {}", preset.id);
    println!("Type:        {}", preset.preset_type);
    println!("Category:    {}", preset.category);
    println!("Intensity:   {:.2}", preset.default_intensity);
    println!("Author:      {}", preset.author);
    println!("Version:     {}", preset.version);
    if let Some(path) = store.path_of(preset.id) {
        println!("File:        {}", path.display());
    }

    if !preset.description.is_empty() {
        println!();
        println!("Description: {}", preset.description);
    }
    if !preset.tags.is_empty() {
        println!("Tags:        {}", preset.tags.join(", "));
    }

    println!();
    println!("Parameters ({}):", preset.parameters.len());
    for (key, value) in &preset.parameters {
        println!("  {} = {}", key, value);
    }

    Ok(())
}
