//! `create` command.

use clap::Args;
use fxdeck_store::{ParamValue, PresetType};

use super::Context;
use super::common::{open_store_or_empty, parse_param};

#[derive(Args)]
pub struct CreateArgs {
    /// Preset name
    name: String,

    /// Preset type: transition, effect, color or custom
    #[arg(value_name = "TYPE")]
    preset_type: PresetType,

    /// Category name (e.g. "Color Grades")
    category: String,

    /// Default intensity (0.0-1.0)
    #[arg(long, default_value_t = 0.5)]
    intensity: f64,

    /// Description
    #[arg(long, default_value = "")]
    description: String,

    /// Tags
    #[arg(long, num_args = 1..)]
    tags: Vec<String>,

    /// Author (default: settings `author`, then "Custom")
    #[arg(long)]
    author: Option<String>,

    /// Preset content version
    #[arg(long = "preset-version", default_value = "1.0")]
    preset_version: String,

    /// Effect parameter as key=value; value is JSON or plain text (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    params: Vec<(String, ParamValue)>,
}

pub fn run(args: CreateArgs, ctx: &Context) -> anyhow::Result<()> {
    if args.name.trim().is_empty() {
        anyhow::bail!("Preset name is required.");
    }

    let mut store = open_store_or_empty(ctx)?;

    let author = args
        .author
        .or_else(|| ctx.settings.author.clone())
        .unwrap_or_else(|| "Custom".to_string());

    let mut preset = store
        .create(
            args.name,
            args.preset_type.as_str(),
            args.category,
            args.intensity,
        )
        .with_description(args.description)
        .with_author(author)
        .with_version(args.preset_version)
        .with_tags(args.tags);
    for (key, value) in args.params {
        preset = preset.with_param(key, value);
    }

    let path = store.save(&preset, None)?;

    println!("Saved preset to: {}", path.display());
    println!("Created preset: {} (ID: {})", preset.name, preset.id);
    Ok(())
}
