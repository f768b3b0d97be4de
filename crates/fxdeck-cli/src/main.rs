//! fxdeck CLI - command-line front-end for the fxdeck preset store.

mod commands;

use clap::{Parser, Subcommand};
use fxdeck_store::Settings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Log filter used when neither `RUST_LOG` nor the settings file set one.
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(name = "fxdeck")]
#[command(author, version, about = "fxdeck visual-effect preset manager", long_about = None)]
struct Cli {
    /// Presets root directory (default: settings file, then ./presets)
    #[arg(long, global = true, value_name = "DIR")]
    presets_dir: Option<PathBuf>,

    /// Settings file to use instead of the platform default
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List presets, optionally for one category
    List(commands::list::ListArgs),

    /// Search presets by name, description or tag
    Search(commands::search::SearchArgs),

    /// Create a new preset and save it
    Create(commands::create::CreateArgs),

    /// Show every field of one preset
    Show(commands::show::ShowArgs),

    /// Delete a preset and its file
    Delete(commands::delete::DeleteArgs),

    /// Export all presets to one JSON file
    Export(commands::export::ExportArgs),

    /// Import presets from an exported JSON file
    Import(commands::import::ImportArgs),

    /// List categories with preset counts
    Categories,

    /// Create an empty category
    AddCategory(commands::categories::AddCategoryArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::load_default()?,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(settings.log_level.as_deref().unwrap_or(DEFAULT_LOG_FILTER))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let ctx = commands::Context::new(settings, cli.presets_dir.as_deref());
    tracing::debug!(presets_dir = %ctx.presets_dir.display(), "resolved presets root");

    match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx),
        Commands::Search(args) => commands::search::run(args, &ctx),
        Commands::Create(args) => commands::create::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Delete(args) => commands::delete::run(args, &ctx),
        Commands::Export(args) => commands::export::run(args, &ctx),
        Commands::Import(args) => commands::import::run(args, &ctx),
        Commands::Categories => commands::categories::run(&ctx),
        Commands::AddCategory(args) => commands::categories::add(args, &ctx),
    }
}
