//! CLI command implementations.

pub mod categories;
pub mod common;
pub mod create;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod search;
pub mod show;

use fxdeck_store::Settings;
use std::path::{Path, PathBuf};

/// State shared by every command: loaded settings and the resolved root.
pub struct Context {
    /// User settings.
    pub settings: Settings,
    /// Presets root after applying `--presets-dir` and settings.
    pub presets_dir: PathBuf,
}

impl Context {
    /// Resolve the presets root from an optional flag and the settings.
    pub fn new(settings: Settings, presets_dir: Option<&Path>) -> Self {
        let presets_dir = settings.resolve_presets_dir(presets_dir);
        Self {
            settings,
            presets_dir,
        }
    }
}
