//! Preset storage for fxdeck visual-effect presets.
//!
//! Presets are small JSON records (name, kind, default intensity, tags and an
//! open-ended parameter map) kept one file per preset under per-category
//! subdirectories of a presets root. [`PresetStore`] loads the whole tree into
//! memory, answers searches, and writes changes back file by file.
//!
//! # Features
//!
//! - **Store**: load, search, create, save, delete over a directory tree
//! - **Bundles**: export everything to one JSON file and import it elsewhere
//! - **Paths**: category/file naming rules and platform config locations
//! - **Settings**: optional TOML settings shared by front-ends
//!
//! # Example
//!
//! ```rust,no_run
//! use fxdeck_store::PresetStore;
//!
//! let mut store = PresetStore::open("presets").unwrap();
//! for preset in store.search("warm", Some("Color Grades"), None) {
//!     println!("{:4} {}", preset.id, preset.name);
//! }
//!
//! let preset = store
//!     .create("Neon Glow", "effect", "Stylized", 0.8)
//!     .with_description("Bloom with cyan tint")
//!     .with_param("blur_radius", 6.0);
//! store.save(&preset, None).unwrap();
//! store.export_all("all_presets.json").unwrap();
//! ```

mod bundle;
mod error;
mod preset;
mod settings;
mod store;

/// On-disk naming rules and platform paths.
pub mod paths;

pub use bundle::{BUNDLE_VERSION, PresetBundle};
pub use error::StoreError;
pub use preset::{Preset, PresetId, PresetType, UNASSIGNED_ID};
pub use settings::Settings;
pub use store::{ImportReport, LoadReport, PresetStore};

/// Re-exported so callers can build preset parameters without naming serde_json.
pub use serde_json::{Map as ParamMap, Value as ParamValue};
