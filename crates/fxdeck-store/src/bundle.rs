//! Export/import bundle: many presets in one JSON document.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::StoreError;
use crate::preset::Preset;

/// Format version written into every bundle.
pub const BUNDLE_VERSION: &str = "1.0";

/// A bundle of presets as produced by export.
///
/// ```json
/// {
///   "version": "1.0",
///   "preset_count": 1,
///   "categories": ["Color Grades"],
///   "presets": [ { "name": "Warm Sunset", "type": "color", "id": 5 } ]
/// }
/// ```
///
/// Only `presets` is read back on import; the other fields are informational.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresetBundle {
    /// Bundle format version.
    #[serde(default = "default_version")]
    pub version: String,

    /// Number of presets at export time.
    #[serde(default)]
    pub preset_count: usize,

    /// Category names at export time.
    #[serde(default)]
    pub categories: Vec<String>,

    /// The presets themselves.
    #[serde(default)]
    pub presets: Vec<Preset>,
}

fn default_version() -> String {
    BUNDLE_VERSION.to_string()
}

impl PresetBundle {
    /// Build a bundle from categories and presets.
    pub fn new(categories: Vec<String>, presets: Vec<Preset>) -> Self {
        Self {
            version: default_version(),
            preset_count: presets.len(),
            categories,
            presets,
        }
    }

    /// Read a bundle from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| StoreError::read_file(path, e))?;
        serde_json::from_str(&content).map_err(|e| StoreError::parse_json(path, e))
    }

    /// Write the bundle as indented JSON, overwriting `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| StoreError::write_file(path, e))
    }
}

impl Default for PresetBundle {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_empty_bundle_shape() {
        let value = serde_json::to_value(PresetBundle::default()).unwrap();
        assert_eq!(
            value,
            json!({"version": "1.0", "preset_count": 0, "categories": [], "presets": []})
        );
    }

    #[test]
    fn test_new_counts_presets() {
        let bundle = PresetBundle::new(
            vec!["Looks".to_string()],
            vec![Preset::new("A"), Preset::new("B")],
        );
        assert_eq!(bundle.preset_count, 2);
    }

    #[test]
    fn test_missing_record_fields_default() {
        let bundle: PresetBundle =
            serde_json::from_str(r#"{"presets":[{"name":"Bare","id":4}]}"#).unwrap();
        let preset = &bundle.presets[0];
        assert_eq!(preset.name, "Bare");
        assert_eq!(preset.id, 4);
        assert!(preset.tags.is_empty());
        assert_eq!(preset.author, "Custom");
        assert_eq!(bundle.version, BUNDLE_VERSION);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = PresetBundle::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, StoreError::ReadFile { .. }));
    }

    #[test]
    fn test_load_rejects_wrong_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"presets": "nope"}"#).unwrap();
        let err = PresetBundle::load(&path).unwrap_err();
        assert!(matches!(err, StoreError::ParseJson { .. }));
    }
}
