//! Preset record format and per-file operations.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::StoreError;

/// Identifier of a preset within one store. `0` means "not yet assigned".
///
/// Signed because hand-written files may carry negative ids; those load as-is.
pub type PresetId = i64;

/// Sentinel id carried by presets that have not been given an id yet.
pub const UNASSIGNED_ID: PresetId = 0;

/// Well-known preset kinds.
///
/// [`Preset::preset_type`] stays a free string so that files with other
/// kinds still load; this enum is what front-ends offer when creating presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetType {
    /// Transition between two clips.
    Transition,
    /// Single-layer effect.
    Effect,
    /// Color grade.
    Color,
    /// Anything else.
    Custom,
}

impl PresetType {
    /// All known kinds, in menu order.
    pub const ALL: [PresetType; 4] = [
        PresetType::Transition,
        PresetType::Effect,
        PresetType::Color,
        PresetType::Custom,
    ];

    /// The string stored in the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            PresetType::Transition => "transition",
            PresetType::Effect => "effect",
            PresetType::Color => "color",
            PresetType::Custom => "custom",
        }
    }
}

impl fmt::Display for PresetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown preset type '{}' (expected one of: transition, effect, color, custom)",
                    s
                )
            })
    }
}

/// One visual-effect preset.
///
/// Presets are stored one per JSON file. Every field is optional on read and
/// falls back to the documented default, so hand-written or older files load.
///
/// # JSON Format
///
/// ```json
/// {
///   "name": "Warm Sunset",
///   "type": "color",
///   "id": 5,
///   "default_intensity": 0.7,
///   "description": "Golden-hour grade",
///   "category": "Color Grades",
///   "author": "Custom",
///   "version": "1.0",
///   "tags": ["warm", "film"],
///   "parameters": { "contrast": 0.2, "color_tint": { "r": 1.1, "g": 1.0, "b": 0.8 } }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Display name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Preset kind, normally one of [`PresetType`] but not enforced.
    #[serde(rename = "type", default = "default_type")]
    pub preset_type: String,

    /// Store-unique id; [`UNASSIGNED_ID`] until the store assigns one.
    #[serde(default)]
    pub id: PresetId,

    /// Intensity applied when the preset is first used, nominally 0.0-1.0.
    #[serde(default = "default_intensity")]
    pub default_intensity: f64,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Category display name; decides the on-disk subdirectory.
    #[serde(default)]
    pub category: String,

    /// Author credit.
    #[serde(default = "default_author")]
    pub author: String,

    /// Preset format/content version.
    #[serde(default = "default_version")]
    pub version: String,

    /// Search tags. `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// Opaque effect parameters, kept in file order. `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Map<String, Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_name() -> String {
    "Unnamed".to_string()
}

fn default_type() -> String {
    PresetType::Custom.as_str().to_string()
}

fn default_intensity() -> f64 {
    0.5
}

fn default_author() -> String {
    "Custom".to_string()
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Preset {
    /// Create a preset with the given name and default values everywhere else.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preset_type: default_type(),
            id: UNASSIGNED_ID,
            default_intensity: default_intensity(),
            description: String::new(),
            category: String::new(),
            author: default_author(),
            version: default_version(),
            tags: Vec::new(),
            parameters: Map::new(),
        }
    }

    /// Set the preset kind.
    pub fn with_type(mut self, preset_type: impl Into<String>) -> Self {
        self.preset_type = preset_type.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the default intensity.
    pub fn with_intensity(mut self, intensity: f64) -> Self {
        self.default_intensity = intensity;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Append tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Set one parameter, replacing any previous value under `key`.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Set the id.
    pub fn with_id(mut self, id: PresetId) -> Self {
        self.id = id;
        self
    }

    /// Whether the store has not assigned an id yet.
    pub fn is_unassigned(&self) -> bool {
        self.id == UNASSIGNED_ID
    }

    /// The kind as a [`PresetType`], if it is one of the known kinds.
    pub fn kind(&self) -> Option<PresetType> {
        self.preset_type.parse().ok()
    }

    /// Case-insensitive substring match against name, description and tags.
    ///
    /// `needle` must already be lower-cased. An empty needle matches everything.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Load a preset from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| StoreError::read_file(path, e))?;
        serde_json::from_str(&content).map_err(|e| StoreError::parse_json(path, e))
    }

    /// Parse a preset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Render the preset as indented JSON.
    ///
    /// Non-ASCII text is written literally, not as `\u` escapes.
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the preset to `path`, creating the parent directory if needed.
    ///
    /// Any existing file at `path` is overwritten.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::create_dir(parent, e))?;
        }

        let content = self.to_json()?;
        std::fs::write(path, content).map_err(|e| StoreError::write_file(path, e))?;
        Ok(())
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::new(default_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_preset_new_defaults() {
        let preset = Preset::new("Glow");
        assert_eq!(preset.name, "Glow");
        assert_eq!(preset.preset_type, "custom");
        assert_eq!(preset.id, UNASSIGNED_ID);
        assert_eq!(preset.default_intensity, 0.5);
        assert_eq!(preset.author, "Custom");
        assert_eq!(preset.version, "1.0");
        assert!(preset.tags.is_empty());
        assert!(preset.parameters.is_empty());
    }

    #[test]
    fn test_preset_builder() {
        let preset = Preset::new("Film Burn")
            .with_type("transition")
            .with_category("Transitions")
            .with_intensity(0.8)
            .with_description("Light leak wipe")
            .with_tags(["film", "leak"])
            .with_param("blur_radius", 4.0);

        assert_eq!(preset.kind(), Some(PresetType::Transition));
        assert_eq!(preset.category, "Transitions");
        assert_eq!(preset.default_intensity, 0.8);
        assert_eq!(preset.tags, vec!["film", "leak"]);
        assert_eq!(preset.parameters["blur_radius"], json!(4.0));
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let preset = Preset::from_json("{}").unwrap();
        assert_eq!(preset, Preset::default());
        assert_eq!(preset.name, "Unnamed");
    }

    #[test]
    fn test_unknown_type_is_kept() {
        let preset = Preset::from_json(r#"{"name":"X","type":"glitch"}"#).unwrap();
        assert_eq!(preset.preset_type, "glitch");
        assert_eq!(preset.kind(), None);
    }

    #[test]
    fn test_null_collections_read_as_empty() {
        let preset =
            Preset::from_json(r#"{"name":"NullTags","id":1,"tags":null,"parameters":null}"#)
                .unwrap();
        assert!(preset.tags.is_empty());
        assert!(preset.parameters.is_empty());
    }

    #[test]
    fn test_negative_id_is_kept() {
        let preset = Preset::from_json(r#"{"name":"Neg","id":-3}"#).unwrap();
        assert_eq!(preset.id, -3);
        assert!(!preset.is_unassigned());
    }

    #[test]
    fn test_parameters_keep_file_order() {
        let preset =
            Preset::from_json(r#"{"parameters":{"zeta":1,"alpha":{"r":1.0},"mid":[1,2]}}"#)
                .unwrap();
        let keys: Vec<_> = preset.parameters.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_to_json_field_names_and_unicode() {
        let preset = Preset::new("Café Noir").with_type("color").with_id(3);
        let json = preset.to_json().unwrap();
        assert!(json.contains("\"type\": \"color\""), "got: {json}");
        assert!(json.contains("\"id\": 3"), "got: {json}");
        assert!(json.contains("Café Noir"), "non-ASCII must stay literal: {json}");
        assert!(json.contains("\n  \"name\""), "expected two-space indent: {json}");
    }

    #[test]
    fn test_matches_lowercase() {
        let preset = Preset::new("Warm Sunset")
            .with_description("Golden hour")
            .with_tags(["Film"]);
        assert!(preset.matches_lowercase("sunset"));
        assert!(preset.matches_lowercase("golden"));
        assert!(preset.matches_lowercase("fil"));
        assert!(preset.matches_lowercase(""));
        assert!(!preset.matches_lowercase("cold"));
    }

    #[test]
    fn test_write_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("glow.json");
        let preset = Preset::new("Glow")
            .with_id(9)
            .with_param("tint", json!({"r": 1.0, "g": 0.9, "b": 0.8}));

        preset.write_to(&path).unwrap();
        let loaded = Preset::load(&path).unwrap();
        assert_eq!(loaded, preset);
    }

    #[test]
    fn test_load_invalid_json_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Preset::load(&path).unwrap_err();
        assert!(matches!(err, StoreError::ParseJson { .. }));
    }

    #[test]
    fn test_preset_type_parse() {
        assert_eq!("effect".parse::<PresetType>(), Ok(PresetType::Effect));
        assert!("Effect".parse::<PresetType>().is_err());
        assert_eq!(PresetType::Color.to_string(), "color");
    }
}
