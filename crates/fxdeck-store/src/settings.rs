//! User settings loaded from a TOML file.
//!
//! ```toml
//! presets_dir = "/home/me/fx/presets"
//! log_level = "info"
//! author = "Studio A"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::paths::{DEFAULT_PRESETS_DIR, default_settings_path};

/// Settings shared by the command-line and graphical front-ends.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Presets root used when none is given on the command line.
    pub presets_dir: Option<PathBuf>,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: Option<String>,
    /// Author credited on newly created presets.
    pub author: Option<String>,
}

impl Settings {
    /// Parse settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load settings from `path`. The file must exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| StoreError::ReadSettings {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load settings from the platform default location, or defaults if that
    /// file does not exist.
    pub fn load_default() -> Result<Self, StoreError> {
        let path = default_settings_path();
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the presets root: explicit override, then setting, then
    /// [`DEFAULT_PRESETS_DIR`].
    pub fn resolve_presets_dir(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.presets_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PRESETS_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_toml() {
        let settings = Settings::from_toml(
            r#"
presets_dir = "/srv/presets"
log_level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(settings.presets_dir, Some(PathBuf::from("/srv/presets")));
        assert_eq!(settings.log_level.as_deref(), Some("debug"));
        assert!(settings.author.is_none());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = Settings::from_toml("presets_dir = [").unwrap_err();
        assert!(matches!(err, StoreError::ParseSettings(_)));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = Settings::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, StoreError::ReadSettings { .. }));
    }

    #[test]
    fn test_resolve_presets_dir_precedence() {
        let settings = Settings {
            presets_dir: Some(PathBuf::from("from_settings")),
            ..Settings::default()
        };
        assert_eq!(
            settings.resolve_presets_dir(Some(Path::new("from_flag"))),
            PathBuf::from("from_flag")
        );
        assert_eq!(
            settings.resolve_presets_dir(None),
            PathBuf::from("from_settings")
        );
        assert_eq!(
            Settings::default().resolve_presets_dir(None),
            PathBuf::from("presets")
        );
    }
}
