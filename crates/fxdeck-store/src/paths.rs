//! On-disk naming rules and platform paths.
//!
//! A presets root holds one subdirectory per category. Directory and file
//! names are derived from display names by lower-casing and replacing spaces
//! with underscores; display names are recovered from directory names by the
//! reverse mapping plus title-casing.
//!
//! ```text
//! presets/
//! ├── color_grades/
//! │   ├── warm_sunset.json
//! │   └── preset_schema.json   (ignored)
//! └── transitions/
//!     └── film_burn.json
//! ```

use std::path::{Path, PathBuf};

use crate::preset::PresetId;

/// Application name used for directory paths.
const APP_NAME: &str = "fxdeck";

/// File name of the settings file inside the config directory.
const SETTINGS_FILE: &str = "config.toml";

/// Extension of preset files.
pub const PRESET_EXTENSION: &str = "json";

/// Schema file that may live next to presets and is never loaded as one.
pub const SCHEMA_FILE_NAME: &str = "preset_schema.json";

/// Default presets root, relative to the working directory.
pub const DEFAULT_PRESETS_DIR: &str = "presets";

/// Returns the user-specific configuration directory.
///
/// - Linux: `~/.config/fxdeck/`
/// - macOS: `~/Library/Application Support/fxdeck/`
/// - Windows: `%APPDATA%\fxdeck\`
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Default location of the settings file.
pub fn default_settings_path() -> PathBuf {
    user_config_dir().join(SETTINGS_FILE)
}

/// Display name for a category directory: underscores become spaces and the
/// result is title-cased.
///
/// ```rust
/// use fxdeck_store::paths::display_category_name;
///
/// assert_eq!(display_category_name("color_grades"), "Color Grades");
/// ```
pub fn display_category_name(dir_name: &str) -> String {
    title_case(&dir_name.replace('_', " "))
}

/// Directory name for a category display name.
pub fn category_dir_name(category: &str) -> String {
    slug(category)
}

/// File name (with extension) for a preset display name.
pub fn preset_file_name(name: &str) -> String {
    format!("{}.{}", slug(name), PRESET_EXTENSION)
}

/// File name for a preset whose default file name is taken:
/// `<slug>_<id>.json`, then `<slug>_<id>_<attempt>.json` from the second attempt.
pub fn numbered_preset_file_name(name: &str, id: PresetId, attempt: u32) -> String {
    if attempt <= 1 {
        format!("{}_{}.{}", slug(name), id, PRESET_EXTENSION)
    } else {
        format!("{}_{}_{}.{}", slug(name), id, attempt, PRESET_EXTENSION)
    }
}

/// Destination of a preset with the given category and name under `root`.
pub fn preset_path(root: &Path, category: &str, name: &str) -> PathBuf {
    root.join(category_dir_name(category))
        .join(preset_file_name(name))
}

/// Whether `path` names a loadable preset file (a `.json` file that is not
/// the schema file).
pub fn is_preset_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext == PRESET_EXTENSION)
        && path
            .file_name()
            .is_none_or(|name| name != SCHEMA_FILE_NAME)
}

fn slug(s: &str) -> String {
    s.to_lowercase().replace(' ', "_")
}

/// Upper-case each letter that follows a non-letter and lower-case the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_display_category_name() {
        assert_eq!(display_category_name("color_grades"), "Color Grades");
        assert_eq!(display_category_name("TRANSITIONS"), "Transitions");
        assert_eq!(display_category_name("80s_looks"), "80S Looks");
        assert_eq!(display_category_name("film-stock"), "Film-Stock");
        assert_eq!(display_category_name(""), "");
    }

    #[test]
    fn test_category_and_file_names() {
        assert_eq!(category_dir_name("Color Grades"), "color_grades");
        assert_eq!(preset_file_name("Warm Sunset"), "warm_sunset.json");
        assert_eq!(numbered_preset_file_name("Warm Sunset", 6, 1), "warm_sunset_6.json");
        assert_eq!(numbered_preset_file_name("Warm Sunset", 6, 3), "warm_sunset_6_3.json");
        assert_eq!(preset_file_name("Été Doré"), "été_doré.json");
    }

    #[test]
    fn test_preset_path() {
        let path = preset_path(Path::new("/root"), "Color Grades", "Warm Sunset");
        assert_eq!(path, PathBuf::from("/root/color_grades/warm_sunset.json"));
    }

    #[test]
    fn test_is_preset_file() {
        let dir = TempDir::new().unwrap();
        let preset = dir.path().join("glow.json");
        let schema = dir.path().join(SCHEMA_FILE_NAME);
        let text = dir.path().join("notes.txt");
        for p in [&preset, &schema, &text] {
            fs::write(p, "{}").unwrap();
        }

        assert!(is_preset_file(&preset));
        assert!(!is_preset_file(&schema));
        assert!(!is_preset_file(&text));
        assert!(!is_preset_file(dir.path()));
    }

    #[test]
    fn test_user_config_dir() {
        let dir = user_config_dir();
        assert!(dir.to_string_lossy().contains("fxdeck"));
        assert!(default_settings_path().ends_with("config.toml"));
    }
}
