//! Error types for preset store operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the preset store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The configured presets root does not exist
    #[error("presets directory not found: '{0}'")]
    RootNotFound(PathBuf),

    /// Failed to read a file or directory
    #[error("failed to read '{path}': {source}")]
    ReadFile {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to remove a preset file
    #[error("failed to remove file '{path}': {source}")]
    RemoveFile {
        /// Path of the file that could not be removed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a JSON document
    #[error("failed to parse JSON in '{path}': {source}")]
    ParseJson {
        /// Path of the malformed document.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize JSON
    #[error("failed to serialize JSON: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// Failed to read the settings file
    #[error("failed to read settings '{path}': {source}")]
    ReadSettings {
        /// Path of the settings file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the settings file
    #[error("failed to parse settings: {0}")]
    ParseSettings(#[from] toml::de::Error),
}

impl StoreError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create a remove file error.
    pub fn remove_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::RemoveFile {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON parse error.
    pub fn parse_json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StoreError::ParseJson {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    fn mock_json_err() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }

    #[test]
    fn read_file_factory_produces_correct_variant() {
        let err = StoreError::read_file("/some/path", mock_io_err());
        assert!(
            matches!(err, StoreError::ReadFile { ref path, .. } if path == std::path::Path::new("/some/path"))
        );
    }

    #[test]
    fn remove_file_factory_produces_correct_variant() {
        let err = StoreError::remove_file("/gone.json", mock_io_err());
        assert!(
            matches!(err, StoreError::RemoveFile { ref path, .. } if path == std::path::Path::new("/gone.json"))
        );
    }

    #[test]
    fn root_not_found_display() {
        let err = StoreError::RootNotFound(PathBuf::from("presets"));
        assert_eq!(err.to_string(), "presets directory not found: 'presets'");
    }

    #[test]
    fn write_file_display() {
        let err = StoreError::write_file("/a/b.json", mock_io_err());
        let msg = err.to_string();
        assert!(msg.contains("failed to write file"), "got: {msg}");
        assert!(msg.contains("/a/b.json"), "got: {msg}");
    }

    #[test]
    fn parse_json_display_names_path() {
        let err = StoreError::parse_json("/bundle.json", mock_json_err());
        let msg = err.to_string();
        assert!(msg.contains("failed to parse JSON"), "got: {msg}");
        assert!(msg.contains("/bundle.json"), "got: {msg}");
    }

    #[test]
    fn io_variants_expose_source() {
        assert!(StoreError::read_file("/x", mock_io_err()).source().is_some());
        assert!(StoreError::write_file("/x", mock_io_err()).source().is_some());
        assert!(StoreError::create_dir("/x", mock_io_err()).source().is_some());
        assert!(StoreError::remove_file("/x", mock_io_err()).source().is_some());
    }

    #[test]
    fn parse_json_exposes_source() {
        let err = StoreError::parse_json("/x", mock_json_err());
        assert!(err.source().is_some());
    }

    #[test]
    fn root_not_found_source_is_none() {
        let err = StoreError::RootNotFound(PathBuf::from("/x"));
        assert!(err.source().is_none());
    }
}
