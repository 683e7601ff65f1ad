//! Configuration structures for the resume pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for resumex.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumexConfig {
    /// Where the record collection lives.
    pub storage: StorageConfig,

    /// Import behaviour.
    pub import: ImportConfig,

    /// Duplicate report settings.
    pub export: ExportConfig,
}

/// Locations of the persisted documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the data files.
    pub data_dir: PathBuf,

    /// File name of the resume collection.
    pub resumes_file: String,

    /// File name of the directory catalogue.
    pub directories_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            resumes_file: "resumes.json".to_string(),
            directories_file: "directories.json".to_string(),
        }
    }
}

impl StorageConfig {
    /// Storage rooted at `data_dir` with default file names.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Full path of the resume collection.
    pub fn resumes_path(&self) -> PathBuf {
        self.data_dir.join(&self.resumes_file)
    }

    /// Full path of the directory catalogue.
    pub fn directories_path(&self) -> PathBuf {
        self.data_dir.join(&self.directories_file)
    }
}

/// Import configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Replace records whose file name is already stored.
    pub replace_existing: bool,
}

/// Duplicate report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Report title line.
    pub title: String,

    /// `chrono` format string for timestamps in reports.
    pub timestamp_format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            title: "Resume duplicate check".to_string(),
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

impl ResumexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ResumexConfig =
            serde_json::from_str(r#"{ "storage": { "data_dir": "/srv/cv" } }"#).unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("/srv/cv"));
        assert_eq!(config.storage.resumes_file, "resumes.json");
        assert!(!config.import.replace_existing);
        assert_eq!(config.export.timestamp_format, "%Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn test_config_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ResumexConfig::default();
        config.import.replace_existing = true;
        config.save(&path).unwrap();

        let loaded = ResumexConfig::from_file(&path).unwrap();
        assert!(loaded.import.replace_existing);
        assert_eq!(
            loaded.storage.resumes_path(),
            PathBuf::from("data").join("resumes.json")
        );
    }
}
