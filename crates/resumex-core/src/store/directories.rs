//! Directory catalogue, stored beside the resume collection.

use tracing::{debug, warn};

use super::{read_collection, write_collection, ResumeStore};
use crate::error::StorageError;
use crate::models::resume::ResumeDirectory;

impl ResumeStore {
    /// Read the directory catalogue. Read failures degrade to empty.
    pub fn load_directories(&self) -> Vec<ResumeDirectory> {
        match read_collection(&self.config.directories_path()) {
            Ok(directories) => directories,
            Err(e) => {
                warn!("Failed to load directories, treating catalogue as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Replace the persisted catalogue.
    pub fn save_directories(&self, directories: &[ResumeDirectory]) -> Result<(), StorageError> {
        write_collection(&self.config.directories_path(), directories)
    }

    /// Add a directory unless one with the same name exists. Returns whether
    /// it was added.
    pub fn add_directory(&self, name: &str) -> Result<bool, StorageError> {
        let mut directories = self.load_directories();
        if directories.iter().any(|d| d.name == name) {
            debug!("Directory '{}' already exists", name);
            return Ok(false);
        }

        directories.push(ResumeDirectory::new(name));
        self.save_directories(&directories)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::config::StorageConfig;
    use crate::store::ResumeStore;

    #[test]
    fn test_add_directory_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResumeStore::new(StorageConfig::in_dir(dir.path()));

        assert!(store.load_directories().is_empty());
        assert!(store.add_directory("后端").unwrap());
        assert!(!store.add_directory("后端").unwrap());
        assert!(store.add_directory("前端").unwrap());

        let names: Vec<String> = store.load_directories().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["后端", "前端"]);
    }

    #[test]
    fn test_directories_do_not_touch_resumes() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResumeStore::new(StorageConfig::in_dir(dir.path()));

        store.add_directory("default").unwrap();
        assert!(!store.config().resumes_path().exists());
        assert!(store.config().directories_path().exists());
    }
}
