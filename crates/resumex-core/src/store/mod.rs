//! Persisted resume collection.
//!
//! The whole collection is read on every operation and rewritten in full on
//! every save. There is no locking; the last writer wins.

mod directories;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::{ResumexError, StorageError};
use crate::models::config::StorageConfig;
use crate::models::resume::{file_name_of, Resume};
use crate::resume::{parse_document, ResumeParser, RuleBasedParser};

/// Outcome of importing a single file.
#[derive(Debug)]
pub enum ImportOutcome {
    /// Extracted and admitted into the collection.
    Imported(Resume),
    /// A record with the same file name exists and replacing was not requested.
    Skipped,
    /// The file could not be extracted.
    Failed(ResumexError),
}

/// A file that could not be imported.
#[derive(Debug)]
pub struct ImportFailure {
    pub path: PathBuf,
    pub error: ResumexError,
}

/// Aggregated result of an import batch.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Newly admitted records, in input order.
    pub imported: Vec<Resume>,
    /// Files skipped because their name was already stored.
    pub skipped: Vec<PathBuf>,
    /// Files that failed extraction.
    pub failed: Vec<ImportFailure>,
}

impl ImportReport {
    /// Number of files processed.
    pub fn total(&self) -> usize {
        self.imported.len() + self.skipped.len() + self.failed.len()
    }
}

/// Store owning the persisted resume collection.
pub struct ResumeStore {
    config: StorageConfig,
    parser: Box<dyn ResumeParser>,
}

impl ResumeStore {
    /// Create a store over the given locations, using the rule-based parser.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            parser: Box::new(RuleBasedParser::new()),
        }
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Read the collection, failing on unreadable or malformed data.
    pub fn try_load(&self) -> Result<Vec<Resume>, StorageError> {
        read_collection(&self.config.resumes_path())
    }

    /// Read the collection. Any read failure degrades to an empty collection.
    pub fn load(&self) -> Vec<Resume> {
        match self.try_load() {
            Ok(resumes) => resumes,
            Err(e) => {
                warn!("Failed to load resumes, treating collection as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Replace the persisted collection with `resumes`.
    pub fn save(&self, resumes: &[Resume]) -> Result<(), StorageError> {
        write_collection(&self.config.resumes_path(), resumes)?;
        debug!("Saved {} resumes", resumes.len());
        Ok(())
    }

    /// Import files in order, skipping file names that are already stored
    /// unless `replace_existing` is set.
    ///
    /// Per-file failures are collected in the report and never abort the
    /// batch. The collection is written once at the end, and only if at
    /// least one file was imported; that write is the only error returned.
    pub fn import<P: AsRef<Path>>(
        &self,
        paths: &[P],
        replace_existing: bool,
    ) -> Result<ImportReport, StorageError> {
        self.import_with(paths, replace_existing, |_, _| {})
    }

    /// Like [`import`](Self::import), calling `on_file` after each file is
    /// processed.
    pub fn import_with<P, F>(
        &self,
        paths: &[P],
        replace_existing: bool,
        mut on_file: F,
    ) -> Result<ImportReport, StorageError>
    where
        P: AsRef<Path>,
        F: FnMut(&Path, &ImportOutcome),
    {
        let mut working = self.load();
        let mut report = ImportReport::default();

        for path in paths {
            let path = path.as_ref();
            let outcome = self.import_one(path, &mut working, replace_existing);
            on_file(path, &outcome);
            match outcome {
                ImportOutcome::Imported(resume) => {
                    debug!("Imported {} as {}", path.display(), resume.id);
                    report.imported.push(resume);
                }
                ImportOutcome::Skipped => {
                    debug!("Skipping {}: file name already imported", path.display());
                    report.skipped.push(path.to_path_buf());
                }
                ImportOutcome::Failed(error) => {
                    warn!("Failed to import {}: {}", path.display(), error);
                    report.failed.push(ImportFailure {
                        path: path.to_path_buf(),
                        error,
                    });
                }
            }
        }

        if !report.imported.is_empty() {
            self.save(&working)?;
        }

        info!(
            "Import finished: {} imported, {} skipped, {} failed",
            report.imported.len(),
            report.skipped.len(),
            report.failed.len()
        );
        Ok(report)
    }

    fn import_one(&self, path: &Path, working: &mut Vec<Resume>, replace_existing: bool) -> ImportOutcome {
        let file_name = file_name_of(path);
        let exists = working.iter().any(|r| r.file_name == file_name);

        if exists && !replace_existing {
            return ImportOutcome::Skipped;
        }

        // The prior record leaves the working set even if extraction fails.
        if exists {
            working.retain(|r| r.file_name != file_name);
        }

        let result = match parse_document(path, self.parser.as_ref()) {
            Ok(result) => result,
            Err(e) => return ImportOutcome::Failed(e),
        };
        for warning in &result.warnings {
            debug!("{}: {}", file_name, warning);
        }
        debug!("Extracted {} in {}ms", file_name, result.processing_time_ms);

        let mut resume = result.resume;
        resume.import_time = Local::now().naive_local();
        working.push(resume.clone());
        ImportOutcome::Imported(resume)
    }

    /// Remove the record with `id`. Returns whether it existed; nothing is
    /// written when it did not.
    pub fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let mut resumes = self.load();
        let Some(index) = resumes.iter().position(|r| r.id == id) else {
            debug!("Delete of unknown resume {}", id);
            return Ok(false);
        };

        let removed = resumes.remove(index);
        self.save(&resumes)?;
        info!("Deleted resume {} ({})", removed.id, removed.file_name);
        Ok(true)
    }

    /// Look up a record by identifier.
    pub fn get_by_id(&self, id: &str) -> Option<Resume> {
        self.load().into_iter().find(|r| r.id == id)
    }
}

/// Read a JSON array document. An absent file is an empty collection.
fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    if !path.exists() {
        debug!("{} does not exist yet", path.display());
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Pretty-print `items` and overwrite `path`, creating its directory if needed.
fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let content = serde_json::to_string_pretty(items).map_err(StorageError::Serialize)?;

    fs::write(path, content).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}
