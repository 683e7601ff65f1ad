//! Subcommand implementations.

pub mod config;
pub mod delete;
pub mod dirs;
pub mod duplicates;
pub mod import;
pub mod list;
mod output;

use std::path::PathBuf;

use tracing::debug;

use resumex_core::models::config::ResumexConfig;
use resumex_core::store::ResumeStore;

/// Global options shared by every subcommand.
pub struct Context {
    pub config_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

impl Context {
    /// Config file in effect: `--config`, else the per-user location.
    pub fn config_file(&self) -> PathBuf {
        self.config_path.clone().unwrap_or_else(default_config_path)
    }

    /// Load configuration and apply the `--data-dir` override.
    ///
    /// Without a config file the data lives in the per-user data directory.
    pub fn load_config(&self) -> anyhow::Result<ResumexConfig> {
        let path = self.config_file();

        let mut config = if path.exists() {
            debug!("Loading config from {}", path.display());
            ResumexConfig::from_file(&path)?
        } else if let Some(explicit) = &self.config_path {
            anyhow::bail!("Config file not found: {}", explicit.display());
        } else {
            let mut config = ResumexConfig::default();
            config.storage.data_dir = default_data_dir();
            config
        };

        if let Some(data_dir) = &self.data_dir {
            config.storage.data_dir = data_dir.clone();
        }

        Ok(config)
    }

    /// Store over the configured locations.
    pub fn open_store(&self) -> anyhow::Result<(ResumexConfig, ResumeStore)> {
        let config = self.load_config()?;
        debug!("Using data directory {}", config.storage.data_dir.display());
        let store = ResumeStore::new(config.storage.clone());
        Ok((config, store))
    }
}

pub fn default_config_path() -> PathBuf {
    ::dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("resumex")
        .join("config.json")
}

fn default_data_dir() -> PathBuf {
    ::dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("resumex")
}
