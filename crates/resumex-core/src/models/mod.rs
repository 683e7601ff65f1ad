//! Data models and configuration.

pub mod config;
pub mod resume;
pub mod serde_time;
