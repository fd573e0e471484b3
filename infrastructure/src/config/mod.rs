//! File-based configuration

pub mod file_config;
pub mod loader;

pub use file_config::{AdvisorEntry, FileConfig, PanelConfig};
pub use loader::ConfigLoader;
