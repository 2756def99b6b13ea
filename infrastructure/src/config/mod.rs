//! File-based configuration.

pub mod file_config;
pub mod loader;

pub use file_config::{ConfigError, FileConfig};
pub use loader::ConfigLoader;
