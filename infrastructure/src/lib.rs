//! Infrastructure layer for blindset
//!
//! Adapters implementing the application ports: JSON item ingestion, JSON
//! persistence of assembled runs, and file-based configuration loading.

pub mod config;
pub mod ingest;
pub mod persist;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig};
pub use ingest::JsonItemSource;
pub use persist::JsonAssignmentSink;
