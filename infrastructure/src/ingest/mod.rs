//! Item pool ingestion adapters.

pub mod json_source;

pub use json_source::JsonItemSource;
