//! Item source port
//!
//! Defines how the curation run reads its pool of graded items. The pool is
//! read once, before any computation, and treated as immutable for the rest
//! of the run. The returned sequence must be stable-ordered: the selector's
//! first-twelve tie-break is defined over this order.

use blindset_domain::GradedItem;
use thiserror::Error;

/// Errors that can occur while reading the item pool
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read item pool: {0}")]
    Io(String),

    #[error("malformed item record: {0}")]
    Malformed(String),
}

/// Source of the graded item pool
pub trait ItemSource {
    /// Load the full pool, in stable order.
    fn load_items(&self) -> Result<Vec<GradedItem>, SourceError>;
}
