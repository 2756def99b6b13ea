//! Assignment sink port
//!
//! Defines how a completed run is persisted. The sink receives the whole
//! [`AssemblyOutput`] in one call, only after the final coverage check has
//! passed — the engine never emits partial output.

use crate::output::AssemblyOutput;
use thiserror::Error;

/// Errors that can occur while persisting a run
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to persist assignments: {0}")]
    Io(String),

    #[error("failed to encode output: {0}")]
    Encode(String),
}

/// Destination for the completed assignment set
pub trait AssignmentSink {
    fn persist(&self, output: &AssemblyOutput) -> Result<(), SinkError>;
}
