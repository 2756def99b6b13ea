//! Application layer for blindset
//!
//! Orchestrates the domain engine into the one-shot curation run and
//! defines the ports through which the run reads its item pool and
//! persists its output. Adapters for the ports live in the infrastructure
//! layer.

pub mod config;
pub mod output;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::CurationParams;
pub use output::{AssemblyOutput, AssignmentRow, AuditEntry, RunManifest};
pub use ports::{
    assignment_sink::{AssignmentSink, SinkError},
    item_source::{ItemSource, SourceError},
};
pub use use_cases::assemble::{AssembleDatasetUseCase, AssembleError, AssemblySummary};
