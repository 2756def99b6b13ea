//! Output persistence adapters.

pub mod json_sink;

pub use json_sink::JsonAssignmentSink;
