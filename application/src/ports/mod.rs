//! Ports: interfaces the application layer depends on.
//!
//! Implementations (adapters) live in the infrastructure layer.

pub mod assignment_sink;
pub mod item_source;
