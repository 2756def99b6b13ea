//! Core value objects and error types shared across the engine.

pub mod error;
pub mod ids;
