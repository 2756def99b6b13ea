//! Use cases: the operations the outside world can ask of the engine.

pub mod assemble;
