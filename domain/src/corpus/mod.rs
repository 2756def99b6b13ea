//! Corpus entities: graded items and the corpus naming scheme.

pub mod item;
pub mod title;
