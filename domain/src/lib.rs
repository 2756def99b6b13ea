//! Domain layer for blindset
//!
//! This crate contains the dataset assembly engine: the pure, deterministic
//! logic that turns a pool of graded items into blinded per-evaluator
//! evaluation tasks. It has no dependencies on infrastructure or
//! presentation concerns and performs no I/O.
//!
//! # Pipeline
//!
//! Data flows one way through five stages:
//!
//! 1. **Sentence segmentation** — item text is split into a stable,
//!    index-addressable sentence list ([`segment`]).
//! 2. **Candidate selection** — the unique complete source document
//!    (5 questions, each 1 canonical + 12 degraded items) is picked out of
//!    the pool ([`selection`]).
//! 3. **Block partitioning** — its 65 items are stratified into 5 blocks of
//!    13 with a canonical rotation ([`partition`]).
//! 4. **Ring assignment** — each of 5 evaluators receives the union of two
//!    adjacent blocks, 26 items with deliberate pairwise overlap
//!    ([`assignment::ring`]).
//! 5. **Anti-anchoring reorder + blind identifiers** — each evaluator's set
//!    is shuffled, same-question adjacencies are repaired, and opaque blind
//!    ids are minted ([`assignment::reorder`], [`assignment::blind`]).
//!
//! All randomized stages take an explicit `&mut impl Rng` so a run is fully
//! reproducible from a single seed.

pub mod assignment;
pub mod core;
pub mod corpus;
pub mod partition;
pub mod segment;
pub mod selection;

#[cfg(test)]
pub(crate) mod testkit;

// Re-export commonly used types
pub use assignment::{
    AssignedItem, FinalizedAssignment,
    blind::{BlindIdError, BlindIdMinter, DEFAULT_BLIND_ID_LEN},
    finalize_assignment,
    reorder::{ResidualAdjacency, reorder_anti_anchoring},
    ring::{AssignmentError, EvaluationAssignment, ring_assignments},
};
pub use core::{
    error::DomainError,
    ids::{BlindId, EvaluatorId, QuestionId, SourceId},
};
pub use corpus::{
    item::{
        BLOCK_COUNT, BLOCK_SIZE, DEGRADED_PER_QUESTION, EVALUATOR_COUNT, GradedItem, ITEMS_PER_DOCUMENT,
        ITEMS_PER_EVALUATOR, ITEMS_PER_QUESTION, ItemKind, QUESTION_COUNT, TOTAL_ASSIGNMENT_ROWS,
    },
    title::parse_noise_level,
};
pub use partition::{Block, BlockLabel, PartitionError, partition_blocks};
pub use segment::{SegmenterConfig, segment_sentences};
pub use selection::{QuestionGroup, SelectedDocument, SelectionError, select_candidate};
