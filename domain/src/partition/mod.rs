//! Block partitioning.
//!
//! Deterministically maps the 65 qualifying items of the selected document
//! onto 5 blocks of 13, labeled A..E:
//!
//! - the canonical item of question `k` (0-based) goes to block `k mod 5`,
//!   so each block holds exactly one canonical and the canonical's question
//!   rotates block to block;
//! - each question's 12 degraded items are shuffled with the caller's RNG
//!   and dealt round-robin over the four blocks *not* holding that
//!   question's canonical: degraded index `d` goes to block
//!   `(k + 1 + (d mod 4)) mod 5`. The `k + 1` offset keeps block membership
//!   from coupling systematically to the question.
//!
//! Every post-condition is re-checked after construction; a violation is an
//! internal defect and aborts the run.

use crate::core::ids::QuestionId;
use crate::corpus::item::{BLOCK_COUNT, BLOCK_SIZE, GradedItem, ITEMS_PER_DOCUMENT};
use crate::selection::SelectedDocument;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

/// Label of one of the five blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlockLabel {
    A,
    B,
    C,
    D,
    E,
}

impl BlockLabel {
    pub const ALL: [BlockLabel; BLOCK_COUNT] = [
        BlockLabel::A,
        BlockLabel::B,
        BlockLabel::C,
        BlockLabel::D,
        BlockLabel::E,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % BLOCK_COUNT]
    }

    /// The next block on the A→B→C→D→E→A ring.
    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

impl std::fmt::Display for BlockLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// One disjoint 13-item partition of the selected document.
#[derive(Debug, Clone)]
pub struct Block {
    pub label: BlockLabel,
    pub items: Vec<GradedItem>,
}

impl Block {
    /// The block's single canonical item.
    pub fn canonical(&self) -> Option<&GradedItem> {
        self.items.iter().find(|i| i.is_canonical)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Invariant violations of the partitioning stage. Internal defects: the
/// run aborts rather than emitting inconsistent data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PartitionError {
    #[error("block {label} has {len} items, expected {BLOCK_SIZE}")]
    BlockSize { label: BlockLabel, len: usize },

    #[error("block {label} holds {count} canonical items, expected exactly one")]
    CanonicalCount { label: BlockLabel, count: usize },

    #[error("canonical rotation broken: block {label} holds the canonical for {question}")]
    RotationBroken {
        label: BlockLabel,
        question: QuestionId,
    },

    #[error("partition covers {covered} distinct items, expected {ITEMS_PER_DOCUMENT}")]
    Coverage { covered: usize },
}

/// Partition the selected document into five blocks of thirteen.
///
/// The shuffle of each question's degraded items is the only randomized
/// step; with a fixed RNG seed the partition is fully reproducible.
pub fn partition_blocks(
    doc: &SelectedDocument,
    rng: &mut impl Rng,
) -> Result<[Block; BLOCK_COUNT], PartitionError> {
    let mut slots: [Vec<GradedItem>; BLOCK_COUNT] = std::array::from_fn(|_| Vec::new());

    for group in &doc.questions {
        let k = group.question.index();
        slots[k % BLOCK_COUNT].push(group.canonical.clone());

        let mut degraded: Vec<&GradedItem> = group.degraded.iter().collect();
        degraded.shuffle(rng);
        for (d, item) in degraded.into_iter().enumerate() {
            slots[(k + 1 + (d % 4)) % BLOCK_COUNT].push(item.clone());
        }
    }

    let blocks: [Block; BLOCK_COUNT] = std::array::from_fn(|i| Block {
        label: BlockLabel::from_index(i),
        items: std::mem::take(&mut slots[i]),
    });

    verify(&blocks)?;
    debug!("partitioned {} into {} blocks of {}", doc.source_id, BLOCK_COUNT, BLOCK_SIZE);
    Ok(blocks)
}

/// Re-check every partition post-condition.
fn verify(blocks: &[Block; BLOCK_COUNT]) -> Result<(), PartitionError> {
    let mut seen_titles: HashSet<&str> = HashSet::new();

    for block in blocks {
        if block.len() != BLOCK_SIZE {
            return Err(PartitionError::BlockSize {
                label: block.label,
                len: block.len(),
            });
        }

        let canonicals: Vec<&GradedItem> = block.items.iter().filter(|i| i.is_canonical).collect();
        if canonicals.len() != 1 {
            return Err(PartitionError::CanonicalCount {
                label: block.label,
                count: canonicals.len(),
            });
        }
        let question = canonicals[0].question_id;
        if question.index() % BLOCK_COUNT != block.label.index() {
            return Err(PartitionError::RotationBroken {
                label: block.label,
                question,
            });
        }

        for item in &block.items {
            seen_titles.insert(item.title.as_str());
        }
    }

    if seen_titles.len() != ITEMS_PER_DOCUMENT {
        return Err(PartitionError::Coverage {
            covered: seen_titles.len(),
        });
    }

    Ok(())
}
