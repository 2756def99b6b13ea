//! Ring-topology evaluator assignment.
//!
//! The five blocks sit on a ring (A→B→C→D→E→A) and evaluator `i` receives
//! the union of block `i` and block `i+1 (mod 5)`: 26 items. Any two
//! adjacent evaluators share exactly one block (13 items) of deliberate
//! double coverage for the downstream inter-rater agreement computation;
//! non-adjacent evaluators share nothing. Exact adjacency is a design
//! constraint, not an emergent property — it is re-verified here.

use crate::core::ids::EvaluatorId;
use crate::corpus::item::{EVALUATOR_COUNT, GradedItem, ITEMS_PER_EVALUATOR};
use crate::partition::{Block, BlockLabel};
use thiserror::Error;
use tracing::debug;

/// Invariant violations of the assignment stage. Internal defects: the run
/// aborts rather than emitting inconsistent data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssignmentError {
    #[error("expected exactly {EVALUATOR_COUNT} evaluators, got {count}")]
    EvaluatorCount { count: usize },

    #[error("assignment for {evaluator} has {len} items, expected {ITEMS_PER_EVALUATOR}")]
    AssignmentSize { evaluator: EvaluatorId, len: usize },
}

/// The task set for one evaluator before reordering and issuance: the
/// concatenated union of two adjacent blocks.
#[derive(Debug, Clone)]
pub struct EvaluationAssignment {
    pub evaluator: EvaluatorId,
    pub blocks: (BlockLabel, BlockLabel),
    pub items: Vec<GradedItem>,
}

/// Map each of the five evaluators to its pair of adjacent blocks.
///
/// Blocks are disjoint by the partition invariant, so the union is a plain
/// concatenation; the 26-item size is still checked afterwards.
pub fn ring_assignments(
    blocks: &[Block; 5],
    evaluators: &[EvaluatorId],
) -> Result<Vec<EvaluationAssignment>, AssignmentError> {
    if evaluators.len() != EVALUATOR_COUNT {
        return Err(AssignmentError::EvaluatorCount {
            count: evaluators.len(),
        });
    }

    let mut assignments = Vec::with_capacity(EVALUATOR_COUNT);
    for (i, evaluator) in evaluators.iter().enumerate() {
        let first = &blocks[i];
        let second = &blocks[(i + 1) % EVALUATOR_COUNT];

        let mut items = Vec::with_capacity(ITEMS_PER_EVALUATOR);
        items.extend(first.items.iter().cloned());
        items.extend(second.items.iter().cloned());

        if items.len() != ITEMS_PER_EVALUATOR {
            return Err(AssignmentError::AssignmentSize {
                evaluator: evaluator.clone(),
                len: items.len(),
            });
        }

        debug!(
            "evaluator {} assigned blocks {} and {}",
            evaluator, first.label, second.label
        );
        assignments.push(EvaluationAssignment {
            evaluator: evaluator.clone(),
            blocks: (first.label, second.label),
            items,
        });
    }

    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition_blocks;
    use crate::selection::select_candidate;
    use crate::testkit::complete_pool;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn evaluators() -> Vec<EvaluatorId> {
        (1..=5).map(|i| EvaluatorId::new(format!("annotator{i}"))).collect()
    }

    fn assignments(seed: u64) -> Vec<EvaluationAssignment> {
        let pool = complete_pool("paper.pdf");
        let doc = select_candidate(&pool).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let blocks = partition_blocks(&doc, &mut rng).unwrap();
        ring_assignments(&blocks, &evaluators()).unwrap()
    }

    fn title_set(a: &EvaluationAssignment) -> HashSet<String> {
        a.items.iter().map(|i| i.title.clone()).collect()
    }

    #[test]
    fn test_each_evaluator_gets_twenty_six_items() {
        for assignment in assignments(3) {
            assert_eq!(assignment.items.len(), 26);
        }
    }

    #[test]
    fn test_adjacent_evaluators_share_exactly_one_block() {
        let assignments = assignments(3);
        for i in 0..5 {
            let a = title_set(&assignments[i]);
            let b = title_set(&assignments[(i + 1) % 5]);
            assert_eq!(a.intersection(&b).count(), 13);
        }
    }

    #[test]
    fn test_non_adjacent_evaluators_share_nothing() {
        let assignments = assignments(3);
        for i in 0..5 {
            let a = title_set(&assignments[i]);
            let b = title_set(&assignments[(i + 2) % 5]);
            assert_eq!(a.intersection(&b).count(), 0);
        }
    }

    #[test]
    fn test_blocks_follow_the_ring() {
        let assignments = assignments(3);
        for assignment in &assignments {
            assert_eq!(assignment.blocks.0.next(), assignment.blocks.1);
        }
    }

    #[test]
    fn test_wrong_evaluator_count_is_rejected() {
        let pool = complete_pool("paper.pdf");
        let doc = select_candidate(&pool).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let blocks = partition_blocks(&doc, &mut rng).unwrap();

        let four: Vec<EvaluatorId> =
            (1..=4).map(|i| EvaluatorId::new(format!("annotator{i}"))).collect();
        assert!(matches!(
            ring_assignments(&blocks, &four),
            Err(AssignmentError::EvaluatorCount { count: 4 })
        ));
    }
}
