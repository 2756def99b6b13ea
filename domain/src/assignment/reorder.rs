//! Anti-anchoring reordering.
//!
//! An evaluator who scores two variants of the same question back to back
//! anchors on the first one. The reorderer shuffles the 26-item set fully
//! at random, then makes one left-to-right repair pass: whenever a position
//! repeats its predecessor's question, the first later item with a
//! different question is swapped in. Near the tail no such later item may
//! exist, so the repair falls back to swapping the duplicate into the
//! nearest earlier slot that accepts it without disturbing any pair the
//! scan has already resolved. The pass is bounded and non-recursive: each
//! position is examined once, and an input dominated by one question can
//! still leave residual adjacencies. That case is surfaced as a structured
//! warning, never silently fixed and never an error.

use crate::core::ids::{EvaluatorId, QuestionId};
use crate::corpus::item::GradedItem;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A same-question adjacency the repair scan could not resolve.
///
/// Accepted soft-failure mode of the heuristic; carried in the run output
/// so the curator can judge whether to re-run with another seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidualAdjacency {
    pub evaluator: EvaluatorId,
    /// 1-based display position of the item repeating its predecessor's
    /// question
    pub position: usize,
    pub question: QuestionId,
}

/// Shuffle `items` and repair same-question adjacencies in place.
///
/// Returns the adjacencies left unresolved (usually none for balanced
/// inputs). Deterministic for a fixed RNG.
pub fn reorder_anti_anchoring(
    evaluator: &EvaluatorId,
    items: &mut [GradedItem],
    rng: &mut impl Rng,
) -> Vec<ResidualAdjacency> {
    items.shuffle(rng);

    let mut residual = Vec::new();
    for i in 1..items.len() {
        if items[i].question_id != items[i - 1].question_id {
            continue;
        }

        let here = items[i].question_id;
        let swap_with = (i + 1..items.len())
            .find(|&j| items[j].question_id != here)
            .or_else(|| backward_slot(items, i));

        match swap_with {
            Some(j) => items.swap(i, j),
            None => {
                let adjacency = ResidualAdjacency {
                    evaluator: evaluator.clone(),
                    position: i + 1,
                    question: here,
                };
                warn!(
                    "residual anchoring adjacency for {} at position {} ({})",
                    adjacency.evaluator, adjacency.position, adjacency.question
                );
                residual.push(adjacency);
            }
        }
    }

    residual
}

/// Tail fallback: the nearest slot `k < i-1` that can take the duplicate at
/// `i` without breaking a pair the scan already resolved, and whose current
/// item fits at `i`.
fn backward_slot(items: &[GradedItem], i: usize) -> Option<usize> {
    let here = items[i].question_id;
    (1..i.saturating_sub(1)).rev().find(|&k| {
        items[k].question_id != here
            && items[k - 1].question_id != here
            && items[k + 1].question_id != here
            && items.get(i + 1).is_none_or(|next| next.question_id != items[k].question_id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{canonical_item, degraded_item};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn evaluator() -> EvaluatorId {
        EvaluatorId::new("annotator1")
    }

    /// Balanced 26-item set: at most 6 items per question.
    fn balanced_items() -> Vec<GradedItem> {
        let mut items = Vec::new();
        for question in 1..=5u8 {
            items.push(canonical_item("p.pdf", question));
            for idx in 0..if question == 5 { 5 } else { 4 } {
                items.push(degraded_item("p.pdf", question, idx));
            }
        }
        assert_eq!(items.len(), 26);
        items
    }

    /// Pathological set: one question holds 20 of 26 items, more than half.
    fn pathological_items() -> Vec<GradedItem> {
        let mut items: Vec<GradedItem> =
            (0..20).map(|idx| degraded_item("p.pdf", 1, idx)).collect();
        for question in 2..=5u8 {
            items.push(degraded_item("p.pdf", question, 0));
        }
        items.push(canonical_item("p.pdf", 2));
        items.push(canonical_item("p.pdf", 3));
        assert_eq!(items.len(), 26);
        items
    }

    fn adjacent_repeats(items: &[GradedItem]) -> usize {
        items
            .windows(2)
            .filter(|w| w[0].question_id == w[1].question_id)
            .count()
    }

    #[test]
    fn test_balanced_input_resolves_in_nearly_all_runs() {
        let mut clean_runs = 0;
        for seed in 0..200 {
            let mut items = balanced_items();
            let mut rng = StdRng::seed_from_u64(seed);
            let residual = reorder_anti_anchoring(&evaluator(), &mut items, &mut rng);
            if residual.is_empty() {
                assert_eq!(adjacent_repeats(&items), 0);
                clean_runs += 1;
            }
        }
        // Balanced inputs must come out fully repaired in at least 95% of
        // runs
        assert!(clean_runs >= 190, "only {clean_runs}/200 runs were clean");
    }

    #[test]
    fn test_pathological_input_raises_residual_warning() {
        let mut items = pathological_items();
        let mut rng = StdRng::seed_from_u64(11);
        let residual = reorder_anti_anchoring(&evaluator(), &mut items, &mut rng);

        // 20 of 26 items share one question: adjacencies cannot all be
        // repaired and the warning must be raised
        assert!(!residual.is_empty());
        assert!(residual.iter().all(|r| r.evaluator == evaluator()));
        assert!(residual.iter().all(|r| r.position >= 2 && r.position <= 26));
    }

    #[test]
    fn test_reorder_preserves_the_item_set() {
        let mut items = balanced_items();
        let mut expected: Vec<String> = items.iter().map(|i| i.title.clone()).collect();
        expected.sort();

        let mut rng = StdRng::seed_from_u64(5);
        reorder_anti_anchoring(&evaluator(), &mut items, &mut rng);

        let mut actual: Vec<String> = items.iter().map(|i| i.title.clone()).collect();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_same_seed_reproduces_order() {
        let order = |seed: u64| {
            let mut items = balanced_items();
            let mut rng = StdRng::seed_from_u64(seed);
            reorder_anti_anchoring(&evaluator(), &mut items, &mut rng);
            items.into_iter().map(|i| i.title).collect::<Vec<_>>()
        };
        assert_eq!(order(77), order(77));
    }
}
