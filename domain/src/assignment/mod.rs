//! Evaluator assignment: ring-topology block unions, anti-anchoring
//! reordering, and blind identifier issuance.

pub mod blind;
pub mod reorder;
pub mod ring;

use crate::core::ids::BlindId;
use crate::corpus::item::GradedItem;
use blind::{BlindIdError, BlindIdMinter};
use rand::Rng;
use ring::EvaluationAssignment;

/// One positioned, blinded entry of an evaluator's task list.
#[derive(Debug, Clone)]
pub struct AssignedItem {
    pub item: GradedItem,
    /// 1-based position, stable once issued
    pub display_order: usize,
    pub blind_id: BlindId,
}

/// An evaluator's materialized task list: 26 items in display order, each
/// with its opaque blind identifier. Never mutated after issuance.
#[derive(Debug, Clone)]
pub struct FinalizedAssignment {
    pub evaluator: crate::core::ids::EvaluatorId,
    pub blocks: (crate::partition::BlockLabel, crate::partition::BlockLabel),
    pub items: Vec<AssignedItem>,
}

/// Attach display order and mint a blind id for every item of an already
/// reordered assignment.
///
/// Minting draws from `rng` through the shared `minter`, which enforces
/// system-wide uniqueness: a duplicate token is a fatal internal defect.
pub fn finalize_assignment(
    assignment: EvaluationAssignment,
    minter: &mut BlindIdMinter,
    rng: &mut impl Rng,
) -> Result<FinalizedAssignment, BlindIdError> {
    let EvaluationAssignment {
        evaluator,
        blocks,
        items,
    } = assignment;

    let mut assigned = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        assigned.push(AssignedItem {
            item,
            display_order: idx + 1,
            blind_id: minter.mint(rng)?,
        });
    }

    Ok(FinalizedAssignment {
        evaluator,
        blocks,
        items: assigned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::EvaluatorId;
    use crate::partition::BlockLabel;
    use crate::testkit::degraded_item;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_finalize_numbers_from_one_and_mints_unique_ids() {
        let items: Vec<_> = (0..4).map(|i| degraded_item("p.pdf", 1, i)).collect();
        let assignment = EvaluationAssignment {
            evaluator: EvaluatorId::new("annotator1"),
            blocks: (BlockLabel::A, BlockLabel::B),
            items,
        };

        let mut minter = BlindIdMinter::new(12);
        let mut rng = StdRng::seed_from_u64(9);
        let finalized = finalize_assignment(assignment, &mut minter, &mut rng).unwrap();

        let orders: Vec<usize> = finalized.items.iter().map(|a| a.display_order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);

        let ids: HashSet<&str> =
            finalized.items.iter().map(|a| a.blind_id.as_str()).collect();
        assert_eq!(ids.len(), 4);
    }
}
