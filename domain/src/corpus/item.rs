//! Graded item entity and the fixed geometry of a curation run.

use crate::core::ids::{QuestionId, SourceId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Distinct questions per document
pub const QUESTION_COUNT: usize = 5;
/// Degraded variants required per question
pub const DEGRADED_PER_QUESTION: usize = 12;
/// Items per question group: 1 canonical + 12 degraded
pub const ITEMS_PER_QUESTION: usize = 1 + DEGRADED_PER_QUESTION;
/// Items in a complete document
pub const ITEMS_PER_DOCUMENT: usize = QUESTION_COUNT * ITEMS_PER_QUESTION;
/// Disjoint partitions of a complete document
pub const BLOCK_COUNT: usize = 5;
/// Items per block
pub const BLOCK_SIZE: usize = ITEMS_PER_DOCUMENT / BLOCK_COUNT;
/// Evaluators on the ring
pub const EVALUATOR_COUNT: usize = 5;
/// Items per evaluator: the union of two adjacent blocks
pub const ITEMS_PER_EVALUATOR: usize = 2 * BLOCK_SIZE;
/// Flat assignment rows emitted by a full run
pub const TOTAL_ASSIGNMENT_ROWS: usize = EVALUATOR_COUNT * ITEMS_PER_EVALUATOR;

/// Whether an item is the reference-quality answer or a deliberately
/// quality-reduced variant of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// The non-degraded, reference-quality answer for a question
    Canonical,
    /// A quality-reduced variant, used to test evaluator discrimination
    Degraded,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Canonical => write!(f, "canonical"),
            ItemKind::Degraded => write!(f, "degraded"),
        }
    }
}

/// One candidate unit of evaluation text.
///
/// The engine treats items as immutable input: `quality_labels` is carried
/// through for downstream filtering but never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradedItem {
    /// Stable unique label in the corpus naming scheme,
    /// e.g. `2302.03287v3.pdf_Q1_L2_0` or `2302.03287v3.pdf_Q1_Orig_0`
    pub title: String,
    /// Origin document, stable across items
    pub source_id: SourceId,
    /// The question this item answers
    pub question_id: QuestionId,
    /// At most one canonical item exists per (source, question) pair
    pub is_canonical: bool,
    /// Named trait -> numeric score, passed through untouched
    pub quality_labels: BTreeMap<String, f64>,
    /// Raw content shown to evaluators
    pub text: String,
}

impl GradedItem {
    pub fn kind(&self) -> ItemKind {
        if self.is_canonical {
            ItemKind::Canonical
        } else {
            ItemKind::Degraded
        }
    }

    /// Degradation level parsed from the title: 0 for the canonical
    /// (`_Orig_`) form, `n` for `_L<n>_`, None when the title does not
    /// follow the corpus naming scheme.
    pub fn noise_level(&self) -> Option<u8> {
        super::title::parse_noise_level(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, canonical: bool) -> GradedItem {
        GradedItem {
            title: title.to_string(),
            source_id: SourceId::new("paper.pdf"),
            question_id: QuestionId::new(1),
            is_canonical: canonical,
            quality_labels: BTreeMap::new(),
            text: "Some answer text.".to_string(),
        }
    }

    #[test]
    fn test_geometry_constants_are_consistent() {
        assert_eq!(ITEMS_PER_DOCUMENT, 65);
        assert_eq!(BLOCK_SIZE, 13);
        assert_eq!(ITEMS_PER_EVALUATOR, 26);
        assert_eq!(TOTAL_ASSIGNMENT_ROWS, 130);
    }

    #[test]
    fn test_kind_follows_canonical_flag() {
        assert_eq!(item("paper.pdf_Q1_Orig_0", true).kind(), ItemKind::Canonical);
        assert_eq!(item("paper.pdf_Q1_L3_2", false).kind(), ItemKind::Degraded);
    }

    #[test]
    fn test_noise_level_from_title() {
        assert_eq!(item("paper.pdf_Q1_Orig_0", true).noise_level(), Some(0));
        assert_eq!(item("paper.pdf_Q1_L3_2", false).noise_level(), Some(3));
        assert_eq!(item("freeform title", false).noise_level(), None);
    }
}
