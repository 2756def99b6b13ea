//! Shared fixtures for domain tests.

use crate::core::ids::{QuestionId, SourceId};
use crate::corpus::item::GradedItem;
use std::collections::BTreeMap;

pub fn canonical_item(source: &str, question: u8) -> GradedItem {
    GradedItem {
        title: format!("{source}_Q{question}_Orig_0"),
        source_id: SourceId::new(source),
        question_id: QuestionId::new(question),
        is_canonical: true,
        quality_labels: BTreeMap::from([("language".to_string(), 5.0)]),
        text: format!("Reference answer for question {question}. It is complete."),
    }
}

pub fn degraded_item(source: &str, question: u8, idx: usize) -> GradedItem {
    GradedItem {
        title: format!("{source}_Q{question}_L{}_{idx}", 1 + idx % 4),
        source_id: SourceId::new(source),
        question_id: QuestionId::new(question),
        is_canonical: false,
        quality_labels: BTreeMap::from([("language".to_string(), 3.0)]),
        text: format!("Degraded answer {idx} for question {question}. It has flaws."),
    }
}

/// A complete document: 5 questions, each 1 canonical + 12 degraded (65 items).
pub fn complete_pool(source: &str) -> Vec<GradedItem> {
    let mut pool = Vec::with_capacity(65);
    for question in 1..=5u8 {
        pool.push(canonical_item(source, question));
        for idx in 0..12 {
            pool.push(degraded_item(source, question, idx));
        }
    }
    pool
}

/// An incomplete document: missing a canonical for Q5 and short on degraded
/// variants for Q1.
pub fn incomplete_pool(source: &str) -> Vec<GradedItem> {
    let mut pool = Vec::new();
    for question in 1..=4u8 {
        pool.push(canonical_item(source, question));
    }
    for question in 1..=5u8 {
        let count = if question == 1 { 7 } else { 12 };
        for idx in 0..count {
            pool.push(degraded_item(source, question, idx));
        }
    }
    pool
}
