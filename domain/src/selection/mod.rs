//! Candidate document selection.
//!
//! Scans the full pool of graded items grouped by source document and picks
//! the unique document satisfying the completeness requirement: all five
//! questions present, each with exactly one canonical item and at least
//! twelve degraded variants.
//!
//! Selection is fully deterministic. Grouping preserves the first-seen order
//! of sources and the input order of items within a document, and when a
//! question has more than twelve degraded variants the first twelve in input
//! order are taken. The input collection is therefore part of the contract:
//! it must be a stable-ordered sequence.

use crate::core::ids::{QuestionId, SourceId};
use crate::corpus::item::{DEGRADED_PER_QUESTION, GradedItem, ITEMS_PER_DOCUMENT};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Precondition failures of the selection stage.
///
/// All variants are fatal: the run halts and nothing is emitted. The caller
/// must supply a corrected input set; nothing here is retried automatically.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("input pool is empty")]
    EmptyPool,

    #[error("no document in the pool satisfies the completeness requirement")]
    NoQualifyingDocument,

    /// Two or more complete documents were found. The engine does not
    /// disambiguate ties; it reports and halts.
    #[error("ambiguous selection: {} documents qualify", .sources.len())]
    AmbiguousSelection { sources: Vec<SourceId> },
}

/// One question's qualifying items: the canonical answer followed by
/// exactly twelve degraded variants in stable input order.
#[derive(Debug, Clone)]
pub struct QuestionGroup {
    pub question: QuestionId,
    pub canonical: GradedItem,
    pub degraded: Vec<GradedItem>,
}

impl QuestionGroup {
    /// Items of this group, canonical first.
    pub fn items(&self) -> impl Iterator<Item = &GradedItem> {
        std::iter::once(&self.canonical).chain(self.degraded.iter())
    }
}

/// The single complete document chosen by [`select_candidate`], with its 65
/// qualifying items arranged per question (Q1..Q5, canonical first).
#[derive(Debug, Clone)]
pub struct SelectedDocument {
    pub source_id: SourceId,
    pub questions: Vec<QuestionGroup>,
}

impl SelectedDocument {
    /// All 65 qualifying items, question by question, canonical first.
    pub fn items(&self) -> impl Iterator<Item = &GradedItem> {
        self.questions.iter().flat_map(QuestionGroup::items)
    }

    pub fn item_count(&self) -> usize {
        self.questions.iter().map(|g| 1 + g.degraded.len()).sum()
    }
}

/// Select the unique complete document from the pool.
///
/// Fails when the pool is empty, when no document is complete, or when more
/// than one is — an ambiguous pool is a fatal precondition failure, not a
/// tie to break.
pub fn select_candidate(pool: &[GradedItem]) -> Result<SelectedDocument, SelectionError> {
    if pool.is_empty() {
        return Err(SelectionError::EmptyPool);
    }

    // Group by source, preserving first-seen source order and item order
    let mut order: Vec<SourceId> = Vec::new();
    let mut by_source: HashMap<SourceId, Vec<&GradedItem>> = HashMap::new();
    for item in pool {
        by_source
            .entry(item.source_id.clone())
            .or_insert_with(|| {
                order.push(item.source_id.clone());
                Vec::new()
            })
            .push(item);
    }

    let mut qualifying: Vec<SelectedDocument> = Vec::new();
    for source in &order {
        let items = &by_source[source];
        match assemble_complete(source, items) {
            Some(doc) => {
                debug!("document {} is complete ({} items)", source, doc.item_count());
                qualifying.push(doc);
            }
            None => {
                debug!("document {} does not satisfy completeness, skipped", source);
            }
        }
    }

    match qualifying.len() {
        0 => Err(SelectionError::NoQualifyingDocument),
        1 => {
            let doc = qualifying.remove(0);
            debug_assert_eq!(doc.item_count(), ITEMS_PER_DOCUMENT);
            Ok(doc)
        }
        _ => Err(SelectionError::AmbiguousSelection {
            sources: qualifying.into_iter().map(|d| d.source_id).collect(),
        }),
    }
}

/// Check one document against the completeness requirement and, if it
/// passes, assemble its qualifying items.
///
/// A question with more than twelve degraded variants keeps the first
/// twelve in input order; a question with two or more canonical items is
/// malformed and disqualifies the whole document.
fn assemble_complete(source: &SourceId, items: &[&GradedItem]) -> Option<SelectedDocument> {
    let mut questions = Vec::with_capacity(QuestionId::COUNT as usize);

    for question in QuestionId::all() {
        let mut canonical: Option<GradedItem> = None;
        let mut degraded: Vec<GradedItem> = Vec::new();

        for item in items.iter().filter(|i| i.question_id == question) {
            if item.is_canonical {
                if canonical.is_some() {
                    // Two canonicals for one question: malformed document
                    return None;
                }
                canonical = Some((*item).clone());
            } else if degraded.len() < DEGRADED_PER_QUESTION {
                degraded.push((*item).clone());
            }
        }

        if degraded.len() < DEGRADED_PER_QUESTION {
            return None;
        }

        questions.push(QuestionGroup {
            question,
            canonical: canonical?,
            degraded,
        });
    }

    Some(SelectedDocument {
        source_id: source.clone(),
        questions,
    })
}
