//! Persisted output shapes of a curation run.
//!
//! Two deliberately separated products: the flat assignment rows handed to
//! the evaluation phase, and the audit map that alone can translate a blind
//! id back to its source. The downstream report generator is keyed by blind
//! ids only and must never see `source_id` during the evaluation phase, so
//! `AssignmentRow` carries none.

use blindset_domain::{
    BlindId, EvaluatorId, ItemKind, QuestionId, ResidualAdjacency, SourceId,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One evaluation task row: what a single evaluator sees for a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub evaluator_id: EvaluatorId,
    /// Stable reference to the underlying item (its corpus title)
    pub item_reference: String,
    pub blind_id: BlindId,
    /// 1-based position, stable once issued
    pub display_order: usize,
    pub question: QuestionId,
    pub text: String,
    /// Index-addressable sentences for span-level annotation
    pub sentences: Vec<String>,
}

/// De-blinding record for one issued identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub source_id: SourceId,
    pub question_id: QuestionId,
    pub kind: ItemKind,
    /// Degradation level parsed from the corpus title, when available
    pub noise_level: Option<u8>,
}

/// Provenance of one curation run. Persisting the effective seed makes
/// every run replayable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub seed: u64,
    pub created_at: String,
    pub source_id: SourceId,
    pub evaluators: Vec<EvaluatorId>,
    pub row_count: usize,
    pub warning_count: usize,
}

/// The complete, internally consistent product of one run. Built in memory
/// and handed to the sink in one piece — there are no partial writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyOutput {
    pub rows: Vec<AssignmentRow>,
    pub audit_map: BTreeMap<BlindId, AuditEntry>,
    pub warnings: Vec<ResidualAdjacency>,
    pub manifest: RunManifest,
}
