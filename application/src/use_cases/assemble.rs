//! Assemble dataset use case
//!
//! Orchestrates the full curation run: load the pool, select the candidate
//! document, partition it into blocks, map evaluators onto the block ring,
//! reorder each assignment against anchoring, mint blind identifiers,
//! segment the item texts, run the final coverage check, and only then
//! persist. The run either completes and emits a complete, internally
//! consistent assignment set, or fails and produces nothing.

use crate::config::CurationParams;
use crate::output::{AssemblyOutput, AssignmentRow, AuditEntry, RunManifest};
use crate::ports::assignment_sink::{AssignmentSink, SinkError};
use crate::ports::item_source::{ItemSource, SourceError};
use blindset_domain::{
    AssignmentError, BlindIdError, BlindIdMinter, EVALUATOR_COUNT, EvaluatorId,
    FinalizedAssignment, ITEMS_PER_EVALUATOR, PartitionError, ResidualAdjacency, SelectionError,
    SourceId, TOTAL_ASSIGNMENT_ROWS, finalize_assignment, partition_blocks,
    reorder_anti_anchoring, ring_assignments, segment_sentences, select_candidate,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during a curation run
#[derive(Error, Debug)]
pub enum AssembleError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Partition(#[from] PartitionError),

    #[error(transparent)]
    Assignment(#[from] AssignmentError),

    #[error(transparent)]
    BlindId(#[from] BlindIdError),

    /// The assembled output failed the final count/coverage check.
    /// Internal defect: nothing is persisted.
    #[error("coverage check failed: {0}")]
    CoverageCheckFailed(String),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// What the caller gets back from a successful run.
#[derive(Debug, Clone)]
pub struct AssemblySummary {
    /// The effective seed (drawn fresh when none was configured)
    pub seed: u64,
    pub source_id: SourceId,
    pub row_count: usize,
    pub warnings: Vec<ResidualAdjacency>,
}

/// Use case for running one dataset assembly.
pub struct AssembleDatasetUseCase<S: ItemSource, K: AssignmentSink> {
    source: S,
    sink: K,
}

impl<S: ItemSource, K: AssignmentSink> AssembleDatasetUseCase<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self { source, sink }
    }

    /// Execute one curation run.
    pub fn execute(&self, params: &CurationParams) -> Result<AssemblySummary, AssembleError> {
        let pool = self.source.load_items()?;
        info!("loaded pool of {} graded items", pool.len());

        let seed = params.seed.unwrap_or_else(|| rand::thread_rng().next_u64());
        info!("curation run seed: {seed}");
        let mut rng = StdRng::seed_from_u64(seed);

        let doc = select_candidate(&pool)?;
        info!("selected document {} ({} items)", doc.source_id, doc.item_count());

        let blocks = partition_blocks(&doc, &mut rng)?;

        // One sub-seed per evaluator: each reordering runs off its own RNG,
        // so the result does not depend on the order the evaluators are
        // processed in, while still deriving from the single run seed.
        let sub_seeds: Vec<u64> =
            (0..EVALUATOR_COUNT).map(|_| rng.next_u64()).collect();

        let assignments = ring_assignments(&blocks, &params.evaluators)?;

        let mut minter = BlindIdMinter::new(params.blind_id_length);
        let mut warnings: Vec<ResidualAdjacency> = Vec::new();
        let mut finalized: Vec<FinalizedAssignment> = Vec::new();

        for (mut assignment, sub_seed) in assignments.into_iter().zip(sub_seeds) {
            let mut evaluator_rng = StdRng::seed_from_u64(sub_seed);
            warnings.extend(reorder_anti_anchoring(
                &assignment.evaluator,
                &mut assignment.items,
                &mut evaluator_rng,
            ));
            finalized.push(finalize_assignment(assignment, &mut minter, &mut rng)?);
        }

        if !warnings.is_empty() {
            warn!("{} residual anchoring adjacencies in this run", warnings.len());
        }

        let output = self.build_output(seed, &doc.source_id, params, finalized, warnings)?;
        verify_coverage(&output, &params.evaluators)?;

        self.sink.persist(&output)?;
        info!("persisted {} assignment rows", output.rows.len());

        Ok(AssemblySummary {
            seed,
            source_id: output.manifest.source_id.clone(),
            row_count: output.rows.len(),
            warnings: output.warnings,
        })
    }

    fn build_output(
        &self,
        seed: u64,
        source_id: &SourceId,
        params: &CurationParams,
        finalized: Vec<FinalizedAssignment>,
        warnings: Vec<ResidualAdjacency>,
    ) -> Result<AssemblyOutput, AssembleError> {
        let mut rows = Vec::with_capacity(TOTAL_ASSIGNMENT_ROWS);
        let mut audit_map = std::collections::BTreeMap::new();

        for assignment in finalized {
            for assigned in assignment.items {
                audit_map.insert(
                    assigned.blind_id.clone(),
                    AuditEntry {
                        source_id: assigned.item.source_id.clone(),
                        question_id: assigned.item.question_id,
                        kind: assigned.item.kind(),
                        noise_level: assigned.item.noise_level(),
                    },
                );
                rows.push(AssignmentRow {
                    evaluator_id: assignment.evaluator.clone(),
                    item_reference: assigned.item.title.clone(),
                    blind_id: assigned.blind_id,
                    display_order: assigned.display_order,
                    question: assigned.item.question_id,
                    sentences: segment_sentences(&assigned.item.text, &params.segmenter),
                    text: assigned.item.text,
                });
            }
        }

        let manifest = RunManifest {
            seed,
            created_at: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            source_id: source_id.clone(),
            evaluators: params.evaluators.clone(),
            row_count: rows.len(),
            warning_count: warnings.len(),
        };

        Ok(AssemblyOutput {
            rows,
            audit_map,
            warnings,
            manifest,
        })
    }
}

/// Final count/coverage check, run after the full in-memory computation and
/// before anything is persisted.
fn verify_coverage(
    output: &AssemblyOutput,
    evaluators: &[EvaluatorId],
) -> Result<(), AssembleError> {
    let fail = |msg: String| Err(AssembleError::CoverageCheckFailed(msg));

    if output.rows.len() != TOTAL_ASSIGNMENT_ROWS {
        return fail(format!(
            "expected {TOTAL_ASSIGNMENT_ROWS} rows, built {}",
            output.rows.len()
        ));
    }

    for evaluator in evaluators {
        let count = output
            .rows
            .iter()
            .filter(|r| &r.evaluator_id == evaluator)
            .count();
        if count != ITEMS_PER_EVALUATOR {
            return fail(format!(
                "evaluator {evaluator} has {count} rows, expected {ITEMS_PER_EVALUATOR}"
            ));
        }
    }

    // Ring overlap doubles every item exactly once
    let mut reference_counts: HashMap<&str, usize> = HashMap::new();
    for row in &output.rows {
        *reference_counts.entry(row.item_reference.as_str()).or_default() += 1;
    }
    if let Some((reference, count)) =
        reference_counts.iter().find(|&(_, &count)| count != 2)
    {
        return fail(format!(
            "item {reference} is assigned {count} times, expected exactly 2"
        ));
    }

    if output.audit_map.len() != TOTAL_ASSIGNMENT_ROWS {
        return fail(format!(
            "audit map holds {} blind ids, expected {TOTAL_ASSIGNMENT_ROWS}",
            output.audit_map.len()
        ));
    }

    Ok(())
}
