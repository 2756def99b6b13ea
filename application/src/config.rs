//! Curation run parameters.

use blindset_domain::{DEFAULT_BLIND_ID_LEN, EVALUATOR_COUNT, EvaluatorId, SegmenterConfig};

/// Parameters for one curation run.
///
/// The seed is optional: production runs leave it unset and get a fresh one
/// drawn from OS entropy (the effective seed is always recorded in the run
/// manifest), while tests and replays pin it.
#[derive(Debug, Clone)]
pub struct CurationParams {
    /// Seed for the run RNG; None draws a fresh one
    pub seed: Option<u64>,
    /// The five evaluators, in ring order
    pub evaluators: Vec<EvaluatorId>,
    /// Length of minted blind identifiers
    pub blind_id_length: usize,
    /// Sentence segmenter merge rules
    pub segmenter: SegmenterConfig,
}

impl CurationParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_evaluators(mut self, evaluators: Vec<EvaluatorId>) -> Self {
        self.evaluators = evaluators;
        self
    }
}

impl Default for CurationParams {
    fn default() -> Self {
        Self {
            seed: None,
            evaluators: (1..=EVALUATOR_COUNT)
                .map(|i| EvaluatorId::new(format!("annotator{i}")))
                .collect(),
            blind_id_length: DEFAULT_BLIND_ID_LEN,
            segmenter: SegmenterConfig::default(),
        }
    }
}
