//! Configuration file schema.
//!
//! Every section has serde defaults, so a config file only needs the keys
//! it wants to override.

use blindset_application::CurationParams;
use blindset_domain::{DEFAULT_BLIND_ID_LEN, EVALUATOR_COUNT, EvaluatorId, SegmenterConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected configuration values. Precondition failures: the run halts with
/// a clean error instead of panicking inside the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("evaluator name at position {index} is empty")]
    EmptyEvaluatorName { index: usize },
}

/// Root of `blindset.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub curation: CurationSection,
    pub segmenter: SegmenterSection,
    pub output: OutputSection,
}

/// `[curation]` — run parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurationSection {
    /// Fixed seed for reproducible runs; unset draws a fresh one
    pub seed: Option<u64>,
    /// The five evaluators, in ring order
    pub evaluators: Vec<String>,
    /// Length of minted blind identifiers
    pub blind_id_length: usize,
}

impl Default for CurationSection {
    fn default() -> Self {
        Self {
            seed: None,
            evaluators: (1..=EVALUATOR_COUNT)
                .map(|i| format!("annotator{i}"))
                .collect(),
            blind_id_length: DEFAULT_BLIND_ID_LEN,
        }
    }
}

/// `[segmenter]` — sentence merge rules. Unset lists fall back to the
/// built-in defaults, which reference outputs depend on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterSection {
    pub abbreviations: Option<Vec<String>>,
    pub fragment_starts: Option<Vec<String>>,
}

/// `[output]` — persistence options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Pretty-print the emitted JSON files
    pub pretty: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl FileConfig {
    /// Translate the file schema into run parameters.
    ///
    /// Blank evaluator names are rejected here, before anything reaches the
    /// engine.
    pub fn curation_params(&self) -> Result<CurationParams, ConfigError> {
        let defaults = SegmenterConfig::default();
        let segmenter = SegmenterConfig {
            abbreviations: self
                .segmenter
                .abbreviations
                .clone()
                .unwrap_or(defaults.abbreviations),
            fragment_starts: self
                .segmenter
                .fragment_starts
                .clone()
                .unwrap_or(defaults.fragment_starts),
        };

        let evaluators = self
            .curation
            .evaluators
            .iter()
            .enumerate()
            .map(|(index, name)| {
                EvaluatorId::try_new(name.clone())
                    .ok_or(ConfigError::EmptyEvaluatorName { index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CurationParams {
            seed: self.curation.seed,
            evaluators,
            blind_id_length: self.curation.blind_id_length,
            segmenter,
        })
    }
}
