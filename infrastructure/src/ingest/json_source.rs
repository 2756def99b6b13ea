//! JSON-backed item source
//!
//! Reads the graded item pool from a single JSON file holding an array of
//! item records. Records are kept in file order, which fixes the selector's
//! first-twelve tie-break.

use blindset_application::{ItemSource, SourceError};
use blindset_domain::{GradedItem, QuestionId, SourceId};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::debug;

/// On-disk shape of one pool record.
///
/// `is_canonical` and `quality_labels` are optional so hand-written
/// fixtures stay short.
#[derive(Debug, Deserialize)]
struct ItemRecord {
    title: String,
    source_id: String,
    question: u8,
    #[serde(default)]
    is_canonical: bool,
    #[serde(default)]
    quality_labels: BTreeMap<String, f64>,
    text: String,
}

/// Item source reading a JSON array of graded items from disk
pub struct JsonItemSource {
    path: PathBuf,
}

impl JsonItemSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn convert(record: ItemRecord) -> Result<GradedItem, SourceError> {
        let question_id = QuestionId::try_new(record.question).ok_or_else(|| {
            SourceError::Malformed(format!(
                "item '{}': question {} is out of range 1..=5",
                record.title, record.question
            ))
        })?;
        let source_id = SourceId::try_new(record.source_id).ok_or_else(|| {
            SourceError::Malformed(format!("item '{}': empty source_id", record.title))
        })?;

        Ok(GradedItem {
            title: record.title,
            source_id,
            question_id,
            is_canonical: record.is_canonical,
            quality_labels: record.quality_labels,
            text: record.text,
        })
    }
}

impl ItemSource for JsonItemSource {
    fn load_items(&self) -> Result<Vec<GradedItem>, SourceError> {
        let file = File::open(&self.path)
            .map_err(|e| SourceError::Io(format!("{}: {e}", self.path.display())))?;
        let reader = BufReader::new(file);

        let records: Vec<ItemRecord> = serde_json::from_reader(reader)
            .map_err(|e| SourceError::Malformed(format!("{}: {e}", self.path.display())))?;

        debug!(path = %self.path.display(), count = records.len(), "loaded item pool");

        records.into_iter().map(Self::convert).collect()
    }
}
