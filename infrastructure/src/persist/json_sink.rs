//! JSON-backed assignment sink
//!
//! Writes the three output files of a run into one directory:
//!
//! - `assignments.json` — the flat rows handed to the evaluation phase
//! - `audit_map.json`   — blind id -> source record, kept apart from the rows
//! - `manifest.json`    — run provenance plus residual-adjacency warnings
//!
//! The split keeps blinding intact on disk: whoever runs the evaluation
//! phase receives `assignments.json` alone.

use blindset_application::{AssemblyOutput, AssignmentSink, SinkError};
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

/// Assignment sink writing the run output as JSON files under one directory
pub struct JsonAssignmentSink {
    out_dir: PathBuf,
    pretty: bool,
}

impl JsonAssignmentSink {
    pub fn new(out_dir: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            out_dir: out_dir.into(),
            pretty,
        }
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), SinkError> {
        let file =
            File::create(path).map_err(|e| SinkError::Io(format!("{}: {e}", path.display())))?;
        let writer = BufWriter::new(file);

        let result = if self.pretty {
            serde_json::to_writer_pretty(writer, value)
        } else {
            serde_json::to_writer(writer, value)
        };
        result.map_err(|e| SinkError::Encode(format!("{}: {e}", path.display())))
    }
}

/// Manifest file shape: provenance fields plus the warnings a reviewer
/// should look at before releasing the run.
#[derive(Serialize)]
struct ManifestFile<'a> {
    #[serde(flatten)]
    manifest: &'a blindset_application::RunManifest,
    warnings: &'a [blindset_domain::ResidualAdjacency],
}

impl AssignmentSink for JsonAssignmentSink {
    fn persist(&self, output: &AssemblyOutput) -> Result<(), SinkError> {
        fs::create_dir_all(&self.out_dir)
            .map_err(|e| SinkError::Io(format!("{}: {e}", self.out_dir.display())))?;

        self.write_json(&self.out_dir.join("assignments.json"), &output.rows)?;
        self.write_json(&self.out_dir.join("audit_map.json"), &output.audit_map)?;
        self.write_json(
            &self.out_dir.join("manifest.json"),
            &ManifestFile {
                manifest: &output.manifest,
                warnings: &output.warnings,
            },
        )?;

        info!(
            out_dir = %self.out_dir.display(),
            rows = output.rows.len(),
            warnings = output.warnings.len(),
            "persisted curation run"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blindset_application::{AssignmentRow, AuditEntry, RunManifest};
    use blindset_domain::{
        BlindIdMinter, EvaluatorId, ItemKind, QuestionId, ResidualAdjacency, SourceId,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeMap;

    fn sample_output() -> AssemblyOutput {
        let mut minter = BlindIdMinter::new(12);
        let mut rng = StdRng::seed_from_u64(9);
        let blind_id = minter.mint(&mut rng).unwrap();

        let row = AssignmentRow {
            evaluator_id: EvaluatorId::new("annotator1"),
            item_reference: "a.pdf_Q1_Orig_0".to_string(),
            blind_id: blind_id.clone(),
            display_order: 1,
            question: QuestionId::new(1),
            text: "An answer. With two sentences.".to_string(),
            sentences: vec!["An answer.".to_string(), "With two sentences.".to_string()],
        };

        let mut audit_map = BTreeMap::new();
        audit_map.insert(
            blind_id,
            AuditEntry {
                source_id: SourceId::new("a.pdf"),
                question_id: QuestionId::new(1),
                kind: ItemKind::Canonical,
                noise_level: Some(0),
            },
        );

        AssemblyOutput {
            rows: vec![row],
            audit_map,
            warnings: vec![],
            manifest: RunManifest {
                seed: 9,
                created_at: "2026-08-28T00:00:00+00:00".to_string(),
                source_id: SourceId::new("a.pdf"),
                evaluators: vec![EvaluatorId::new("annotator1")],
                row_count: 1,
                warning_count: 0,
            },
        }
    }

    #[test]
    fn test_writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonAssignmentSink::new(dir.path().join("out"), true);
        sink.persist(&sample_output()).unwrap();

        for name in ["assignments.json", "audit_map.json", "manifest.json"] {
            assert!(dir.path().join("out").join(name).exists(), "{name} missing");
        }
    }

    #[test]
    fn test_rows_carry_no_source_id() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonAssignmentSink::new(dir.path(), false);
        sink.persist(&sample_output()).unwrap();

        let rows = fs::read_to_string(dir.path().join("assignments.json")).unwrap();
        assert!(!rows.contains("source_id"));
        assert!(rows.contains("blind_id"));
    }

    #[test]
    fn test_rows_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonAssignmentSink::new(dir.path(), true);
        let output = sample_output();
        sink.persist(&output).unwrap();

        let raw = fs::read_to_string(dir.path().join("assignments.json")).unwrap();
        let rows: Vec<AssignmentRow> = serde_json::from_str(&raw).unwrap();
        assert_eq!(rows, output.rows);
    }

    #[test]
    fn test_manifest_includes_seed_and_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonAssignmentSink::new(dir.path(), true);
        sink.persist(&sample_output()).unwrap();

        let raw = fs::read_to_string(dir.path().join("manifest.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["seed"], 9);
        assert!(value["warnings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_residual_warnings_land_in_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonAssignmentSink::new(dir.path(), true);

        let mut output = sample_output();
        output.warnings.push(ResidualAdjacency {
            evaluator: EvaluatorId::new("annotator1"),
            position: 14,
            question: QuestionId::new(2),
        });
        output.manifest.warning_count = 1;
        sink.persist(&output).unwrap();

        let raw = fs::read_to_string(dir.path().join("manifest.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["warning_count"], 1);
        let warnings = value["warnings"].as_array().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0]["evaluator"], "annotator1");
        assert_eq!(warnings[0]["position"], 14);
        assert_eq!(warnings[0]["question"], 2);
    }

    #[test]
    fn test_unwritable_directory_is_io_error() {
        let sink = JsonAssignmentSink::new("/proc/definitely/not/writable", true);
        assert!(matches!(
            sink.persist(&sample_output()),
            Err(SinkError::Io(_))
        ));
    }
}
