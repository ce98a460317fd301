// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Loads a cut-set manifest, wraps it in a
// SpeechRecognitionDataset and summarises examples:
//
//   Step 1: Load the manifest          (Layer 4 - data)
//   Step 2: Build the dataset          (Layer 4 - data)
//   Step 3: Load the requested example(s), which reads the
//           feature files              (Layer 6 - infra)
//   Step 4: Report index, cut id, (T, F) and transcript
//
// Any failure (bad index, multi-supervision cut, missing
// feature file) stops the run and is returned to the caller.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{dataset::SpeechRecognitionDataset, loader::load_cut_set};

// ─── Inspect Configuration ───────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectConfig {
    /// Cut-set manifest (.json or .jsonl)
    pub manifest: PathBuf,

    /// Overrides the directory feature paths are resolved against
    pub root_dir: Option<PathBuf>,

    /// Inspect only this example
    pub index: Option<usize>,

    /// Maximum number of examples when no index is given
    pub limit: usize,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("data/cuts.jsonl"),
            root_dir: None,
            index:    None,
            limit:    10,
        }
    }
}

/// One loaded example, without its feature values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleSummary {
    pub index:        usize,
    pub cut_id:       String,
    pub num_frames:   usize,
    pub num_features: usize,
    pub text:         String,
}

// ─── InspectUseCase ───────────────────────────────────────────────────────────
pub struct InspectUseCase {
    config: InspectConfig,
}

impl InspectUseCase {
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<Vec<ExampleSummary>> {
        let cfg = &self.config;

        let cuts    = load_cut_set(&cfg.manifest)?;
        let dataset = SpeechRecognitionDataset::new(cuts, cfg.root_dir.clone());
        tracing::info!("Dataset has {} examples", dataset.len());

        let indices: Vec<usize> = match cfg.index {
            Some(i) => vec![i],
            None    => (0..dataset.len().min(cfg.limit)).collect(),
        };

        let mut summaries = Vec::with_capacity(indices.len());
        for index in indices {
            let sample = dataset
                .get(index)
                .with_context(|| format!("loading example {index}"))?;
            let (num_frames, num_features) = sample.features.shape();

            summaries.push(ExampleSummary {
                index,
                cut_id: dataset.cut_ids()[index].clone(),
                num_frames,
                num_features,
                text: sample.text,
            });
        }
        Ok(summaries)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::features::FeatureMatrix;
    use crate::infra::feature_store;
    use std::{fs, path::Path};

    fn cut_line(id: &str, text: &str) -> String {
        format!(
            r#"{{"id":"{id}","recording_id":"{id}","start":0.0,"duration":0.03,"supervisions":[{{"id":"{id}-s","recording_id":"{id}","start":0.0,"duration":0.03,"text":"{text}"}}],"features":{{"storage_type":"raw_f32","storage_path":"{id}.f32","num_frames":3,"num_features":2,"frame_shift":0.01,"sampling_rate":16000,"duration":0.03}}}}"#
        )
    }

    fn write_corpus(dir: &Path) -> PathBuf {
        let feats = FeatureMatrix::new(3, 2, vec![0.0; 6]).unwrap();
        feature_store::write_raw_f32(&dir.join("feats/cut1.f32"), &feats).unwrap();
        feature_store::write_raw_f32(&dir.join("feats/cut2.f32"), &feats).unwrap();

        let manifest = dir.join("cuts.jsonl");
        fs::write(
            &manifest,
            format!("{}\n{}\n", cut_line("cut1", "HELLO WORLD"), cut_line("cut2", "FOO")),
        )
        .unwrap();
        manifest
    }

    #[test]
    fn test_summarises_all_examples() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_corpus(dir.path());

        let report = InspectUseCase::new(InspectConfig {
            manifest,
            root_dir: Some(dir.path().join("feats")),
            index:    None,
            limit:    10,
        })
        .execute()
        .unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].cut_id, "cut1");
        assert_eq!(report[0].text, "HELLO WORLD");
        assert_eq!((report[1].num_frames, report[1].num_features), (3, 2));
    }

    #[test]
    fn test_single_index() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_corpus(dir.path());

        let report = InspectUseCase::new(InspectConfig {
            manifest,
            root_dir: Some(dir.path().join("feats")),
            index:    Some(1),
            limit:    10,
        })
        .execute()
        .unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report[0].text, "FOO");
    }

    #[test]
    fn test_missing_root_dir_fails_on_feature_load() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_corpus(dir.path());

        let result = InspectUseCase::new(InspectConfig {
            manifest,
            root_dir: Some(dir.path().join("elsewhere")),
            index:    Some(0),
            limit:    10,
        })
        .execute();

        assert!(result.is_err());
    }
}
