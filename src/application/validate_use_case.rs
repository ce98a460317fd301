// ============================================================
// Layer 2 — ValidateUseCase
// ============================================================
// Checks a manifest before training: every cut must resolve and
// carry exactly one supervision. Feature files are not read.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{dataset::SpeechRecognitionDataset, loader::load_cut_set};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateConfig {
    pub manifest: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub total_cuts: usize,
    pub problems:   Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

pub struct ValidateUseCase {
    config: ValidateConfig,
}

impl ValidateUseCase {
    pub fn new(config: ValidateConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<ValidationReport> {
        let cuts    = load_cut_set(&self.config.manifest)?;
        let dataset = SpeechRecognitionDataset::new(cuts, None);

        let problems: Vec<String> = dataset.validate().iter().map(ToString::to_string).collect();
        if !problems.is_empty() {
            tracing::warn!("{} of {} cuts cannot be used as training examples", problems.len(), dataset.len());
        }

        Ok(ValidationReport {
            total_cuts: dataset.len(),
            problems,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_reports_multi_supervision_cut() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("cuts.json");
        fs::write(
            &path,
            r#"[
              {"id":"ok","recording_id":"r","start":0.0,"duration":1.0,
               "supervisions":[{"id":"s1","recording_id":"r","start":0.0,"duration":1.0,"text":"A"}]},
              {"id":"long","recording_id":"r","start":0.0,"duration":9.0,
               "supervisions":[{"id":"s2","recording_id":"r","start":0.0,"duration":4.0,"text":"B"},
                               {"id":"s3","recording_id":"r","start":4.0,"duration":5.0,"text":"C"}]}
            ]"#,
        )
        .unwrap();

        let report = ValidateUseCase::new(ValidateConfig { manifest: path }).execute().unwrap();
        assert_eq!(report.total_cuts, 2);
        assert!(!report.is_clean());
        assert_eq!(report.problems.len(), 1);
        assert!(report.problems[0].contains("'long' has 2 supervisions"));
    }
}
