// ============================================================
// Layer 4 — Speech Recognition Dataset
// ============================================================
// Exposes a corpus of cuts as indexable training examples:
//
//   index ──► cut id (snapshot taken at construction)
//         ──► cut         (Corpus::get_by_id)
//         ──► features    (Cut::load_features, root-dir override)
//         ──► check: exactly one supervision
//         ──► SpeechSample { features: (T × F), text }
//
// The id snapshot fixes the addressable range [0, len). The
// dataset owns its corpus handle (a CutSet, &CutSet or
// Arc<CutSet>), so the corpus cannot be mutated while a
// dataset built on it is alive.
//
// Two entry points:
//   SpeechRecognitionDataset::get  → Result<SpeechSample, DatasetError>
//   burn Dataset::get              → Option<SpeechSample>, for DataLoader;
//                                    None only past the end, panics on a bad cut
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §9 (Recoverable Errors with Result)

use burn::{
    data::dataset::Dataset,
    tensor::{backend::Backend, Tensor, TensorData},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::features::FeatureMatrix;
use crate::domain::traits::{Corpus, Cut, Supervision};

/// One training example: features of a cut and its transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechSample {
    /// Shape (T, F): frames × feature dimensions
    pub features: FeatureMatrix,
    pub text:     String,
}

impl SpeechSample {
    /// The features as a `[T, F]` float tensor on `device`.
    pub fn features_tensor<B: Backend>(&self, device: &B::Device) -> Tensor<B, 2> {
        let (frames, dims) = self.features.shape();
        let data = TensorData::new(self.features.as_slice().to_vec(), [frames, dims]);
        Tensor::<B, 2>::from_data(data, device)
    }
}

// ─── DatasetError ─────────────────────────────────────────────────────────────
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("index {index} is out of range for a dataset of {len} cuts")]
    IndexOutOfRange { index: usize, len: usize },

    /// A snapshotted id no longer resolves in the corpus.
    #[error("cut '{cut_id}' is missing from the corpus")]
    MissingCut { cut_id: String },

    /// The cut does not carry exactly one supervision.
    #[error(
        "cut '{cut_id}' has {count} supervisions, but SpeechRecognitionDataset supports \
         exactly one per cut. Trim long recordings into per-supervision segments first, \
         then pad or truncate (and possibly filter) the cuts to a uniform duration."
    )]
    SupervisionCount { cut_id: String, count: usize },

    /// Whatever the feature loader reported, unchanged.
    #[error(transparent)]
    Features(#[from] anyhow::Error),
}

// ─── SpeechRecognitionDataset ─────────────────────────────────────────────────
/// Index-addressable view of a corpus for ASR training.
pub struct SpeechRecognitionDataset<C: Corpus> {
    cuts:     C,
    root_dir: Option<PathBuf>,
    cut_ids:  Vec<String>,
}

impl<C: Corpus> SpeechRecognitionDataset<C> {
    /// Snapshot the corpus ids. `root_dir`, when given and non-empty,
    /// overrides where feature storage paths are resolved.
    pub fn new(cuts: C, root_dir: Option<PathBuf>) -> Self {
        let root_dir = root_dir.filter(|p| !p.as_os_str().is_empty());
        let cut_ids  = cuts.keys();
        tracing::debug!(
            "Speech recognition dataset over {} cuts (root_dir: {:?})",
            cut_ids.len(),
            root_dir
        );
        Self { cuts, root_dir, cut_ids }
    }

    pub fn len(&self) -> usize {
        self.cut_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cut_ids.is_empty()
    }

    pub fn root_dir(&self) -> Option<&Path> {
        self.root_dir.as_deref()
    }

    /// Cut ids in index order
    pub fn cut_ids(&self) -> &[String] {
        &self.cut_ids
    }

    pub fn corpus(&self) -> &C {
        &self.cuts
    }

    /// Load example `index`.
    ///
    /// Loader failures come back as `DatasetError::Features` with the
    /// loader's error untouched. A cut with zero or several
    /// supervisions is a `DatasetError::SupervisionCount`; no partial
    /// example is ever returned.
    pub fn get(&self, index: usize) -> Result<SpeechSample, DatasetError> {
        // ── Index → cut id, from the construction-time snapshot ──────────────
        let cut_id = self.cut_ids.get(index).ok_or(DatasetError::IndexOutOfRange {
            index,
            len: self.cut_ids.len(),
        })?;

        // ── Cut id → cut; a vanished id is fatal ─────────────────────────────
        let cut = self.resolve(cut_id)?;

        // ── Load features (file I/O happens here) ────────────────────────────
        // Loader errors convert into DatasetError::Features unchanged
        let features = cut.load_features(self.root_dir())?;

        // ── Exactly one supervision per cut ──────────────────────────────────
        let supervisions = cut.supervisions();
        if supervisions.len() != 1 {
            return Err(DatasetError::SupervisionCount {
                cut_id: cut.id().to_string(),
                count:  supervisions.len(),
            });
        }

        Ok(SpeechSample {
            features,
            text: supervisions[0].text().to_string(),
        })
    }

    /// Check every snapshotted cut resolves and has exactly one
    /// supervision, without reading feature storage. Returns the
    /// problems found; an empty Vec means every index is loadable as
    /// far as the manifest can tell.
    pub fn validate(&self) -> Vec<DatasetError> {
        let mut problems = Vec::new();
        for cut_id in &self.cut_ids {
            match self.resolve(cut_id) {
                Ok(cut) if cut.supervisions().len() != 1 => {
                    problems.push(DatasetError::SupervisionCount {
                        cut_id: cut.id().to_string(),
                        count:  cut.supervisions().len(),
                    });
                }
                Ok(_) => {}
                Err(e) => problems.push(e),
            }
        }
        tracing::debug!("Validated {} cuts, {} problems", self.cut_ids.len(), problems.len());
        problems
    }

    fn resolve(&self, cut_id: &str) -> Result<&C::Cut, DatasetError> {
        self.cuts
            .get_by_id(cut_id)
            .ok_or_else(|| DatasetError::MissingCut { cut_id: cut_id.to_string() })
    }
}

// ─── Burn Dataset Trait Implementation ────────────────────────────────────────
// Burn's DataLoader only understands Option, and its iterator
// stops at the first None. None is therefore reserved for
// out-of-range indices; a bad cut stops training instead of
// silently ending the epoch early.
impl<C> Dataset<SpeechSample> for SpeechRecognitionDataset<C>
where
    C: Corpus + Send + Sync,
{
    /// # Panics
    ///
    /// Panics if the cut at `index` cannot be turned into an example:
    /// it is missing from the corpus, has zero or several
    /// supervisions, or its features fail to load. Run
    /// [`SpeechRecognitionDataset::validate`] before training, or use
    /// the inherent [`SpeechRecognitionDataset::get`] to handle the
    /// error yourself.
    fn get(&self, index: usize) -> Option<SpeechSample> {
        match SpeechRecognitionDataset::get(self, index) {
            Ok(sample) => Some(sample),
            Err(DatasetError::IndexOutOfRange { .. }) => None,
            Err(e) => {
                tracing::error!("Cannot load example {index}: {e}");
                panic!("cannot load example {index}: {e}");
            }
        }
    }

    fn len(&self) -> usize {
        self.cut_ids.len()
    }
}
