// ============================================================
// Layer 4 — CutSet
// ============================================================
// The manifest-backed corpus. Cuts are kept in insertion order
// alongside an id → position index:
//
//   cuts:  [cut1, cut2, cut3]
//   index: { "cut1": 0, "cut2": 1, "cut3": 2 }
//
// `keys()` therefore returns ids in the order the manifest listed
// them, which is the order the dataset adapter snapshots.
//
// MonoCut implements the Cut trait here rather than in Layer 3
// because loading features touches the filesystem.
//
// Reference: Rust Book §8 (Collections — Vec, HashMap)

use anyhow::{bail, Context, Result};
use std::{collections::HashMap, path::Path};

use crate::domain::cut::{MonoCut, SupervisionSegment};
use crate::domain::features::FeatureMatrix;
use crate::domain::traits::{Corpus, Cut};
use crate::infra::feature_store;

/// An ordered, id-indexed collection of cuts.
#[derive(Debug, Clone, Default)]
pub struct CutSet {
    cuts:  Vec<MonoCut>,
    index: HashMap<String, usize>,
}

impl CutSet {
    /// Build a CutSet, rejecting duplicate cut ids.
    pub fn from_cuts(cuts: impl IntoIterator<Item = MonoCut>) -> Result<Self> {
        let mut set = Self::default();
        for cut in cuts {
            set.push(cut)?;
        }
        Ok(set)
    }

    /// Append a cut. Fails if a cut with the same id is already present.
    pub fn push(&mut self, cut: MonoCut) -> Result<()> {
        // Ids are the corpus keys, so they must stay unique
        if self.index.contains_key(&cut.id) {
            bail!("duplicate cut id '{}' in cut set", cut.id);
        }
        self.index.insert(cut.id.clone(), self.cuts.len());
        self.cuts.push(cut);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonoCut> {
        self.cuts.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.cuts.iter().map(|c| c.id.as_str())
    }

    pub fn get(&self, id: &str) -> Option<&MonoCut> {
        self.index.get(id).map(|&i| &self.cuts[i])
    }
}

impl Corpus for CutSet {
    type Cut = MonoCut;

    fn keys(&self) -> Vec<String> {
        self.ids().map(str::to_string).collect()
    }

    fn get_by_id(&self, id: &str) -> Option<&MonoCut> {
        self.get(id)
    }
}

impl Cut for MonoCut {
    type Supervision = SupervisionSegment;

    fn id(&self) -> &str {
        &self.id
    }

    fn supervisions(&self) -> &[SupervisionSegment] {
        &self.supervisions
    }

    /// Reads the stored matrix and keeps the frames this cut spans.
    fn load_features(&self, root_dir: Option<&Path>) -> Result<FeatureMatrix> {
        // ── A cut without a feature manifest has nothing to load ─────────────
        let Some(manifest) = &self.features else {
            bail!("cut '{}' has no features attached", self.id());
        };

        // ── Read the whole stored matrix (root_dir resolved in Layer 6) ──────
        let stored = feature_store::read_features(manifest, root_dir)
            .with_context(|| format!("loading features for cut '{}'", self.id()))?;

        // ── Keep only the frames between cut.start and cut.start + duration ──
        Ok(stored.select_frames(self.frame_window(manifest)))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cut::{FeatureManifest, StorageType};
    use std::path::PathBuf;

    fn cut(id: &str) -> MonoCut {
        MonoCut {
            id:           id.into(),
            recording_id: "rec1".into(),
            start:        0.0,
            duration:     1.0,
            channel:      0,
            supervisions: vec![SupervisionSegment::new(format!("{id}-sup"), "rec1", 0.0, 1.0, "HI")],
            features:     None,
        }
    }

    #[test]
    fn test_keys_follow_insertion_order() {
        let set = CutSet::from_cuts(vec![cut("b"), cut("a"), cut("c")]).unwrap();
        assert_eq!(set.keys(), vec!["b", "a", "c"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_lookup_by_id() {
        let set = CutSet::from_cuts(vec![cut("a"), cut("b")]).unwrap();
        assert_eq!(set.get_by_id("b").unwrap().id, "b");
        assert!(set.get_by_id("zzz").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        assert!(CutSet::from_cuts(vec![cut("a"), cut("a")]).is_err());
    }

    #[test]
    fn test_cut_without_features_fails_to_load() {
        let err = cut("a").load_features(None).unwrap_err();
        assert!(err.to_string().contains("no features"));
    }

    #[test]
    fn test_load_features_selects_cut_frames() {
        let dir = tempfile::tempdir().unwrap();
        let stored = FeatureMatrix::new(10, 2, (0..20).map(|v| v as f32).collect()).unwrap();
        feature_store::write_raw_f32(&dir.path().join("rec1.f32"), &stored).unwrap();

        let mut c = cut("a");
        c.start    = 0.02;
        c.duration = 0.05;
        c.features = Some(FeatureManifest {
            kind:          "fbank".into(),
            storage_type:  StorageType::RawF32,
            storage_path:  PathBuf::from("rec1.f32"),
            num_frames:    10,
            num_features:  2,
            frame_shift:   0.01,
            sampling_rate: 16000,
            start:         0.0,
            duration:      0.1,
        });

        let feats = c.load_features(Some(dir.path())).unwrap();
        assert_eq!(feats.shape(), (5, 2));
        assert_eq!(feats.row(0).unwrap(), &[4.0, 5.0]);
    }
}
