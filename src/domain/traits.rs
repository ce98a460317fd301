// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The dataset adapter never sees a concrete corpus type. It is
// written against three small traits:
//
//   Corpus       → keyed collection of cuts, ordered keys
//   Cut          → one audio segment: supervisions + features
//   Supervision  → a transcript aligned to part of a cut
//
// Implementations:
//   - CutSet / MonoCut / SupervisionSegment (manifest-backed)
//   - any in-memory fake used by tests
//
// Blanket impls below let `&C` and `Arc<C>` stand in for a
// corpus, so one CutSet can back several datasets at once.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §15 (Smart Pointers — Arc)

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::domain::features::FeatureMatrix;

// ─── Supervision ──────────────────────────────────────────────────────────────
/// A transcript annotation attached to a cut.
pub trait Supervision {
    /// The transcript text. Empty when the annotation carries none.
    fn text(&self) -> &str;
}

// ─── Cut ──────────────────────────────────────────────────────────────────────
/// A bounded segment of a recording with its supervisions and
/// pre-extracted features.
pub trait Cut {
    type Supervision: Supervision;

    /// Unique identifier of this cut within its corpus
    fn id(&self) -> &str;

    /// Supervisions in manifest order
    fn supervisions(&self) -> &[Self::Supervision];

    /// Load this cut's feature matrix (frames × dims).
    ///
    /// `root_dir` overrides the directory the feature storage paths
    /// are resolved against; `None` uses the paths as stored.
    fn load_features(&self, root_dir: Option<&Path>) -> Result<FeatureMatrix>;
}

// ─── Corpus ───────────────────────────────────────────────────────────────────
/// A keyed collection of cuts with a stable key order.
pub trait Corpus {
    type Cut: Cut;

    /// All cut ids, in corpus order
    fn keys(&self) -> Vec<String>;

    /// Look a cut up by id
    fn get_by_id(&self, id: &str) -> Option<&Self::Cut>;
}

impl<C: Corpus + ?Sized> Corpus for &C {
    type Cut = C::Cut;

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }

    fn get_by_id(&self, id: &str) -> Option<&Self::Cut> {
        (**self).get_by_id(id)
    }
}

impl<C: Corpus + ?Sized> Corpus for Arc<C> {
    type Cut = C::Cut;

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }

    fn get_by_id(&self, id: &str) -> Option<&Self::Cut> {
        (**self).get_by_id(id)
    }
}
