// ============================================================
// Layer 3 — Cut Manifest Types
// ============================================================
// A cut-set manifest describes, per cut:
//
//   {
//     "id": "cut1",
//     "recording_id": "rec1",
//     "start": 0.0, "duration": 1.5, "channel": 0,
//     "supervisions": [
//       { "id": "sup1", "recording_id": "rec1",
//         "start": 0.0, "duration": 1.5, "text": "HELLO WORLD" }
//     ],
//     "features": {
//       "type": "fbank", "storage_type": "raw_f32",
//       "storage_path": "feats/rec1.f32",
//       "num_frames": 150, "num_features": 80,
//       "frame_shift": 0.01, "sampling_rate": 16000,
//       "start": 0.0, "duration": 1.5
//     }
//   }
//
// Times are in seconds. A cut may cover only part of the stored
// feature matrix; `MonoCut::frame_window` says which frames.
//
// Reference: serde documentation (derive, field attributes)

use std::ops::Range;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::traits::Supervision;

// ─── SupervisionSegment ───────────────────────────────────────────────────────
/// A transcript aligned to a time span of a recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupervisionSegment {
    pub id:           String,
    pub recording_id: String,
    pub start:        f64,
    pub duration:     f64,

    #[serde(default)]
    pub channel: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

impl SupervisionSegment {
    /// A segment carrying only what training needs: span and transcript.
    pub fn new(
        id:           impl Into<String>,
        recording_id: impl Into<String>,
        start:        f64,
        duration:     f64,
        text:         impl Into<String>,
    ) -> Self {
        Self {
            id:           id.into(),
            recording_id: recording_id.into(),
            start,
            duration,
            channel:      0,
            text:         Some(text.into()),
            language:     None,
            speaker:      None,
        }
    }
}

impl Supervision for SupervisionSegment {
    fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

// ─── FeatureManifest ──────────────────────────────────────────────────────────
/// On-disk layout of a stored feature matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    /// Row-major little-endian f32 values, no header
    RawF32,
    /// JSON array of rows: [[f32; F]; T]
    Json,
}

/// Where a feature matrix lives and what shape it has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureManifest {
    /// Feature kind, e.g. "fbank" or "mfcc". Informational only.
    #[serde(rename = "type", default = "default_feature_kind")]
    pub kind: String,

    pub storage_type: StorageType,

    /// Relative to the root-dir override when one is given
    pub storage_path: PathBuf,

    pub num_frames:    usize,
    pub num_features:  usize,
    pub frame_shift:   f64,
    pub sampling_rate: u32,

    /// Offset of the first stored frame within the recording
    #[serde(default)]
    pub start: f64,

    pub duration: f64,
}

fn default_feature_kind() -> String {
    "fbank".to_string()
}

impl FeatureManifest {
    /// Full path of the storage file. With an override the stored path
    /// is joined onto it, otherwise it is used as written.
    pub fn resolve_path(&self, root_dir: Option<&Path>) -> PathBuf {
        match root_dir {
            Some(root) => root.join(&self.storage_path),
            None       => self.storage_path.clone(),
        }
    }
}

// ─── MonoCut ──────────────────────────────────────────────────────────────────
/// A single-channel segment of a recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonoCut {
    pub id:           String,
    pub recording_id: String,
    pub start:        f64,
    pub duration:     f64,

    #[serde(default)]
    pub channel: u32,

    #[serde(default)]
    pub supervisions: Vec<SupervisionSegment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureManifest>,
}

impl MonoCut {
    /// Frames of `feats` covered by this cut.
    ///
    ///   offset = round((cut.start - feats.start) / frame_shift)
    ///   count  = round(cut.duration / frame_shift)
    ///
    /// Both ends are clamped to [0, feats.num_frames].
    pub fn frame_window(&self, feats: &FeatureManifest) -> Range<usize> {
        if feats.frame_shift <= 0.0 {
            return 0..feats.num_frames;
        }
        let offset = ((self.start - feats.start) / feats.frame_shift).round().max(0.0) as usize;
        let count  = (self.duration / feats.frame_shift).round().max(0.0) as usize;

        let start = offset.min(feats.num_frames);
        let end   = start.saturating_add(count).min(feats.num_frames);
        start..end
    }
}
