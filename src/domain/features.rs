// ============================================================
// Layer 3 — Feature Matrix
// ============================================================
// A dense, row-major matrix of f32 values:
//
//   rows    = frames   (time steps, T)
//   columns = features (filterbank bins / MFCCs, F)
//
//   data = [t0_f0, t0_f1, ..., t0_fF-1, t1_f0, ..., tT-1_fF-1]
//
// This is the representation every feature loader returns.
// Conversion into a Burn tensor happens in Layer 4 so that this
// layer stays framework-free.

use std::ops::Range;

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Pre-extracted features of one cut, shape (num_frames, num_features).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    num_frames:   usize,
    num_features: usize,
    data:         Vec<f32>,
}

impl FeatureMatrix {
    /// Wrap a row-major buffer. Fails if `data.len() != num_frames * num_features`.
    pub fn new(num_frames: usize, num_features: usize, data: Vec<f32>) -> Result<Self> {
        let expected = num_frames
            .checked_mul(num_features)
            .ok_or_else(|| anyhow::anyhow!("feature shape ({num_frames}, {num_features}) overflows"))?;
        ensure!(
            data.len() == expected,
            "feature buffer has {} values, expected {} for shape ({}, {})",
            data.len(),
            expected,
            num_frames,
            num_features
        );
        Ok(Self { num_frames, num_features, data })
    }

    /// Build a matrix from one Vec per frame. All rows must have
    /// `num_features` values.
    pub fn from_rows(rows: Vec<Vec<f32>>, num_features: usize) -> Result<Self> {
        let num_frames = rows.len();
        // num_features is manifest input: only rows actually read size the buffer
        let mut data = Vec::new();
        for (t, row) in rows.into_iter().enumerate() {
            ensure!(
                row.len() == num_features,
                "frame {t} has {} values, expected {num_features}",
                row.len()
            );
            data.extend(row);
        }
        Self::new(num_frames, num_features, data)
    }

    /// (T, F)
    pub fn shape(&self) -> (usize, usize) {
        (self.num_frames, self.num_features)
    }

    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Values of frame `t`, or None past the last frame
    pub fn row(&self, t: usize) -> Option<&[f32]> {
        if t >= self.num_frames {
            return None;
        }
        let start = t * self.num_features;
        Some(&self.data[start..start + self.num_features])
    }

    /// Keep only the frames in `frames`. The range is clamped to the
    /// frames actually present.
    pub fn select_frames(self, frames: Range<usize>) -> Self {
        let end   = frames.end.min(self.num_frames);
        let start = frames.start.min(end);
        if start == 0 && end == self.num_frames {
            return self;
        }
        let data = self.data[start * self.num_features..end * self.num_features].to_vec();
        Self {
            num_frames:   end - start,
            num_features: self.num_features,
            data,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(frames: usize, dims: usize) -> FeatureMatrix {
        let data = (0..frames * dims).map(|v| v as f32).collect();
        FeatureMatrix::new(frames, dims, data).unwrap()
    }

    #[test]
    fn test_shape_is_frames_by_features() {
        let m = ramp(4, 3);
        assert_eq!(m.shape(), (4, 3));
        assert_eq!(m.row(1).unwrap(), &[3.0, 4.0, 5.0]);
        assert!(m.row(4).is_none());
    }

    #[test]
    fn test_new_rejects_wrong_buffer_length() {
        assert!(FeatureMatrix::new(2, 3, vec![0.0; 5]).is_err());
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(FeatureMatrix::from_rows(rows, 2).is_err());
    }

    #[test]
    fn test_from_rows_huge_declared_width_is_an_error() {
        let rows = vec![vec![1.0], vec![2.0]];
        assert!(FeatureMatrix::from_rows(rows, usize::MAX / 2).is_err());
    }

    #[test]
    fn test_from_rows_keeps_row_order() {
        let m = FeatureMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]], 2).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_select_frames_slices_rows() {
        let m = ramp(5, 2).select_frames(1..3);
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.as_slice(), &[2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_select_frames_clamps_past_end() {
        let m = ramp(3, 2).select_frames(2..10);
        assert_eq!(m.shape(), (1, 2));

        let empty = ramp(3, 2).select_frames(7..9);
        assert_eq!(empty.shape(), (0, 2));
    }
}
