// ============================================================
// Layer 6 — Feature Store
// ============================================================
// Reads the feature matrix a FeatureManifest points at.
//
// Two storage types are supported:
//
//   raw_f32 → headerless little-endian f32, row-major.
//             File size must be exactly
//             num_frames * num_features * 4 bytes.
//
//   json    → [[f32; num_features]; num_frames]
//
// Path resolution:
//   root_dir = Some(dir) → dir / storage_path
//   root_dir = None      → storage_path as written
//
// Writers are provided for both formats so manifests and test
// fixtures can be produced from Rust.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{ensure, Context, Result};
use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};

use crate::domain::cut::{FeatureManifest, StorageType};
use crate::domain::features::FeatureMatrix;

const F32_BYTES: usize = std::mem::size_of::<f32>();

/// Load the full stored matrix described by `manifest`.
pub fn read_features(manifest: &FeatureManifest, root_dir: Option<&Path>) -> Result<FeatureMatrix> {
    let path = manifest.resolve_path(root_dir);
    tracing::debug!(
        "Reading {:?} features ({} x {}) from '{}'",
        manifest.storage_type,
        manifest.num_frames,
        manifest.num_features,
        path.display()
    );

    let matrix = match manifest.storage_type {
        StorageType::RawF32 => read_raw_f32(&path, manifest.num_features)?,
        StorageType::Json   => read_json(&path, manifest.num_features)?,
    };

    ensure!(
        matrix.num_frames() == manifest.num_frames,
        "'{}' holds {} frames but the manifest declares {}",
        path.display(),
        matrix.num_frames(),
        manifest.num_frames
    );
    Ok(matrix)
}

/// Read a headerless little-endian f32 file with `num_features` columns.
pub fn read_raw_f32(path: &Path, num_features: usize) -> Result<FeatureMatrix> {
    let bytes = fs::read(path)
        .with_context(|| format!("reading feature file '{}'", path.display()))?;

    ensure!(
        bytes.len() % F32_BYTES == 0,
        "'{}' is {} bytes, not a whole number of f32 values",
        path.display(),
        bytes.len()
    );

    let data: Vec<f32> = bytes
        .chunks_exact(F32_BYTES)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();

    ensure!(
        num_features > 0 || data.is_empty(),
        "'{}' has data but the manifest declares 0 features per frame",
        path.display()
    );
    let num_frames = if num_features == 0 { 0 } else { data.len() / num_features };

    FeatureMatrix::new(num_frames, num_features, data)
        .with_context(|| format!("decoding '{}'", path.display()))
}

/// Read a JSON array of frames, each an array of `num_features` floats.
pub fn read_json(path: &Path, num_features: usize) -> Result<FeatureMatrix> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading feature file '{}'", path.display()))?;
    let rows: Vec<Vec<f32>> = serde_json::from_str(&text)
        .with_context(|| format!("parsing JSON features in '{}'", path.display()))?;

    FeatureMatrix::from_rows(rows, num_features)
        .with_context(|| format!("decoding '{}'", path.display()))
}

/// Write `matrix` as raw little-endian f32, creating parent directories.
pub fn write_raw_f32(path: &Path, matrix: &FeatureMatrix) -> Result<()> {
    create_parent(path)?;
    let file = fs::File::create(path)
        .with_context(|| format!("creating '{}'", path.display()))?;
    let mut out = BufWriter::new(file);
    for v in matrix.as_slice() {
        out.write_all(&v.to_le_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Write `matrix` as a JSON array of rows, creating parent directories.
pub fn write_json(path: &Path, matrix: &FeatureMatrix) -> Result<()> {
    create_parent(path)?;
    let rows: Vec<&[f32]> = (0..matrix.num_frames())
        .filter_map(|t| matrix.row(t))
        .collect();
    let json = serde_json::to_string(&rows)?;
    fs::write(path, json).with_context(|| format!("writing '{}'", path.display()))?;
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory '{}'", parent.display()))?;
    }
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn matrix() -> FeatureMatrix {
        FeatureMatrix::new(3, 2, vec![0.5, -1.0, 2.0, 3.25, -4.0, 5.0]).unwrap()
    }

    fn manifest(storage_type: StorageType, storage_path: &str, num_frames: usize) -> FeatureManifest {
        FeatureManifest {
            kind:          "fbank".into(),
            storage_type,
            storage_path:  PathBuf::from(storage_path),
            num_frames,
            num_features:  2,
            frame_shift:   0.01,
            sampling_rate: 16000,
            start:         0.0,
            duration:      num_frames as f64 * 0.01,
        }
    }

    #[test]
    fn test_raw_f32_file_reads_back() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("feats/a.f32");
        write_raw_f32(&path, &matrix()).unwrap();

        assert_eq!(fs::metadata(&path).unwrap().len(), 24);
        assert_eq!(read_raw_f32(&path, 2).unwrap(), matrix());
    }

    #[test]
    fn test_json_file_reads_back() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.json");
        write_json(&path, &matrix()).unwrap();
        assert_eq!(read_json(&path, 2).unwrap(), matrix());
    }

    #[test]
    fn test_read_features_uses_root_dir_override() {
        let dir = tempfile::tempdir().unwrap();
        write_raw_f32(&dir.path().join("feats/a.f32"), &matrix()).unwrap();

        let m = manifest(StorageType::RawF32, "feats/a.f32", 3);
        let loaded = read_features(&m, Some(dir.path())).unwrap();
        assert_eq!(loaded.shape(), (3, 2));
    }

    #[test]
    fn test_read_features_without_override_uses_stored_path() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.json");
        write_json(&path, &matrix()).unwrap();

        let m = manifest(StorageType::Json, path.to_str().unwrap(), 3);
        assert_eq!(read_features(&m, None).unwrap(), matrix());
    }

    #[test]
    fn test_frame_count_mismatch_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_raw_f32(&dir.path().join("a.f32"), &matrix()).unwrap();

        let m = manifest(StorageType::RawF32, "a.f32", 4);
        assert!(read_features(&m, Some(dir.path())).is_err());
    }

    #[test]
    fn test_truncated_raw_file_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.f32");
        fs::write(&path, [0u8; 10]).unwrap();
        assert!(read_raw_f32(&path, 2).is_err());
    }

    #[test]
    fn test_json_with_oversized_declared_width_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("narrow.json");
        fs::write(&path, "[[1.0],[2.0]]").unwrap();

        let err = read_json(&path, usize::MAX / 2).unwrap_err();
        assert!(format!("{err:#}").contains("narrow.json"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let m = manifest(StorageType::RawF32, "does/not/exist.f32", 3);
        let err = read_features(&m, Some(Path::new("/nonexistent-root"))).unwrap_err();
        assert!(format!("{err:#}").contains("exist.f32"));
    }
}
