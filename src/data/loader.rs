// ============================================================
// Layer 4 — Cut-Set Manifest Loader
// ============================================================
// Reads a CutSet from disk. The format is chosen by extension:
//
//   .json  → one JSON array of cuts
//   .jsonl → one cut object per line (blank lines are skipped)
//
// Errors name the file, and for .jsonl the 1-based line number,
// so a broken manifest can be fixed without guessing.
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use std::{
    fs,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::data::cut_set::CutSet;
use crate::domain::cut::MonoCut;

/// Load a cut set manifest, dispatching on the file extension.
pub fn load_cut_set(path: &Path) -> Result<CutSet> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let cuts = match ext.as_str() {
        "json"  => load_json(path)?,
        "jsonl" => load_jsonl(path)?,
        other   => bail!("Unsupported manifest extension: .{other}"),
    };

    let set = CutSet::from_cuts(cuts)
        .with_context(|| format!("building cut set from '{}'", path.display()))?;
    tracing::info!("Loaded {} cuts from '{}'", set.len(), path.display());
    Ok(set)
}

fn load_json(path: &Path) -> Result<Vec<MonoCut>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading manifest '{}'", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing manifest '{}'", path.display()))
}

fn load_jsonl(path: &Path) -> Result<Vec<MonoCut>> {
    let file = fs::File::open(path)
        .with_context(|| format!("opening manifest '{}'", path.display()))?;

    let mut cuts = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("reading '{}'", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let cut: MonoCut = serde_json::from_str(&line)
            .with_context(|| format!("parsing '{}' line {}", path.display(), i + 1))?;
        cuts.push(cut);
    }
    Ok(cuts)
}
