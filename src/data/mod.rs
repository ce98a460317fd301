// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a manifest on disk and a training example:
//
//   cuts.jsonl / cuts.json
//       │
//       ▼
//   load_cut_set        → parses the manifest into a CutSet
//       │
//       ▼
//   CutSet              → ordered, id-indexed corpus (Corpus trait)
//       │
//       ▼
//   SpeechRecognitionDataset
//                       → index → { features (T × F), text }
//                         implements Burn's Dataset trait
//       │
//       ▼
//   DataLoader          → feeds examples to the training loop
//
// Feature files themselves are read by Layer 6 (feature_store).
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Reads cut-set manifests (.json / .jsonl)
pub mod loader;

/// Ordered, id-indexed collection of cuts
pub mod cut_set;

/// Index → (features, transcript) adapter over a corpus
pub mod dataset;
