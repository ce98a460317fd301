// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits describing a speech corpus:
//
//   traits.rs   — Corpus / Cut / Supervision abstractions the
//                 dataset adapter is written against
//   features.rs — FeatureMatrix, a dense (frames × dims) matrix
//   cut.rs      — MonoCut, SupervisionSegment, FeatureManifest:
//                 the serde types behind a cut-set manifest
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O (feature loading lives in Layer 4 / Layer 6)
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Core abstractions (traits) that other layers implement
pub mod traits;

// Dense feature matrix returned by every feature loader
pub mod features;

// Manifest-level description of cuts and their supervisions
pub mod cut;
