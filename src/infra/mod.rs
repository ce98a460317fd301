// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Storage concerns shared by the data layer:
//
//   feature_store.rs — Reading and writing stored feature
//                      matrices (raw little-endian f32 or JSON
//                      rows), resolving storage paths against an
//                      optional root-directory override.
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            Rust Book §12 (I/O and File Handling)

/// Feature matrix storage (read + write)
pub mod feature_store;
