// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers for one user-facing goal:
//
//   inspect_use_case.rs  — load a manifest, build the dataset,
//                          summarise examples (shape + text)
//   validate_use_case.rs — check every cut is loadable as a
//                          single-supervision example
//
// Rules for this layer:
//   - No printing here (that's Layer 1)
//   - No direct file parsing (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Summarise dataset examples
pub mod inspect_use_case;

// Manifest-level validation of a cut set
pub mod validate_use_case;
