// ============================================================
// Layer 4 — Data
// ============================================================
// Where the variant table comes from:
//
//   builtin.rs  → the comparison table compiled into the binary
//   loader.rs   → a JSON array of variants on disk
//
// Both implement the VariantSource trait from Layer 3. The use
// cases run validate_all on whatever a source returns.
//
// Reference: Rust Book §7 (Modules), §9 (Error Handling)

/// The compiled-in comparison table
pub mod builtin;

/// JSON variant file loader
pub mod loader;
