// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums, and functions that define what a
// quadrant diagram is made of:
//
//   variant.rs   — a named model variant with its raw metrics
//   axes.rs      — derived (x, y, fitness) points and marker sizing
//   quadrant.rs  — the four quadrants and their colour tones
//   error.rs     — typed failures of the derivation step
//   traits.rs    — the VariantSource abstraction
//
// Rules for this layer:
//   - NO plotters types
//   - NO file I/O
//   - Only plain data and arithmetic
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

/// A named model variant and its raw metrics
pub mod variant;

/// Derived axis values and marker sizing
pub mod axes;

/// Quadrant classification
pub mod quadrant;

/// Typed domain errors
pub mod error;

/// Core abstractions implemented by other layers
pub mod traits;
