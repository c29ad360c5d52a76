// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Filesystem and platform concerns used by the other layers:
//
//   config_store.rs — PlotConfig saved/loaded as JSON
//   fonts.rs        — font discovery and registration with
//                     plotters' ab_glyph text backend
//   output.rs       — staged image file, renamed into place
//                     only after a successful render
//   table.rs        — axes rows as a text table or CSV file
//   viewer.rs       — open the image in the system viewer
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// PlotConfig persistence
pub mod config_store;

/// Font discovery for text rendering
pub mod fonts;

/// Atomic image output
pub mod output;

/// Axes table and CSV writer
pub mod table;

/// Platform image viewer
pub mod viewer;
