// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the other layers to produce a diagram or its
// coordinate table.
//
// Rules for this layer:
//   - No drawing code here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct file formats here (that's Layers 4 and 6)
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Every knob of a render
pub mod plot_config;

// Draw the diagram and write the image
pub mod render_use_case;

// Coordinates only: table / CSV
pub mod axes_use_case;
