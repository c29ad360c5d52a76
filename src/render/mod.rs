// ============================================================
// Layer 5 — Render Layer
// ============================================================
// Turns axis points into a raster image with plotters.
//
//   canvas.rs   — explicit drawing surface for one render
//   geometry.rs — pixel-space helpers (dashes, arrows, shapes,
//                 tick placement)
//   style.rs    — quadrant colours, marker shapes and palette
//   plotter.rs  — QuadrantPlotter, draws the diagram in order
//
// Nothing here knows about files other than the path it is
// told to draw into.

pub mod canvas;
pub mod geometry;
pub mod plotter;
pub mod style;
