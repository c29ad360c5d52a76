// ============================================================
// Layer 2 — RenderUseCase
// ============================================================
// Orchestrates one diagram render:
//
//   Step 1: Validate the plot config    (Layer 2)
//   Step 2: Load + place the variants   (Layers 3/4, load_axes)
//   Step 3: Draw and write the image    (Layer 5 - render)
//   Step 4: Optionally show it          (Layer 6 - infra)
//
// A failure at any step leaves nothing at the output path.

use anyhow::Result;
use std::path::PathBuf;

use crate::application::axes_use_case::load_axes;
use crate::application::plot_config::PlotConfig;
use crate::domain::axes::AxisPoint;
use crate::domain::traits::VariantSource;
use crate::infra::viewer;
use crate::render::plotter::QuadrantPlotter;

/// What a successful render produced.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub path:   PathBuf,
    pub points: Vec<AxisPoint>,
}

pub struct RenderUseCase {
    config: PlotConfig,
    source: Box<dyn VariantSource>,
}

impl RenderUseCase {
    pub fn new(config: PlotConfig, source: Box<dyn VariantSource>) -> Self {
        Self { config, source }
    }

    pub fn execute(&self) -> Result<RenderOutcome> {
        let cfg = &self.config;

        // ── Step 1: Config ───────────────────────────────────────────────────
        cfg.validate()?;

        // ── Step 2: Variants and coordinates ─────────────────────────────────
        let loaded = load_axes(self.source.as_ref(), cfg.reference_size)?;

        // ── Step 3: Render ───────────────────────────────────────────────────
        let (w, h) = cfg.pixel_size()?;
        tracing::info!(
            "Rendering {} variants to '{}' ({}x{} px)",
            loaded.variants.len(),
            cfg.output_path.display(),
            w,
            h
        );
        let path = QuadrantPlotter::new(cfg).render(
            &loaded.variants,
            &loaded.points,
            loaded.reference_size,
        )?;

        // ── Step 4: Viewer ───────────────────────────────────────────────────
        if cfg.show {
            if let Err(e) = viewer::open(&path) {
                tracing::warn!("{:#}", e);
            }
        }

        Ok(RenderOutcome { path, points: loaded.points })
    }
}
