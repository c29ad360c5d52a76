// ============================================================
// Layer 2 — AxesUseCase
// ============================================================
// Computes the diagram coordinates without drawing anything:
//
//   Step 1: Load variants             (Layer 4 - data)
//   Step 2: Validate them             (Layer 3 - domain)
//   Step 3: Pick the reference size   (config or last variant)
//   Step 4: Compute axis points       (Layer 3 - domain)
//   Step 5: Classify + size markers   (Layer 3 - domain)
//   Step 6: Optional CSV              (Layer 6 - infra)
//
// Steps 1–4 are shared with RenderUseCase through load_axes().

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::domain::axes::{compute_axes, default_reference_size, marker_area, peak_fitness, AxisPoint};
use crate::domain::quadrant::Quadrant;
use crate::domain::traits::VariantSource;
use crate::domain::variant::{validate_all, Variant};
use crate::infra::table;

/// One variant's position on the diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisRow {
    pub name:        String,
    pub x:           f64,
    pub y:           f64,
    pub fitness:     f64,
    pub quadrant:    Quadrant,
    /// Marker area in points²
    pub marker_area: f64,
}

/// Variants plus the coordinates derived from them.
#[derive(Debug, Clone)]
pub struct LoadedAxes {
    pub variants:       Vec<Variant>,
    pub reference_size: f64,
    pub points:         Vec<AxisPoint>,
}

/// Load, validate and place every variant from `source`.
pub fn load_axes(source: &dyn VariantSource, reference_size: Option<f64>) -> Result<LoadedAxes> {
    tracing::info!("Loading variants from {}", source.describe());
    let variants = source.load_all()?;
    validate_all(&variants).with_context(|| format!("Invalid variants from {}", source.describe()))?;
    tracing::info!("Loaded {} variants", variants.len());

    let reference_size = match reference_size {
        Some(r) => r,
        None    => default_reference_size(&variants)?,
    };
    tracing::debug!("Reference size: {}", reference_size);

    let points = compute_axes(&variants, reference_size)?;
    for (v, p) in variants.iter().zip(&points) {
        tracing::debug!("{:<40} x={:>10.3} y={:.5} {}", v.name, p.x, p.y, p.quadrant());
    }

    Ok(LoadedAxes { variants, reference_size, points })
}

// ─── AxesUseCase ──────────────────────────────────────────────────────────────
pub struct AxesUseCase {
    source:            Box<dyn VariantSource>,
    reference_size:    Option<f64>,
    marker_size_range: (f64, f64),
    csv_path:          Option<PathBuf>,
}

impl AxesUseCase {
    pub fn new(
        source:            Box<dyn VariantSource>,
        reference_size:    Option<f64>,
        marker_size_range: (f64, f64),
        csv_path:          Option<PathBuf>,
    ) -> Self {
        Self { source, reference_size, marker_size_range, csv_path }
    }

    /// Compute one row per variant, in input order, and write the
    /// CSV when a path was given.
    pub fn execute(&self) -> Result<Vec<AxisRow>> {
        let loaded = load_axes(self.source.as_ref(), self.reference_size)?;
        let peak   = peak_fitness(&loaded.points);

        let rows: Vec<AxisRow> = loaded
            .variants
            .iter()
            .zip(&loaded.points)
            .map(|(v, p)| AxisRow {
                name:        v.name.clone(),
                x:           p.x,
                y:           p.y,
                fitness:     p.fitness,
                quadrant:    p.quadrant(),
                marker_area: marker_area(p.fitness, peak, self.marker_size_range),
            })
            .collect();

        if let Some(path) = &self.csv_path {
            table::write_csv(path, &rows)?;
        }
        Ok(rows)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin::{builtin_variants, BuiltinVariants};
    use crate::domain::error::PlotError;

    fn use_case(reference: Option<f64>, csv: Option<PathBuf>) -> AxesUseCase {
        AxesUseCase::new(Box::new(BuiltinVariants), reference, (60.0, 400.0), csv)
    }

    #[test]
    fn test_builtin_rows() {
        let rows = use_case(None, None).execute().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].name, "Feature-based");
        // far smaller than the reference but still a positive fitness
        assert!(rows[0].x < 0.0 && rows[0].y > 0.0);
        assert_eq!(rows[0].quadrant, Quadrant::II);

        let last = rows.last().unwrap();
        assert_eq!(last.x, 0.0);
        assert!((last.y - 0.98896).abs() < 1e-4);
        assert_eq!(last.quadrant, Quadrant::I);
        // best fitness gets the largest marker
        assert!(rows.iter().all(|r| r.marker_area <= last.marker_area));
    }

    #[test]
    fn test_explicit_reference_moves_every_x() {
        let rows = use_case(Some(100.0), None).execute().unwrap();
        assert!((rows[3].x - 25.0).abs() < 1e-9);
        assert_eq!(rows[3].quadrant, Quadrant::I);
        assert_eq!(rows[0].quadrant, Quadrant::II);
    }

    #[test]
    fn test_csv_is_written() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("axes.csv");
        use_case(None, Some(path.clone())).execute().unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text.lines().count(), 7);
        assert!(text.lines().last().unwrap().starts_with("Final (LaMa + MAT + UNet + denoiser),0.000000"));
    }

    #[test]
    fn test_zero_quality_metric_is_reported() {
        let mut variants = builtin_variants();
        variants[2].quality_metric_a = 0.0;
        let err = load_axes(&variants, None).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PlotError>(),
            Some(&PlotError::ZeroQualityMetric { name: "Masked Downshuffle".to_string() })
        );
    }

    #[test]
    fn test_empty_source_is_rejected() {
        let err = load_axes(&Vec::<Variant>::new(), None).unwrap_err();
        assert_eq!(err.downcast_ref::<PlotError>(), Some(&PlotError::NoVariants));
    }
}
