// ============================================================
// Layer 3 — Derived Axes
// ============================================================
// Turns raw variant metrics into the two plotted axes:
//
//   x       = size_metric - reference_size
//   fitness = quality_metric_b / quality_metric_a
//   y       = fitness
//
// and maps fitness onto a marker area (in points²):
//
//   area = clamp(fitness / peak * 300 + 50, min, max)
//
// where peak is the largest |fitness| in the dataset.
//
// Reference: Rust Book §13 (Iterators and Closures)

use crate::domain::error::{PlotError, Result};
use crate::domain::quadrant::{classify_quadrant, Quadrant};
use crate::domain::variant::Variant;

/// Area added to every marker before clamping (points²)
const MARKER_AREA_BASE: f64 = 50.0;

/// Area gained by the highest-fitness marker (points²)
const MARKER_AREA_SPAN: f64 = 300.0;

/// A variant's position on the diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPoint {
    /// Size change relative to the reference
    pub x: f64,
    /// Plotted fitness
    pub y: f64,
    /// Derived fitness score; equal to `y`
    pub fitness: f64,
}

impl AxisPoint {
    /// Quadrant this point falls in
    pub fn quadrant(&self) -> Quadrant {
        classify_quadrant(self.x, self.y)
    }
}

/// Compute one AxisPoint per variant, preserving input order.
///
/// Fails with `ZeroQualityMetric` on the first variant whose
/// lower-is-better metric is zero, and with `NonFiniteMetric`
/// if an input or the reference size is not a finite number.
pub fn compute_axes(variants: &[Variant], reference_size: f64) -> Result<Vec<AxisPoint>> {
    if !reference_size.is_finite() {
        return Err(PlotError::NonFiniteMetric {
            name:  "<reference>".to_string(),
            field: "reference_size",
            value: reference_size,
        });
    }

    variants
        .iter()
        .map(|v| {
            v.check_finite()?;
            let fitness = v.fitness()?;
            Ok(AxisPoint {
                x: v.size_metric - reference_size,
                y: fitness,
                fitness,
            })
        })
        .collect()
}

/// Size of the last variant, the default reference for the x axis.
pub fn default_reference_size(variants: &[Variant]) -> Result<f64> {
    variants
        .last()
        .map(|v| v.size_metric)
        .ok_or(PlotError::NoVariants)
}

/// Highest fitness among the points, used for the "ideal" marker.
pub fn best_fitness(points: &[AxisPoint]) -> Option<f64> {
    points
        .iter()
        .map(|p| p.fitness)
        .fold(None, |best, f| Some(best.map_or(f, |b: f64| b.max(f))))
}

/// Largest absolute fitness, the normaliser for marker sizes.
pub fn peak_fitness(points: &[AxisPoint]) -> f64 {
    points.iter().map(|p| p.fitness.abs()).fold(0.0, f64::max)
}

/// Marker area in points² for a fitness value.
///
/// Non-decreasing in `fitness` for a fixed `peak`, and always
/// within `[range.0, range.1]`.
pub fn marker_area(fitness: f64, peak: f64, range: (f64, f64)) -> f64 {
    let ratio = if peak > 0.0 { fitness / peak } else { 0.0 };
    (ratio * MARKER_AREA_SPAN + MARKER_AREA_BASE).clamp(range.0, range.1)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin::builtin_variants;
    use proptest::prelude::*;

    #[test]
    fn test_axes_match_definitions() {
        let variants = builtin_variants();
        let points   = compute_axes(&variants, 125.3).unwrap();

        assert_eq!(points.len(), variants.len());
        for (v, p) in variants.iter().zip(&points) {
            assert!((p.x - (v.size_metric - 125.3)).abs() < 1e-12);
            assert!((p.y - v.quality_metric_b / v.quality_metric_a).abs() < 1e-12);
            assert_eq!(p.y, p.fitness);
        }
    }

    #[test]
    fn test_final_variant_is_the_reference_point() {
        let variants = builtin_variants();
        let points   = compute_axes(&variants, 125.3).unwrap();
        let last     = points.last().unwrap();

        assert_eq!(last.x, 0.0);
        assert!((last.y - 0.98896).abs() < 1e-5);
        assert_eq!(last.quadrant(), Quadrant::I);
        assert_eq!(best_fitness(&points), Some(last.fitness));
    }

    #[test]
    fn test_order_is_preserved() {
        let variants = vec![
            Variant::new("b", 3.0, 1.0, 0.1),
            Variant::new("a", 1.0, 1.0, 0.9),
            Variant::new("c", 2.0, 1.0, 0.5),
        ];
        let xs: Vec<f64> = compute_axes(&variants, 0.0).unwrap().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_zero_quality_metric_fails_fast() {
        let variants = vec![
            Variant::new("fine", 1.0, 2.0, 0.5),
            Variant::new("zero", 1.0, 0.0, 0.5),
        ];
        assert_eq!(
            compute_axes(&variants, 0.0),
            Err(PlotError::ZeroQualityMetric { name: "zero".to_string() })
        );
    }

    #[test]
    fn test_non_finite_reference_is_rejected() {
        let variants = builtin_variants();
        assert!(matches!(
            compute_axes(&variants, f64::INFINITY),
            Err(PlotError::NonFiniteMetric { field: "reference_size", .. })
        ));
    }

    #[test]
    fn test_default_reference_is_last_size() {
        assert_eq!(default_reference_size(&builtin_variants()), Ok(125.3));
        assert_eq!(default_reference_size(&[]), Err(PlotError::NoVariants));
    }

    #[test]
    fn test_marker_area_bounds_on_builtin_data() {
        let points = compute_axes(&builtin_variants(), 125.3).unwrap();
        let peak   = peak_fitness(&points);
        for p in &points {
            let a = marker_area(p.fitness, peak, (60.0, 400.0));
            assert!((60.0..=400.0).contains(&a));
        }
        // the peak variant gets 300 + 50
        assert_eq!(marker_area(peak, peak, (60.0, 400.0)), 350.0);
    }

    #[test]
    fn test_marker_area_with_zero_peak() {
        assert_eq!(marker_area(0.0, 0.0, (60.0, 400.0)), 60.0);
    }

    proptest! {
        #[test]
        fn prop_marker_area_monotonic_and_bounded(
            a    in -5.0f64..5.0,
            b    in -5.0f64..5.0,
            peak in 0.0f64..5.0,
            lo   in 1.0f64..100.0,
            span in 0.0f64..500.0,
        ) {
            let range      = (lo, lo + span);
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let small      = marker_area(low, peak, range);
            let large      = marker_area(high, peak, range);
            prop_assert!(small <= large);
            prop_assert!(small >= range.0 && large <= range.1);
        }
    }
}
