// ============================================================
// Layer 3 — Variant Domain Type
// ============================================================
// One row of the comparison table: a model variant with a
// size-like metric and two quality metrics.
//
//   size_metric       e.g. parameter count in millions
//   quality_metric_a  lower is better   (e.g. FID)
//   quality_metric_b  higher is better  (e.g. SSIM, in [0, 1])
//
// Variant files may use the short column names from the
// original results table (params / fid / ssim); serde aliases
// map them onto the descriptive field names.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

use crate::domain::error::{PlotError, Result};

/// A named model variant with its raw metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Display name, used for the point label and the legend
    pub name: String,

    /// Size-like metric, plotted relative to the reference size
    #[serde(alias = "params", alias = "size")]
    pub size_metric: f64,

    /// Lower-is-better quality metric; the fitness denominator
    #[serde(alias = "fid")]
    pub quality_metric_a: f64,

    /// Higher-is-better quality metric in [0, 1]; the fitness numerator
    #[serde(alias = "ssim")]
    pub quality_metric_b: f64,
}

impl Variant {
    /// Create a new Variant.
    ///
    /// Example:
    ///   let v = Variant::new("UNet", 125.0, 19.23, 0.928);
    pub fn new(
        name:             impl Into<String>,
        size_metric:      f64,
        quality_metric_a: f64,
        quality_metric_b: f64,
    ) -> Self {
        Self {
            name: name.into(),
            size_metric,
            quality_metric_a,
            quality_metric_b,
        }
    }

    /// Fitness score `quality_metric_b / quality_metric_a`.
    ///
    /// A zero denominator is an error rather than an infinity.
    pub fn fitness(&self) -> Result<f64> {
        if self.quality_metric_a == 0.0 {
            return Err(PlotError::ZeroQualityMetric { name: self.name.clone() });
        }
        Ok(self.quality_metric_b / self.quality_metric_a)
    }

    /// Check that every metric is a finite number.
    pub fn check_finite(&self) -> Result<()> {
        for (field, value) in [
            ("size_metric",      self.size_metric),
            ("quality_metric_a", self.quality_metric_a),
            ("quality_metric_b", self.quality_metric_b),
        ] {
            if !value.is_finite() {
                return Err(PlotError::NonFiniteMetric {
                    name: self.name.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Check that every metric is finite and quality_metric_b lies in [0, 1].
    pub fn validate(&self) -> Result<()> {
        self.check_finite()?;

        if !(0.0..=1.0).contains(&self.quality_metric_b) {
            return Err(PlotError::QualityOutOfRange {
                name:  self.name.clone(),
                value: self.quality_metric_b,
            });
        }

        Ok(())
    }
}

/// Validate a whole dataset: non-empty, named, and every variant valid.
pub fn validate_all(variants: &[Variant]) -> Result<()> {
    if variants.is_empty() {
        return Err(PlotError::NoVariants);
    }
    for (index, v) in variants.iter().enumerate() {
        if v.name.trim().is_empty() {
            return Err(PlotError::EmptyName { index });
        }
        v.validate()?;
    }
    Ok(())
}
