// ============================================================
// Layer 2 — Plot Configuration
// ============================================================
// Every knob of a render in one serialisable struct.
// Defaults reproduce the published PQS-FP figure: a 9×6 inch
// canvas at 300 dpi, x from -130 to 5, y from -0.05 to 1.0.
//
// #[serde(default)] lets a config file set only the fields it
// cares about; the rest fall back to Default.
//
// Reference: serde documentation (container attributes)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::error::{PlotError, Result};

/// Image formats the bitmap encoder can write, by file extension
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// Placeholder in `x_label` replaced by the reference size
pub const REFERENCE_PLACEHOLDER: &str = "{reference}";

/// Typographic points per inch
const POINTS_PER_INCH: f64 = 72.0;

/// Smallest canvas side in pixels
pub const MIN_SIDE_PX: u32 = 64;

/// Largest canvas side in pixels
pub const MAX_SIDE_PX: u32 = 16_384;

/// Largest canvas area in pixels (RGB bitmap of about 300 MB)
pub const MAX_PIXELS: u64 = 100_000_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Size subtracted from every variant's size metric.
    /// `None` uses the last variant's size.
    pub reference_size:    Option<f64>,
    /// Displayed x range (min, max)
    pub x_range:           (f64, f64),
    /// Displayed y range (min, max)
    pub y_range:           (f64, f64),
    /// Marker area clamp in points² (min, max)
    pub marker_size_range: (f64, f64),
    /// Figure size in inches (width, height)
    pub figure_size:       (f64, f64),
    pub dpi:               u32,
    pub output_path:       PathBuf,
    pub title:             String,
    pub x_label:           String,
    pub y_label:           String,
    /// Tag line under each quadrant label, quadrants I..IV
    pub quadrant_tags:     [String; 4],
    pub ideal_label:       String,
    /// TrueType/OpenType font for all text; discovered when unset
    pub font_path:         Option<PathBuf>,
    /// Hand the finished image to the platform viewer
    pub show:              bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            reference_size:    None,
            x_range:           (-130.0, 5.0),
            y_range:           (-0.05, 1.0),
            marker_size_range: (60.0, 400.0),
            figure_size:       (9.0, 6.0),
            dpi:               300,
            output_path:       PathBuf::from("pqs_fp_diagram.png"),
            title:             "PQS-FP diagram — MADETFE variants".to_string(),
            x_label:           "Parameter change (X = P − {reference})".to_string(),
            y_label:           "Fitting performance (Y = SSIM / FID)".to_string(),
            quadrant_tags:     ["OER", "OAR", "UER", "UAR"].map(String::from),
            ideal_label:       "Ideal (O)".to_string(),
            font_path:         None,
            show:              false,
        }
    }
}

impl PlotConfig {
    /// Reject configurations that cannot produce a sensible image.
    pub fn validate(&self) -> Result<()> {
        check_range("x_range", self.x_range)?;
        check_range("y_range", self.y_range)?;

        let (lo, hi) = self.marker_size_range;
        if !(lo > 0.0 && lo <= hi && hi.is_finite()) {
            return invalid(format!(
                "marker_size_range must satisfy 0 < min <= max, got ({lo}, {hi})"
            ));
        }

        let (w, h) = self.figure_size;
        if !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()) {
            return invalid(format!("figure_size must be positive, got ({w}, {h})"));
        }
        if self.dpi == 0 {
            return invalid("dpi must be positive".to_string());
        }

        let (px_w, px_h) = self.pixel_size()?;
        if px_w < MIN_SIDE_PX || px_h < MIN_SIDE_PX {
            return invalid(format!(
                "figure is {px_w}x{px_h} pixels; at least {MIN_SIDE_PX}x{MIN_SIDE_PX} is needed"
            ));
        }

        if let Some(r) = self.reference_size {
            if !r.is_finite() {
                return invalid(format!("reference_size must be finite, got {r}"));
            }
        }

        match output_extension(&self.output_path) {
            Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            _ => invalid(format!(
                "output path '{}' must end in one of: {}",
                self.output_path.display(),
                SUPPORTED_EXTENSIONS.join(", ")
            )),
        }
    }

    /// Canvas size in pixels: figure_size × dpi.
    ///
    /// Fails when either side exceeds MAX_SIDE_PX or the area exceeds
    /// MAX_PIXELS, so an oversized figure never reaches the allocator.
    pub fn pixel_size(&self) -> Result<(u32, u32)> {
        let dpi = f64::from(self.dpi);
        let (w, h) = self.figure_size;
        let too_big = || {
            PlotError::InvalidConfig(format!(
                "figure {w}x{h} in at {} dpi exceeds {MAX_SIDE_PX} pixels per side",
                self.dpi
            ))
        };

        let px_w = side_px(w * dpi).ok_or_else(too_big)?;
        let px_h = side_px(h * dpi).ok_or_else(too_big)?;
        let area = u64::from(px_w) * u64::from(px_h);
        if area > MAX_PIXELS {
            return invalid(format!(
                "figure is {px_w}x{px_h} = {area} pixels; at most {MAX_PIXELS} are allowed"
            ));
        }
        Ok((px_w, px_h))
    }

    /// Pixels per typographic point at this dpi
    pub fn px_per_pt(&self) -> f64 {
        f64::from(self.dpi) / POINTS_PER_INCH
    }

    /// X axis description with the reference size filled in
    pub fn x_label_for(&self, reference_size: f64) -> String {
        self.x_label
            .replace(REFERENCE_PLACEHOLDER, &format_reference(reference_size))
    }
}

/// Rounded pixel count for one side, `None` unless it lies in
/// `0..=MAX_SIDE_PX`.
fn side_px(value: f64) -> Option<u32> {
    let px = value.round();
    (px.is_finite() && px >= 0.0 && px <= f64::from(MAX_SIDE_PX)).then(|| px as u32)
}

/// Lower-cased extension of the output path
pub fn output_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Shortest decimal rendering of a reference size (125.3, not 125.300000)
fn format_reference(value: f64) -> String {
    let s = format!("{value:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn check_range(name: &str, (min, max): (f64, f64)) -> Result<()> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        invalid(format!("{name} must satisfy min < max, got ({min}, {max})"))
    }
}

fn invalid<T>(msg: String) -> Result<T> {
    Err(PlotError::InvalidConfig(msg))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let cfg = PlotConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.pixel_size().unwrap(), (2700, 1800));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let cfg = PlotConfig { x_range: (5.0, -130.0), ..PlotConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("x_range"));
    }

    #[test]
    fn test_bad_marker_range_is_rejected() {
        let cfg = PlotConfig { marker_size_range: (0.0, 10.0), ..PlotConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = PlotConfig { marker_size_range: (50.0, 10.0), ..PlotConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let cfg = PlotConfig { output_path: "diagram.tiff".into(), ..PlotConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = PlotConfig { output_path: "diagram".into(), ..PlotConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = PlotConfig { output_path: "out/Diagram.PNG".into(), ..PlotConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_tiny_canvas_is_rejected() {
        let cfg = PlotConfig { dpi: 5, ..PlotConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = PlotConfig { dpi: 0, ..PlotConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_oversized_canvas_is_rejected() {
        // 1,800,000 x 1,200,000 pixels
        let cfg = PlotConfig { dpi: 200_000, ..PlotConfig::default() };
        assert!(matches!(cfg.validate(), Err(PlotError::InvalidConfig(_))));
        assert!(cfg.pixel_size().is_err());

        // would saturate a u32 if cast directly
        let cfg = PlotConfig { figure_size: (1e9, 1e9), ..PlotConfig::default() };
        assert!(cfg.validate().is_err());

        // each side fits but the area does not: 16000 x 16000
        let cfg = PlotConfig { figure_size: (160.0, 160.0), dpi: 100, ..PlotConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("pixels; at most"));
    }

    #[test]
    fn test_largest_allowed_side() {
        let cfg = PlotConfig { figure_size: (16.384, 1.0), dpi: 1000, ..PlotConfig::default() };
        assert_eq!(cfg.pixel_size().unwrap(), (MAX_SIDE_PX, 1000));
        assert!(cfg.validate().is_ok());

        let cfg = PlotConfig { figure_size: (16.385, 1.0), dpi: 1000, ..PlotConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_x_label_substitutes_reference() {
        let cfg = PlotConfig::default();
        assert_eq!(cfg.x_label_for(125.3), "Parameter change (X = P − 125.3)");
        assert_eq!(cfg.x_label_for(10.0),  "Parameter change (X = P − 10)");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: PlotConfig = serde_json::from_str(r#"{ "dpi": 72, "show": true }"#).unwrap();
        assert_eq!(cfg.dpi, 72);
        assert!(cfg.show);
        assert_eq!(cfg.x_range, (-130.0, 5.0));
    }
}
