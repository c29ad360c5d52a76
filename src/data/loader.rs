// ============================================================
// Layer 4 — Variant File Loader
// ============================================================
// Loads the variant table from a JSON file. Two layouts are
// accepted:
//
//   [ { "name": "UNet", "params": 125.0, "fid": 19.23, "ssim": 0.928 }, ... ]
//
//   { "variants": [ ... ] }
//
// The file order is the plotting order — the trajectory arrows
// follow it, so it is never sorted.
//
// Reference: serde_json crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::PathBuf};

use crate::domain::traits::VariantSource;
use crate::domain::variant::{validate_all, Variant};

/// The two accepted top-level JSON shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum VariantFile {
    List(Vec<Variant>),
    Table { variants: Vec<Variant> },
}

impl VariantFile {
    fn into_variants(self) -> Vec<Variant> {
        match self {
            VariantFile::List(v) => v,
            VariantFile::Table { variants } => variants,
        }
    }
}

/// Loads variants from a JSON file.
/// Implements the VariantSource trait from Layer 3.
pub struct JsonVariantFile {
    /// Path to the JSON file
    path: PathBuf,
}

impl JsonVariantFile {
    /// Create a loader for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VariantSource for JsonVariantFile {
    fn load_all(&self) -> Result<Vec<Variant>> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read variant file '{}'", self.path.display()))?;

        let variants = serde_json::from_str::<VariantFile>(&json)
            .with_context(|| {
                format!(
                    "'{}' is not a JSON list of variants \
                     (expected name, size_metric, quality_metric_a, quality_metric_b)",
                    self.path.display()
                )
            })?
            .into_variants();

        validate_all(&variants)
            .with_context(|| format!("Invalid variant in '{}'", self.path.display()))?;

        tracing::debug!("Loaded {} variants from '{}'", variants.len(), self.path.display());
        Ok(variants)
    }

    fn describe(&self) -> String {
        format!("variant file '{}'", self.path.display())
    }
}
