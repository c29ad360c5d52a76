// ============================================================
// Layer 6 — Config Store
// ============================================================
// Saves and loads PlotConfig as pretty-printed JSON so that a
// figure can be reproduced later with exactly the same knobs.
//
//   quadrant-plot render --save-config figure.json
//   quadrant-plot render --config figure.json
//
// Loaded configs are validated before they are handed back.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::application::plot_config::PlotConfig;

/// A PlotConfig JSON file on disk.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write `cfg` as pretty JSON, replacing any existing file.
    pub fn save(&self, cfg: &PlotConfig) -> Result<()> {
        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write config to '{}'", self.path.display()))?;

        tracing::info!("Saved plot config to '{}'", self.path.display());
        Ok(())
    }

    /// Read and validate a config. Missing fields take their defaults.
    pub fn load(&self) -> Result<PlotConfig> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read config from '{}'", self.path.display()))?;

        let cfg: PlotConfig = serde_json::from_str(&json)
            .with_context(|| format!("'{}' is not a valid plot config", self.path.display()))?;
        cfg.validate()
            .with_context(|| format!("Invalid plot config in '{}'", self.path.display()))?;

        tracing::debug!("Loaded plot config from '{}'", self.path.display());
        Ok(cfg)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::PlotError;

    #[test]
    fn test_save_then_load_keeps_every_field() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("plot.json"));
        let cfg   = PlotConfig {
            reference_size: Some(42.5),
            dpi:            96,
            title:          "Ablation".to_string(),
            font_path:      Some("/fonts/Sans.ttf".into()),
            ..PlotConfig::default()
        };

        store.save(&cfg).unwrap();
        assert_eq!(store.load().unwrap(), cfg);
    }

    #[test]
    fn test_invalid_config_is_rejected_on_load() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.json");
        fs::write(&path, r#"{ "y_range": [1.0, 0.0] }"#).unwrap();

        let err = ConfigStore::new(&path).load().unwrap_err();
        assert!(matches!(err.downcast_ref::<PlotError>(), Some(PlotError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = ConfigStore::new("/nowhere/plot.json").load().unwrap_err();
        assert!(err.to_string().contains("/nowhere/plot.json"));
    }
}
