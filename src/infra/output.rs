// ============================================================
// Layer 6 — Staged Output
// ============================================================
// Renders never write straight to the requested path.
//
//   create()  → empty temp file in the destination directory,
//               same extension so the encoder picks the format
//   path()    → where the canvas writes
//   commit()  → rename over the destination
//
// Dropping a StagedOutput without committing deletes the temp
// file, so a failed render leaves nothing behind. Because the
// temp file lives in the destination directory, the final
// rename never crosses a filesystem boundary.

use anyhow::{ensure, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::{Builder, TempPath};

use crate::application::plot_config::output_extension;

const STAGING_PREFIX: &str = ".quadrant-plot-";

/// A temporary image file that becomes `target` on commit.
#[derive(Debug)]
pub struct StagedOutput {
    temp:   TempPath,
    target: PathBuf,
}

impl StagedOutput {
    /// Reserve a staging file next to `target`.
    pub fn create(target: &Path) -> Result<Self> {
        let dir = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let suffix = output_extension(target)
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();

        let temp = Builder::new()
            .prefix(STAGING_PREFIX)
            .suffix(&suffix)
            .tempfile_in(dir)
            .with_context(|| {
                format!("Cannot create '{}': is '{}' a writable directory?", target.display(), dir.display())
            })?
            .into_temp_path();

        tracing::debug!("Staging '{}' at '{}'", target.display(), temp.display());
        Ok(Self { temp, target: target.to_path_buf() })
    }

    /// File the renderer should write to
    pub fn path(&self) -> &Path {
        &self.temp
    }

    /// Move the staged file into place and return the final path.
    pub fn commit(self) -> Result<PathBuf> {
        let len = fs::metadata(&self.temp)
            .with_context(|| format!("Staged image for '{}' disappeared", self.target.display()))?
            .len();
        ensure!(len > 0, "Nothing was written for '{}'", self.target.display());

        let target = self.target;
        self.temp
            .persist(&target)
            .with_context(|| format!("Cannot move the image into '{}'", target.display()))?;

        tracing::info!("Wrote '{}' ({} bytes)", target.display(), len);
        Ok(target)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn staged_files(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with(STAGING_PREFIX))
            .count()
    }

    #[test]
    fn test_commit_moves_file_into_place() {
        let dir    = tempfile::tempdir().unwrap();
        let target = dir.path().join("plot.png");

        let staged = StagedOutput::create(&target).unwrap();
        assert!(staged.path().to_string_lossy().ends_with(".png"));
        fs::write(staged.path(), b"image bytes").unwrap();

        let written = staged.commit().unwrap();
        assert_eq!(written, target);
        assert_eq!(fs::read(&target).unwrap(), b"image bytes");
        assert_eq!(staged_files(dir.path()), 0);
    }

    #[test]
    fn test_drop_leaves_nothing() {
        let dir    = tempfile::tempdir().unwrap();
        let target = dir.path().join("plot.png");
        {
            let staged = StagedOutput::create(&target).unwrap();
            fs::write(staged.path(), b"half an image").unwrap();
        }
        assert!(!target.exists());
        assert_eq!(staged_files(dir.path()), 0);
    }

    #[test]
    fn test_empty_stage_is_not_committed() {
        let dir    = tempfile::tempdir().unwrap();
        let target = dir.path().join("plot.png");
        let staged = StagedOutput::create(&target).unwrap();
        assert!(staged.commit().is_err());
        assert!(!target.exists());
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir    = tempfile::tempdir().unwrap();
        let target = dir.path().join("no/such/dir/plot.png");
        let err    = StagedOutput::create(&target).unwrap_err();
        assert!(format!("{err:#}").contains("plot.png"));
    }
}
