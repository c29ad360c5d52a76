// ============================================================
// Layer 6 — Font Discovery
// ============================================================
// plotters is built with its pure-Rust ab_glyph text backend,
// which draws only fonts registered at runtime. This module
// finds one TrueType/OpenType file and registers it as the
// "sans-serif" family for every font style.
//
// Search order:
//   1. PlotConfig::font_path
//   2. $QUADRANT_PLOT_FONT
//   3. well-known system locations (Linux, macOS, Windows)
//
// The plotters font registry is process-wide, so registration
// happens at most once; the first successful font wins for the
// lifetime of the process. Registered bytes are leaked because
// the registry requires &'static data.
//
// When nothing is found, rendering continues without text.

use anyhow::{anyhow, Context, Result};
use plotters::style::{register_font, FontStyle};
use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

/// Environment variable naming a font file
pub const FONT_ENV: &str = "QUADRANT_PLOT_FONT";

/// Family name the plotter asks for
const FAMILY: &str = "sans-serif";

const SYSTEM_FONTS: [&str; 10] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static REGISTERED: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Make sure a font is registered, returning the file in use, or
/// `None` when text cannot be drawn in this process.
pub fn ensure_fonts(preferred: Option<&Path>) -> Option<&'static Path> {
    let registered = REGISTERED
        .get_or_init(|| {
            let env_font = env::var_os(FONT_ENV).map(PathBuf::from);
            for path in candidate_paths(preferred, env_font.as_deref()) {
                match register_family(&path) {
                    Ok(()) => {
                        tracing::info!("Using font '{}'", path.display());
                        return Some(path);
                    }
                    Err(e) => tracing::debug!("Skipping font candidate: {:#}", e),
                }
            }
            tracing::warn!(
                "No usable font found (set {} or --font); labels, legend and captions are omitted",
                FONT_ENV
            );
            None
        })
        .as_deref();

    if let (Some(wanted), Some(active)) = (preferred, registered) {
        if wanted != active {
            tracing::debug!(
                "Font '{}' requested but '{}' is already registered for this process",
                wanted.display(),
                active.display()
            );
        }
    }
    registered
}

/// Candidate font files in priority order. Explicit choices are kept
/// even if missing so that the failure is logged; system paths are
/// filtered to those that exist.
pub fn candidate_paths(preferred: Option<&Path>, env_font: Option<&Path>) -> Vec<PathBuf> {
    preferred
        .into_iter()
        .chain(env_font)
        .map(Path::to_path_buf)
        .chain(
            SYSTEM_FONTS
                .iter()
                .map(PathBuf::from)
                .filter(|p| p.is_file()),
        )
        .collect()
}

/// `Family-Bold.ext` next to a regular font file, if present.
/// `Family-Regular.ttf` maps to `Family-Bold.ttf`.
pub fn bold_sibling(path: &Path) -> Option<PathBuf> {
    let stem = path.file_stem()?.to_str()?;
    let ext  = path.extension()?.to_str()?;
    let base = stem.strip_suffix("-Regular").unwrap_or(stem);
    let bold = path.with_file_name(format!("{base}-Bold.{ext}"));
    bold.is_file().then_some(bold)
}

/// Register `path` as the sans-serif family for every style.
fn register_family(path: &Path) -> Result<()> {
    let regular = leak_font(path)?;
    let bold = match bold_sibling(path) {
        Some(b) => leak_font(&b).unwrap_or(regular),
        None    => regular,
    };

    for (style, bytes) in [
        (FontStyle::Normal,  regular),
        (FontStyle::Italic,  regular),
        (FontStyle::Oblique, regular),
        (FontStyle::Bold,    bold),
    ] {
        register_font(FAMILY, style, bytes)
            .map_err(|_| anyhow!("'{}' is not a usable TrueType/OpenType font", path.display()))?;
    }
    Ok(())
}

fn leak_font(path: &Path) -> Result<&'static [u8]> {
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read font '{}'", path.display()))?;
    Ok(Box::leak(bytes.into_boxed_slice()))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_candidates_come_first() {
        let preferred = Path::new("/nowhere/chosen.ttf");
        let env_font  = Path::new("/nowhere/env.ttf");
        let paths     = candidate_paths(Some(preferred), Some(env_font));
        assert_eq!(paths[0], preferred);
        assert_eq!(paths[1], env_font);
        // every other entry is an existing system font
        assert!(paths[2..].iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_bold_sibling() {
        let dir     = tempfile::tempdir().unwrap();
        let regular = dir.path().join("Sans-Regular.ttf");
        let bold    = dir.path().join("Sans-Bold.ttf");
        fs::write(&regular, b"regular").unwrap();
        assert_eq!(bold_sibling(&regular), None);

        fs::write(&bold, b"bold").unwrap();
        assert_eq!(bold_sibling(&regular), Some(bold));
    }

    #[test]
    fn test_garbage_font_is_rejected() {
        let dir  = tempfile::tempdir().unwrap();
        let fake = dir.path().join("fake.ttf");
        fs::write(&fake, b"definitely not a font").unwrap();
        assert!(register_family(&fake).is_err());
    }

    #[test]
    fn test_missing_font_is_rejected() {
        assert!(register_family(Path::new("/nowhere/missing.ttf")).is_err());
    }
}
