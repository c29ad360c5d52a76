// ============================================================
// Layer 6 — Image Viewer
// ============================================================
// Hands a finished image to the platform's default viewer
// (`render --show`). The viewer runs detached; we do not wait
// for it to close.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Program and leading arguments that open a file on this platform
fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

/// Open `path` in the default image viewer.
pub fn open(path: &Path) -> Result<()> {
    let (program, args) = opener();
    Command::new(program)
        .args(args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Cannot launch '{program}' to show '{}'", path.display()))?;

    tracing::info!("Opened '{}' with {}", path.display(), program);
    Ok(())
}
