// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `render` and `axes`, and their
// flags.
//
// Render flags are overrides: anything left unset keeps the
// value from --config (or the built-in default), so a saved
// config can be tweaked one flag at a time.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::plot_config::PlotConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw the quadrant diagram and write it to an image file
    Render(RenderArgs),

    /// Print each variant's coordinates, quadrant and marker size
    Axes(AxesArgs),
}

/// All arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON file with the variant list (built-in table if omitted)
    #[arg(long)]
    pub variants: Option<PathBuf>,

    /// Plot config JSON to start from
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the effective config here before rendering
    #[arg(long)]
    pub save_config: Option<PathBuf>,

    /// Size subtracted from every variant's size (default: last variant's)
    #[arg(long, allow_hyphen_values = true)]
    pub reference_size: Option<f64>,

    /// Image path; the extension picks the format (png, jpg, bmp)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Resolution in dots per inch
    #[arg(long)]
    pub dpi: Option<u32>,

    /// Left edge of the x axis
    #[arg(long, allow_hyphen_values = true)]
    pub x_min: Option<f64>,

    /// Right edge of the x axis
    #[arg(long, allow_hyphen_values = true)]
    pub x_max: Option<f64>,

    /// Bottom of the y axis
    #[arg(long, allow_hyphen_values = true)]
    pub y_min: Option<f64>,

    /// Top of the y axis
    #[arg(long, allow_hyphen_values = true)]
    pub y_max: Option<f64>,

    /// Figure title
    #[arg(long)]
    pub title: Option<String>,

    /// TrueType/OpenType font for labels
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Open the image in the system viewer afterwards
    #[arg(long)]
    pub show: bool,
}

impl RenderArgs {
    /// Apply every flag that was given on top of `base`.
    /// The application layer only ever sees the resulting PlotConfig.
    pub fn apply_to(&self, base: PlotConfig) -> PlotConfig {
        let mut cfg = base;

        if let Some(r) = self.reference_size { cfg.reference_size = Some(r); }
        if let Some(p) = &self.output        { cfg.output_path    = p.clone(); }
        if let Some(d) = self.dpi            { cfg.dpi            = d; }
        if let Some(v) = self.x_min          { cfg.x_range.0      = v; }
        if let Some(v) = self.x_max          { cfg.x_range.1      = v; }
        if let Some(v) = self.y_min          { cfg.y_range.0      = v; }
        if let Some(v) = self.y_max          { cfg.y_range.1      = v; }
        if let Some(t) = &self.title         { cfg.title          = t.clone(); }
        if let Some(f) = &self.font          { cfg.font_path      = Some(f.clone()); }
        if self.show                         { cfg.show           = true; }

        cfg
    }
}

/// All arguments for the `axes` command
#[derive(Args, Debug)]
pub struct AxesArgs {
    /// JSON file with the variant list (built-in table if omitted)
    #[arg(long)]
    pub variants: Option<PathBuf>,

    /// Size subtracted from every variant's size (default: last variant's)
    #[arg(long, allow_hyphen_values = true)]
    pub reference_size: Option<f64>,

    /// Also write the rows to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
