// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and hands the work to Layer 2 (application).
//
// Two commands are supported:
//   1. `render` — draw the quadrant diagram to an image file
//   2. `axes`   — print the coordinates behind the diagram
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use commands::{AxesArgs, Commands, RenderArgs};
use crate::application::plot_config::PlotConfig;
use crate::data::{builtin::BuiltinVariants, loader::JsonVariantFile};
use crate::domain::traits::VariantSource;
use crate::infra::{config_store::ConfigStore, table};

#[derive(Parser, Debug)]
#[command(
    name = "quadrant-plot",
    version,
    about = "Plot model variants on a size-change vs fitness quadrant diagram."
)]
pub struct Cli {
    /// The subcommand to run (render or axes)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case. Routing only.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Render(args) => run_render(args),
            Commands::Axes(args)   => run_axes(args),
        }
    }
}

fn run_render(args: RenderArgs) -> Result<()> {
    use crate::application::render_use_case::RenderUseCase;

    let base = match &args.config {
        Some(path) => ConfigStore::new(path).load()?,
        None       => PlotConfig::default(),
    };
    let config = args.apply_to(base);

    if let Some(path) = &args.save_config {
        ConfigStore::new(path).save(&config)?;
    }

    let outcome = RenderUseCase::new(config, variant_source(args.variants)).execute()?;
    println!(
        "Diagram of {} variants written to {}",
        outcome.points.len(),
        outcome.path.display()
    );
    Ok(())
}

fn run_axes(args: AxesArgs) -> Result<()> {
    use crate::application::axes_use_case::AxesUseCase;

    let use_case = AxesUseCase::new(
        variant_source(args.variants),
        args.reference_size,
        PlotConfig::default().marker_size_range,
        args.csv,
    );
    let rows = use_case.execute()?;
    print!("{}", table::format_table(&rows));
    Ok(())
}

/// JSON file when given, otherwise the built-in table
fn variant_source(path: Option<PathBuf>) -> Box<dyn VariantSource> {
    match path {
        Some(p) => Box::new(JsonVariantFile::new(p)),
        None    => Box::new(BuiltinVariants),
    }
}
