// ============================================================
// Layer 6 — Axes Table Output
// ============================================================
// Writes the per-variant axis rows in two forms:
//
//   format_table() — aligned plain text for the terminal
//   write_csv()    — CSV file for spreadsheets and notebooks
//
// Example CSV output:
//   name,x,y,fitness,quadrant,marker_area
//   Feature-based,-108.700000,0.000457,0.000457,II,60.000
//   ...

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::application::axes_use_case::AxisRow;

const CSV_HEADER: &str = "name,x,y,fitness,quadrant,marker_area";

/// Write `rows` to a CSV file, replacing any existing file.
pub fn write_csv(path: &Path, rows: &[AxisRow]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create CSV '{}'", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "{CSV_HEADER}")?;
    for r in rows {
        writeln!(
            out,
            "{},{:.6},{:.6},{:.6},{},{:.3}",
            csv_field(&r.name),
            r.x,
            r.y,
            r.fitness,
            r.quadrant.numeral(),
            r.marker_area,
        )?;
    }
    out.flush()
        .with_context(|| format!("Cannot write CSV '{}'", path.display()))?;

    tracing::info!("Wrote {} rows to '{}'", rows.len(), path.display());
    Ok(())
}

/// Aligned text table with one row per variant.
pub fn format_table(rows: &[AxisRow]) -> String {
    let name_w = rows
        .iter()
        .map(|r| r.name.chars().count())
        .chain(std::iter::once("variant".len()))
        .max()
        .unwrap_or(0);

    let mut s = format!(
        "{:<name_w$}  {:>10}  {:>9}  {:>9}  {:>8}  {:>11}\n",
        "variant", "x", "y", "fitness", "quadrant", "marker_area"
    );
    for r in rows {
        s.push_str(&format!(
            "{:<name_w$}  {:>10.3}  {:>9.5}  {:>9.5}  {:>8}  {:>11.1}\n",
            r.name,
            r.x,
            r.y,
            r.fitness,
            r.quadrant.numeral(),
            r.marker_area,
        ));
    }
    s
}

/// Quote a CSV field when it contains a separator, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
