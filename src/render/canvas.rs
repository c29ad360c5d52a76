// ============================================================
// Layer 5 — Canvas Handle
// ============================================================
// Owns the bitmap drawing area for one render. Every drawing
// step receives the canvas explicitly; nothing reaches for a
// global "current figure".
//
//   acquire()  → allocate the bitmap and paint it white
//   draw_*     → used by the plotter
//   present()  → encode and flush to the staged file
//
// Sizes are given in typographic points and scaled by the
// configured dpi, so a figure looks the same at any resolution.

use anyhow::Result;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontStyle;
use std::path::Path;

use crate::render::geometry::{to_backend, Px};

/// Root drawing area in backend pixel coordinates
pub type Root<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Chart with f64 data coordinates on both axes
pub type QuadrantChart<'c, 'a> =
    ChartContext<'c, BitMapBackend<'a>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Drawing surface for a single render.
pub struct Canvas<'a> {
    root:      Root<'a>,
    px_per_pt: f64,
    /// Whether a font is registered and text can be drawn
    text:      bool,
}

impl<'a> Canvas<'a> {
    /// Allocate a `size` pixel bitmap that will be written to `path`.
    pub fn acquire(path: &'a Path, size: (u32, u32), px_per_pt: f64, text: bool) -> Result<Self> {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE)?;
        tracing::debug!("Acquired {}x{} canvas (text: {})", size.0, size.1, text);
        Ok(Self { root, px_per_pt, text })
    }

    pub fn root(&self) -> &Root<'a> {
        &self.root
    }

    /// True when labels, captions and the legend can be drawn
    pub fn has_text(&self) -> bool {
        self.text
    }

    /// Convert points to pixels
    pub fn pt(&self, points: f64) -> f64 {
        points * self.px_per_pt
    }

    /// Convert points to a whole pixel count of at least 1
    pub fn pt_px(&self, points: f64) -> u32 {
        self.pt(points).round().max(1.0) as u32
    }

    /// Sans-serif text style of `size_pt` points
    pub fn font(&self, size_pt: f64, style: FontStyle, color: &RGBColor) -> TextStyle<'static> {
        FontDesc::new(FontFamily::SansSerif, self.pt(size_pt), style).color(color)
    }

    /// Rendered size of `text` in pixels
    pub fn text_size(&self, text: &str, style: &TextStyle) -> Result<(f64, f64)> {
        let (w, h) = self.root.estimate_text_size(text, style)?;
        Ok((f64::from(w), f64::from(h)))
    }

    /// Draw `text` with its anchor at `pos`
    pub fn draw_text(&self, text: &str, style: &TextStyle, anchor: (HPos, VPos), pos: Px) -> Result<()> {
        let style = style.pos(Pos::new(anchor.0, anchor.1));
        self.root.draw_text(text, &style, to_backend(pos))?;
        Ok(())
    }

    /// Open polyline through `points`
    pub fn draw_path(&self, points: &[Px], style: ShapeStyle) -> Result<()> {
        let coords: Vec<(i32, i32)> = points.iter().copied().map(to_backend).collect();
        self.root.draw(&PathElement::new(coords, style))?;
        Ok(())
    }

    /// Filled polygon with an optional closed outline
    pub fn draw_polygon(&self, points: &[Px], fill: ShapeStyle, edge: Option<ShapeStyle>) -> Result<()> {
        let coords: Vec<(i32, i32)> = points.iter().copied().map(to_backend).collect();
        self.root.draw(&Polygon::new(coords.clone(), fill))?;

        if let (Some(edge), Some(&first)) = (edge, coords.first()) {
            let mut ring = coords;
            ring.push(first);
            self.root.draw(&PathElement::new(ring, edge))?;
        }
        Ok(())
    }

    /// Axis-aligned box between two corners, filled and outlined
    pub fn draw_box(&self, top_left: Px, bottom_right: Px, fill: ShapeStyle, border: ShapeStyle) -> Result<()> {
        let corners = [to_backend(top_left), to_backend(bottom_right)];
        self.root.draw(&Rectangle::new(corners, fill))?;
        self.root.draw(&Rectangle::new(corners, border))?;
        Ok(())
    }

    /// Encode the bitmap and write it to the path given at acquire time.
    pub fn present(self) -> Result<()> {
        self.root.present()?;
        Ok(())
    }
}
