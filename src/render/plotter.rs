// ============================================================
// Layer 5 — QuadrantPlotter
// ============================================================
// Draws the diagram in back-to-front order:
//
//   1. quadrant backgrounds       (data coordinates)
//   2. grid / axes / tick labels
//   3. origin reference lines
//   4. dashed trajectory + arrows (pixel coordinates)
//   5. variant markers
//   6. variant name labels
//   7. quadrant labels
//   8. ideal reference circle + label
//   9. legend
//
// The image is staged next to the destination and renamed into
// place only after the bitmap has been flushed.
//
// Reference: plotters crate documentation (ChartBuilder, elements)

use anyhow::{ensure, Context, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};
use plotters::style::FontStyle;
use std::path::PathBuf;

use crate::application::plot_config::PlotConfig;
use crate::domain::axes::{best_fitness, marker_area, peak_fitness, AxisPoint};
use crate::domain::error::PlotError;
use crate::domain::quadrant::Quadrant;
use crate::domain::variant::Variant;
use crate::infra::{fonts, output::StagedOutput};
use crate::render::canvas::{Canvas, QuadrantChart};
use crate::render::geometry::{
    arrow_head, clip_polygon, clip_segment, dash_segments, nice_ticks, regular_polygon, shorten, Px, Rect,
};
use crate::render::style::{
    tone_accent, tone_fill, variant_style, DISTINCT_STYLES, FILL_ALPHA, LABEL_BOX_ALPHA, PATH_GREY,
};

/// Area of the open "ideal" circle in points²
const IDEAL_MARKER_AREA: f64 = 250.0;

/// Legend swatch area in points²
const LEGEND_MARKER_AREA: f64 = 64.0;

/// Segments used to trace the ideal circle
const IDEAL_RING_SIDES: usize = 64;

/// Renders one quadrant diagram per call.
pub struct QuadrantPlotter<'c> {
    config: &'c PlotConfig,
}

impl<'c> QuadrantPlotter<'c> {
    pub fn new(config: &'c PlotConfig) -> Self {
        Self { config }
    }

    /// Render `variants` at `points` and write the image to
    /// `config.output_path`. Returns the written path.
    ///
    /// Nothing is created at the output path unless the whole
    /// render succeeds.
    pub fn render(
        &self,
        variants:       &[Variant],
        points:         &[AxisPoint],
        reference_size: f64,
    ) -> Result<PathBuf> {
        ensure!(
            variants.len() == points.len(),
            "{} variants but {} axis points",
            variants.len(),
            points.len()
        );
        if variants.is_empty() {
            return Err(PlotError::NoVariants.into());
        }
        self.config.validate()?;
        if variants.len() > DISTINCT_STYLES {
            tracing::warn!(
                "{} variants; marker styles repeat after the first {}",
                variants.len(),
                DISTINCT_STYLES
            );
        }

        let text   = fonts::ensure_fonts(self.config.font_path.as_deref()).is_some();
        let staged = StagedOutput::create(&self.config.output_path)?;
        {
            let canvas = Canvas::acquire(
                staged.path(),
                self.config.pixel_size()?,
                self.config.px_per_pt(),
                text,
            )?;
            self.draw(&canvas, variants, points, reference_size)
                .context("Failed to draw the quadrant diagram")?;
            canvas
                .present()
                .with_context(|| format!("Failed to encode '{}'", self.config.output_path.display()))?;
        }
        staged.commit()
    }

    fn draw(
        &self,
        canvas:         &Canvas<'_>,
        variants:       &[Variant],
        points:         &[AxisPoint],
        reference_size: f64,
    ) -> Result<()> {
        let mut chart = self.build_chart(canvas)?;

        self.fill_quadrants(&mut chart)?;
        self.draw_grid(canvas, &mut chart, reference_size)?;
        self.draw_origin_lines(canvas, &mut chart)?;

        let peak = peak_fitness(points);
        let centers: Vec<Px> = points
            .iter()
            .map(|p| {
                let (x, y) = chart.backend_coord(&(p.x, p.y));
                (f64::from(x), f64::from(y))
            })
            .collect();
        let radii: Vec<f64> = points
            .iter()
            .map(|p| canvas.pt(area_to_radius(marker_area(p.fitness, peak, self.config.marker_size_range))))
            .collect();

        // everything drawn in raw pixels stays inside the plot frame
        let plot = plot_rect(&chart);
        draw_trajectory(canvas, plot, &centers, &radii)?;
        draw_markers(canvas, plot, &centers, &radii)?;

        if canvas.has_text() {
            label_variants(canvas, plot, variants, &centers, &radii)?;
            self.label_quadrants(canvas, &chart)?;
        }
        if let Some(best) = best_fitness(points) {
            self.draw_ideal(canvas, &chart, plot, best)?;
        }
        if canvas.has_text() {
            draw_legend(canvas, &chart, variants)?;
        }
        Ok(())
    }

    fn build_chart<'b, 'a>(&self, canvas: &'b Canvas<'a>) -> Result<QuadrantChart<'b, 'a>> {
        let (x0, x1) = self.config.x_range;
        let (y0, y1) = self.config.y_range;

        let mut builder = ChartBuilder::on(canvas.root());
        builder.margin(canvas.pt_px(10.0));

        if canvas.has_text() {
            builder
                .caption(&self.config.title, canvas.font(13.0, FontStyle::Bold, &BLACK))
                .x_label_area_size(canvas.pt_px(34.0))
                .y_label_area_size(canvas.pt_px(46.0));
        } else {
            builder
                .x_label_area_size(canvas.pt_px(6.0))
                .y_label_area_size(canvas.pt_px(6.0));
        }

        Ok(builder.build_cartesian_2d(x0..x1, y0..y1)?)
    }

    fn fill_quadrants(&self, chart: &mut QuadrantChart<'_, '_>) -> Result<()> {
        for q in Quadrant::ALL {
            if let Some((lo, hi)) = quadrant_bounds(q, self.config.x_range, self.config.y_range) {
                let style = tone_fill(q.tone()).mix(FILL_ALPHA).filled();
                chart.draw_series(std::iter::once(Rectangle::new([lo, hi], style)))?;
            }
        }
        Ok(())
    }

    fn draw_grid(
        &self,
        canvas:         &Canvas<'_>,
        chart:          &mut QuadrantChart<'_, '_>,
        reference_size: f64,
    ) -> Result<()> {
        let line = canvas.pt_px(0.5);

        if canvas.has_text() {
            chart
                .configure_mesh()
                .x_desc(self.config.x_label_for(reference_size))
                .y_desc(&self.config.y_label)
                .axis_desc_style(canvas.font(11.0, FontStyle::Normal, &BLACK))
                .label_style(canvas.font(9.0, FontStyle::Normal, &BLACK))
                .axis_style(BLACK.stroke_width(line))
                .bold_line_style(BLACK.mix(0.15).stroke_width(line))
                .light_line_style(TRANSPARENT)
                .x_labels(8)
                .y_labels(8)
                .draw()?;
            return Ok(());
        }

        // Without a font: dotted grid at round tick values plus a frame.
        let (x0, x1) = self.config.x_range;
        let (y0, y1) = self.config.y_range;
        let to_px = |x: f64, y: f64| {
            let (px, py) = chart.backend_coord(&(x, y));
            (f64::from(px), f64::from(py))
        };
        let (dot, gap) = (canvas.pt(1.0), canvas.pt(2.0));

        let mut lines: Vec<(Px, Px)> = Vec::new();
        lines.extend(nice_ticks(x0, x1, 8).into_iter().map(|x| (to_px(x, y0), to_px(x, y1))));
        lines.extend(nice_ticks(y0, y1, 8).into_iter().map(|y| (to_px(x0, y), to_px(x1, y))));
        for (from, to) in lines {
            for (a, b) in dash_segments(from, to, dot, gap) {
                canvas.draw_path(&[a, b], BLACK.mix(0.3).stroke_width(line))?;
            }
        }

        let frame = [to_px(x0, y1), to_px(x1, y1), to_px(x1, y0), to_px(x0, y0), to_px(x0, y1)];
        canvas.draw_path(&frame, BLACK.stroke_width(line))
    }

    fn draw_origin_lines(&self, canvas: &Canvas<'_>, chart: &mut QuadrantChart<'_, '_>) -> Result<()> {
        let (x0, x1) = self.config.x_range;
        let (y0, y1) = self.config.y_range;
        let width    = canvas.pt_px(1.0);

        if (x0..=x1).contains(&0.0) {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(0.0, y0), (0.0, y1)],
                BLACK.stroke_width(width),
            )))?;
        }
        if (y0..=y1).contains(&0.0) {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(x0, 0.0), (x1, 0.0)],
                BLACK.stroke_width(width),
            )))?;
        }
        Ok(())
    }

    fn label_quadrants(&self, canvas: &Canvas<'_>, chart: &QuadrantChart<'_, '_>) -> Result<()> {
        let plot = plot_rect(chart);
        let plot = (plot.min, plot.max);
        let pad  = canvas.pt(5.0);
        let gap = canvas.pt(2.0);

        for q in Quadrant::ALL {
            let Some((lo, hi)) = quadrant_bounds(q, self.config.x_range, self.config.y_range) else {
                continue;
            };
            let accent = tone_accent(q.tone());
            let style  = canvas.font(11.0, FontStyle::Bold, &accent);

            let title = q.to_string();
            let tag   = &self.config.quadrant_tags[q.index()];
            let (w1, h1) = canvas.text_size(&title, &style)?;
            let (w2, h2) = canvas.text_size(tag, &style)?;
            let size = (w1.max(w2) + 2.0 * pad, h1 + gap + h2 + 2.0 * pad);

            let (cx, cy) = chart.backend_coord(&((lo.0 + hi.0) / 2.0, (lo.1 + hi.1) / 2.0));
            let (top_left, bottom_right) = label_box((f64::from(cx), f64::from(cy)), size, plot);

            canvas.draw_box(
                top_left,
                bottom_right,
                tone_fill(q.tone()).mix(LABEL_BOX_ALPHA).filled(),
                accent.stroke_width(canvas.pt_px(2.0)),
            )?;

            let mid = (top_left.0 + bottom_right.0) / 2.0;
            canvas.draw_text(&title, &style, (HPos::Center, VPos::Top), (mid, top_left.1 + pad))?;
            canvas.draw_text(tag, &style, (HPos::Center, VPos::Top), (mid, top_left.1 + pad + h1 + gap))?;
        }
        Ok(())
    }

    fn draw_ideal(&self, canvas: &Canvas<'_>, chart: &QuadrantChart<'_, '_>, plot: Rect, best: f64) -> Result<()> {
        let (x, y)  = chart.backend_coord(&(0.0, best));
        let center  = (f64::from(x), f64::from(y));
        let radius  = canvas.pt(area_to_radius(IDEAL_MARKER_AREA));
        let stroke  = BLACK.stroke_width(canvas.pt_px(1.2));

        let ring = regular_polygon(center, radius, IDEAL_RING_SIDES, 0.0);
        for (i, &a) in ring.iter().enumerate() {
            let b = ring[(i + 1) % ring.len()];
            if let Some((a, b)) = clip_segment(a, b, plot) {
                canvas.draw_path(&[a, b], stroke)?;
            }
        }

        if canvas.has_text() && plot.contains(center) {
            let style = canvas.font(9.0, FontStyle::Italic, &BLACK);
            canvas.draw_text(
                &self.config.ideal_label,
                &style,
                (HPos::Left, VPos::Bottom),
                (center.0 + radius + canvas.pt(3.0), center.1 - radius * 0.5),
            )?;
        }
        Ok(())
    }
}

/// Dashed grey connector in list order, one arrowhead per segment.
/// Arrow tips stop at the edge of the target marker.
fn draw_trajectory(canvas: &Canvas<'_>, plot: Rect, centers: &[Px], radii: &[f64]) -> Result<()> {
    let width = canvas.pt_px(1.0);
    let (dash, gap) = (canvas.pt(4.0), canvas.pt(2.5));

    for (i, pair) in centers.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        for (a, b) in dash_segments(from, to, dash, gap) {
            if let Some((a, b)) = clip_segment(a, b, plot) {
                canvas.draw_path(&[a, b], PATH_GREY.stroke_width(width))?;
            }
        }

        let tip = shorten(from, to, radii[i + 1]).unwrap_or(to);
        if let Some(head) = arrow_head(from, tip, canvas.pt(7.0), canvas.pt(5.0)) {
            let head = clip_polygon(&head, plot);
            if head.len() >= 3 {
                canvas.draw_polygon(&head, PATH_GREY.mix(0.8).filled(), None)?;
            }
        }
    }
    Ok(())
}

fn draw_markers(canvas: &Canvas<'_>, plot: Rect, centers: &[Px], radii: &[f64]) -> Result<()> {
    let edge = canvas.pt_px(0.8);
    for (i, (&center, &radius)) in centers.iter().zip(radii).enumerate() {
        let style   = variant_style(i);
        let outline = clip_polygon(&style.shape.outline(center, radius), plot);
        if outline.len() < 3 {
            continue;
        }
        canvas.draw_polygon(&outline, style.color.filled(), Some(BLACK.stroke_width(edge)))?;
    }
    Ok(())
}

fn label_variants(canvas: &Canvas<'_>, plot: Rect, variants: &[Variant], centers: &[Px], radii: &[f64]) -> Result<()> {
    let style = canvas.font(9.0, FontStyle::Bold, &BLACK);
    for ((variant, &center), &radius) in variants.iter().zip(centers).zip(radii) {
        if !plot.contains(center) {
            continue;
        }
        let offset = radius * 0.7 + canvas.pt(2.0);
        canvas.draw_text(
            &variant.name,
            &style,
            (HPos::Left, VPos::Bottom),
            (center.0 + offset, center.1 - offset),
        )?;
    }
    Ok(())
}

fn draw_legend(canvas: &Canvas<'_>, chart: &QuadrantChart<'_, '_>, variants: &[Variant]) -> Result<()> {
    let style   = canvas.font(8.0, FontStyle::Normal, &BLACK);
    let plot    = plot_rect(chart);
    let pad     = canvas.pt(4.0);
    let radius  = canvas.pt(area_to_radius(LEGEND_MARKER_AREA));
    let swatch  = 2.0 * radius;

    let mut text_w: f64 = 0.0;
    let mut row_h: f64  = swatch;
    for v in variants {
        let (w, h) = canvas.text_size(&v.name, &style)?;
        text_w = text_w.max(w);
        row_h  = row_h.max(h);
    }
    row_h += canvas.pt(2.0);

    let top_left     = (plot.min.0 + pad, plot.min.1 + pad);
    let bottom_right = (
        top_left.0 + pad + swatch + pad + text_w + pad,
        top_left.1 + pad + row_h * variants.len() as f64 + pad,
    );
    canvas.draw_box(
        top_left,
        bottom_right,
        WHITE.mix(0.95).filled(),
        BLACK.mix(0.4).stroke_width(canvas.pt_px(0.5)),
    )?;

    for (i, v) in variants.iter().enumerate() {
        let vs     = variant_style(i);
        let mid_y  = top_left.1 + pad + row_h * (i as f64 + 0.5);
        let center = (top_left.0 + pad + radius, mid_y);
        canvas.draw_polygon(
            &vs.shape.outline(center, radius),
            vs.color.filled(),
            Some(BLACK.stroke_width(canvas.pt_px(0.5))),
        )?;
        canvas.draw_text(&v.name, &style, (HPos::Left, VPos::Center), (center.0 + radius + pad, mid_y))?;
    }
    Ok(())
}

/// Pixel extent of the chart's plotting area
fn plot_rect(chart: &QuadrantChart<'_, '_>) -> Rect {
    let (px_x, px_y) = chart.plotting_area().get_pixel_range();
    Rect {
        min: (f64::from(px_x.start), f64::from(px_y.start)),
        max: (f64::from(px_x.end), f64::from(px_y.end)),
    }
}

/// Marker radius in points for an area in points²
/// (a marker of area `s` is `sqrt(s)` points across).
pub fn area_to_radius(area: f64) -> f64 {
    area.max(0.0).sqrt() / 2.0
}

/// Data-space corners `(min, max)` of quadrant `q` clipped to the
/// display ranges, with the origin clamped into range. `None` when the
/// quadrant has no visible area.
pub fn quadrant_bounds(
    q:       Quadrant,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let ox = 0.0_f64.clamp(x_range.0, x_range.1);
    let oy = 0.0_f64.clamp(y_range.0, y_range.1);
    let (xa, xb) = if q.is_right() { (ox, x_range.1) } else { (x_range.0, ox) };
    let (ya, yb) = if q.is_top()   { (oy, y_range.1) } else { (y_range.0, oy) };
    (xa < xb && ya < yb).then_some(((xa, ya), (xb, yb)))
}

/// Box of `size` centred on `center`, shifted to stay inside `bounds`
/// (top-left, bottom-right) where it fits.
pub fn label_box(center: Px, size: (f64, f64), bounds: (Px, Px)) -> (Px, Px) {
    let place = |c: f64, len: f64, lo: f64, hi: f64| {
        let start = c - len / 2.0;
        if len >= hi - lo { lo } else { start.clamp(lo, hi - len) }
    };
    let x = place(center.0, size.0, bounds.0 .0, bounds.1 .0);
    let y = place(center.1, size.1, bounds.0 .1, bounds.1 .1);
    ((x, y), (x + size.0, y + size.1))
}
