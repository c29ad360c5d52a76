// ============================================================
// Layer 5 — Pixel Geometry
// ============================================================
// Plain f64 geometry in backend pixel space (y grows downward):
//
//   dash_segments  — split a line into dash pieces
//   arrow_head     — triangle at the end of a segment
//   shorten        — pull a segment's end back by a distance
//   clip_*         — cut segments and polygons to the plot area
//   nice_ticks     — evenly spaced "round" tick values
//
// Kept free of plotters types so it can be unit tested.

/// A point in pixel space
pub type Px = (f64, f64);

/// Axis-aligned pixel rectangle, `min` top-left, `max` bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Px,
    pub max: Px,
}

impl Rect {
    pub fn contains(&self, p: Px) -> bool {
        (self.min.0..=self.max.0).contains(&p.0) && (self.min.1..=self.max.1).contains(&p.1)
    }
}

/// Round a pixel-space point to a backend coordinate.
pub fn to_backend((x, y): Px) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

fn length(from: Px, to: Px) -> f64 {
    (to.0 - from.0).hypot(to.1 - from.1)
}

/// Split the segment `from → to` into dashes of `dash` pixels separated by
/// `gap` pixels. The final dash is truncated at `to`.
pub fn dash_segments(from: Px, to: Px, dash: f64, gap: f64) -> Vec<(Px, Px)> {
    let total = length(from, to);
    if total == 0.0 || dash <= 0.0 {
        return Vec::new();
    }
    let (ux, uy) = ((to.0 - from.0) / total, (to.1 - from.1) / total);
    let at = |d: f64| (from.0 + ux * d, from.1 + uy * d);

    let mut out   = Vec::new();
    let mut start = 0.0;
    while start < total {
        let end = (start + dash).min(total);
        out.push((at(start), at(end)));
        start = end + gap.max(0.0);
    }
    out
}

/// Move `to` back towards `from` by `by` pixels. Returns `None` when the
/// segment is not longer than `by`.
pub fn shorten(from: Px, to: Px, by: f64) -> Option<Px> {
    let total = length(from, to);
    if total <= by {
        return None;
    }
    let keep = (total - by) / total;
    Some((from.0 + (to.0 - from.0) * keep, from.1 + (to.1 - from.1) * keep))
}

/// Triangle `[tip, left, right]` for an arrow travelling `tail → tip`.
///
/// `length` is measured back from the tip along the segment, `width` is
/// the full base width. A head longer than the segment is scaled down to
/// fit; a zero-length segment has no direction and yields `None`.
pub fn arrow_head(tail: Px, tip: Px, length: f64, width: f64) -> Option<[Px; 3]> {
    let total = self::length(tail, tip);
    if total == 0.0 {
        return None;
    }
    let scale        = (total / length).min(1.0);
    let (len, half)  = (length * scale, width * scale / 2.0);
    let (ux, uy)     = ((tip.0 - tail.0) / total, (tip.1 - tail.1) / total);
    let base         = (tip.0 - ux * len, tip.1 - uy * len);
    let (nx, ny)     = (-uy, ux);

    Some([
        tip,
        (base.0 + nx * half, base.1 + ny * half),
        (base.0 - nx * half, base.1 - ny * half),
    ])
}

/// Vertices of a regular polygon around `center`, first vertex at angle
/// `start` (radians, 0 = pointing right, counter-clockwise on screen).
pub fn regular_polygon(center: Px, radius: f64, sides: usize, start: f64) -> Vec<Px> {
    (0..sides)
        .map(|i| {
            let a = start + i as f64 * std::f64::consts::TAU / sides as f64;
            (center.0 + radius * a.cos(), center.1 - radius * a.sin())
        })
        .collect()
}

/// Five-pointed star around `center`, point up.
pub fn star(center: Px, outer: f64, inner: f64) -> Vec<Px> {
    (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let a = std::f64::consts::FRAC_PI_2 + i as f64 * std::f64::consts::PI / 5.0;
            (center.0 + r * a.cos(), center.1 - r * a.sin())
        })
        .collect()
}

/// Part of the segment `a → b` inside `rect` (Liang–Barsky), or `None`
/// when it misses the rectangle.
pub fn clip_segment(a: Px, b: Px, rect: Rect) -> Option<(Px, Px)> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);

    for (p, q) in [
        (-dx, a.0 - rect.min.0),
        ( dx, rect.max.0 - a.0),
        (-dy, a.1 - rect.min.1),
        ( dy, rect.max.1 - a.1),
    ] {
        if p == 0.0 {
            // parallel to this edge
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = t1.min(t);
        }
    }
    Some(((a.0 + t0 * dx, a.1 + t0 * dy), (a.0 + t1 * dx, a.1 + t1 * dy)))
}

/// Clip a polygon to `rect` (Sutherland–Hodgman). Empty when nothing
/// of it is inside.
pub fn clip_polygon(points: &[Px], rect: Rect) -> Vec<Px> {
    let mut out = points.to_vec();

    for edge in 0..4 {
        if out.is_empty() {
            break;
        }
        let input  = std::mem::take(&mut out);
        let inside = |p: Px| match edge {
            0 => p.0 >= rect.min.0,
            1 => p.0 <= rect.max.0,
            2 => p.1 >= rect.min.1,
            _ => p.1 <= rect.max.1,
        };
        // only called when a and b straddle the edge, so the divisor is non-zero
        let cross = |a: Px, b: Px| {
            let t = match edge {
                0 => (rect.min.0 - a.0) / (b.0 - a.0),
                1 => (rect.max.0 - a.0) / (b.0 - a.0),
                2 => (rect.min.1 - a.1) / (b.1 - a.1),
                _ => (rect.max.1 - a.1) / (b.1 - a.1),
            };
            (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t)
        };

        let mut prev = input[input.len() - 1];
        for &cur in &input {
            match (inside(prev), inside(cur)) {
                (true, true)   => out.push(cur),
                (true, false)  => out.push(cross(prev, cur)),
                (false, true)  => {
                    out.push(cross(prev, cur));
                    out.push(cur);
                }
                (false, false) => {}
            }
            prev = cur;
        }
    }
    out
}

/// Round tick values covering `[min, max]` with roughly `target` steps
/// of 1, 2, or 5 × 10ⁿ.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) || target == 0 {
        return Vec::new();
    }
    let raw  = (max - min) / target as f64;
    let mag  = 10f64.powi(raw.log10().floor() as i32);
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw * (1.0 - 1e-9))
        .unwrap_or(10.0 * mag);
    if !(step.is_finite() && step > 0.0) {
        return Vec::new();
    }

    let first = (min / step).ceil() as i64;
    let last  = (max / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Px, b: Px) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn test_dashes_cover_the_segment() {
        let dashes = dash_segments((0.0, 0.0), (25.0, 0.0), 6.0, 4.0);
        // 0-6, 10-16, 20-25
        assert_eq!(dashes.len(), 3);
        assert!(close(dashes[0].0, (0.0, 0.0)));
        assert!(close(dashes[1].0, (10.0, 0.0)));
        assert!(close(dashes[2].1, (25.0, 0.0)));
    }

    #[test]
    fn test_dashes_of_degenerate_segment() {
        assert!(dash_segments((3.0, 3.0), (3.0, 3.0), 6.0, 4.0).is_empty());
    }

    #[test]
    fn test_arrow_head_points_at_tip() {
        let [tip, left, right] = arrow_head((0.0, 0.0), (100.0, 0.0), 10.0, 8.0).unwrap();
        assert!(close(tip, (100.0, 0.0)));
        assert!(close(left, (90.0, 4.0)));
        assert!(close(right, (90.0, -4.0)));
    }

    #[test]
    fn test_arrow_head_shrinks_on_short_segment() {
        let [tip, left, _] = arrow_head((0.0, 0.0), (5.0, 0.0), 10.0, 8.0).unwrap();
        assert!(close(tip, (5.0, 0.0)));
        // half-size head: length 5, width 4
        assert!(close(left, (0.0, 2.0)));
        assert!(arrow_head((1.0, 1.0), (1.0, 1.0), 10.0, 8.0).is_none());
    }

    #[test]
    fn test_shorten() {
        assert!(close(shorten((0.0, 0.0), (0.0, 10.0), 4.0).unwrap(), (0.0, 6.0)));
        assert!(shorten((0.0, 0.0), (0.0, 3.0), 4.0).is_none());
    }

    #[test]
    fn test_polygon_vertices_on_circle() {
        let pts = regular_polygon((10.0, 10.0), 5.0, 4, 0.0);
        assert_eq!(pts.len(), 4);
        assert!(close(pts[0], (15.0, 10.0)));
        // counter-clockwise on screen means the second vertex is above
        assert!(close(pts[1], (10.0, 5.0)));
    }

    #[test]
    fn test_star_alternates_radii() {
        let pts = star((0.0, 0.0), 10.0, 4.0);
        assert_eq!(pts.len(), 10);
        assert!(close(pts[0], (0.0, -10.0)));
        let r1 = pts[1].0.hypot(pts[1].1);
        assert!((r1 - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_nice_ticks() {
        let ys = nice_ticks(0.0, 1.0, 5);
        assert_eq!(ys.len(), 6);
        for (tick, expected) in ys.iter().zip([0.0, 0.2, 0.4, 0.6, 0.8, 1.0]) {
            assert!((tick - expected).abs() < 1e-9);
        }

        // span 135 over 6 steps → step 50
        let xs = nice_ticks(-130.0, 5.0, 6);
        assert_eq!(xs.len(), 3);
        assert!((xs[0] + 100.0).abs() < 1e-9);
        assert!(xs[2].abs() < 1e-9);

        assert!(nice_ticks(1.0, 1.0, 5).is_empty());
    }

    #[test]
    fn test_nice_ticks_on_subnormal_span() {
        // the step underflows to zero
        assert!(nice_ticks(0.0, 1e-320, 5).is_empty());
        assert!(nice_ticks(-1e-320, 0.0, 8).is_empty());
    }

    const PLOT: Rect = Rect { min: (0.0, 0.0), max: (100.0, 50.0) };

    #[test]
    fn test_clip_segment() {
        // fully inside: unchanged
        let (a, b) = clip_segment((10.0, 10.0), (20.0, 20.0), PLOT).unwrap();
        assert!(close(a, (10.0, 10.0)) && close(b, (20.0, 20.0)));

        // leaves through the right edge
        let (a, b) = clip_segment((50.0, 25.0), (150.0, 25.0), PLOT).unwrap();
        assert!(close(a, (50.0, 25.0)) && close(b, (100.0, 25.0)));

        // crosses the whole plot from left to right
        let (a, b) = clip_segment((-50.0, 10.0), (150.0, 10.0), PLOT).unwrap();
        assert!(close(a, (0.0, 10.0)) && close(b, (100.0, 10.0)));

        // entirely to the left, and parallel above
        assert!(clip_segment((-30.0, 10.0), (-5.0, 40.0), PLOT).is_none());
        assert!(clip_segment((10.0, -5.0), (90.0, -5.0), PLOT).is_none());
    }

    #[test]
    fn test_clip_polygon() {
        let inside = [(10.0, 10.0), (20.0, 10.0), (20.0, 20.0), (10.0, 20.0)];
        assert_eq!(clip_polygon(&inside, PLOT), inside.to_vec());

        let outside = [(110.0, 10.0), (120.0, 10.0), (120.0, 20.0)];
        assert!(clip_polygon(&outside, PLOT).is_empty());

        // square straddling the right edge keeps its left half
        let straddle = [(90.0, 10.0), (110.0, 10.0), (110.0, 20.0), (90.0, 20.0)];
        let clipped  = clip_polygon(&straddle, PLOT);
        assert!(clipped.iter().all(|&p| PLOT.contains(p)));
        assert!(clipped.iter().any(|&p| close(p, (100.0, 10.0))));
        assert!(clipped.iter().any(|&p| close(p, (100.0, 20.0))));
        assert!(clipped.iter().any(|&p| close(p, (90.0, 10.0))));
    }
}
