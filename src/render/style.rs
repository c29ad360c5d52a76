// ============================================================
// Layer 5 — Colours and Marker Styles
// ============================================================
// Fixed visual vocabulary of the diagram:
//
//   tone colours   — quadrant background + accent per Tone
//   variant styles — (shape, colour) pair per variant index
//
// Variant styles cycle 6 shapes against 10 colours, so the
// first 30 variants all get a distinct pair.

use plotters::style::RGBColor;

use crate::domain::quadrant::Tone;
use crate::render::geometry::{regular_polygon, star, Px};

/// Light blue background of quadrants I and III
pub const DEGRADING_FILL: RGBColor = RGBColor(0xd9, 0xea, 0xf7);

/// Light orange background of quadrants II and IV
pub const IMPROVING_FILL: RGBColor = RGBColor(0xff, 0xe6, 0xcc);

/// Navy, text and border accent for quadrants I and III
pub const DEGRADING_ACCENT: RGBColor = RGBColor(0x00, 0x00, 0x80);

/// Maroon, text and border accent for quadrants II and IV
pub const IMPROVING_ACCENT: RGBColor = RGBColor(0x80, 0x00, 0x00);

/// Connector path and arrow colour
pub const PATH_GREY: RGBColor = RGBColor(0x80, 0x80, 0x80);

/// Opacity of the quadrant backgrounds
pub const FILL_ALPHA: f64 = 0.6;

/// Opacity of the quadrant label boxes
pub const LABEL_BOX_ALPHA: f64 = 0.7;

/// Background fill for a tone
pub fn tone_fill(tone: Tone) -> RGBColor {
    match tone {
        Tone::Degrading => DEGRADING_FILL,
        Tone::Improving => IMPROVING_FILL,
    }
}

/// Accent (text/border) colour for a tone
pub fn tone_accent(tone: Tone) -> RGBColor {
    match tone {
        Tone::Degrading => DEGRADING_ACCENT,
        Tone::Improving => IMPROVING_ACCENT,
    }
}

/// Variant colours: purple, orange, blue, green, olive, red,
/// then brown, pink, grey, cyan.
const PALETTE: [RGBColor; 10] = [
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0x17, 0xbe, 0xcf),
];

/// Marker outline shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    Circle,
    Square,
    Triangle,
    Diamond,
    TriangleDown,
    Star,
}

impl MarkerShape {
    /// Shapes in assignment order
    pub const ALL: [MarkerShape; 6] = [
        MarkerShape::Circle,
        MarkerShape::Square,
        MarkerShape::Triangle,
        MarkerShape::Diamond,
        MarkerShape::TriangleDown,
        MarkerShape::Star,
    ];

    /// Outline vertices around `center` for a marker whose equivalent
    /// circle has radius `radius`. Circles come back as a 32-gon.
    pub fn outline(self, center: Px, radius: f64) -> Vec<Px> {
        use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
        match self {
            MarkerShape::Circle       => regular_polygon(center, radius, 32, 0.0),
            MarkerShape::Square       => regular_polygon(center, radius * 1.2, 4, FRAC_PI_4),
            MarkerShape::Triangle     => regular_polygon(center, radius * 1.3, 3, FRAC_PI_2),
            MarkerShape::Diamond      => regular_polygon(center, radius * 1.2, 4, 0.0),
            MarkerShape::TriangleDown => regular_polygon(center, radius * 1.3, 3, -FRAC_PI_2),
            MarkerShape::Star         => star(center, radius * 1.4, radius * 0.6),
        }
    }
}

/// Shape and colour for one variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantStyle {
    pub shape: MarkerShape,
    pub color: RGBColor,
}

/// Stable style for the variant at `index`.
pub fn variant_style(index: usize) -> VariantStyle {
    VariantStyle {
        shape: MarkerShape::ALL[index % MarkerShape::ALL.len()],
        color: PALETTE[index % PALETTE.len()],
    }
}

/// Number of variants that get a distinct (shape, colour) pair.
pub const DISTINCT_STYLES: usize = 30;

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quadrant::Quadrant;
    use std::collections::HashSet;

    #[test]
    fn test_first_thirty_styles_are_distinct() {
        let pairs: HashSet<(MarkerShape, (u8, u8, u8))> = (0..DISTINCT_STYLES)
            .map(variant_style)
            .map(|s| (s.shape, (s.color.0, s.color.1, s.color.2)))
            .collect();
        assert_eq!(pairs.len(), DISTINCT_STYLES);
    }

    #[test]
    fn test_styles_are_stable() {
        assert_eq!(variant_style(3), variant_style(3));
        assert_eq!(variant_style(0).shape, MarkerShape::Circle);
        assert_eq!(variant_style(5).shape, MarkerShape::Star);
    }

    #[test]
    fn test_diagonal_quadrants_share_colours() {
        assert_eq!(tone_fill(Quadrant::I.tone()), tone_fill(Quadrant::III.tone()));
        assert_eq!(tone_fill(Quadrant::II.tone()), tone_fill(Quadrant::IV.tone()));
        assert_ne!(tone_fill(Quadrant::I.tone()), tone_fill(Quadrant::II.tone()));
        assert_ne!(tone_accent(Tone::Degrading), tone_accent(Tone::Improving));
    }

    #[test]
    fn test_outline_vertex_counts() {
        let c = (50.0, 50.0);
        assert_eq!(MarkerShape::Circle.outline(c, 5.0).len(), 32);
        assert_eq!(MarkerShape::Square.outline(c, 5.0).len(), 4);
        assert_eq!(MarkerShape::Triangle.outline(c, 5.0).len(), 3);
        assert_eq!(MarkerShape::Star.outline(c, 5.0).len(), 10);
    }

    #[test]
    fn test_triangles_point_opposite_ways() {
        let c    = (0.0, 0.0);
        let up   = MarkerShape::Triangle.outline(c, 10.0);
        let down = MarkerShape::TriangleDown.outline(c, 10.0);
        // screen y grows downward: the up-triangle's apex has negative y
        assert!(up[0].1 < 0.0);
        assert!(down[0].1 > 0.0);
    }
}
