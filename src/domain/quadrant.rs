// ============================================================
// Layer 3 — Quadrant Classification
// ============================================================
// The origin lines split the (x, y) plane into four regions:
//
//              y
//     II       │       I
//   (x<0, y>0) │ (x>0, y>0)
//   ───────────┼───────────  x
//     III      │       IV
//   (x<0, y<0) │ (x>0, y<0)
//
// Points exactly on an axis are assigned by a fixed tie-break:
//   x == 0 counts as the right half (I / IV)
//   y == 0 counts as the top half   (I / II)
// NaN never compares true, so a NaN coordinate lands left/bottom.
//
// Diagonally opposite quadrants share a tone: moving into I or
// III degrades the outcome, moving into II or IV improves it.

use std::fmt;

/// One of the four regions of the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    I,
    II,
    III,
    IV,
}

/// Colour group shared by diagonally opposite quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Quadrants I and III
    Degrading,
    /// Quadrants II and IV
    Improving,
}

impl Quadrant {
    /// All quadrants in numeric order
    pub const ALL: [Quadrant; 4] = [Quadrant::I, Quadrant::II, Quadrant::III, Quadrant::IV];

    /// Colour group of this quadrant
    pub fn tone(self) -> Tone {
        match self {
            Quadrant::I | Quadrant::III => Tone::Degrading,
            Quadrant::II | Quadrant::IV => Tone::Improving,
        }
    }

    /// Zero-based position in `Quadrant::ALL`
    pub fn index(self) -> usize {
        match self {
            Quadrant::I   => 0,
            Quadrant::II  => 1,
            Quadrant::III => 2,
            Quadrant::IV  => 3,
        }
    }

    /// Roman numeral
    pub fn numeral(self) -> &'static str {
        match self {
            Quadrant::I   => "I",
            Quadrant::II  => "II",
            Quadrant::III => "III",
            Quadrant::IV  => "IV",
        }
    }

    /// True for the quadrants right of the y axis (x >= 0 side)
    pub fn is_right(self) -> bool {
        matches!(self, Quadrant::I | Quadrant::IV)
    }

    /// True for the quadrants above the x axis (y >= 0 side)
    pub fn is_top(self) -> bool {
        matches!(self, Quadrant::I | Quadrant::II)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quadrant {}", self.numeral())
    }
}

/// Classify a point by the signs of its coordinates.
pub fn classify_quadrant(x: f64, y: f64) -> Quadrant {
    match (x >= 0.0, y >= 0.0) {
        (true,  true)  => Quadrant::I,
        (false, true)  => Quadrant::II,
        (false, false) => Quadrant::III,
        (true,  false) => Quadrant::IV,
    }
}
