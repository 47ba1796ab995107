//! Shape primitives that make up a pattern.
//!
//! Coordinates live in a normalized `0..100` square. A shape's box spans
//! `(x, y)` to `(x + size, y + size)` before rotation; rotation turns the
//! box about its own centre.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sequence::SeededSequence;

use super::{ColourRole, Hsl, Palette};

/// The closed set of shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Rect,
    Polygon,
}

impl ShapeKind {
    /// All kinds, in selector order.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Rect, ShapeKind::Polygon];

    /// Kind name as used in output.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rect => "rect",
            ShapeKind::Polygon => "polygon",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One visual primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,

    /// Left edge of the unrotated box, `[0, 100)`.
    pub x: f64,

    /// Top edge of the unrotated box, `[0, 100)`.
    pub y: f64,

    /// Side length, `[20, 60)`.
    pub size: f64,

    /// Rotation in degrees about the box centre, `[0, 360)`.
    pub rotation: f64,

    /// Palette slot the colour was taken from.
    pub role: ColourRole,

    /// Resolved colour.
    #[serde(rename = "color")]
    pub colour: Hsl,
}

impl Shape {
    /// Draw one shape from `seq`, taking its colour from `palette`.
    ///
    /// Consumes exactly six draws: kind, x, y, size, rotation, colour role.
    pub fn draw(seq: &mut SeededSequence, palette: &Palette) -> Self {
        let kind = ShapeKind::ALL[seq.draw_index(ShapeKind::ALL.len())];
        let x = seq.draw_range(0.0, 100.0);
        let y = seq.draw_range(0.0, 100.0);
        let size = seq.draw_range(20.0, 40.0);
        let rotation = seq.draw_range(0.0, 360.0);
        let role = ColourRole::ALL[seq.draw_index(ColourRole::ALL.len())];

        Self {
            kind,
            x,
            y,
            size,
            rotation,
            role,
            colour: palette.get(role),
        }
    }

    /// Half the side length; the pivot offset for rotation.
    pub fn half(&self) -> f64 {
        self.size / 2.0
    }

    /// Centre of the shape's box in pattern space.
    pub fn centre(&self) -> (f64, f64) {
        (self.x + self.half(), self.y + self.half())
    }

    /// Test whether a point in pattern space lies inside the shape.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let (lx, ly) = self.to_local(px, py);
        let s = self.size;

        match self.kind {
            ShapeKind::Circle => {
                let h = self.half();
                let (dx, dy) = (lx - h, ly - h);
                dx * dx + dy * dy <= h * h
            }
            ShapeKind::Rect => (0.0..=s).contains(&lx) && (0.0..=s).contains(&ly),
            ShapeKind::Polygon => {
                // Triangle: apex (s/2, 0), base (s, s) and (0, s)
                if !(0.0..=s).contains(&ly) {
                    return false;
                }
                let half_width = ly / 2.0;
                (lx - self.half()).abs() <= half_width
            }
        }
    }

    /// Map a pattern-space point into the shape's unrotated local box.
    fn to_local(&self, px: f64, py: f64) -> (f64, f64) {
        let h = self.half();
        let (cx, cy) = self.centre();
        let (sin, cos) = (-self.rotation.to_radians()).sin_cos();
        let (dx, dy) = (px - cx, py - cy);

        (dx * cos - dy * sin + h, dx * sin + dy * cos + h)
    }
}
