//! Icon geometry: where the circle, dot and memo strokes go for a given size.
//!
//! All arithmetic is integer division on the canvas size, so the same size
//! always yields the same shapes.

use crate::Size;

/// Radius of the single dot drawn on minimal icons
pub const DOT_RADIUS: i64 = 3;

/// Minimum memo stroke thickness in pixels
pub const MIN_STROKE: i64 = 2;

/// Number of memo strokes on detailed icons
pub const MEMO_LINES: usize = 3;

/// Inclusive pixel bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl Bounds {
    /// Square box of side `extent` with its top-left corner at `(x, y)`
    pub fn square(x: i64, y: i64, extent: i64) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x + extent,
            y1: y + extent,
        }
    }

    /// Midpoint of the box, possibly on a half pixel
    pub fn center(&self) -> (f64, f64) {
        (
            (self.x0 + self.x1) as f64 / 2.0,
            (self.y0 + self.y1) as f64 / 2.0,
        )
    }

    pub fn extent(&self) -> (i64, i64) {
        (self.x1 - self.x0, self.y1 - self.y0)
    }
}

/// Horizontal stroke centered on row `y`, spanning `x0..=x1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub y: i64,
    pub x0: i64,
    pub x1: i64,
    pub width: i64,
}

impl Stroke {
    /// First and last row covered by the stroke
    pub fn rows(&self) -> (i64, i64) {
        let top = self.y - self.width / 2;
        (top, top + self.width - 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconLayout {
    /// Circle plus memo strokes, for sizes at or above the detail threshold
    Detailed {
        circle: Bounds,
        lines: [Stroke; MEMO_LINES],
    },
    /// A single centered dot
    Minimal { dot: Bounds },
}

/// Compute the shapes for a canvas of the given size
pub fn layout_icon(size: Size) -> IconLayout {
    let s = i64::from(size.get());

    if !size.is_detailed() {
        let center = s / 2;
        let dot = Bounds::square(center - DOT_RADIUS, center - DOT_RADIUS, 2 * DOT_RADIUS);
        return IconLayout::Minimal { dot };
    }

    let diameter = s / 4;
    let corner = s / 2 - diameter / 2;
    let circle = Bounds::square(corner, corner, diameter);

    let width = MIN_STROKE.max(s / 32);
    let margin = s / 3;
    let lines = std::array::from_fn(|i| Stroke {
        y: margin + s / 6 + i as i64 * (s / 8),
        x0: margin,
        x1: s - margin,
        width,
    });

    IconLayout::Detailed { circle, lines }
}
