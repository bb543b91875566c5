pub mod check;
pub mod normalize;
pub mod squarify;

use serde::Serialize;

use crate::error::{InvalidInput, Result};

pub use check::{check_layout, LayoutReport};
pub use normalize::normalize_sizes;
pub use squarify::{squarify, worst_aspect_ratio};

/// A positioned rectangle in the treemap layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Zero-area placeholder anchored at a point.
    pub const fn empty_at(x: f64, y: f64) -> Self {
        Self { x, y, w: 0.0, h: 0.0 }
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn is_degenerate(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Whether `other` lies inside `self`, allowing `eps` of slack on each edge.
    pub fn contains(&self, other: &Rect, eps: f64) -> bool {
        other.x >= self.x - eps
            && other.y >= self.y - eps
            && other.right() <= self.right() + eps
            && other.bottom() <= self.bottom() + eps
    }

    /// Area of the intersection of the two interiors (0 when they only touch).
    pub fn overlap_area(&self, other: &Rect) -> f64 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w <= 0.0 || h <= 0.0 {
            0.0
        } else {
            w * h
        }
    }
}

/// The drawing surface the treemap is tiled into, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) && ok(self.area()) {
            Ok(())
        } else {
            Err(InvalidInput::NonPositiveCanvas {
                width: self.width,
                height: self.height,
            }
            .into())
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Configuration for treemap layout.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Canvas size in pixels. Defaults to half of a 1920x1080 display.
    pub canvas: Canvas,
    /// Slack (px) allowed at shared edges when checking a finished layout
    pub tolerance: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::new(960.0, 540.0),
            tolerance: 1e-6,
        }
    }
}

/// Normalize `weights` to the canvas area and tile them, one rect per weight.
///
/// `weights` should already be sorted descending; the output keeps input order.
pub fn compute_layout(weights: &[f64], canvas: Canvas) -> Result<Vec<Rect>> {
    let areas = normalize_sizes(weights, canvas)?;
    let rects = squarify(&areas, canvas.bounds());

    tracing::debug!(
        "Laid out {} items in {:.0}x{:.0} canvas",
        rects.len(),
        canvas.width,
        canvas.height
    );

    Ok(rects)
}
