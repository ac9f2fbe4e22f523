use serde::{Deserialize, Serialize};

/// The visible frame a snapshot was captured in, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }
}

/// Axis-aligned box given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Build a box from its center point, as hotspots are reported.
    pub fn from_center(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn intersection_area(&self, other: &BoundingBox) -> f64 {
        let iw = ((self.x + self.width).min(other.x + other.width) - self.x.max(other.x)).max(0.0);
        let ih = ((self.y + self.height).min(other.y + other.height) - self.y.max(other.y)).max(0.0);
        iw * ih
    }

    /// Intersection-over-union. The denominator is floored at 1 so
    /// zero-area boxes yield 0 instead of dividing by zero.
    pub fn iou(&self, other: &BoundingBox) -> f64 {
        let inter = self.intersection_area(other);
        let union = (self.area() + other.area() - inter).max(1.0);
        inter / union
    }
}
