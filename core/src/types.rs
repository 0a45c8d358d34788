use serde::{Deserialize, Serialize};

/// Drawable viewport. Dimensions are expected non-negative but never checked.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(width: f64, height: f64) -> Self {
        Rect { width, height }
    }
}

/// Position a button is teleported to
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Half-open sampling interval on one axis: [min, max)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub fn extent(&self) -> f64 {
        self.max - self.min
    }

    /// Map a unit value in [0, 1) onto the span
    pub fn lerp(&self, unit: f64) -> f64 {
        self.min + unit * self.extent()
    }
}

/// Margin-inset sampling box derived from a `Rect`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: Span,
    pub y: Span,
}
