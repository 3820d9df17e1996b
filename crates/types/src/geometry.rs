//! Pixel-space geometry reported by a geometry oracle.
use serde::{Deserialize, Serialize};

/// Rendered size of a measured fragment, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Rendered padding of a box, one value per edge, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgePixels {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl EdgePixels {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Interior geometry of a page frame.
///
/// `row_height` is the rendered height of a single line of body text at the
/// frame's font size and line height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameMetrics {
    pub inner_height: f32,
    pub inner_width: f32,
    pub row_height: f32,
}

impl FrameMetrics {
    pub fn new(inner_height: f32, inner_width: f32, row_height: f32) -> Self {
        Self {
            inner_height,
            inner_width,
            row_height,
        }
    }

    /// Geometry reported when nothing was measured.
    pub fn unmeasured() -> Self {
        Self {
            inner_height: f32::NAN,
            inner_width: f32::NAN,
            row_height: f32::NAN,
        }
    }

    /// A frame can be packed only if its interior height is a positive number.
    pub fn is_measurable(&self) -> bool {
        self.inner_height.is_finite() && self.inner_height > 0.0
    }
}
