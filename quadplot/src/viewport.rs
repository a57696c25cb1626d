//! Mapping between equation space and canvas pixels.
//!
//! The viewport is always centered on the origin. Only its half-extents
//! change, growing so the vertex and the real roots stay on screen.
use crate::error::{Error, Result};
use crate::polynomial::{Classification, Vertex};
use glm::DVec2;

/// Smallest half-extent on either axis.
pub const BASE_RANGE: f64 = 10.0;

/// The vertex is kept within half of the visible range.
const VERTEX_MARGIN: f64 = 2.0;
const VERTEX_MIN_RANGE: f64 = 5.0;

/// Roots get a tighter fit than the vertex.
const ROOT_MARGIN: f64 = 1.6;

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyCanvas { width, height });
        }
        Ok(Canvas { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> DVec2 {
        glm::vec2(self.width as f64, self.height as f64)
    }

    pub fn center(&self) -> DVec2 {
        self.size() / 2.0
    }
}

/// The visible window [-x_range, x_range] × [-y_range, y_range] on a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_range: f64,
    pub y_range: f64,
    canvas: Canvas,
}

impl Viewport {
    /// Size the viewport so the salient points of the equation fit on `canvas`.
    pub fn build(classification: &Classification, vertex: Option<Vertex>, canvas: Canvas) -> Self {
        let mut x_range = BASE_RANGE;
        let mut y_range = BASE_RANGE;

        if let Some(v) = vertex {
            x_range = x_range.max(v.x.abs() * VERTEX_MARGIN).max(VERTEX_MIN_RANGE);
            y_range = y_range.max(v.y.abs() * VERTEX_MARGIN).max(VERTEX_MIN_RANGE);
        }

        // Complex roots have no place on the real axis.
        for root in classification.roots.real() {
            x_range = x_range.max(root.abs() * ROOT_MARGIN);
        }

        log::debug!(
            "viewport ±{} × ±{} on {}x{}",
            x_range,
            y_range,
            canvas.width,
            canvas.height
        );

        Viewport {
            x_range,
            y_range,
            canvas,
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Equation x to canvas x.
    pub fn pixel_x(&self, x: f64) -> f64 {
        let half_w = self.canvas.width as f64 / 2.0;
        x / self.x_range * half_w + half_w
    }

    /// Equation y to canvas y. Canvas y grows downwards.
    pub fn pixel_y(&self, y: f64) -> f64 {
        let half_h = self.canvas.height as f64 / 2.0;
        half_h - y / self.y_range * half_h
    }

    pub fn pixel(&self, x: f64, y: f64) -> DVec2 {
        glm::vec2(self.pixel_x(x), self.pixel_y(y))
    }

    /// Canvas x back to equation x.
    pub fn data_x(&self, px: f64) -> f64 {
        let half_w = self.canvas.width as f64 / 2.0;
        (px - half_w) * self.x_range / half_w
    }
}
