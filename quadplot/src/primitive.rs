//! Draw primitives.
//!
//! The renderer never touches a drawing surface. It produces a list of
//! [`Primitive`]s in painting order, and whoever owns the surface replays
//! them through the [`Surface`] trait.
use glm::DVec2;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from `0xRRGGBB`.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
            a: 255,
        }
    }

    /// CSS notation, `#rrggbb`. Alpha is dropped.
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Line color and width in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self {
        Stroke { color, width }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    /// Size in pixels.
    pub size: f64,
}

/// Horizontal anchoring of text relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Grid,
    Axis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    Vertex,
    Root,
}

/// A single drawing command, in canvas pixels with y pointing down.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Fill the whole canvas.
    Background { size: DVec2, color: Color },
    /// A straight line across the canvas.
    Line {
        role: LineRole,
        from: DVec2,
        to: DVec2,
        stroke: Stroke,
    },
    /// A short piece of text. Axis labels and the vertex label.
    Label {
        text: String,
        at: DVec2,
        font: Font,
        align: Align,
        color: Color,
    },
    /// The sampled curve, one continuous path.
    Curve { points: Vec<DVec2>, stroke: Stroke },
    /// A filled circle.
    Marker {
        role: MarkerRole,
        center: DVec2,
        radius: f64,
        color: Color,
    },
    /// Centered notice shown instead of a graph.
    Message {
        text: String,
        at: DVec2,
        font: Font,
        color: Color,
    },
}

/// Something primitives can be drawn on.
pub trait Surface {
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Color);
    /// Stroke an open path through `points`.
    fn stroke_path(&mut self, points: &[DVec2], stroke: Stroke);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);
    fn fill_text(&mut self, text: &str, at: DVec2, font: &Font, align: Align, color: Color);
}

impl Primitive {
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            Primitive::Background { size, color } => {
                surface.fill_rect(glm::vec2(0.0, 0.0), *size, *color)
            }
            Primitive::Line { from, to, stroke, .. } => surface.stroke_path(&[*from, *to], *stroke),
            Primitive::Label {
                text,
                at,
                font,
                align,
                color,
            } => surface.fill_text(text, *at, font, *align, *color),
            Primitive::Curve { points, stroke } => surface.stroke_path(points, *stroke),
            Primitive::Marker {
                center,
                radius,
                color,
                ..
            } => surface.fill_circle(*center, *radius, *color),
            Primitive::Message {
                text,
                at,
                font,
                color,
            } => surface.fill_text(text, *at, font, Align::Center, *color),
        }
    }
}

/// Replay `primitives` onto `surface`, in order.
pub fn draw<S: Surface + ?Sized>(primitives: &[Primitive], surface: &mut S) {
    for primitive in primitives {
        primitive.draw(surface);
    }
}
