//! Visual configuration of the renderer.
use crate::primitive::{Color, Font, Stroke};
use lazy_static::lazy_static;

lazy_static! {
    /// The reference look. Used by [`render_default`](crate::render::render_default).
    pub static ref DEFAULT_STYLE: Style = Style::default();
}

/// Colors, widths, fonts and texts used when rendering a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub background: Color,
    pub grid: Stroke,
    pub axis: Stroke,
    pub curve: Stroke,

    pub label_font: Font,
    pub label_color: Color,

    pub vertex_color: Color,
    pub vertex_radius: f64,
    pub vertex_label: String,
    pub vertex_font: Font,

    pub root_color: Color,
    pub root_radius: f64,

    /// Shown instead of a graph when the equation is not quadratic.
    pub message: String,
    pub message_font: Font,
    pub message_color: Color,
}

fn arial(size: f64) -> Font {
    Font {
        family: "Arial".to_string(),
        size,
    }
}

impl Default for Style {
    fn default() -> Self {
        let ink = Color::hex(0x333333);
        Style {
            background: Color::hex(0xf9f9f9),
            grid: Stroke::new(Color::hex(0xe0e0e0), 1.0),
            axis: Stroke::new(ink, 2.0),
            curve: Stroke::new(Color::hex(0x2196F3), 3.0),

            label_font: arial(12.0),
            label_color: ink,

            vertex_color: Color::hex(0xFF9800),
            vertex_radius: 6.0,
            vertex_label: "vertex".to_string(),
            vertex_font: arial(11.0),

            root_color: Color::hex(0x4CAF50),
            root_radius: 5.0,

            message: "Linear and constant equations do not graph as a parabola.".to_string(),
            message_font: arial(16.0),
            message_color: Color::hex(0x666666),
        }
    }
}
