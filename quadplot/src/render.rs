//! Turning a solved equation into draw primitives.
use crate::polynomial::{Classification, Coefficients, Vertex};
use crate::primitive::{Align, LineRole, MarkerRole, Primitive};
use crate::style::{Style, DEFAULT_STYLE};
use crate::viewport::Viewport;
use glm::DVec2;
use rayon::prelude::*;

/// The curve is sampled every this many pixel columns.
pub const SAMPLE_STEP: u32 = 2;

/// A gridline family with more lines than this can't be held in memory
/// and is left out.
pub const MAX_GRID_LINES: f64 = 1e7;

/// [`render`] with [`DEFAULT_STYLE`].
pub fn render_default(
    p: &Coefficients,
    classification: &Classification,
    vertex: Option<Vertex>,
    viewport: &Viewport,
) -> Vec<Primitive> {
    render(p, classification, vertex, viewport, &DEFAULT_STYLE)
}

/// Primitives for the graph of P, in painting order.
///
/// Non-quadratic equations produce a single [`Primitive::Message`].
pub fn render(
    p: &Coefficients,
    classification: &Classification,
    vertex: Option<Vertex>,
    viewport: &Viewport,
    style: &Style,
) -> Vec<Primitive> {
    let canvas = viewport.canvas();
    let size = canvas.size();
    let center = canvas.center();

    if p.a == 0.0 {
        return vec![Primitive::Message {
            text: style.message.clone(),
            at: center,
            font: style.message_font.clone(),
            color: style.message_color,
        }];
    }

    let mut out = vec![Primitive::Background {
        size,
        color: style.background,
    }];

    // Vertical gridlines.
    for gx in grid(viewport.x_range) {
        let x = viewport.pixel_x(gx);
        out.push(line(LineRole::Grid, glm::vec2(x, 0.0), glm::vec2(x, size.y), style));
    }

    // Horizontal gridlines.
    for gy in grid(viewport.y_range) {
        let y = viewport.pixel_y(gy);
        out.push(line(LineRole::Grid, glm::vec2(0.0, y), glm::vec2(size.x, y), style));
    }

    // Axes through the middle of the canvas.
    out.push(line(
        LineRole::Axis,
        glm::vec2(0.0, center.y),
        glm::vec2(size.x, center.y),
        style,
    ));
    out.push(line(
        LineRole::Axis,
        glm::vec2(center.x, 0.0),
        glm::vec2(center.x, size.y),
        style,
    ));

    out.push(label(style, "0", center + glm::vec2(10.0, -8.0), Align::Center));
    out.push(label(style, "x", glm::vec2(size.x - 10.0, center.y - 8.0), Align::Center));
    out.push(label(style, "y", glm::vec2(center.x - 8.0, 16.0), Align::Right));

    out.push(Primitive::Curve {
        points: sample(p, viewport),
        stroke: style.curve,
    });

    if let Some(v) = vertex {
        let at = viewport.pixel(v.x, v.y);
        out.push(Primitive::Marker {
            role: MarkerRole::Vertex,
            center: at,
            radius: style.vertex_radius,
            color: style.vertex_color,
        });
        out.push(Primitive::Label {
            text: style.vertex_label.clone(),
            at: at + glm::vec2(10.0, -6.0),
            font: style.vertex_font.clone(),
            align: Align::Left,
            color: style.label_color,
        });
    }

    for root in classification.roots.real() {
        out.push(Primitive::Marker {
            role: MarkerRole::Root,
            center: viewport.pixel(root, 0.0),
            radius: style.root_radius,
            color: style.root_color,
        });
    }

    log::debug!("rendered {} primitives", out.len());
    out
}

/// Points of the curve, one every [`SAMPLE_STEP`] columns from 0 up to and
/// including the canvas width.
pub fn sample(p: &Coefficients, viewport: &Viewport) -> Vec<DVec2> {
    let columns = viewport.canvas().width() / SAMPLE_STEP + 1;

    (0..columns as usize)
        .into_par_iter()
        .map(|i| {
            let px = (i as u32 * SAMPLE_STEP) as f64;
            let y = p.at(viewport.data_x(px));
            glm::vec2(px, viewport.pixel_y(y))
        })
        .collect()
}

/// Integer positions in [-⌊range⌋, ⌊range⌋], except the axis itself.
fn grid(range: f64) -> impl Iterator<Item = f64> {
    let n = range.floor();
    let n = if n.is_finite() && 2.0 * n <= MAX_GRID_LINES {
        n as i64
    } else {
        log::debug!("skipping gridlines for range ±{}", range);
        // Empty range.
        0
    };

    (-n..=n).filter(|&g| g != 0).map(|g| g as f64)
}

fn line(role: LineRole, from: DVec2, to: DVec2, style: &Style) -> Primitive {
    let stroke = match role {
        LineRole::Grid => style.grid,
        LineRole::Axis => style.axis,
    };
    Primitive::Line {
        role,
        from,
        to,
        stroke,
    }
}

fn label(style: &Style, text: &str, at: DVec2, align: Align) -> Primitive {
    Primitive::Label {
        text: text.to_string(),
        at,
        font: style.label_font.clone(),
        align,
        color: style.label_color,
    }
}
