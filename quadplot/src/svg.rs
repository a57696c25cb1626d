//! SVG output.
use crate::primitive::{Align, Color, Font, Primitive, Stroke, Surface};
use crate::viewport::Canvas;
use glm::DVec2;

/// A [`Surface`] that collects an SVG document.
pub struct SvgSurface {
    width: u32,
    height: u32,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(canvas: Canvas) -> Self {
        SvgSurface {
            width: canvas.width(),
            height: canvas.height(),
            elements: Vec::new(),
        }
    }

    /// The finished document.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self
                .elements
                .iter()
                .map(|e| format!("{}\n", e))
                .collect::<String>(),
        )
    }
}

/// Render `primitives` to an SVG document the size of `canvas`.
pub fn to_svg(primitives: &[Primitive], canvas: Canvas) -> String {
    let mut surface = SvgSurface::new(canvas);
    crate::primitive::draw(primitives, &mut surface);
    surface.finish()
}

impl Surface for SvgSurface {
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Color) {
        self.elements.push(format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            origin.x,
            origin.y,
            size.x,
            size.y,
            color.css()
        ));
    }

    fn stroke_path(&mut self, points: &[DVec2], stroke: Stroke) {
        if points.is_empty() {
            return;
        }

        let d = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let cmd = if i == 0 { 'M' } else { 'L' };
                format!("{}{} {}", cmd, num(p.x), num(p.y))
            })
            .collect::<Vec<_>>()
            .join(" ");

        self.elements.push(format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            d,
            stroke.color.css(),
            stroke.width
        ));
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.elements.push(format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            num(center.x),
            num(center.y),
            radius,
            color.css()
        ));
    }

    fn fill_text(&mut self, text: &str, at: DVec2, font: &Font, align: Align, color: Color) {
        let anchor = match align {
            Align::Left => "start",
            Align::Center => "middle",
            Align::Right => "end",
        };
        self.elements.push(format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" text-anchor=\"{}\" fill=\"{}\">{}</text>",
            num(at.x),
            num(at.y),
            escape(&font.family),
            font.size,
            anchor,
            color.css(),
            escape(text)
        ));
    }
}

/// Coordinates, rounded to hundredths of a pixel. Far off-canvas values of
/// a steep curve are clamped so the document stays parseable.
fn num(x: f64) -> String {
    const FAR: f64 = 1e7;
    let x = if x.is_nan() { 0.0 } else { x.clamp(-FAR, FAR) };
    let s = format!("{:.2}", x);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{LineRole, MarkerRole};

    fn canvas() -> Canvas {
        Canvas::new(200, 100).unwrap()
    }

    #[test]
    fn empty_document() {
        let svg = to_svg(&[], canvas());
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"200\" height=\"100\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn elements() {
        let prims = vec![
            Primitive::Line {
                role: LineRole::Axis,
                from: glm::vec2(0.0, 50.0),
                to: glm::vec2(200.0, 50.0),
                stroke: Stroke::new(Color::hex(0x333333), 2.0),
            },
            Primitive::Marker {
                role: MarkerRole::Vertex,
                center: glm::vec2(100.5, 49.999),
                radius: 6.0,
                color: Color::hex(0xFF9800),
            },
            Primitive::Label {
                text: "x<y & z".to_string(),
                at: glm::vec2(10.0, 20.0),
                font: Font {
                    family: "Arial".to_string(),
                    size: 12.0,
                },
                align: Align::Right,
                color: Color::hex(0x333333),
            },
        ];
        let svg = to_svg(&prims, canvas());

        assert!(svg.contains(
            "<path d=\"M0 50 L200 50\" fill=\"none\" stroke=\"#333333\" stroke-width=\"2\"/>"
        ));
        assert!(svg.contains("<circle cx=\"100.5\" cy=\"50\" r=\"6\" fill=\"#ff9800\"/>"));
        assert!(svg.contains("text-anchor=\"end\""));
        assert!(svg.contains(">x&lt;y &amp; z</text>"));
    }

    #[test]
    fn one_element_per_line_in_drawing_order() {
        let mut surface = SvgSurface::new(canvas());
        surface.fill_circle(glm::vec2(1.0, 2.0), 3.0, Color::hex(0x000000));
        surface.stroke_path(&[], Stroke::new(Color::hex(0x000000), 1.0));
        surface.stroke_path(
            &[glm::vec2(0.0, 0.0), glm::vec2(1.0, 1.0), glm::vec2(2.0, 0.5)],
            Stroke::new(Color::hex(0x000000), 1.0),
        );
        let svg = surface.finish();
        let lines: Vec<&str> = svg.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("<circle cx=\"1\" cy=\"2\""));
        assert!(lines[2].starts_with("<path d=\"M0 0 L1 1 L2 0.5\""));
        assert_eq!(lines[3], "</svg>");
    }

    #[test]
    fn numbers_stay_finite() {
        assert_eq!(num(f64::INFINITY), "10000000");
        assert_eq!(num(f64::NAN), "0");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(12.346), "12.35");
        assert_eq!(num(3.10), "3.1");
    }
}
