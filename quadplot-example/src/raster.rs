//! Software rasterization of primitives to an image.
use image::{Rgb, RgbImage};
use quadplot::tesselate;
use quadplot::{Align, Canvas, Color, Font, Surface};
use glm::DVec2;

pub struct Raster {
    pub img: RgbImage,
}

impl Raster {
    pub fn new(canvas: Canvas) -> Self {
        Raster {
            img: RgbImage::from_pixel(canvas.width(), canvas.height(), Rgb([255, 255, 255])),
        }
    }

    /// Fill the pixels whose centers lie inside the triangle.
    fn fill_triangle(&mut self, t: [DVec2; 3], color: Color) {
        let (w, h) = self.img.dimensions();
        let x0 = t.iter().map(|p| p.x).fold(f64::INFINITY, f64::min).max(0.0);
        let x1 = t.iter().map(|p| p.x).fold(-f64::INFINITY, f64::max).min(w as f64);
        let y0 = t.iter().map(|p| p.y).fold(f64::INFINITY, f64::min).max(0.0);
        let y1 = t.iter().map(|p| p.y).fold(-f64::INFINITY, f64::max).min(h as f64);
        if !(x0 < x1 && y0 < y1) {
            return;
        }

        let edge = |a: DVec2, b: DVec2, p: DVec2| (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);

        for y in y0.floor() as u32..y1.ceil() as u32 {
            for x in x0.floor() as u32..x1.ceil() as u32 {
                let p = glm::vec2(x as f64 + 0.5, y as f64 + 0.5);
                let e0 = edge(t[0], t[1], p);
                let e1 = edge(t[1], t[2], p);
                let e2 = edge(t[2], t[0], p);
                // Either winding.
                let inside = (e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0)
                    || (e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0);
                if inside {
                    self.put(x, y, color);
                }
            }
        }
    }

    fn put(&mut self, x: u32, y: u32, color: Color) {
        let (w, h) = self.img.dimensions();
        if x < w && y < h {
            *self.img.get_pixel_mut(x, y) = Rgb([color.r, color.g, color.b]);
        }
    }
}

impl Surface for Raster {
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Color) {
        let a = origin;
        let b = origin + glm::vec2(size.x, 0.0);
        let c = origin + size;
        let d = origin + glm::vec2(0.0, size.y);
        self.fill_triangle([a, b, c], color);
        self.fill_triangle([a, c, d], color);
    }

    fn stroke_path(&mut self, points: &[DVec2], stroke: quadplot::Stroke) {
        let (verts, idx) = tesselate::stroke(points, stroke.width / 2.0);
        for tri in idx.chunks_exact(3) {
            let t = [
                verts[tri[0] as usize],
                verts[tri[1] as usize],
                verts[tri[2] as usize],
            ];
            self.fill_triangle(t, stroke.color);
        }
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        let (w, h) = self.img.dimensions();
        let x0 = (center.x - radius).floor().max(0.0);
        let x1 = (center.x + radius).ceil().min(w as f64);
        let y0 = (center.y - radius).floor().max(0.0);
        let y1 = (center.y + radius).ceil().min(h as f64);
        if !(x0 < x1 && y0 < y1) {
            return;
        }

        for y in y0 as u32..y1 as u32 {
            for x in x0 as u32..x1 as u32 {
                let p = glm::vec2(x as f64 + 0.5, y as f64 + 0.5);
                if glm::distance(&p, &center) <= radius {
                    self.put(x, y, color);
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, _: DVec2, _: &Font, _: Align, _: Color) {
        // No font rasterizer here; the SVG output carries the labels.
        log::debug!("skipping text {:?} in raster output", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster() -> Raster {
        Raster::new(Canvas::new(20, 10).unwrap())
    }

    const RED: Color = Color::new(255, 0, 0, 255);

    #[test]
    fn rect_covers_the_canvas() {
        let mut r = raster();
        r.fill_rect(glm::vec2(0.0, 0.0), glm::vec2(20.0, 10.0), RED);
        assert!(r.img.pixels().all(|p| *p == Rgb([255, 0, 0])));
    }

    #[test]
    fn thick_horizontal_line() {
        let mut r = raster();
        r.stroke_path(
            &[glm::vec2(2.0, 5.0), glm::vec2(18.0, 5.0)],
            quadplot::Stroke::new(RED, 2.0),
        );
        assert_eq!(*r.img.get_pixel(10, 4), Rgb([255, 0, 0]));
        assert_eq!(*r.img.get_pixel(10, 5), Rgb([255, 0, 0]));
        assert_eq!(*r.img.get_pixel(10, 7), Rgb([255, 255, 255]));
        assert_eq!(*r.img.get_pixel(0, 5), Rgb([255, 255, 255]));
    }

    #[test]
    fn off_canvas_shapes_are_clipped() {
        let mut r = raster();
        r.fill_circle(glm::vec2(-50.0, -50.0), 5.0, RED);
        r.stroke_path(
            &[glm::vec2(0.0, -1e9), glm::vec2(10.0, 1e9)],
            quadplot::Stroke::new(RED, 3.0),
        );
        assert_eq!(*r.img.get_pixel(0, 0), Rgb([255, 255, 255]));
    }

    #[test]
    fn circle() {
        let mut r = raster();
        r.fill_circle(glm::vec2(10.0, 5.0), 3.0, RED);
        assert_eq!(*r.img.get_pixel(10, 5), Rgb([255, 0, 0]));
        assert_eq!(*r.img.get_pixel(15, 5), Rgb([255, 255, 255]));
    }
}
