//! Stroke tessellation.
//!
//! Turns a polyline of some width into a triangle strip, so that surfaces
//! which can only fill triangles can still draw thick lines.
use glm::DVec2;

/// Joins sharper than this are clamped. In units of the half width.
const MITER_LIMIT: f64 = 4.0;

#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub p1: DVec2,
    pub p2: DVec2,
}

impl Segment {
    pub fn vec(&self) -> DVec2 {
        self.p2 - self.p1
    }
}

/// Consecutive segments of a polyline. Zero-length segments are dropped.
pub fn segments(points: &[DVec2]) -> Vec<Segment> {
    points
        .windows(2)
        .map(|ps| Segment {
            p1: ps[0],
            p2: ps[1],
        })
        .filter(|s| s.vec().norm() > 0.0)
        .collect()
}

/// Vertex- and index-buffer of a polyline stroked `2 * half_width` wide.
///
/// A line of N segments has 2(N+1) vertices; every segment is two triangles.
#[allow(unused_assignments)]
pub fn stroke(points: &[DVec2], half_width: f64) -> (Vec<DVec2>, Vec<u32>) {
    let segments = segments(points);
    let mut segments = segments.iter();

    // Consider a pair of segments at a time
    let mut s1 = None;
    let mut s2 = None;

    let mut verts = Vec::new();

    // π/2 rotation matrix.
    let rot = glm::mat2(0.0, -1.0, 1.0, 0.0);

    loop {
        s1 = s2;
        s2 = segments.next();

        match (s1, s2) {
            (None, Some(s)) => {
                // vw-basis for the segments local space.
                let v = s.vec().normalize();
                let w = rot * v;

                // Square cap, extended half a width back.
                let v1 = (-half_width * v) - (half_width * w) + s.p1;
                let v2 = (-half_width * v) + (half_width * w) + s.p1;
                verts.extend([v1, v2]);
            }
            (Some(s), None) => {
                let v = s.vec().normalize();
                let w = rot * v;

                let v1 = (half_width * v) - (half_width * w) + s.p2;
                let v2 = (half_width * v) + (half_width * w) + s.p2;
                verts.extend([v1, v2]);
            }
            (Some(s1), Some(s2)) => {
                let joint = s2.p1;
                let v = s1.vec().normalize();
                let w = rot * v;

                // The inside of the turn pulls back along v, the outside
                // pushes forward. Which side is which depends on the turn.
                let u = s2.vec();
                let turn = v.x * u.y - v.y * u.x;
                let th = v.angle(&u);
                let dv = (half_width * f64::tan(th / 2.0))
                    .min(MITER_LIMIT * half_width)
                    .copysign(turn);

                let v1 = (dv * v) - (half_width * w) + joint;
                let v2 = -(dv * v) + (half_width * w) + joint;
                verts.extend([v1, v2]);
            }
            (None, None) => break,
        }
    }

    // The N-th line segment has indices
    //   2N 2N+2 2N+3
    //   2N 2N+3 2N+1
    let quads = (verts.len() as u32 / 2).saturating_sub(1);
    let idx = (0..quads)
        .flat_map(|n| [2 * n, 2 * n + 2, 2 * n + 3, 2 * n, 2 * n + 3, 2 * n + 1])
        .collect();

    (verts, idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(p: DVec2, x: f64, y: f64) -> bool {
        (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9
    }

    #[test]
    fn single_segment_is_a_quad() {
        let (verts, idx) = stroke(&[glm::vec2(0.0, 0.0), glm::vec2(10.0, 0.0)], 1.0);
        assert_eq!(verts.len(), 4);
        assert_eq!(idx, vec![0, 2, 3, 0, 3, 1]);

        // Caps extend half a width past the end points.
        assert!(close(verts[0], -1.0, -1.0));
        assert!(close(verts[1], -1.0, 1.0));
        assert!(close(verts[2], 11.0, -1.0));
        assert!(close(verts[3], 11.0, 1.0));
    }

    #[test]
    fn straight_joint_has_no_offset_along_the_line() {
        let pts = [glm::vec2(0.0, 0.0), glm::vec2(5.0, 0.0), glm::vec2(10.0, 0.0)];
        let (verts, idx) = stroke(&pts, 2.0);
        assert_eq!(verts.len(), 6);
        assert_eq!(idx.len(), 12);
        assert!(close(verts[2], 5.0, -2.0));
        assert!(close(verts[3], 5.0, 2.0));
    }

    #[test]
    fn right_angle_joint_is_mitered() {
        // Left turn: the +w side is the inside.
        let left = [glm::vec2(0.0, 0.0), glm::vec2(10.0, 0.0), glm::vec2(10.0, 10.0)];
        let (verts, _) = stroke(&left, 1.0);
        assert!(close(verts[2], 11.0, -1.0));
        assert!(close(verts[3], 9.0, 1.0));

        // Right turn mirrors it.
        let right = [glm::vec2(0.0, 0.0), glm::vec2(10.0, 0.0), glm::vec2(10.0, -10.0)];
        let (verts, _) = stroke(&right, 1.0);
        assert!(close(verts[2], 9.0, -1.0));
        assert!(close(verts[3], 11.0, 1.0));
    }

    #[test]
    fn hairpins_are_clamped() {
        let pts = [glm::vec2(0.0, 0.0), glm::vec2(10.0, 0.0), glm::vec2(0.0, 0.001)];
        let (verts, _) = stroke(&pts, 1.0);
        assert!((verts[2].x - 10.0).abs() <= MITER_LIMIT + 1e-9);
    }

    #[test]
    fn degenerate_input() {
        let (verts, idx) = stroke(&[glm::vec2(1.0, 1.0)], 1.0);
        assert!(verts.is_empty() && idx.is_empty());

        let (verts, idx) = stroke(&[glm::vec2(1.0, 1.0), glm::vec2(1.0, 1.0)], 1.0);
        assert!(verts.is_empty() && idx.is_empty());
    }
}
