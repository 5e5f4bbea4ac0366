use crate::math::{self, Point2, Vector2};

use super::Line2D;

/// A closed polygon; the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2D {
    vertices: Vec<Point2>,
}

impl Polygon2D {
    /// Polygon over `vertices`; no closing duplicate is needed.
    #[must_use]
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Vertices in authored order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Boundary edges in vertex order, including the closing edge.
    ///
    /// Fewer than two vertices yield no edges.
    #[must_use]
    pub fn edges(&self) -> Vec<Line2D> {
        let n = self.vertices.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| Line2D::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Signed area (shoelace formula), positive for counter-clockwise order.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            let (a, b) = (self.vertices[i], self.vertices[j]);
            sum += a.x * b.y - b.x * a.y;
        }
        sum * 0.5
    }

    fn map(&self, f: impl Fn(&Point2) -> Point2) -> Polygon2D {
        Polygon2D::new(self.vertices.iter().map(f).collect())
    }

    /// Rotates every vertex by `angle_deg` degrees around `pivot`.
    #[must_use]
    pub fn rotate(&self, angle_deg: f64, pivot: &Point2) -> Polygon2D {
        self.map(|p| math::rotate_point(angle_deg, p, pivot))
    }

    /// Shifts every vertex by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Polygon2D {
        let offset = Vector2::new(dx, dy);
        self.map(|p| math::translate_point(p, &offset))
    }

    /// Scales every vertex about `pivot`; a negative `factor` also turns it half a turn.
    #[must_use]
    pub fn scale(&self, factor: f64, pivot: &Point2) -> Polygon2D {
        self.map(|p| math::dilate(factor, p, pivot))
    }

    /// Mirrors every vertex across `axis`. Vertex order is kept, so the
    /// winding flips.
    #[must_use]
    pub fn reflect_across(&self, axis: &Line2D) -> Polygon2D {
        self.map(|p| axis.reflect(p))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn square() -> Polygon2D {
        Polygon2D::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn edges_close_the_loop() {
        let edges = square().edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].end(), Point2::new(0.0, 0.0));
        assert!(Polygon2D::new(vec![Point2::new(1.0, 1.0)]).edges().is_empty());
    }

    #[test]
    fn signed_area_tracks_winding() {
        assert_abs_diff_eq!(square().signed_area(), 1.0);
        let mirrored = square().reflect_across(&Line2D::from_coords(0.0, 0.0, 1.0, 0.0));
        assert_abs_diff_eq!(mirrored.signed_area(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn transforms_move_every_vertex() {
        let moved = square().translate(2.0, 3.0);
        assert_eq!(moved.vertices()[2], Point2::new(3.0, 4.0));
        let scaled = square().scale(2.0, &Point2::new(0.0, 0.0));
        assert_abs_diff_eq!(scaled.signed_area(), 4.0);
        let rotated = square().rotate(90.0, &Point2::new(0.0, 0.0));
        assert_abs_diff_eq!(rotated.vertices()[1].y, 1.0, epsilon = 1e-12);
    }
}
