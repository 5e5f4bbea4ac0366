use crate::math::{Point2, Vector2, POINT_COINCIDENCE};

use super::{Arc2D, Line2D, Polygon2D};

/// Any primitive that takes part in intersection and transform dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line2D),
    Arc(Arc2D),
    Polygon(Polygon2D),
}

/// A rigid or similarity transform applied uniformly to any [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform2D {
    /// Counter-clockwise rotation in degrees around `pivot`.
    Rotate { angle_deg: f64, pivot: Point2 },
    Translate { offset: Vector2 },
    /// Scaling around `pivot`.
    Dilate { scale: f64, pivot: Point2 },
    /// Mirror across the infinite line `axis`.
    Reflect { axis: Line2D },
}

impl Shape {
    /// Intersection points of two shapes.
    ///
    /// Lines use segment semantics. Arcs filter by their authored span and
    /// keep the reverse solver order. Polygons contribute the union of their
    /// edge hits in edge order; a crossing at a shared vertex counts once.
    #[must_use]
    pub fn intersect(&self, other: &Shape) -> Vec<Point2> {
        match (self, other) {
            (Shape::Line(a), Shape::Line(b)) => a.intersect_as_segment(b),
            (Shape::Line(line), Shape::Arc(arc)) | (Shape::Arc(arc), Shape::Line(line)) => {
                arc.intersect_line(line)
            }
            (Shape::Arc(a), Shape::Arc(b)) => a.intersect_circle(b),
            (Shape::Polygon(poly), rest) => dedup_hits(
                poly.edges()
                    .into_iter()
                    .flat_map(|edge| Shape::Line(edge).intersect(rest)),
            ),
            (first, Shape::Polygon(poly)) => dedup_hits(
                poly.edges()
                    .into_iter()
                    .flat_map(|edge| first.intersect(&Shape::Line(edge))),
            ),
        }
    }

    /// Applies `transform`, returning a new shape of the same kind.
    #[must_use]
    pub fn transform(&self, transform: &Transform2D) -> Shape {
        match (self, *transform) {
            (Shape::Line(line), Transform2D::Rotate { angle_deg, pivot }) => {
                Shape::Line(line.rotate(angle_deg, &pivot))
            }
            (Shape::Line(line), Transform2D::Translate { offset }) => {
                Shape::Line(line.translate(offset.x, offset.y))
            }
            (Shape::Line(line), Transform2D::Dilate { scale, pivot }) => {
                Shape::Line(line.scale(scale, &pivot))
            }
            (Shape::Line(line), Transform2D::Reflect { axis }) => {
                Shape::Line(line.reflect_across(&axis))
            }
            (Shape::Arc(arc), Transform2D::Rotate { angle_deg, pivot }) => {
                Shape::Arc(arc.rotate_transform(angle_deg, &pivot))
            }
            (Shape::Arc(arc), Transform2D::Translate { offset }) => {
                Shape::Arc(arc.translate_transform(offset.x, offset.y))
            }
            (Shape::Arc(arc), Transform2D::Dilate { scale, pivot }) => {
                Shape::Arc(arc.dilate_transform(scale, &pivot))
            }
            (Shape::Arc(arc), Transform2D::Reflect { axis }) => {
                Shape::Arc(arc.reflect_transform(&axis))
            }
            (Shape::Polygon(poly), Transform2D::Rotate { angle_deg, pivot }) => {
                Shape::Polygon(poly.rotate(angle_deg, &pivot))
            }
            (Shape::Polygon(poly), Transform2D::Translate { offset }) => {
                Shape::Polygon(poly.translate(offset.x, offset.y))
            }
            (Shape::Polygon(poly), Transform2D::Dilate { scale, pivot }) => {
                Shape::Polygon(poly.scale(scale, &pivot))
            }
            (Shape::Polygon(poly), Transform2D::Reflect { axis }) => {
                Shape::Polygon(poly.reflect_across(&axis))
            }
        }
    }
}

/// Keeps the first of any hits closer than [`POINT_COINCIDENCE`].
fn dedup_hits(hits: impl IntoIterator<Item = Point2>) -> Vec<Point2> {
    let mut kept: Vec<Point2> = Vec::new();
    for hit in hits {
        if kept
            .iter()
            .all(|p| nalgebra::distance(p, &hit) >= POINT_COINCIDENCE)
        {
            kept.push(hit);
        }
    }
    kept
}

impl From<Line2D> for Shape {
    fn from(line: Line2D) -> Self {
        Shape::Line(line)
    }
}

impl From<Arc2D> for Shape {
    fn from(arc: Arc2D) -> Self {
        Shape::Arc(arc)
    }
}

impl From<Polygon2D> for Shape {
    fn from(polygon: Polygon2D) -> Self {
        Shape::Polygon(polygon)
    }
}
