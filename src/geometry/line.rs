use crate::error::{GeometryError, Result};
use crate::math::angle::horizontal_angle;
use crate::math::{
    self, is_finite_point, Point2, Vector2, LINE_CONTAINS_EPSILON, NOT_ON_LINE_RATIO,
    POINT_COINCIDENCE, RANGE_TOLERANCE, RATIO_FALLBACK_DISTANCE, TOLERANCE,
};

use super::{ParamDomain, Parametric};

/// A line defined by two endpoints.
///
/// The same value serves as an infinite line and as a bounded segment.
/// Operations are named for the semantics they use: `*_as_line` and
/// [`contains`](Self::contains) work on the infinite line, while
/// `*_as_segment` and [`within_range`](Self::within_range) respect the
/// endpoints. Mixing the two families changes results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2D {
    start: Point2,
    end: Point2,
}

impl Line2D {
    /// Creates a line from its start and end points.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Alias of [`new`](Self::new).
    #[must_use]
    pub fn from_points(start: Point2, end: Point2) -> Self {
        Self::new(start, end)
    }

    /// Creates a line from raw endpoint coordinates.
    #[must_use]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Builds a segment of total length `magnitude` centred on `point`
    /// along `direction`.
    ///
    /// A zero `direction` collapses the segment onto `point`.
    #[must_use]
    pub fn line_through(point: Point2, direction: Vector2, magnitude: f64) -> Self {
        let unit = unit_or_zero(direction);
        let half = unit * (magnitude / 2.0);
        Self::new(point - half, point + half)
    }

    /// Start point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// End point.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Signed x extent, `end.x - start.x`.
    #[must_use]
    pub fn dx(&self) -> f64 {
        self.end.x - self.start.x
    }

    /// Signed y extent, `end.y - start.y`.
    #[must_use]
    pub fn dy(&self) -> f64 {
        self.end.y - self.start.y
    }

    /// Euclidean distance between the endpoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.dx().hypot(self.dy())
    }

    /// Canonical horizontal angle of the direction, in degrees `[0, 360)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        horizontal_angle(self.dx(), self.dy())
    }

    /// Perpendicular vector `(dy, -dx)`, pointing right of the direction.
    ///
    /// Not unit length.
    #[must_use]
    pub fn normal(&self) -> Vector2 {
        Vector2::new(self.dy(), -self.dx())
    }

    /// Direction used by [`normalize`](Self::normalize) and
    /// [`parallel`](Self::parallel): the normal rotated a quarter turn
    /// counter-clockwise.
    #[must_use]
    pub fn slope(&self) -> Vector2 {
        let n = self.normal();
        Vector2::new(-n.y, n.x)
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Point at ratio `t` along the line; `t` is not clamped.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.start + (self.end - self.start) * t
    }

    /// Ratio `t` such that `point ≈ start + t * (end - start)`.
    ///
    /// Uses the orthogonal projection onto the line. When the computation
    /// is not finite (zero-length line, non-finite input) the result falls
    /// back to `0` near the start, `1` near the end and
    /// [`NOT_ON_LINE_RATIO`] otherwise.
    #[must_use]
    pub fn ratio_at(&self, point: &Point2) -> f64 {
        let d = self.end - self.start;
        let ratio = (point - self.start).dot(&d) / d.norm_squared();
        if ratio.is_finite() {
            return ratio;
        }
        tracing::trace!(x = point.x, y = point.y, "ratio fallback on degenerate line");
        if nalgebra::distance(point, &self.start) < RATIO_FALLBACK_DISTANCE {
            0.0
        } else if nalgebra::distance(point, &self.end) < RATIO_FALLBACK_DISTANCE {
            1.0
        } else {
            NOT_ON_LINE_RATIO
        }
    }

    /// Returns whether the ratio of `point` lies in `[0, 1]`, within
    /// [`RANGE_TOLERANCE`].
    ///
    /// Only the ratio is tested; callers pass points already known to be on
    /// the infinite line.
    #[must_use]
    pub fn within_range(&self, point: &Point2) -> bool {
        if !is_finite_point(point) {
            return false;
        }
        let t = self.ratio_at(point);
        t >= -RANGE_TOLERANCE && t <= 1.0 + RANGE_TOLERANCE
    }

    /// Returns whether `point` lies on the infinite line.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        if !is_finite_point(point) {
            return false;
        }
        let len = self.length();
        if len < TOLERANCE {
            return nalgebra::distance(point, &self.start) < POINT_COINCIDENCE;
        }
        let v = point - self.start;
        let distance = (self.dx() * v.y - self.dy() * v.x).abs() / len;
        let scale = [self.start.x, self.start.y, self.end.x, self.end.y, point.x, point.y]
            .iter()
            .fold(1.0_f64, |acc, c| acc.max(c.abs()));
        distance <= LINE_CONTAINS_EPSILON * scale
    }

    /// Signed perpendicular distance, positive right of the direction.
    ///
    /// A zero-length line reports `f64::INFINITY`.
    #[must_use]
    pub fn signed_distance(&self, point: &Point2) -> f64 {
        let len = self.length();
        if len < TOLERANCE {
            return f64::INFINITY;
        }
        (point - self.start).dot(&self.normal()) / len
    }

    /// Orthogonal projection of `point` onto the infinite line.
    #[must_use]
    pub fn project(&self, point: &Point2) -> Point2 {
        math::project(point, &self.start, &self.end)
    }

    /// Mirror image of `point` across the infinite line.
    #[must_use]
    pub fn reflect(&self, point: &Point2) -> Point2 {
        math::reflect(point, &self.start, &self.end)
    }

    /// Intersection of the two infinite lines, `None` when parallel.
    #[must_use]
    pub fn intersect_as_line(&self, other: &Line2D) -> Option<Point2> {
        math::intersect_lines(&self.start, &self.end, &other.start, &other.end)
    }

    /// Intersection of the two segments: empty or a single point.
    #[must_use]
    pub fn intersect_as_segment(&self, other: &Line2D) -> Vec<Point2> {
        self.intersect_as_line(other)
            .filter(|p| self.within_range(p) && other.within_range(p))
            .into_iter()
            .collect()
    }

    /// Returns whether the two lines have the same direction up to sign.
    #[must_use]
    pub fn is_parallel(&self, other: &Line2D) -> bool {
        let cross = self.dx() * other.dy() - self.dy() * other.dx();
        cross.abs() <= TOLERANCE * self.length() * other.length()
    }

    /// Line from `point` along this line's [`slope`](Self::slope).
    #[must_use]
    pub fn parallel(&self, point: Point2) -> Line2D {
        Line2D::new(point, point + self.slope())
    }

    /// Line from `point` along this line's [`normal`](Self::normal).
    #[must_use]
    pub fn perp(&self, point: Point2) -> Line2D {
        Line2D::new(point, point + self.normal())
    }

    /// Offsets the whole line by `distance` along its unit normal.
    ///
    /// Positive distances move the line to the right of its direction.
    #[must_use]
    pub fn parallel_by_dist(&self, distance: f64) -> Line2D {
        let offset = unit_or_zero(self.normal()) * distance;
        Line2D::new(self.start + offset, self.end + offset)
    }

    /// Rotates both endpoints by `angle_deg` counter-clockwise around `pivot`.
    #[must_use]
    pub fn rotate(&self, angle_deg: f64, pivot: &Point2) -> Line2D {
        Line2D::new(
            math::rotate_point(angle_deg, &self.start, pivot),
            math::rotate_point(angle_deg, &self.end, pivot),
        )
    }

    /// Shifts both endpoints by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Line2D {
        let offset = Vector2::new(dx, dy);
        Line2D::new(
            math::translate_point(&self.start, &offset),
            math::translate_point(&self.end, &offset),
        )
    }

    /// Dilates both endpoints by `factor` around `pivot`.
    #[must_use]
    pub fn scale(&self, factor: f64, pivot: &Point2) -> Line2D {
        Line2D::new(
            math::dilate(factor, &self.start, pivot),
            math::dilate(factor, &self.end, pivot),
        )
    }

    /// Mirrors both endpoints across the infinite line `axis`.
    #[must_use]
    pub fn reflect_across(&self, axis: &Line2D) -> Line2D {
        Line2D::new(axis.reflect(&self.start), axis.reflect(&self.end))
    }

    /// Keeps the start point and moves the end so the line has `length`.
    ///
    /// The direction comes from [`slope`](Self::slope). A zero-length line
    /// is returned unchanged.
    #[must_use]
    pub fn normalize(&self, length: f64) -> Line2D {
        let slope = self.slope();
        if slope.norm() < TOLERANCE {
            return *self;
        }
        Line2D::new(self.start, self.start + slope.normalize() * length)
    }

    /// Point at `distance` from the start along the direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if the line has zero length.
    pub fn position_on_line(&self, distance: f64) -> Result<Point2> {
        let len = self.length();
        if len < TOLERANCE {
            tracing::debug!(length = len, "position requested on degenerate line");
            return Err(GeometryError::DegenerateLine.into());
        }
        Ok(self.point_at(distance / len))
    }

    /// Endpoints of a perpendicular segment of `length` centred on `point`.
    ///
    /// The pair runs against the normal: `[point + n·h, point - n·h]`.
    #[must_use]
    pub fn perp_line_through_point(&self, point: &Point2, length: f64) -> [Point2; 2] {
        let half = unit_or_zero(self.normal()) * (length / 2.0);
        [point + half, point - half]
    }

    /// Endpoints of a parallel segment of `length` centred on `point`,
    /// ordered along the slope.
    #[must_use]
    pub fn parallel_line_through_point(&self, point: &Point2, length: f64) -> [Point2; 2] {
        let half = unit_or_zero(self.slope()) * (length / 2.0);
        [point - half, point + half]
    }

    /// Clips the segment against the axis-aligned box spanned by `lo` and
    /// `hi`.
    ///
    /// Each axis bounds the ratio to a near/far pair; the clipped segment
    /// keeps the original orientation. Returns `None` when the segment
    /// misses the box.
    #[must_use]
    pub fn intersect_box(&self, lo: &Point2, hi: &Point2) -> Option<Line2D> {
        let (mut near, mut far) = (0.0_f64, 1.0_f64);
        let axes = [
            (self.start.x, self.dx(), lo.x.min(hi.x), lo.x.max(hi.x)),
            (self.start.y, self.dy(), lo.y.min(hi.y), lo.y.max(hi.y)),
        ];
        for (origin, delta, min, max) in axes {
            if delta.abs() < TOLERANCE {
                if origin < min || origin > max {
                    return None;
                }
                continue;
            }
            let t1 = (min - origin) / delta;
            let t2 = (max - origin) / delta;
            near = near.max(t1.min(t2));
            far = far.min(t1.max(t2));
            if near > far {
                return None;
            }
        }
        Some(Line2D::new(self.point_at(near), self.point_at(far)))
    }

    /// Parts of the segment outside the window between two anchors.
    ///
    /// Anchors are ordered by ratio. Zero-length parts are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::AnchorOffShape`] if an anchor's ratio is
    /// outside `[0, 1]`.
    pub fn exclude_parts(&self, a: &Point2, b: &Point2) -> Result<Vec<Line2D>> {
        let (lo, hi) = self.anchor_window(a, b)?;
        let parts = [
            Line2D::new(self.start, self.point_at(lo)),
            Line2D::new(self.point_at(hi), self.end),
        ];
        Ok(parts
            .into_iter()
            .filter(|part| part.length() >= POINT_COINCIDENCE)
            .collect())
    }

    /// Part of the segment between two anchors.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::AnchorOffShape`] if an anchor's ratio is
    /// outside `[0, 1]`.
    pub fn include_parts(&self, a: &Point2, b: &Point2) -> Result<Line2D> {
        let (lo, hi) = self.anchor_window(a, b)?;
        Ok(Line2D::new(self.point_at(lo), self.point_at(hi)))
    }

    fn anchor_window(&self, a: &Point2, b: &Point2) -> Result<(f64, f64)> {
        let ra = self.anchor_ratio(a)?;
        let rb = self.anchor_ratio(b)?;
        Ok((ra.min(rb), ra.max(rb)))
    }

    fn anchor_ratio(&self, anchor: &Point2) -> Result<f64> {
        let t = self.ratio_at(anchor);
        if t >= -RANGE_TOLERANCE && t <= 1.0 + RANGE_TOLERANCE {
            Ok(t.clamp(0.0, 1.0))
        } else {
            tracing::debug!(x = anchor.x, y = anchor.y, ratio = t, "anchor off line");
            Err(GeometryError::AnchorOffShape {
                shape: "line",
                x: anchor.x,
                y: anchor.y,
            }
            .into())
        }
    }
}

impl Parametric for Line2D {
    fn point_at(&self, t: f64) -> Point2 {
        Line2D::point_at(self, t)
    }

    fn parameter_at(&self, point: &Point2) -> f64 {
        self.ratio_at(point)
    }

    fn domain(&self) -> ParamDomain {
        ParamDomain::new(0.0, 1.0)
    }
}

fn unit_or_zero(v: Vector2) -> Vector2 {
    let len = v.norm();
    if len < TOLERANCE {
        Vector2::zeros()
    } else {
        v / len
    }
}
