use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::angle::{angle_in_span, horizontal_angle, normalize_degrees};
use crate::math::{
    self, is_finite_point, Point2, Vector2, ARC_SAMPLE_MATCH_DISTANCE, MAX_POLY_POINTS,
    RADIUS_MATCH_TOLERANCE, RANGE_TOLERANCE,
};

use super::{Line2D, ParamDomain, Parametric};

/// A circle restricted to an angular span.
///
/// Angles are in degrees, counter-clockwise from the positive x axis.
/// The internal bounds satisfy `from_angle <= to_angle` after the usual
/// normalisation, but `to_angle` may exceed 360 when the span wraps through
/// 0°. The author-facing `source_*` angles keep their original sign and are
/// copied verbatim by every transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc2D {
    origin: Point2,
    radius: f64,
    from_angle: f64,
    to_angle: f64,
    source_from_angle: f64,
    source_to_angle: f64,
}

impl Arc2D {
    /// Creates an arc from its centre, radius and signed bounds in degrees.
    ///
    /// A negative `to_deg` shifts both bounds by a full turn before they are
    /// ordered.
    #[must_use]
    pub fn new(center: Point2, radius: f64, from_deg: f64, to_deg: f64) -> Self {
        Self::with_angles(center, radius, from_deg, to_deg, false)
    }

    /// Decodes an arc from one of its two flat numeric encodings:
    ///
    /// * `[cx, cy, r, from, to]`
    /// * `[copy_start_x, copy_start_y, copy_end_x, copy_end_y, cx, cy, from, to]`,
    ///   where the radius is the distance between the two copy points.
    ///
    /// With `preserve_angle` the bounds are kept exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidAtomicValues`] for any other length.
    pub fn from_atomic_values(values: &[f64], preserve_angle: bool) -> Result<Self> {
        match *values {
            [cx, cy, r, from, to] => Ok(Self::with_angles(
                Point2::new(cx, cy),
                r,
                from,
                to,
                preserve_angle,
            )),
            [sx, sy, ex, ey, cx, cy, from, to] => {
                let radius = nalgebra::distance(&Point2::new(sx, sy), &Point2::new(ex, ey));
                Ok(Self::with_angles(
                    Point2::new(cx, cy),
                    radius,
                    from,
                    to,
                    preserve_angle,
                ))
            }
            _ => Err(GeometryError::InvalidAtomicValues(values.len()).into()),
        }
    }

    fn with_angles(center: Point2, radius: f64, from: f64, to: f64, preserve_angle: bool) -> Self {
        let (from_angle, to_angle) = if preserve_angle {
            (from, to)
        } else {
            let (f, t) = if to < 0.0 {
                (from + 360.0, to + 360.0)
            } else {
                (from, to)
            };
            (f.min(t), f.max(t))
        };
        Self {
            origin: center,
            radius,
            from_angle,
            to_angle,
            source_from_angle: from,
            source_to_angle: to,
        }
    }

    /// Same source angles, new geometry. Bounds are re-anchored so that
    /// `from_angle` lies in `[0, 360)`.
    fn derived(&self, origin: Point2, radius: f64, from: f64, to: f64) -> Self {
        let shift = normalize_degrees(from) - from;
        Self {
            origin,
            radius,
            from_angle: from + shift,
            to_angle: to + shift,
            source_from_angle: self.source_from_angle,
            source_to_angle: self.source_to_angle,
        }
    }

    /// Sub-arc with its own author-facing angles.
    fn sub_arc(&self, from: f64, to: f64) -> Self {
        Self {
            origin: self.origin,
            radius: self.radius,
            from_angle: from,
            to_angle: to,
            source_from_angle: from,
            source_to_angle: to,
        }
    }

    /// Centre of the circle.
    #[must_use]
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// Circle radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Start angle in degrees after normalisation.
    #[must_use]
    pub fn from_angle(&self) -> f64 {
        self.from_angle
    }

    /// End angle in degrees after normalisation, never below
    /// [`from_angle`](Self::from_angle).
    #[must_use]
    pub fn to_angle(&self) -> f64 {
        self.to_angle
    }

    /// Start angle as authored, before normalisation.
    #[must_use]
    pub fn source_from_angle(&self) -> f64 {
        self.source_from_angle
    }

    /// End angle as authored, before normalisation.
    #[must_use]
    pub fn source_to_angle(&self) -> f64 {
        self.source_to_angle
    }

    /// Angular extent of the internal bounds, in degrees.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.to_angle - self.from_angle
    }

    /// Point at [`from_angle`](Self::from_angle).
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.point_at(self.from_angle.to_radians())
    }

    /// Point at [`to_angle`](Self::to_angle).
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.point_at(self.to_angle.to_radians())
    }

    /// Point on the circle at `angle` radians.
    #[must_use]
    pub fn point_at(&self, angle: f64) -> Point2 {
        Point2::new(
            self.origin.x + self.radius * angle.cos(),
            self.origin.y + self.radius * angle.sin(),
        )
    }

    /// Angle of `point` seen from the centre, in radians `[0, 2π)`.
    #[must_use]
    pub fn angle_at(&self, point: &Point2) -> f64 {
        let a = self.angle_at_degrees(point).to_radians();
        if a >= TAU {
            0.0
        } else {
            a
        }
    }

    /// Angle of `point` seen from the centre, in degrees `[0, 360)`.
    #[must_use]
    pub fn angle_at_degrees(&self, point: &Point2) -> f64 {
        horizontal_angle(point.x - self.origin.x, point.y - self.origin.y)
    }

    /// Returns whether `point` is on the circle and inside the internal
    /// bounds.
    ///
    /// The squared distance and squared radius are compared after rounding
    /// to two decimals.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        if !is_finite_point(point) {
            return false;
        }
        let dist_sq = round2((point - self.origin).norm_squared());
        let radius_sq = round2(self.radius * self.radius);
        (dist_sq - radius_sq).abs() <= RADIUS_MATCH_TOLERANCE
            && angle_in_span(
                self.angle_at_degrees(point),
                self.from_angle,
                self.to_angle,
                RANGE_TOLERANCE,
            )
    }

    /// Angular membership test against the authored span, used to filter
    /// intersection candidates.
    ///
    /// Both source angles negative: the absolute span is tried first.
    /// Otherwise negative bounds are ordered, both bounds are reduced to
    /// `[0, 360)`, and a span whose start is past its end wraps through 0°.
    #[must_use]
    pub fn within_range(&self, point: &Point2) -> bool {
        if !is_finite_point(point) {
            return false;
        }
        let angle = self.angle_at_degrees(point);
        let (sf, st) = (self.source_from_angle, self.source_to_angle);
        if !(sf.is_finite() && st.is_finite()) {
            return false;
        }

        if sf < 0.0 && st < 0.0 {
            let (a, b) = (sf.abs(), st.abs());
            if in_closed(angle, a.min(b), a.max(b)) {
                return true;
            }
        }

        let (from, to) = if sf < 0.0 || st < 0.0 {
            (sf.min(st), sf.max(st))
        } else {
            (sf, st)
        };
        if (to - from).abs() >= 360.0 {
            return true;
        }

        let start = normalize_degrees(from);
        let end = normalize_degrees(to);
        if start < end {
            in_closed(angle, start, end)
        } else if start > end {
            in_closed(angle, start, 360.0) || in_closed(angle, 0.0, end)
        } else {
            in_closed(angle, start, start) || in_closed(angle - 360.0, start, start)
        }
    }

    /// Points where `line` crosses this arc.
    ///
    /// Candidates from the infinite line must pass both shapes'
    /// `within_range`; the result is in reverse solver order.
    #[must_use]
    pub fn intersect_line(&self, line: &Line2D) -> Vec<Point2> {
        let candidates =
            math::intersect_circle_and_line(&self.origin, self.radius, &line.start(), &line.end());
        candidates
            .into_iter()
            .filter(|p| self.within_range(p) && line.within_range(p))
            .rev()
            .collect()
    }

    /// Points where `other` crosses this arc, in reverse solver order.
    #[must_use]
    pub fn intersect_circle(&self, other: &Arc2D) -> Vec<Point2> {
        let candidates = math::intersect_circle_and_circle(
            &self.origin,
            self.radius,
            &other.origin,
            other.radius,
        );
        candidates
            .into_iter()
            .filter(|p| self.within_range(p) && other.within_range(p))
            .rev()
            .collect()
    }

    /// Rasterizes the authored span for extrusion.
    ///
    /// Angles are remapped to the drawing convention
    /// `from_ui = 360 - from`, `to_ui = from_ui - sweep` with the sweep
    /// capped to a full turn, walked from the smaller to the larger by
    /// `step_deg`. A pie-slice centre is prepended when the sweep is below a
    /// full turn, and the point at the end angle is always appended. At most
    /// [`MAX_POLY_POINTS`] points are produced; a non-positive step yields
    /// none.
    #[must_use]
    pub fn as_poly_points(&self, step_deg: f64) -> Vec<Point2> {
        let authored = self.source_from_angle.is_finite() && self.source_to_angle.is_finite();
        if !(authored && step_deg.is_finite() && step_deg > 0.0) {
            tracing::debug!(step_deg, "rejected arc sampling step");
            return Vec::new();
        }
        let normalized_from = normalize_degrees(self.source_from_angle);
        let normalized_to = (self.source_to_angle - self.source_from_angle).clamp(-360.0, 360.0);
        let from_ui = 360.0 - normalized_from;
        let to_ui = from_ui - normalized_to;
        let (lo, hi) = (from_ui.min(to_ui), from_ui.max(to_ui));

        let ui_point = |ui: f64| self.point_at((360.0 - ui).to_radians());
        let mut points = Vec::new();
        if hi - lo < 360.0 {
            points.push(self.origin);
        }
        let mut theta = lo;
        while theta < hi - RANGE_TOLERANCE && points.len() < MAX_POLY_POINTS - 1 {
            points.push(ui_point(theta));
            theta += step_deg;
        }
        points.push(ui_point(hi));
        points
    }

    /// Rotates the arc by `angle_deg` counter-clockwise around `pivot`.
    #[must_use]
    pub fn rotate_transform(&self, angle_deg: f64, pivot: &Point2) -> Arc2D {
        self.derived(
            math::rotate_point(angle_deg, &self.origin, pivot),
            self.radius,
            self.from_angle + angle_deg,
            self.to_angle + angle_deg,
        )
    }

    /// Moves the centre by `(dx, dy)`; angles are unchanged.
    #[must_use]
    pub fn translate_transform(&self, dx: f64, dy: f64) -> Arc2D {
        self.derived(
            math::translate_point(&self.origin, &Vector2::new(dx, dy)),
            self.radius,
            self.from_angle,
            self.to_angle,
        )
    }

    /// Scales the arc by `scale` around `pivot`.
    ///
    /// A negative scale is a half-turn, so the bounds rotate by 180°.
    #[must_use]
    pub fn dilate_transform(&self, scale: f64, pivot: &Point2) -> Arc2D {
        let turn = if scale < 0.0 { 180.0 } else { 0.0 };
        self.derived(
            math::dilate(scale, &self.origin, pivot),
            self.radius * scale.abs(),
            self.from_angle + turn,
            self.to_angle + turn,
        )
    }

    /// Mirrors the arc across the infinite line `axis`.
    ///
    /// Reflection reverses orientation, so the mirrored bounds swap.
    #[must_use]
    pub fn reflect_transform(&self, axis: &Line2D) -> Arc2D {
        let mirror = 2.0 * axis.angle();
        self.derived(
            axis.reflect(&self.origin),
            self.radius,
            mirror - self.to_angle,
            mirror - self.from_angle,
        )
    }

    /// The arc sampled at whole-degree steps from `from_angle`, with the end
    /// angle always included.
    #[must_use]
    pub fn path_points(&self) -> Vec<Point2> {
        self.sampled_path().into_iter().map(|(_, p)| p).collect()
    }

    /// Sweep walked counter-clockwise, capped to one full turn; bounds kept
    /// as authored may be reversed.
    fn span(&self) -> f64 {
        let sweep = self.sweep();
        let span = if sweep < 0.0 { sweep + 360.0 } else { sweep };
        span.min(360.0)
    }

    fn sampled_path(&self) -> Vec<(f64, Point2)> {
        let span = self.span();
        let mut samples = Vec::new();
        let mut offset = 0.0;
        while offset < span {
            let angle = self.from_angle + offset;
            samples.push((angle, self.point_at(angle.to_radians())));
            offset += 1.0;
        }
        let end = self.from_angle + span;
        samples.push((end, self.point_at(end.to_radians())));
        samples
    }

    /// Unwrapped angle of the path sample nearest to `anchor`.
    fn anchor_angle(&self, samples: &[(f64, Point2)], anchor: &Point2) -> Result<f64> {
        let nearest = samples
            .iter()
            .map(|(angle, p)| (*angle, nalgebra::distance(p, anchor)))
            .filter(|(_, d)| d.is_finite())
            .min_by(|a, b| a.1.total_cmp(&b.1));
        match nearest {
            Some((angle, d)) if d <= ARC_SAMPLE_MATCH_DISTANCE => Ok(angle),
            _ => {
                tracing::debug!(x = anchor.x, y = anchor.y, "anchor off arc");
                Err(GeometryError::AnchorOffShape {
                    shape: "arc",
                    x: anchor.x,
                    y: anchor.y,
                }
                .into())
            }
        }
    }

    fn anchor_window(&self, a: &Point2, b: &Point2) -> Result<(f64, f64)> {
        let samples = self.sampled_path();
        let angle_a = self.anchor_angle(&samples, a)?;
        let angle_b = self.anchor_angle(&samples, b)?;
        Ok((angle_a.min(angle_b), angle_a.max(angle_b)))
    }

    /// The part of the arc between two anchors, which may have zero sweep.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::AnchorOffShape`] if an anchor is farther than
    /// [`ARC_SAMPLE_MATCH_DISTANCE`] from every path sample.
    pub fn part_from_points(&self, a: &Point2, b: &Point2) -> Result<Arc2D> {
        let (lo, hi) = self.anchor_window(a, b)?;
        Ok(self.sub_arc(lo, hi))
    }

    /// Parts of the arc outside the window between two anchors.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::AnchorOffShape`] if an anchor is off the arc.
    pub fn exclude_parts(&self, a: &Point2, b: &Point2) -> Result<Vec<Arc2D>> {
        let (lo, hi) = self.anchor_window(a, b)?;
        let end = self.from_angle + self.span();
        Ok([(self.from_angle, lo), (hi, end)]
            .into_iter()
            .filter(|(from, to)| to - from > RANGE_TOLERANCE)
            .map(|(from, to)| self.sub_arc(from, to))
            .collect())
    }

    /// Part of the arc between two anchors, empty when they coincide.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::AnchorOffShape`] if an anchor is off the arc.
    pub fn include_parts(&self, a: &Point2, b: &Point2) -> Result<Vec<Arc2D>> {
        let part = self.part_from_points(a, b)?;
        Ok(Some(part)
            .filter(|arc| arc.sweep() > RANGE_TOLERANCE)
            .into_iter()
            .collect())
    }
}

impl Parametric for Arc2D {
    fn point_at(&self, t: f64) -> Point2 {
        Arc2D::point_at(self, t)
    }

    fn parameter_at(&self, point: &Point2) -> f64 {
        self.angle_at(point)
    }

    fn domain(&self) -> ParamDomain {
        ParamDomain::new(self.from_angle.to_radians(), self.to_angle.to_radians())
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn in_closed(angle: f64, lo: f64, hi: f64) -> bool {
    angle >= lo - RANGE_TOLERANCE && angle <= hi + RANGE_TOLERANCE
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::GeoanimError;
    use crate::test_support::init_tracing;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn assert_point(actual: Point2, x: f64, y: f64) {
        assert_abs_diff_eq!(actual.x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(actual.y, y, epsilon = 1e-9);
    }

    fn on_circle(arc: &Arc2D, deg: f64) -> Point2 {
        arc.point_at(deg.to_radians())
    }

    #[test]
    fn negative_end_shifts_both_bounds() {
        let arc = Arc2D::new(p(0.0, 0.0), 1.0, -30.0, -10.0);
        assert_abs_diff_eq!(arc.from_angle(), 330.0);
        assert_abs_diff_eq!(arc.to_angle(), 350.0);
        assert_abs_diff_eq!(arc.source_from_angle(), -30.0);
        assert_abs_diff_eq!(arc.source_to_angle(), -10.0);

        let wrapping = Arc2D::new(p(0.0, 0.0), 1.0, 10.0, -10.0);
        assert_abs_diff_eq!(wrapping.from_angle(), 350.0);
        assert_abs_diff_eq!(wrapping.to_angle(), 370.0);
    }

    #[test]
    fn bounds_are_ordered() {
        let arc = Arc2D::new(p(0.0, 0.0), 1.0, 90.0, 30.0);
        assert_abs_diff_eq!(arc.from_angle(), 30.0);
        assert_abs_diff_eq!(arc.to_angle(), 90.0);
    }

    #[test]
    fn atomic_values_both_encodings() {
        let short = Arc2D::from_atomic_values(&[1.0, 2.0, 3.0, 0.0, 90.0], false).unwrap();
        assert_point(short.origin(), 1.0, 2.0);
        assert_abs_diff_eq!(short.radius(), 3.0);

        let long =
            Arc2D::from_atomic_values(&[0.0, 0.0, 3.0, 4.0, 1.0, 1.0, 0.0, 90.0], false).unwrap();
        assert_point(long.origin(), 1.0, 1.0);
        assert_abs_diff_eq!(long.radius(), 5.0);

        let kept = Arc2D::from_atomic_values(&[0.0, 0.0, 1.0, 40.0, -20.0], true).unwrap();
        assert_abs_diff_eq!(kept.from_angle(), 40.0);
        assert_abs_diff_eq!(kept.to_angle(), -20.0);
    }

    #[test]
    fn atomic_values_wrong_length() {
        let err = Arc2D::from_atomic_values(&[0.0, 0.0, 1.0], false).unwrap_err();
        assert!(matches!(
            err,
            GeoanimError::Geometry(GeometryError::InvalidAtomicValues(3))
        ));
    }

    #[test]
    fn angle_round_trip() {
        let arc = Arc2D::new(p(2.0, -1.0), 3.0, 0.0, 360.0);
        for deg in [0.0_f64, 45.0, 135.0, 270.0, 359.0] {
            let angle = deg.to_radians();
            assert_abs_diff_eq!(arc.angle_at(&arc.point_at(angle)), angle, epsilon = 1e-9);
        }
    }

    #[test]
    fn contains_checks_radius_and_span() {
        let arc = Arc2D::new(p(0.0, 0.0), 5.0, 0.0, 90.0);
        assert!(arc.contains(&p(3.0, 4.0)));
        assert!(!arc.contains(&p(3.0, -4.0)));
        assert!(!arc.contains(&p(3.5, 4.0)));
        assert!(!arc.contains(&p(f64::NAN, 4.0)));
    }

    #[test]
    fn contains_span_past_360() {
        let arc = Arc2D::new(p(0.0, 0.0), 1.0, 10.0, -10.0);
        assert!(arc.contains(&on_circle(&arc, 5.0)));
        assert!(arc.contains(&on_circle(&arc, 355.0)));
        assert!(!arc.contains(&on_circle(&arc, 180.0)));
    }

    #[test]
    fn within_range_wraps_through_zero() {
        let arc = Arc2D::new(p(0.0, 0.0), 1.0, 350.0, 10.0);
        assert!(arc.within_range(&on_circle(&arc, 359.0)));
        assert!(arc.within_range(&on_circle(&arc, 5.0)));
        assert!(!arc.within_range(&on_circle(&arc, 180.0)));
    }

    #[test]
    fn within_range_direct_and_full_turn() {
        let quarter = Arc2D::new(p(0.0, 0.0), 1.0, 0.0, 90.0);
        assert!(quarter.within_range(&on_circle(&quarter, 45.0)));
        assert!(quarter.within_range(&on_circle(&quarter, 90.0)));
        assert!(!quarter.within_range(&on_circle(&quarter, 200.0)));

        let full = Arc2D::new(p(0.0, 0.0), 1.0, 0.0, 360.0);
        assert!(full.within_range(&on_circle(&full, 200.0)));
        assert!(!full.within_range(&p(f64::INFINITY, 0.0)));
    }

    #[test]
    fn within_range_reverse_authoring() {
        let arc = Arc2D::new(p(0.0, 0.0), 1.0, -30.0, -90.0);
        // Absolute span [30, 90].
        assert!(arc.within_range(&on_circle(&arc, 60.0)));
        // Ordered span [-90, -30] is [270, 330].
        assert!(arc.within_range(&on_circle(&arc, 300.0)));
        assert!(!arc.within_range(&on_circle(&arc, 180.0)));
    }

    #[test]
    fn within_range_mixed_signs() {
        let arc = Arc2D::new(p(0.0, 0.0), 1.0, 20.0, -20.0);
        assert!(arc.within_range(&on_circle(&arc, 0.0)));
        assert!(arc.within_range(&on_circle(&arc, 345.0)));
        assert!(!arc.within_range(&on_circle(&arc, 90.0)));
    }

    #[test]
    fn line_intersection_filtered_by_span() {
        let arc = Arc2D::new(p(0.0, 0.0), 5.0, 0.0, 90.0);
        let line = Line2D::from_coords(-10.0, 3.0, 10.0, 3.0);
        let hits = arc.intersect_line(&line);
        assert_eq!(hits.len(), 1);
        assert_point(hits[0], 4.0, 3.0);
    }

    #[test]
    fn line_intersection_reverse_solver_order() {
        let arc = Arc2D::new(p(0.0, 0.0), 5.0, 0.0, 360.0);
        let hits = arc.intersect_line(&Line2D::from_coords(-10.0, 3.0, 10.0, 3.0));
        assert_eq!(hits.len(), 2);
        assert_point(hits[0], 4.0, 3.0);
        assert_point(hits[1], -4.0, 3.0);
    }

    #[test]
    fn line_intersection_respects_segment_range() {
        let arc = Arc2D::new(p(0.0, 0.0), 5.0, 0.0, 360.0);
        let hits = arc.intersect_line(&Line2D::from_coords(0.0, 3.0, 10.0, 3.0));
        assert_eq!(hits.len(), 1);
        assert_point(hits[0], 4.0, 3.0);
    }

    #[test]
    fn circle_intersection_reverse_solver_order() {
        let a = Arc2D::new(p(0.0, 0.0), 1.0, 0.0, 360.0);
        let b = Arc2D::new(p(1.0, 0.0), 1.0, 0.0, 360.0);
        let h = 3.0_f64.sqrt() / 2.0;
        let hits = a.intersect_circle(&b);
        assert_eq!(hits.len(), 2);
        assert_point(hits[0], 0.5, -h);
        assert_point(hits[1], 0.5, h);

        let upper = Arc2D::new(p(0.0, 0.0), 1.0, 0.0, 180.0);
        let filtered = upper.intersect_circle(&b);
        assert_eq!(filtered.len(), 1);
        assert_point(filtered[0], 0.5, h);
    }

    #[test]
    fn poly_points_quarter_pie() {
        let arc = Arc2D::new(p(0.0, 0.0), 1.0, 0.0, 90.0);
        let points = arc.as_poly_points(30.0);
        assert_eq!(points.len(), 5);
        assert_point(points[0], 0.0, 0.0);
        assert_point(points[1], 0.0, 1.0);
        assert_point(points[4], 1.0, 0.0);
    }

    #[test]
    fn poly_points_sweep_is_capped() {
        let arc = Arc2D::from_atomic_values(&[0.0, 0.0, 5.0, 0.0, -450.0], false).unwrap();
        let points = arc.as_poly_points(10.0);
        // 36 steps over a capped full turn plus the end point, no pie centre.
        assert_eq!(points.len(), 37);
        assert_point(points[0], 5.0, 0.0);
        assert_point(points[36], 5.0, 0.0);
    }

    #[test]
    fn poly_points_limit_and_bad_step() {
        init_tracing();
        let arc = Arc2D::new(p(0.0, 0.0), 2.0, 0.0, 360.0);
        assert_eq!(arc.as_poly_points(0.5).len(), MAX_POLY_POINTS);
        assert!(arc.as_poly_points(0.0).is_empty());
        assert!(arc.as_poly_points(f64::NAN).is_empty());
    }

    #[test]
    fn transforms_copy_source_angles() {
        let arc = Arc2D::new(p(0.0, 0.0), 5.0, 0.0, 90.0);

        let rotated = arc.rotate_transform(90.0, &p(0.0, 0.0));
        assert_abs_diff_eq!(rotated.from_angle(), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rotated.to_angle(), 180.0, epsilon = 1e-12);
        assert_point(rotated.start_point(), 0.0, 5.0);
        assert_abs_diff_eq!(rotated.source_from_angle(), 0.0);
        assert_abs_diff_eq!(rotated.source_to_angle(), 90.0);

        let moved = arc.translate_transform(1.0, -2.0);
        assert_point(moved.origin(), 1.0, -2.0);
        assert_abs_diff_eq!(moved.sweep(), 90.0);

        let mirrored = arc.reflect_transform(&Line2D::from_coords(0.0, 0.0, 1.0, 0.0));
        assert_abs_diff_eq!(mirrored.from_angle(), 270.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mirrored.to_angle(), 360.0, epsilon = 1e-12);
        assert_point(mirrored.start_point(), 0.0, -5.0);
        assert_abs_diff_eq!(mirrored.source_to_angle(), 90.0);
    }

    #[test]
    fn dilate_scales_radius_and_origin() {
        let arc = Arc2D::new(p(0.0, 0.0), 5.0, 0.0, 90.0);
        let grown = arc.dilate_transform(2.0, &p(1.0, 0.0));
        assert_point(grown.origin(), -1.0, 0.0);
        assert_abs_diff_eq!(grown.radius(), 10.0);

        let flipped = arc.dilate_transform(-1.0, &p(0.0, 0.0));
        assert_abs_diff_eq!(flipped.radius(), 5.0);
        assert_abs_diff_eq!(flipped.from_angle(), 180.0);
        assert_point(flipped.end_point(), 0.0, -5.0);
    }

    #[test]
    fn path_samples_whole_degrees() {
        let arc = Arc2D::new(p(0.0, 0.0), 10.0, 0.0, 90.5);
        let points = arc.path_points();
        assert_eq!(points.len(), 92);
        assert_point(points[91], arc.end_point().x, arc.end_point().y);
    }

    #[test]
    fn path_samples_stop_after_one_turn() {
        let arc = Arc2D::new(p(0.0, 0.0), 1.0, 0.0, 1e6);
        assert_eq!(arc.path_points().len(), 361);

        let part = arc.part_from_points(&p(1.0, 0.0), &p(0.0, 1.0)).unwrap();
        assert_abs_diff_eq!(part.sweep(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn parts_between_anchors() {
        let arc = Arc2D::new(p(0.0, 0.0), 10.0, 0.0, 90.0);
        let a = on_circle(&arc, 60.0);
        let b = on_circle(&arc, 30.0);

        let part = arc.part_from_points(&a, &b).unwrap();
        assert_abs_diff_eq!(part.from_angle(), 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(part.to_angle(), 60.0, epsilon = 1e-9);

        let outside = arc.exclude_parts(&a, &b).unwrap();
        assert_eq!(outside.len(), 2);
        assert_abs_diff_eq!(outside[0].to_angle(), 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(outside[1].from_angle(), 60.0, epsilon = 1e-9);
        assert_abs_diff_eq!(outside[1].to_angle(), 90.0, epsilon = 1e-9);

        let inside = arc.include_parts(&a, &b).unwrap();
        assert_eq!(inside.len(), 1);
        assert!(arc.include_parts(&a, &a).unwrap().is_empty());
    }

    #[test]
    fn parts_reject_anchor_off_arc() {
        init_tracing();
        let arc = Arc2D::new(p(0.0, 0.0), 10.0, 0.0, 90.0);
        let err = arc
            .exclude_parts(&on_circle(&arc, 30.0), &on_circle(&arc, 200.0))
            .unwrap_err();
        assert!(matches!(
            err,
            GeoanimError::Geometry(GeometryError::AnchorOffShape { shape: "arc", .. })
        ));
    }
}
