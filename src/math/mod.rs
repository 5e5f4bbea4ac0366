pub mod angle;
pub mod intersect_2d;
pub mod transform_2d;

pub use intersect_2d::{
    intersect_circle_and_circle, intersect_circle_and_line, intersect_lines, intersect_segments,
};
pub use transform_2d::{angle, dilate, project, reflect, rotate_point, translate_point};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Determinant magnitude below which two lines are treated as parallel.
pub const TOLERANCE: f64 = 1e-10;

/// Slack allowed around `[0, 1]` ratios and arc angle bounds (degrees).
pub const RANGE_TOLERANCE: f64 = 0.001;

/// Distance to an endpoint under which a failed ratio falls back to 0 or 1.
pub const RATIO_FALLBACK_DISTANCE: f64 = 0.02;

/// Distance under which two points are considered the same point.
pub const POINT_COINCIDENCE: f64 = 0.01;

/// Allowed gap between rounded squared distance and squared radius.
pub const RADIUS_MATCH_TOLERANCE: f64 = 0.1;

/// Maximum distance between an anchor and the nearest arc sample.
pub const ARC_SAMPLE_MATCH_DISTANCE: f64 = 0.5;

/// Relative perpendicular distance accepted by `Line2D::contains`.
pub const LINE_CONTAINS_EPSILON: f64 = 1e-12;

/// Ratio reported for a point that cannot be placed on a line.
pub const NOT_ON_LINE_RATIO: f64 = -1000.0;

/// Upper bound on the number of points produced by arc rasterization.
pub const MAX_POLY_POINTS: usize = 360;

/// Returns `true` when both coordinates are finite.
#[must_use]
pub fn is_finite_point(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
