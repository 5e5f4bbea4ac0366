mod arc;
mod line;
mod polygon;
mod shape;

pub use arc::Arc2D;
pub use line::Line2D;
pub use polygon::Polygon2D;
pub use shape::{Shape, Transform2D};

use crate::math::Point2;

/// Parameter domain of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl ParamDomain {
    /// Creates a new parameter domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns whether `t` lies inside the domain, inclusive.
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.t_min && t <= self.t_max
    }
}

/// Primitives that map a scalar parameter to a point and back.
///
/// `parameter_at(point_at(t))` returns `t` for any `t` inside the domain.
/// For [`Line2D`] the parameter is the unclamped ratio along the segment;
/// for [`Arc2D`] it is an angle in radians.
pub trait Parametric {
    /// Evaluates the primitive at parameter `t`.
    fn point_at(&self, t: f64) -> Point2;

    /// Recovers the parameter of `point`.
    fn parameter_at(&self, point: &Point2) -> f64;

    /// Parameter range covering the bounded part of the primitive.
    fn domain(&self) -> ParamDomain;
}
