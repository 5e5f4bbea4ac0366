pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeoanimError, GeometryError, Result};
pub use geometry::{Arc2D, Line2D, Parametric, Polygon2D, Shape, Transform2D};
pub use math::{Point2, Vector2};
