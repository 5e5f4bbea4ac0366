use thiserror::Error;

/// Top-level error type for the geoanim kernel.
#[derive(Debug, Error)]
pub enum GeoanimError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised by geometric operations.
///
/// Most edge cases (parallel lines, concentric circles, non-finite input)
/// resolve to sentinel values instead; only these conditions are reported.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("anchor point ({x}, {y}) does not lie on the {shape}")]
    AnchorOffShape { shape: &'static str, x: f64, y: f64 },

    #[error("degenerate line: length is zero")]
    DegenerateLine,

    #[error("expected 5 or 8 atomic arc values, got {0}")]
    InvalidAtomicValues(usize),
}

/// Convenience type alias for results using [`GeoanimError`].
pub type Result<T> = std::result::Result<T, GeoanimError>;
