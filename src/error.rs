//! Error types for the view transform and orbit rasterization.

/// Errors from the viewport coordinate transform.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ViewError {
    #[error("invalid scale factor {0} (must be positive and finite)")]
    InvalidScale(f64),

    #[error("non-finite logical coordinate ({x}, {y})")]
    NonFinitePoint { x: f64, y: f64 },
}

/// Errors from orbit construction and drawing.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum RenderError {
    #[error("degenerate semi-major axis {0} (must be positive)")]
    DegenerateAxis(f64),

    #[error("eccentricity {0} outside [0, 1): orbit is not a closed ellipse")]
    UnboundOrbit(f64),

    #[error(transparent)]
    View(#[from] ViewError),
}
