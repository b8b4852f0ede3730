use thiserror::Error;

/// Top-level error type for the drivegeom utility layer.
#[derive(Debug, Error)]
pub enum DrivegeomError {
    #[error(transparent)]
    Intersection(#[from] IntersectionError),

    #[error(transparent)]
    Log(#[from] LogError),
}

/// Reasons a line-line intersection cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IntersectionError {
    #[error("lines are parallel or nearly parallel (determinant = {determinant:e})")]
    Parallel { determinant: f64 },
}

/// Errors surfaced by the line logger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    /// A fatal entry was logged; the caller decides how to unwind.
    #[error("fatal: {0}")]
    Fatal(String),
}

/// Convenience type alias for results using [`DrivegeomError`].
pub type Result<T> = std::result::Result<T, DrivegeomError>;
