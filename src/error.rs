use thiserror::Error;

/// Top-level error type for the Planis geometry kernel.
#[derive(Debug, Error)]
pub enum PlanisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("polygon has no vertices")]
    EmptyPolygon,
}

/// Errors raised by the sequence helpers in [`crate::math::seq`].
#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("expected a positive integer, got {0}")]
    NonPositive(u64),

    #[error("modulus must be non-zero")]
    ZeroModulus,

    #[error("result does not fit in a u64")]
    Overflow,
}

/// Convenience type alias for results using [`PlanisError`].
pub type Result<T> = std::result::Result<T, PlanisError>;
