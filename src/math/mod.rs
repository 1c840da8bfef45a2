pub mod fsum;
pub mod seq;

pub use fsum::{fsum, FSum};

/// 2D vector type backing [`crate::geometry::Point`].
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D point type used for nalgebra interop.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Every predicate in the crate compares against this single value.
/// Tightening it below `1e-8` makes nearly parallel lines classify as
/// intersecting.
pub const EPS: f64 = 1e-8;

/// Full turn in radians.
pub const TAU: f64 = std::f64::consts::TAU;

/// Half turn in radians.
pub const PI: f64 = std::f64::consts::PI;
