//! Planar geometry kernel: points, lines, segments and polygons with
//! tolerance-based predicates.
//!
//! All comparisons share a single tolerance, [`math::EPS`].

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, PlanisError, Result, SequenceError};
pub use geometry::{Ccw, Line, Point, Polygon, Segment};
pub use math::EPS;
