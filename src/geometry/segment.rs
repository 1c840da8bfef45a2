use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::math::EPS;

use super::{Line, Point};

/// A bounded line piece from `p1` to `p2`.
///
/// The direction only matters for parameterizing closest-point queries.
/// Zero-length segments are allowed; queries on them behave as if the
/// segment were the single point `p1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    #[must_use]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Length of the segment.
    #[must_use]
    pub fn norm(&self) -> f64 {
        (self.p1 - self.p2).norm()
    }

    /// Supporting line through both endpoints.
    #[must_use]
    pub fn to_line(&self) -> Line {
        Line::from_segment(&self.p1, &self.p2)
    }

    /// Unit vector from `p1` towards `p2`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the segment has zero length.
    pub fn direction(&self) -> Result<Point> {
        let len = self.norm();
        if len < EPS {
            return Err(GeometryError::Degenerate(format!(
                "zero-length segment between {} and {}",
                self.p1, self.p2
            ))
            .into());
        }
        Ok((self.p2 - self.p1) / len)
    }

    /// Returns `true` if the two segments share at least one point.
    ///
    /// With `allow_side` false, contact only at an endpoint does not count.
    #[must_use]
    pub fn intersects_with(&self, other: &Segment, allow_side: bool) -> bool {
        let l1 = self.to_line();
        let l2 = other.to_line();
        if l1.is_parallel_to(&l2) {
            return self.overlaps_collinear(other, allow_side);
        }
        match l1.intersection_point(&l2) {
            Some(p) => {
                p.on_segment(&self.p1, &self.p2, allow_side)
                    && p.on_segment(&other.p1, &other.p2, allow_side)
            }
            None => self.overlaps_collinear(other, allow_side),
        }
    }

    /// Parallel case: some endpoint must lie on the other segment.
    fn overlaps_collinear(&self, other: &Segment, allow_side: bool) -> bool {
        other.p1.on_segment(&self.p1, &self.p2, allow_side)
            || other.p2.on_segment(&self.p1, &self.p2, allow_side)
            || self.p1.on_segment(&other.p1, &other.p2, allow_side)
            || self.p2.on_segment(&other.p1, &other.p2, allow_side)
    }

    /// Point of the segment nearest to `p`.
    #[must_use]
    pub fn closest_point(&self, p: &Point) -> Point {
        let norm = self.norm();
        if norm < EPS {
            trace!(segment = %self.p1, "closest point on zero-length segment");
            return self.p1;
        }
        let diff = self.p2 - self.p1;
        // Distance of the perpendicular foot from p1, along the segment.
        let d = (*p - self.p1).dot(&diff) / norm;
        if d < EPS {
            return self.p1;
        }
        if d > norm - EPS {
            return self.p2;
        }
        Point::from_polar(d, diff.phase()) + self.p1
    }

    /// Shortest distance from `p` to the segment.
    #[must_use]
    pub fn dist(&self, p: &Point) -> f64 {
        (*p - self.closest_point(p)).norm()
    }

    /// Shortest distance between two segments; zero if they intersect.
    #[must_use]
    pub fn dist_segment(&self, other: &Segment) -> f64 {
        if self.intersects_with(other, true) {
            return 0.0;
        }
        self.dist(&other.p1)
            .min(self.dist(&other.p2))
            .min(other.dist(&self.p1))
            .min(other.dist(&self.p2))
    }
}
