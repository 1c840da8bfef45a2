use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, EPS, PI, TAU};

/// Position of a point relative to a directed segment `a → b`.
///
/// Returned by [`Point::ccw`]. The collinear cases are split by where the
/// point falls along the segment's supporting line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ccw {
    /// Left of `a → b`.
    CounterClockwise,
    /// Right of `a → b`.
    Clockwise,
    /// Collinear and behind `a` (order `c, a, b`).
    OnlineBack,
    /// Collinear and beyond `b` (order `a, b, c`).
    OnlineFront,
    /// Collinear and between `a` and `b`, endpoints included.
    OnSegment,
}

impl Ccw {
    /// Returns `true` for the three collinear classifications.
    #[must_use]
    pub fn is_collinear(self) -> bool {
        matches!(self, Self::OnlineBack | Self::OnlineFront | Self::OnSegment)
    }
}

/// A point (or free vector) in the plane.
///
/// Equality is tolerance based: two points are equal when their distance is
/// below [`EPS`]. This makes `==` non-transitive, so `Point` is deliberately
/// neither `Eq` nor `Hash`.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    v: Vector2,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Creates a point from Cartesian coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            v: Vector2::new(x, y),
        }
    }

    /// Creates a point from Cartesian coordinates. Same as [`Point::new`].
    #[must_use]
    pub const fn from_rect(x: f64, y: f64) -> Self {
        Self::new(x, y)
    }

    /// Creates a point at distance `r` from the origin and angle `phi`.
    #[must_use]
    pub fn from_polar(r: f64, phi: f64) -> Self {
        Self::new(r * phi.cos(), r * phi.sin())
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.v.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.v.y
    }

    /// Returns the underlying nalgebra vector.
    #[must_use]
    pub fn as_vector(&self) -> &Vector2 {
        &self.v
    }

    /// Classifies `c` against the directed segment `a → b`.
    ///
    /// The cross product is checked first, then the dot product along the
    /// segment, then the relative distance from `a`.
    #[must_use]
    pub fn ccw(a: &Point, b: &Point, c: &Point) -> Ccw {
        let b = *b - *a;
        let c = *c - *a;
        let det = b.det(&c);
        if det > EPS {
            return Ccw::CounterClockwise;
        }
        if det < -EPS {
            return Ccw::Clockwise;
        }
        if b.dot(&c) < -EPS {
            return Ccw::OnlineBack;
        }
        if c.norm() - b.norm() > EPS {
            return Ccw::OnlineFront;
        }
        Ccw::OnSegment
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, p: &Point) -> f64 {
        self.v.dot(&p.v)
    }

    /// 2D cross product (z component of the 3D cross product).
    #[must_use]
    pub fn det(&self, p: &Point) -> f64 {
        self.v.perp(&p.v)
    }

    /// Euclidean distance to `p`.
    #[must_use]
    pub fn dist(&self, p: &Point) -> f64 {
        (*self - *p).norm()
    }

    /// Distance from the origin.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.x().hypot(self.y())
    }

    /// Angle from the positive x axis, in `(-π, π]`.
    #[must_use]
    pub fn phase(&self) -> f64 {
        self.y().atan2(self.x())
    }

    /// Signed turn from the direction of `p` to the direction of `q`, both
    /// seen from `self`. Counter-clockwise is positive; the result lies in
    /// `[-π, π)`.
    #[must_use]
    pub fn angle(&self, p: &Point, q: &Point) -> f64 {
        ((*q - *self).phase() - (*p - *self).phase() + PI).rem_euclid(TAU) - PI
    }

    /// Unsigned area of the triangle `(self, p, q)`.
    #[must_use]
    pub fn area(&self, p: &Point, q: &Point) -> f64 {
        ((*p - *self).det(&(*q - *self)) / 2.0).abs()
    }

    /// Foot of the perpendicular from `self` onto the line through `p` and `q`.
    ///
    /// Returns `Ok(None)` when `allow_outer` is false and the foot falls
    /// outside the segment `pq`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `p` and `q` coincide.
    pub fn projection_point(
        &self,
        p: &Point,
        q: &Point,
        allow_outer: bool,
    ) -> Result<Option<Point>> {
        let diff_q = *q - *p;
        let len = diff_q.norm();
        if len < EPS {
            return Err(GeometryError::Degenerate(format!(
                "projection onto coincident points {p} and {q}"
            ))
            .into());
        }
        // Signed distance of the foot from `p`.
        let r = (*self - *p).dot(&diff_q) / len;
        let ret = Point::from_polar(r, diff_q.phase()) + *p;
        if allow_outer || (*p - ret).dot(&(*q - ret)) < EPS {
            Ok(Some(ret))
        } else {
            Ok(None)
        }
    }

    /// Mirror image of `self` across the line through `p` and `q`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `p` and `q` coincide.
    pub fn reflection_point(&self, p: &Point, q: &Point) -> Result<Point> {
        if p.dist(q) < EPS {
            return Err(GeometryError::Degenerate(format!(
                "reflection across coincident points {p} and {q}"
            ))
            .into());
        }
        let r = (*self - *p).norm();
        let angle = (*q - *p).phase() - p.angle(q, self);
        Ok(Point::from_polar(r, angle) + *p)
    }

    /// Returns `true` if `self` lies on the segment `pq`.
    ///
    /// With `allow_side` false, touching either endpoint does not count.
    #[must_use]
    pub fn on_segment(&self, p: &Point, q: &Point, allow_side: bool) -> bool {
        if !allow_side && (self == p || self == q) {
            return false;
        }
        let dp = *p - *self;
        let dq = *q - *self;
        // Zero cross product: collinear. Non-positive dot: self sits between p and q.
        dp.det(&dq).abs() < EPS && dp.dot(&dq) < EPS
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.dist(other) < EPS
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Scaling by 1e10 overflows near f64::MAX; large values print as-is.
        let round = |v: f64| {
            if v.abs() > 1e15 {
                v
            } else {
                (v * 1e10).round() / 1e10 + 0.0
            }
        };
        write!(f, "({}, {})", round(self.x()), round(self.y()))
    }
}

impl From<Vector2> for Point {
    fn from(v: Vector2) -> Self {
        Self { v }
    }
}

impl From<Point> for Vector2 {
    fn from(p: Point) -> Self {
        p.v
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self { v: p.coords }
    }
}

impl From<Point> for Point2 {
    fn from(p: Point) -> Self {
        Point2::from(p.v)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point { v: self.v + rhs.v }
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point { v: self.v - rhs.v }
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point { v: self.v * rhs }
    }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, rhs: f64) -> Point {
        Point { v: self.v / rhs }
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point { v: -self.v }
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.v += rhs.v;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.v -= rhs.v;
    }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, rhs: f64) {
        self.v *= rhs;
    }
}

impl DivAssign<f64> for Point {
    fn div_assign(&mut self, rhs: f64) {
        self.v /= rhs;
    }
}
