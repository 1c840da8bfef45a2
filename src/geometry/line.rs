use tracing::trace;

use crate::math::EPS;

use super::Point;

/// An infinite line in implicit form `a·x + b·y + c = 0`.
///
/// `(a, b)` is the line's normal vector and must not be the zero vector.
/// This is not checked; [`Line::from_segment`] guarantees it as long as the
/// two points differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// Creates the line `a·x + b·y + c = 0`.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Creates the line `y = gradient·x + intercept`.
    #[must_use]
    pub fn from_gradient(gradient: f64, intercept: f64) -> Self {
        Self::new(gradient, -1.0, intercept)
    }

    /// Creates the line through `p1` and `p2`.
    #[must_use]
    pub fn from_segment(p1: &Point, p2: &Point) -> Self {
        let a = p2.y() - p1.y();
        let b = p1.x() - p2.x();
        let c = p2.y() * (p2.x() - p1.x()) - p2.x() * (p2.y() - p1.y());
        Self::new(a, b, c)
    }

    /// Normal vector `(a, b)`.
    #[must_use]
    pub fn normal(&self) -> Point {
        Point::new(self.a, self.b)
    }

    /// Slope `dy/dx`; `f64::INFINITY` for a vertical line.
    #[must_use]
    pub fn gradient(&self) -> f64 {
        if self.is_vertical() {
            f64::INFINITY
        } else {
            -self.a / self.b
        }
    }

    /// y at `x = 0`; `f64::INFINITY` for a vertical line.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        if self.is_vertical() {
            f64::INFINITY
        } else {
            -self.c / self.b
        }
    }

    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.b.abs() < EPS
    }

    /// Returns `true` if the normals are parallel.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Line) -> bool {
        self.normal().det(&other.normal()).abs() < EPS
    }

    /// Returns `true` if the normals are perpendicular.
    #[must_use]
    pub fn is_orthogonal_to(&self, other: &Line) -> bool {
        self.normal().dot(&other.normal()).abs() < EPS
    }

    /// Unique intersection point, solved with Cramer's rule.
    ///
    /// Returns `None` for parallel or coincident lines.
    #[must_use]
    pub fn intersection_point(&self, other: &Line) -> Option<Point> {
        let (a1, b1, c1) = (self.a, self.b, self.c);
        let (a2, b2, c2) = (other.a, other.b, other.c);
        let det = a1 * b2 - a2 * b1;
        if det.abs() < EPS {
            trace!(det, "lines are parallel, no unique intersection");
            return None;
        }
        let x = (b1 * c2 - b2 * c1) / det;
        let y = (a2 * c1 - a1 * c2) / det;
        Some(Point::new(x, y))
    }

    /// Evaluates `a·x + b·y + c` at `p`. Zero on the line; the sign tells
    /// which side of the line `p` is on.
    #[must_use]
    pub fn eval(&self, p: &Point) -> f64 {
        self.a * p.x() + self.b * p.y() + self.c
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn from_segment_contains_both_points() {
        let a = p(1.0, 2.0);
        let b = p(4.0, -3.0);
        let l = Line::from_segment(&a, &b);
        assert_abs_diff_eq!(l.eval(&a), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(l.eval(&b), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(l.eval(&p(7.0, -8.0)), 0.0, epsilon = EPS);
    }

    #[test]
    fn eval_sign_gives_side() {
        let l = Line::from_segment(&p(0.0, 0.0), &p(1.0, 0.0));
        let above = l.eval(&p(0.5, 2.0));
        let below = l.eval(&p(0.5, -2.0));
        assert!(above * below < 0.0);
        assert_abs_diff_eq!(above.abs(), below.abs());
        assert_eq!(l.normal(), p(0.0, -1.0));
    }

    #[test]
    fn gradient_and_intercept() {
        let l = Line::from_gradient(2.0, 3.0);
        assert_abs_diff_eq!(l.gradient(), 2.0);
        assert_abs_diff_eq!(l.intercept(), 3.0);

        let l = Line::from_segment(&p(0.0, 1.0), &p(2.0, 5.0));
        assert_abs_diff_eq!(l.gradient(), 2.0);
        assert_abs_diff_eq!(l.intercept(), 1.0);
    }

    #[test]
    fn vertical_line_is_infinite() {
        let l = Line::from_segment(&p(1.0, 0.0), &p(1.0, 5.0));
        assert!(l.is_vertical());
        assert!(l.gradient().is_infinite());
        assert!(l.intercept().is_infinite());
    }

    #[test]
    fn parallel_and_orthogonal() {
        let l1 = Line::from_segment(&p(0.0, 0.0), &p(3.0, 0.0));
        let l2 = Line::from_segment(&p(0.0, 2.0), &p(3.0, 2.0));
        let l3 = Line::from_segment(&p(1.0, -1.0), &p(1.0, 4.0));
        assert!(l1.is_parallel_to(&l2));
        assert!(!l1.is_orthogonal_to(&l2));
        assert!(l1.is_orthogonal_to(&l3));
        assert!(!l1.is_parallel_to(&l3));

        let l4 = Line::from_segment(&p(-1.0, 0.0), &p(0.0, 2.0));
        let l5 = Line::from_segment(&p(0.0, 0.0), &p(2.0, -1.0));
        assert!(l4.is_orthogonal_to(&l5));
    }

    #[test]
    fn intersection() {
        let l1 = Line::from_segment(&p(0.0, 0.0), &p(2.0, 2.0));
        let l2 = Line::from_segment(&p(0.0, 2.0), &p(2.0, 0.0));
        assert_eq!(l1.intersection_point(&l2), Some(p(1.0, 1.0)));

        let l3 = Line::from_gradient(0.5, -1.0);
        let l4 = Line::new(1.0, 0.0, -4.0);
        assert_eq!(l3.intersection_point(&l4), Some(p(4.0, 1.0)));
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let l1 = Line::new(1.0, 2.0, 3.0);
        let l2 = Line::new(2.0, 4.0, -1.0);
        assert!(l1.intersection_point(&l2).is_none());
        // Coincident lines have no unique intersection either.
        let l3 = Line::new(3.0, 6.0, 9.0);
        assert!(l1.intersection_point(&l3).is_none());
    }
}
