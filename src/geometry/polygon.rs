use std::collections::BTreeSet;

use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::math::{fsum, EPS};

use super::{Ccw, Point, Segment};

/// A polygon given by its vertices in order.
///
/// The last vertex connects back to the first. Either orientation is
/// accepted. Polygons are assumed to be simple; self-intersections are not
/// detected.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyPolygon` if `points` is empty.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(GeometryError::EmptyPolygon.into());
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.points
    }

    /// Number of vertices (and edges).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a polygon has at least one vertex.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Cyclic pairs of consecutive vertices `(vᵢ, vᵢ₊₁)`, wrapping at the end.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Cyclic triples of consecutive vertices `(vᵢ, vᵢ₊₁, vᵢ₊₂)`.
    pub fn triples(&self) -> impl Iterator<Item = (Point, Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| {
            (
                self.points[i],
                self.points[(i + 1) % n],
                self.points[(i + 2) % n],
            )
        })
    }

    /// Edges as [`Segment`]s.
    pub fn edge_segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.edges().map(|(a, b)| Segment::new(a, b))
    }

    /// Enclosed area (shoelace formula), independent of orientation.
    #[must_use]
    pub fn area(&self) -> f64 {
        fsum(self.edges().map(|(p, q)| p.det(&q))).abs() / 2.0
    }

    /// Returns `true` if every vertex turns the same way.
    ///
    /// - `allow_straight`: vertices lying on the line through their
    ///   neighbours (straight angles) are tolerated.
    /// - `allow_collapsed`: a zero-area polygon whose vertices all lie on a
    ///   single line counts as convex.
    #[must_use]
    pub fn is_convex(&self, allow_straight: bool, allow_collapsed: bool) -> bool {
        let seen: BTreeSet<Ccw> = self
            .triples()
            .map(|(a, b, c)| Point::ccw(&a, &b, &c))
            .collect();
        let is = |expected: &[Ccw]| {
            seen.len() == expected.len() && expected.iter().all(|c| seen.contains(c))
        };

        if is(&[Ccw::Clockwise]) || is(&[Ccw::CounterClockwise]) {
            return true;
        }
        if allow_straight
            && (is(&[Ccw::OnlineFront, Ccw::Clockwise])
                || is(&[Ccw::OnlineFront, Ccw::CounterClockwise]))
        {
            return true;
        }
        allow_collapsed && is(&[Ccw::OnlineFront, Ccw::OnlineBack, Ccw::OnSegment])
    }

    /// Returns `true` if `p` lies on some edge.
    #[must_use]
    pub fn has_point_on_edge(&self, p: &Point) -> bool {
        self.edges()
            .any(|(a, b)| Point::ccw(&a, &b, p) == Ccw::OnSegment)
    }

    /// Point-in-polygon test by winding number.
    ///
    /// Points on the boundary are contained iff `allow_on_edge`.
    #[must_use]
    pub fn contains(&self, p: &Point, allow_on_edge: bool) -> bool {
        let mut angles = Vec::with_capacity(self.points.len());
        for (a, b) in self.edges() {
            if Point::ccw(&a, &b, p) == Ccw::OnSegment {
                trace!(point = %p, edge_start = %a, edge_end = %b, "point on polygon edge");
                return allow_on_edge;
            }
            angles.push(p.angle(&a, &b));
        }
        // A full turn (±2π) means inside; outside the turns cancel out.
        fsum(angles).abs() > EPS
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn poly(pts: &[(f64, f64)]) -> Polygon {
        Polygon::new(pts.iter().map(|&(x, y)| Point::new(x, y)).collect()).unwrap()
    }

    fn unit_square() -> Polygon {
        poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn empty_polygon_is_error() {
        assert!(matches!(
            Polygon::new(Vec::new()),
            Err(crate::PlanisError::Geometry(GeometryError::EmptyPolygon))
        ));
    }

    #[test]
    fn cyclic_iteration_wraps() {
        let sq = unit_square();
        let edges: Vec<_> = sq.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Point::new(0.0, 1.0), Point::new(0.0, 0.0)));

        let triples: Vec<_> = sq.triples().collect();
        assert_eq!(triples.len(), 4);
        assert_eq!(
            triples[3],
            (Point::new(0.0, 1.0), Point::new(0.0, 0.0), Point::new(1.0, 0.0))
        );
        assert_eq!(sq.edge_segments().count(), 4);
    }

    #[test]
    fn single_vertex_iterates_onto_itself() {
        let dot = poly(&[(2.0, 3.0)]);
        assert_eq!(dot.len(), 1);
        assert!(!dot.is_empty());
        let edges: Vec<_> = dot.edges().collect();
        assert_eq!(edges, vec![(Point::new(2.0, 3.0), Point::new(2.0, 3.0))]);
        assert_abs_diff_eq!(dot.area(), 0.0);
    }

    #[test]
    fn area_of_triangle_and_square() {
        assert_abs_diff_eq!(poly(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).area(), 0.5);
        assert_abs_diff_eq!(unit_square().area(), 1.0);
        // Clockwise order gives the same area.
        assert_abs_diff_eq!(poly(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).area(), 1.0);
    }

    #[test]
    fn area_of_concave_polygon() {
        let l_shape = poly(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ]);
        assert_abs_diff_eq!(l_shape.area(), 3.0);
    }

    #[test]
    fn area_far_from_origin() {
        let sq = poly(&[(1e6, 1e6), (1e6 + 1.0, 1e6), (1e6 + 1.0, 1e6 + 1.0), (1e6, 1e6 + 1.0)]);
        assert_abs_diff_eq!(sq.area(), 1.0);
    }

    #[test]
    fn convexity() {
        assert!(unit_square().is_convex(false, false));
        let cw = poly(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        assert!(cw.is_convex(false, false));

        let dented = poly(&[(0.0, 0.0), (1.0, 0.0), (0.2, 0.2), (0.0, 1.0)]);
        assert!(!dented.is_convex(false, false));
        assert!(!dented.is_convex(true, true));
    }

    #[test]
    fn convexity_with_straight_angle() {
        let sq = poly(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert!(!sq.is_convex(false, false));
        assert!(sq.is_convex(true, false));
    }

    #[test]
    fn convexity_of_collapsed_polygon() {
        let flat = poly(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert!(!flat.is_convex(false, false));
        assert!(!flat.is_convex(true, false));
        assert!(flat.is_convex(false, true));
    }

    #[test]
    fn point_on_edge() {
        let sq = unit_square();
        assert!(sq.has_point_on_edge(&Point::new(0.5, 0.0)));
        assert!(sq.has_point_on_edge(&Point::new(0.0, 0.5)));
        assert!(sq.has_point_on_edge(&Point::new(1.0, 1.0)));
        assert!(!sq.has_point_on_edge(&Point::new(0.5, 0.5)));
        assert!(!sq.has_point_on_edge(&Point::new(2.0, 0.0)));
    }

    #[test]
    fn containment() {
        let sq = unit_square();
        assert!(sq.contains(&Point::new(0.5, 0.5), true));
        assert!(!sq.contains(&Point::new(2.0, 2.0), true));
        assert!(sq.contains(&Point::new(0.0, 0.5), true));
        assert!(!sq.contains(&Point::new(0.0, 0.5), false));
    }

    #[test]
    fn containment_either_orientation() {
        let cw = poly(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        assert!(cw.contains(&Point::new(0.25, 0.75), false));
        assert!(!cw.contains(&Point::new(-0.25, 0.75), false));
    }

    #[test]
    fn containment_concave() {
        let l_shape = poly(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ]);
        assert!(l_shape.contains(&Point::new(0.5, 1.5), false));
        assert!(l_shape.contains(&Point::new(1.5, 0.5), false));
        assert!(!l_shape.contains(&Point::new(1.5, 1.5), false));
        assert!(l_shape.contains(&Point::new(1.5, 1.0), true));
    }

    #[test]
    fn containment_many_vertices() {
        let n: u32 = 10_000;
        let circle: Vec<Point> = (0..n)
            .map(|i| Point::from_polar(1.0, std::f64::consts::TAU * f64::from(i) / f64::from(n)))
            .collect();
        let circle = Polygon::new(circle).unwrap();
        assert!(circle.contains(&Point::new(0.3, -0.2), false));
        assert!(!circle.contains(&Point::new(1.01, 0.0), false));
        assert_abs_diff_eq!(circle.area(), std::f64::consts::PI, epsilon = 1e-6);
    }
}
