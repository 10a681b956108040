use crate::error::{GeometryError, Result};
use crate::geometry::intersect::line_line_intersect_2d;
use crate::math::scalar::abs;
use crate::math::{Point, Real, Vector, DIM3};

use super::{Curve, CurveDomain, LineSegment};

/// An infinite line defined by an anchor point and a direction vector.
///
/// The parametric form is: `P(t) = anchor + t * direction`. The direction is
/// kept as given, so `t` is measured in multiples of its length. Distance
/// queries assume the direction is non-zero.
#[derive(Debug, Clone, Copy)]
pub struct Line<T, const N: usize = DIM3> {
    anchor: Point<T, N>,
    direction: Vector<T, N>,
}

impl<T: Real, const N: usize> Line<T, N> {
    /// Creates a line from an anchor point and a direction.
    #[must_use]
    pub fn new(anchor: Point<T, N>, direction: Vector<T, N>) -> Self {
        Self { anchor, direction }
    }

    /// Creates the line through `p1` and `p2`, anchored at `p1` with
    /// direction `p2 - p1`.
    #[must_use]
    pub fn from_points(p1: Point<T, N>, p2: Point<T, N>) -> Self {
        Self::new(p1, p2 - p1)
    }

    /// Creates a line, rejecting a degenerate direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the direction is shorter than
    /// the tolerance.
    pub fn try_new(anchor: Point<T, N>, direction: Vector<T, N>) -> Result<Self> {
        let len = direction.magnitude();
        if len < T::eps() {
            tracing::debug!(magnitude = %len, "line direction is degenerate");
            return Err(GeometryError::ZeroVector);
        }
        Ok(Self::new(anchor, direction))
    }

    /// Returns the anchor point of the line.
    #[must_use]
    pub fn anchor(&self) -> &Point<T, N> {
        &self.anchor
    }

    /// Returns the direction vector, as given at construction.
    #[must_use]
    pub fn direction(&self) -> &Vector<T, N> {
        &self.direction
    }

    /// `anchor + t * direction`.
    #[must_use]
    pub fn point_at(&self, t: T) -> Point<T, N> {
        self.anchor + self.direction * t
    }

    /// Parameter of the orthogonal projection of `point` onto the line,
    /// `(point - anchor) . d / (d . d)`.
    #[must_use]
    pub fn parameter_of(&self, point: &Point<T, N>) -> T {
        <Self as Curve<T, N>>::closest_parameter(self, point)
    }

    /// The point on the line closest to `point`.
    #[must_use]
    pub fn closest_point(&self, point: &Point<T, N>) -> Point<T, N> {
        <Self as Curve<T, N>>::closest_point(self, point)
    }

    /// Perpendicular distance from `point` to the line.
    #[must_use]
    pub fn distance(&self, point: &Point<T, N>) -> T {
        point.distance(&self.closest_point(point))
    }

    /// Squared perpendicular distance from `point` to the line.
    #[must_use]
    pub fn distance_squared(&self, point: &Point<T, N>) -> T {
        point.distance_squared(&self.closest_point(point))
    }

    /// Whether `point` lies on the line within tolerance.
    #[must_use]
    pub fn contains(&self, point: &Point<T, N>) -> bool {
        self.distance(point) < T::eps()
    }

    /// Whether the directions are perpendicular.
    #[must_use]
    pub fn is_perpendicular(&self, other: &Self) -> bool {
        self.direction.is_perpendicular(&other.direction)
    }
}

impl<T: Real> Line<T, 2> {
    /// Whether the directions are parallel.
    #[must_use]
    pub fn is_parallel(&self, other: &Self) -> bool {
        self.direction.is_parallel(&other.direction)
    }

    /// Distance between two lines in the plane: zero unless they are
    /// parallel, in which case it is the distance from `other`'s anchor.
    ///
    /// Parallelism is judged on the angle (`|d1 x d2| <= eps * |d1| * |d2|`),
    /// so short directions do not count as parallel.
    #[must_use]
    pub fn distance_to_line(&self, other: &Self) -> T {
        let cross = self.direction.cross(&other.direction);
        let scale = self.direction.magnitude() * other.direction.magnitude();
        if abs(cross) <= T::eps() * scale {
            self.distance(&other.anchor)
        } else {
            T::zero()
        }
    }

    /// Parameters `(t, u)` with `self.point_at(t) == other.point_at(u)`, or
    /// `None` for parallel lines.
    #[must_use]
    pub fn intersection_parameters(&self, other: &Self) -> Option<(T, T)> {
        line_line_intersect_2d(self, other)
    }

    /// The crossing point of two non-parallel lines.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Point<T, 2>> {
        self.intersection_parameters(other).map(|(t, _)| self.point_at(t))
    }
}

impl<T: Real> Line<T, 3> {
    /// Whether the directions are parallel.
    #[must_use]
    pub fn is_parallel(&self, other: &Self) -> bool {
        self.direction.is_parallel(&other.direction)
    }

    /// Shortest distance between two lines.
    ///
    /// Uses `|n . (p1 - p2)| / |n|` with `n = d1 x d2`. Parallel lines have no
    /// common normal, so the distance from `other`'s anchor is used instead.
    #[must_use]
    pub fn distance_to_line(&self, other: &Self) -> T {
        let n = self.direction.cross(&other.direction);
        let n_len = n.magnitude();
        if n_len <= T::eps() * self.direction.magnitude() * other.direction.magnitude() {
            return self.distance(&other.anchor);
        }
        abs(n.dot(&(self.anchor - other.anchor))) / n_len
    }
}

impl<T: Real, const N: usize> Curve<T, N> for Line<T, N> {
    fn evaluate(&self, t: T) -> Point<T, N> {
        self.point_at(t)
    }

    fn tangent(&self) -> Vector<T, N> {
        self.direction
    }

    fn domain(&self) -> CurveDomain<T> {
        CurveDomain::unbounded()
    }
}

impl<T: Real, const N: usize> From<LineSegment<T, N>> for Line<T, N> {
    fn from(segment: LineSegment<T, N>) -> Self {
        Self::from_points(*segment.start(), *segment.end())
    }
}
