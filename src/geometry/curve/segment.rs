use crate::geometry::intersect::{
    segment_segment_intersect_2d, segment_segment_intersect_3d, SegmentIntersection,
};
use crate::math::{Point, Real, Vector, DIM3};

use super::{Curve, CurveDomain, Line};

/// A bounded segment between two points.
///
/// Represents `{ start + t * (end - start) : t in [0, 1] }`. The segment is
/// degenerate when its endpoints compare equal under tolerance; queries that
/// would divide by the squared length fall back to `start` in that case.
#[derive(Debug, Clone, Copy)]
pub struct LineSegment<T, const N: usize = DIM3> {
    start: Point<T, N>,
    end: Point<T, N>,
}

impl<T: Real, const N: usize> LineSegment<T, N> {
    /// Creates a segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point<T, N>, end: Point<T, N>) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point<T, N> {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point<T, N> {
        &self.end
    }

    /// Euclidean length `|end - start|`.
    #[must_use]
    pub fn length(&self) -> T {
        self.start.distance(&self.end)
    }

    /// Squared length, without the square root.
    #[must_use]
    pub fn length_squared(&self) -> T {
        self.start.distance_squared(&self.end)
    }

    /// Whether the endpoints coincide within tolerance.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// `end - start`, not normalized.
    #[must_use]
    pub fn direction(&self) -> Vector<T, N> {
        self.end - self.start
    }

    /// `start + t * (end - start)`. `t` is not clamped, so values outside
    /// `[0, 1]` land on the carrier line beyond the endpoints.
    #[must_use]
    pub fn lerp(&self, t: T) -> Point<T, N> {
        self.start.lerp(&self.end, t)
    }

    /// The point halfway between the endpoints.
    #[must_use]
    pub fn midpoint(&self) -> Point<T, N> {
        self.lerp(nalgebra::convert(0.5))
    }

    /// Parameter in `[0, 1]` of the segment point closest to `point`.
    #[must_use]
    pub fn closest_parameter(&self, point: &Point<T, N>) -> T {
        if self.is_degenerate() {
            return T::zero();
        }
        <Self as Curve<T, N>>::closest_parameter(self, point)
    }

    /// Projects `point` onto the carrier line and clamps the result to the
    /// segment. A degenerate segment returns `start`.
    #[must_use]
    pub fn closest_point(&self, point: &Point<T, N>) -> Point<T, N> {
        self.lerp(self.closest_parameter(point))
    }

    /// Distance from `point` to the nearest point of the segment.
    #[must_use]
    pub fn distance(&self, point: &Point<T, N>) -> T {
        point.distance(&self.closest_point(point))
    }

    /// Squared distance from `point` to the nearest point of the segment.
    #[must_use]
    pub fn distance_squared(&self, point: &Point<T, N>) -> T {
        point.distance_squared(&self.closest_point(point))
    }

    /// Whether the directions are perpendicular (`|d1 . d2| < eps`).
    #[must_use]
    pub fn is_perpendicular(&self, other: &Self) -> bool {
        self.direction().is_perpendicular(&other.direction())
    }

    /// The same segment traversed from `end` to `start`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// The infinite line through both endpoints, anchored at `start`.
    #[must_use]
    pub fn to_line(&self) -> Line<T, N> {
        Line::from(*self)
    }

    /// Moves both endpoints outward by `distance` along the segment.
    ///
    /// A degenerate segment has no direction and is returned unchanged.
    #[must_use]
    pub fn extend(&self, distance: T) -> Self {
        match self.outward(distance) {
            Some(offset) => Self::new(self.start - offset, self.end + offset),
            None => *self,
        }
    }

    /// Moves `start` backwards by `distance` along the segment.
    #[must_use]
    pub fn extend_start(&self, distance: T) -> Self {
        match self.outward(distance) {
            Some(offset) => Self::new(self.start - offset, self.end),
            None => *self,
        }
    }

    /// Moves `end` forwards by `distance` along the segment.
    #[must_use]
    pub fn extend_end(&self, distance: T) -> Self {
        match self.outward(distance) {
            Some(offset) => Self::new(self.start, self.end + offset),
            None => *self,
        }
    }

    fn outward(&self, distance: T) -> Option<Vector<T, N>> {
        if self.is_degenerate() {
            return None;
        }
        Some(self.direction().normalize() * distance)
    }
}

impl<T: Real> LineSegment<T, 2> {
    /// Whether the directions are parallel (`|d1 x d2| < eps`).
    #[must_use]
    pub fn is_parallel(&self, other: &Self) -> bool {
        self.direction().is_parallel(&other.direction())
    }

    /// Where the two segments meet, if they do.
    ///
    /// Crossing segments are solved as a 2x2 linear system. Collinear
    /// overlapping segments report the first shared point along `self`.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<SegmentIntersection<T, 2>> {
        segment_segment_intersect_2d(self, other)
    }

    /// Whether the two segments share a point within tolerance.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersection(other).is_some()
    }

    /// The shared point, if any.
    #[must_use]
    pub fn intersection_point(&self, other: &Self) -> Option<Point<T, 2>> {
        self.intersection(other).map(|hit| hit.point)
    }

    /// Parameter along `self` of the shared point.
    #[must_use]
    pub fn intersection_parameter(&self, other: &Self) -> Option<T> {
        self.intersection(other).map(|hit| hit.t)
    }
}

impl<T: Real> LineSegment<T, 3> {
    /// Whether the directions are parallel (`|d1 x d2| < eps`).
    #[must_use]
    pub fn is_parallel(&self, other: &Self) -> bool {
        self.direction().is_parallel(&other.direction())
    }

    /// Where the two segments meet, if they do.
    ///
    /// Skew segments never meet. Coplanar ones are solved within their common
    /// plane; collinear overlapping ones report the first shared point along
    /// `self`.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<SegmentIntersection<T, 3>> {
        segment_segment_intersect_3d(self, other)
    }

    /// Whether the two segments share a point within tolerance.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersection(other).is_some()
    }

    /// The shared point, if any.
    #[must_use]
    pub fn intersection_point(&self, other: &Self) -> Option<Point<T, 3>> {
        self.intersection(other).map(|hit| hit.point)
    }

    /// Parameter along `self` of the shared point.
    #[must_use]
    pub fn intersection_parameter(&self, other: &Self) -> Option<T> {
        self.intersection(other).map(|hit| hit.t)
    }
}

impl<T: Real, const N: usize> Curve<T, N> for LineSegment<T, N> {
    fn evaluate(&self, t: T) -> Point<T, N> {
        self.lerp(t)
    }

    fn tangent(&self) -> Vector<T, N> {
        self.direction()
    }

    fn domain(&self) -> CurveDomain<T> {
        CurveDomain::unit()
    }
}

impl<T: Real, const N: usize> PartialEq for LineSegment<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}
