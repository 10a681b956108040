use crate::error::{GeometryError, Result};
use crate::geometry::curve::{Line, LineSegment};
use crate::geometry::intersect::{line_plane_intersect, LinePlaneRelation};
use crate::math::scalar::abs;
use crate::math::{Point, Real, Vector};

/// Classification of a point relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointPlaneClassification {
    /// Point is on the positive side (in the direction of the normal).
    Front,
    /// Point is on the negative side (opposite the normal).
    Back,
    /// Point lies on the plane (within tolerance).
    On,
}

/// An infinite plane in 3D space.
///
/// Stored in Hessian form `{ x : normal . x = d }`, where `d` is the signed
/// offset of the plane from the origin along `normal`.
///
/// Only [`from_points`](Self::from_points) and
/// [`try_from_points`](Self::try_from_points) normalize; the other
/// constructors trust the caller to pass a unit normal.
#[derive(Debug, Clone, Copy)]
pub struct Plane<T> {
    normal: Vector<T, 3>,
    d: T,
}

impl<T: Real> Plane<T> {
    /// Creates a plane from a unit normal and its signed offset.
    #[must_use]
    pub fn new(normal: Vector<T, 3>, d: T) -> Self {
        Self { normal, d }
    }

    /// Creates the plane with the given unit normal through `point`.
    #[must_use]
    pub fn from_normal_and_point(normal: Vector<T, 3>, point: Point<T, 3>) -> Self {
        let d = normal.dot(&point.to_vector());
        Self { normal, d }
    }

    /// Creates the plane through three points.
    ///
    /// The normal is `normalize((p2 - p1) x (p3 - p1))`, so the points wind
    /// counter-clockwise when seen from the front. Collinear points give a
    /// non-finite normal.
    #[must_use]
    pub fn from_points(p1: Point<T, 3>, p2: Point<T, 3>, p3: Point<T, 3>) -> Self {
        let normal = (p2 - p1).cross(&(p3 - p1)).normalize();
        Self::from_normal_and_point(normal, p1)
    }

    /// Creates the plane through three points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the points are collinear
    /// (or coincide), which leaves the normal undefined. Collinearity is
    /// judged on the angle between the two edges, so small triangles pass.
    pub fn try_from_points(p1: Point<T, 3>, p2: Point<T, 3>, p3: Point<T, 3>) -> Result<Self> {
        let (e1, e2) = (p2 - p1, p3 - p1);
        let cross = e1.cross(&e2);
        let len = cross.magnitude();
        if len <= T::eps() * e1.magnitude() * e2.magnitude() {
            tracing::debug!(magnitude = %len, "plane points are collinear");
            return Err(GeometryError::Degenerate("plane points are collinear".into()));
        }
        Ok(Self::from_normal_and_point(cross / len, p1))
    }

    /// Returns the plane normal.
    #[must_use]
    pub fn normal(&self) -> &Vector<T, 3> {
        &self.normal
    }

    /// Signed offset along the normal.
    #[must_use]
    pub fn d(&self) -> T {
        self.d
    }

    /// Signed distance `normal . point - d`; positive on the normal side.
    #[must_use]
    pub fn distance(&self, point: &Point<T, 3>) -> T {
        self.normal.dot(&point.to_vector()) - self.d
    }

    /// Foot of the perpendicular from `point`.
    #[must_use]
    pub fn project(&self, point: &Point<T, 3>) -> Point<T, 3> {
        *point - self.normal * self.distance(point)
    }

    /// Which side of the plane `point` is on.
    #[must_use]
    pub fn classify(&self, point: &Point<T, 3>) -> PointPlaneClassification {
        let dist = self.distance(point);
        let eps = T::eps();
        if dist > eps {
            PointPlaneClassification::Front
        } else if dist < -eps {
            PointPlaneClassification::Back
        } else {
            PointPlaneClassification::On
        }
    }

    /// Whether `point` lies on the plane within tolerance.
    #[must_use]
    pub fn contains(&self, point: &Point<T, 3>) -> bool {
        abs(self.distance(point)) < T::eps()
    }

    /// The same plane with the opposite orientation.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self::new(-self.normal, -self.d)
    }

    /// Computes how `line` meets the plane.
    #[must_use]
    pub fn intersect_line(&self, line: &Line<T, 3>) -> LinePlaneRelation<T> {
        line_plane_intersect(line, self)
    }

    /// Where `segment` crosses the plane.
    ///
    /// A segment lying in the plane reports its start point.
    #[must_use]
    pub fn intersect_segment(&self, segment: &LineSegment<T, 3>) -> Option<Point<T, 3>> {
        if segment.is_degenerate() {
            return self.contains(segment.start()).then_some(*segment.start());
        }
        match self.intersect_line(&segment.to_line()) {
            LinePlaneRelation::Point { point, t } => {
                let tol = T::eps() / segment.length();
                (t >= -tol && t <= T::one() + tol).then_some(point)
            }
            LinePlaneRelation::OnPlane => Some(*segment.start()),
            LinePlaneRelation::Parallel => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::{Line3d, LineSegment3d, Planed, Planef, Point3d, Point3f, Vec3d, Vec3f};

    fn p(x: f64, y: f64, z: f64) -> Point3d {
        Point3d::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vec3d {
        Vec3d::new(x, y, z)
    }

    fn samples() -> Vec<Point3d> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 2.0, 3.0),
            p(-4.0, 0.5, 9.0),
            p(10.0, -10.0, -10.0),
        ]
    }

    // ── construction ──

    #[test]
    fn from_normal_and_point_sets_offset() {
        let plane = Planed::from_normal_and_point(v(0.0, 0.0, 1.0), p(3.0, -2.0, 5.0));
        assert_relative_eq!(plane.d(), 5.0);
        assert_eq!(*plane.normal(), v(0.0, 0.0, 1.0));
    }

    #[test]
    fn from_points_normalizes_cross_product() {
        let plane = Planed::from_points(p(0.0, 0.0, 2.0), p(3.0, 0.0, 2.0), p(0.0, 5.0, 2.0));
        assert_eq!(*plane.normal(), v(0.0, 0.0, 1.0));
        assert_relative_eq!(plane.d(), 2.0);
        assert_relative_eq!(plane.normal().magnitude(), 1.0);
    }

    #[test]
    fn from_points_contains_its_points() {
        let (a, b, c) = (p(1.0, 0.0, 0.0), p(0.0, 2.0, 0.0), p(0.0, 0.0, 3.0));
        let plane = Planed::from_points(a, b, c);
        for q in [a, b, c] {
            assert!(plane.contains(&q));
        }
    }

    #[test]
    fn try_from_points_rejects_collinear() {
        crate::test_support::init_tracing();
        let result = Planed::try_from_points(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0));
        assert!(matches!(result, Err(GeometryError::Degenerate(_))));
        let plane =
            Planed::try_from_points(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)).unwrap();
        assert_eq!(*plane.normal(), Vec3d::z_axis());
    }

    #[test]
    fn try_from_points_accepts_small_triangles() {
        let plane =
            Planed::try_from_points(p(1.0, 1.0, 1.0), p(1.0005, 1.0, 1.0), p(1.0, 1.0005, 1.0))
                .unwrap();
        assert_eq!(*plane.normal(), Vec3d::z_axis());
        assert_relative_eq!(plane.d(), 1.0);

        let q = p(2.0, 2.0, 2.0);
        let coincident = Planed::try_from_points(q, q, q);
        assert!(matches!(coincident, Err(GeometryError::Degenerate(_))));
    }

    // ── distance / projection ──

    #[test]
    fn signed_distance() {
        let plane = Planed::new(v(0.0, 1.0, 0.0), 2.0);
        assert_relative_eq!(plane.distance(&p(7.0, 5.0, -1.0)), 3.0);
        assert_relative_eq!(plane.distance(&p(0.0, -1.0, 0.0)), -3.0);
        assert_abs_diff_eq!(plane.distance(&p(4.0, 2.0, 4.0)), 0.0);
    }

    #[test]
    fn projection_lands_on_plane() {
        let plane = Planed::from_points(p(1.0, 0.0, 0.0), p(0.0, 2.0, 0.0), p(0.0, 0.0, 3.0));
        for q in samples() {
            let foot = plane.project(&q);
            assert!(plane.distance(&foot).abs() < 1e-6);
            assert!((q - foot).is_parallel(plane.normal()));
        }
    }

    #[test]
    fn offset_along_normal_equals_distance() {
        let plane = Planed::from_normal_and_point(v(1.0, 1.0, 0.0).normalize(), p(1.0, 0.0, 0.0));
        for q in samples() {
            let on = plane.project(&q);
            for k in [-2.5, 0.0, 1.0, 7.25] {
                assert_relative_eq!(plane.distance(&(on + *plane.normal() * k)), k, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn single_precision_plane() {
        let plane = Planef::new(Vec3f::z_axis(), 1.0);
        let foot = plane.project(&Point3f::new(2.0, 3.0, 4.0));
        assert_eq!(foot, Point3f::new(2.0, 3.0, 1.0));
    }

    // ── classification ──

    #[test]
    fn classify_points() {
        let plane = Planed::new(Vec3d::z_axis(), 0.0);
        assert_eq!(plane.classify(&p(0.0, 0.0, 1.0)), PointPlaneClassification::Front);
        assert_eq!(plane.classify(&p(0.0, 0.0, -1.0)), PointPlaneClassification::Back);
        assert_eq!(plane.classify(&p(5.0, 3.0, 0.0)), PointPlaneClassification::On);
        assert_eq!(
            plane.flipped().classify(&p(0.0, 0.0, 1.0)),
            PointPlaneClassification::Back
        );
    }

    // ── line / segment crossing ──

    #[test]
    fn line_crosses_plane() {
        let plane = Planed::new(Vec3d::z_axis(), 2.0);
        let line = Line3d::from_points(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        match plane.intersect_line(&line) {
            LinePlaneRelation::Point { point, t } => {
                assert_relative_eq!(t, 2.0);
                assert_eq!(point, p(2.0, 2.0, 2.0));
            }
            other => panic!("expected Point, got {other:?}"),
        }
    }

    #[test]
    fn segment_crossing_respects_bounds() {
        let plane = Planed::new(Vec3d::z_axis(), 2.0);
        let crossing = LineSegment3d::new(p(0.0, 0.0, 0.0), p(0.0, 0.0, 4.0));
        let short = LineSegment3d::new(p(0.0, 0.0, 0.0), p(0.0, 0.0, 1.0));
        let touching = LineSegment3d::new(p(1.0, 0.0, 0.0), p(1.0, 0.0, 2.0));
        let inside = LineSegment3d::new(p(0.0, 0.0, 2.0), p(3.0, 1.0, 2.0));
        let above = LineSegment3d::new(p(0.0, 0.0, 3.0), p(3.0, 1.0, 3.0));

        assert_eq!(plane.intersect_segment(&crossing).unwrap(), p(0.0, 0.0, 2.0));
        assert!(plane.intersect_segment(&short).is_none());
        assert_eq!(plane.intersect_segment(&touching).unwrap(), p(1.0, 0.0, 2.0));
        assert_eq!(plane.intersect_segment(&inside).unwrap(), p(0.0, 0.0, 2.0));
        assert!(plane.intersect_segment(&above).is_none());
    }
}
