pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, Result};
pub use geometry::{
    Curve, CurveDomain, Line, LinePlaneRelation, LineSegment, Plane, PointPlaneClassification,
    SegmentIntersection,
};
pub use math::{scalar, triple, Point, Real, Vector, DIM2, DIM3, EPS, PI};

pub type Point2f = Point<f32, DIM2>;
pub type Point3f = Point<f32, DIM3>;
pub type Point2d = Point<f64, DIM2>;
pub type Point3d = Point<f64, DIM3>;

pub type Vec2f = Vector<f32, DIM2>;
pub type Vec3f = Vector<f32, DIM3>;
pub type Vec2d = Vector<f64, DIM2>;
pub type Vec3d = Vector<f64, DIM3>;

pub type LineSegment2f = LineSegment<f32, DIM2>;
pub type LineSegment3f = LineSegment<f32, DIM3>;
pub type LineSegment2d = LineSegment<f64, DIM2>;
pub type LineSegment3d = LineSegment<f64, DIM3>;

pub type Line2f = Line<f32, DIM2>;
pub type Line3f = Line<f32, DIM3>;
pub type Line2d = Line<f64, DIM2>;
pub type Line3d = Line<f64, DIM3>;

pub type Planef = Plane<f32>;
pub type Planed = Plane<f64>;
