pub mod curve;
pub mod intersect;
pub mod surface;

pub use curve::{Curve, CurveDomain, Line, LineSegment};
pub use intersect::{LinePlaneRelation, SegmentIntersection};
pub use surface::{Plane, PointPlaneClassification};
