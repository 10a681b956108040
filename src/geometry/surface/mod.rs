mod plane;

pub use plane::{Plane, PointPlaneClassification};
