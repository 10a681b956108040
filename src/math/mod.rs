pub mod point;
pub mod scalar;
pub mod vector;

use std::fmt;

use nalgebra::RealField;

pub use point::Point;
pub use vector::{triple, Vector};

/// Global tolerance for approximate comparisons.
pub const EPS: f64 = 1e-6;

/// Archimedes' constant (3.14159265358979323846).
pub const PI: f64 = std::f64::consts::PI;

/// Dimension of the plane.
pub const DIM2: usize = 2;

/// Dimension of space.
pub const DIM3: usize = 3;

/// Real scalar kind the primitives are defined over.
///
/// Implemented for `f32` and `f64`. The tolerance is a per-kind hook so a
/// scalar can pick its own; both built-in kinds use [`EPS`].
pub trait Real: RealField + Copy + fmt::Display {
    /// Tolerance used by every approximate comparison on this scalar.
    #[must_use]
    fn eps() -> Self {
        nalgebra::convert(EPS)
    }
}

impl Real for f32 {}

impl Real for f64 {}
