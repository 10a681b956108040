mod line;
mod segment;

pub use line::Line;
pub use segment::LineSegment;

use crate::math::scalar::clamp;
use crate::math::{Point, Real, Vector};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain<T> {
    /// Start of the parameter range.
    pub t_min: T,
    /// End of the parameter range.
    pub t_max: T,
}

impl<T: Real> CurveDomain<T> {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: T, t_max: T) -> Self {
        Self { t_min, t_max }
    }

    /// The domain `[0, 1]` of a bounded segment.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// The whole real line.
    #[must_use]
    pub fn unbounded() -> Self {
        let inf: T = nalgebra::convert(f64::INFINITY);
        Self::new(-inf, inf)
    }

    /// Whether `t` lies in `[t_min, t_max]`.
    #[must_use]
    pub fn contains(&self, t: T) -> bool {
        t >= self.t_min && t <= self.t_max
    }

    /// Clamps `t` into the domain.
    #[must_use]
    pub fn clamp(&self, t: T) -> T {
        clamp(t, self.t_min, self.t_max)
    }
}

/// A straight parametric curve `P(t) = evaluate(0) + t * tangent()`.
///
/// Implemented by [`Line`] (unbounded) and [`LineSegment`] (`t` in `[0, 1]`).
/// The tangent is not required to be unit length.
pub trait Curve<T: Real, const N: usize> {
    /// Evaluates the curve at parameter `t`. `t` is not clamped to the domain.
    fn evaluate(&self, t: T) -> Point<T, N>;

    /// Derivative of [`evaluate`](Self::evaluate) with respect to `t`.
    fn tangent(&self) -> Vector<T, N>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain<T>;

    /// Parameter of the curve point closest to `point`, clamped to the domain.
    ///
    /// A zero tangent has no preferred parameter; the result is then `0`
    /// clamped to the domain, i.e. the curve's base point. Short but non-zero
    /// tangents still project.
    fn closest_parameter(&self, point: &Point<T, N>) -> T {
        let dir = self.tangent();
        let len_sq = dir.magnitude_squared();
        if len_sq <= T::zero() {
            return self.domain().clamp(T::zero());
        }
        let t = (*point - self.evaluate(T::zero())).dot(&dir) / len_sq;
        self.domain().clamp(t)
    }

    /// The curve point closest to `point`.
    fn closest_point(&self, point: &Point<T, N>) -> Point<T, N> {
        self.evaluate(self.closest_parameter(point))
    }
}
