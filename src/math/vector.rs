use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use nalgebra::SVector;

use super::scalar::abs;
use super::{Point, Real, DIM3};
use crate::error::{GeometryError, Result};

/// A free vector (direction with magnitude) in `N`-dimensional space.
///
/// Dimension-specific operations live on `Vector<T, 2>` and `Vector<T, 3>`:
/// the three-scalar constructor only exists for `N = 3`, and `cross`
/// returns a scalar perp-dot in 2-D and a vector in 3-D.
///
/// Equality is tolerant in the same way as [`Point`].
#[derive(Debug, Clone, Copy)]
pub struct Vector<T, const N: usize = DIM3> {
    coords: SVector<T, N>,
}

impl<T: Real, const N: usize> Vector<T, N> {
    /// The zero vector.
    #[must_use]
    pub fn zeros() -> Self {
        Self {
            coords: SVector::zeros(),
        }
    }

    /// Creates a vector from its components.
    #[must_use]
    pub fn from_array(coords: [T; N]) -> Self {
        Self {
            coords: SVector::from(coords),
        }
    }

    /// Wraps a nalgebra column vector.
    #[must_use]
    pub fn from_coords(coords: SVector<T, N>) -> Self {
        Self { coords }
    }

    /// Returns the underlying nalgebra column vector.
    #[must_use]
    pub fn coords(&self) -> &SVector<T, N> {
        &self.coords
    }

    /// Returns the components as a slice of length `N`.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.coords.as_slice()
    }

    /// Returns the dimension `N`.
    #[must_use]
    pub const fn dim(&self) -> usize {
        N
    }

    /// The point reached by moving from the origin along this vector.
    #[must_use]
    pub fn to_point(self) -> Point<T, N> {
        Point::from_coords(self.coords)
    }

    /// Euclidean length `sqrt(sum(c_i^2))`.
    #[must_use]
    pub fn magnitude(&self) -> T {
        self.coords.norm()
    }

    /// Squared length, without the square root.
    #[must_use]
    pub fn magnitude_squared(&self) -> T {
        self.coords.norm_squared()
    }

    /// Returns a unit vector with the same direction.
    ///
    /// A zero vector yields non-finite components; use
    /// [`try_normalize`](Self::try_normalize) when the input may be degenerate.
    #[must_use]
    pub fn normalize(&self) -> Self {
        Self::from_coords(self.coords / self.magnitude())
    }

    /// Normalizes in place.
    pub fn normalize_mut(&mut self) {
        let len = self.magnitude();
        self.coords /= len;
    }

    /// Returns a unit vector with the same direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the magnitude is below tolerance.
    pub fn try_normalize(&self) -> Result<Self> {
        let len = self.magnitude();
        if len < T::eps() {
            tracing::debug!(magnitude = %len, "cannot normalize a near-zero vector");
            return Err(GeometryError::ZeroVector);
        }
        Ok(Self::from_coords(self.coords / len))
    }

    /// Inner product `sum(a_i * b_i)`.
    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        self.coords.dot(&other.coords)
    }

    /// Unsigned angle to `other` in `[0, pi]`.
    ///
    /// Both vectors must be non-zero; otherwise the result is NaN.
    #[must_use]
    pub fn angle(&self, other: &Self) -> T {
        let cos = self.dot(other) / (self.magnitude() * other.magnitude());
        // Round-off can push |cos| past 1 for (anti-)parallel input.
        if cos >= T::one() {
            T::zero()
        } else if cos <= -T::one() {
            T::pi()
        } else {
            cos.acos()
        }
    }

    /// Component of `self` along `onto`: `onto * (self . onto) / (onto . onto)`.
    #[must_use]
    pub fn project(&self, onto: &Self) -> Self {
        *onto * (self.dot(onto) / onto.magnitude_squared())
    }

    /// Component of `self` orthogonal to `from`: `self - self.project(from)`.
    #[must_use]
    pub fn reject(&self, from: &Self) -> Self {
        *self - self.project(from)
    }

    /// Distance between the tips of the two vectors.
    #[must_use]
    pub fn distance(&self, other: &Self) -> T {
        (self.coords - other.coords).norm()
    }

    /// Squared distance between the tips of the two vectors.
    #[must_use]
    pub fn distance_squared(&self, other: &Self) -> T {
        (self.coords - other.coords).norm_squared()
    }

    /// Whether `|self . other| < eps`.
    #[must_use]
    pub fn is_perpendicular(&self, other: &Self) -> bool {
        abs(self.dot(other)) < T::eps()
    }
}

impl<T: Real> Vector<T, 2> {
    /// Creates a 2-D vector.
    #[must_use]
    pub fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    /// Unit vector along x.
    #[must_use]
    pub fn x_axis() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// Unit vector along y.
    #[must_use]
    pub fn y_axis() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Returns the x component.
    #[must_use]
    pub fn x(&self) -> T {
        self.coords[0]
    }

    /// Returns the y component.
    #[must_use]
    pub fn y(&self) -> T {
        self.coords[1]
    }

    /// Scalar perp-dot `a0 * b1 - a1 * b0`: the z component of the 3-D cross
    /// product of the two vectors lifted into the XY plane.
    #[must_use]
    pub fn cross(&self, other: &Self) -> T {
        self.coords[0] * other.coords[1] - self.coords[1] * other.coords[0]
    }

    /// The vector rotated a quarter turn counter-clockwise, `(-y, x)`.
    #[must_use]
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.coords[1], self.coords[0])
    }

    /// Whether `|self x other| < eps`.
    #[must_use]
    pub fn is_parallel(&self, other: &Self) -> bool {
        abs(self.cross(other)) < T::eps()
    }
}

impl<T: Real> Vector<T, 3> {
    /// Creates a 3-D vector.
    #[must_use]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    /// Unit vector along x.
    #[must_use]
    pub fn x_axis() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// Unit vector along y.
    #[must_use]
    pub fn y_axis() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// Unit vector along z.
    #[must_use]
    pub fn z_axis() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Returns the x component.
    #[must_use]
    pub fn x(&self) -> T {
        self.coords[0]
    }

    /// Returns the y component.
    #[must_use]
    pub fn y(&self) -> T {
        self.coords[1]
    }

    /// Returns the z component.
    #[must_use]
    pub fn z(&self) -> T {
        self.coords[2]
    }

    /// Right-handed cross product.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self::from_coords(self.coords.cross(&other.coords))
    }

    /// Whether `|self x other| < eps`.
    #[must_use]
    pub fn is_parallel(&self, other: &Self) -> bool {
        self.cross(other).magnitude() < T::eps()
    }
}

/// Vector triple product `a x (b x c)`.
#[must_use]
pub fn triple<T: Real>(a: &Vector<T, 3>, b: &Vector<T, 3>, c: &Vector<T, 3>) -> Vector<T, 3> {
    a.cross(&b.cross(c))
}

impl<T: Real, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Real, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(coords: [T; N]) -> Self {
        Self::from_array(coords)
    }
}

impl<T: Real, const N: usize> From<SVector<T, N>> for Vector<T, N> {
    fn from(coords: SVector<T, N>) -> Self {
        Self::from_coords(coords)
    }
}

impl<T: Real, const N: usize> From<Vector<T, N>> for SVector<T, N> {
    fn from(v: Vector<T, N>) -> Self {
        v.coords
    }
}

impl<T: Real, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.coords[index]
    }
}

impl<T: Real, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.coords[index]
    }
}

impl<T: Real, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        let eps = T::eps();
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| abs(*a - *b) <= eps)
    }
}

impl<T: Real, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

impl<T: Real, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_coords(self.coords + rhs.coords)
    }
}

impl<T: Real, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_coords(self.coords - rhs.coords)
    }
}

impl<T: Real, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_coords(self.coords * rhs)
    }
}

impl<T: Real, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::from_coords(self.coords / rhs)
    }
}

impl<T: Real, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_coords(-self.coords)
    }
}

impl<T: Real, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        self.coords += rhs.coords;
    }
}

impl<T: Real, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        self.coords -= rhs.coords;
    }
}

impl<T: Real, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        self.coords *= rhs;
    }
}

impl<T: Real, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        self.coords /= rhs;
    }
}

macro_rules! impl_scalar_mul_vector {
    ($($t:ty),*) => {$(
        impl<const N: usize> Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_mul_vector!(f32, f64);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::math::PI;
    use crate::{Vec2d, Vec2f, Vec3d, Vec3f};

    const TOL: f64 = 1e-9;

    fn v(x: f64, y: f64, z: f64) -> Vec3d {
        Vec3d::new(x, y, z)
    }

    /// A handful of non-trivial 3-D vectors for the algebraic identities.
    fn samples() -> Vec<Vec3d> {
        vec![
            v(1.0, 2.0, 3.0),
            v(4.0, 5.0, 6.0),
            v(-2.5, 0.5, 7.0),
            v(0.1, -3.0, 0.0),
            v(10.0, -10.0, 1e-3),
        ]
    }

    // ── magnitude ──

    #[test]
    fn magnitude_of_3_4_is_5() {
        assert_relative_eq!(Vec2f::new(3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn magnitude_of_1_2_3_is_sqrt_14() {
        assert_relative_eq!(Vec3f::new(1.0, 2.0, 3.0).magnitude(), 14.0_f32.sqrt());
    }

    #[test]
    fn magnitude_squared_matches_magnitude() {
        for a in samples() {
            assert_relative_eq!(a.magnitude().powi(2), a.magnitude_squared(), max_relative = TOL);
            assert_relative_eq!(a.magnitude_squared(), a.dot(&a), max_relative = TOL);
        }
    }

    // ── normalize ──

    #[test]
    fn normalize_yields_unit_length() {
        for a in samples() {
            assert_relative_eq!(a.normalize().magnitude(), 1.0, epsilon = TOL);
            assert!(a.normalize().is_parallel(&a));
        }
    }

    #[test]
    fn normalize_mut_matches_normalize() {
        let mut a = v(0.0, 3.0, 4.0);
        let expected = a.normalize();
        a.normalize_mut();
        assert_eq!(a, expected);
        assert_eq!(a, v(0.0, 0.6, 0.8));
    }

    #[test]
    fn try_normalize_rejects_zero_vector() {
        crate::test_support::init_tracing();
        assert!(matches!(
            Vec3d::zeros().try_normalize(),
            Err(GeometryError::ZeroVector)
        ));
        assert_eq!(v(2.0, 0.0, 0.0).try_normalize().unwrap(), Vec3d::x_axis());
    }

    // ── dot / cross ──

    #[test]
    fn dot_products() {
        assert_relative_eq!(Vec2f::new(1.0, 2.0).dot(&Vec2f::new(3.0, 4.0)), 11.0);
        assert_relative_eq!(v(1.0, 2.0, 3.0).dot(&v(4.0, 5.0, 6.0)), 32.0);
    }

    #[test]
    fn dot_is_commutative() {
        for a in samples() {
            for b in samples() {
                assert_relative_eq!(a.dot(&b), b.dot(&a));
            }
        }
    }

    #[test]
    fn cross_of_known_vectors() {
        let c = Vec3f::new(1.0, 2.0, 3.0).cross(&Vec3f::new(4.0, 5.0, 6.0));
        assert_eq!(c, Vec3f::new(-3.0, 6.0, -3.0));
        assert_eq!(Vec3d::x_axis().cross(&Vec3d::y_axis()), Vec3d::z_axis());
    }

    #[test]
    fn cross_is_anticommutative_and_orthogonal() {
        for a in samples() {
            for b in samples() {
                let ab = a.cross(&b);
                let ba = b.cross(&a);
                assert_abs_diff_eq!((ab + ba).magnitude(), 0.0, epsilon = TOL);
                assert_abs_diff_eq!(a.dot(&ab), 0.0, epsilon = 1e-9);
                assert_abs_diff_eq!(b.dot(&ab), 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn cross_2d_is_perp_dot() {
        let a = Vec2d::new(1.0, 2.0);
        let b = Vec2d::new(3.0, 4.0);
        assert_relative_eq!(a.cross(&b), -2.0);
        assert_relative_eq!(b.cross(&a), 2.0);
        assert_relative_eq!(Vec2d::x_axis().cross(&Vec2d::y_axis()), 1.0);
    }

    #[test]
    fn cross_2d_agrees_with_lifted_3d_cross() {
        let a = Vec2d::new(1.5, -2.0);
        let b = Vec2d::new(0.25, 3.0);
        let lifted = v(a.x(), a.y(), 0.0).cross(&v(b.x(), b.y(), 0.0));
        assert_relative_eq!(a.cross(&b), lifted.z());
    }

    #[test]
    fn triple_product_expands() {
        let a = v(1.0, 2.0, 3.0);
        let b = v(-1.0, 0.5, 2.0);
        let c = v(3.0, -1.0, 1.0);
        // a x (b x c) = b (a . c) - c (a . b)
        let expected = b * a.dot(&c) - c * a.dot(&b);
        assert_eq!(triple(&a, &b, &c), expected);
    }

    // ── angle ──

    #[test]
    fn angle_between_axes_is_right() {
        assert_relative_eq!(
            Vec2f::new(1.0, 0.0).angle(&Vec2f::new(0.0, 1.0)),
            std::f32::consts::FRAC_PI_2
        );
        assert_relative_eq!(Vec3d::x_axis().angle(&Vec3d::y_axis()), PI / 2.0);
    }

    #[test]
    fn angle_of_parallel_and_opposite_vectors() {
        let a = v(1.0, 1.0, 1.0);
        assert_abs_diff_eq!(a.angle(&(a * 3.0)), 0.0, epsilon = 1e-6);
        assert_relative_eq!(a.angle(&-a), PI, epsilon = 1e-6);
    }

    // ── projection / rejection ──

    #[test]
    fn projection_and_rejection_2d() {
        let a = Vec2f::new(3.0, 4.0);
        let b = Vec2f::new(1.0, 1.0);
        assert_eq!(a.project(&b), Vec2f::new(3.5, 3.5));
        assert_eq!(a.reject(&b), Vec2f::new(-0.5, 0.5));
    }

    #[test]
    fn projection_and_rejection_3d() {
        let a = Vec3f::new(1.0, 2.0, 3.0);
        let b = Vec3f::x_axis();
        assert_eq!(a.project(&b), Vec3f::new(1.0, 0.0, 0.0));
        assert_eq!(a.reject(&b), Vec3f::new(0.0, 2.0, 3.0));
    }

    #[test]
    fn projection_plus_rejection_recovers_vector() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a.project(&b) + a.reject(&b), a);
                assert_abs_diff_eq!(a.reject(&b).dot(&b), 0.0, epsilon = 1e-9);
            }
        }
    }

    // ── relations / metric ──

    #[test]
    fn parallel_and_perpendicular() {
        assert!(v(1.0, 2.0, 3.0).is_parallel(&v(-2.0, -4.0, -6.0)));
        assert!(!v(1.0, 2.0, 3.0).is_parallel(&v(1.0, 2.0, 4.0)));
        assert!(Vec2d::new(1.0, 1.0).is_perpendicular(&Vec2d::new(-1.0, 1.0)));
        assert!(Vec2d::new(2.0, 1.0).perpendicular().is_perpendicular(&Vec2d::new(2.0, 1.0)));
        assert!(!Vec2d::new(1.0, 1.0).is_perpendicular(&Vec2d::new(1.0, 0.0)));
    }

    #[test]
    fn distance_between_vectors() {
        let a = Vec2f::new(1.0, 2.0);
        let b = Vec2f::new(4.0, 6.0);
        assert_relative_eq!(a.distance(&b), 5.0);
        assert_relative_eq!(a.distance_squared(&b), 25.0);
        assert_relative_eq!(v(1.0, 2.0, 3.0).distance(&v(4.0, 6.0, 8.0)), 50.0_f64.sqrt());
        for a in samples() {
            for b in samples() {
                assert_relative_eq!(a.distance(&b), b.distance(&a));
            }
        }
    }

    // ── operators ──

    #[test]
    fn arithmetic_operators() {
        let a = v(1.0, 2.0, 3.0);
        let b = v(3.0, 2.0, 1.0);
        assert_eq!(a + b, v(4.0, 4.0, 4.0));
        assert_eq!(a - b, v(-2.0, 0.0, 2.0));
        assert_eq!(a * 2.0, v(2.0, 4.0, 6.0));
        assert_eq!(0.5 * a, v(0.5, 1.0, 1.5));
        assert_eq!(a / 2.0, v(0.5, 1.0, 1.5));
        assert_eq!(-a, v(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c -= v(1.0, 1.0, 1.0);
        c *= 3.0;
        c /= 9.0;
        assert_eq!(c, v(1.0, 1.0, 1.0));
    }

    #[test]
    fn index_access() {
        let mut a = v(1.0, 2.0, 3.0);
        a[2] = -1.0;
        assert_relative_eq!(a[0], 1.0);
        assert_relative_eq!(a.z(), -1.0);
    }

    #[test]
    fn equality_is_reflexive_and_symmetric() {
        let a = v(1.0, 2.0, 3.0);
        let b = v(1.0 + 9e-7, 2.0, 3.0);
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, v(1.0, 2.0, 3.1));
    }

    #[test]
    fn display_matches_tuple_form() {
        assert_eq!(v(1.0, -2.0, 0.5).to_string(), "(1, -2, 0.5)");
    }

    #[test]
    fn point_vector_conversions() {
        let a = v(1.0, 2.0, 3.0);
        assert_eq!(a.to_point().to_vector(), a);
        assert_eq!(Vec3d::default(), Vec3d::zeros());
    }
}
