use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use nalgebra::SVector;

use super::scalar::abs;
use super::{Real, Vector, DIM3};

/// A position in `N`-dimensional Euclidean space.
///
/// Shares its representation with [`Vector`] but is a distinct type, so
/// that affine combinations are checked statically:
/// `Point - Point = Vector` and `Point + Vector = Point`.
/// Componentwise `Point + Point`, scaling and negation are still
/// available for callers that treat points as coordinate tuples.
///
/// Equality is tolerant: two points are equal when every coordinate pair
/// differs by at most [`Real::eps`]. It is reflexive and symmetric but not
/// transitive.
#[derive(Debug, Clone, Copy)]
pub struct Point<T, const N: usize = DIM3> {
    coords: SVector<T, N>,
}

impl<T: Real, const N: usize> Point<T, N> {
    /// The origin (all coordinates zero).
    #[must_use]
    pub fn origin() -> Self {
        Self {
            coords: SVector::zeros(),
        }
    }

    /// Creates a point from its coordinates.
    #[must_use]
    pub fn from_array(coords: [T; N]) -> Self {
        Self {
            coords: SVector::from(coords),
        }
    }

    /// Wraps a nalgebra column vector of coordinates.
    #[must_use]
    pub fn from_coords(coords: SVector<T, N>) -> Self {
        Self { coords }
    }

    /// Returns the underlying coordinate vector.
    #[must_use]
    pub fn coords(&self) -> &SVector<T, N> {
        &self.coords
    }

    /// Returns the coordinates as a slice of length `N`.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.coords.as_slice()
    }

    /// Returns the dimension `N`.
    #[must_use]
    pub const fn dim(&self) -> usize {
        N
    }

    /// Reinterprets the position as the vector from the origin.
    #[must_use]
    pub fn to_vector(self) -> Vector<T, N> {
        Vector::from_coords(self.coords)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> T {
        (self.coords - other.coords).norm()
    }

    /// Squared Euclidean distance to `other`.
    #[must_use]
    pub fn distance_squared(&self, other: &Self) -> T {
        (self.coords - other.coords).norm_squared()
    }

    /// Componentwise `self + t * (other - self)`. `t` is not clamped.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        Self {
            coords: self.coords + (other.coords - self.coords) * t,
        }
    }
}

impl<T: Real> Point<T, 2> {
    /// Creates a 2-D point.
    #[must_use]
    pub fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> T {
        self.coords[0]
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> T {
        self.coords[1]
    }
}

impl<T: Real> Point<T, 3> {
    /// Creates a 3-D point.
    #[must_use]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> T {
        self.coords[0]
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> T {
        self.coords[1]
    }

    /// Returns the z coordinate.
    #[must_use]
    pub fn z(&self) -> T {
        self.coords[2]
    }
}

impl<T: Real, const N: usize> Default for Point<T, N> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<T: Real, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Self::from_array(coords)
    }
}

impl<T: Real, const N: usize> From<nalgebra::Point<T, N>> for Point<T, N> {
    fn from(point: nalgebra::Point<T, N>) -> Self {
        Self::from_coords(point.coords)
    }
}

impl<T: Real, const N: usize> From<Point<T, N>> for nalgebra::Point<T, N> {
    fn from(point: Point<T, N>) -> Self {
        nalgebra::Point::from(point.coords)
    }
}

impl<T: Real, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.coords[index]
    }
}

impl<T: Real, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.coords[index]
    }
}

impl<T: Real, const N: usize> PartialEq for Point<T, N> {
    fn eq(&self, other: &Self) -> bool {
        let eps = T::eps();
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| abs(*a - *b) <= eps)
    }
}

impl<T: Real, const N: usize> fmt::Display for Point<T, N> {
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

// ── affine operators ──

impl<T: Real, const N: usize> Sub for Point<T, N> {
    type Output = Vector<T, N>;

    fn sub(self, rhs: Self) -> Vector<T, N> {
        Vector::from_coords(self.coords - rhs.coords)
    }
}

impl<T: Real, const N: usize> Add<Vector<T, N>> for Point<T, N> {
    type Output = Self;

    fn add(self, rhs: Vector<T, N>) -> Self {
        Self::from_coords(self.coords + rhs.coords())
    }
}

impl<T: Real, const N: usize> Sub<Vector<T, N>> for Point<T, N> {
    type Output = Self;

    fn sub(self, rhs: Vector<T, N>) -> Self {
        Self::from_coords(self.coords - rhs.coords())
    }
}

impl<T: Real, const N: usize> AddAssign<Vector<T, N>> for Point<T, N> {
    fn add_assign(&mut self, rhs: Vector<T, N>) {
        self.coords += rhs.coords();
    }
}

impl<T: Real, const N: usize> SubAssign<Vector<T, N>> for Point<T, N> {
    fn sub_assign(&mut self, rhs: Vector<T, N>) {
        self.coords -= rhs.coords();
    }
}

// ── componentwise operators ──

impl<T: Real, const N: usize> Add for Point<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_coords(self.coords + rhs.coords)
    }
}

impl<T: Real, const N: usize> AddAssign for Point<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        self.coords += rhs.coords;
    }
}

impl<T: Real, const N: usize> SubAssign for Point<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        self.coords -= rhs.coords;
    }
}

impl<T: Real, const N: usize> Mul<T> for Point<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_coords(self.coords * rhs)
    }
}

impl<T: Real, const N: usize> Div<T> for Point<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::from_coords(self.coords / rhs)
    }
}

impl<T: Real, const N: usize> MulAssign<T> for Point<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        self.coords *= rhs;
    }
}

impl<T: Real, const N: usize> DivAssign<T> for Point<T, N> {
    fn div_assign(&mut self, rhs: T) {
        self.coords /= rhs;
    }
}

impl<T: Real, const N: usize> Neg for Point<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_coords(-self.coords)
    }
}

macro_rules! impl_scalar_mul_point {
    ($($t:ty),*) => {$(
        impl<const N: usize> Mul<Point<$t, N>> for $t {
            type Output = Point<$t, N>;

            fn mul(self, rhs: Point<$t, N>) -> Point<$t, N> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_mul_point!(f32, f64);
