//! # Fixed size vectors
//!
//! `Vector<T, N>` is the small value type the quaternion and the filter are
//! built on. Each instance carries its own equality tolerance; every
//! predicate (`==`, `is_zero`, `is_unit_vector`, `is_parallel`, ...) compares
//! with it rather than with exact bit equality.

use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use approx::AbsDiffEq;

use crate::error::{Error, Result};
use crate::math::{within_tolerance, Scalar};

/// An immutable N-dimensional vector of floats.
#[derive(Clone, Copy, Debug)]
pub struct Vector<T, const N: usize> {
    arr: [T; N],
    epsilon: T,
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
pub type Vector4<T> = Vector<T, 4>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Build a vector with the default tolerance for `T`.
    pub fn new(arr: [T; N]) -> Self {
        Vector {
            arr,
            epsilon: T::default_epsilon(),
        }
    }

    /// Build a vector with an explicit tolerance.
    pub fn with_epsilon(arr: [T; N], epsilon: T) -> Self {
        Vector { arr, epsilon }
    }

    pub fn zero() -> Self {
        Vector::new([T::zero(); N])
    }

    pub fn epsilon(&self) -> T {
        self.epsilon
    }

    /// Set the tolerance used for equality checks.
    pub fn set_epsilon(&mut self, epsilon: T) {
        self.epsilon = epsilon;
    }

    pub fn as_array(&self) -> [T; N] {
        self.arr
    }

    /// Apply `f` to every component, keeping this vector's tolerance.
    fn map<F: Fn(T) -> T>(&self, f: F) -> Self {
        let mut arr = self.arr;
        for c in arr.iter_mut() {
            *c = f(*c);
        }
        Vector::with_epsilon(arr, self.epsilon)
    }

    fn zip<F: Fn(T, T) -> T>(&self, other: &Self, f: F) -> Self {
        let mut arr = self.arr;
        for (c, o) in arr.iter_mut().zip(other.arr.iter()) {
            *c = f(*c, *o);
        }
        Vector::with_epsilon(arr, self.epsilon)
    }

    pub fn dot(&self, other: &Self) -> T {
        self.arr
            .iter()
            .zip(other.arr.iter())
            .fold(T::zero(), |acc, (a, b)| acc + *a * *b)
    }

    pub fn magnitude(&self) -> T {
        self.dot(self).sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.arr
            .iter()
            .all(|c| within_tolerance(*c, T::zero(), self.epsilon))
    }

    /// The vector scaled to length one. Undefined (NaN) for the zero vector.
    pub fn unit_vector(&self) -> Self {
        *self / self.magnitude()
    }

    pub fn is_unit_vector(&self) -> bool {
        within_tolerance(self.magnitude(), T::one(), self.epsilon)
    }

    /// Angle in radians between two vectors.
    ///
    /// Fails with [`Error::ZeroVector`] if either vector is zero.
    pub fn angle(&self, other: &Self) -> Result<T> {
        if self.is_zero() || other.is_zero() {
            return Err(Error::ZeroVector);
        }

        let cos = self.unit_vector().dot(&other.unit_vector());
        Ok(cos.max(-T::one()).min(T::one()).acos())
    }

    /// True if the angle between the vectors is zero, or either one is zero.
    pub fn is_parallel(&self, other: &Self) -> bool {
        match self.angle(other) {
            Ok(angle) => within_tolerance(angle, T::zero(), self.epsilon),
            Err(_) => true,
        }
    }

    /// True if the vectors are perpendicular, or either one is zero.
    pub fn is_orthogonal(&self, other: &Self) -> bool {
        if self.is_zero() || other.is_zero() {
            return true;
        }

        within_tolerance(self.dot(other), T::zero(), self.epsilon)
    }

    /// Projection of this vector onto `basis`.
    pub fn project_parallel(&self, basis: &Self) -> Self {
        let unit_basis = basis.unit_vector();
        unit_basis * self.dot(&unit_basis)
    }

    /// The rejection of this vector from `basis`.
    pub fn project_orthogonal(&self, basis: &Self) -> Self {
        *self - self.project_parallel(basis)
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub fn cross(&self, other: &Self) -> Self {
        let [a0, a1, a2] = self.arr;
        let [b0, b1, b2] = other.arr;
        Vector::with_epsilon(
            [a1 * b2 - b1 * a2, -(a0 * b2 - b0 * a2), a0 * b1 - b0 * a1],
            self.epsilon,
        )
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(arr: [T; N]) -> Self {
        Vector::new(arr)
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.arr[i]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.zip(&other, |a, b| a + b)
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.zip(&other, |a, b| a - b)
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, k: T) -> Self {
        self.map(|c| c * k)
    }
}

/// `a * b` between two vectors is the dot product.
impl<T: Scalar, const N: usize> Mul for Vector<T, N> {
    type Output = T;

    fn mul(self, other: Self) -> T {
        self.dot(&other)
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, k: T) -> Self {
        self.map(|c| c / k)
    }
}

impl<T: Scalar, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.arr
            .iter()
            .zip(other.arr.iter())
            .all(|(a, b)| within_tolerance(*a, *b, self.epsilon))
    }
}

impl<T: Scalar, const N: usize> AbsDiffEq for Vector<T, N> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        <T as Scalar>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.arr
            .iter()
            .zip(other.arr.iter())
            .all(|(a, b)| (*a - *b).abs() <= epsilon)
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (i, c) in self.arr.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ">")
    }
}
