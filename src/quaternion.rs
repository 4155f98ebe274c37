//! # Quaternions
//!
//! A quaternion is stored as a vector part `v` and a scalar part `w`. The
//! named factories make the construction explicit:
//!
//! - [`Quaternion::new`] and [`Quaternion::from_raw_components`] store what
//!   they are given, with no trigonometry applied.
//! - [`Quaternion::from_axis_angle`] applies the half-angle exponential map
//!   and is the way to build a rotation.
//! - [`Quaternion::from_euler`] is the inverse of [`Quaternion::euler`].
//!
//! Rotation quaternions use the passive convention: [`Quaternion::rotate`]
//! computes `q* v q`.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::AbsDiffEq;

use crate::math::{within_tolerance, Scalar};
use crate::vector::{Vector3, Vector4};

#[derive(Clone, Copy, Debug)]
pub struct Quaternion<T: Scalar> {
    v: Vector3<T>,
    w: T,
    epsilon: T,
}

pub type Quaternionf = Quaternion<f32>;
pub type Quaterniond = Quaternion<f64>;

impl<T: Scalar> Quaternion<T> {
    /// Build a quaternion from its vector and scalar parts verbatim. The
    /// tolerance is taken from `axis`.
    ///
    /// This does not treat `w` as an angle; see [`Quaternion::from_axis_angle`].
    pub fn new(axis: Vector3<T>, w: T) -> Self {
        Quaternion {
            v: axis,
            w,
            epsilon: axis.epsilon(),
        }
    }

    pub fn from_raw_components(x: T, y: T, z: T, w: T) -> Self {
        Quaternion::new(Vector3::new([x, y, z]), w)
    }

    /// The identity rotation, `1 + <0, 0, 0>`.
    pub fn identity() -> Self {
        Quaternion::new(Vector3::zero(), T::one())
    }

    /// Unit quaternion rotating by `angle` radians about `axis`. The axis does
    /// not need to be normalised, but must not be zero.
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let (sin, cos) = (angle / T::cast(2.0)).sin_cos();
        Quaternion::new(axis.unit_vector() * sin, cos)
    }

    /// Build from ZYX Euler angles `<yaw, pitch, roll>` in radians, the
    /// inverse of [`Quaternion::euler`].
    pub fn from_euler(euler: Vector3<T>) -> Self {
        let half = euler / T::cast(2.0);
        let (sin_yaw, cos_yaw) = half[0].sin_cos();
        let (sin_pitch, cos_pitch) = half[1].sin_cos();
        let (sin_roll, cos_roll) = half[2].sin_cos();

        let x = sin_yaw * cos_pitch * cos_roll + cos_yaw * sin_pitch * sin_roll;
        let y = sin_yaw * cos_pitch * sin_roll - cos_yaw * sin_pitch * cos_roll;
        let z = cos_yaw * cos_pitch * sin_roll + sin_yaw * sin_pitch * cos_roll;
        let w = cos_yaw * cos_pitch * cos_roll - sin_yaw * sin_pitch * sin_roll;

        Quaternion::new(Vector3::with_epsilon([x, y, z], euler.epsilon()), w)
    }

    /// Same quaternion with a different equality tolerance.
    pub fn with_epsilon(self, epsilon: T) -> Self {
        let mut v = self.v;
        v.set_epsilon(epsilon);
        Quaternion {
            v,
            w: self.w,
            epsilon,
        }
    }

    pub fn epsilon(&self) -> T {
        self.epsilon
    }

    pub fn axis(&self) -> Vector3<T> {
        self.v
    }

    pub fn scalar(&self) -> T {
        self.w
    }

    /// The components as `<x, y, z, w>`.
    pub fn as_vector(&self) -> Vector4<T> {
        Vector4::with_epsilon([self.v[0], self.v[1], self.v[2], self.w], self.epsilon)
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> T {
        self.v.dot(&other.v) + self.w * other.w
    }

    pub fn norm(&self) -> T {
        self.dot(self).sqrt()
    }

    pub fn conjugate(&self) -> Self {
        Quaternion::new(-self.v, self.w)
    }

    /// `conjugate / norm²`. Not defined for the zero quaternion.
    pub fn inverse(&self) -> Self {
        let norm = self.norm();
        self.conjugate() / (norm * norm)
    }

    pub fn is_unit_quaternion(&self) -> bool {
        within_tolerance(self.norm(), T::one(), self.epsilon)
    }

    /// This quaternion scaled to norm one.
    pub fn unit_quaternion(&self) -> Self {
        *self / self.norm()
    }

    /// Rotate `v` by this quaternion, which should be a unit quaternion.
    pub fn rotate(&self, v: Vector3<T>) -> Vector3<T> {
        (self.conjugate() * v * *self).axis()
    }

    /// ZYX Euler angles `<yaw, pitch, roll>` in radians.
    ///
    /// Near ±90° pitch the yaw/roll split is ill conditioned; the pitch term is
    /// clamped so floating point overshoot cannot produce NaN.
    pub fn euler(&self) -> Vector3<T> {
        let two = T::cast(2.0);
        let (a, b, c, d) = (self.w, self.v[0], self.v[1], self.v[2]);
        let (aa, bb, cc, dd) = (a * a, b * b, c * c, d * d);

        let yaw = (two * (a * b + c * d)).atan2(aa - bb - cc + dd);
        let pitch = (two * (b * d - a * c)).max(-T::one()).min(T::one()).asin();
        let roll = (two * (a * d + b * c)).atan2(aa + bb - cc - dd);

        Vector3::with_epsilon([yaw, pitch, roll], self.epsilon)
    }
}

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Quaternion::identity()
    }
}

/// Interprets the vector as `<x, y, z, w>`.
impl<T: Scalar> From<Vector4<T>> for Quaternion<T> {
    fn from(q: Vector4<T>) -> Self {
        Quaternion::new(Vector3::with_epsilon([q[0], q[1], q[2]], q.epsilon()), q[3])
    }
}

impl<T: Scalar> From<[T; 4]> for Quaternion<T> {
    fn from(q: [T; 4]) -> Self {
        Quaternion::from(Vector4::new(q))
    }
}

impl<T: Scalar> Add for Quaternion<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Quaternion::new(self.v + other.v, self.w + other.w)
    }
}

impl<T: Scalar> Sub for Quaternion<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Quaternion::new(self.v - other.v, self.w - other.w)
    }
}

impl<T: Scalar> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Quaternion::new(-self.v, -self.w)
    }
}

/// The Hamilton product. `p * q` composes rotations and is not commutative.
impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let w = self.w * other.w - self.v.dot(&other.v);
        let v = self.v * other.w + other.v * self.w + self.v.cross(&other.v);
        Quaternion::new(v, w)
    }
}

/// Product with a pure quaternion `0 + v`.
impl<T: Scalar> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Self;

    fn mul(self, v: Vector3<T>) -> Self {
        self * Quaternion::new(v, T::zero())
    }
}

impl<T: Scalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(self, k: T) -> Self {
        Quaternion::new(self.v * k, self.w * k)
    }
}

impl<T: Scalar> Div<T> for Quaternion<T> {
    type Output = Self;

    fn div(self, k: T) -> Self {
        Quaternion::new(self.v / k, self.w / k)
    }
}

impl<T: Scalar> PartialEq for Quaternion<T> {
    fn eq(&self, other: &Self) -> bool {
        self.v == other.v && within_tolerance(self.w, other.w, self.epsilon)
    }
}

impl<T: Scalar> AbsDiffEq for Quaternion<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        <T as Scalar>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.v.abs_diff_eq(&other.v, epsilon) && (self.w - other.w).abs() <= epsilon
    }
}

impl<T: Scalar> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.w, self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::degrees_to_radians;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    fn yaxis() -> Vector3<f64> {
        Vector3::new([0.0, 1.0, 0.0])
    }

    #[test]
    fn addition() {
        let p = Quaterniond::from([1.0, -2.0, 1.0, 3.0]);
        let q = Quaterniond::from([-1.0, 2.0, 3.0, 2.0]);
        let expected = Quaterniond::from([0.0, 0.0, 4.0, 5.0]);

        assert_eq!(p + q, expected);
        assert_eq!(expected - q, p);
        assert_ne!(expected - q, q);
    }

    #[test]
    fn scalar_part_is_not_wrapped() {
        let p = Quaterniond::from_raw_components(0.0, 0.0, 0.0, 4.0 * PI);
        let q = Quaterniond::from_raw_components(0.0, 0.0, 0.0, 1.0);

        assert_relative_eq!((p + q).scalar(), 4.0 * PI + 1.0);
        assert_relative_eq!((q - p).scalar(), 1.0 - 4.0 * PI);
    }

    #[test]
    fn conjugate() {
        let p = Quaterniond::from([3.0, 4.0, 5.0, 2.0]);
        let q = Quaterniond::from([-3.0, -4.0, -5.0, 2.0]);

        assert_eq!(p.conjugate(), q);
        assert_eq!(p.conjugate().conjugate(), p);
    }

    #[test]
    fn identity() {
        let p = Quaterniond::from([1.0, -2.0, 1.0, 3.0]);
        let q = Quaterniond::identity();

        assert_eq!(p * q, p);
        assert_eq!(q * p, p);
        assert_eq!(Quaternionf::default(), Quaternionf::from([0.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn identity_on_unit_quaternions() {
        let id = Quaterniond::identity();
        for (axis, angle) in &[
            ([1.0, 0.0, 0.0], 0.3),
            ([0.0, -2.0, 1.0], 2.0),
            ([5.0, 6.0, 1.7], -1.2),
        ] {
            let p = Quaterniond::from_axis_angle(Vector3::new(*axis), *angle);
            assert!(p.is_unit_quaternion());
            assert_eq!(p * id, p);
            assert_eq!(id * p, p);
        }
    }

    #[test]
    fn inverse() {
        let p = Quaterniond::from([3.0, 4.0, 5.0, 2.0]);
        let q = Quaterniond::from([-0.05556, -0.07407, -0.09259, 0.03704]);

        assert_eq!(p.inverse(), q);
        assert_eq!(p.inverse(), p.conjugate() / (p.norm() * p.norm()));
        assert_eq!(p * p.inverse(), Quaterniond::identity());

        let p = Quaternionf::from([3.0, 4.0, 5.0, 2.0]);
        let q = Quaternionf::from([-0.05556, -0.07407, -0.09259, 0.03704]);
        assert_eq!(p.inverse(), q);
    }

    #[test]
    fn norm() {
        let p = Quaterniond::from([
            0.9899139811480784,
            9.387110042325054,
            6.161341707794767,
            5.563199889674063,
        ]);
        assert_relative_eq!(p.norm(), 12.57016663729933, epsilon = 1e-12);

        let p = Quaternionf::from_raw_components(1.0, 1.0, 1.0, 1.0);
        assert_relative_eq!(p.norm(), 2.0);
    }

    #[test]
    fn hamilton_product() {
        let p = Quaterniond::from([1.0, -2.0, 1.0, 3.0]);
        let q = Quaterniond::from([-1.0, 2.0, 3.0, 2.0]);
        let expected = Quaterniond::from([-9.0, -2.0, 11.0, 8.0]);

        assert_eq!(p * q, expected);
        assert_ne!(q * p, expected);

        let p = Quaternionf::from([1.0, -2.0, 1.0, 3.0]);
        let q = Quaternionf::from([-1.0, 2.0, 3.0, 2.0]);
        assert_eq!(p * q, Quaternionf::from([-9.0, -2.0, 11.0, 8.0]));
    }

    #[test]
    fn product_is_associative() {
        let p = Quaterniond::from([1.0, -2.0, 1.0, 3.0]);
        let q = Quaterniond::from([-1.0, 2.0, 3.0, 2.0]);
        let r = Quaterniond::from([0.5, 0.25, -1.0, 0.1]);

        assert_eq!((p * q) * r, p * (q * r));
    }

    #[test]
    fn product_with_pure_vector() {
        let p = Quaterniond::from([1.0, -2.0, 1.0, 3.0]);
        let v = Vector3::new([0.5, -1.0, 2.0]);

        assert_eq!(p * v, p * Quaterniond::new(v, 0.0));
    }

    #[test]
    fn rotate() {
        // x points north and z to the sky: rotating a vector due north by
        // 90° about y leaves it pointing straight up.
        let v = Vector3::new([1.0, 0.0, 0.0]);
        let p = Quaterniond::from_axis_angle(yaxis(), PI / 2.0);

        assert!(p.is_unit_quaternion());
        assert_eq!(p.rotate(v), Vector3::new([0.0, 0.0, 1.0]));

        let v = Vector3::new([1.0_f32, 0.0, 0.0]);
        let p = Quaternionf::from_axis_angle(Vector3::new([0.0, 1.0, 0.0]), std::f32::consts::FRAC_PI_2);
        assert_eq!(p.rotate(v), Vector3::new([0.0, 0.0, 1.0]));
    }

    #[test]
    fn euler_round_trip() {
        let axis = Vector3::new([5.037992718099102, 6.212303632611285, 1.7056797335843106]);

        let p = Quaterniond::from_axis_angle(axis, PI / 4.0);
        assert_eq!(Quaterniond::from_euler(p.euler()), p);

        let axis = Vector3::new([5.037992718099102_f32, 6.212303632611285, 1.7056797335843106]);
        let p = Quaternionf::from_axis_angle(axis, std::f32::consts::FRAC_PI_4);
        assert_eq!(Quaternionf::from_euler(p.euler()), p);
    }

    #[test]
    fn euler_single_axes() {
        let angle = degrees_to_radians(20.0);
        let p = Quaterniond::from_axis_angle(Vector3::new([1.0, 0.0, 0.0]), angle);
        assert_eq!(p.euler(), Vector3::new([angle, 0.0, 0.0]));

        let p = Quaterniond::from_axis_angle(Vector3::new([0.0, 0.0, 1.0]), angle);
        assert_eq!(p.euler(), Vector3::new([0.0, 0.0, angle]));

        let euler = Vector3::new([0.1, 0.2, 0.3]);
        assert_eq!(Quaterniond::from_euler(euler).euler(), euler);
    }

    #[test]
    fn euler_clamps_at_gimbal_lock() {
        // 2(bd - ac) overshoots 1 slightly for this unnormalised quaternion.
        let p = Quaterniond::from_raw_components(0.0, -0.7072, 0.0, 0.7072);
        let euler = p.euler();

        assert!(!euler[1].is_nan());
        assert_relative_eq!(euler[1].abs(), PI / 2.0);
    }

    #[test]
    fn unit() {
        let q = Quaterniond::from([0.5773502691896258, 0.5773502691896258, 0.5773502691896258, 0.0]);
        assert!(q.is_unit_quaternion());
        assert!(!Quaterniond::from([1.0, 1.0, 1.0, 1.0]).is_unit_quaternion());
        assert!(Quaterniond::from([1.0, 1.0, 1.0, 1.0]).unit_quaternion().is_unit_quaternion());
    }

    #[test]
    fn axis_angle_factory() {
        let p = Quaterniond::from_axis_angle(Vector3::new([1.0, 1.0, 1.0]), PI);
        let q = Quaterniond::from([0.5773502691896258, 0.5773502691896258, 0.5773502691896258, 0.0]);
        assert_eq!(p, q);

        // The raw constructor does not apply the exponential map.
        let raw = Quaterniond::new(Vector3::new([1.0, 1.0, 1.0]), PI);
        assert_ne!(raw, p);
        assert_relative_eq!(raw.scalar(), PI);
    }

    #[test]
    fn accessors() {
        let p = Quaterniond::from(Vector4::new([1.0, 2.0, 3.0, 4.0]));

        assert_eq!(p.axis(), Vector3::new([1.0, 2.0, 3.0]));
        assert_relative_eq!(p.scalar(), 4.0);
        assert_eq!(p.as_vector(), Vector4::new([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(Quaterniond::from_raw_components(1.0, 2.0, 3.0, 4.0), p);
    }

    #[test]
    fn tolerance_follows_the_value() {
        let p = Quaterniond::from([1.0, 2.0, 3.0, 4.0]).with_epsilon(0.1);
        let q = Quaterniond::from([1.05, 2.0, 3.0, 4.05]);

        assert_eq!(p, q);
        assert_ne!(q, p);
        assert_relative_eq!((p * 2.0).epsilon(), 0.1);
        assert_relative_eq!(p.axis().epsilon(), 0.1);
        assert_abs_diff_eq!(p, q, epsilon = 0.06);
    }

    #[test]
    fn display() {
        let p = Quaternionf::from([1.0, 2.0, 3.0, 4.0]);
        let q = Quaterniond::from([1.0, 2.0, 3.0, 4.0]);

        assert_eq!(p.to_string(), "4 + <1, 2, 3>");
        assert_eq!(q.to_string(), "4 + <1, 2, 3>");
    }
}
