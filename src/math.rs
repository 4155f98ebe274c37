//! # Scalar helpers
//!
//! The floating point parameter used throughout the crate, plus the tolerance
//! comparison and angle unit conversions every other module leans on.

use std::fmt::{Debug, Display};

use num_traits::{Float, FloatConst};

/// Default equality tolerance for `f64` values.
pub const EPSILON_F64: f64 = 0.0001;
/// Default equality tolerance for `f32` values.
pub const EPSILON_F32: f32 = 0.0001;

/// A floating point type the vector, quaternion and filter types can be built over.
///
/// Implemented for `f32` and `f64`.
pub trait Scalar: Float + FloatConst + Debug + Display + Default + 'static {
    /// The tolerance new vectors and quaternions start with.
    fn default_epsilon() -> Self;

    /// Convert a literal. Used for constants such as `0.5` inside generic code.
    fn cast(v: f64) -> Self;

    /// Widen to `f64`, for error reporting.
    fn as_f64(self) -> f64;
}

impl Scalar for f32 {
    fn default_epsilon() -> Self {
        EPSILON_F32
    }

    fn cast(v: f64) -> Self {
        v as f32
    }

    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Scalar for f64 {
    fn default_epsilon() -> Self {
        EPSILON_F64
    }

    fn cast(v: f64) -> Self {
        v
    }

    fn as_f64(self) -> f64 {
        self
    }
}

/// True when `a` and `b` differ by strictly less than `epsilon`.
pub fn within_tolerance<T: Scalar>(a: T, b: T, epsilon: T) -> bool {
    (a - b).abs() < epsilon
}

pub fn radians_to_degrees<T: Scalar>(rads: T) -> T {
    rads * (T::cast(180.0) / T::PI())
}

pub fn degrees_to_radians<T: Scalar>(degrees: T) -> T {
    degrees * T::PI() / T::cast(180.0)
}
