//! Compass headings relative to a reference plane assumed to be that of the
//! Earth, with x pointing to magnetic north.

use crate::error::Result;
use crate::math::Scalar;
use crate::vector::{Vector, Vector2, Vector3};

pub const BASIS_X: usize = 0;
pub const BASIS_Y: usize = 1;
pub const BASIS_Z: usize = 2;

/// The unit vector along `axis`, e.g. `basis::<f64, 3>(BASIS_Z)`.
///
/// # Panics
///
/// Panics if `axis` is not less than `N`.
pub fn basis<T: Scalar, const N: usize>(axis: usize) -> Vector<T, N> {
    let mut arr = [T::zero(); N];
    arr[axis] = T::one();
    Vector::new(arr)
}

/// Compass heading of a 2D vector in radians, measured from the x axis.
pub fn heading2<T: Scalar>(vec: Vector2<T>) -> Result<T> {
    vec.angle(&basis(BASIS_X))
}

/// Compass heading of the projection of `vec` onto the xy plane.
pub fn heading3<T: Scalar>(vec: Vector3<T>) -> Result<T> {
    heading2(Vector2::with_epsilon([vec[0], vec[1]], vec.epsilon()))
}
