//! Blending between two orientations.

use tracing::trace;

use crate::error::{Error, Result};
use crate::math::Scalar;
use crate::quaternion::Quaternion;

/// Above this dot product the endpoints are treated as parallel and
/// [`shortest_slerp`] falls back to [`lerp`].
pub const SLERP_PARALLEL_THRESHOLD: f64 = 0.99999;

/// Linear interpolation, normalised back onto the unit sphere.
pub fn lerp<T: Scalar>(p: Quaternion<T>, q: Quaternion<T>, t: T) -> Quaternion<T> {
    (p + (q - p) * t).unit_quaternion()
}

/// Spherical linear interpolation along the shorter great-circle arc.
///
/// Both inputs must be unit quaternions. `q` and `-q` are the same rotation,
/// so when the endpoints lie in opposite hemispheres `q` is negated first and
/// the result at `t = 1` is `-q`.
pub fn shortest_slerp<T: Scalar>(p: Quaternion<T>, q: Quaternion<T>, t: T) -> Result<Quaternion<T>> {
    for end in &[p, q] {
        if !end.is_unit_quaternion() {
            return Err(Error::NotUnitQuaternion {
                norm: end.norm().as_f64(),
            });
        }
    }

    let mut q = q;
    let mut dot = p.dot(&q);
    if dot < T::zero() {
        q = -q;
        dot = -dot;
    }

    if dot > T::cast(SLERP_PARALLEL_THRESHOLD) {
        trace!("slerp endpoints nearly parallel, using lerp");
        return Ok(lerp(p, q, t));
    }

    let omega = dot.acos();
    let sin_omega = omega.sin();
    let a = ((T::one() - t) * omega).sin() / sin_omega;
    let b = (t * omega).sin() / sin_omega;

    Ok(p * a + q * b)
}
