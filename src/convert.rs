//! Conversions behind the `euler2quat` and `quaternion` command line tools.

use std::fmt;

use crate::error::{Error, Result};
use crate::math::{degrees_to_radians, radians_to_degrees};
use crate::quaternion::Quaterniond;
use crate::vector::Vector3;

/// What `euler2quat` was asked to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Conversion {
    /// Yaw, pitch and roll in degrees.
    EulerToQuaternion(Vector3<f64>),
    QuaternionToEuler(Quaterniond),
}

impl Conversion {
    /// Pick the conversion from the flags that were given. Either all three
    /// angles or all four components must be present, never a mix.
    pub fn from_flags(euler: [Option<f64>; 3], quaternion: [Option<f64>; 4]) -> Result<Self> {
        let any_euler = euler.iter().any(Option::is_some);
        let any_quaternion = quaternion.iter().any(Option::is_some);

        match (any_euler, any_quaternion) {
            (true, true) => Err(Error::InvalidArguments(
                "give either --yaw --pitch --roll or --x --y --z --w, not both".to_string(),
            )),
            (true, false) => match euler {
                [Some(yaw), Some(pitch), Some(roll)] => {
                    Ok(Conversion::EulerToQuaternion(Vector3::new([yaw, pitch, roll])))
                }
                _ => Err(Error::InvalidArguments(
                    "--yaw, --pitch and --roll are all required".to_string(),
                )),
            },
            (false, true) => match quaternion {
                [Some(x), Some(y), Some(z), Some(w)] => Ok(Conversion::QuaternionToEuler(
                    Quaterniond::from_raw_components(x, y, z, w),
                )),
                _ => Err(Error::InvalidArguments(
                    "--x, --y, --z and --w are all required".to_string(),
                )),
            },
            (false, false) => Err(Error::InvalidArguments("nothing to convert".to_string())),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::EulerToQuaternion(degrees) => {
                let euler = Vector3::new([
                    degrees_to_radians(degrees[0]),
                    degrees_to_radians(degrees[1]),
                    degrees_to_radians(degrees[2]),
                ]);
                write!(f, "Quaternion: {}", Quaterniond::from_euler(euler).as_vector())
            }
            Conversion::QuaternionToEuler(q) => {
                write!(f, "Euler ZYX: {}", q.euler() * radians_to_degrees(1.0))
            }
        }
    }
}

/// The rotation of `angle` radians about `<x, y, z>`.
pub fn axis_angle(angle: f64, axis: [f64; 3]) -> Result<Quaterniond> {
    let axis = Vector3::new(axis);
    if axis.is_zero() {
        return Err(Error::InvalidArguments(
            "the rotation axis must not be zero".to_string(),
        ));
    }
    Ok(Quaterniond::from_axis_angle(axis, angle))
}
