//! # Madgwick attitude propagation
//! Gyroscope half of the filter detailed here:
//! https://www.x-io.co.uk/res/doc/madgwick_internal_report.pdf
//!
//! Only the angular rate integration is implemented; there is no
//! accelerometer or magnetometer gradient descent correction step.
//!
//! Initial Q for a system is 1,0,0,0

use tracing::{trace, warn};

use crate::error::{Error, Result};
use crate::math::{within_tolerance, Scalar};
use crate::quaternion::Quaternion;
use crate::vector::Vector3;

// smallest accepted time step in seconds
pub const MIN_TIME_STEP: f64 = 0.001;

/// Orientation estimator driven by body-frame angular velocity.
///
/// Holds the current sensor frame, the one before the latest update, and the
/// time step of that update. Updates take `&mut self`; share the orientation
/// between tasks by copying [`Madgwick::orientation`], not the filter.
#[derive(Clone, Debug)]
pub struct Madgwick<T: Scalar> {
    delta_t: T,
    previous_sensor_frame: Quaternion<T>,
    sensor_frame: Quaternion<T>,
    normalize: bool,
}

impl<T: Scalar> Default for Madgwick<T> {
    fn default() -> Self {
        Madgwick::new()
    }
}

impl<T: Scalar> Madgwick<T> {
    /// Filter starting at the identity orientation.
    pub fn new() -> Self {
        Madgwick::from_quaternion(Quaternion::identity())
    }

    /// Filter starting from a sensor frame vector. A zero vector gives the
    /// identity orientation; any other vector goes through the axis-angle
    /// map with a zero angle, which keeps its tolerance but also lands on
    /// the identity rotation.
    pub fn from_vector(sf: Vector3<T>) -> Self {
        if sf.is_zero() {
            return Madgwick::new();
        }
        Madgwick::from_quaternion(Quaternion::from_axis_angle(sf, T::zero()))
    }

    pub fn from_quaternion(sf: Quaternion<T>) -> Self {
        Madgwick {
            delta_t: T::zero(),
            previous_sensor_frame: Quaternion::identity(),
            sensor_frame: sf,
            normalize: false,
        }
    }

    /// Renormalise the orientation after every gyroscope step, as the paper
    /// does. Off by default, in which case the norm drifts from one over many
    /// updates.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn orientation(&self) -> Quaternion<T> {
        self.sensor_frame
    }

    pub fn previous_orientation(&self) -> Quaternion<T> {
        self.previous_sensor_frame
    }

    pub fn delta_t(&self) -> T {
        self.delta_t
    }

    /// Rate of change of the orientation for a gyro reading `<w_x, w_y, w_z>`
    /// in rad/s.
    pub fn angular_rate(&self, gyro: &Vector3<T>) -> Quaternion<T> {
        (self.sensor_frame * T::cast(0.5)) * *gyro
    }

    /// Replace the sensor frame, archiving the current one.
    pub fn update_frame(&mut self, sf: Quaternion<T>, delta: T) {
        self.previous_sensor_frame = self.sensor_frame;
        self.sensor_frame = sf;
        self.delta_t = delta;
    }

    /// Integrate one gyroscope reading over `delta` seconds.
    ///
    /// Returns [`Error::ZeroTimeStep`] without touching the filter if `delta`
    /// is within [`MIN_TIME_STEP`] of zero.
    pub fn update_angular_orientation(&mut self, gyro: &Vector3<T>, delta: T) -> Result<()> {
        if within_tolerance(delta, T::zero(), T::cast(MIN_TIME_STEP)) {
            warn!(delta = delta.as_f64(), "rejecting gyro update");
            return Err(Error::ZeroTimeStep {
                delta: delta.as_f64(),
            });
        }

        let q_dot = self.angular_rate(gyro) * delta;
        let mut sf = self.sensor_frame + q_dot;
        if self.normalize {
            sf = sf.unit_quaternion();
        }
        trace!(frame = %sf, delta = delta.as_f64(), "gyro update");

        self.update_frame(sf, delta);
        Ok(())
    }

    /// Euler angles `<yaw, pitch, roll>` of the current orientation.
    pub fn euler(&self) -> Vector3<T> {
        self.sensor_frame.euler()
    }
}
