//! # Attitude
//!
//! Quaternion algebra and gyroscope attitude propagation for inertial sensors,
//! grown out of a MARG (Magnetic, Angular Rate, and Gravity) experiment.
//!
//! The aim of this crate is to take gyro data and output:
//! - An orientation quaternion, integrated from angular rate with the
//!   gyroscope half of Madgwick's filter.
//! - Roll, pitch and yaw derived from that quaternion on demand.
//!
//! What is here
//! - `Vector<T, N>` and `Quaternion<T>` over `f32` or `f64`. Every value carries
//!   its own equality tolerance, 1e-4 unless told otherwise.
//! - Hamilton product, inverse, rotation of vectors, Euler angles (ZYX) in and out.
//! - LERP and shortest path SLERP.
//! - `Madgwick<T>`, which integrates `q' = q + (q / 2) * w * dt`. It does not
//!   renormalise unless asked to, so the norm drifts slowly away from 1.
//! - An MPU-9250 reader for Linux SPI and the `track` binary that drives
//!   the filter from it.
//!
//! What is not here
//! - The accelerometer and magnetometer gradient descent correction. Only the
//!   gyroscope propagation is implemented.
//!
//! ```
//! use attitude::{Madgwick, Vector3};
//!
//! let mut filter = Madgwick::<f64>::new();
//! let gyro = Vector3::new([0.174533, 0.0, 0.0]);
//! for _ in 0..218 {
//!     filter.update_angular_orientation(&gyro, 0.00917).unwrap();
//! }
//! assert!((filter.euler()[0] - 20f64.to_radians()).abs() < 0.01);
//! ```

#[macro_use]
extern crate serde_derive;

pub mod config;
pub mod convert;
pub mod error;
pub mod interpolation;
pub mod madgwick;
pub mod math;
pub mod orientation;
pub mod quaternion;
pub mod sensor;
pub mod vector;

pub use error::{Error, Result};
pub use interpolation::{lerp, shortest_slerp};
pub use madgwick::Madgwick;
pub use math::Scalar;
pub use quaternion::{Quaternion, Quaterniond, Quaternionf};
pub use vector::{Vector, Vector2, Vector3, Vector4};

/// Shorthand for a double precision filter.
pub type Madgwickd = Madgwick<f64>;
/// Shorthand for a single precision filter.
pub type Madgwickf = Madgwick<f32>;
