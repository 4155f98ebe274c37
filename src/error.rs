//! Error types

use std::io;
use thiserror::Error;

/// Result type for attitude operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the algebra, the filter and the sensor front-end.
///
/// The first three variants are caller mistakes: nothing is computed and no
/// state changes when they are returned.
#[derive(Error, Debug)]
pub enum Error {
    /// Filter update requested with a time step too close to zero
    #[error("time step {delta} is within tolerance of zero")]
    ZeroTimeStep { delta: f64 },

    /// Angle or heading requested for a zero-length vector
    #[error("angle is undefined for a zero vector")]
    ZeroVector,

    /// Spherical interpolation between quaternions that are not unit length
    #[error("expected a unit quaternion, got norm {norm}")]
    NotUnitQuaternion { norm: f64 },

    /// Failed to open a file or device
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed configuration file
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Configuration values the filter or the sampling loop cannot run with
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// GPIO or IMU driver failure
    #[error("Sensor error: {0}")]
    Sensor(String),

    /// Command line arguments that do not describe a conversion
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl Error {
    /// Check if this error is an API misuse rather than an environment failure
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::ZeroTimeStep { .. } | Error::ZeroVector | Error::NotUnitQuaternion { .. }
        )
    }
}
