//! # Configuration
//!
//! Settings for the `track` binary, read from an optional YAML file. Any
//! field left out of the file keeps its default, so an empty file is valid.
//!
//! ```yaml
//! sensor:
//!   spi_device: /dev/spidev0.0
//!   ncs_pin: 25
//! filter:
//!   sample_rate_hz: 109.0
//!   normalize: false
//!   initial_orientation: [0.0, 0.0, 0.0, 1.0]
//! log_level: debug
//! ```

use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};
use crate::madgwick::Madgwick;
use crate::math::{Scalar, EPSILON_F64};
use crate::quaternion::Quaternion;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub sensor: SensorConfig,
    pub filter: FilterConfig,
    /// A `tracing` filter directive such as `info` or `attitude=trace`.
    pub log_level: String,
}

/// Where the MPU-9250 is wired.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SensorConfig {
    pub spi_device: String,
    /// sysfs GPIO number of the chip select line
    pub ncs_pin: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Gyroscope sampling rate; the paper uses 109 Hz.
    pub sample_rate_hz: f64,
    /// Equality tolerance given to the filter's quaternions.
    pub epsilon: f64,
    /// Renormalise after each integration step.
    pub normalize: bool,
    /// Starting orientation as `[x, y, z, w]`, identity if absent.
    pub initial_orientation: Option<[f64; 4]>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sensor: SensorConfig::default(),
            filter: FilterConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        SensorConfig {
            spi_device: "/dev/spidev0.0".to_string(),
            ncs_pin: 25,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            sample_rate_hz: 109.0,
            epsilon: EPSILON_F64,
            normalize: false,
            initial_orientation: None,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = File::open(path)?;
        let cfg: Config = serde_yaml::from_reader(f)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml(s: &str) -> Result<Self> {
        let cfg: Config = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.filter.validate()
    }
}

impl FilterConfig {
    /// The sample rate must give a finite, non-zero period and the tolerance
    /// must be positive, otherwise no two quaternions compare equal.
    pub fn validate(&self) -> Result<()> {
        if !(self.sample_rate_hz > 0.0 && self.sample_rate_hz.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "sample_rate_hz must be positive, got {}",
                self.sample_rate_hz
            )));
        }
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }

    /// Seconds between gyroscope samples.
    pub fn delta_t(&self) -> f64 {
        1.0 / self.sample_rate_hz
    }

    /// A filter set up with this configuration.
    pub fn build<T: Scalar>(&self) -> Madgwick<T> {
        let start = match self.initial_orientation {
            Some([x, y, z, w]) => {
                Quaternion::from_raw_components(T::cast(x), T::cast(y), T::cast(z), T::cast(w))
            }
            None => Quaternion::identity(),
        };
        Madgwick::from_quaternion(start.with_epsilon(T::cast(self.epsilon)))
            .with_normalization(self.normalize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quaternion::Quaterniond;
    use approx::assert_relative_eq;
    use std::io::Write;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::from_yaml("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg = Config::from_yaml(
            "filter:\n  sample_rate_hz: 200.0\n  normalize: true\nlog_level: debug\n",
        )
        .unwrap();

        assert_relative_eq!(cfg.filter.delta_t(), 0.005);
        assert!(cfg.filter.normalize);
        assert_relative_eq!(cfg.filter.epsilon, EPSILON_F64);
        assert_eq!(cfg.sensor, SensorConfig::default());
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn builds_filter() {
        let cfg = Config::from_yaml(
            "filter:\n  epsilon: 0.01\n  initial_orientation: [0.0, 0.0, 0.7071068, 0.7071068]\n",
        )
        .unwrap();
        let mf = cfg.filter.build::<f64>();

        assert_eq!(
            mf.orientation(),
            Quaterniond::from([0.0, 0.0, 0.7071068, 0.7071068])
        );
        assert_relative_eq!(mf.orientation().epsilon(), 0.01);
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "sensor:\n  spi_device: /dev/spidev1.0\n  ncs_pin: 7").unwrap();

        let cfg = Config::load(f.path()).unwrap();
        assert_eq!(cfg.sensor.spi_device, "/dev/spidev1.0");
        assert_eq!(cfg.sensor.ncs_pin, 7);
        assert_eq!(cfg.filter, FilterConfig::default());
    }

    #[test]
    fn bad_files() {
        assert!(matches!(
            Config::load("/nonexistent/attitude.yaml"),
            Err(Error::Io(_))
        ));
        assert!(matches!(Config::from_yaml("filter: 7"), Err(Error::Config(_))));
        assert!(matches!(
            Config::from_yaml("filter: {sample_rate_hz: fast}"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            Config::from_yaml("filter:\n  sample_rate: 200.0\n"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_yaml("sensor:\n  ncs: 7\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn rejects_unusable_values() {
        for yaml in &[
            "filter:\n  sample_rate_hz: 0.0\n",
            "filter:\n  sample_rate_hz: -109.0\n",
            "filter:\n  epsilon: -1.0\n",
            "filter:\n  epsilon: 0.0\n",
        ] {
            let err = Config::from_yaml(yaml).unwrap_err();
            assert!(matches!(err, Error::InvalidConfig(_)), "{}: {}", yaml, err);
            assert!(!err.is_precondition());
        }

        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "filter:\n  sample_rate_hz: 0.0\n  epsilon: -1.0").unwrap();
        assert!(matches!(Config::load(f.path()), Err(Error::InvalidConfig(_))));

        assert!(Config::default().validate().is_ok());
    }
}
