//! # Gyroscope input
//! Reads angular rate from an MPU-9250 on a Linux SPI bus and feeds it to the
//! filter. The chip select line is a sysfs GPIO.
//!
//! Anything implementing [`GyroSource`] can drive [`propagate`], which is how
//! the loop is exercised without hardware.

use std::fmt::Debug;

use embedded_hal::blocking::delay::DelayMs;
use linux_embedded_hal as hal;

use hal::spidev::SpidevOptions;
use hal::sysfs_gpio::Direction;
use hal::{Delay, Pin, Spidev};
use mpu9250::{Marg, MargMeasurements, Mpu9250, SpiDevice};
use tracing::{debug, info};

use crate::config::SensorConfig;
use crate::error::{Error, Result};
use crate::madgwick::Madgwick;
use crate::math::radians_to_degrees;
use crate::vector::Vector3;

const SPI_MAX_SPEED_HZ: u32 = 1_000_000;
// sysfs takes a moment to create the exported pin
const EXPORT_POLL_MS: u16 = 10;
const EXPORT_ATTEMPTS: u32 = 50;

/// Angular velocity readings in rad/s, body frame.
pub trait GyroSource {
    fn read_gyro(&mut self) -> Result<Vector3<f32>>;
}

pub struct MpuPort {
    pub port: Mpu9250<SpiDevice<Spidev, Pin>, Marg>,
}

fn sensor_error<E: Debug>(e: E) -> Error {
    Error::Sensor(format!("{:?}", e))
}

/// Open the SPI device and bring the MPU-9250 up in MARG mode.
pub fn open_mpu_port(cfg: &SensorConfig) -> Result<MpuPort> {
    let mut spi = Spidev::open(&cfg.spi_device)?;
    let options = SpidevOptions::new().max_speed_hz(SPI_MAX_SPEED_HZ).build();
    spi.configure(&options)?;

    let ncs = Pin::new(cfg.ncs_pin);
    ncs.export().map_err(sensor_error)?;
    wait_until(|| ncs.is_exported(), EXPORT_ATTEMPTS, || Delay.delay_ms(EXPORT_POLL_MS))
        .map_err(|_| Error::Sensor(format!("GPIO {} was not exported", cfg.ncs_pin)))?;
    ncs.set_direction(Direction::High).map_err(sensor_error)?;

    let port = Mpu9250::marg_default(spi, ncs, &mut Delay).map_err(sensor_error)?;
    info!(device = %cfg.spi_device, ncs_pin = cfg.ncs_pin, "MPU-9250 ready");

    Ok(MpuPort { port })
}

/// Poll `ready` up to `attempts` times, calling `pause` between polls.
fn wait_until<R, P>(mut ready: R, attempts: u32, mut pause: P) -> std::result::Result<(), u32>
where
    R: FnMut() -> bool,
    P: FnMut(),
{
    for attempt in 0..attempts {
        if ready() {
            return Ok(());
        }
        debug!(attempt, "waiting for GPIO export");
        pause();
    }
    Err(attempts)
}

impl GyroSource for MpuPort {
    fn read_gyro(&mut self) -> Result<Vector3<f32>> {
        let all: MargMeasurements<[f32; 3]> = self.port.all().map_err(sensor_error)?;
        Ok(Vector3::new(all.gyro))
    }
}

/// Read one gyro sample, integrate it over `delta` seconds and return the
/// new Euler angles `<yaw, pitch, roll>` in degrees.
pub fn propagate<S: GyroSource>(
    source: &mut S,
    filter: &mut Madgwick<f32>,
    delta: f32,
) -> Result<Vector3<f32>> {
    let gyro = source.read_gyro()?;
    debug!(gyro = %gyro, "sample");

    filter.update_angular_orientation(&gyro, delta)?;
    let euler = filter.euler();

    Ok(Vector3::new([
        radians_to_degrees(euler[0]),
        radians_to_degrees(euler[1]),
        radians_to_degrees(euler[2]),
    ]))
}
