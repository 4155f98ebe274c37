use std::process;
use std::time::Instant;

use auto_args::AutoArgs;
use embedded_hal::blocking::delay::DelayUs;
use linux_embedded_hal::Delay;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use attitude::config::Config;
use attitude::sensor::{open_mpu_port, propagate};

/// Track the orientation of an MPU-9250 from its gyroscope.
#[derive(Debug, AutoArgs)]
struct Args {
    /// YAML configuration file
    config: Option<String>,
    /// Stop after this many samples
    samples: Option<u64>,
}

fn main() {
    let args = Args::from_args();

    let cfg = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("error reading {}: {}", path, e);
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level)),
        )
        .init();

    if let Err(e) = run(&cfg, args.samples) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cfg: &Config, samples: Option<u64>) -> attitude::Result<()> {
    let mut mpu = open_mpu_port(&cfg.sensor)?;
    let mut filter = cfg.filter.build::<f32>();
    let period_us = (cfg.filter.delta_t() * 1e6) as u32;
    info!(rate_hz = cfg.filter.sample_rate_hz, normalize = cfg.filter.normalize, "tracking");

    let mut last = Instant::now();
    let mut count = 0;
    loop {
        Delay.delay_us(period_us);
        let delta = last.elapsed().as_secs_f32();
        last = Instant::now();

        match propagate(&mut mpu, &mut filter, delta) {
            Ok(euler) => info!(yaw = euler[0], pitch = euler[1], roll = euler[2], "orientation"),
            Err(e) if e.is_precondition() => warn!("skipping sample: {}", e),
            Err(e) => return Err(e),
        }

        count += 1;
        if samples == Some(count) {
            info!(norm = filter.orientation().norm(), "done after {} samples", count);
            return Ok(());
        }
    }
}
