//! Print conversions between Euler angles and quaternions.
//!
//! ```text
//! euler2quat --yaw 30 --pitch 0 --roll 10
//! euler2quat --x 0 --y 0 --z 0.2588 --w 0.9659
//! ```

use std::process;

use auto_args::AutoArgs;

use attitude::convert::Conversion;

/// Convert ZYX Euler angles in degrees to a quaternion, or a quaternion
/// `<x, y, z, w>` to Euler angles.
#[derive(Debug, AutoArgs)]
struct Args {
    /// Yaw in degrees
    yaw: Option<f64>,
    /// Pitch in degrees
    pitch: Option<f64>,
    /// Roll in degrees
    roll: Option<f64>,
    /// Quaternion x component
    x: Option<f64>,
    /// Quaternion y component
    y: Option<f64>,
    /// Quaternion z component
    z: Option<f64>,
    /// Quaternion scalar component
    w: Option<f64>,
}

fn main() {
    let args = Args::from_args();

    match Conversion::from_flags(
        [args.yaw, args.pitch, args.roll],
        [args.x, args.y, args.z, args.w],
    ) {
        Ok(conversion) => println!("{}", conversion),
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: euler2quat --yaw Y --pitch P --roll R");
            eprintln!("       euler2quat --x X --y Y --z Z --w W");
            process::exit(1);
        }
    }
}
