//! Print the quaternion for a rotation given as an angle about an axis.

use std::process;

use auto_args::AutoArgs;

use attitude::convert::axis_angle;

/// Build a rotation quaternion from an angle and an axis.
#[derive(Debug, AutoArgs)]
struct Args {
    /// Rotation angle in radians
    angle: f64,
    /// Axis x component
    x: f64,
    /// Axis y component
    y: f64,
    /// Axis z component
    z: f64,
}

fn main() {
    let args = Args::from_args();

    match axis_angle(args.angle, [args.x, args.y, args.z]) {
        Ok(q) => println!("{}", q),
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: quaternion --angle A --x X --y Y --z Z");
            process::exit(1);
        }
    }
}
