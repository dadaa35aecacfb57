//! A small kinematics walk-through: force, energy, and angles with
//! dimension checking at every step.

use dimq::{asin, Quantity};

fn main() -> Result<(), dimq::Error> {
    // F = m a, read back in pound-force.
    let mass = Quantity::new(10.0, "kg")?;
    let accel = Quantity::new(9.81, "m/s^2")?;
    let force = mass * accel;
    println!("{force} = {} lbf", force.value_in("lbf")?);

    // E = ½ m v², read back in kilowatt-hours.
    let speed = Quantity::new(100.0, "km/hr")?;
    let energy = 0.5 * force * Quantity::new(2.0, "m")? + 0.5 * mass * speed.powi(2);
    println!("energy: {} kWh", energy.value_in("kWh")?);

    // Recover a launch angle from a ratio of lengths.
    let rise = Quantity::new(1.0, "m")?;
    let slope = Quantity::new(2.0, "m")?;
    let angle = (rise / slope).asin()?;
    println!("angle: {} deg", angle.value_in("deg")?);

    // The same angle built from a bare scalar.
    let same = asin(0.5)?;
    assert_eq!(angle, same);

    Ok(())
}
