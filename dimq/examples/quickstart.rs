//! Minimal end-to-end example: build quantities from unit strings, combine
//! them, and read the result back in another unit.

use dimq::Quantity;

fn main() -> Result<(), dimq::Error> {
    let distance = Quantity::new(10.0, "m")?;
    let time = Quantity::new(2.0, "s")?;

    let speed = distance / time;
    println!("{speed} = {} mi/hr", speed.value_in("mi/hr")?);

    let angle = Quantity::new(45.0, "deg")?;
    assert!((angle.value_in("rad")? - core::f64::consts::FRAC_PI_4).abs() < 1e-12);

    // Incompatible conversions fail instead of producing nonsense.
    assert!(speed.value_in("kg").is_err());

    Ok(())
}
