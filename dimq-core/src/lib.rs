//! Runtime dimensional analysis for physical quantities.
//!
//! `dimq-core` pairs every `f64` magnitude with a vector of dimension
//! exponents and checks the rules of dimensional analysis at runtime:
//!
//! - A [`Quantity`] is built from a scalar and a textual unit expression
//!   (`"m/s^2"`, `"kg*m^2/s^3"`) and stores its magnitude in SI base units.
//! - Arithmetic, powers, and transcendentals propagate the dimension vector;
//!   operations that would produce dimensional nonsense fail instead.
//! - [`Quantity::value_in`] reads the magnitude back in any dimensionally
//!   compatible unit.
//!
//! Most users should depend on `dimq` (the facade crate) unless they need
//! direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Unit-expression parsing against a built-in registry of symbols with
//!   metric-prefix support (`"us"`, `"GHz"`, `"mi/hr"` all resolve).
//! - Dimension checking for values whose units are only known at runtime —
//!   configuration files, user input, data pipelines.
//! - Angle tracked as a full base dimension, so `rad` and `deg` are
//!   first-class and the trigonometric operations can insist on angles.
//!
//! # What this crate does not try to solve
//!
//! - Compile-time dimensional analysis with zero-sized unit types; if the
//!   units are known statically, a typed-quantity crate is the better tool.
//! - Exact arithmetic (`Quantity` is `f64`) or uncertainty tracking.
//! - Offset temperature scales: temperature is kelvin on a ratio scale, and
//!   absolute °C/°F are deliberately unsupported.
//!
//! # Quick start
//!
//! ```rust
//! use dimq_core::Quantity;
//!
//! let distance = Quantity::new(10.0, "m")?;
//! let time = Quantity::new(2.0, "s")?;
//! let speed = distance / time;
//!
//! assert!((speed.value_in("mi/hr")? - 11.184681460272011).abs() < 1e-9);
//! assert!(speed.value_in("kg").is_err());
//! # Ok::<(), dimq_core::Error>(())
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support; a [`Quantity`] serializes as
//!   `{"value": …, "unit": "…"}` with its canonical base-unit string.
//!
//! # Panics and errors
//!
//! Every fallible operation returns [`Result`]; nothing is swallowed and
//! there is no global error state. The only panicking surface is the `+`/`-`
//! operator sugar, which asserts dimension equality — use
//! [`Quantity::try_add`]/[`Quantity::try_sub`] when dimensions are not known
//! statically. Numeric edge cases (division by a zero magnitude, `sqrt` of a
//! negative magnitude) follow IEEE-754 rather than erroring.
//!
//! # Concurrency
//!
//! All operations are pure functions over an immutable registry; everything
//! is `Send + Sync` and safe to call from any number of threads without
//! synchronization.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod error;
mod parse;
mod quantity;
mod registry;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{Dimensions, BASE_DIMENSIONS, BASE_SYMBOLS};
pub use error::{Error, ParseError, Result};
pub use quantity::{acos, asin, atan, Quantity};

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Crate-level smoke tests; the full suites live with their modules.
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn end_to_end_velocity_conversion() {
        let d = Quantity::new(10.0, "m").unwrap();
        let t = Quantity::new(2.0, "s").unwrap();
        let v = d / t;
        assert!((v.value_in("mi/hr").unwrap() - 11.184681460272011).abs() < 1e-9);
    }

    #[test]
    fn errors_are_distinguishable_at_the_crate_root() {
        let q = Quantity::new(1.0, "m").unwrap();
        assert!(matches!(q.value_in("zork"), Err(Error::Parse(_))));
        assert!(matches!(
            q.value_in("s"),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(matches!(q.ln(), Err(Error::Dimension { .. })));
        assert!(matches!(asin(2.0), Err(Error::Domain { .. })));
    }

    #[test]
    fn quantities_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Quantity>();
        assert_send_sync::<Dimensions>();
        assert_send_sync::<Error>();
    }
}
