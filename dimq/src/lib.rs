//! Dimensional quantities with runtime unit parsing and checked arithmetic.
//!
//! `dimq` is the user-facing crate in this workspace. It re-exports the full
//! API from `dimq-core`: the [`Quantity`] value type, the [`Dimensions`]
//! exponent vector, the error taxonomy, and the free inverse-trigonometric
//! constructors.
//!
//! The core idea is: a value is always a `Quantity` — an `f64` magnitude in
//! SI base units plus an eight-component dimension vector. Units are parsed
//! from text at runtime, so the dimension rules are enforced on data whose
//! units are not known until the program runs.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to
//!   seconds), with the check deferred to runtime where it belongs for
//!   parsed data.
//! - Makes unit conversion explicit and dimension-checked
//!   (`value_in("mi/hr")`).
//! - Understands composite unit expressions with metric prefixes, rational
//!   exponents, and parenthesization.
//!
//! # Quick start
//!
//! Convert degrees to radians:
//!
//! ```rust
//! use dimq::Quantity;
//!
//! let a = Quantity::new(45.0, "deg")?;
//! assert!((a.value_in("rad")? - core::f64::consts::FRAC_PI_4).abs() < 1e-12);
//! # Ok::<(), dimq::Error>(())
//! ```
//!
//! Compose derived quantities and read them back in any compatible unit:
//!
//! ```rust
//! use dimq::Quantity;
//!
//! let mass = Quantity::new(10.0, "kg")?;
//! let accel = Quantity::new(9.81, "m/s^2")?;
//! let force = mass * accel;
//!
//! assert!((force.value_in("N")? - 98.1).abs() < 1e-9);
//! # Ok::<(), dimq::Error>(())
//! ```
//!
//! # Incorrect usage (runtime error)
//!
//! ```rust
//! use dimq::{Error, Quantity};
//!
//! let d = Quantity::new(1.0, "m")?;
//! let t = Quantity::new(1.0, "s")?;
//! assert!(matches!(d.try_add(&t), Err(Error::DimensionMismatch { .. })));
//! # Ok::<(), dimq::Error>(())
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support; a [`Quantity`] serializes as
//!   `{"value": …, "unit": "…"}`.
//!
//! # Panics and errors
//!
//! Fallible operations return [`Result`]. The `+`/`-` operators are sugar
//! that asserts dimension equality; prefer [`Quantity::try_add`] and
//! [`Quantity::try_sub`] for dimensions only known at runtime. Pure numeric
//! edge cases follow IEEE-754.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![forbid(unsafe_code)]

pub use dimq_core::*;
