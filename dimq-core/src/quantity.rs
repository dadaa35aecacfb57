//! The `Quantity` value type and its dimension-aware operations.
//!
//! A [`Quantity`] is a binary64 magnitude held in SI base units together with
//! its [`Dimensions`] vector. Construction parses a unit expression and folds
//! the unit's scale into the stored value, so `Quantity::new(10.0, "km")`
//! holds `10_000.0` with a length signature. Every operation returns a new
//! quantity; nothing mutates its inputs.
//!
//! Fallible operations (`try_add`, `value_in`, `powf`, the transcendentals)
//! return [`Result`] and surface the precise failure kind. The arithmetic
//! operators are sugar over the same semantics: `*` and `/` are total, while
//! `+` and `-` panic on mismatched dimensions — use `try_add`/`try_sub` when
//! the dimensions are not known statically.
//!
//! Division by a zero-valued quantity is not a domain error of this library;
//! values follow IEEE-754 and produce infinities or NaN exactly as `f64`
//! does.

use crate::dimension::Dimensions;
use crate::error::{Error, Result};
use crate::parse;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A magnitude in SI base units paired with its dimension vector.
///
/// ```rust
/// use dimq_core::Quantity;
///
/// let distance = Quantity::new(10.0, "m")?;
/// let time = Quantity::new(2.0, "s")?;
/// let speed = distance / time;
/// assert!((speed.value_in("mi/hr")? - 11.184681460272012).abs() < 1e-9);
/// # Ok::<(), dimq_core::Error>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity {
    value: f64,
    dims: Dimensions,
}

impl Quantity {
    /// Parses `unit` and stores `value` converted to SI base units.
    ///
    /// ```rust
    /// use dimq_core::Quantity;
    ///
    /// let d = Quantity::new(1.0, "km")?;
    /// assert_eq!(d.value(), 1000.0);
    /// # Ok::<(), dimq_core::Error>(())
    /// ```
    pub fn new(value: f64, unit: &str) -> Result<Self> {
        let unit = parse::parse(unit)?;
        Ok(Quantity {
            value: value * unit.scale,
            dims: unit.dims,
        })
    }

    /// Builds a quantity directly from an SI-base magnitude and dimensions.
    #[inline]
    pub(crate) const fn from_raw(value: f64, dims: Dimensions) -> Self {
        Quantity { value, dims }
    }

    /// The magnitude in SI base units.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The dimension vector.
    #[inline]
    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// True iff every dimension exponent is zero.
    #[inline]
    pub fn is_unitless(&self) -> bool {
        self.dims.is_dimensionless()
    }

    /// The magnitude expressed in `unit`.
    ///
    /// Fails with a parse error when `unit` is malformed and with
    /// [`Error::DimensionMismatch`] when `unit` has different dimensions from
    /// this quantity. The empty unit string is accepted iff the quantity is
    /// dimensionless.
    ///
    /// ```rust
    /// use dimq_core::Quantity;
    ///
    /// let angle = Quantity::new(45.0, "deg")?;
    /// assert!((angle.value_in("rad")? - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    /// assert!(angle.value_in("kg").is_err());
    /// # Ok::<(), dimq_core::Error>(())
    /// ```
    pub fn value_in(&self, unit: &str) -> Result<f64> {
        let target = parse::parse(unit)?;
        if target.dims != self.dims {
            return Err(Error::DimensionMismatch {
                left: self.dims,
                right: target.dims,
            });
        }
        Ok(self.value / target.scale)
    }

    fn require_same_dims(&self, other: &Quantity) -> Result<()> {
        if self.dims != other.dims {
            return Err(Error::DimensionMismatch {
                left: self.dims,
                right: other.dims,
            });
        }
        Ok(())
    }

    fn require_dimensionless(&self, operation: &'static str) -> Result<()> {
        if !self.dims.is_dimensionless() {
            return Err(Error::Dimension {
                operation,
                requirement: "dimensionless",
                dims: self.dims,
            });
        }
        Ok(())
    }

    /// Sum of two quantities with identical dimensions.
    pub fn try_add(&self, other: &Quantity) -> Result<Quantity> {
        self.require_same_dims(other)?;
        Ok(Quantity::from_raw(self.value + other.value, self.dims))
    }

    /// Difference of two quantities with identical dimensions.
    pub fn try_sub(&self, other: &Quantity) -> Result<Quantity> {
        self.require_same_dims(other)?;
        Ok(Quantity::from_raw(self.value - other.value, self.dims))
    }

    /// `self < other`, failing when the dimensions differ. NaN magnitudes
    /// compare false, as for `f64`.
    pub fn try_lt(&self, other: &Quantity) -> Result<bool> {
        self.require_same_dims(other)?;
        Ok(self.value < other.value)
    }

    /// `self <= other`, failing when the dimensions differ.
    pub fn try_le(&self, other: &Quantity) -> Result<bool> {
        self.require_same_dims(other)?;
        Ok(self.value <= other.value)
    }

    /// `self > other`, failing when the dimensions differ.
    pub fn try_gt(&self, other: &Quantity) -> Result<bool> {
        self.require_same_dims(other)?;
        Ok(self.value > other.value)
    }

    /// `self >= other`, failing when the dimensions differ.
    pub fn try_ge(&self, other: &Quantity) -> Result<bool> {
        self.require_same_dims(other)?;
        Ok(self.value >= other.value)
    }

    // ---- Powers and roots ----

    /// Integer power: the value is raised to `exp` and every dimension
    /// exponent is multiplied by it. Total.
    ///
    /// ```rust
    /// use dimq_core::Quantity;
    ///
    /// let area = Quantity::new(3.0, "m")?.powi(2);
    /// assert_eq!(area.value_in("m^2")?, 9.0);
    /// # Ok::<(), dimq_core::Error>(())
    /// ```
    pub fn powi(&self, exp: i32) -> Quantity {
        Quantity::from_raw(self.value.powi(exp), self.dims.pow(f64::from(exp)))
    }

    /// Floating power. Succeeds for dimensionless input, or when `exp` is
    /// integer-valued to within `2⁻⁵²·|exp|`; dimension exponents are
    /// multiplied by `exp` as given.
    pub fn powf(&self, exp: f64) -> Result<Quantity> {
        if self.dims.is_dimensionless() {
            return Ok(Quantity::from_raw(self.value.powf(exp), Dimensions::NONE));
        }
        let integral = (exp - exp.round()).abs() <= f64::EPSILON * exp.abs();
        if !integral {
            return Err(Error::Dimension {
                operation: "powf",
                requirement: "dimensionless (for a non-integer exponent)",
                dims: self.dims,
            });
        }
        Ok(Quantity::from_raw(self.value.powf(exp), self.dims.pow(exp)))
    }

    /// Square root. Fails when any dimension exponent is an odd integer;
    /// even exponents halve to integers and rational exponents halve
    /// exactly. The value follows IEEE-754 (`sqrt` of a negative magnitude
    /// is NaN).
    ///
    /// ```rust
    /// use dimq_core::Quantity;
    ///
    /// let side = Quantity::new(4.0, "m^2")?.sqrt()?;
    /// assert_eq!(side.value_in("m")?, 2.0);
    /// assert!(Quantity::new(2.0, "m")?.sqrt().is_err());
    /// # Ok::<(), dimq_core::Error>(())
    /// ```
    pub fn sqrt(&self) -> Result<Quantity> {
        let odd = self
            .dims
            .exponents()
            .iter()
            .any(|&e| e.fract() == 0.0 && e % 2.0 != 0.0);
        if odd {
            return Err(Error::Dimension {
                operation: "sqrt",
                requirement: "even-exponent",
                dims: self.dims,
            });
        }
        Ok(Quantity::from_raw(self.value.sqrt(), self.dims.pow(0.5)))
    }

    // ---- Logarithms and exponentials (dimensionless only) ----

    /// Natural logarithm of a dimensionless quantity.
    pub fn ln(&self) -> Result<Quantity> {
        self.require_dimensionless("ln")?;
        Ok(Quantity::from_raw(self.value.ln(), Dimensions::NONE))
    }

    /// Base-2 logarithm of a dimensionless quantity.
    pub fn log2(&self) -> Result<Quantity> {
        self.require_dimensionless("log2")?;
        Ok(Quantity::from_raw(self.value.log2(), Dimensions::NONE))
    }

    /// Base-10 logarithm of a dimensionless quantity.
    pub fn log10(&self) -> Result<Quantity> {
        self.require_dimensionless("log10")?;
        Ok(Quantity::from_raw(self.value.log10(), Dimensions::NONE))
    }

    /// Exponential of a dimensionless quantity.
    pub fn exp(&self) -> Result<Quantity> {
        self.require_dimensionless("exp")?;
        Ok(Quantity::from_raw(self.value.exp(), Dimensions::NONE))
    }

    // ---- Trigonometry ----

    fn require_angle_or_dimensionless(&self, operation: &'static str) -> Result<()> {
        if !self.dims.is_dimensionless() && !self.dims.is_pure_angle() {
            return Err(Error::Dimension {
                operation,
                requirement: "dimensionless or pure-angle",
                dims: self.dims,
            });
        }
        Ok(())
    }

    /// Sine. Accepts a dimensionless or pure-angle quantity, reads the
    /// magnitude in radians, and returns a dimensionless result.
    ///
    /// ```rust
    /// use dimq_core::Quantity;
    ///
    /// let angle = Quantity::new(90.0, "deg")?;
    /// assert!((angle.sin()?.value() - 1.0).abs() < 1e-12);
    /// # Ok::<(), dimq_core::Error>(())
    /// ```
    pub fn sin(&self) -> Result<Quantity> {
        self.require_angle_or_dimensionless("sin")?;
        Ok(Quantity::from_raw(self.value.sin(), Dimensions::NONE))
    }

    /// Cosine. Same argument rules as [`Quantity::sin`].
    pub fn cos(&self) -> Result<Quantity> {
        self.require_angle_or_dimensionless("cos")?;
        Ok(Quantity::from_raw(self.value.cos(), Dimensions::NONE))
    }

    /// Tangent. Same argument rules as [`Quantity::sin`].
    pub fn tan(&self) -> Result<Quantity> {
        self.require_angle_or_dimensionless("tan")?;
        Ok(Quantity::from_raw(self.value.tan(), Dimensions::NONE))
    }

    /// Arc sine of a dimensionless quantity; the result is a pure angle in
    /// radians. Fails with [`Error::Domain`] when the magnitude lies outside
    /// `[-1, 1]`.
    pub fn asin(&self) -> Result<Quantity> {
        self.require_dimensionless("asin")?;
        asin(self.value)
    }

    /// Arc cosine of a dimensionless quantity; the result is a pure angle in
    /// radians. Fails with [`Error::Domain`] when the magnitude lies outside
    /// `[-1, 1]`.
    pub fn acos(&self) -> Result<Quantity> {
        self.require_dimensionless("acos")?;
        acos(self.value)
    }

    /// Arc tangent of a dimensionless quantity; the result is a pure angle
    /// in radians.
    pub fn atan(&self) -> Result<Quantity> {
        self.require_dimensionless("atan")?;
        atan(self.value)
    }

    // ---- Sign helpers ----

    /// Negated magnitude, same dimensions.
    pub fn neg(&self) -> Quantity {
        Quantity::from_raw(-self.value, self.dims)
    }

    /// Absolute magnitude, same dimensions.
    pub fn abs(&self) -> Quantity {
        Quantity::from_raw(self.value.abs(), self.dims)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Free inverse-trigonometric constructors
// ─────────────────────────────────────────────────────────────────────────────

/// Arc sine of a bare scalar, returned as a pure-angle quantity in radians.
///
/// ```rust
/// let angle = dimq_core::asin(0.5)?;
/// assert!((angle.value_in("deg")? - 30.0).abs() < 1e-9);
/// # Ok::<(), dimq_core::Error>(())
/// ```
pub fn asin(x: f64) -> Result<Quantity> {
    if x.abs() > 1.0 {
        return Err(Error::Domain {
            operation: "asin",
            value: x,
        });
    }
    Ok(Quantity::from_raw(x.asin(), Dimensions::ANGLE))
}

/// Arc cosine of a bare scalar, returned as a pure-angle quantity in radians.
pub fn acos(x: f64) -> Result<Quantity> {
    if x.abs() > 1.0 {
        return Err(Error::Domain {
            operation: "acos",
            value: x,
        });
    }
    Ok(Quantity::from_raw(x.acos(), Dimensions::ANGLE))
}

/// Arc tangent of a bare scalar, returned as a pure-angle quantity in
/// radians. Total over the reals.
pub fn atan(x: f64) -> Result<Quantity> {
    Ok(Quantity::from_raw(x.atan(), Dimensions::ANGLE))
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

// Binary operators carry their logic in the reference impls; the owned
// variants delegate so every ownership combination works.

impl Add<&Quantity> for &Quantity {
    type Output = Quantity;
    fn add(self, rhs: &Quantity) -> Quantity {
        assert!(
            self.dims == rhs.dims,
            "incompatible dimensions for addition: {} vs {}",
            self.dims,
            rhs.dims
        );
        Quantity::from_raw(self.value + rhs.value, self.dims)
    }
}

impl Sub<&Quantity> for &Quantity {
    type Output = Quantity;
    fn sub(self, rhs: &Quantity) -> Quantity {
        assert!(
            self.dims == rhs.dims,
            "incompatible dimensions for subtraction: {} vs {}",
            self.dims,
            rhs.dims
        );
        Quantity::from_raw(self.value - rhs.value, self.dims)
    }
}

impl Mul<&Quantity> for &Quantity {
    type Output = Quantity;
    fn mul(self, rhs: &Quantity) -> Quantity {
        Quantity::from_raw(self.value * rhs.value, self.dims.multiply(&rhs.dims))
    }
}

impl Div<&Quantity> for &Quantity {
    type Output = Quantity;
    fn div(self, rhs: &Quantity) -> Quantity {
        Quantity::from_raw(self.value / rhs.value, self.dims.divide(&rhs.dims))
    }
}

macro_rules! delegate_binary_ops {
    ($($trait:ident :: $method:ident),* $(,)?) => {$(
        impl $trait<Quantity> for Quantity {
            type Output = Quantity;
            fn $method(self, rhs: Quantity) -> Quantity {
                $trait::$method(&self, &rhs)
            }
        }
        impl $trait<&Quantity> for Quantity {
            type Output = Quantity;
            fn $method(self, rhs: &Quantity) -> Quantity {
                $trait::$method(&self, rhs)
            }
        }
        impl $trait<Quantity> for &Quantity {
            type Output = Quantity;
            fn $method(self, rhs: Quantity) -> Quantity {
                $trait::$method(self, &rhs)
            }
        }
    )*};
}

delegate_binary_ops!(Add::add, Sub::sub, Mul::mul, Div::div);

impl AddAssign<Quantity> for Quantity {
    fn add_assign(&mut self, rhs: Quantity) {
        *self = &*self + &rhs;
    }
}

impl AddAssign<&Quantity> for Quantity {
    fn add_assign(&mut self, rhs: &Quantity) {
        *self = &*self + rhs;
    }
}

impl SubAssign<Quantity> for Quantity {
    fn sub_assign(&mut self, rhs: Quantity) {
        *self = &*self - &rhs;
    }
}

impl SubAssign<&Quantity> for Quantity {
    fn sub_assign(&mut self, rhs: &Quantity) {
        *self = &*self - rhs;
    }
}

impl MulAssign<Quantity> for Quantity {
    fn mul_assign(&mut self, rhs: Quantity) {
        *self = &*self * &rhs;
    }
}

impl DivAssign<Quantity> for Quantity {
    fn div_assign(&mut self, rhs: Quantity) {
        *self = &*self / &rhs;
    }
}

// Scalar operators: value scaled, dimensions preserved — except `k / q`,
// which negates the dimensions.

impl Mul<f64> for &Quantity {
    type Output = Quantity;
    fn mul(self, rhs: f64) -> Quantity {
        Quantity::from_raw(self.value * rhs, self.dims)
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: f64) -> Quantity {
        &self * rhs
    }
}

impl Mul<&Quantity> for f64 {
    type Output = Quantity;
    fn mul(self, rhs: &Quantity) -> Quantity {
        rhs * self
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;
    fn mul(self, rhs: Quantity) -> Quantity {
        &rhs * self
    }
}

impl Div<f64> for &Quantity {
    type Output = Quantity;
    fn div(self, rhs: f64) -> Quantity {
        Quantity::from_raw(self.value / rhs, self.dims)
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;
    fn div(self, rhs: f64) -> Quantity {
        &self / rhs
    }
}

impl Div<&Quantity> for f64 {
    type Output = Quantity;
    fn div(self, rhs: &Quantity) -> Quantity {
        Quantity::from_raw(self / rhs.value, rhs.dims.invert())
    }
}

impl Div<Quantity> for f64 {
    type Output = Quantity;
    fn div(self, rhs: Quantity) -> Quantity {
        self / &rhs
    }
}

impl MulAssign<f64> for Quantity {
    fn mul_assign(&mut self, rhs: f64) {
        self.value *= rhs;
    }
}

impl DivAssign<f64> for Quantity {
    fn div_assign(&mut self, rhs: f64) {
        self.value /= rhs;
    }
}

impl Neg for &Quantity {
    type Output = Quantity;
    fn neg(self) -> Quantity {
        Quantity::from_raw(-self.value, self.dims)
    }
}

impl Neg for Quantity {
    type Output = Quantity;
    fn neg(self) -> Quantity {
        -&self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparisons
// ─────────────────────────────────────────────────────────────────────────────

/// Quantities of different dimensions are never equal; otherwise equality is
/// `f64` equality on the SI-base magnitude (so NaN is never equal to itself).
impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.dims == other.dims && self.value == other.value
    }
}

/// Ordering is defined only between quantities of identical dimensions;
/// `partial_cmp` returns `None` otherwise (and for NaN magnitudes), so the
/// `<`/`<=`/`>`/`>=` operators evaluate false across dimensions.
impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.dims != other.dims {
            return None;
        }
        self.value.partial_cmp(&other.value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// Renders `"<value> <unit>"` with the canonical base-unit reconstruction of
/// the dimension vector; a dimensionless quantity renders its value alone.
///
/// ```rust
/// use dimq_core::Quantity;
///
/// let speed = Quantity::new(2.0, "km/s")?;
/// assert_eq!(speed.to_string(), "2000 m/s");
/// # Ok::<(), dimq_core::Error>(())
/// ```
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dims.is_dimensionless() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.dims)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Quantity;
    use serde::de::Error as _;
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serializes as `{"value": <f64>, "unit": "<canonical unit>"}` where the
    /// unit string is the base-unit reconstruction of the dimension vector.
    impl Serialize for Quantity {
        fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut state = serializer.serialize_struct("Quantity", 2)?;
            state.serialize_field("value", &self.value())?;
            let unit = if self.is_unitless() {
                String::new()
            } else {
                self.dimensions().to_string()
            };
            state.serialize_field("unit", &unit)?;
            state.end()
        }
    }

    #[derive(Deserialize)]
    struct QuantityRepr {
        value: f64,
        #[serde(default)]
        unit: String,
    }

    /// Deserializes from the same shape, running the unit string through the
    /// normal parser so dimensional safety holds on input too.
    impl<'de> Deserialize<'de> for Quantity {
        fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let repr = QuantityRepr::deserialize(deserializer)?;
            Quantity::new(repr.value, &repr.unit).map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn q(value: f64, unit: &str) -> Quantity {
        Quantity::new(value, unit).unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction and inspection
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn construction_folds_scale_into_value() {
        assert_eq!(q(1.0, "km").value(), 1000.0);
        assert_eq!(q(2.0, "hr").value(), 7200.0);
        assert_relative_eq!(q(45.0, "deg").value(), FRAC_PI_4, max_relative = 1e-15);
    }

    #[test]
    fn construction_rejects_malformed_units() {
        assert!(matches!(
            Quantity::new(1.0, "florps"),
            Err(Error::Parse(ParseError::UnknownSymbol { .. }))
        ));
        assert!(matches!(
            Quantity::new(1.0, "m^"),
            Err(Error::Parse(ParseError::Syntax { .. }))
        ));
    }

    #[test]
    fn unitless_predicate() {
        assert!(q(2.0, "").is_unitless());
        assert!(q(2.0, "1").is_unitless());
        assert!(!q(2.0, "m").is_unitless());
        // Angle is a tracked dimension, so radians are not unitless.
        assert!(!q(1.0, "rad").is_unitless());
    }

    #[test]
    fn dimensions_exposes_the_vector() {
        let accel = q(9.81, "m/s^2");
        assert_eq!(
            accel.dimensions(),
            Dimensions::new([1.0, 0.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0])
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn value_in_roundtrips_construction() {
        let d = q(12.5, "ft");
        assert_relative_eq!(d.value_in("ft").unwrap(), 12.5, max_relative = 1e-12);
        assert_relative_eq!(d.value_in("in").unwrap(), 150.0, max_relative = 1e-12);
    }

    #[test]
    fn value_in_distinguishes_parse_and_mismatch_failures() {
        let d = q(1.0, "m");
        assert!(matches!(d.value_in("zorgs"), Err(Error::Parse(_))));
        assert!(matches!(
            d.value_in("s"),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn empty_target_unit_requires_dimensionless() {
        assert_eq!(q(3.5, "").value_in("").unwrap(), 3.5);
        assert!(matches!(
            q(3.5, "m").value_in(""),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn equivalent_spellings_convert() {
        let force = q(1.0, "N");
        assert_relative_eq!(force.value_in("kg*m/s^2").unwrap(), 1.0, max_relative = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Additive arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn try_add_requires_matching_dimensions() {
        let sum = q(1.0, "km").try_add(&q(500.0, "m")).unwrap();
        assert_eq!(sum.value(), 1500.0);
        assert_eq!(sum.dimensions(), Dimensions::LENGTH);

        assert!(matches!(
            q(1.0, "m").try_add(&q(1.0, "s")),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn try_sub_requires_matching_dimensions() {
        let diff = q(1.0, "min").try_sub(&q(30.0, "s")).unwrap();
        assert_eq!(diff.value(), 30.0);

        assert!(matches!(
            q(1.0, "m").try_sub(&q(1.0, "kg")),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn operator_add_sub() {
        let a = q(2.0, "m");
        let b = q(3.0, "m");
        assert_eq!((a + b).value(), 5.0);
        assert_eq!((&a - &b).value(), -1.0);

        let mut acc = q(1.0, "J");
        acc += q(2.0, "J");
        acc -= q(0.5, "J");
        assert_eq!(acc.value(), 2.5);
    }

    #[test]
    #[should_panic(expected = "incompatible dimensions for addition")]
    fn operator_add_panics_on_mismatch() {
        let _ = q(1.0, "m") + q(1.0, "s");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Multiplicative arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn mul_and_div_combine_dimensions() {
        let distance = q(10.0, "m");
        let time = q(2.0, "s");

        let speed = &distance / &time;
        assert_eq!(speed.value(), 5.0);
        assert_eq!(
            speed.dimensions(),
            Dimensions::new([1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0])
        );

        let back = speed * time;
        assert_eq!(back.dimensions(), Dimensions::LENGTH);
        assert_eq!(back.value(), 10.0);
    }

    #[test]
    fn division_by_zero_value_follows_ieee() {
        let zero = q(0.0, "s");
        let ratio = q(1.0, "m") / zero;
        assert!(ratio.value().is_infinite());
    }

    #[test]
    fn scalar_operations() {
        let d = q(2.0, "m");
        assert_eq!((d * 3.0).value(), 6.0);
        assert_eq!((3.0 * d).value(), 6.0);
        assert_eq!((d / 2.0).value(), 1.0);
        assert_eq!((d * 3.0).dimensions(), d.dimensions());

        let mut m = q(4.0, "kg");
        m *= 0.5;
        m /= 2.0;
        assert_eq!(m.value(), 1.0);
    }

    #[test]
    fn scalar_rdiv_inverts_dimensions() {
        let t = q(4.0, "s");
        let rate = 2.0 / t;
        assert_eq!(rate.value(), 0.5);
        assert_eq!(rate.dimensions(), Dimensions::TIME.invert());
        assert_relative_eq!(rate.value_in("Hz").unwrap(), 0.5, max_relative = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Powers and roots
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn powi_scales_dimensions() {
        let volume = q(2.0, "m").powi(3);
        assert_eq!(volume.value(), 8.0);
        assert_eq!(volume.dimensions(), Dimensions::LENGTH.pow(3.0));

        let inverse = q(2.0, "s").powi(-1);
        assert_eq!(inverse.value(), 0.5);
        assert_eq!(inverse.dimensions(), Dimensions::TIME.invert());
    }

    #[test]
    fn powf_on_dimensionless_accepts_any_exponent() {
        let x = q(2.0, "").powf(0.5).unwrap();
        assert_relative_eq!(x.value(), 2.0_f64.sqrt(), max_relative = 1e-15);
        assert!(x.is_unitless());
    }

    #[test]
    fn powf_on_dimensioned_requires_integral_exponent() {
        let area = q(3.0, "m").powf(2.0).unwrap();
        assert_eq!(area.dimensions(), Dimensions::LENGTH.pow(2.0));

        assert!(matches!(
            q(3.0, "m").powf(0.5),
            Err(Error::Dimension { .. })
        ));
        assert!(matches!(
            q(3.0, "m").powf(f64::NAN),
            Err(Error::Dimension { .. })
        ));
    }

    #[test]
    fn sqrt_halves_even_exponents() {
        let side = q(4.0, "m^2").sqrt().unwrap();
        assert_eq!(side.value(), 2.0);
        assert_eq!(side.dimensions(), Dimensions::LENGTH);
    }

    #[test]
    fn sqrt_rejects_odd_exponents() {
        assert!(matches!(q(4.0, "m").sqrt(), Err(Error::Dimension { .. })));
        assert!(matches!(q(4.0, "m^3").sqrt(), Err(Error::Dimension { .. })));
    }

    #[test]
    fn sqrt_halves_rational_exponents() {
        let root = q(16.0, "m^(3/2)").sqrt().unwrap();
        assert_eq!(root.dimensions().exponents()[0], 0.75);
        assert_eq!(root.value(), 4.0);
    }

    #[test]
    fn sqrt_of_negative_value_is_nan() {
        assert!(q(-1.0, "m^2").sqrt().unwrap().value().is_nan());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Logarithms and exponentials
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn logs_require_dimensionless_input() {
        assert_relative_eq!(
            q(2.0, "").ln().unwrap().value(),
            core::f64::consts::LN_2,
            max_relative = 1e-15
        );
        assert_relative_eq!(q(8.0, "").log2().unwrap().value(), 3.0, max_relative = 1e-12);
        assert_relative_eq!(q(1000.0, "").log10().unwrap().value(), 3.0, max_relative = 1e-12);

        for op in [Quantity::ln, Quantity::log2, Quantity::log10, Quantity::exp] {
            assert!(matches!(op(&q(2.0, "m")), Err(Error::Dimension { .. })));
        }
    }

    #[test]
    fn exp_of_dimensionless() {
        assert_relative_eq!(
            q(1.0, "").exp().unwrap().value(),
            core::f64::consts::E,
            max_relative = 1e-15
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Trigonometry
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn trig_accepts_pure_angles_and_dimensionless() {
        assert_abs_diff_eq!(q(90.0, "deg").sin().unwrap().value(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q(PI, "rad").cos().unwrap().value(), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            q(FRAC_PI_4, "").tan().unwrap().value(),
            1.0,
            epsilon = 1e-12
        );
        assert!(q(1.0, "rad").sin().unwrap().is_unitless());
    }

    #[test]
    fn trig_rejects_other_dimensions() {
        assert!(matches!(q(1.0, "m").sin(), Err(Error::Dimension { .. })));
        assert!(matches!(q(1.0, "rad*s").cos(), Err(Error::Dimension { .. })));
    }

    #[test]
    fn inverse_trig_returns_pure_angles() {
        let angle = q(0.5, "").asin().unwrap();
        assert!(angle.dimensions().is_pure_angle());
        assert_relative_eq!(angle.value_in("deg").unwrap(), 30.0, max_relative = 1e-12);

        let right = q(0.0, "").acos().unwrap();
        assert_abs_diff_eq!(right.value(), FRAC_PI_2, epsilon = 1e-15);

        let diag = q(1.0, "").atan().unwrap();
        assert_abs_diff_eq!(diag.value(), FRAC_PI_4, epsilon = 1e-15);
    }

    #[test]
    fn inverse_trig_domain_errors() {
        assert!(matches!(q(2.0, "").asin(), Err(Error::Domain { .. })));
        assert!(matches!(q(-1.5, "").acos(), Err(Error::Domain { .. })));
        assert!(matches!(asin(2.0), Err(Error::Domain { .. })));
        assert!(matches!(acos(-2.0), Err(Error::Domain { .. })));
    }

    #[test]
    fn inverse_trig_rejects_dimensioned_input() {
        assert!(matches!(q(0.5, "m").asin(), Err(Error::Dimension { .. })));
        // A pure angle is not dimensionless for the inverse functions.
        assert!(matches!(q(0.5, "rad").asin(), Err(Error::Dimension { .. })));
    }

    #[test]
    fn free_inverse_trig_constructors() {
        let angle = asin(0.5).unwrap();
        assert!(angle.dimensions().is_pure_angle());
        assert_abs_diff_eq!(angle.value_in("deg").unwrap(), 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(atan(1.0).unwrap().value(), FRAC_PI_4, epsilon = 1e-15);
        assert_abs_diff_eq!(acos(1.0).unwrap().value(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn sin_then_asin_roundtrip() {
        let original = q(0.4, "rad");
        let ratio = original.sin().unwrap();
        let back = ratio.asin().unwrap();
        assert_relative_eq!(back.value_in("rad").unwrap(), 0.4, max_relative = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Sign helpers
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn neg_and_abs_preserve_dimensions() {
        let d = q(-3.0, "m");
        assert_eq!(d.neg().value(), 3.0);
        assert_eq!((-d).value(), 3.0);
        assert_eq!(d.abs().value(), 3.0);
        assert_eq!(d.abs().dimensions(), Dimensions::LENGTH);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparisons
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn equality_requires_identical_dimensions() {
        assert_eq!(q(1.0, "km"), q(1000.0, "m"));
        assert_ne!(q(1.0, "m"), q(1.0, "s"));
        assert_ne!(q(1.0, "m"), q(2.0, "m"));
        // NaN is never equal to itself.
        assert_ne!(q(f64::NAN, "m"), q(f64::NAN, "m"));
    }

    #[test]
    fn ordering_within_a_dimension() {
        assert!(q(1.0, "m") < q(1.0, "km"));
        assert!(q(2.0, "hr") >= q(7200.0, "s"));
        assert!(q(1.0, "m").try_lt(&q(2.0, "m")).unwrap());
        assert!(!q(1.0, "m").try_gt(&q(2.0, "m")).unwrap());
        assert!(q(2.0, "m").try_ge(&q(2.0, "m")).unwrap());
        assert!(q(2.0, "m").try_le(&q(2.0, "m")).unwrap());
    }

    #[test]
    fn ordering_across_dimensions_fails() {
        assert!(matches!(
            q(1.0, "m").try_lt(&q(1.0, "s")),
            Err(Error::DimensionMismatch { .. })
        ));
        // Operator comparisons evaluate false both ways.
        assert!(!(q(1.0, "m") < q(1.0, "s")));
        assert!(!(q(1.0, "m") > q(1.0, "s")));
    }

    #[test]
    fn nan_ordering_is_false() {
        assert!(!(q(f64::NAN, "m") < q(1.0, "m")));
        assert!(!q(f64::NAN, "m").try_lt(&q(1.0, "m")).unwrap());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_renders_canonical_units() {
        assert_eq!(q(5.0, "m/s^2").to_string(), "5 m/s^2");
        assert_eq!(q(2.5, "").to_string(), "2.5");
        assert_eq!(q(1.0, "kW*hr").to_string(), "3600000 m^2*kg/s^2");
    }

    #[test]
    fn display_of_derived_units_expands_to_base() {
        assert_eq!(q(1.0, "Hz").to_string(), "1 1/s");
        assert_eq!(q(1.0, "N").to_string(), "1 m*kg/s^2");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Serde round-trips
    // ─────────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn serializes_value_with_canonical_unit() {
            let json = serde_json::to_string(&q(5.0, "km")).unwrap();
            assert_eq!(json, r#"{"value":5000.0,"unit":"m"}"#);
        }

        #[test]
        fn deserializes_through_the_parser() {
            let back: Quantity = serde_json::from_str(r#"{"value":2.0,"unit":"km"}"#).unwrap();
            assert_eq!(back, q(2.0, "km"));
        }

        #[test]
        fn roundtrips_fractional_exponents() {
            let original = q(16.0, "m^(3/2)");
            let json = serde_json::to_string(&original).unwrap();
            let back: Quantity = serde_json::from_str(&json).unwrap();
            assert_eq!(back, original);
        }

        #[test]
        fn rejects_unknown_units() {
            let result: core::result::Result<Quantity, _> =
                serde_json::from_str(r#"{"value":1.0,"unit":"blorp"}"#);
            assert!(result.is_err());
        }

        #[test]
        fn missing_unit_field_means_dimensionless() {
            let back: Quantity = serde_json::from_str(r#"{"value":4.5}"#).unwrap();
            assert!(back.is_unitless());
            assert_eq!(back.value(), 4.5);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    fn arb_unit() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![
            "m", "km", "kg", "s", "hr", "m/s", "m/s^2", "kg*m^2/s^3", "deg", "N", "J",
        ])
    }

    proptest! {
        #[test]
        fn prop_construction_roundtrip(x in -1e9..1e9f64, unit in arb_unit()) {
            let value = Quantity::new(x, unit).unwrap().value_in(unit).unwrap();
            prop_assert!((value - x).abs() <= 1e-12 * x.abs().max(1.0));
        }

        #[test]
        fn prop_scalar_identity(x in -1e9..1e9f64, unit in arb_unit()) {
            let original = Quantity::new(x, unit).unwrap();
            prop_assert_eq!(original * 1.0, original);
            let zeroed = original * 0.0;
            prop_assert_eq!(zeroed.value(), 0.0);
            prop_assert_eq!(zeroed.dimensions(), original.dimensions());
        }

        #[test]
        fn prop_add_then_sub_is_identity(a in -1e6..1e6f64, b in -1e6..1e6f64, unit in arb_unit()) {
            let qa = Quantity::new(a, unit).unwrap();
            let qb = Quantity::new(b, unit).unwrap();
            let back = qa.try_add(&qb).unwrap().try_sub(&qb).unwrap();
            prop_assert_eq!(back.dimensions(), qa.dimensions());
            prop_assert!((back.value() - qa.value()).abs() <= 1e-9 * qa.value().abs().max(1.0));
        }

        #[test]
        fn prop_mul_then_div_is_identity(a in -1e6..1e6f64, b in 1e-3..1e6f64) {
            let qa = Quantity::new(a, "m").unwrap();
            let qb = Quantity::new(b, "s").unwrap();
            let back = (qa * qb) / qb;
            prop_assert_eq!(back.dimensions(), qa.dimensions());
            prop_assert!((back.value() - qa.value()).abs() <= 1e-9 * qa.value().abs().max(1.0));
        }

        #[test]
        fn prop_powi_composes(n in -2i32..=3, m in -2i32..=3) {
            let base = Quantity::new(1.5, "m/s").unwrap();
            let chained = base.powi(n).powi(m);
            let direct = base.powi(n * m);
            prop_assert_eq!(chained.dimensions(), direct.dimensions());
            prop_assert!((chained.value() - direct.value()).abs() <= 1e-9 * direct.value().abs().max(1.0));
        }

        #[test]
        fn prop_mul_dimensions_are_componentwise_sums(a in -1e3..1e3f64, b in -1e3..1e3f64) {
            let qa = Quantity::new(a, "m/s").unwrap();
            let qb = Quantity::new(b, "kg*m").unwrap();
            let product = qa * qb;
            prop_assert_eq!(product.dimensions(), qa.dimensions().multiply(&qb.dimensions()));
            let quotient = qa / qb;
            prop_assert_eq!(quotient.dimensions(), qa.dimensions().divide(&qb.dimensions()));
        }

        #[test]
        fn prop_mismatched_dimensions_reject_additive_ops(x in -1e6..1e6f64) {
            let a = Quantity::new(x, "m").unwrap();
            let b = Quantity::new(x, "s").unwrap();
            prop_assert!(a.try_add(&b).is_err());
            prop_assert!(a.try_sub(&b).is_err());
            prop_assert!(a.try_lt(&b).is_err());
            prop_assert!((a * b).value().is_finite());
            prop_assert!((a / b).value().is_finite() || x == 0.0);
        }

        #[test]
        fn prop_trig_matches_f64_on_radians(x in -10.0..10.0f64) {
            let angle = Quantity::new(x, "rad").unwrap();
            prop_assert!((angle.sin().unwrap().value() - x.sin()).abs() < 1e-12);
            prop_assert!((angle.cos().unwrap().value() - x.cos()).abs() < 1e-12);
        }

        #[test]
        fn prop_logs_reject_dimensioned_input(x in 1e-3..1e6f64) {
            let length = Quantity::new(x, "m").unwrap();
            prop_assert!(length.ln().is_err());
            prop_assert!(length.log2().is_err());
            prop_assert!(length.log10().is_err());
        }
    }
}
