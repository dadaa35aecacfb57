//! Dimension vectors and their algebra.
//!
//! Every quantity carries a [`Dimensions`] value: an eight-component vector of
//! exponents over the SI base dimensions, in the fixed order metre, kilogram,
//! second, kelvin, ampere, mole, candela, radian. Plane angle is tracked as a
//! full base dimension so that `rad` and `deg` are first-class and the
//! trigonometric operations can demand a pure-angle argument.
//!
//! Exponents are stored as `f64` so that rational powers (`m^(3/2)`) work
//! without a separate rational type. Equality is exact componentwise equality;
//! integer exponents always round-trip exactly through the algebra below, and
//! parsing canonicalizes integer-valued rationals to integers.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of base dimensions tracked per quantity.
pub const BASE_DIMENSIONS: usize = 8;

/// Canonical symbols of the base dimensions, index-aligned with the exponent
/// vector inside [`Dimensions`].
pub const BASE_SYMBOLS: [&str; BASE_DIMENSIONS] = ["m", "kg", "s", "K", "A", "mol", "cd", "rad"];

/// Exponent vector over the eight base dimensions.
///
/// The component order is `[m, kg, s, K, A, mol, cd, rad]`. Two vectors are
/// equal iff every component is bit-for-bit equal, so `m^2` and `m^2` always
/// compare equal while `m^2` and `m^1.9999…` never do.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions([f64; BASE_DIMENSIONS]);

impl Dimensions {
    /// The zero vector: a dimensionless quantity.
    pub const NONE: Dimensions = Dimensions([0.0; BASE_DIMENSIONS]);

    /// Length `[L]`.
    pub const LENGTH: Dimensions = Dimensions([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);

    /// Mass `[M]`.
    pub const MASS: Dimensions = Dimensions([0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);

    /// Time `[T]`.
    pub const TIME: Dimensions = Dimensions([0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);

    /// Thermodynamic temperature `[Θ]`.
    pub const TEMPERATURE: Dimensions = Dimensions([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);

    /// Electric current `[I]`.
    pub const CURRENT: Dimensions = Dimensions([0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);

    /// Amount of substance `[N]`.
    pub const AMOUNT: Dimensions = Dimensions([0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    /// Luminous intensity `[J]`.
    pub const LUMINOSITY: Dimensions = Dimensions([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);

    /// Plane angle.
    pub const ANGLE: Dimensions = Dimensions([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);

    /// Builds a vector from raw exponents in `[m, kg, s, K, A, mol, cd, rad]`
    /// order.
    #[inline]
    pub const fn new(exponents: [f64; BASE_DIMENSIONS]) -> Self {
        Dimensions(exponents)
    }

    /// Returns the raw exponent array.
    #[inline]
    pub const fn exponents(&self) -> [f64; BASE_DIMENSIONS] {
        self.0
    }

    /// True iff every exponent is exactly zero.
    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|&e| e == 0.0)
    }

    /// True iff the radian exponent is nonzero and every other exponent is
    /// exactly zero.
    #[inline]
    pub fn is_pure_angle(&self) -> bool {
        self.0[7] != 0.0 && self.0[..7].iter().all(|&e| e == 0.0)
    }

    /// Componentwise sum: the dimensions of a product of quantities.
    #[inline]
    pub fn multiply(&self, other: &Dimensions) -> Dimensions {
        let mut out = self.0;
        for (o, e) in out.iter_mut().zip(other.0.iter()) {
            *o += e;
        }
        Dimensions(out)
    }

    /// Componentwise difference: the dimensions of a quotient of quantities.
    #[inline]
    pub fn divide(&self, other: &Dimensions) -> Dimensions {
        let mut out = self.0;
        for (o, e) in out.iter_mut().zip(other.0.iter()) {
            *o -= e;
        }
        Dimensions(out)
    }

    /// Componentwise scaling by `exp`: the dimensions of a power.
    #[inline]
    pub fn pow(&self, exp: f64) -> Dimensions {
        let mut out = self.0;
        for o in out.iter_mut() {
            *o *= exp;
        }
        Dimensions(out)
    }

    /// Negated exponents: the dimensions of a reciprocal.
    #[inline]
    pub fn invert(&self) -> Dimensions {
        self.pow(-1.0)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::NONE
    }
}

/// Renders the canonical base-unit reconstruction: positive exponents first,
/// joined by `*`, negative exponents grouped after a single `/`. The zero
/// vector renders as `1`. Fractional exponents render as parenthesized
/// rationals where an exact small denominator exists (`m^(3/2)`), so the
/// rendering stays within the unit-expression grammar.
///
/// ```rust
/// use dimq_core::Dimensions;
///
/// let accel = Dimensions::new([1.0, 0.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
/// assert_eq!(accel.to_string(), "m/s^2");
/// ```
impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut numerator = String::new();
        let mut denominator = String::new();
        let mut denominator_factors = 0usize;

        for (symbol, &exp) in BASE_SYMBOLS.iter().zip(self.0.iter()) {
            if exp == 0.0 {
                continue;
            }
            let (target, exp) = if exp > 0.0 {
                (&mut numerator, exp)
            } else {
                denominator_factors += 1;
                (&mut denominator, -exp)
            };
            if !target.is_empty() {
                target.push('*');
            }
            target.push_str(symbol);
            push_exponent(target, exp);
        }

        // A multi-factor denominator is parenthesized so the rendering stays
        // unambiguous under the left-associative grammar.
        if denominator_factors > 1 {
            denominator = format!("({denominator})");
        }

        match (numerator.is_empty(), denominator.is_empty()) {
            (true, true) => write!(f, "1"),
            (false, true) => write!(f, "{numerator}"),
            (true, false) => write!(f, "1/{denominator}"),
            (false, false) => write!(f, "{numerator}/{denominator}"),
        }
    }
}

fn push_exponent(target: &mut String, exp: f64) {
    use core::fmt::Write as _;

    if exp == 1.0 {
        return;
    }
    target.push('^');
    if exp.fract() == 0.0 {
        let _ = write!(target, "{exp}");
    } else if let Some((num, den)) = as_small_rational(exp) {
        let _ = write!(target, "({num}/{den})");
    } else {
        let _ = write!(target, "{exp}");
    }
}

/// Finds an exact `num/den` representation with a small denominator, if one
/// exists. Exponents produced by the parser and by root-taking are small
/// rationals, so this recovers them without a dedicated rational type.
fn as_small_rational(exp: f64) -> Option<(i64, i64)> {
    for den in 2..=64i64 {
        let num = exp * den as f64;
        if num.fract() == 0.0 && num.abs() < i64::MAX as f64 {
            return Some((num as i64, den));
        }
    }
    None
}
