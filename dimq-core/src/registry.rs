//! Static catalog of unit symbols and metric prefixes.
//!
//! The registry is the single source of truth for conversion factors: the
//! parser resolves every symbol through [`resolve`], and no scale constant
//! lives anywhere else. Each entry maps a symbol to its SI-base scale and
//! [`Dimensions`] vector, plus a flag saying whether metric prefixes may be
//! applied to it.
//!
//! # Resolution order
//!
//! 1. Exact symbol match (aliases included). Exact matches always win, so
//!    `min` is a minute and never milli-inch.
//! 2. Strip one leading character and try it as a metric prefix against a
//!    prefixable entry (`us` → `u` + `s`).
//! 3. Strip two leading characters likewise (`dam` → `da` + `m`).
//!
//! # The kilogram
//!
//! `kg` is the SI base unit for mass but carries a prefix in its name, so it
//! is stored as its own non-prefixable entry with scale 1. Prefixed masses
//! hang off `g` instead (`g` has scale `1e-3` and is prefixable, making `ug`
//! and `Mg` resolve normally).

use crate::dimension::Dimensions;
use std::collections::HashMap;
use std::sync::LazyLock;

/// A registry entry: one atomic unit symbol and its SI-base representation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UnitDef {
    /// Human-readable unit name, kept for documentation of the table itself.
    #[allow(dead_code)]
    pub name: &'static str,
    /// Multiplicative factor converting a magnitude in this unit to the
    /// SI-base magnitude of the same dimensions.
    pub scale: f64,
    /// Additive offset to SI base. Reserved for offset temperature scales,
    /// which this library does not support; always `0.0`.
    pub offset: f64,
    /// Dimensional signature of the unit.
    pub dims: Dimensions,
    /// Whether metric prefixes may be applied to this symbol.
    pub prefixable: bool,
}

impl UnitDef {
    const fn new(name: &'static str, scale: f64, dims: Dimensions, prefixable: bool) -> Self {
        UnitDef { name, scale, offset: 0.0, dims, prefixable }
    }
}

/// A symbol resolved to its SI-base representation, prefix already applied.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedUnit {
    pub scale: f64,
    pub offset: f64,
    pub dims: Dimensions,
}

/// Metric prefixes with their decimal factors. `da` is the only two-character
/// prefix; single-character candidates are tried first.
static PREFIXES: [(&str, f64); 20] = [
    ("Y", 1e24),
    ("Z", 1e21),
    ("E", 1e18),
    ("P", 1e15),
    ("T", 1e12),
    ("G", 1e9),
    ("M", 1e6),
    ("k", 1e3),
    ("h", 1e2),
    ("da", 1e1),
    ("d", 1e-1),
    ("c", 1e-2),
    ("m", 1e-3),
    ("u", 1e-6),
    ("n", 1e-9),
    ("p", 1e-12),
    ("f", 1e-15),
    ("a", 1e-18),
    ("z", 1e-21),
    ("y", 1e-24),
];

/// Spelling variants resolved to their canonical symbol before lookup.
static ALIASES: [(&str, &str); 4] = [("Ω", "ohm"), ("ev", "eV"), ("sec", "s"), ("h", "hr")];

// Dimension vectors, in [m, kg, s, K, A, mol, cd, rad] order.
const LENGTH: Dimensions = Dimensions::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
const AREA: Dimensions = Dimensions::new([2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
const VOLUME: Dimensions = Dimensions::new([3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
const MASS: Dimensions = Dimensions::new([0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
const TIME: Dimensions = Dimensions::new([0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
const TEMPERATURE: Dimensions = Dimensions::new([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
const CURRENT: Dimensions = Dimensions::new([0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
const AMOUNT: Dimensions = Dimensions::new([0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
const LUMINOSITY: Dimensions = Dimensions::new([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
const ANGLE: Dimensions = Dimensions::new([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
const SOLID_ANGLE: Dimensions = Dimensions::new([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0]);
const VELOCITY: Dimensions = Dimensions::new([1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
const FORCE: Dimensions = Dimensions::new([1.0, 1.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
const PRESSURE: Dimensions = Dimensions::new([-1.0, 1.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
const ENERGY: Dimensions = Dimensions::new([2.0, 1.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
const POWER: Dimensions = Dimensions::new([2.0, 1.0, -3.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
const FREQUENCY: Dimensions = Dimensions::new([0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
const CHARGE: Dimensions = Dimensions::new([0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
const VOLTAGE: Dimensions = Dimensions::new([2.0, 1.0, -3.0, 0.0, -1.0, 0.0, 0.0, 0.0]);
const RESISTANCE: Dimensions = Dimensions::new([2.0, 1.0, -3.0, 0.0, -2.0, 0.0, 0.0, 0.0]);
const CONDUCTANCE: Dimensions = Dimensions::new([-2.0, -1.0, 3.0, 0.0, 2.0, 0.0, 0.0, 0.0]);
const CAPACITANCE: Dimensions = Dimensions::new([-2.0, -1.0, 4.0, 0.0, 2.0, 0.0, 0.0, 0.0]);
const INDUCTANCE: Dimensions = Dimensions::new([2.0, 1.0, -2.0, 0.0, -2.0, 0.0, 0.0, 0.0]);
const MAGNETIC_FLUX: Dimensions = Dimensions::new([2.0, 1.0, -2.0, 0.0, -1.0, 0.0, 0.0, 0.0]);
const FLUX_DENSITY: Dimensions = Dimensions::new([0.0, 1.0, -2.0, 0.0, -1.0, 0.0, 0.0, 0.0]);
const LUMINOUS_FLUX: Dimensions = Dimensions::new([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 2.0]);
const ILLUMINANCE: Dimensions = Dimensions::new([-2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 2.0]);

const PI: f64 = std::f64::consts::PI;

/// Symbol table, built once on first use.
static UNITS: LazyLock<HashMap<&'static str, UnitDef>> = LazyLock::new(|| {
    HashMap::from([
        // ===== Length =====
        ("m", UnitDef::new("meter", 1.0, LENGTH, true)),
        ("cm", UnitDef::new("centimeter", 1e-2, LENGTH, false)),
        ("mm", UnitDef::new("millimeter", 1e-3, LENGTH, false)),
        ("um", UnitDef::new("micrometer", 1e-6, LENGTH, false)),
        ("nm", UnitDef::new("nanometer", 1e-9, LENGTH, false)),
        ("km", UnitDef::new("kilometer", 1e3, LENGTH, false)),
        ("in", UnitDef::new("inch", 2.54e-2, LENGTH, false)),
        ("ft", UnitDef::new("foot", 0.3048, LENGTH, false)),
        ("yd", UnitDef::new("yard", 0.9144, LENGTH, false)),
        ("mi", UnitDef::new("mile", 1609.344, LENGTH, false)),
        ("au", UnitDef::new("astronomical unit", 1.495_978_707e11, LENGTH, false)),
        ("ly", UnitDef::new("light year", 9.460_730_472_580_8e15, LENGTH, false)),
        ("pc", UnitDef::new("parsec", 3.085_677_581_491_367_3e16, LENGTH, false)),
        // ===== Area =====
        ("ha", UnitDef::new("hectare", 1e4, AREA, false)),
        ("ac", UnitDef::new("acre", 4046.856_422_4, AREA, false)),
        // ===== Volume =====
        ("L", UnitDef::new("liter", 1e-3, VOLUME, true)),
        ("l", UnitDef::new("liter", 1e-3, VOLUME, true)),
        ("gal", UnitDef::new("gallon", 3.785_411_784e-3, VOLUME, false)),
        ("qt", UnitDef::new("quart", 9.463_529_46e-4, VOLUME, false)),
        ("pt", UnitDef::new("pint", 4.731_764_73e-4, VOLUME, false)),
        ("cup", UnitDef::new("cup", 2.365_882_365e-4, VOLUME, false)),
        // ===== Mass =====
        ("kg", UnitDef::new("kilogram", 1.0, MASS, false)),
        ("g", UnitDef::new("gram", 1e-3, MASS, true)),
        ("t", UnitDef::new("metric ton", 1e3, MASS, false)),
        ("lb", UnitDef::new("pound", 0.453_592_37, MASS, false)),
        ("oz", UnitDef::new("ounce", 0.028_349_523_125, MASS, false)),
        // ===== Time =====
        ("s", UnitDef::new("second", 1.0, TIME, true)),
        ("ms", UnitDef::new("millisecond", 1e-3, TIME, false)),
        ("us", UnitDef::new("microsecond", 1e-6, TIME, false)),
        ("ns", UnitDef::new("nanosecond", 1e-9, TIME, false)),
        ("min", UnitDef::new("minute", 60.0, TIME, false)),
        ("hr", UnitDef::new("hour", 3600.0, TIME, false)),
        ("day", UnitDef::new("day", 86_400.0, TIME, false)),
        ("d", UnitDef::new("day", 86_400.0, TIME, false)),
        ("wk", UnitDef::new("week", 604_800.0, TIME, false)),
        ("yr", UnitDef::new("Julian year", 31_557_600.0, TIME, false)),
        // ===== Temperature (ratio scale only) =====
        ("K", UnitDef::new("kelvin", 1.0, TEMPERATURE, true)),
        // ===== Electric current =====
        ("A", UnitDef::new("ampere", 1.0, CURRENT, true)),
        // ===== Amount of substance =====
        ("mol", UnitDef::new("mole", 1.0, AMOUNT, true)),
        // ===== Luminous intensity =====
        ("cd", UnitDef::new("candela", 1.0, LUMINOSITY, true)),
        ("lm", UnitDef::new("lumen", 1.0, LUMINOUS_FLUX, true)),
        ("lx", UnitDef::new("lux", 1.0, ILLUMINANCE, true)),
        // ===== Angle =====
        ("rad", UnitDef::new("radian", 1.0, ANGLE, true)),
        ("deg", UnitDef::new("degree", PI / 180.0, ANGLE, false)),
        ("arcmin", UnitDef::new("arcminute", PI / 10_800.0, ANGLE, false)),
        ("arcsec", UnitDef::new("arcsecond", PI / 648_000.0, ANGLE, false)),
        ("sr", UnitDef::new("steradian", 1.0, SOLID_ANGLE, true)),
        // ===== Velocity =====
        ("kn", UnitDef::new("knot", 1852.0 / 3600.0, VELOCITY, false)),
        // ===== Force =====
        ("N", UnitDef::new("newton", 1.0, FORCE, true)),
        ("lbf", UnitDef::new("pound-force", 4.448_221_615_260_5, FORCE, false)),
        ("dyn", UnitDef::new("dyne", 1e-5, FORCE, false)),
        // ===== Pressure =====
        ("Pa", UnitDef::new("pascal", 1.0, PRESSURE, true)),
        ("bar", UnitDef::new("bar", 1e5, PRESSURE, false)),
        ("atm", UnitDef::new("standard atmosphere", 101_325.0, PRESSURE, false)),
        ("psi", UnitDef::new("pound per square inch", 6894.757_293_168_361, PRESSURE, false)),
        // ===== Energy =====
        ("J", UnitDef::new("joule", 1.0, ENERGY, true)),
        ("cal", UnitDef::new("calorie", 4.184, ENERGY, false)),
        ("kcal", UnitDef::new("kilocalorie", 4184.0, ENERGY, false)),
        ("Wh", UnitDef::new("watt-hour", 3600.0, ENERGY, true)),
        ("kWh", UnitDef::new("kilowatt-hour", 3.6e6, ENERGY, false)),
        ("BTU", UnitDef::new("British thermal unit", 1055.055_85, ENERGY, false)),
        ("erg", UnitDef::new("erg", 1e-7, ENERGY, false)),
        ("eV", UnitDef::new("electronvolt", 1.602_176_634e-19, ENERGY, true)),
        // ===== Power =====
        ("W", UnitDef::new("watt", 1.0, POWER, true)),
        ("hp", UnitDef::new("horsepower", 745.699_871_582_270_2, POWER, false)),
        // ===== Frequency =====
        ("Hz", UnitDef::new("hertz", 1.0, FREQUENCY, true)),
        // ===== Electrical =====
        ("C", UnitDef::new("coulomb", 1.0, CHARGE, true)),
        ("V", UnitDef::new("volt", 1.0, VOLTAGE, true)),
        ("ohm", UnitDef::new("ohm", 1.0, RESISTANCE, true)),
        ("S", UnitDef::new("siemens", 1.0, CONDUCTANCE, true)),
        ("F", UnitDef::new("farad", 1.0, CAPACITANCE, true)),
        ("H", UnitDef::new("henry", 1.0, INDUCTANCE, true)),
        ("Wb", UnitDef::new("weber", 1.0, MAGNETIC_FLUX, true)),
        ("T", UnitDef::new("tesla", 1.0, FLUX_DENSITY, true)),
    ])
});

fn base_entry(symbol: &str) -> Option<&'static UnitDef> {
    if let Some(def) = UNITS.get(symbol) {
        return Some(def);
    }
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == symbol)
        .and_then(|(_, canonical)| UNITS.get(canonical))
}

/// Resolves a symbol to its SI-base representation, trying an exact match
/// first and then metric-prefix stripping. Returns `None` for unknown
/// symbols.
pub(crate) fn resolve(symbol: &str) -> Option<ResolvedUnit> {
    if let Some(def) = base_entry(symbol) {
        return Some(ResolvedUnit { scale: def.scale, offset: def.offset, dims: def.dims });
    }

    // Prefix stripping: single-character prefixes first, then `da`.
    for chars in [1usize, 2] {
        let Some((split, _)) = symbol.char_indices().nth(chars) else {
            continue;
        };
        let (prefix, rest) = symbol.split_at(split);
        let Some(&(_, factor)) = PREFIXES.iter().find(|(p, _)| *p == prefix) else {
            continue;
        };
        if let Some(def) = base_entry(rest) {
            if def.prefixable {
                return Some(ResolvedUnit {
                    scale: factor * def.scale,
                    offset: def.offset,
                    dims: def.dims,
                });
            }
        }
    }

    None
}
