//! Error types for the dimensional core.

use crate::dimension::Dimensions;
use thiserror::Error;

/// Result type for fallible `dimq` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure while parsing a unit expression.
///
/// Each variant is a distinct kind so callers can react to unknown symbols
/// differently from grammar violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The symbol matched no registry entry, even after prefix stripping.
    #[error("unknown unit symbol '{symbol}'")]
    UnknownSymbol {
        /// The unresolved symbol as written.
        symbol: String,
    },

    /// The input violates the unit-expression grammar.
    #[error("syntax error at byte {pos}: {message}")]
    Syntax {
        /// Byte offset of the offending token.
        pos: usize,
        /// Human-readable description of the violation.
        message: String,
    },

    /// An exponent was malformed (out of range, or a rational with a
    /// non-positive denominator).
    #[error("bad exponent: {reason}")]
    BadExponent {
        /// Human-readable description of the problem.
        reason: String,
    },
}

/// Any failure surfaced by a quantity operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A unit string could not be parsed.
    #[error("unit parse error: {0}")]
    Parse(#[from] ParseError),

    /// An operation required equal dimensions and its inputs differ.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Dimensions of the left-hand (or receiving) operand.
        left: Dimensions,
        /// Dimensions of the right-hand (or target) operand.
        right: Dimensions,
    },

    /// An operation required a specific dimensional shape and its input does
    /// not satisfy it.
    #[error("{operation} requires a {requirement} argument, got dimensions {dims}")]
    Dimension {
        /// Name of the rejecting operation.
        operation: &'static str,
        /// What the operation requires, e.g. `"dimensionless"`.
        requirement: &'static str,
        /// Dimensions of the offending input.
        dims: Dimensions,
    },

    /// The underlying numeric function was evaluated outside its domain.
    #[error("{operation} domain error for value {value}")]
    Domain {
        /// Name of the rejecting operation.
        operation: &'static str,
        /// The out-of-domain value.
        value: f64,
    },
}
