//! Unified error type for the range math library.
//!
//! All fallible operations across the crate return [`RangeError`] as their
//! error type. Variants carry a `&'static str` describing which invariant
//! was violated, so errors stay `Copy` and directly comparable in tests.

use core::fmt;

/// Errors produced while deriving prices, sqrt-prices, or ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// A price value or price ratio was out of the mathematical domain
    /// (negative, NaN, infinite, or non-positive where a logarithm is taken).
    InvalidPrice(&'static str),
    /// A tick index fell outside the valid range `[-887272, 887272]`.
    InvalidTick(&'static str),
    /// The quote amount of a price ratio was zero.
    DivisionByZero,
    /// A Q96 encoding exceeded the representable `u128` range.
    Overflow(&'static str),
    /// The requested derivation is a reserved capability slot with no
    /// implementation yet.
    NotImplemented(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, RangeError>;

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrice(msg) => write!(f, "invalid price: {msg}"),
            Self::InvalidTick(msg) => write!(f, "invalid tick: {msg}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::Overflow(msg) => write!(f, "overflow: {msg}"),
            Self::NotImplemented(msg) => write!(f, "not implemented: {msg}"),
        }
    }
}

impl std::error::Error for RangeError {}
