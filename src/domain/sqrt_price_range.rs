//! Q96 sqrt-price encodings of a position's initial point and bounds.

use core::fmt;

use super::SqrtPriceX96;

/// The Q96-encoded sqrt-prices for a position: initial point plus both
/// bounds. Produced by [`PriceRange::sqrt_prices`](super::PriceRange::sqrt_prices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SqrtPriceRange {
    initial: SqrtPriceX96,
    upper: SqrtPriceX96,
    lower: SqrtPriceX96,
}

impl SqrtPriceRange {
    /// Creates a new `SqrtPriceRange`.
    #[must_use]
    pub const fn new(initial: SqrtPriceX96, upper: SqrtPriceX96, lower: SqrtPriceX96) -> Self {
        Self {
            initial,
            upper,
            lower,
        }
    }

    /// Returns the encoding at the initial point.
    #[must_use]
    pub const fn initial(&self) -> SqrtPriceX96 {
        self.initial
    }

    /// Returns the encoding at the upper bound.
    #[must_use]
    pub const fn upper(&self) -> SqrtPriceX96 {
        self.upper
    }

    /// Returns the encoding at the lower bound.
    #[must_use]
    pub const fn lower(&self) -> SqrtPriceX96 {
        self.lower
    }

    /// Returns the three encodings as `[initial, upper, lower]`.
    #[must_use]
    pub const fn to_array(&self) -> [SqrtPriceX96; 3] {
        [self.initial, self.upper, self.lower]
    }
}

impl fmt::Display for SqrtPriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SqrtPriceRange(initial={}, upper={}, lower={})",
            self.initial, self.upper, self.lower
        )
    }
}
