//! Square-root prices of a position's initial point and bounds.

use core::fmt;

use super::{Price, SqrtPriceRange, TickRange};
use crate::math::{sqrt_price_x96, tick_at_price};

/// The square-root prices derived from a range configuration: one for the
/// initial token0 amount and one for each bound.
///
/// This is the first stage of the derivation pipeline. The two follow-up
/// representations, [`SqrtPriceRange`] and [`TickRange`], can only be
/// computed from a `PriceRange` value, which makes the stage ordering a
/// compile-time fact instead of a calling convention.
///
/// Bound ordering (`lower <= initial <= upper`) is the caller's
/// responsibility and is not enforced here.
///
/// # Examples
///
/// ```
/// use clmm_range::config::RangeConfig;
///
/// let prices = RangeConfig::new(2000.0, 3000.0, 1000.0).prices()?;
/// assert!(prices.lower() <= prices.initial());
/// assert!(prices.initial() <= prices.upper());
/// # Ok::<(), clmm_range::error::RangeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    initial: Price,
    upper: Price,
    lower: Price,
}

impl PriceRange {
    /// Creates a new `PriceRange` from already-validated prices.
    #[must_use]
    pub const fn new(initial: Price, upper: Price, lower: Price) -> Self {
        Self {
            initial,
            upper,
            lower,
        }
    }

    /// Returns the price at the initial point.
    #[must_use]
    pub const fn initial(&self) -> Price {
        self.initial
    }

    /// Returns the price at the upper bound.
    #[must_use]
    pub const fn upper(&self) -> Price {
        self.upper
    }

    /// Returns the price at the lower bound.
    #[must_use]
    pub const fn lower(&self) -> Price {
        self.lower
    }

    /// Returns the three prices as `[initial, upper, lower]`.
    #[must_use]
    pub const fn to_array(&self) -> [Price; 3] {
        [self.initial, self.upper, self.lower]
    }

    /// Encodes all three prices in Q96 fixed point.
    ///
    /// Each value is `floor(sqrt(price) * 2^96)`. The stored prices are
    /// themselves square roots of the token ratio; the encoding applies a
    /// further square root to them.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Overflow`](crate::error::RangeError::Overflow)
    /// if any encoded value exceeds the `u128` range.
    pub fn sqrt_prices(&self) -> crate::error::Result<SqrtPriceRange> {
        Ok(SqrtPriceRange::new(
            sqrt_price_x96(self.initial)?,
            sqrt_price_x96(self.upper)?,
            sqrt_price_x96(self.lower)?,
        ))
    }

    /// Converts all three prices to tick indices.
    ///
    /// Each value is `floor(log_1.0001(price))`.
    ///
    /// # Errors
    ///
    /// - [`RangeError::InvalidPrice`](crate::error::RangeError::InvalidPrice)
    ///   if any price is zero (logarithm undefined).
    /// - [`RangeError::InvalidTick`](crate::error::RangeError::InvalidTick)
    ///   if any resulting tick falls outside the valid range.
    pub fn ticks(&self) -> crate::error::Result<TickRange> {
        Ok(TickRange::new(
            tick_at_price(self.initial)?,
            tick_at_price(self.upper)?,
            tick_at_price(self.lower)?,
        ))
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PriceRange(initial={}, upper={}, lower={})",
            self.initial, self.upper, self.lower
        )
    }
}
