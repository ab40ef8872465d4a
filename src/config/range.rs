//! Configuration for a concentrated liquidity position range.

use core::fmt;

use crate::domain::{Liquidity, PriceRange};
use crate::error::RangeError;
use crate::math::price_from_ratio;

/// Quote amount of token1 against which all bounds are expressed.
const QUOTE_UNIT: f64 = 1.0;

/// Token-denominated bounds for a concentrated liquidity position.
///
/// Holds the initial token0 amount and the upper/lower token0 bounds of
/// the range, all quoted against a fixed token1 amount of `1`. This is
/// the input stage of the derivation pipeline:
///
/// ```text
/// RangeConfig --prices()--> PriceRange --sqrt_prices()--> SqrtPriceRange
///                                      --ticks()-------> TickRange
/// ```
///
/// Construction performs no validation. `lower_bound <= initial <=
/// upper_bound` is assumed from the caller, and negative or zero inputs
/// surface as domain errors from the derivation stages rather than here.
///
/// # Examples
///
/// ```
/// use clmm_range::config::RangeConfig;
///
/// let config = RangeConfig::new(2000.0, 3000.0, 1000.0);
/// let prices = config.prices()?;
/// let sqrtp = prices.sqrt_prices()?;
/// let ticks = prices.ticks()?;
///
/// assert_eq!(ticks.initial().get(), 38_006);
/// assert!(!sqrtp.initial().is_zero());
/// # Ok::<(), clmm_range::error::RangeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeConfig {
    token0_initial: f64,
    token0_upper_bound: f64,
    token0_lower_bound: f64,
    token1_initial: f64,
}

impl RangeConfig {
    /// Creates a new `RangeConfig` from token0 amounts.
    ///
    /// The token1 quote amount is fixed at `1`.
    #[must_use]
    pub const fn new(initial: f64, upper_bound: f64, lower_bound: f64) -> Self {
        Self {
            token0_initial: initial,
            token0_upper_bound: upper_bound,
            token0_lower_bound: lower_bound,
            token1_initial: QUOTE_UNIT,
        }
    }

    /// Returns the initial token0 amount.
    #[must_use]
    pub const fn token0_initial(&self) -> f64 {
        self.token0_initial
    }

    /// Returns the upper token0 bound.
    #[must_use]
    pub const fn token0_upper_bound(&self) -> f64 {
        self.token0_upper_bound
    }

    /// Returns the lower token0 bound.
    #[must_use]
    pub const fn token0_lower_bound(&self) -> f64 {
        self.token0_lower_bound
    }

    /// Returns the fixed token1 quote amount.
    #[must_use]
    pub const fn token1_initial(&self) -> f64 {
        self.token1_initial
    }

    /// Derives the square-root prices for the initial point and both
    /// bounds: each is `sqrt(token0 / token1)`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidPrice`] if any bound is negative or
    /// not finite.
    pub fn prices(&self) -> crate::error::Result<PriceRange> {
        Ok(PriceRange::new(
            price_from_ratio(self.token0_initial, self.token1_initial)?,
            price_from_ratio(self.token0_upper_bound, self.token1_initial)?,
            price_from_ratio(self.token0_lower_bound, self.token1_initial)?,
        ))
    }

    /// Derives the liquidity for the position.
    ///
    /// Reserved capability slot: the derivation is not implemented and
    /// this always fails, never returning a numeric value.
    ///
    /// # Errors
    ///
    /// Always returns [`RangeError::NotImplemented`].
    pub fn liquidity(&self) -> crate::error::Result<Liquidity> {
        Err(RangeError::NotImplemented(
            "liquidity derivation is not implemented",
        ))
    }
}

impl fmt::Display for RangeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RangeConfig(initial={}, upper={}, lower={}, quote={})",
            self.token0_initial,
            self.token0_upper_bound,
            self.token0_lower_bound,
            self.token1_initial
        )
    }
}
