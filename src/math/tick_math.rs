//! Tick/price conversions on the base-1.0001 grid.
//!
//! Implements the standard relationship `price = 1.0001^tick` used by
//! concentrated liquidity pools:
//!
//! - [`tick_at_price`] floors a price onto the grid:
//!   `floor(log_1.0001(price))`.
//! - [`price_at_tick`] is the inverse, `1.0001^tick`.
//!
//! Computation uses `f64` arithmetic (`powf`, `ln`).

use crate::domain::{Price, Tick};
use crate::error::RangeError;

/// Base of the tick-price exponential: `price = BASE^tick`.
const BASE: f64 = 1.0001;

/// Tolerance for snapping a floating-point tick value to the nearest
/// integer. Protects the floor from IEEE 754 rounding when a price sits
/// exactly on a tick boundary, so `tick_at_price(price_at_tick(t)) == t`
/// for all valid ticks.
const SNAP_EPSILON: f64 = 1e-9;

/// Computes the greatest tick whose price is less than or equal to the
/// given price: `floor(log_1.0001(price))`.
///
/// # Errors
///
/// - [`RangeError::InvalidPrice`] if `price` is zero (logarithm
///   undefined).
/// - [`RangeError::InvalidTick`] if the resulting index falls outside
///   `[-887272, 887272]`.
///
/// # Examples
///
/// ```
/// use clmm_range::domain::Price;
/// use clmm_range::math::tick_at_price;
///
/// let tick = tick_at_price(Price::ONE).expect("price 1.0 is valid");
/// assert_eq!(tick.get(), 0);
/// ```
pub fn tick_at_price(price: Price) -> Result<Tick, RangeError> {
    if !price.is_positive() {
        return Err(RangeError::InvalidPrice(
            "price must be positive for tick conversion",
        ));
    }

    let raw = price.get().ln() / BASE.ln();

    // Snap to the nearest integer when within epsilon, otherwise floor.
    let rounded = raw.round();
    let tick_f64 = if (raw - rounded).abs() < SNAP_EPSILON {
        rounded
    } else {
        raw.floor()
    };

    if !tick_f64.is_finite() {
        return Err(RangeError::InvalidTick(
            "price produces non-finite tick value",
        ));
    }

    // Out-of-range values are rejected by Tick::new after truncation.
    #[allow(clippy::cast_possible_truncation)]
    let tick_i32 = tick_f64 as i32;
    Tick::new(tick_i32)
}

/// Computes the price at a given tick: `1.0001^tick`.
///
/// All valid [`Tick`] values produce finite, positive prices.
///
/// # Errors
///
/// Returns [`RangeError::InvalidPrice`] if the computed price is not
/// finite (cannot occur for valid ticks, guarded regardless).
pub fn price_at_tick(tick: Tick) -> Result<Price, RangeError> {
    Price::new(BASE.powf(f64::from(tick.get())))
}
