//! Price ratios and Q96 sqrt-price encoding.

use crate::domain::{Price, SqrtPriceX96};
use crate::error::RangeError;

/// The Q96 scale factor `2^96` as an `f64`. Exactly representable since
/// it is a power of two.
const Q96_SCALE: f64 = 79_228_162_514_264_337_593_543_950_336.0;

/// Computes the square-root price of a token ratio: `sqrt(base / quote)`.
///
/// # Errors
///
/// - [`RangeError::DivisionByZero`] if `quote` is zero.
/// - [`RangeError::InvalidPrice`] if the ratio is negative or not finite.
///
/// # Examples
///
/// ```
/// use clmm_range::math::price_from_ratio;
///
/// let price = price_from_ratio(2000.0, 1.0).expect("positive ratio");
/// assert!((price.get() - 44.721_359_549_995_79).abs() < 1e-9);
/// ```
pub fn price_from_ratio(base: f64, quote: f64) -> Result<Price, RangeError> {
    if quote == 0.0 {
        return Err(RangeError::DivisionByZero);
    }
    let ratio = base / quote;
    if !ratio.is_finite() || ratio < 0.0 {
        return Err(RangeError::InvalidPrice(
            "token ratio must be finite and non-negative",
        ));
    }
    Price::new(ratio.sqrt())
}

/// Encodes a price in Q96 fixed point: `floor(sqrt(price) * 2^96)`.
///
/// Note the input already carries one square root (it is a
/// [`Price`], `sqrt(base / quote)`); the encoding applies another.
///
/// # Errors
///
/// Returns [`RangeError::Overflow`] if the scaled value exceeds the
/// `u128` range.
pub fn sqrt_price_x96(price: Price) -> Result<SqrtPriceX96, RangeError> {
    let scaled = price.get().sqrt() * Q96_SCALE;
    if !scaled.is_finite() {
        return Err(RangeError::Overflow("sqrt-price not representable"));
    }

    let floored = scaled.floor();
    #[allow(clippy::cast_precision_loss)]
    let max = u128::MAX as f64;
    if floored > max {
        return Err(RangeError::Overflow("sqrt-price exceeds Q96 u128 range"));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let raw = floored as u128;
    Ok(SqrtPriceX96::new(raw))
}
