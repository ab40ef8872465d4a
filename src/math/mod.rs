//! Pure conversion functions between price representations.
//!
//! | Function | Conversion |
//! |----------|------------|
//! | [`price_from_ratio`] | token ratio → sqrt-price |
//! | [`sqrt_price_x96`] | price → Q96 fixed-point encoding |
//! | [`tick_at_price`] | price → tick index (floor) |
//! | [`price_at_tick`] | tick index → price |

mod sqrt_price_math;
mod tick_math;

#[cfg(test)]
mod proptest_properties;

pub use sqrt_price_math::{price_from_ratio, sqrt_price_x96};
pub use tick_math::{price_at_tick, tick_at_price};
