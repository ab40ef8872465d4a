//! Fundamental domain value types for position range math.
//!
//! Scalar values (price, tick, Q96 sqrt-price, liquidity) are newtypes
//! with validated constructors. The `*Range` types bundle the three
//! derived values of a position (initial point, upper bound, lower bound)
//! and form the stages of the derivation pipeline.

mod liquidity;
mod price;
mod price_range;
mod sqrt_price;
mod sqrt_price_range;
mod tick;
mod tick_range;

pub use liquidity::Liquidity;
pub use price::Price;
pub use price_range::PriceRange;
pub use sqrt_price::SqrtPriceX96;
pub use sqrt_price_range::SqrtPriceRange;
pub use tick::Tick;
pub use tick_range::TickRange;
