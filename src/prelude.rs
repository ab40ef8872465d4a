//! Convenience re-exports for common types.
//!
//! A single import brings the whole pipeline into scope:
//!
//! ```rust
//! use clmm_range::prelude::*;
//! ```

// Re-export the pipeline input
pub use crate::config::RangeConfig;

// Re-export domain types
pub use crate::domain::{
    Liquidity, Price, PriceRange, SqrtPriceRange, SqrtPriceX96, Tick, TickRange,
};

// Re-export error types
pub use crate::error::{RangeError, Result};

// Re-export math conversions
pub use crate::math::{price_at_tick, price_from_ratio, sqrt_price_x96, tick_at_price};
