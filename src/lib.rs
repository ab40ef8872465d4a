//! # clmm-range
//!
//! Price, sqrt-price, and tick range derivation for concentrated
//! liquidity pool positions.
//!
//! Given token-denominated bounds for a position (an initial token0
//! amount plus upper and lower token0 bounds, quoted against one unit of
//! token1), this crate derives the three representations a
//! concentrated-liquidity pool works with:
//!
//! 1. **square-root prices** — `sqrt(token0 / token1)` per bound,
//! 2. **Q96 sqrt-price encodings** — `floor(sqrt(price) * 2^96)`,
//! 3. **tick indices** — `floor(log_1.0001(price))`.
//!
//! # Quick Start
//!
//! ```rust
//! use clmm_range::config::RangeConfig;
//!
//! // Position around 2000 token0 per token1, ranging 1000..3000.
//! let config = RangeConfig::new(2000.0, 3000.0, 1000.0);
//!
//! let prices = config.prices()?;
//! assert!((prices.initial().get() - 44.721_359_549_995_79).abs() < 1e-9);
//!
//! let ticks = prices.ticks()?;
//! assert_eq!(ticks.initial().get(), 38_006);
//! assert_eq!(ticks.upper().get(), 40_033);
//! assert_eq!(ticks.lower().get(), 34_540);
//!
//! let sqrtp = prices.sqrt_prices()?;
//! assert!(sqrtp.lower() < sqrtp.initial());
//! # Ok::<(), clmm_range::error::RangeError>(())
//! ```
//!
//! # Pipeline
//!
//! The derivation is a staged pipeline of immutable values. Each stage is
//! computed from the previous one, so the ordering dependency between the
//! computations is part of the type signatures rather than a calling
//! convention:
//!
//! ```text
//! ┌─────────────┐
//! │ RangeConfig  │  token0 bounds, token1 fixed at 1
//! └──────┬──────┘
//!        │ prices()
//!        ▼
//! ┌─────────────┐
//! │ PriceRange   │  sqrt(token0 / token1) per bound
//! └──────┬──────┘
//!        │ sqrt_prices()          ticks()
//!        ▼                        ▼
//! ┌───────────────┐      ┌─────────────┐
//! │ SqrtPriceRange │      │  TickRange   │
//! └───────────────┘      └─────────────┘
//! ```
//!
//! Liquidity derivation is a reserved slot:
//! [`RangeConfig::liquidity`](config::RangeConfig::liquidity) always
//! signals `NotImplemented`.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | [`RangeConfig`](config::RangeConfig), the pipeline input |
//! | [`domain`] | Newtype value types: [`Price`](domain::Price), [`Tick`](domain::Tick), [`SqrtPriceX96`](domain::SqrtPriceX96), and the stage triples |
//! | [`math`]   | Conversion functions: ratio → price → Q96 / tick |
//! | [`error`]  | [`RangeError`](error::RangeError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types |

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
