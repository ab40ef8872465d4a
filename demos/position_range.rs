//! Position range derivation walk-through.
//!
//! Derives every price representation for a position quoted around
//! 2000 token0 per token1 with bounds at 1000 and 3000.
//!
//! # Run
//!
//! ```bash
//! cargo run --example position_range
//! ```

use clmm_range::config::RangeConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Concentrated Liquidity Position Range ===\n");

    // ── 1. Configure the range ──────────────────────────────────────────
    let config = RangeConfig::new(2000.0, 3000.0, 1000.0);
    println!("Config: {config}");

    // ── 2. Derive square-root prices ────────────────────────────────────
    let prices = config.prices()?;
    println!("\nSquare-root prices (sqrt(token0 / token1)):");
    println!("  initial: {}", prices.initial());
    println!("  upper:   {}", prices.upper());
    println!("  lower:   {}", prices.lower());

    // ── 3. Encode in Q96 fixed point ────────────────────────────────────
    let sqrtp = prices.sqrt_prices()?;
    println!("\nQ96 sqrt-price encodings:");
    println!("  initial: {}", sqrtp.initial());
    println!("  upper:   {}", sqrtp.upper());
    println!("  lower:   {}", sqrtp.lower());

    // ── 4. Convert to tick indices ──────────────────────────────────────
    let ticks = prices.ticks()?;
    println!("\nTick indices (floor of log base 1.0001):");
    println!("  initial: {}", ticks.initial());
    println!("  upper:   {}", ticks.upper());
    println!("  lower:   {}", ticks.lower());
    println!("  width:   {} ticks", ticks.width());

    // ── 5. Liquidity stays a reserved slot ──────────────────────────────
    match config.liquidity() {
        Err(e) => println!("\nLiquidity: {e}"),
        Ok(l) => println!("\nLiquidity: {l}"),
    }

    Ok(())
}
