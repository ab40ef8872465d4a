//! Property-based tests using `proptest` for the derivation invariants.
//!
//! Covers four properties:
//!
//! 1. **Price monotonicity** — ordered bounds produce ordered prices.
//! 2. **Tick floor semantics** — `1.0001^tick <= price < 1.0001^(tick+1)`.
//! 3. **Tick round-trip** — `tick_at_price(price_at_tick(t)) == t`.
//! 4. **Q96 monotonicity** — larger prices never encode lower.

use proptest::prelude::*;

use crate::config::RangeConfig;
use crate::domain::{Price, Tick};
use crate::math::{price_at_tick, price_from_ratio, sqrt_price_x96, tick_at_price};

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Token0 bounds in a realistic trading range, away from f64 extremes.
fn bound_strategy() -> impl Strategy<Value = f64> {
    (1u64..=100_000_000u64).prop_map(|v| v as f64 / 100.0)
}

/// Prices across many orders of magnitude but inside the tick range.
fn price_strategy() -> impl Strategy<Value = f64> {
    (-30.0f64..30.0f64).prop_map(f64::exp2)
}

/// Tick values across the full valid range.
fn tick_strategy() -> impl Strategy<Value = i32> {
    -887_272i32..=887_272i32
}

fn price(v: f64) -> Price {
    let Ok(p) = Price::new(v) else {
        panic!("valid price expected");
    };
    p
}

// ---------------------------------------------------------------------------
// Property 1: Price monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prices_preserve_bound_ordering(
        a in bound_strategy(),
        b in bound_strategy(),
        c in bound_strategy(),
    ) {
        let mut sorted = [a, b, c];
        sorted.sort_by(f64::total_cmp);
        let [lower, initial, upper] = sorted;

        let cfg = RangeConfig::new(initial, upper, lower);
        let prices = cfg.prices().expect("positive bounds");

        prop_assert!(prices.lower() <= prices.initial());
        prop_assert!(prices.initial() <= prices.upper());
    }

    #[test]
    fn price_is_sqrt_of_ratio(bound in bound_strategy()) {
        let p = price_from_ratio(bound, 1.0).expect("positive bound");
        prop_assert!((p.get() - bound.sqrt()).abs() <= f64::EPSILON * bound.sqrt());
    }
}

// ---------------------------------------------------------------------------
// Property 2: Tick floor semantics
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn tick_brackets_price(p in price_strategy()) {
        let tick = tick_at_price(price(p)).expect("in-range price");
        let at_tick = price_at_tick(tick).expect("valid tick");
        let above = tick.checked_add(1).expect("tick + 1 in range");
        let at_next = price_at_tick(above).expect("valid tick");

        // Relative tolerance absorbs powf/ln rounding at the boundaries.
        prop_assert!(at_tick.get() <= p * (1.0 + 1e-9));
        prop_assert!(p < at_next.get() * (1.0 + 1e-9));
    }
}

// ---------------------------------------------------------------------------
// Property 3: Tick round-trip
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn tick_round_trip(t in tick_strategy()) {
        let tick = Tick::new(t).expect("strategy stays in range");
        let p = price_at_tick(tick).expect("valid tick");
        let rt = tick_at_price(p).expect("valid price");
        prop_assert_eq!(rt, tick);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Q96 monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn q96_encoding_is_monotone(a in price_strategy(), b in price_strategy()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let enc_lo = sqrt_price_x96(price(lo)).expect("in-range price");
        let enc_hi = sqrt_price_x96(price(hi)).expect("in-range price");
        prop_assert!(enc_lo <= enc_hi);
    }

    #[test]
    fn q96_encoding_never_negative(p in price_strategy()) {
        // Encoding is unsigned by construction; the interesting claim is
        // that it stays below the f64-to-u128 overflow guard here.
        let enc = sqrt_price_x96(price(p)).expect("in-range price");
        prop_assert!(enc.get() < u128::MAX);
    }
}
