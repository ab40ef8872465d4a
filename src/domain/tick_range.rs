//! Tick indices of a position's initial point and bounds.

use core::fmt;

use super::Tick;

/// The tick indices for a position: initial point plus both bounds.
/// Produced by [`PriceRange::ticks`](super::PriceRange::ticks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickRange {
    initial: Tick,
    upper: Tick,
    lower: Tick,
}

impl TickRange {
    /// Creates a new `TickRange`.
    #[must_use]
    pub const fn new(initial: Tick, upper: Tick, lower: Tick) -> Self {
        Self {
            initial,
            upper,
            lower,
        }
    }

    /// Returns the tick at the initial point.
    #[must_use]
    pub const fn initial(&self) -> Tick {
        self.initial
    }

    /// Returns the tick at the upper bound.
    #[must_use]
    pub const fn upper(&self) -> Tick {
        self.upper
    }

    /// Returns the tick at the lower bound.
    #[must_use]
    pub const fn lower(&self) -> Tick {
        self.lower
    }

    /// Returns the three ticks as `[initial, upper, lower]`.
    #[must_use]
    pub const fn to_array(&self) -> [Tick; 3] {
        [self.initial, self.upper, self.lower]
    }

    /// Returns the width of the bound range in ticks (`upper - lower`).
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.upper.get() - self.lower.get()
    }
}

impl fmt::Display for TickRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TickRange(initial={}, upper={}, lower={})",
            self.initial, self.upper, self.lower
        )
    }
}
