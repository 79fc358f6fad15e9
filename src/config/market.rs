//! Seed values and per-field jitter for the mock market panels.

use std::ops::Range;

use crate::domain::{Bias, MarketIntelligence, MarketOverview, Regime, SmartMoney};

/// Bounded additive jitter: `value + (u - 0.5) * magnitude`, clamped to `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterSpec {
    pub magnitude: f64,
    pub min: f64,
    pub max: f64,
}

impl JitterSpec {
    pub const fn new(magnitude: f64, min: f64, max: f64) -> Self {
        Self { magnitude, min, max }
    }

    /// Raw offset for a unit sample `u` in `[0, 1)`. Lies in `[-magnitude/2, magnitude/2)`.
    #[inline]
    pub fn offset(&self, unit: f64) -> f64 {
        (unit - 0.5) * self.magnitude
    }

    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Jitter then clamp.
    #[inline]
    pub fn apply(&self, value: f64, unit: f64) -> f64 {
        self.clamp(value + self.offset(unit))
    }
}

pub struct MarketJitter {
    // Overview (basic board)
    pub win_rate: JitterSpec,
    pub profit_loss_magnitude: f64,
    pub active_trades: JitterSpec,

    // Intelligence (advanced board)
    pub vix: JitterSpec,
    pub breadth: JitterSpec,
    pub confidence: JitterSpec,
    pub liquidity: JitterSpec,
    pub patterns_step: Range<u64>,
}

pub struct MarketConfig {
    pub overview: MarketOverview,
    pub intelligence: MarketIntelligence,
    pub patterns_analyzed: u64,
    pub jitter: MarketJitter,
}

pub const MARKET: MarketConfig = MarketConfig {
    overview: MarketOverview {
        bias: Bias::Bullish,
        win_rate: 68.5,
        profit_loss: 12_450,
        total_trades: 42,
        active_trades: 8,
    },
    intelligence: MarketIntelligence {
        regime: Regime::Bullish,
        confidence: 82.0,
        vix: 14.2,
        sector_leader: "TECH",
        liquidity: 4.2,
        options_flow: 2.8,
        smart_money: SmartMoney::Buying,
        breadth: 68.0,
    },
    patterns_analyzed: 14_827,
    jitter: MarketJitter {
        win_rate: JitterSpec::new(2.0, 0.0, 100.0),
        profit_loss_magnitude: 1000.0,
        active_trades: JitterSpec::new(2.0, 0.0, 8.0),

        vix: JitterSpec::new(0.2, 10.0, 30.0),
        breadth: JitterSpec::new(5.0, 0.0, 100.0),
        confidence: JitterSpec::new(2.0, 50.0, 95.0),
        liquidity: JitterSpec::new(0.1, 2.0, 6.0),
        patterns_step: 10..60,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_offset_is_centred_on_half() {
        let spec = JitterSpec::new(2.0, 0.0, 100.0);
        assert_eq!(spec.offset(0.5), 0.0);
        assert_eq!(spec.offset(0.0), -1.0);
        assert!(spec.offset(0.999_999) < 1.0);
    }

    #[test]
    fn win_rate_at_ceiling_stays_at_ceiling() {
        let spec = MARKET.jitter.win_rate;
        assert_eq!(spec.apply(100.0, 0.99), 100.0);
        assert_eq!(spec.apply(0.0, 0.01), 0.0);
    }

    #[test]
    fn vix_is_held_inside_its_band() {
        let spec = MARKET.jitter.vix;
        assert_eq!(spec.apply(29.95, 0.99), 30.0);
        assert_eq!(spec.apply(10.02, 0.0), 10.0);
        let mid = spec.apply(14.2, 0.75);
        assert!((mid - 14.25).abs() < 1e-9);
    }
}
