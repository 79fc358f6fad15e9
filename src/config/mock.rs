//! Vocabularies and ranges used by the mock signal generator.

use std::ops::Range;

pub struct MockConfig {
    pub stock_symbols: &'static [&'static str],
    pub option_symbols: &'static [&'static str],
    pub patterns: &'static [&'static str],
    /// Base price is drawn uniformly from this half-open range.
    pub price_range: Range<f64>,
    pub stop_multiplier: f64,
    pub target_multiplier: f64,
    /// Confidence is drawn uniformly from this half-open integer range.
    pub confidence_range: Range<u8>,
    pub note: &'static str,
    /// Confidence at or above this value is drawn in the high tier on every board.
    pub high_confidence: u8,
    /// Price precision (decimal places) for entry, stop and target.
    pub price_decimals: i32,
}

pub const MOCK: MockConfig = MockConfig {
    stock_symbols: &["NVDA", "TSLA", "AAPL", "AMD", "META", "GOOGL", "MSFT", "AMZN"],
    option_symbols: &["SPY", "QQQ", "IWM", "VIX"],
    patterns: &[
        "Bull Flag",
        "Cup & Handle",
        "VWAP Reclaim",
        "Breakout",
        "Gap Fill",
        "Support Bounce",
    ],
    price_range: 100.0..600.0,
    stop_multiplier: 0.97,
    target_multiplier: 1.05,
    confidence_range: 70..100,
    note: "Strong momentum, volume confirmation",
    high_confidence: 80,
    price_decimals: 2,
};
