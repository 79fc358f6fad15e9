use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::MOCK;
use crate::domain::{Horizon, TradingSetup};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, Display,
)]
pub enum TimeframeFilter {
    #[default]
    #[strum(to_string = "All Timeframes")]
    All,
    #[strum(to_string = "Scalp (5-30min)")]
    Scalp,
    #[strum(to_string = "Day Trade (1-4hr)")]
    Day,
    #[strum(to_string = "Swing (1-3 days)")]
    Swing,
}

impl TimeframeFilter {
    pub fn matches(&self, horizon: Horizon) -> bool {
        match self {
            Self::All => true,
            Self::Scalp => horizon == Horizon::Scalp,
            Self::Day => horizon == Horizon::Day,
            Self::Swing => horizon == Horizon::Swing,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, Display,
)]
pub enum ConfidenceFilter {
    #[default]
    #[strum(to_string = "All Levels")]
    All,
    #[strum(to_string = "High (>80%)")]
    High,
    #[strum(to_string = "Medium (60-80%)")]
    Medium,
    #[strum(to_string = "Aggressive (<60%)")]
    Aggressive,
}

impl ConfidenceFilter {
    const AGGRESSIVE_BELOW: u8 = 60;

    /// High is strictly above 80; exactly 80 falls in the medium band.
    pub fn matches(&self, confidence: u8) -> bool {
        match self {
            Self::All => true,
            Self::High => confidence > MOCK.high_confidence,
            Self::Medium => {
                (Self::AGGRESSIVE_BELOW..=MOCK.high_confidence).contains(&confidence)
            }
            Self::Aggressive => confidence < Self::AGGRESSIVE_BELOW,
        }
    }
}

/// The pair of drop-downs on the advanced board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetupFilters {
    pub timeframe: TimeframeFilter,
    pub confidence: ConfidenceFilter,
}

impl SetupFilters {
    pub fn accepts(&self, setup: &TradingSetup) -> bool {
        self.timeframe.matches(setup.horizon()) && self.confidence.matches(setup.confidence)
    }

    pub fn apply<'a>(&self, setups: &'a [TradingSetup]) -> Vec<&'a TradingSetup> {
        setups.iter().filter(|s| self.accepts(s)).collect()
    }

    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::data::{CALL_OPTIONS, PUT_OPTIONS, STOCK_SETUPS};

    #[test]
    fn default_filters_show_everything() {
        let f = SetupFilters::default();
        assert!(!f.is_active());
        assert_eq!(f.apply(STOCK_SETUPS).len(), STOCK_SETUPS.len());
        assert_eq!(f.apply(CALL_OPTIONS).len(), CALL_OPTIONS.len());
    }

    #[test]
    fn confidence_bands_partition_the_range() {
        for c in 0..=100u8 {
            let hits = ConfidenceFilter::iter()
                .filter(|f| *f != ConfidenceFilter::All)
                .filter(|f| f.matches(c))
                .count();
            assert_eq!(hits, 1, "confidence {} matched {} bands", c, hits);
        }
        assert!(ConfidenceFilter::Medium.matches(80));
        assert!(ConfidenceFilter::High.matches(81));
    }

    #[test]
    fn scalp_filter_keeps_only_scalp_stock_setups() {
        let f = SetupFilters {
            timeframe: TimeframeFilter::Scalp,
            ..Default::default()
        };
        let kept = f.apply(STOCK_SETUPS);
        assert!(!kept.is_empty());
        assert!(kept.iter().all(|s| s.horizon() == Horizon::Scalp));
    }

    #[test]
    fn filters_combine() {
        let f = SetupFilters {
            timeframe: TimeframeFilter::Swing,
            confidence: ConfidenceFilter::High,
        };
        for s in f.apply(STOCK_SETUPS).into_iter().chain(f.apply(PUT_OPTIONS)) {
            assert_eq!(s.horizon(), Horizon::Swing);
            assert!(s.confidence > 80);
        }
    }
}
