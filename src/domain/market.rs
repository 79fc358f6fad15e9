use serde::Serialize;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumIter, Display)]
#[serde(rename_all = "lowercase")]
pub enum Bias {
    #[strum(to_string = "bullish")]
    Bullish,
    #[strum(to_string = "bearish")]
    Bearish,
    #[strum(to_string = "neutral")]
    Neutral,
}

impl Bias {
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Bullish => "↑",
            Self::Bearish => "↓",
            Self::Neutral => "→",
        }
    }
}

/// Headline figures on the basic board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketOverview {
    pub bias: Bias,
    /// 0..=100, one decimal place.
    pub win_rate: f64,
    /// Unbounded, drifts every tick.
    pub profit_loss: i64,
    pub total_trades: u32,
    /// 0..=8
    pub active_trades: u32,
}

impl MarketOverview {
    /// P&L expressed the way the board labels it: `|P&L| / 100` percent.
    pub fn profit_loss_pct(&self) -> f64 {
        (self.profit_loss as f64 / 100.0).abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumIter, Display)]
#[serde(rename_all = "UPPERCASE")]
pub enum Regime {
    #[strum(to_string = "BULLISH")]
    Bullish,
    #[strum(to_string = "BEARISH")]
    Bearish,
    #[strum(to_string = "NEUTRAL")]
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumIter, Display)]
#[serde(rename_all = "UPPERCASE")]
pub enum SmartMoney {
    #[strum(to_string = "BUYING")]
    Buying,
    #[strum(to_string = "SELLING")]
    Selling,
    #[strum(to_string = "NEUTRAL")]
    Neutral,
}

/// Market-wide panel on the advanced board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketIntelligence {
    pub regime: Regime,
    /// Regime confidence, 50..=95
    pub confidence: f64,
    /// 10..=30
    pub vix: f64,
    pub sector_leader: &'static str,
    /// Billions, 2..=6
    pub liquidity: f64,
    /// Call/put ratio
    pub options_flow: f64,
    pub smart_money: SmartMoney,
    /// 0..=100
    pub breadth: f64,
}
