use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use uuid::Uuid;

pub type SignalId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentKind {
    #[strum(to_string = "stock")]
    Stock,
    #[strum(to_string = "option")]
    Option,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[strum(to_string = "buy")]
    Buy,
    #[strum(to_string = "sell")]
    Sell,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[strum(to_string = "scalp")]
    Scalp,
    #[strum(to_string = "swing")]
    Swing,
}

/// A single fabricated trade recommendation.
///
/// Nothing ties `stop_loss` / `target` to `side`: a sell signal still carries a
/// stop below and a target above entry, exactly as the generator produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSignal {
    pub id: SignalId,
    pub kind: InstrumentKind,
    pub side: Side,
    pub symbol: String,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub target: f64,
    pub confidence: u8,
    pub pattern: String,
    pub timeframe: Timeframe,
    pub created_at: DateTime<Utc>,
    pub notes: String,
}

impl TradingSignal {
    #[inline]
    pub fn is_stock(&self) -> bool {
        self.kind == InstrumentKind::Stock
    }

    #[inline]
    pub fn is_option(&self) -> bool {
        self.kind == InstrumentKind::Option
    }
}

impl std::fmt::Display for TradingSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} @ {:.2} (stop {:.2}, target {:.2}, {}%, {}, {})",
            self.side.label(),
            self.kind,
            self.symbol,
            self.entry_price,
            self.stop_loss,
            self.target,
            self.confidence,
            self.pattern,
            self.timeframe
        )
    }
}
