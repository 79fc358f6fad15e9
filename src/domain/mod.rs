// Domain types and value objects
mod market;
mod setup;
mod signal;

pub use market::{Bias, MarketIntelligence, MarketOverview, Regime, SmartMoney};
pub use setup::{
    Dte, Horizon, Level, OptionLeg, OptionType, PatternPerformance, SetupAction, SetupType,
    TradingSetup, TrendDirection, TrendingStock,
};
pub use signal::{InstrumentKind, Side, SignalId, Timeframe, TradingSignal};
