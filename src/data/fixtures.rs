use crate::domain::{
    Dte, Level, OptionLeg, OptionType, PatternPerformance, SetupAction, SetupType, TradingSetup,
    TrendDirection, TrendingStock,
};

const STOCK_SIZE_SWING: &str = "20% ($10,000)";
const STOCK_SIZE_SCALP: &str = "10% ($5,000)";
const OPTION_SIZE: &str = "5% ($2,500)";

pub const STOCK_SETUPS: &[TradingSetup] = &[
    TradingSetup {
        id: "stock-1",
        symbol: "NVDA",
        setup_type: SetupType::Swing,
        action: SetupAction::Long,
        pattern: "Bull Flag Breakout + Volume Surge",
        confidence: 92,
        entry: 745.50,
        target: Level::Price(768.00),
        stop: Level::Price(738.00),
        rr_ratio: "3.2:1",
        indicators: &["RVOL: 4.2x", "RSI: 58", "Above VWAP", "20MA Support", "Gap Fill"],
        size: STOCK_SIZE_SWING,
        option: None,
    },
    TradingSetup {
        id: "stock-2",
        symbol: "META",
        setup_type: SetupType::Swing,
        action: SetupAction::Long,
        pattern: "VWAP Reclaim + Institutional Flow",
        confidence: 88,
        entry: 482.30,
        target: Level::Price(495.00),
        stop: Level::Price(478.00),
        rr_ratio: "2.9:1",
        indicators: &["RVOL: 3.8x", "RSI: 52", "VWAP Cross", "Dark Pool: $45M"],
        size: STOCK_SIZE_SWING,
        option: None,
    },
    TradingSetup {
        id: "stock-3",
        symbol: "TSLA",
        setup_type: SetupType::Scalp,
        action: SetupAction::Long,
        pattern: "Opening Range Break",
        confidence: 76,
        entry: 185.25,
        target: Level::Price(187.50),
        stop: Level::Price(184.50),
        rr_ratio: "3.0:1",
        indicators: &["RVOL: 5.1x", "RSI: 61", "30min Hold", "Pre-Market Gap"],
        size: STOCK_SIZE_SCALP,
        option: None,
    },
    TradingSetup {
        id: "stock-4",
        symbol: "AAPL",
        setup_type: SetupType::Scalp,
        action: SetupAction::Short,
        pattern: "Resistance Rejection",
        confidence: 73,
        entry: 178.90,
        target: Level::Price(177.20),
        stop: Level::Price(179.40),
        rr_ratio: "3.4:1",
        indicators: &["RVOL: 2.3x", "RSI: 71", "Below VWAP", "15min Scalp"],
        size: STOCK_SIZE_SCALP,
        option: None,
    },
];

#[allow(clippy::too_many_arguments)]
const fn option(
    id: &'static str,
    symbol: &'static str,
    option_type: OptionType,
    pattern: &'static str,
    confidence: u8,
    strike: f64,
    dte: u16,
    premium: f64,
    target_pct: f64,
    stop_pct: f64,
    rr_ratio: &'static str,
    indicators: &'static [&'static str],
) -> TradingSetup {
    TradingSetup {
        id,
        symbol,
        setup_type: SetupType::Option,
        action: match option_type {
            OptionType::Call => SetupAction::Long,
            OptionType::Put => SetupAction::Short,
        },
        pattern,
        confidence,
        entry: premium,
        target: Level::Pct(target_pct),
        stop: Level::Pct(stop_pct),
        rr_ratio,
        indicators,
        size: OPTION_SIZE,
        option: Some(OptionLeg {
            option_type,
            strike,
            dte: Dte(dte),
            premium,
        }),
    }
}

#[rustfmt::skip]
pub const CALL_OPTIONS: &[TradingSetup] = &[
    option("call-1", "SPY", OptionType::Call, "Morning Momentum Surge", 89, 453.0, 0, 4.25, 60.0, -30.0, "2.0:1",
        &["IV: 18%", "Delta: 0.45", "Volume: 28K", "OI: 45K"]),
    option("call-2", "QQQ", OptionType::Call, "VWAP Reclaim Pattern", 85, 388.0, 2, 5.80, 40.0, -25.0, "1.6:1",
        &["IV: 22%", "Delta: 0.52", "Gamma: 0.08", "Flow: Bullish"]),
    option("call-3", "MSFT", OptionType::Call, "Oversold Bounce", 82, 425.0, 7, 7.20, 35.0, -20.0, "1.75:1",
        &["IV: 19%", "RSI: 32", "Support Test", "Vol Spike"]),
    option("call-4", "AMD", OptionType::Call, "Trend Continuation", 78, 165.0, 14, 4.50, 40.0, -25.0, "1.6:1",
        &["IV: 38%", "Trend: Up", "20MA Support", "Sector Lead"]),
    option("call-5", "AMZN", OptionType::Call, "Squeeze Breakout", 86, 180.0, 3, 3.90, 70.0, -35.0, "2.0:1",
        &["IV Crush", "TTM Squeeze", "RVOL: 6.2x", "Bollinger Tight"]),
];

#[rustfmt::skip]
pub const PUT_OPTIONS: &[TradingSetup] = &[
    option("put-1", "SPY", OptionType::Put, "Rejection Reversal", 75, 450.0, 0, 3.20, 60.0, -30.0, "2.0:1",
        &["RSI: 78", "Resistance", "Divergence", "Put Flow"]),
    option("put-2", "IWM", OptionType::Put, "VWAP Failure", 72, 218.0, 5, 4.80, 40.0, -25.0, "1.6:1",
        &["Below VWAP", "Failed Test", "Weak Sector", "IV: 24%"]),
    option("put-3", "COIN", OptionType::Put, "Overbought Fade", 74, 240.0, 7, 8.50, 35.0, -20.0, "1.75:1",
        &["RSI: 82", "Extended", "IV: 68%", "BTC Weak"]),
    option("put-4", "ARKK", OptionType::Put, "Breakdown Continuation", 81, 52.0, 10, 2.30, 40.0, -25.0, "1.6:1",
        &["Downtrend", "50MA Reject", "Outflows", "Tech Weak"]),
    option("put-5", "BABA", OptionType::Put, "Support Break", 83, 85.0, 2, 1.85, 70.0, -35.0, "2.0:1",
        &["Key Break", "Volume Spike", "China Risk", "RVOL: 4.8x"]),
];

#[rustfmt::skip]
pub const PATTERNS: &[PatternPerformance] = &[
    PatternPerformance { name: "Bull Flag Breakout", win_rate: 78, total_trades: 45, wins: 35, avg_gain: 2.8, last_updated: "Today" },
    PatternPerformance { name: "VWAP Reclaim", win_rate: 72, total_trades: 52, wins: 35, avg_gain: 2.1, last_updated: "Today" },
    PatternPerformance { name: "Power Hour Squeeze", win_rate: 65, total_trades: 29, wins: 19, avg_gain: 2.5, last_updated: "Yesterday" },
    PatternPerformance { name: "Opening Range Break", win_rate: 70, total_trades: 40, wins: 28, avg_gain: 3.2, last_updated: "Today" },
    PatternPerformance { name: "Oversold Bounce", win_rate: 68, total_trades: 38, wins: 26, avg_gain: 1.9, last_updated: "Today" },
    PatternPerformance { name: "Trend Continuation", win_rate: 64, total_trades: 33, wins: 21, avg_gain: 2.3, last_updated: "2 days ago" },
];

#[rustfmt::skip]
pub const TRENDING_STOCKS: &[TrendingStock] = &[
    TrendingStock { symbol: "SMCI", momentum: 92, rvol: 8.3, change: 12.4, pattern: "Breakout", direction: TrendDirection::Up },
    TrendingStock { symbol: "PLTR", momentum: 88, rvol: 6.7, change: 8.9, pattern: "AI Rally", direction: TrendDirection::Up },
    TrendingStock { symbol: "ARM", momentum: 85, rvol: 5.2, change: 7.2, pattern: "Squeeze", direction: TrendDirection::Up },
    TrendingStock { symbol: "RIVN", momentum: -78, rvol: 4.1, change: -5.8, pattern: "Breakdown", direction: TrendDirection::Down },
];
