use std::sync::LazyLock;

// Glyphs covered by egui's bundled emoji fonts.
pub const ICON_CHART: &str = "📊";
pub const ICON_TREND_UP: &str = "📈";
pub const ICON_TREND_DOWN: &str = "📉";
pub const ICON_TARGET: &str = "🎯";
pub const ICON_CLOCK: &str = "🕒";
pub const ICON_DOLLAR: &str = "💲";
pub const ICON_PULSE: &str = "〰";
pub const ICON_BUG: &str = "🐛";
pub const ICON_WARNING: &str = "⚠";
pub const ICON_BOLT: &str = "⚡";
pub const ICON_ROBOT: &str = "🤖";
pub const ICON_SATELLITE: &str = "📡";
pub const ICON_FIRE: &str = "🔥";
pub const ICON_BRAIN: &str = "🧠";
pub const ICON_CRYSTAL: &str = "🔮";
pub const ICON_ROCKET: &str = "🚀";
pub const ICON_LIVE: &str = "●";

pub struct UiText {
    pub app_title: String,

    // --- Header ---
    pub label_live: String,
    pub label_debug: String,
    pub label_debug_on: String,
    pub hover_debug: String,

    // --- Debug card ---
    pub debug_title: String,
    pub debug_total: String,
    pub debug_stocks: String,
    pub debug_options: String,
    pub debug_last_update: String,
    pub debug_next_update: String,
    pub debug_idle: String,

    // --- Overview cards ---
    pub ov_bias: String,
    pub ov_win_rate: String,
    pub ov_pl_today: String,
    pub ov_active_trades: String,

    // --- Signal columns ---
    pub sig_stock_heading: String,
    pub sig_option_heading: String,
    pub sig_no_stock: String,
    pub sig_no_option: String,
    pub label_entry: String,
    pub label_target: String,
    pub label_stop: String,

    pub alert_title: String,
    pub alert_body: String,

    // --- Advanced board ---
    pub adv_subtitle: String,
    pub chip_scanning: String,
    pub chip_ai_active: String,
    pub chip_patterns: String,
    pub chip_latency: String,
    pub chip_win_rate: String,

    pub intel_heading: String,
    pub intel_regime: String,
    pub intel_confidence: String,
    pub intel_vix: String,
    pub intel_vix_note: String,
    pub intel_sector: String,
    pub intel_sector_note: String,
    pub intel_liquidity: String,
    pub intel_liquidity_note: String,
    pub intel_options_flow: String,
    pub intel_options_flow_note: String,
    pub intel_smart_money: String,
    pub intel_smart_money_note: String,

    pub filter_timeframe: String,
    pub filter_confidence: String,
    pub filter_none_match: String,
    pub filter_reset: String,

    pub setups_heading: String,
    pub options_heading: String,
    pub label_confidence: String,
    pub label_strike: String,
    pub label_premium: String,
    pub label_rr: String,
    pub label_size: String,
    pub btn_execute_trade: String,
    pub btn_execute: String,
    pub hover_execute: String,

    pub trend_heading: String,
    pub trend_momentum: String,
    pub trend_rvol: String,

    pub pattern_heading: String,
    pub pattern_win: String,
    pub pattern_total: String,
    pub pattern_avg: String,
    pub pattern_chart_y: String,

    pub feed_heading: String,
    pub feed_waiting: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: format!("{} Trading Dashboard", ICON_CHART),

    label_live: format!("{} Live", ICON_LIVE),
    label_debug: "Debug".to_string(),
    label_debug_on: format!("{} Debug", ICON_BUG),
    hover_debug: "Log every generated signal and market update".to_string(),

    debug_title: format!("{} Debug Info", ICON_BUG),
    debug_total: "Total Signals".to_string(),
    debug_stocks: "Stock Signals".to_string(),
    debug_options: "Option Signals".to_string(),
    debug_last_update: "Last Update".to_string(),
    debug_next_update: "Next Update".to_string(),
    debug_idle: "timer idle".to_string(),

    ov_bias: format!("{} Market Bias", ICON_PULSE),
    ov_win_rate: format!("{} Win Rate", ICON_TARGET),
    ov_pl_today: format!("{} P&L Today", ICON_DOLLAR),
    ov_active_trades: format!("{} Active Trades", ICON_CLOCK),

    sig_stock_heading: format!("{} Stock Signals", ICON_TREND_UP),
    sig_option_heading: format!("{} Option Signals", ICON_TREND_DOWN),
    sig_no_stock: "No stock signals available".to_string(),
    sig_no_option: "No option signals available".to_string(),
    label_entry: "Entry".to_string(),
    label_target: "Target".to_string(),
    label_stop: "Stop".to_string(),

    alert_title: format!("{} Market Alert:", ICON_WARNING),
    alert_body: "High volatility detected. Trade with caution and use proper risk management."
        .to_string(),

    adv_subtitle:
        "Neural Pattern Recognition • Multi-Timeframe Analysis • Real-Time Execution".to_string(),
    chip_scanning: format!("{} LIVE SCANNING", ICON_LIVE),
    chip_ai_active: format!("{} AI: ACTIVE", ICON_ROBOT),
    chip_patterns: format!("{} Patterns Analyzed", ICON_CHART),
    chip_latency: format!("{} Latency: 12ms", ICON_BOLT),
    chip_win_rate: format!("{} Win Rate: 71.3%", ICON_TARGET),

    intel_heading: format!("{} AI Market Intelligence", ICON_CRYSTAL),
    intel_regime: "Market Regime".to_string(),
    intel_confidence: "Confidence".to_string(),
    intel_vix: "Volatility Forecast".to_string(),
    intel_vix_note: "→ Stable (VIX)".to_string(),
    intel_sector: "Sector Rotation".to_string(),
    intel_sector_note: "↑ Leading +3.2%".to_string(),
    intel_liquidity: "Liquidity Flow".to_string(),
    intel_liquidity_note: "↑ Inflow Detected".to_string(),
    intel_options_flow: "Options Flow".to_string(),
    intel_options_flow_note: "Call/Put Ratio".to_string(),
    intel_smart_money: "Smart Money".to_string(),
    intel_smart_money_note: "↑ Institutions Active".to_string(),

    filter_timeframe: "Timeframe:".to_string(),
    filter_confidence: "Confidence:".to_string(),
    filter_none_match: "No setups match the current filters".to_string(),
    filter_reset: "Reset".to_string(),

    setups_heading: format!("{} Stock Trading Setups", ICON_TREND_UP),
    options_heading: format!("{} Options Trading Setups", ICON_BOLT),
    label_confidence: "Confidence".to_string(),
    label_strike: "Strike:".to_string(),
    label_premium: "Premium:".to_string(),
    label_rr: "R:R".to_string(),
    label_size: "Size:".to_string(),
    btn_execute_trade: "Execute Trade".to_string(),
    btn_execute: "Execute".to_string(),
    hover_execute: "Display only. No orders are sent.".to_string(),

    trend_heading: format!("{} Real-Time Trend Detection", ICON_SATELLITE),
    trend_momentum: "Momentum".to_string(),
    trend_rvol: "RVOL:".to_string(),

    pattern_heading: format!("{} AI Pattern Recognition Engine", ICON_BRAIN),
    pattern_win: "Win".to_string(),
    pattern_total: "Total".to_string(),
    pattern_avg: "Avg".to_string(),
    pattern_chart_y: "Win rate %".to_string(),

    feed_heading: format!("{} Live Signal Feed", ICON_SATELLITE),
    feed_waiting: "Waiting for the first scan…".to_string(),
});
