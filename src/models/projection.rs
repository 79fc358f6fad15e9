//! Pure projections from board state to what the panels draw.
//!
//! Nothing here mutates state. Projecting the same state twice gives equal output.

use serde::Serialize;
use strum_macros::Display;

use crate::config::{MOCK, RefreshProfile};
use crate::domain::{InstrumentKind, Side, TradingSignal};
use crate::engine::DashboardState;
use crate::utils::format_clock;

/// Signals shown per column on the basic board.
pub const COLUMN_LIMIT: usize = 4;

/// Pattern win rates at or above this draw in the strong colour.
pub const STRONG_PATTERN_WIN_RATE: u8 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    /// `>= 80` high, `>= medium` medium, otherwise low.
    pub fn classify(confidence: u8, medium: u8) -> Self {
        if confidence >= MOCK.high_confidence {
            Self::High
        } else if confidence >= medium {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn for_profile(confidence: u8, profile: &RefreshProfile) -> Self {
        Self::classify(confidence, profile.medium_confidence)
    }
}

/// Pattern bars have two tiers only.
pub fn pattern_tier(win_rate: u8) -> ConfidenceTier {
    if win_rate >= STRONG_PATTERN_WIN_RATE {
        ConfidenceTier::High
    } else {
        ConfidenceTier::Medium
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalCard {
    pub side: &'static str,
    pub is_buy: bool,
    pub symbol: String,
    pub timeframe: String,
    pub confidence: u8,
    pub tier: ConfidenceTier,
    pub entry: String,
    pub target: String,
    pub stop: String,
    pub pattern: String,
    pub time: String,
}

impl SignalCard {
    pub fn project(signal: &TradingSignal, profile: &RefreshProfile) -> Self {
        Self {
            side: signal.side.label(),
            is_buy: signal.side == Side::Buy,
            symbol: signal.symbol.clone(),
            timeframe: signal.timeframe.to_string(),
            confidence: signal.confidence,
            tier: ConfidenceTier::for_profile(signal.confidence, profile),
            entry: format_price(signal.entry_price),
            target: format_price(signal.target),
            stop: format_price(signal.stop_loss),
            pattern: signal.pattern.clone(),
            time: format_clock(signal.created_at),
        }
    }
}

/// Newest `COLUMN_LIMIT` signals of one kind.
pub fn signal_column(state: &DashboardState, kind: InstrumentKind) -> Vec<&TradingSignal> {
    state
        .signals
        .iter()
        .filter(|s| s.kind == kind)
        .take(COLUMN_LIMIT)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewView {
    pub bias: String,
    pub bias_badge: String,
    pub win_rate: String,
    pub total_trades: String,
    pub profit_loss: String,
    pub profit_loss_positive: bool,
    pub profit_loss_pct: String,
    pub active_trades: String,
    pub active_breakdown: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicBoardView {
    pub last_update: String,
    pub overview: OverviewView,
    pub stocks: Vec<SignalCard>,
    pub options: Vec<SignalCard>,
    pub total_signals: usize,
}

pub fn project_basic(state: &DashboardState, profile: &RefreshProfile) -> BasicBoardView {
    let stocks: Vec<SignalCard> = signal_column(state, InstrumentKind::Stock)
        .into_iter()
        .map(|s| SignalCard::project(s, profile))
        .collect();
    let options: Vec<SignalCard> = signal_column(state, InstrumentKind::Option)
        .into_iter()
        .map(|s| SignalCard::project(s, profile))
        .collect();

    let o = &state.overview;
    let overview = OverviewView {
        bias: o.bias.to_string(),
        bias_badge: format!("{} Trending", o.bias.arrow()),
        win_rate: format!("{}%", o.win_rate),
        total_trades: format!("Last {} trades", o.total_trades),
        profit_loss: format_money(o.profit_loss),
        profit_loss_positive: o.profit_loss >= 0,
        profit_loss_pct: format!(
            "{} {:.1}%",
            if o.profit_loss >= 0 { "↑" } else { "↓" },
            o.profit_loss_pct()
        ),
        active_trades: o.active_trades.to_string(),
        active_breakdown: format!("{} stocks, {} options", stocks.len(), options.len()),
    };

    BasicBoardView {
        last_update: format_clock(state.last_update),
        overview,
        stocks,
        options,
        total_signals: state.signals.len(),
    }
}

pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Whole dollars with thousands separators, e.g. `$12,450` or `-$1,203`.
pub fn format_money(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{}${}", sign, format_count(value.unsigned_abs()))
}

/// `14,827` style counter.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
