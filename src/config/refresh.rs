//! Refresh loop blueprints, one per board.

use std::time::Duration;

pub struct RefreshProfile {
    /// Fixed tick interval of the board's timer.
    pub interval: Duration,
    /// Chance that a tick synthesizes a new signal. `1.0` means every tick.
    pub append_probability: f64,
    /// Rolling window capacity (most recent first).
    pub window_capacity: usize,
    /// Signals generated at mount, before the first tick.
    pub initial_signals: usize,
    /// Confidence at or above which a value is drawn in the medium tier.
    /// The high tier threshold is shared (see `MOCK.high_confidence`).
    pub medium_confidence: u8,
    /// Whether ticks drift the overview cards (win rate, P&L, active trades).
    pub tracks_overview: bool,
    /// Whether ticks drift market intelligence and the patterns counter.
    pub tracks_intelligence: bool,
}

pub const BASIC_PROFILE: RefreshProfile = RefreshProfile {
    interval: Duration::from_millis(5000),
    append_probability: 0.3,
    window_capacity: 8,
    initial_signals: 8,
    medium_confidence: 70,
    tracks_overview: true,
    tracks_intelligence: false,
};

pub const ADVANCED_PROFILE: RefreshProfile = RefreshProfile {
    interval: Duration::from_millis(3000),
    append_probability: 1.0,
    window_capacity: 8,
    initial_signals: 0,
    medium_confidence: 60,
    tracks_overview: false,
    tracks_intelligence: true,
};
