use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::config::{MARKET, RefreshProfile};
use crate::domain::{MarketIntelligence, MarketOverview, TradingSignal};
use crate::engine::{RollingWindow, TickContext, generate_signal};

/// Everything a board displays. Replaced wholesale on every tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardState {
    pub signals: RollingWindow<TradingSignal>,
    pub overview: MarketOverview,
    pub intelligence: MarketIntelligence,
    pub patterns_analyzed: u64,
    pub last_update: DateTime<Utc>,
    pub ticks: u64,
}

impl DashboardState {
    /// Seed values only, empty window.
    pub fn empty(capacity: usize, now: DateTime<Utc>) -> Self {
        Self {
            signals: RollingWindow::new(capacity),
            overview: MARKET.overview,
            intelligence: MARKET.intelligence,
            patterns_analyzed: MARKET.patterns_analyzed,
            last_update: now,
            ticks: 0,
        }
    }

    /// Seed values plus `profile.initial_signals` freshly generated signals.
    pub fn seeded<R: Rng + ?Sized>(
        profile: &RefreshProfile,
        rng: &mut R,
        ctx: &mut TickContext<'_>,
    ) -> Self {
        let mut state = Self::empty(profile.window_capacity, ctx.now);
        for _ in 0..profile.initial_signals {
            state.signals.push_front(generate_signal(rng, ctx));
        }
        state
    }

    pub fn stock_count(&self) -> usize {
        self.signals.iter().filter(|s| s.is_stock()).count()
    }

    pub fn option_count(&self) -> usize {
        self.signals.iter().filter(|s| s.is_option()).count()
    }
}
