use chrono::{DateTime, Utc};

use crate::domain::{MarketIntelligence, MarketOverview, TradingSignal};
use crate::utils::format_clock;

/// Things worth telling a developer about while a board is in debug mode.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    SignalGenerated(TradingSignal),
    SignalAdded {
        at: DateTime<Utc>,
        symbol: String,
        window_len: usize,
    },
    OverviewUpdated {
        at: DateTime<Utc>,
        overview: MarketOverview,
    },
    IntelligenceUpdated {
        at: DateTime<Utc>,
        intelligence: MarketIntelligence,
        patterns_analyzed: u64,
    },
}

pub trait TickObserver {
    fn on_event(&mut self, event: TickEvent);
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl TickObserver for LogObserver {
    fn on_event(&mut self, event: TickEvent) {
        match event {
            TickEvent::SignalGenerated(signal) => {
                log::info!("Generated new signal: {}", signal);
            }
            TickEvent::SignalAdded {
                at,
                symbol,
                window_len,
            } => {
                log::info!(
                    "[{}] Added new signal: {} (window {})",
                    format_clock(at),
                    symbol,
                    window_len
                );
            }
            TickEvent::OverviewUpdated { at, overview } => {
                log::info!(
                    "[{}] Market overview updated: win rate {:.1}%, P&L {}, active {}",
                    format_clock(at),
                    overview.win_rate,
                    overview.profit_loss,
                    overview.active_trades
                );
            }
            TickEvent::IntelligenceUpdated {
                at,
                intelligence,
                patterns_analyzed,
            } => {
                log::info!(
                    "[{}] Market intelligence updated: VIX {:.2}, breadth {:.1}, \
                     confidence {:.1}, liquidity {:.2}B, patterns {}",
                    format_clock(at),
                    intelligence.vix,
                    intelligence.breadth,
                    intelligence.confidence,
                    intelligence.liquidity,
                    patterns_analyzed
                );
            }
        }
    }
}

impl TickObserver for Vec<TickEvent> {
    fn on_event(&mut self, event: TickEvent) {
        self.push(event);
    }
}

/// Per-tick inputs other than state and randomness.
///
/// Events are only built and delivered when `debug` is set.
pub struct TickContext<'a> {
    pub now: DateTime<Utc>,
    pub debug: bool,
    observer: &'a mut dyn TickObserver,
}

impl<'a> TickContext<'a> {
    pub fn new(now: DateTime<Utc>, debug: bool, observer: &'a mut dyn TickObserver) -> Self {
        Self {
            now,
            debug,
            observer,
        }
    }

    #[inline]
    pub(crate) fn emit(&mut self, event: impl FnOnce() -> TickEvent) {
        if self.debug {
            self.observer.on_event(event());
        }
    }
}
