//! Headless run of the refresh loop: mount a board, advance N ticks on a
//! synthetic clock, print the rolling window and market figures.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use tabled::{Table, Tabled};

use trading_dashboard::{
    BoardKind, DashboardState, LogObserver, TickContext, TickEvent, TickObserver, advance,
    models::format_money,
    utils::format_clock,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run the mock refresh loop without a window")]
struct Args {
    #[arg(long, value_enum, default_value_t = BoardKind::Basic)]
    board: BoardKind,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of timer ticks to run after mount
    #[arg(long, default_value_t = 10)]
    ticks: u32,

    /// Emit the final state as JSON instead of tables
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log every generated signal and market update
    #[arg(long, default_value_t = false)]
    debug: bool,
}

#[derive(Tabled)]
struct SignalRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Side")]
    side: &'static str,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Entry")]
    entry: String,
    #[tabled(rename = "Stop")]
    stop: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Conf")]
    confidence: String,
    #[tabled(rename = "Pattern")]
    pattern: String,
    #[tabled(rename = "TF")]
    timeframe: String,
}

#[derive(Tabled)]
struct FigureRow {
    #[tabled(rename = "Figure")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Serialize)]
struct Report<'a> {
    board: BoardKind,
    seed: u64,
    ticks: u32,
    state: &'a DashboardState,
}

/// Advance the synthetic clock by one interval.
fn next_tick(now: DateTime<Utc>, interval: ChronoDuration, tick: u32) -> Result<DateTime<Utc>> {
    now.checked_add_signed(interval)
        .with_context(|| format!("Synthetic clock overflowed at tick {}", tick))
}

fn figure(name: &'static str, value: String) -> FigureRow {
    FigureRow { name, value }
}

/// Counts events while forwarding them to the log.
struct CountingObserver {
    inner: LogObserver,
    added: usize,
}

impl TickObserver for CountingObserver {
    fn on_event(&mut self, event: TickEvent) {
        if matches!(event, TickEvent::SignalAdded { .. }) {
            self.added += 1;
        }
        self.inner.on_event(event);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let profile = args.board.profile();
    let interval = ChronoDuration::from_std(profile.interval)
        .context("Refresh interval does not fit a chrono duration")?;

    log::info!(
        "Simulating {} for {} ticks (seed {})",
        args.board,
        args.ticks,
        args.seed
    );

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut observer = CountingObserver {
        inner: LogObserver,
        added: 0,
    };
    let start = Utc::now();

    let mut ctx = TickContext::new(start, args.debug, &mut observer);
    let mut state = DashboardState::seeded(profile, &mut rng, &mut ctx);
    let mut now = start;
    for tick in 1..=args.ticks {
        now = next_tick(now, interval, tick)?;
        let mut ctx = TickContext::new(now, args.debug, &mut observer);
        state = advance(state, profile, &mut rng, &mut ctx);
    }
    if args.debug {
        log::info!("{} signals added during the run", observer.added);
    }

    if args.json {
        let report = Report {
            board: args.board,
            seed: args.seed,
            ticks: args.ticks,
            state: &state,
        };
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize state")?;
        println!("{}", out);
        return Ok(());
    }

    let rows: Vec<SignalRow> = state
        .signals
        .iter()
        .map(|s| SignalRow {
            time: format_clock(s.created_at),
            side: s.side.label(),
            kind: s.kind.to_string(),
            symbol: s.symbol.clone(),
            entry: format!("{:.2}", s.entry_price),
            stop: format!("{:.2}", s.stop_loss),
            target: format!("{:.2}", s.target),
            confidence: format!("{}%", s.confidence),
            pattern: s.pattern.clone(),
            timeframe: s.timeframe.to_string(),
        })
        .collect();

    let mut figures = Vec::new();
    if profile.tracks_overview {
        let o = &state.overview;
        figures.push(figure("Win rate", format!("{}%", o.win_rate)));
        figures.push(figure("P&L", format_money(o.profit_loss)));
        figures.push(figure("Active trades", o.active_trades.to_string()));
    }
    if profile.tracks_intelligence {
        let i = &state.intelligence;
        figures.push(figure("VIX", format!("{:.2}", i.vix)));
        figures.push(figure("Breadth", format!("{:.1}", i.breadth)));
        figures.push(figure("Regime confidence", format!("{:.1}%", i.confidence)));
        figures.push(figure("Liquidity", format!("${:.2}B", i.liquidity)));
        figures.push(figure("Patterns analyzed", state.patterns_analyzed.to_string()));
    }

    println!(
        "{} after {} ticks: {} stocks, {} options in window",
        args.board,
        state.ticks,
        state.stock_count(),
        state.option_count()
    );
    println!("{}", Table::new(rows));
    println!("{}", Table::new(figures));
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn clock_advances_one_interval_per_tick() {
        let start = Utc.with_ymd_and_hms(2026, 3, 2, 9, 30, 0).unwrap();
        let mut now = start;
        for tick in 1..=4 {
            now = next_tick(now, ChronoDuration::seconds(3), tick).unwrap();
        }
        assert_eq!(now, start + ChronoDuration::seconds(12));
    }

    #[test]
    fn clock_overflow_is_an_error_not_a_panic() {
        let near_end = DateTime::<Utc>::MAX_UTC - ChronoDuration::seconds(4);
        let now = next_tick(near_end, ChronoDuration::seconds(3), 1).unwrap();
        let err = next_tick(now, ChronoDuration::seconds(3), 2).unwrap_err();
        assert!(err.to_string().contains("tick 2"));
    }
}
