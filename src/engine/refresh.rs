use rand::Rng;

use crate::config::{MARKET, RefreshProfile};
use crate::domain::{MarketIntelligence, MarketOverview};
use crate::engine::{DashboardState, TickContext, TickEvent, generate_signal};
use crate::utils::{round_to, unit_jitter_int};

/// One refresh tick: `(state, rng) -> state`.
///
/// Signal append and market jitter are independent; neither reads what the
/// other wrote. Only the panels the profile tracks are drifted.
pub fn advance<R: Rng + ?Sized>(
    state: DashboardState,
    profile: &RefreshProfile,
    rng: &mut R,
    ctx: &mut TickContext<'_>,
) -> DashboardState {
    let at = ctx.now;
    let mut next = state;
    next.last_update = at;
    next.ticks += 1;

    if rng.gen_bool(profile.append_probability) {
        let signal = generate_signal(rng, ctx);
        let symbol = signal.symbol.clone();
        next.signals.push_front(signal);
        let window_len = next.signals.len();
        ctx.emit(|| TickEvent::SignalAdded {
            at,
            symbol,
            window_len,
        });
    }

    if profile.tracks_overview {
        next.overview = jitter_overview(&next.overview, rng);
        let overview = next.overview;
        ctx.emit(|| TickEvent::OverviewUpdated { at, overview });
    }

    if profile.tracks_intelligence {
        next.intelligence = jitter_intelligence(&next.intelligence, rng);
        next.patterns_analyzed += rng.gen_range(MARKET.jitter.patterns_step);
        let (intelligence, patterns_analyzed) = (next.intelligence, next.patterns_analyzed);
        ctx.emit(|| TickEvent::IntelligenceUpdated {
            at,
            intelligence,
            patterns_analyzed,
        });
    }

    next
}

/// Win rate drifts by up to ±1 (one decimal), P&L by up to ±500, active trades
/// by -1 or 0.
pub fn jitter_overview<R: Rng + ?Sized>(prev: &MarketOverview, rng: &mut R) -> MarketOverview {
    let j = &MARKET.jitter;

    let win_rate = j
        .win_rate
        .clamp(round_to(prev.win_rate + j.win_rate.offset(rng.r#gen()), 1));

    let pl_step = ((rng.r#gen::<f64>() - 0.5) * j.profit_loss_magnitude).floor() as i64;
    let profit_loss = prev.profit_loss.saturating_add(pl_step);

    let active =
        prev.active_trades as i64 + unit_jitter_int(rng.r#gen(), j.active_trades.magnitude);
    let active_trades =
        active.clamp(j.active_trades.min as i64, j.active_trades.max as i64) as u32;

    MarketOverview {
        win_rate,
        profit_loss,
        active_trades,
        ..*prev
    }
}

pub fn jitter_intelligence<R: Rng + ?Sized>(
    prev: &MarketIntelligence,
    rng: &mut R,
) -> MarketIntelligence {
    let j = &MARKET.jitter;
    MarketIntelligence {
        vix: j.vix.apply(prev.vix, rng.r#gen()),
        breadth: j.breadth.apply(prev.breadth, rng.r#gen()),
        confidence: j.confidence.apply(prev.confidence, rng.r#gen()),
        liquidity: j.liquidity.apply(prev.liquidity, rng.r#gen()),
        ..*prev
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::config::{ADVANCED_PROFILE, BASIC_PROFILE};

    fn t0() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 9, 30, 0).unwrap()
    }

    fn run(
        mut state: DashboardState,
        profile: &RefreshProfile,
        seed: u64,
        ticks: usize,
        debug: bool,
        events: &mut Vec<TickEvent>,
    ) -> DashboardState {
        let mut rng = StdRng::seed_from_u64(seed);
        for i in 0..ticks {
            let now = t0() + Duration::seconds(i as i64 * 5);
            let mut ctx = TickContext::new(now, debug, events);
            state = advance(state, profile, &mut rng, &mut ctx);
        }
        state
    }

    #[test]
    fn bounds_hold_after_many_ticks() {
        for seed in 0..20 {
            let mut events = Vec::new();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut ctx = TickContext::new(t0(), false, &mut events);
            let mut state = DashboardState::seeded(&BASIC_PROFILE, &mut rng, &mut ctx);
            for _ in 0..500 {
                state = advance(state, &BASIC_PROFILE, &mut rng, &mut ctx);
                assert!((0.0..=100.0).contains(&state.overview.win_rate));
                assert!(state.overview.active_trades <= 8);
                assert!(state.signals.len() <= 8);
                let intel = &state.intelligence;
                assert!((10.0..=30.0).contains(&intel.vix));
                assert!((0.0..=100.0).contains(&intel.breadth));
                assert!((50.0..=95.0).contains(&intel.confidence));
                assert!((2.0..=6.0).contains(&intel.liquidity));
            }
        }
    }

    #[test]
    fn eight_unconditional_ticks_fill_the_window_newest_first() {
        let mut events = Vec::new();
        let state = DashboardState::empty(ADVANCED_PROFILE.window_capacity, t0());
        let state = run(state, &ADVANCED_PROFILE, 42, 8, false, &mut events);

        assert_eq!(state.signals.len(), 8);
        assert_eq!(state.ticks, 8);
        let stamps: Vec<_> = state.signals.iter().map(|s| s.created_at).collect();
        let mut sorted = stamps.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(stamps, sorted);
        assert_eq!(stamps[0], t0() + Duration::seconds(35));
        assert_eq!(stamps[7], t0());
    }

    #[test]
    fn window_keeps_only_the_eight_most_recent() {
        let mut events = Vec::new();
        let state = DashboardState::empty(ADVANCED_PROFILE.window_capacity, t0());
        let state = run(state, &ADVANCED_PROFILE, 9, 20, false, &mut events);
        assert_eq!(state.signals.len(), 8);
        assert_eq!(
            state.signals.latest().map(|s| s.created_at),
            Some(t0() + Duration::seconds(19 * 5))
        );
        assert!(
            state
                .signals
                .iter()
                .all(|s| s.created_at >= t0() + Duration::seconds(12 * 5))
        );
    }

    #[test]
    fn basic_board_appends_roughly_three_ticks_in_ten() {
        let mut events = Vec::new();
        let mut rng = StdRng::seed_from_u64(1234);
        let mut appended = 0;
        let mut state = DashboardState::empty(4_000, t0());
        for _ in 0..2_000 {
            let before = state.signals.len();
            let mut ctx = TickContext::new(t0(), false, &mut events);
            state = advance(state, &BASIC_PROFILE, &mut rng, &mut ctx);
            appended += state.signals.len() - before;
        }
        let ratio = appended as f64 / 2_000.0;
        assert!((0.25..0.35).contains(&ratio), "append ratio {}", ratio);
    }

    #[test]
    fn win_rate_at_ceiling_never_exceeds_it() {
        let mut rng = StdRng::seed_from_u64(77);
        let mut overview = MARKET.overview;
        overview.win_rate = 100.0;
        for _ in 0..1_000 {
            let next = jitter_overview(&overview, &mut rng);
            assert!(next.win_rate <= 100.0);
            overview.win_rate = 100.0;
        }
    }

    #[test]
    fn untouched_fields_carry_over() {
        let mut rng = StdRng::seed_from_u64(8);
        let next = jitter_overview(&MARKET.overview, &mut rng);
        assert_eq!(next.bias, MARKET.overview.bias);
        assert_eq!(next.total_trades, MARKET.overview.total_trades);
        assert!((next.profit_loss - MARKET.overview.profit_loss).abs() <= 500);

        let intel = jitter_intelligence(&MARKET.intelligence, &mut rng);
        assert_eq!(intel.sector_leader, "TECH");
        assert_eq!(intel.options_flow, MARKET.intelligence.options_flow);
        assert_eq!(intel.regime, MARKET.intelligence.regime);
    }

    #[test]
    fn patterns_counter_climbs_by_ten_to_fifty_nine() {
        let mut events = Vec::new();
        let mut state = DashboardState::empty(8, t0());
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let before = state.patterns_analyzed;
            let mut ctx = TickContext::new(t0(), false, &mut events);
            state = advance(state, &ADVANCED_PROFILE, &mut rng, &mut ctx);
            let step = state.patterns_analyzed - before;
            assert!((10..60).contains(&step), "step {}", step);
        }
    }

    #[test]
    fn same_seed_same_history() {
        let mut events = Vec::new();
        let a = run(DashboardState::empty(8, t0()), &BASIC_PROFILE, 99, 30, false, &mut events);
        let b = run(DashboardState::empty(8, t0()), &BASIC_PROFILE, 99, 30, false, &mut events);
        assert_eq!(a, b);
    }

    #[test]
    fn no_events_without_debug() {
        let mut events = Vec::new();
        run(DashboardState::empty(8, t0()), &ADVANCED_PROFILE, 5, 25, false, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn debug_reports_every_update() {
        let mut events = Vec::new();
        run(DashboardState::empty(8, t0()), &ADVANCED_PROFILE, 5, 3, true, &mut events);
        let added = events
            .iter()
            .filter(|e| matches!(e, TickEvent::SignalAdded { .. }))
            .count();
        let intelligence = events
            .iter()
            .filter(|e| matches!(e, TickEvent::IntelligenceUpdated { .. }))
            .count();
        let generated = events
            .iter()
            .filter(|e| matches!(e, TickEvent::SignalGenerated(_)))
            .count();
        assert_eq!((added, intelligence, generated), (3, 3, 3));
        assert!(!events.iter().any(|e| matches!(e, TickEvent::OverviewUpdated { .. })));
    }

    #[test]
    fn basic_board_leaves_intelligence_alone() {
        let mut events = Vec::new();
        let start = DashboardState::empty(8, t0());
        let state = run(start.clone(), &BASIC_PROFILE, 13, 40, true, &mut events);
        assert_eq!(state.intelligence, start.intelligence);
        assert_eq!(state.patterns_analyzed, start.patterns_analyzed);
        assert!(!events.iter().any(|e| matches!(e, TickEvent::IntelligenceUpdated { .. })));
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, TickEvent::OverviewUpdated { .. }))
                .count(),
            40
        );
    }

    #[test]
    fn advanced_board_leaves_overview_alone() {
        let mut events = Vec::new();
        let start = DashboardState::empty(8, t0());
        let state = run(start.clone(), &ADVANCED_PROFILE, 13, 40, false, &mut events);
        assert_eq!(state.overview, start.overview);
    }

    #[test]
    fn active_trades_step_down_or_hold() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut overview = MARKET.overview;
        let mut dropped = 0;
        for _ in 0..1_000 {
            overview.active_trades = 4;
            let next = jitter_overview(&overview, &mut rng);
            assert!(
                next.active_trades == 3 || next.active_trades == 4,
                "active trades went to {}",
                next.active_trades
            );
            if next.active_trades == 3 {
                dropped += 1;
            }
        }
        assert!(dropped > 0);
    }

    #[test]
    fn active_trades_stay_clamped_at_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut overview = MARKET.overview;
        overview.active_trades = 0;
        for _ in 0..500 {
            overview = jitter_overview(&overview, &mut rng);
            assert_eq!(overview.active_trades, 0);
        }
    }
}
