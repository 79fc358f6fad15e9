use std::time::Duration;

use chrono::{TimeZone, Utc};
use rand::{SeedableRng, rngs::StdRng};

use trading_dashboard::{
    Board, BoardKind, DashboardState, TickContext, TickEvent, advance,
    config::{ADVANCED_PROFILE, BASIC_PROFILE},
    models::project_basic,
    utils::AppInstant,
};

fn t0() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 14, 30, 0).unwrap()
}

#[test]
fn advanced_board_fills_window_through_the_timer() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut events: Vec<TickEvent> = Vec::new();
    let clock = AppInstant::now();

    let mut board = Board::new(BoardKind::Advanced, false);
    board.mount(&mut rng, t0(), clock, &mut events);
    assert_eq!(board.state().map(|s| s.signals.len()), Some(0));

    for i in 1..=8u64 {
        let at = clock + Duration::from_secs(3 * i);
        let now = t0() + chrono::Duration::seconds(3 * i as i64);
        assert!(board.poll(&mut rng, now, at, &mut events));
    }

    let state = board.state().expect("mounted board has state");
    assert_eq!(state.signals.len(), 8);
    let newest = state.signals.latest().expect("window is full");
    assert_eq!(newest.created_at, t0() + chrono::Duration::seconds(24));
    assert!(events.is_empty());

    board.unmount();
    assert!(board.state().is_none());
}

#[test]
fn basic_board_stays_in_bounds_for_a_long_session() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut events: Vec<TickEvent> = Vec::new();
    let mut ctx = TickContext::new(t0(), false, &mut events);
    let mut state = DashboardState::seeded(&BASIC_PROFILE, &mut rng, &mut ctx);
    assert_eq!(state.signals.len(), 8);

    for _ in 0..2_000 {
        state = advance(state, &BASIC_PROFILE, &mut rng, &mut ctx);
        assert!(state.signals.len() <= 8);
        assert!((0.0..=100.0).contains(&state.overview.win_rate));
        assert!(state.overview.active_trades <= 8);
        let view = project_basic(&state, &BASIC_PROFILE);
        assert!(view.stocks.len() + view.options.len() <= 8);
    }
}

#[test]
fn debug_session_reports_each_append() {
    let mut rng = StdRng::seed_from_u64(31);
    let mut events: Vec<TickEvent> = Vec::new();
    let mut ctx = TickContext::new(t0(), true, &mut events);
    let mut state = DashboardState::empty(ADVANCED_PROFILE.window_capacity, t0());
    for _ in 0..4 {
        state = advance(state, &ADVANCED_PROFILE, &mut rng, &mut ctx);
    }
    let lens: Vec<usize> = events
        .iter()
        .filter_map(|e| match e {
            TickEvent::SignalAdded { window_len, .. } => Some(*window_len),
            _ => None,
        })
        .collect();
    assert_eq!(lens, vec![1, 2, 3, 4]);
}

#[test]
fn same_seed_replays_the_same_session() {
    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut events: Vec<TickEvent> = Vec::new();
        let mut ctx = TickContext::new(t0(), false, &mut events);
        let mut state = DashboardState::seeded(&BASIC_PROFILE, &mut rng, &mut ctx);
        for _ in 0..50 {
            state = advance(state, &BASIC_PROFILE, &mut rng, &mut ctx);
        }
        state
    };
    assert_eq!(run(5), run(5));
    assert_ne!(run(5).signals.latest(), run(6).signals.latest());
}
