use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::MOCK;
use crate::domain::{InstrumentKind, Side, Timeframe, TradingSignal};
use crate::engine::{TickContext, TickEvent};
use crate::utils::round_to;

fn pick<R: Rng + ?Sized>(rng: &mut R, choices: &[&'static str]) -> &'static str {
    choices.choose(rng).copied().unwrap_or_default()
}

/// Fabricate one signal. Every field is drawn uniformly from `MOCK`.
///
/// Stop and target are derived from the already-rounded entry so that
/// `stop == round(entry * 0.97, 2)` holds exactly for the stored values.
pub fn generate_signal<R: Rng + ?Sized>(rng: &mut R, ctx: &mut TickContext<'_>) -> TradingSignal {
    let kind = if rng.gen_bool(0.5) {
        InstrumentKind::Option
    } else {
        InstrumentKind::Stock
    };
    let symbol = match kind {
        InstrumentKind::Stock => pick(rng, MOCK.stock_symbols),
        InstrumentKind::Option => pick(rng, MOCK.option_symbols),
    };
    let entry_price = round_to(rng.gen_range(MOCK.price_range), MOCK.price_decimals);
    let id = uuid::Builder::from_random_bytes(rng.r#gen()).into_uuid();
    let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
    let confidence = rng.gen_range(MOCK.confidence_range);
    let pattern = pick(rng, MOCK.patterns);
    let timeframe = if rng.gen_bool(0.5) {
        Timeframe::Scalp
    } else {
        Timeframe::Swing
    };

    let signal = TradingSignal {
        id,
        kind,
        side,
        symbol: symbol.to_string(),
        entry_price,
        stop_loss: round_to(entry_price * MOCK.stop_multiplier, MOCK.price_decimals),
        target: round_to(entry_price * MOCK.target_multiplier, MOCK.price_decimals),
        confidence,
        pattern: pattern.to_string(),
        timeframe,
        created_at: ctx.now,
        notes: MOCK.note.to_string(),
    };

    ctx.emit(|| TickEvent::SignalGenerated(signal.clone()));
    signal
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn ctx<'a>(events: &'a mut Vec<TickEvent>, debug: bool) -> TickContext<'a> {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 14, 30, 0).unwrap();
        TickContext::new(now, debug, events)
    }

    #[test]
    fn generated_signals_respect_their_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut events = Vec::new();
        let mut ctx = ctx(&mut events, false);
        for _ in 0..2_000 {
            let s = generate_signal(&mut rng, &mut ctx);
            assert!((70..100).contains(&s.confidence), "confidence {}", s.confidence);
            assert!(s.entry_price >= 100.0 && s.entry_price <= 600.0);
            assert_eq!(s.stop_loss, round_to(s.entry_price * 0.97, 2));
            assert_eq!(s.target, round_to(s.entry_price * 1.05, 2));
            assert!(MOCK.patterns.contains(&s.pattern.as_str()));
            let symbols = match s.kind {
                InstrumentKind::Stock => MOCK.stock_symbols,
                InstrumentKind::Option => MOCK.option_symbols,
            };
            assert!(symbols.contains(&s.symbol.as_str()), "{} for {}", s.symbol, s.kind);
            assert_eq!(s.notes, MOCK.note);
        }
    }

    #[test]
    fn both_kinds_and_sides_show_up() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut events = Vec::new();
        let mut ctx = ctx(&mut events, false);
        let signals: Vec<_> = (0..200).map(|_| generate_signal(&mut rng, &mut ctx)).collect();
        assert!(signals.iter().any(|s| s.is_stock()));
        assert!(signals.iter().any(|s| s.is_option()));
        assert!(signals.iter().any(|s| s.side == Side::Buy));
        assert!(signals.iter().any(|s| s.side == Side::Sell));
    }

    #[test]
    fn same_seed_same_signal() {
        let mut events = Vec::new();
        let mut ctx = ctx(&mut events, false);
        let a = generate_signal(&mut StdRng::seed_from_u64(3), &mut ctx);
        let b = generate_signal(&mut StdRng::seed_from_u64(3), &mut ctx);
        assert_eq!(a, b);
    }

    #[test]
    fn debug_reports_each_generated_signal() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut events = Vec::new();
        let signal = generate_signal(&mut rng, &mut ctx(&mut events, true));
        assert_eq!(events, vec![TickEvent::SignalGenerated(signal)]);
    }

    #[test]
    fn quiet_without_debug() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut events = Vec::new();
        generate_signal(&mut rng, &mut ctx(&mut events, false));
        assert!(events.is_empty());
    }
}
