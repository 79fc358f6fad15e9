use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::config::{BoardKind, DF, RefreshProfile};
use crate::engine::{DashboardState, RefreshTimer, TickContext, TickObserver, advance};
use crate::utils::AppInstant;

/// A dashboard's lifecycle: idle until mounted, ticking while mounted, state
/// discarded on unmount.
pub struct Board {
    kind: BoardKind,
    timer: RefreshTimer,
    state: Option<DashboardState>,
    pub debug: bool,
}

impl Board {
    pub fn new(kind: BoardKind, debug: bool) -> Self {
        Self {
            kind,
            timer: RefreshTimer::new(kind.profile().interval),
            state: None,
            debug,
        }
    }

    #[inline]
    pub fn kind(&self) -> BoardKind {
        self.kind
    }

    #[inline]
    pub fn profile(&self) -> &'static RefreshProfile {
        self.kind.profile()
    }

    #[inline]
    pub fn state(&self) -> Option<&DashboardState> {
        self.state.as_ref()
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.timer.is_running()
    }

    pub fn mount<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: DateTime<Utc>,
        clock: AppInstant,
        observer: &mut dyn TickObserver,
    ) {
        if self.is_mounted() {
            return;
        }
        if DF.log_lifecycle {
            log::info!("Initializing {} with mock data", self.kind);
        }

        let mut ctx = TickContext::new(now, self.debug, observer);
        self.state = Some(DashboardState::seeded(self.profile(), rng, &mut ctx));
        self.timer.start(clock);

        if DF.log_lifecycle {
            log::info!(
                "Real-time updates started ({} ms interval)",
                self.timer.interval().as_millis()
            );
        }
    }

    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        if DF.log_lifecycle {
            log::info!("Cleaning up {} update timer", self.kind);
        }
        self.timer.stop();
        self.state = None;
    }

    /// Run at most one tick if the timer is due. Returns true when state changed.
    pub fn poll<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: DateTime<Utc>,
        clock: AppInstant,
        observer: &mut dyn TickObserver,
    ) -> bool {
        if !self.timer.poll(clock) {
            return false;
        }
        let Some(state) = self.state.take() else {
            return false;
        };
        let mut ctx = TickContext::new(now, self.debug, observer);
        self.state = Some(advance(state, self.kind.profile(), rng, &mut ctx));
        true
    }

    /// Until the next tick, for the countdown in the debug card.
    pub fn next_update_in(&self, clock: AppInstant) -> Option<Duration> {
        self.timer.remaining(clock)
    }
}

impl Drop for Board {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::engine::TickEvent;

    #[test]
    fn mount_seeds_and_arms() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut events: Vec<TickEvent> = Vec::new();
        let clock = AppInstant::now();

        let mut basic = Board::new(BoardKind::Basic, false);
        assert!(basic.state().is_none());
        basic.mount(&mut rng, Utc::now(), clock, &mut events);
        assert!(basic.is_mounted());
        assert_eq!(basic.state().map(|s| s.signals.len()), Some(8));
        assert_eq!(basic.next_update_in(clock), Some(Duration::from_millis(5000)));

        let mut advanced = Board::new(BoardKind::Advanced, false);
        advanced.mount(&mut rng, Utc::now(), clock, &mut events);
        assert_eq!(advanced.state().map(|s| s.signals.len()), Some(0));
        assert_eq!(advanced.next_update_in(clock), Some(Duration::from_millis(3000)));
    }

    #[test]
    fn ticks_only_when_due() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut events: Vec<TickEvent> = Vec::new();
        let clock = AppInstant::now();
        let mut board = Board::new(BoardKind::Advanced, false);
        board.mount(&mut rng, Utc::now(), clock, &mut events);

        assert!(!board.poll(&mut rng, Utc::now(), clock + Duration::from_secs(1), &mut events));
        assert!(board.poll(&mut rng, Utc::now(), clock + Duration::from_secs(3), &mut events));
        assert_eq!(board.state().map(|s| s.ticks), Some(1));
        assert_eq!(board.state().map(|s| s.signals.len()), Some(1));
    }

    #[test]
    fn unmount_discards_state_and_stops_ticking() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut events: Vec<TickEvent> = Vec::new();
        let clock = AppInstant::now();
        let mut board = Board::new(BoardKind::Basic, false);
        board.mount(&mut rng, Utc::now(), clock, &mut events);
        board.unmount();

        assert!(!board.is_mounted());
        assert!(board.state().is_none());
        assert!(!board.poll(&mut rng, Utc::now(), clock + Duration::from_secs(60), &mut events));
        assert_eq!(board.next_update_in(clock), None);
    }

    #[test]
    fn debug_toggle_controls_events() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut events: Vec<TickEvent> = Vec::new();
        let clock = AppInstant::now();
        let mut board = Board::new(BoardKind::Basic, false);
        board.mount(&mut rng, Utc::now(), clock, &mut events);
        board.poll(&mut rng, Utc::now(), clock + Duration::from_secs(5), &mut events);
        assert!(events.is_empty());

        board.debug = true;
        board.poll(&mut rng, Utc::now(), clock + Duration::from_secs(10), &mut events);
        assert!(!events.is_empty());
    }
}
