use std::time::Duration;

use crate::utils::AppInstant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// No timer armed. A board is idle before mount and after unmount.
    Idle,
    Running { next_due: AppInstant },
}

/// Fixed-interval, non-reentrant tick source polled from the frame loop.
///
/// Fires at most once per `poll`. If the host stalls for several intervals the
/// missed ticks are dropped and the timer re-arms one interval from `now`.
#[derive(Debug, Clone)]
pub struct RefreshTimer {
    interval: Duration,
    state: TimerState,
}

impl RefreshTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: TimerState::Idle,
        }
    }

    pub fn start(&mut self, now: AppInstant) {
        self.state = TimerState::Running {
            next_due: now + self.interval,
        };
    }

    pub fn stop(&mut self) {
        self.state = TimerState::Idle;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    #[inline]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when a tick is due, and schedules the next one.
    pub fn poll(&mut self, now: AppInstant) -> bool {
        let TimerState::Running { next_due } = self.state else {
            return false;
        };
        if now < next_due {
            return false;
        }

        let mut next = next_due + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.state = TimerState::Running { next_due: next };
        true
    }

    /// Time left until the next tick. `None` while idle.
    pub fn remaining(&self, now: AppInstant) -> Option<Duration> {
        match self.state {
            TimerState::Idle => None,
            TimerState::Running { next_due } => Some(next_due.saturating_duration_since(now)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECS_5: Duration = Duration::from_secs(5);

    #[test]
    fn idle_never_fires() {
        let t0 = AppInstant::now();
        let mut timer = RefreshTimer::new(SECS_5);
        assert!(!timer.poll(t0 + Duration::from_secs(60)));
        assert_eq!(timer.remaining(t0), None);
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn fires_once_per_interval() {
        let t0 = AppInstant::now();
        let mut timer = RefreshTimer::new(SECS_5);
        timer.start(t0);
        assert!(timer.is_running());

        assert!(!timer.poll(t0 + Duration::from_millis(4_999)));
        assert!(timer.poll(t0 + SECS_5));
        // Same frame again: not reentrant.
        assert!(!timer.poll(t0 + SECS_5));
        assert!(timer.poll(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn keeps_cadence_when_slightly_late() {
        let t0 = AppInstant::now();
        let mut timer = RefreshTimer::new(SECS_5);
        timer.start(t0);
        assert!(timer.poll(t0 + Duration::from_millis(5_200)));
        assert_eq!(
            timer.remaining(t0 + Duration::from_millis(5_200)),
            Some(Duration::from_millis(4_800))
        );
    }

    #[test]
    fn stall_drops_missed_ticks() {
        let t0 = AppInstant::now();
        let mut timer = RefreshTimer::new(SECS_5);
        timer.start(t0);
        let late = t0 + Duration::from_secs(31);
        assert!(timer.poll(late));
        assert!(!timer.poll(late));
        assert_eq!(timer.remaining(late), Some(SECS_5));
    }

    #[test]
    fn stop_releases_the_timer() {
        let t0 = AppInstant::now();
        let mut timer = RefreshTimer::new(SECS_5);
        timer.start(t0);
        timer.stop();
        assert!(!timer.is_running());
        assert!(!timer.poll(t0 + Duration::from_secs(20)));
    }
}
