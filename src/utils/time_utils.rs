use std::time::Duration;

use chrono::{DateTime, Local, Utc};

/// Monotonic clock that also works in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: u64 = 1000;
    pub const CLOCK_FORMAT: &str = "%H:%M:%S";
}

/// Wall-clock time of day in the viewer's timezone, e.g. `14:03:27`.
pub fn format_clock(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format(TimeUtils::CLOCK_FORMAT)
        .to_string()
}

/// Whole seconds until the next tick, never showing `0s` for an armed timer.
pub fn format_countdown(remaining: Duration) -> String {
    let ms = remaining.as_millis() as u64;
    let secs = ms.div_ceil(TimeUtils::MS_IN_S).max(1);
    format!("{}s", secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_rounds_up_to_whole_seconds() {
        assert_eq!(format_countdown(Duration::from_millis(4001)), "5s");
        assert_eq!(format_countdown(Duration::from_millis(3000)), "3s");
        assert_eq!(format_countdown(Duration::ZERO), "1s");
    }
}
