mod maths_utils;
mod perf;
mod time_utils;

pub use maths_utils::{round_to, unit_jitter_int};
pub use time_utils::{AppInstant, TimeUtils, format_clock, format_countdown};
