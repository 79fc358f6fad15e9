//! Mock data engine: signal generation, the per-tick state transform and the
//! timer that drives it.

mod board;
mod generator;
mod observer;
mod refresh;
mod rolling_window;
mod state;
mod timer;

pub use board::Board;
pub use generator::generate_signal;
pub use observer::{LogObserver, TickContext, TickEvent, TickObserver};
pub use refresh::{advance, jitter_intelligence, jitter_overview};
pub use rolling_window::RollingWindow;
pub use state::DashboardState;
pub use timer::{RefreshTimer, TimerState};
