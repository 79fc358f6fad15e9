//! Configuration module for the trading dashboard.

// Can all be private now because we have a public re-export.
mod debug;
mod market;
mod mock;
mod persistence;
mod refresh;
mod types;

// Re-export commonly used items
pub use debug::{DF, LogFlags};
pub use market::{JitterSpec, MARKET, MarketConfig, MarketJitter};
pub use mock::{MOCK, MockConfig};
pub use persistence::PERSISTENCE;
pub use refresh::{ADVANCED_PROFILE, BASIC_PROFILE, RefreshProfile};
pub use types::BoardKind;
