//! Static mock data shown on the advanced board.

mod fixtures;

pub use fixtures::{CALL_OPTIONS, PATTERNS, PUT_OPTIONS, STOCK_SETUPS, TRENDING_STOCKS};
