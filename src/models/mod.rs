// View models: filters and projections
mod filters;
mod projection;

pub use filters::{ConfidenceFilter, SetupFilters, TimeframeFilter};
pub use projection::{
    BasicBoardView, COLUMN_LIMIT, ConfidenceTier, OverviewView, STRONG_PATTERN_WIN_RATE,
    SignalCard, format_count, format_money, format_price, pattern_tier,
    project_basic, signal_column,
};
