use serde::Serialize;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumIter, Display)]
pub enum SetupType {
    #[strum(to_string = "SWING")]
    Swing,
    #[strum(to_string = "SCALP")]
    Scalp,
    #[strum(to_string = "OPTION")]
    Option,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumIter, Display)]
pub enum SetupAction {
    #[strum(to_string = "LONG")]
    Long,
    #[strum(to_string = "SHORT")]
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumIter, Display)]
pub enum OptionType {
    #[strum(to_string = "CALL")]
    Call,
    #[strum(to_string = "PUT")]
    Put,
}

/// How long a setup is expected to be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumIter, Display)]
pub enum Horizon {
    #[strum(to_string = "scalp")]
    Scalp,
    #[strum(to_string = "day")]
    Day,
    #[strum(to_string = "swing")]
    Swing,
}

/// Days to expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Dte(pub u16);

impl std::fmt::Display for Dte {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}DTE", self.0)
    }
}

/// A target or stop: either an absolute price or a move relative to premium.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Level {
    Price(f64),
    Pct(f64),
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Price(p) => write!(f, "${:.2}", p),
            Self::Pct(p) => write!(f, "{:+}%", p),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptionLeg {
    pub option_type: OptionType,
    pub strike: f64,
    pub dte: Dte,
    pub premium: f64,
}

/// A hand-written trade idea shown on the advanced board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TradingSetup {
    pub id: &'static str,
    pub symbol: &'static str,
    pub setup_type: SetupType,
    pub action: SetupAction,
    pub pattern: &'static str,
    pub confidence: u8,
    pub entry: f64,
    pub target: Level,
    pub stop: Level,
    pub rr_ratio: &'static str,
    pub indicators: &'static [&'static str],
    pub size: &'static str,
    pub option: Option<OptionLeg>,
}

impl TradingSetup {
    /// Holding horizon used by the timeframe filter.
    /// Same-day expiries count as day trades; every other option is a swing.
    pub fn horizon(&self) -> Horizon {
        match (self.setup_type, self.option) {
            (SetupType::Scalp, _) => Horizon::Scalp,
            (SetupType::Swing, _) => Horizon::Swing,
            (SetupType::Option, Some(leg)) if leg.dte.0 == 0 => Horizon::Day,
            (SetupType::Option, _) => Horizon::Swing,
        }
    }

    pub fn option_type(&self) -> Option<OptionType> {
        self.option.map(|leg| leg.option_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatternPerformance {
    pub name: &'static str,
    pub win_rate: u8,
    pub total_trades: u32,
    pub wins: u32,
    pub avg_gain: f64,
    pub last_updated: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum TrendDirection {
    #[strum(to_string = "up")]
    Up,
    #[strum(to_string = "down")]
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendingStock {
    pub symbol: &'static str,
    /// Signed; its magnitude is what the board draws.
    pub momentum: i32,
    pub rvol: f64,
    pub change: f64,
    pub pattern: &'static str,
    pub direction: TrendDirection,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option_setup(dte: u16) -> TradingSetup {
        TradingSetup {
            id: "t",
            symbol: "SPY",
            setup_type: SetupType::Option,
            action: SetupAction::Long,
            pattern: "p",
            confidence: 80,
            entry: 1.0,
            target: Level::Pct(60.0),
            stop: Level::Pct(-30.0),
            rr_ratio: "2.0:1",
            indicators: &[],
            size: "5%",
            option: Some(OptionLeg {
                option_type: OptionType::Call,
                strike: 453.0,
                dte: Dte(dte),
                premium: 1.0,
            }),
        }
    }

    #[test]
    fn same_day_options_are_day_trades() {
        assert_eq!(option_setup(0).horizon(), Horizon::Day);
        assert_eq!(option_setup(7).horizon(), Horizon::Swing);
    }

    #[test]
    fn levels_render_as_price_or_signed_percent() {
        assert_eq!(Level::Price(768.0).to_string(), "$768.00");
        assert_eq!(Level::Pct(60.0).to_string(), "+60%");
        assert_eq!(Level::Pct(-30.0).to_string(), "-30%");
        assert_eq!(Dte(14).to_string(), "14DTE");
    }
}
