use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::{ADVANCED_PROFILE, BASIC_PROFILE, RefreshProfile};

/// The two self-contained dashboards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display, Default,
    clap::ValueEnum,
)]
pub enum BoardKind {
    #[default]
    #[strum(to_string = "Trading Dashboard")]
    Basic,
    #[strum(to_string = "AI Trading Intelligence")]
    Advanced,
}

impl BoardKind {
    pub fn profile(&self) -> &'static RefreshProfile {
        match self {
            Self::Basic => &BASIC_PROFILE,
            Self::Advanced => &ADVANCED_PROFILE,
        }
    }
}
