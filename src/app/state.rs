// src/app/state.rs

use serde::{Deserialize, Serialize};

use crate::{
    Cli,
    config::{BoardKind, DF},
    models::SetupFilters,
};

/// What survives a restart. Market data never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Preferences {
    pub(crate) board: BoardKind,
    pub(crate) filters: SetupFilters,
    pub(crate) debug: bool,
}

impl Preferences {
    /// Command line wins over whatever was stored.
    pub(crate) fn with_cli(mut self, args: &Cli) -> Self {
        if let Some(board) = args.board {
            self.board = board;
        }
        self.debug |= args.debug || DF.debug_on_startup;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConfidenceFilter, TimeframeFilter};

    #[test]
    fn cli_overrides_stored_board() {
        let stored = Preferences {
            board: BoardKind::Advanced,
            ..Default::default()
        };
        let args = Cli {
            board: Some(BoardKind::Basic),
            ..Default::default()
        };
        assert_eq!(stored.with_cli(&args).board, BoardKind::Basic);
        assert_eq!(stored.with_cli(&Cli::default()).board, BoardKind::Advanced);
    }

    #[test]
    fn debug_flag_only_switches_on() {
        let stored = Preferences {
            debug: true,
            ..Default::default()
        };
        assert!(stored.with_cli(&Cli::default()).debug);
    }

    #[test]
    fn survives_json_round_trip_with_missing_fields() {
        let prefs = Preferences {
            board: BoardKind::Advanced,
            filters: SetupFilters {
                timeframe: TimeframeFilter::Day,
                confidence: ConfidenceFilter::High,
            },
            debug: true,
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(serde_json::from_str::<Preferences>(&json).unwrap(), prefs);

        let partial: Preferences = serde_json::from_str(r#"{"board":"Advanced"}"#).unwrap();
        assert_eq!(partial.board, BoardKind::Advanced);
        assert_eq!(partial.filters, SetupFilters::default());
    }
}
