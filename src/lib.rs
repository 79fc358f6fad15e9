#![allow(clippy::collapsible_if)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

pub use app::App;
pub use config::{BoardKind, PERSISTENCE};
pub use engine::{Board, DashboardState, LogObserver, TickContext, TickEvent, TickObserver, advance};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Board to open (overrides the one remembered from last session)
    #[arg(long, value_enum)]
    pub board: Option<BoardKind>,

    /// Seed for the mock data generator; omit for a fresh random session
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with tick logging switched on
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl Cli {
    /// Build arguments from a page query string such as `?board=advanced&seed=7&debug`.
    /// Unknown or malformed values fall back to the defaults.
    pub fn from_query(query: &str) -> Self {
        let mut argv = vec![env!("CARGO_PKG_NAME").to_string()];
        for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match (key, value) {
                ("debug", "" | "true" | "1") => argv.push("--debug".to_string()),
                ("debug", _) => {}
                (key, value) => {
                    argv.push(format!("--{}", key));
                    argv.push(value.to_string());
                }
            }
        }
        Self::try_parse_from(argv).unwrap_or_else(|err| {
            log::warn!("Ignoring query arguments {:?}: {}", query, err);
            Self::default()
        })
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_selects_board_seed_and_debug() {
        let cli = Cli::from_query("?board=advanced&seed=7&debug");
        assert_eq!(cli.board, Some(BoardKind::Advanced));
        assert_eq!(cli.seed, Some(7));
        assert!(cli.debug);
    }

    #[test]
    fn empty_query_is_default() {
        let cli = Cli::from_query("");
        assert_eq!(cli.board, None);
        assert_eq!(cli.seed, None);
        assert!(!cli.debug);
        assert!(!Cli::from_query("?debug=false").debug);
    }

    #[test]
    fn malformed_query_falls_back_to_default() {
        let cli = Cli::from_query("?seed=seven&board=basic");
        assert_eq!(cli.seed, None);
        assert_eq!(cli.board, None);
    }
}
