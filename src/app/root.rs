use {
    chrono::Utc,
    eframe::{Frame, Storage, egui::Context},
    rand::{SeedableRng, rngs::StdRng},
    std::time::Duration,
};

use crate::{
    Cli,
    app::Preferences,
    config::{BoardKind, DF},
    engine::{Board, LogObserver},
    models::SetupFilters,
    ui::setup_custom_visuals,
    utils::AppInstant,
};

/// Upper bound between repaints so the header clock and countdown keep moving.
const MAX_REPAINT_WAIT: Duration = Duration::from_secs(1);

pub struct App {
    pub(crate) prefs: Preferences,
    pub(crate) board: Board,
    rng: StdRng,
    observer: LogObserver,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let stored: Option<Preferences> = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY));
        if DF.log_preferences {
            if let Some(p) = &stored {
                log::info!("Restored preferences: {:?}", p);
            }
        }
        let prefs = stored.unwrap_or_default().with_cli(&args);

        let rng = match args.seed {
            Some(seed) => {
                log::info!("Seeding mock data with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        let mut app = Self {
            prefs,
            board: Board::new(prefs.board, prefs.debug),
            rng,
            observer: LogObserver,
        };
        app.mount_board();
        app
    }

    fn mount_board(&mut self) {
        self.board
            .mount(&mut self.rng, Utc::now(), AppInstant::now(), &mut self.observer);
    }

    /// Tear down the current board and mount a fresh one. Nothing carries over.
    pub(crate) fn switch_board(&mut self, kind: BoardKind) {
        if kind == self.board.kind() {
            return;
        }
        self.board.unmount();
        self.board = Board::new(kind, self.prefs.debug);
        self.prefs.board = kind;
        self.mount_board();
    }

    pub(crate) fn set_debug(&mut self, on: bool) {
        self.prefs.debug = on;
        self.board.debug = on;
        if DF.log_lifecycle {
            log::info!("Debug mode {}", if on { "enabled" } else { "disabled" });
        }
    }

    pub(crate) fn on_filters_changed(&mut self, filters: SetupFilters) {
        if DF.log_preferences {
            log::info!(
                "Filters changed: timeframe={}, confidence={}",
                filters.timeframe,
                filters.confidence
            );
        }
    }

    /// Drive the board timer. At most one tick per frame.
    fn tick_board(&mut self, clock: AppInstant) -> bool {
        crate::trace_time!("Board tick", DF.slow_frame_micros, {
            self.board
                .poll(&mut self.rng, Utc::now(), clock, &mut self.observer)
        })
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        let clock = AppInstant::now();
        self.tick_board(clock);

        crate::trace_time!("Render frame", DF.slow_frame_micros, {
            self.render_top_panel(ctx);
            self.render_central_panel(ctx, clock);
        });

        let wait = self
            .board
            .next_update_in(AppInstant::now())
            .unwrap_or(MAX_REPAINT_WAIT)
            .min(MAX_REPAINT_WAIT);
        ctx.request_repaint_after(wait);
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if DF.log_preferences {
            log::info!("💾 SAVE [App]: {:?}", self.prefs);
        }
        eframe::set_value(storage, eframe::APP_KEY, &self.prefs);
    }
}
