use eframe::egui::{Align, CentralPanel, Context, Layout, RichText, TopBottomPanel};
use strum::IntoEnumIterator;

use crate::{
    app::App,
    config::BoardKind,
    ui::{
        UI_CONFIG, UI_TEXT,
        screens::{render_advanced, render_basic},
        styles::UiStyleExt,
    },
    utils::{AppInstant, format_clock},
};

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        let colors = &UI_CONFIG.colors;
        let current = self.board.kind();
        let mut selected = current;
        let mut debug = self.prefs.debug;
        let last_update = self.board.state().map(|s| format_clock(s.last_update));

        TopBottomPanel::top("top_toolbar")
            .frame(UI_CONFIG.top_panel_frame())
            .min_height(36.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&UI_TEXT.app_title)
                            .size(20.0)
                            .strong()
                            .color(colors.heading),
                    );
                    ui.separator();

                    for kind in BoardKind::iter() {
                        ui.selectable_value(&mut selected, kind, kind.to_string());
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let label = if debug {
                            &UI_TEXT.label_debug_on
                        } else {
                            &UI_TEXT.label_debug
                        };
                        ui.toggle_value(&mut debug, label.as_str())
                            .on_hover_text(UI_TEXT.hover_debug.as_str());
                        if let Some(ts) = &last_update {
                            ui.badge(ts, colors.text_subdued);
                        }
                        ui.label(RichText::new(&UI_TEXT.label_live).color(colors.bullish));
                    });
                });
            });

        if selected != current {
            self.switch_board(selected);
        }
        if debug != self.prefs.debug {
            self.set_debug(debug);
        }
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context, clock: AppInstant) {
        let next_update = self.board.next_update_in(clock);
        let mut filters_changed = None;

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                let Some(state) = self.board.state() else {
                    ui.centered_and_justified(|ui| ui.spinner());
                    return;
                };
                match self.board.kind() {
                    BoardKind::Basic => render_basic(ui, state, self.board.debug, next_update),
                    BoardKind::Advanced => {
                        filters_changed = render_advanced(ui, state, &mut self.prefs.filters);
                    }
                }
            });

        if let Some(filters) = filters_changed {
            self.on_filters_changed(filters);
        }
    }
}
