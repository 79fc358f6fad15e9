use std::time::Duration;

use eframe::egui::{ScrollArea, Ui};

use crate::{
    config::BASIC_PROFILE,
    engine::DashboardState,
    models::project_basic,
    ui::{
        UI_CONFIG, UI_TEXT,
        ui_panels::{DebugInfoPanel, OverviewCards, SignalColumn, alert_banner},
    },
};

pub(crate) fn render_basic(
    ui: &mut Ui,
    state: &DashboardState,
    debug: bool,
    next_update: Option<Duration>,
) {
    let view = project_basic(state, &BASIC_PROFILE);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if debug {
                DebugInfoPanel::new(&view, next_update).show(ui);
                ui.add_space(UI_CONFIG.card_spacing);
            }

            OverviewCards::new(&view.overview, state.overview.bias).show(ui);
            ui.add_space(UI_CONFIG.card_spacing * 2.0);

            ui.columns(2, |cols| {
                SignalColumn::new(&UI_TEXT.sig_stock_heading, &UI_TEXT.sig_no_stock, &view.stocks)
                    .show(&mut cols[0]);
                SignalColumn::new(
                    &UI_TEXT.sig_option_heading,
                    &UI_TEXT.sig_no_option,
                    &view.options,
                )
                .show(&mut cols[1]);
            });

            ui.add_space(UI_CONFIG.card_spacing * 2.0);
            alert_banner(ui);
        });
}
