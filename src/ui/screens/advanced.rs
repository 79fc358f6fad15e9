use eframe::egui::{RichText, ScrollArea, Ui};

use crate::{
    config::ADVANCED_PROFILE,
    data::{CALL_OPTIONS, PATTERNS, PUT_OPTIONS, STOCK_SETUPS, TRENDING_STOCKS},
    engine::DashboardState,
    models::SetupFilters,
    ui::{
        UI_CONFIG, UI_TEXT,
        styles::UiStyleExt,
        ui_panels::{
            FilterPanel, IntelligencePanel, OptionCards, Panel, PatternPanel, SetupCards,
            SignalFeed, TrendPanel, status_chips,
        },
        ui_text::ICON_BRAIN,
        utils::spaced_separator,
    },
};

/// Returns the new filter set if the user changed it this frame.
pub(crate) fn render_advanced(
    ui: &mut Ui,
    state: &DashboardState,
    filters: &mut SetupFilters,
) -> Option<SetupFilters> {
    let mut changed = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{} Advanced AI Trading Intelligence System",
                        ICON_BRAIN
                    ))
                    .size(26.0)
                    .strong()
                    .color(UI_CONFIG.colors.accent),
                );
                ui.label_subdued(&UI_TEXT.adv_subtitle);
            });
            ui.add_space(8.0);
            status_chips(ui, state.patterns_analyzed);
            ui.add_space(UI_CONFIG.card_spacing);

            IntelligencePanel::new(&state.intelligence).show(ui);
            ui.add_space(UI_CONFIG.card_spacing);

            changed = FilterPanel::new(filters).render(ui).pop();
            ui.add_space(UI_CONFIG.card_spacing);

            SetupCards::new(filters.apply(STOCK_SETUPS), STOCK_SETUPS.len()).show(ui);
            spaced_separator(ui);

            OptionCards::new(
                filters.apply(CALL_OPTIONS),
                filters.apply(PUT_OPTIONS),
                CALL_OPTIONS.len() + PUT_OPTIONS.len(),
            )
            .show(ui);
            spaced_separator(ui);

            TrendPanel::new(TRENDING_STOCKS).show(ui);
            ui.add_space(UI_CONFIG.card_spacing);

            PatternPanel::new(PATTERNS).show(ui);
            ui.add_space(UI_CONFIG.card_spacing);

            SignalFeed::new(&state.signals, &ADVANCED_PROFILE).show(ui);
        });

    changed
}
