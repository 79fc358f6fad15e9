use eframe::egui::{Context, RichText, Ui, Visuals};

use crate::ui::UI_CONFIG;

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Bold section title with an optional trailing count, e.g. `Stock Signals (3)`.
pub(crate) fn section_heading(ui: &mut Ui, text: &str, count: Option<usize>) {
    let text = match count {
        Some(n) => format!("{} ({})", text, n),
        None => text.to_string(),
    };
    ui.label(
        RichText::new(text)
            .size(18.0)
            .strong()
            .color(UI_CONFIG.colors.heading),
    );
    ui.add_space(6.0);
}

pub(crate) fn spaced_separator(ui: &mut Ui) {
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
