use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot};

use crate::{
    domain::PatternPerformance,
    models::pattern_tier,
    ui::{UI_TEXT, styles::TierColor},
};

/// Win-rate bar chart under the pattern recognition cards.
pub struct PatternChart<'a> {
    patterns: &'a [PatternPerformance],
}

impl<'a> PatternChart<'a> {
    pub fn new(patterns: &'a [PatternPerformance]) -> Self {
        Self { patterns }
    }

    fn bars(&self) -> Vec<Bar> {
        self.patterns
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Bar::new(i as f64, p.win_rate as f64)
                    .name(p.name)
                    .width(0.6)
                    .fill(pattern_tier(p.win_rate).color())
            })
            .collect()
    }

    pub fn show(&self, ui: &mut Ui) {
        let names: Vec<&'static str> = self.patterns.iter().map(|p| p.name).collect();
        let chart = BarChart::new(UI_TEXT.pattern_chart_y.as_str(), self.bars());

        Plot::new("pattern_win_rates")
            .height(180.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_double_click_reset(false)
            .include_y(0.0)
            .include_y(100.0)
            .y_axis_label(UI_TEXT.pattern_chart_y.as_str())
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                    return String::new();
                }
                names
                    .get(idx as usize)
                    .map(|n| n.to_string())
                    .unwrap_or_default()
            })
            .show(ui, |plot_ui| plot_ui.bar_chart(chart));
    }
}
