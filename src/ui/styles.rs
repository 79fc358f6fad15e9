use colorgrad::Gradient;
use eframe::egui::{Color32, CornerRadius, Rect, RichText, Sense, Ui, pos2, vec2};

use crate::{
    domain::{Bias, SetupAction, Side, TrendDirection},
    models::ConfidenceTier,
    ui::UI_CONFIG,
};

pub trait TierColor {
    fn color(&self) -> Color32;
    /// Two-stop gradient for filled bars, light to dark.
    fn gradient(&self) -> colorgrad::LinearGradient;
}

impl TierColor for ConfidenceTier {
    fn color(&self) -> Color32 {
        match self {
            Self::High => UI_CONFIG.colors.bullish,
            Self::Medium => UI_CONFIG.colors.caution,
            Self::Low => UI_CONFIG.colors.bearish,
        }
    }

    fn gradient(&self) -> colorgrad::LinearGradient {
        let stops = match self {
            Self::High => ["#4ade80", "#16a34a"],
            Self::Medium => ["#facc15", "#ca8a04"],
            Self::Low => ["#f87171", "#dc2626"],
        };
        colorgrad::GradientBuilder::new()
            .html_colors(&stops)
            .build::<colorgrad::LinearGradient>()
            .expect("Failed to build confidence gradient")
    }
}

pub trait DirectionColor {
    fn color(&self) -> Color32;
}

impl DirectionColor for Side {
    fn color(&self) -> Color32 {
        match self {
            Self::Buy => UI_CONFIG.colors.bullish,
            Self::Sell => UI_CONFIG.colors.bearish,
        }
    }
}

impl DirectionColor for SetupAction {
    fn color(&self) -> Color32 {
        match self {
            Self::Long => UI_CONFIG.colors.bullish,
            Self::Short => UI_CONFIG.colors.bearish,
        }
    }
}

impl DirectionColor for TrendDirection {
    fn color(&self) -> Color32 {
        match self {
            Self::Up => UI_CONFIG.colors.bullish,
            Self::Down => UI_CONFIG.colors.bearish,
        }
    }
}

impl DirectionColor for Bias {
    fn color(&self) -> Color32 {
        match self {
            Self::Bullish => UI_CONFIG.colors.bullish,
            Self::Bearish => UI_CONFIG.colors.bearish,
            Self::Neutral => UI_CONFIG.colors.caution,
        }
    }
}

pub fn get_outcome_color(value: f64) -> Color32 {
    if value >= 0.0 {
        UI_CONFIG.colors.bullish
    } else {
        UI_CONFIG.colors.bearish
    }
}

fn to_egui_color(color: colorgrad::Color) -> Color32 {
    let rgba8 = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    /// Filled pill with coloured text.
    fn badge(&mut self, text: impl Into<String>, color: Color32);
    /// Horizontal bar filled to `pct` (0..=100) with the tier's gradient.
    fn gradient_bar(&mut self, pct: f64, tier: ConfidenceTier);
    /// Stacked caption over a bold value, as used in price grids.
    fn stat(&mut self, caption: &str, value: &str, color: Color32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.text_subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn badge(&mut self, text: impl Into<String>, color: Color32) {
        UI_CONFIG.chip_frame(color).show(self, |ui| {
            ui.label(RichText::new(text).small().strong().color(color));
        });
    }

    fn gradient_bar(&mut self, pct: f64, tier: ConfidenceTier) {
        let width = self.available_width();
        let (rect, _) = self.allocate_exact_size(vec2(width, UI_CONFIG.bar_height), Sense::hover());
        if !self.is_rect_visible(rect) {
            return;
        }

        let radius = CornerRadius::same((UI_CONFIG.bar_height / 2.0) as u8);
        let painter = self.painter();
        painter.rect_filled(rect, radius, UI_CONFIG.colors.card_border);

        let fill = (pct / 100.0).clamp(0.0, 1.0) as f32;
        if fill <= 0.0 {
            return;
        }
        let filled_w = rect.width() * fill;
        let gradient = tier.gradient();
        // Paint in thin vertical slices; egui has no native linear gradient fill.
        const SLICES: usize = 24;
        let slice_w = filled_w / SLICES as f32;
        for i in 0..SLICES {
            let t = (i as f32 + 0.5) / SLICES as f32;
            let x0 = rect.left() + slice_w * i as f32;
            let slice = Rect::from_min_max(
                pos2(x0, rect.top()),
                pos2(x0 + slice_w + 0.5, rect.bottom()),
            );
            painter.rect_filled(slice, CornerRadius::ZERO, to_egui_color(gradient.at(t)));
        }
    }

    fn stat(&mut self, caption: &str, value: &str, color: Color32) {
        self.vertical(|ui| {
            ui.label_subdued(caption);
            ui.label(RichText::new(value).strong().color(color));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradients_build_for_every_tier() {
        for tier in [ConfidenceTier::High, ConfidenceTier::Medium, ConfidenceTier::Low] {
            let g = tier.gradient();
            let start = to_egui_color(g.at(0.0));
            let end = to_egui_color(g.at(1.0));
            assert_ne!(start, end);
        }
    }

    #[test]
    fn outcome_colour_follows_sign() {
        assert_eq!(get_outcome_color(0.0), UI_CONFIG.colors.bullish);
        assert_eq!(get_outcome_color(-1.0), UI_CONFIG.colors.bearish);
    }
}
