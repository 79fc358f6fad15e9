use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
    pub card_border: Color32,

    // --- SEMANTIC ---
    pub bullish: Color32,
    pub bearish: Color32,
    pub caution: Color32,
    pub info: Color32,
    pub accent: Color32,
    pub text_neutral: Color32,
    pub text_subdued: Color32,
}

#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Height of confidence / momentum / win-rate bars.
    pub bar_height: f32,
    pub card_spacing: f32,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::WHITE,
        subsection_heading: Color32::from_rgb(96, 165, 250),
        central_panel: Color32::from_rgb(15, 23, 42),
        side_panel: Color32::from_rgb(2, 6, 23),
        card: Color32::from_rgb(30, 41, 59),
        card_border: Color32::from_rgb(51, 65, 85),

        bullish: Color32::from_rgb(74, 222, 128),
        bearish: Color32::from_rgb(248, 113, 113),
        caution: Color32::from_rgb(250, 204, 21),
        info: Color32::from_rgb(96, 165, 250),
        accent: Color32::from_rgb(192, 132, 252),
        text_neutral: Color32::WHITE,
        text_subdued: Color32::from_rgb(148, 163, 184),
    },
    bar_height: 6.0,
    card_spacing: 12.0,
};

impl UiConfig {
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(12, 8),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Rounded panel used for every card on both boards.
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            inner_margin: Margin::same(12),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }

    /// Card with a coloured left edge, e.g. LONG vs SHORT setups.
    pub fn accent_card_frame(&self, accent: Color32) -> Frame {
        Frame {
            stroke: Stroke::new(1.5, accent.linear_multiply(0.6)),
            ..self.card_frame()
        }
    }

    /// Small pill for badges and status chips.
    pub fn chip_frame(&self, color: Color32) -> Frame {
        Frame {
            fill: color.linear_multiply(0.15),
            stroke: Stroke::new(1.0, color.linear_multiply(0.4)),
            inner_margin: Margin::symmetric(8, 3),
            corner_radius: CornerRadius::same(10),
            ..Default::default()
        }
    }

    pub fn alert_frame(&self) -> Frame {
        Frame {
            fill: self.colors.caution.linear_multiply(0.08),
            stroke: Stroke::new(1.0, self.colors.caution.linear_multiply(0.5)),
            inner_margin: Margin::same(12),
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        }
    }
}
