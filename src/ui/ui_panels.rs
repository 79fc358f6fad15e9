use std::time::Duration;

use eframe::egui::{Align, Button, Color32, ComboBox, Layout, RichText, Ui};
use strum::IntoEnumIterator;

use crate::{
    config::{ADVANCED_PROFILE, RefreshProfile},
    domain::{
        Bias, Horizon, MarketIntelligence, OptionType, PatternPerformance, SetupAction, SetupType,
        TradingSetup, TradingSignal, TrendDirection, TrendingStock,
    },
    engine::RollingWindow,
    models::{
        BasicBoardView, ConfidenceFilter, ConfidenceTier, OverviewView, SetupFilters, SignalCard,
        TimeframeFilter, format_count, format_price, pattern_tier,
    },
    ui::{
        UI_CONFIG, UI_TEXT,
        styles::{DirectionColor, TierColor, UiStyleExt, get_outcome_color},
        ui_plot_view::PatternChart,
        ui_text::{ICON_FIRE, ICON_ROCKET, ICON_TARGET, ICON_TREND_DOWN},
        utils::{colored_subsection_heading, section_heading},
    },
    utils::{format_clock, format_countdown},
};

pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Timeframe and confidence drop-downs. Emits the new filter set when either changes.
pub struct FilterPanel<'a> {
    filters: &'a mut SetupFilters,
}

impl<'a> FilterPanel<'a> {
    pub fn new(filters: &'a mut SetupFilters) -> Self {
        Self { filters }
    }
}

impl Panel for FilterPanel<'_> {
    type Event = SetupFilters;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut changed = false;
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label_subdued(&UI_TEXT.filter_timeframe);
                ComboBox::from_id_salt("timeframe_filter")
                    .selected_text(self.filters.timeframe.to_string())
                    .show_ui(ui, |ui| {
                        for variant in TimeframeFilter::iter() {
                            changed |= ui
                                .selectable_value(
                                    &mut self.filters.timeframe,
                                    variant,
                                    variant.to_string(),
                                )
                                .clicked();
                        }
                    });

                ui.add_space(16.0);
                ui.label_subdued(&UI_TEXT.filter_confidence);
                ComboBox::from_id_salt("confidence_filter")
                    .selected_text(self.filters.confidence.to_string())
                    .show_ui(ui, |ui| {
                        for variant in ConfidenceFilter::iter() {
                            changed |= ui
                                .selectable_value(
                                    &mut self.filters.confidence,
                                    variant,
                                    variant.to_string(),
                                )
                                .clicked();
                        }
                    });

                if self.filters.is_active() && ui.button(UI_TEXT.filter_reset.as_str()).clicked() {
                    *self.filters = SetupFilters::default();
                    changed = true;
                }
            });
        });
        if changed { vec![*self.filters] } else { Vec::new() }
    }
}

pub struct DebugInfoPanel<'a> {
    view: &'a BasicBoardView,
    next_update: Option<Duration>,
}

impl<'a> DebugInfoPanel<'a> {
    pub fn new(view: &'a BasicBoardView, next_update: Option<Duration>) -> Self {
        Self { view, next_update }
    }

    pub fn show(&self, ui: &mut Ui) {
        let colors = &UI_CONFIG.colors;
        UI_CONFIG.accent_card_frame(colors.caution).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&UI_TEXT.debug_title).strong().color(colors.caution));
            let next = match self.next_update {
                Some(d) => format!("in {}", format_countdown(d)),
                None => UI_TEXT.debug_idle.clone(),
            };
            ui.horizontal_wrapped(|ui| {
                let neutral = colors.text_neutral;
                let total = self.view.total_signals.to_string();
                ui.metric(&UI_TEXT.debug_total, &total, neutral);
                ui.metric(&UI_TEXT.debug_stocks, &self.view.stocks.len().to_string(), neutral);
                ui.metric(&UI_TEXT.debug_options, &self.view.options.len().to_string(), neutral);
                ui.metric(&UI_TEXT.debug_last_update, &self.view.last_update, neutral);
                ui.metric(&UI_TEXT.debug_next_update, &next, neutral);
            });
        });
    }
}

/// The four headline cards on the basic board.
pub struct OverviewCards<'a> {
    view: &'a OverviewView,
    bias: Bias,
}

impl<'a> OverviewCards<'a> {
    pub fn new(view: &'a OverviewView, bias: Bias) -> Self {
        Self { view, bias }
    }

    pub fn show(&self, ui: &mut Ui) {
        let colors = &UI_CONFIG.colors;
        let v = self.view;
        ui.columns(4, |cols| {
            overview_card(&mut cols[0], &UI_TEXT.ov_bias, |ui| {
                ui.label(RichText::new(&v.bias).size(22.0).strong().color(colors.text_neutral));
                ui.badge(&v.bias_badge, self.bias.color());
            });
            overview_card(&mut cols[1], &UI_TEXT.ov_win_rate, |ui| {
                ui.label(RichText::new(&v.win_rate).size(22.0).strong().color(colors.bullish));
                ui.label_subdued(&v.total_trades);
            });
            overview_card(&mut cols[2], &UI_TEXT.ov_pl_today, |ui| {
                let pl_color = get_outcome_color(if v.profit_loss_positive { 1.0 } else { -1.0 });
                ui.label(RichText::new(&v.profit_loss).size(22.0).strong().color(pl_color));
                ui.label_subdued(&v.profit_loss_pct);
            });
            overview_card(&mut cols[3], &UI_TEXT.ov_active_trades, |ui| {
                ui.label(
                    RichText::new(&v.active_trades)
                        .size(22.0)
                        .strong()
                        .color(colors.text_neutral),
                );
                ui.label_subdued(&v.active_breakdown);
            });
        });
    }
}

fn overview_card(ui: &mut Ui, title: &str, body: impl FnOnce(&mut Ui)) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label_subdued(title);
        ui.add_space(4.0);
        body(ui);
    });
}

/// One column of signal cards with its own empty state.
pub struct SignalColumn<'a> {
    heading: &'a str,
    empty_text: &'a str,
    cards: &'a [SignalCard],
}

impl<'a> SignalColumn<'a> {
    pub fn new(heading: &'a str, empty_text: &'a str, cards: &'a [SignalCard]) -> Self {
        Self {
            heading,
            empty_text,
            cards,
        }
    }

    pub fn show(&self, ui: &mut Ui) {
        section_heading(ui, self.heading, Some(self.cards.len()));
        if self.cards.is_empty() {
            UI_CONFIG.card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| ui.label_subdued(self.empty_text));
            });
            return;
        }
        for card in self.cards {
            signal_card(ui, card);
            ui.add_space(UI_CONFIG.card_spacing / 2.0);
        }
    }
}

fn signal_card(ui: &mut Ui, card: &SignalCard) {
    let colors = &UI_CONFIG.colors;
    let side_color = if card.is_buy { colors.bullish } else { colors.bearish };
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.badge(card.side, side_color);
            ui.label(RichText::new(&card.symbol).strong().size(16.0).color(colors.text_neutral));
            ui.badge(&card.timeframe, colors.text_subdued);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{}%", card.confidence))
                        .strong()
                        .color(card.tier.color()),
                );
            });
        });
        ui.add_space(4.0);
        ui.columns(3, |cols| {
            cols[0].stat(&UI_TEXT.label_entry, &card.entry, colors.text_neutral);
            cols[1].stat(&UI_TEXT.label_target, &card.target, colors.bullish);
            cols[2].stat(&UI_TEXT.label_stop, &card.stop, colors.bearish);
        });
        ui.horizontal(|ui| {
            ui.badge(&card.pattern, colors.info);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label_subdued(&card.time);
            });
        });
    });
}

pub fn alert_banner(ui: &mut Ui) {
    let colors = &UI_CONFIG.colors;
    UI_CONFIG.alert_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(&UI_TEXT.alert_title).strong().color(colors.caution));
            ui.label(RichText::new(&UI_TEXT.alert_body).color(colors.caution));
        });
    });
}

pub fn status_chips(ui: &mut Ui, patterns_analyzed: u64) {
    let colors = &UI_CONFIG.colors;
    ui.horizontal_wrapped(|ui| {
        ui.badge(&UI_TEXT.chip_scanning, colors.bullish);
        ui.badge(&UI_TEXT.chip_ai_active, colors.accent);
        ui.badge(
            format!("{} {}", format_count(patterns_analyzed), UI_TEXT.chip_patterns),
            colors.info,
        );
        ui.badge(&UI_TEXT.chip_latency, colors.caution);
        ui.badge(&UI_TEXT.chip_win_rate, colors.bullish);
    });
}

pub struct IntelligencePanel<'a> {
    intel: &'a MarketIntelligence,
}

impl<'a> IntelligencePanel<'a> {
    pub fn new(intel: &'a MarketIntelligence) -> Self {
        Self { intel }
    }

    pub fn show(&self, ui: &mut Ui) {
        let colors = &UI_CONFIG.colors;
        let i = self.intel;
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            section_heading(ui, &UI_TEXT.intel_heading, None);
            ui.columns(6, |cols| {
                intel_cell(
                    &mut cols[0],
                    &UI_TEXT.intel_regime,
                    &i.regime.to_string(),
                    &format!("↑ {:.0}% {}", i.confidence, UI_TEXT.intel_confidence),
                    colors.bullish,
                );
                intel_cell(
                    &mut cols[1],
                    &UI_TEXT.intel_vix,
                    &format!("{:.1}", i.vix),
                    &UI_TEXT.intel_vix_note,
                    colors.caution,
                );
                intel_cell(
                    &mut cols[2],
                    &UI_TEXT.intel_sector,
                    i.sector_leader,
                    &UI_TEXT.intel_sector_note,
                    colors.info,
                );
                intel_cell(
                    &mut cols[3],
                    &UI_TEXT.intel_liquidity,
                    &format!("${:.1}B", i.liquidity),
                    &UI_TEXT.intel_liquidity_note,
                    colors.bullish,
                );
                intel_cell(
                    &mut cols[4],
                    &UI_TEXT.intel_options_flow,
                    &format!("{}:1", i.options_flow),
                    &UI_TEXT.intel_options_flow_note,
                    colors.accent,
                );
                intel_cell(
                    &mut cols[5],
                    &UI_TEXT.intel_smart_money,
                    &i.smart_money.to_string(),
                    &UI_TEXT.intel_smart_money_note,
                    colors.bullish,
                );
            });
            ui.add_space(4.0);
            ui.metric("Breadth", &format!("{:.1}%", i.breadth), colors.text_neutral);
        });
    }
}

fn intel_cell(ui: &mut Ui, title: &str, value: &str, note: &str, color: Color32) {
    ui.label_subdued(title);
    ui.label(RichText::new(value).size(20.0).strong().color(color));
    ui.label(RichText::new(note).small().color(color));
}

/// Stock setups, two per row.
pub struct SetupCards<'a> {
    setups: Vec<&'a TradingSetup>,
    total: usize,
}

impl<'a> SetupCards<'a> {
    pub fn new(setups: Vec<&'a TradingSetup>, total: usize) -> Self {
        Self { setups, total }
    }

    pub fn show(&self, ui: &mut Ui) {
        let colors = &UI_CONFIG.colors;
        ui.horizontal(|ui| {
            section_heading(ui, &UI_TEXT.setups_heading, Some(self.total));
            let swings = self.setups.iter().filter(|s| s.horizon() == Horizon::Swing).count();
            ui.badge(format!("{} Swing", swings), colors.info);
            ui.badge(format!("{} Scalp", self.setups.len() - swings), colors.caution);
        });
        if self.setups.is_empty() {
            ui.label_subdued(&UI_TEXT.filter_none_match);
            return;
        }
        ui.columns(2, |cols| {
            for (i, setup) in self.setups.iter().enumerate() {
                setup_card(&mut cols[i % 2], setup, &ADVANCED_PROFILE);
                cols[i % 2].add_space(UI_CONFIG.card_spacing);
            }
        });
    }
}

fn setup_card(ui: &mut Ui, setup: &TradingSetup, profile: &RefreshProfile) {
    let colors = &UI_CONFIG.colors;
    let tier = ConfidenceTier::for_profile(setup.confidence, profile);
    UI_CONFIG.accent_card_frame(setup.action.color()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(setup.symbol)
                        .size(20.0)
                        .strong()
                        .color(colors.text_neutral),
                );
                let kind_color = if setup.setup_type == SetupType::Swing {
                    colors.info
                } else {
                    colors.caution
                };
                let suffix = match setup.action {
                    SetupAction::Short => "SHORT",
                    SetupAction::Long => "TRADE",
                };
                ui.badge(format!("{} {}", setup.setup_type, suffix), kind_color);
            });
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!("{}%", setup.confidence))
                            .size(20.0)
                            .strong()
                            .color(tier.color()),
                    );
                    ui.label_subdued(&UI_TEXT.label_confidence);
                });
            });
        });
        ui.label(RichText::new(format!("{} {}", ICON_ROCKET, setup.pattern)).color(colors.accent));
        ui.gradient_bar(setup.confidence as f64, tier);
        ui.add_space(4.0);
        ui.columns(3, |cols| {
            cols[0].stat(&UI_TEXT.label_entry, &format_price(setup.entry), colors.text_neutral);
            cols[1].stat(&UI_TEXT.label_target, &setup.target.to_string(), colors.bullish);
            cols[2].stat(&UI_TEXT.label_stop, &setup.stop.to_string(), colors.bearish);
        });
        ui.horizontal_wrapped(|ui| {
            for indicator in setup.indicators {
                ui.badge(*indicator, colors.text_subdued);
            }
        });
        ui.horizontal(|ui| {
            ui.metric(&UI_TEXT.label_rr, setup.rr_ratio, colors.bullish);
            ui.metric(&UI_TEXT.label_size, setup.size, colors.text_neutral);
        });
        execute_button(ui, &UI_TEXT.btn_execute_trade);
    });
}

/// Inert: there is no order path.
fn execute_button(ui: &mut Ui, label: &str) {
    ui.add_enabled(false, Button::new(label))
        .on_disabled_hover_text(&UI_TEXT.hover_execute);
}

pub struct OptionCards<'a> {
    calls: Vec<&'a TradingSetup>,
    puts: Vec<&'a TradingSetup>,
    total: usize,
}

impl<'a> OptionCards<'a> {
    pub fn new(calls: Vec<&'a TradingSetup>, puts: Vec<&'a TradingSetup>, total: usize) -> Self {
        Self { calls, puts, total }
    }

    pub fn show(&self, ui: &mut Ui) {
        let colors = &UI_CONFIG.colors;
        ui.horizontal(|ui| {
            section_heading(ui, &UI_TEXT.options_heading, Some(self.total));
            ui.badge(format!("{} Calls", self.calls.len()), colors.bullish);
            ui.badge(format!("{} Puts", self.puts.len()), colors.bearish);
        });
        if self.calls.is_empty() && self.puts.is_empty() {
            ui.label_subdued(&UI_TEXT.filter_none_match);
            return;
        }
        ui.columns(5, |cols| {
            for (i, option) in self.calls.iter().chain(self.puts.iter()).enumerate() {
                option_card(&mut cols[i % 5], option);
                cols[i % 5].add_space(UI_CONFIG.card_spacing);
            }
        });
    }
}

fn option_card(ui: &mut Ui, setup: &TradingSetup) {
    let colors = &UI_CONFIG.colors;
    let Some(leg) = setup.option else {
        return;
    };
    let type_color = match leg.option_type {
        OptionType::Call => colors.bullish,
        OptionType::Put => colors.bearish,
    };
    let tier = ConfidenceTier::for_profile(setup.confidence, &ADVANCED_PROFILE);
    UI_CONFIG.accent_card_frame(type_color).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(setup.symbol).strong().color(colors.text_neutral));
            ui.badge(leg.option_type.to_string(), type_color);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label_subdued(leg.dte.to_string());
            });
        });
        ui.metric(&UI_TEXT.label_strike, &format!("${}", leg.strike), colors.text_neutral);
        ui.metric(&UI_TEXT.label_premium, &format_price(leg.premium), colors.text_neutral);
        ui.metric(&UI_TEXT.label_target, &setup.target.to_string(), colors.bullish);
        ui.metric(&UI_TEXT.label_stop, &setup.stop.to_string(), colors.bearish);
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{}%", setup.confidence)).small().color(tier.color()));
        });
        ui.gradient_bar(setup.confidence as f64, tier);
        execute_button(ui, &UI_TEXT.btn_execute);
    });
}

pub struct TrendPanel<'a> {
    stocks: &'a [TrendingStock],
}

impl<'a> TrendPanel<'a> {
    pub fn new(stocks: &'a [TrendingStock]) -> Self {
        Self { stocks }
    }

    pub fn show(&self, ui: &mut Ui) {
        let colors = &UI_CONFIG.colors;
        section_heading(ui, &UI_TEXT.trend_heading, None);
        ui.columns(self.stocks.len().max(1), |cols| {
            for (col, stock) in cols.iter_mut().zip(self.stocks) {
                UI_CONFIG.card_frame().show(col, |ui| {
                    ui.set_width(ui.available_width());
                    let icon = match stock.direction {
                        TrendDirection::Up => ICON_FIRE,
                        TrendDirection::Down => ICON_TREND_DOWN,
                    };
                    ui.label(
                        RichText::new(format!("{} {}", icon, stock.symbol))
                            .strong()
                            .color(colors.text_neutral),
                    );
                    let momentum = stock.momentum.unsigned_abs();
                    ui.metric(
                        &UI_TEXT.trend_momentum,
                        &format!("{}%", momentum),
                        stock.direction.color(),
                    );
                    let tier = if stock.momentum >= 0 {
                        ConfidenceTier::High
                    } else {
                        ConfidenceTier::Low
                    };
                    ui.gradient_bar(momentum as f64, tier);
                    ui.horizontal(|ui| {
                        ui.label_subdued(format!("{} {}x", UI_TEXT.trend_rvol, stock.rvol));
                        ui.label(
                            RichText::new(format!("{:+}%", stock.change))
                                .small()
                                .color(get_outcome_color(stock.change)),
                        );
                    });
                    ui.label(colored_subsection_heading(stock.pattern).small());
                });
            }
        });
    }
}

pub struct PatternPanel<'a> {
    patterns: &'a [PatternPerformance],
}

impl<'a> PatternPanel<'a> {
    pub fn new(patterns: &'a [PatternPerformance]) -> Self {
        Self { patterns }
    }

    pub fn show(&self, ui: &mut Ui) {
        let colors = &UI_CONFIG.colors;
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            section_heading(ui, &UI_TEXT.pattern_heading, None);
            ui.columns(self.patterns.len().max(1), |cols| {
                for (col, p) in cols.iter_mut().zip(self.patterns) {
                    let tier = pattern_tier(p.win_rate);
                    col.label(
                        RichText::new(format!("{} {}", ICON_TARGET, p.name))
                            .small()
                            .strong()
                            .color(colors.text_neutral),
                    );
                    col.gradient_bar(p.win_rate as f64, tier);
                    col.columns(3, |c| {
                        c[0].stat(&UI_TEXT.pattern_win, &format!("{}%", p.win_rate), tier.color());
                        let total = p.total_trades.to_string();
                        c[1].stat(&UI_TEXT.pattern_total, &total, colors.text_neutral);
                        let avg = format!("+{}%", p.avg_gain);
                        c[2].stat(&UI_TEXT.pattern_avg, &avg, colors.bullish);
                    });
                    col.label_subdued(p.last_updated);
                }
            });
            ui.add_space(8.0);
            PatternChart::new(self.patterns).show(ui);
        });
    }
}

/// Newest-first rendering of the rolling window on the advanced board.
pub struct SignalFeed<'a> {
    window: &'a RollingWindow<TradingSignal>,
    profile: &'a RefreshProfile,
}

impl<'a> SignalFeed<'a> {
    pub fn new(window: &'a RollingWindow<TradingSignal>, profile: &'a RefreshProfile) -> Self {
        Self { window, profile }
    }

    pub fn show(&self, ui: &mut Ui) {
        let colors = &UI_CONFIG.colors;
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            section_heading(ui, &UI_TEXT.feed_heading, Some(self.window.len()));
            if self.window.is_empty() {
                ui.label_subdued(&UI_TEXT.feed_waiting);
                return;
            }
            for signal in self.window {
                let tier = ConfidenceTier::for_profile(signal.confidence, self.profile);
                ui.horizontal(|ui| {
                    ui.label_subdued(format_clock(signal.created_at));
                    ui.badge(signal.side.label(), signal.side.color());
                    ui.label(RichText::new(&signal.symbol).strong().color(colors.text_neutral));
                    ui.label_subdued(signal.kind.to_string());
                    let entry = format_price(signal.entry_price);
                    ui.label(RichText::new(entry).color(colors.text_neutral));
                    ui.label(RichText::new(&signal.pattern).small().color(colors.info));
                    ui.label_subdued(signal.timeframe.to_string());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{}%", signal.confidence))
                                .strong()
                                .color(tier.color()),
                        );
                    });
                });
            }
        });
    }
}
