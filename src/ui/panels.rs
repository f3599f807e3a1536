use eframe::egui::{
    Align, Context, Grid, Key, Layout, RichText, SidePanel, TextEdit, TopBottomPanel, Ui,
};
use strum::IntoEnumIterator;

use crate::app::App;
use crate::domain::Timeframe;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::utils::{change_color, format_change, format_price};

impl App {
    /// Symbol form, active-symbol heading and the timeframe toggle row.
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let response = ui.add(
                        TextEdit::singleline(&mut self.symbol_input)
                            .hint_text(UI_TEXT.input_hint)
                            .desired_width(120.0),
                    );
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                    if ui.button(UI_TEXT.search_button).clicked() || submitted {
                        self.submit_symbol();
                    }

                    ui.separator();
                    ui.heading(
                        RichText::new(&self.view.symbol).color(UI_CONFIG.colors.heading),
                    );

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        // Reversed iteration keeps 1D..1Y reading
                        // left-to-right inside the right-aligned layout.
                        for tf in Timeframe::iter().collect::<Vec<_>>().into_iter().rev() {
                            let selected = self.view.timeframe == tf;
                            if ui.selectable_label(selected, tf.to_string()).clicked() {
                                self.view.timeframe = tf;
                            }
                        }
                    });
                });
            });
    }

    /// The five statistic readouts, derived from the full fetched series.
    pub(crate) fn render_stats_panel(&mut self, ctx: &Context) {
        SidePanel::right("stats_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .exact_width(UI_CONFIG.stats_panel_width)
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading(UI_TEXT.stats_title);
                ui.separator();
                self.stats_grid(ui);
            });
    }

    fn stats_grid(&self, ui: &mut Ui) {
        let stats = self.view.stats;

        Grid::new("stats_grid").num_columns(2).striped(true).show(ui, |ui| {
            let value_or_placeholder = |present: Option<String>| {
                present.unwrap_or_else(|| UI_TEXT.stats_placeholder.to_string())
            };

            ui.label(UI_TEXT.label_current_price);
            ui.label(
                RichText::new(value_or_placeholder(
                    stats.map(|s| format_price(s.current_price)),
                ))
                .strong(),
            );
            ui.end_row();

            ui.label(UI_TEXT.label_change);
            match stats {
                Some(s) => {
                    ui.label(
                        RichText::new(format_change(s.change_absolute, s.change_percent))
                            .strong()
                            .color(change_color(s.change_absolute)),
                    );
                }
                None => {
                    ui.label(UI_TEXT.stats_placeholder);
                }
            }
            ui.end_row();

            ui.label(UI_TEXT.label_change_pct);
            match stats {
                Some(s) => {
                    ui.label(
                        RichText::new(format!("{:.2}%", s.change_percent))
                            .strong()
                            .color(change_color(s.change_percent)),
                    );
                }
                None => {
                    ui.label(UI_TEXT.stats_placeholder);
                }
            }
            ui.end_row();

            ui.label(UI_TEXT.label_high);
            ui.label(value_or_placeholder(stats.map(|s| format_price(s.high_price))));
            ui.end_row();

            ui.label(UI_TEXT.label_low);
            ui.label(value_or_placeholder(stats.map(|s| format_price(s.low_price))));
            ui.end_row();
        });
    }
}
