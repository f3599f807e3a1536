use eframe::egui::{CentralPanel, Context, RichText, Spinner};
use egui_plot::{Axis, AxisHints, Line, Plot, PlotPoints};

use crate::app::App;
use crate::domain::Sample;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::utils::format_price;

// Helper to build the date axis: x is the sample's index within the
// windowed slice, labels come from its date.
fn create_date_axis(window: &[Sample]) -> AxisHints<'static> {
    let dates: Vec<String> = window.iter().map(|s| s.date.to_string()).collect();

    AxisHints::new(Axis::X)
        .label(UI_TEXT.axis_time)
        .formatter(move |mark, _range| {
            let idx = mark.value.round();
            if idx < 0.0 || (mark.value - idx).abs() > 0.001 {
                return String::new();
            }
            dates.get(idx as usize).cloned().unwrap_or_default()
        })
}

fn create_price_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::Y).label(UI_TEXT.axis_price)
}

impl App {
    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                if let Some(message) = &self.view.error {
                    ui.label(
                        RichText::new(message)
                            .strong()
                            .color(UI_CONFIG.colors.error_banner),
                    );
                    ui.add_space(4.0);
                }

                if self.view.loading {
                    ui.centered_and_justified(|ui| {
                        ui.horizontal(|ui| {
                            ui.add(Spinner::new());
                            ui.label(UI_TEXT.loading);
                        });
                    });
                    return;
                }

                let window = self.view.windowed();
                if window.is_empty() {
                    return;
                }

                let points: PlotPoints = window
                    .iter()
                    .enumerate()
                    .map(|(i, s)| [i as f64, s.price])
                    .collect();

                let line = Line::new(self.view.symbol.clone(), points)
                    .color(UI_CONFIG.colors.price_line)
                    .width(UI_CONFIG.chart_line_width);

                Plot::new("price_plot")
                    .custom_x_axes(vec![create_date_axis(window)])
                    .custom_y_axes(vec![create_price_axis()])
                    .label_formatter(|_, point| format_price(point.y))
                    .allow_double_click_reset(false)
                    .allow_scroll(false)
                    .show(ui, |plot_ui| {
                        plot_ui.line(line);
                    });
            });
    }
}
