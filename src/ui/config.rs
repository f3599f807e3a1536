use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub price_line: Color32,
    pub gain: Color32,
    pub loss: Color32,
    pub neutral: Color32,
    pub error_banner: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub stats_panel_width: f32,
    pub chart_line_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(230, 230, 230),
        central_panel: Color32::from_rgb(20, 22, 28),
        side_panel: Color32::from_rgb(28, 30, 38),
        price_line: Color32::from_rgb(142, 68, 173),
        gain: Color32::from_rgb(0, 200, 83),
        loss: Color32::from_rgb(229, 57, 53),
        neutral: Color32::LIGHT_GRAY,
        error_banner: Color32::from_rgb(229, 57, 53),
    },
    stats_panel_width: 240.0,
    chart_line_width: 1.5,
};

impl UiConfig {
    /// Frame for the stats side panel (Standard padding)
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the chart area
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }
}

pub struct UiText {
    pub input_hint: &'static str,
    pub search_button: &'static str,
    pub loading: &'static str,
    pub stats_title: &'static str,
    pub label_current_price: &'static str,
    pub label_change: &'static str,
    pub label_change_pct: &'static str,
    pub label_high: &'static str,
    pub label_low: &'static str,
    pub stats_placeholder: &'static str,
    pub axis_time: &'static str,
    pub axis_price: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    input_hint: "Enter stock ticker",
    search_button: "Search",
    loading: "Loading...",
    stats_title: "Summary",
    label_current_price: "Current Price",
    label_change: "Change",
    label_change_pct: "Change %",
    label_high: "Highest Price",
    label_low: "Lowest Price",
    stats_placeholder: "—",
    axis_time: "Date",
    axis_price: "Close",
};
