use eframe::egui::{Color32, Context, Visuals};

use crate::ui::config::UI_CONFIG;

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
}

/// Formats a price with adaptive decimals: dollars-and-cents for normal
/// stocks, extra precision for sub-dollar tickers.
pub fn format_price(price: f64) -> String {
    let abs_price = price.abs();
    if abs_price >= 1.0 || price == 0.0 {
        format!("${:.2}", price)
    } else if abs_price >= 0.01 {
        format!("${:.4}", price)
    } else {
        format!("${:.8}", price)
    }
}

/// "+1.25 (+0.83%)" / "-3.10 (-2.04%)" style change string.
pub fn format_change(change: f64, pct: f64) -> String {
    let sign = if change > 0.0 { "+" } else { "" };
    format!("{}{:.2} ({}{:.2}%)", sign, change, sign, pct)
}

/// Green for gains, red for losses, gray for flat.
pub fn change_color(change: f64) -> Color32 {
    if change > f64::EPSILON {
        UI_CONFIG.colors.gain
    } else if change < -f64::EPSILON {
        UI_CONFIG.colors.loss
    } else {
        UI_CONFIG.colors.neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_precision_tiers() {
        assert_eq!(format_price(155.0), "$155.00");
        assert_eq!(format_price(0.5), "$0.5000");
        assert_eq!(format_price(0.00012345), "$0.00012345");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_format_change_signs() {
        assert_eq!(format_change(5.0, 3.333), "+5.00 (+3.33%)");
        assert_eq!(format_change(-10.0, -10.0), "-10.00 (-10.00%)");
        assert_eq!(format_change(0.0, 0.0), "0.00 (0.00%)");
    }
}
