//! Color constants and auto-scaling helpers for the TUI.

use ratatui::style::Color;

use crate::model::types::{Conclusion, Severity};

/// Power curve line color.
pub const POWER_COLOR: Color = Color::Cyan;
/// Efficiency curve line color.
pub const EFFICIENCY_COLOR: Color = Color::LightGreen;
/// Marker for the current operating point on a chart.
pub const OPERATING_POINT_COLOR: Color = Color::White;
/// Highlighted control row.
pub const SELECTED_FG: Color = Color::Black;
/// Highlighted control row background.
pub const SELECTED_BG: Color = Color::Cyan;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;

/// Color for a status message.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Advisory => Color::Yellow,
        Severity::Critical => Color::Red,
    }
}

/// Color for the conclusion line.
pub fn conclusion_color(conclusion: Conclusion) -> Color {
    match conclusion {
        Conclusion::LowPower => Color::Blue,
        Conclusion::HighPower => Color::Yellow,
        Conclusion::Optimal => Color::Green,
    }
}

/// Computes Y-axis bounds from chart data points with 10% padding.
pub fn auto_bounds_y(points: &[(f64, f64)]) -> [f64; 2] {
    let ys = points.iter().map(|&(_, y)| y);
    let min = ys.clone().fold(f64::INFINITY, f64::min);
    let max = ys.fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return [-1.0, 1.0];
    }
    let range = (max - min).max(0.1);
    let pad = range * 0.1;
    [min - pad, max + pad]
}
