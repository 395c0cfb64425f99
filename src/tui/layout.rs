//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};

use super::runtime::App;
use super::style;
use crate::model::types::ChartSeries;
use crate::params::Parameter;
use crate::report::conclusion_advice;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(12),   // body
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(Parameter::ALL.len() as u16 + 2), // controls
            Constraint::Length(4),                               // summary
            Constraint::Min(4),                                  // status + conclusion
        ])
        .split(body[0]);

    let charts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body[1]);

    render_header(frame, app, rows[0]);
    render_controls(frame, app, left[0]);
    render_summary(frame, app, left[1]);
    render_status(frame, app, left[2]);
    render_chart(
        frame,
        &app.sweeps.power_vs_wind_speed,
        (app.input.wind_speed, app.result.power_output_kw()),
        style::POWER_COLOR,
        charts[0],
    );
    render_chart(
        frame,
        &app.sweeps.efficiency_vs_blade_angle,
        (app.input.blade_angle, app.result.efficiency_rating),
        style::EFFICIENCY_COLOR,
        charts[1],
    );
    render_footer(frame, rows[2]);
}

/// Header bar: title and active preset.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " WINDMILL DIGITAL TWIN ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" preset: "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// One row per control with its value and domain.
fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = Parameter::ALL
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let spec = p.spec();
            let domain = match spec.max {
                Some(max) => format!("[{}..{}]", spec.min, max),
                None => format!("[{}..]", spec.min),
            };
            let text = format!(
                " {:<28}{:>9.1} {:<4}{}",
                spec.label,
                p.get(&app.input),
                spec.unit,
                domain
            );
            if i == app.selected {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(style::SELECTED_FG)
                        .bg(style::SELECTED_BG),
                ))
            } else {
                Line::from(text)
            }
        })
        .collect();

    let block = Block::default().title(" Controls ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Power output and efficiency rating.
fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(format!(
            "  Estimated Power Output: {:.2} kW",
            app.result.power_output_kw()
        )),
        Line::from(format!(
            "  Efficiency Rating: {:.2} (arbitrary scale)",
            app.result.efficiency_rating
        )),
    ];
    let block = Block::default()
        .title(" Performance Summary ")
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Status messages followed by the conclusion.
fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app
        .result
        .warnings
        .iter()
        .map(|w| {
            Line::from(Span::styled(
                format!("  [{}] {}", w.severity(), w.message()),
                Style::default()
                    .fg(style::severity_color(w.severity()))
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    if lines.is_empty() {
        lines.push(Line::from("  No warnings."));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", conclusion_advice(app.result.conclusion)),
        Style::default().fg(style::conclusion_color(app.result.conclusion)),
    )));

    let block = Block::default()
        .title(" Status & Conclusion ")
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Line chart of a sweep with the current operating point marked.
fn render_chart(
    frame: &mut Frame,
    series: &ChartSeries,
    operating_point: (f64, f64),
    color: ratatui::style::Color,
    area: Rect,
) {
    let marker = [operating_point];
    let mut bounds_data = series.points.clone();
    bounds_data.push(operating_point);
    let y_bounds = style::auto_bounds_y(&bounds_data);

    let x_lo = series.points.first().map_or(0.0, |p| p.0);
    let x_hi = series.points.last().map_or(1.0, |p| p.0).max(x_lo + 1.0);

    let datasets = vec![
        Dataset::default()
            .name(series.y_label)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(&series.points),
        Dataset::default()
            .name("current")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(style::OPERATING_POINT_COLOR))
            .data(&marker),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" {} ", series.title))
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title(series.x_label)
                .bounds([x_lo, x_hi])
                .labels(vec![format!("{x_lo:.0}"), format!("{x_hi:.0}")]),
        )
        .y_axis(
            Axis::default()
                .title(series.y_label)
                .bounds(y_bounds)
                .labels(vec![
                    format!("{:.1}", y_bounds[0]),
                    format!("{:.1}", y_bounds[1]),
                ]),
        );

    frame.render_widget(chart, area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  ↑/↓:Select  ←/→:Adjust  PgUp/PgDn:x10  1-4:Preset  d:Defaults",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
