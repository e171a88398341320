use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::app::state::chart::BumpSerie;
use crate::app::state::{bump_series, ChartFeed};
use crate::app::view::theme::{series_color, ui_colors};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(dead_code)]
pub(crate) enum LegendPosition {
    Start,
    Middle,
    End,
}

/// Fixed axis parameter object handed to the chart collaborator. Only the
/// legend is expressible in terminal cells; the rest is carried as part
/// of the configuration surface.
#[derive(Clone, Copy, Debug)]
#[allow(dead_code)]
pub(crate) struct AxisSpec {
    pub tick_size: u16,
    pub tick_padding: u16,
    pub tick_rotation: i16,
    pub legend: &'static str,
    pub legend_position: LegendPosition,
    pub legend_offset: i16,
}

#[derive(Clone, Copy, Debug)]
#[allow(dead_code)]
pub(crate) struct ChartMargin {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

/// Fixed styling of the bump chart; constants of the system, not derived
/// from state.
#[derive(Clone, Copy, Debug)]
#[allow(dead_code)]
pub(crate) struct ChartStyle {
    pub line_width: u16,
    pub active_line_width: u16,
    pub inactive_line_width: u16,
    pub inactive_opacity: f32,
    pub point_size: u16,
    pub active_point_size: u16,
    pub margin: ChartMargin,
}

pub(crate) const CHART_STYLE: ChartStyle = ChartStyle {
    line_width: 3,
    active_line_width: 6,
    inactive_line_width: 3,
    inactive_opacity: 0.15,
    point_size: 10,
    active_point_size: 16,
    margin: ChartMargin {
        top: 1,
        right: 2,
        bottom: 0,
        left: 1,
    },
};

pub(crate) const AXIS_TOP: AxisSpec = AxisSpec {
    tick_size: 5,
    tick_padding: 5,
    tick_rotation: 0,
    legend: "",
    legend_position: LegendPosition::Middle,
    legend_offset: -36,
};

pub(crate) const AXIS_BOTTOM: AxisSpec = AxisSpec {
    tick_size: 5,
    tick_padding: 5,
    tick_rotation: 0,
    legend: "",
    legend_position: LegendPosition::Middle,
    legend_offset: 32,
};

pub(crate) const AXIS_LEFT: AxisSpec = AxisSpec {
    tick_size: 5,
    tick_padding: 5,
    tick_rotation: 0,
    legend: "ranking",
    legend_position: LegendPosition::Middle,
    legend_offset: -40,
};

pub(crate) const AXIS_RIGHT: Option<AxisSpec> = None;

/// Renders the committed chart feed. A feed-level parse error and a
/// shape the collaborator cannot chart both surface inside the panel.
pub(in crate::app::view::ui) fn render_chart_panel(f: &mut Frame, area: Rect, feed: &ChartFeed) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let input = match feed.input() {
        Ok(value) => value,
        Err(error) => {
            render_chart_message(f, area, "invalid JSON", error.message());
            return;
        }
    };
    let series = match bump_series(input) {
        Ok(series) => series,
        Err(error) => {
            render_chart_message(f, area, "unsupported chart data", &error.to_string());
            return;
        }
    };
    if series.is_empty() || series.iter().all(|serie| serie.data.is_empty()) {
        let theme = ui_colors();
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "no series to draw",
                Style::default()
                    .fg(theme.panel_hint_fg)
                    .add_modifier(Modifier::DIM),
            ))),
            area,
        );
        return;
    }

    let margin = CHART_STYLE.margin;
    let chart_area = Rect {
        x: area.x + margin.left.min(area.width / 4),
        y: area.y + margin.top.min(area.height / 4),
        width: area
            .width
            .saturating_sub((margin.left + margin.right).min(area.width / 2)),
        height: area
            .height
            .saturating_sub((margin.top + margin.bottom).min(area.height / 2)),
    };

    let max_rank = series
        .iter()
        .flat_map(|serie| serie.data.iter())
        .map(|point| point.y)
        .fold(1.0_f64, f64::max);
    let x_count = series
        .iter()
        .map(|serie| serie.data.len())
        .max()
        .unwrap_or(1);

    // Rank 1 belongs at the top, so plot max_rank + 1 - y.
    let points: Vec<Vec<(f64, f64)>> = series
        .iter()
        .map(|serie| {
            serie
                .data
                .iter()
                .enumerate()
                .map(|(index, point)| (index as f64, max_rank + 1.0 - point.y))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = series
        .iter()
        .zip(points.iter())
        .enumerate()
        .map(|(index, (serie, line))| {
            Dataset::default()
                .name(serie.id.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series_color(index)))
                .data(line)
        })
        .collect();

    let theme = ui_colors();
    let axis_style = Style::default().fg(theme.chart_axis_fg);
    let x_max = x_count.saturating_sub(1).max(1) as f64;
    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(AXIS_BOTTOM.legend)
                .bounds([0.0, x_max])
                .labels(x_labels(&series))
                .style(axis_style),
        )
        .y_axis(
            Axis::default()
                .title(AXIS_LEFT.legend)
                .bounds([1.0, max_rank.max(2.0)])
                .labels(vec![
                    Span::raw(format!("{max_rank:.0}")),
                    Span::raw("1"),
                ])
                .style(axis_style),
        );
    f.render_widget(chart, chart_area);
}

fn x_labels(series: &[BumpSerie]) -> Vec<Span<'static>> {
    let longest = series
        .iter()
        .max_by_key(|serie| serie.data.len())
        .map(|serie| serie.data.as_slice())
        .unwrap_or_default();
    match longest {
        [] => Vec::new(),
        [only] => vec![Span::raw(only.x_label())],
        [first, .., last] => vec![Span::raw(first.x_label()), Span::raw(last.x_label())],
    }
}

fn render_chart_message(f: &mut Frame, area: Rect, title: &str, detail: &str) {
    let theme = ui_colors();
    let lines = vec![
        Line::from(Span::styled(
            format!("✗ {title}"),
            Style::default()
                .fg(theme.error_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            detail.to_string(),
            Style::default().fg(theme.error_fg),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::{AXIS_BOTTOM, AXIS_LEFT, AXIS_RIGHT, AXIS_TOP, CHART_STYLE};

    #[test]
    fn axis_configuration_matches_the_fixed_surface() {
        assert_eq!(AXIS_LEFT.legend, "ranking");
        assert_eq!(AXIS_TOP.legend, "");
        assert_eq!(AXIS_BOTTOM.legend, "");
        assert!(AXIS_RIGHT.is_none());
    }

    #[test]
    fn style_constants_are_the_configured_literals() {
        assert_eq!(CHART_STYLE.line_width, 3);
        assert_eq!(CHART_STYLE.active_line_width, 6);
        assert_eq!(CHART_STYLE.inactive_opacity, 0.15);
        assert_eq!(CHART_STYLE.point_size, 10);
    }
}
