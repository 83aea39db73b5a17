use crate::models::{ChartDataset, CROP_YIELD, SOIL_NUTRIENTS, WATER_USAGE};
use crate::ui::{nav_bar, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph,
        Widget,
    },
};

pub struct InsightsScreen {
    pub theme: Theme,
}

impl InsightsScreen {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Widget for InsightsScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default().style(self.theme.base()).render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),      // Title
                Constraint::Percentage(50), // Soil + water
                Constraint::Min(10),        // Yield
                Constraint::Length(1),      // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("Farm Insights", self.theme.title()),
            Span::styled(" - smart vs traditional farming", self.theme.dim()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        self.render_soil(top[0], buf);
        self.render_water(top[1], buf);
        self.render_yield(chunks[2], buf);

        let nav = nav_bar(
            &self.theme,
            &[("1", "Home"), ("2", "Crop Advisor"), ("4", "Contact"), ("Esc", "Back")],
        );
        Paragraph::new(nav).render(chunks[3], buf);
    }
}

const PAIR_COLORS: [Color; 2] = [Theme::SERIES_GREEN, Theme::SERIES_SKY];
const WATER_COLORS: [Color; 3] = [Theme::SERIES_RED, Theme::SERIES_GREEN, Theme::SERIES_BLUE];
const YIELD_COLORS: [Color; 2] = [Theme::SERIES_RED, Theme::SERIES_GREEN];

fn chart_block(chart: &ChartDataset, theme: &Theme) -> Block<'static> {
    Block::default()
        .title(Span::styled(chart.title, theme.header()))
        .borders(Borders::ALL)
        .border_style(theme.border())
}

fn legend(chart: &ChartDataset, colors: &[Color]) -> Line<'static> {
    let spans: Vec<Span> = chart
        .series
        .iter()
        .zip(colors.iter())
        .flat_map(|(s, c)| {
            [
                Span::styled("■ ", Style::default().fg(*c)),
                Span::raw(format!("{}  ", s.name)),
            ]
        })
        .collect();
    Line::from(spans)
}

impl InsightsScreen {
    /// Grouped bars, current beside optimal, per nutrient.
    fn render_soil(&self, area: Rect, buf: &mut Buffer) {
        let chart = SOIL_NUTRIENTS;
        let block = chart_block(&chart, &self.theme).title_bottom(legend(&chart, &PAIR_COLORS));

        let mut bar_chart = BarChart::default()
            .block(block)
            .bar_width(3)
            .bar_gap(0)
            .group_gap(2)
            .max(chart.y_upper());

        for (i, label) in chart.labels.iter().enumerate() {
            let bars: Vec<Bar> = chart
                .series
                .iter()
                .zip(PAIR_COLORS.iter())
                .map(|(s, c)| {
                    Bar::default()
                        .value(s.values[i])
                        .style(Style::default().fg(*c))
                        .value_style(Style::default().fg(Color::Black).bg(*c))
                })
                .collect();
            bar_chart = bar_chart.data(BarGroup::default().label(Line::from(*label)).bars(&bars));
        }

        bar_chart.render(area, buf);
    }

    fn render_water(&self, area: Rect, buf: &mut Buffer) {
        let chart = WATER_USAGE;
        let block = chart_block(&chart, &self.theme);

        let values = chart.series[0].values;
        let bars: Vec<Bar> = chart
            .labels
            .iter()
            .zip(values.iter())
            .zip(WATER_COLORS.iter())
            .map(|((label, v), c)| {
                Bar::default()
                    .value(*v)
                    .label(Line::from(*label))
                    .style(Style::default().fg(*c))
                    .value_style(Style::default().fg(Color::Black).bg(*c))
            })
            .collect();

        BarChart::default()
            .block(block)
            .bar_width(8)
            .bar_gap(2)
            .max(chart.y_upper())
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }

    fn render_yield(&self, area: Rect, buf: &mut Buffer) {
        let chart = CROP_YIELD;
        let theme = self.theme;

        let points: Vec<Vec<(f64, f64)>> = chart
            .series
            .iter()
            .map(|s| {
                s.values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i as f64, *v as f64))
                    .collect()
            })
            .collect();

        let datasets: Vec<Dataset> = chart
            .series
            .iter()
            .zip(points.iter())
            .zip(YIELD_COLORS.iter())
            .map(|((s, data), c)| {
                Dataset::default()
                    .name(s.name)
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(*c))
                    .data(data)
            })
            .collect();

        let y_min = chart.y_min as f64;
        let y_max = chart.y_upper() as f64 + 5.0;
        let y_mid = ((y_min + y_max) / 2.0).round();

        Chart::new(datasets)
            .block(chart_block(&chart, &theme))
            .x_axis(
                Axis::default()
                    .style(theme.dim())
                    .bounds([0.0, (chart.labels.len() - 1) as f64])
                    .labels(chart.labels.iter().map(|l| Span::raw(*l))),
            )
            .y_axis(
                Axis::default()
                    .style(theme.dim())
                    .bounds([y_min, y_max])
                    .labels([
                        Span::raw(format!("{:.0}", y_min)),
                        Span::raw(format!("{:.0}", y_mid)),
                        Span::raw(format!("{:.0}", y_max)),
                    ]),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ThemeMode;

    #[test]
    fn renders_without_panicking_on_small_areas() {
        for (w, h) in [(120u16, 40u16), (40, 12), (10, 4)] {
            let area = Rect::new(0, 0, w, h);
            let mut buf = Buffer::empty(area);
            InsightsScreen::new(Theme::for_mode(ThemeMode::Dark)).render(area, &mut buf);
        }
    }

    #[test]
    fn legend_names_each_series() {
        let line = legend(&SOIL_NUTRIENTS, &PAIR_COLORS);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Current Levels"));
        assert!(text.contains("Optimal Levels"));
    }
}
