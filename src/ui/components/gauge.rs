use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct GaugeWidget<'a> {
    title: &'a str,
    value: Option<f64>,
    unit: &'a str,
    min: f64,
    max: f64,
    thresholds: Vec<(f64, Color)>,
    precision: usize,
    theme: Theme,
}

impl<'a> GaugeWidget<'a> {
    pub fn new(title: &'a str, value: Option<f64>, unit: &'a str, theme: Theme) -> Self {
        Self {
            title,
            value,
            unit,
            min: 0.0,
            max: 100.0,
            thresholds: Vec::new(),
            precision: 1,
            theme,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn thresholds(mut self, thresholds: Vec<(f64, Color)>) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    fn color_for(&self, value: f64) -> Color {
        self.thresholds
            .iter()
            .rev()
            .find(|(threshold, _)| value >= *threshold)
            .map(|(_, color)| *color)
            .unwrap_or(self.theme.fg)
    }

    fn fill_ratio(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

fn render_bar(row: Rect, ratio: f64, color: Color, buf: &mut Buffer) {
    let filled = row.x + (row.width as f64 * ratio) as u16;
    for x in row.left()..row.right() {
        let ch = if x < filled { '█' } else { '░' };
        buf[(x, row.y)].set_char(ch).set_fg(color);
    }
}

impl Widget for GaugeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border());
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(value) = self.value else {
            Paragraph::new(Span::styled("--", self.theme.dim())).render(inner, buf);
            return;
        };

        let color = self.color_for(value);
        let text = format!("{:.prec$}{}", value, self.unit, prec = self.precision);
        Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
            .render(inner, buf);

        if inner.height >= 2 {
            let row = Rect::new(inner.x, inner.y + 1, inner.width, 1);
            render_bar(row, self.fill_ratio(value), color, buf);
        }
    }
}

pub fn temperature_gauge(title: &str, value: Option<f64>, theme: Theme) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "°C", theme)
        .range(0.0, 45.0)
        .precision(0)
        .thresholds(vec![
            (0.0, Theme::TEMP_MILD),
            (25.0, Theme::TEMP_WARM),
            (30.0, Theme::TEMP_HOT),
        ])
}

pub fn humidity_gauge(title: &str, value: Option<f64>, theme: Theme) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "%", theme)
        .range(0.0, 100.0)
        .precision(0)
        .thresholds(vec![
            (0.0, theme.success),
            (70.0, theme.warning),
        ])
}

pub fn wind_gauge(title: &str, value: Option<f64>, theme: Theme) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, " km/h", theme)
        .range(0.0, 30.0)
        .precision(0)
        .thresholds(vec![(0.0, theme.highlight), (15.0, theme.warning)])
}

pub fn efficiency_gauge(title: &str, percent: u64, theme: Theme) -> GaugeWidget<'_> {
    GaugeWidget::new(title, Some(percent as f64), "%", theme)
        .range(0.0, 100.0)
        .precision(0)
        .thresholds(vec![(0.0, theme.accent)])
}
