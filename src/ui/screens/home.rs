use crate::app::{EfficiencyBar, StatCounter};
use crate::models::WeatherSnapshot;
use crate::ui::components::{
    efficiency_gauge, humidity_gauge, temperature_gauge, wind_gauge, StatTile,
};
use crate::ui::{nav_bar, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HomeScreen<'a> {
    pub weather: Option<&'a WeatherSnapshot>,
    pub counters: &'a [StatCounter],
    pub bars: &'a [EfficiencyBar],
    pub status_message: Option<&'a str>,
    pub theme: Theme,
}

impl<'a> HomeScreen<'a> {
    pub fn new(
        weather: Option<&'a WeatherSnapshot>,
        counters: &'a [StatCounter],
        bars: &'a [EfficiencyBar],
        theme: Theme,
    ) -> Self {
        Self {
            weather,
            counters,
            bars,
            status_message: None,
            theme,
        }
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }
}

impl Widget for HomeScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default().style(self.theme.base()).render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(5), // Weather
                Constraint::Length(4), // Counters
                Constraint::Min(8),    // Efficiency bars
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        self.render_header(chunks[0], buf);
        self.render_weather(chunks[1], buf);
        self.render_counters(chunks[2], buf);
        self.render_bars(chunks[3], buf);
        self.render_status_message(chunks[4], buf);

        let nav = nav_bar(
            &self.theme,
            &[
                ("1", "Home"),
                ("2", "Crop Advisor"),
                ("3", "Insights"),
                ("4", "Contact"),
                ("t", "Theme"),
                ("q", "Quit"),
            ],
        );
        Paragraph::new(nav).render(chunks[5], buf);
    }
}

impl HomeScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::styled("AgroSmart", self.theme.title()),
            Span::styled(" - Smart Farming Dashboard ", self.theme.dim()),
            Span::styled(self.theme.mode.icon(), self.theme.highlight()),
        ]);

        let block = Block::default()
            .title(title)
            .borders(Borders::BOTTOM)
            .border_style(self.theme.border());

        let updated = self
            .weather
            .map(|w| w.observed_at.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string());

        let para = Paragraph::new(Span::styled(
            format!("Field conditions updated {}", updated),
            self.theme.dim(),
        ))
        .block(block);
        para.render(area, buf);
    }

    fn render_weather(&self, area: Rect, buf: &mut Buffer) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        let theme = self.theme;
        let temp = self.weather.map(|w| w.temperature_c as f64);
        let humidity = self.weather.map(|w| w.humidity_percent as f64);
        let wind = self.weather.map(|w| w.wind_speed_kmh as f64);

        temperature_gauge("Temperature", temp, theme).render(cols[0], buf);
        humidity_gauge("Humidity", humidity, theme).render(cols[1], buf);
        wind_gauge("Wind", wind, theme).render(cols[2], buf);

        let block = Block::default()
            .title("Conditions")
            .borders(Borders::ALL)
            .border_style(theme.border());
        let text = match self.weather {
            Some(w) => Span::styled(
                format!("{} {}", w.condition.symbol(), w.condition),
                theme.highlight(),
            ),
            None => Span::styled("--", theme.dim()),
        };
        Paragraph::new(text).block(block).render(cols[3], buf);
    }

    fn render_counters(&self, area: Rect, buf: &mut Buffer) {
        if self.counters.is_empty() {
            return;
        }

        let constraints: Vec<Constraint> = self
            .counters
            .iter()
            .map(|_| Constraint::Ratio(1, self.counters.len() as u32))
            .collect();
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (counter, col) in self.counters.iter().zip(cols.iter()) {
            StatTile::new(
                &counter.label,
                counter.animation.value(),
                &counter.suffix,
                self.theme,
            )
            .render(*col, buf);
        }
    }

    fn render_bars(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Efficiency", self.theme.header()))
            .borders(Borders::ALL)
            .border_style(self.theme.border());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.bars.is_empty() {
            Paragraph::new(Span::styled("No efficiency metrics configured", self.theme.dim()))
                .render(inner, buf);
            return;
        }

        let constraints: Vec<Constraint> = self.bars.iter().map(|_| Constraint::Length(4)).collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (bar, row) in self.bars.iter().zip(rows.iter()) {
            efficiency_gauge(&bar.label, bar.animation.value(), self.theme).render(*row, buf);
        }
    }

    fn render_status_message(&self, area: Rect, buf: &mut Buffer) {
        if let Some(msg) = self.status_message {
            let style = if msg.contains("failed") {
                self.theme.warning()
            } else {
                self.theme.success()
            };
            Paragraph::new(Span::styled(msg, style)).render(area, buf);
        }
    }
}
