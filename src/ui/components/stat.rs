use crate::logic::format_thousands;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Headline number with a caption underneath.
pub struct StatTile<'a> {
    label: &'a str,
    value: u64,
    suffix: &'a str,
    theme: Theme,
}

impl<'a> StatTile<'a> {
    pub fn new(label: &'a str, value: u64, suffix: &'a str, theme: Theme) -> Self {
        Self {
            label,
            value,
            suffix,
            theme,
        }
    }
}

impl Widget for StatTile<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border());

        let lines = vec![
            Line::from(Span::styled(
                format!("{}{}", format_thousands(self.value), self.suffix),
                self.theme.title().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.label, self.theme.dim())),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
