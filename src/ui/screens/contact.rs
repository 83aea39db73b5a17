use crate::app::ContactState;
use crate::models::{ContactField, Subject};
use crate::ui::components::{InputWidget, SelectWidget};
use crate::ui::{nav_bar, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const SUBJECT_OPTIONS: &[&str] = &[
    "General Inquiry",
    "Technical Support",
    "Partnership",
    "Feedback",
];

pub struct ContactScreen<'a> {
    pub state: &'a ContactState,
    pub theme: Theme,
}

impl<'a> ContactScreen<'a> {
    pub fn new(state: &'a ContactState, theme: Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for ContactScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default().style(self.theme.base()).render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(14),   // Form
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("Contact Us", self.theme.title()),
            Span::styled(" - we reply within one business day", self.theme.dim()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        self.render_form(chunks[1], buf);

        let nav = if self.state.show_success {
            nav_bar(&self.theme, &[("Enter", "Close"), ("Esc", "Close")])
        } else if self.state.editing {
            nav_bar(&self.theme, &[("Enter", "Done"), ("Esc", "Done")])
        } else {
            nav_bar(
                &self.theme,
                &[
                    ("↑↓", "Field"),
                    ("←→", "Subject"),
                    ("Enter", "Edit"),
                    ("Ctrl+S", "Send"),
                    ("Esc", "Back"),
                ],
            )
        };
        Paragraph::new(nav).render(chunks[2], buf);

        if self.state.show_success {
            self.render_success(area, buf);
        }
    }
}

impl ContactScreen<'_> {
    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Send us a message")
            .borders(Borders::ALL)
            .border_style(self.theme.border());

        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(4),
            ])
            .split(inner);

        let state = self.state;
        let theme = self.theme;

        for (i, field) in ContactField::all().iter().enumerate() {
            let focused = *field == state.focused_field;
            let error = state.errors.get(*field);

            match field {
                ContactField::Subject => {
                    let selected = state
                        .form
                        .subject
                        .and_then(|s| Subject::all().iter().position(|o| *o == s));
                    SelectWidget::new(field.label(), SUBJECT_OPTIONS, selected, theme)
                        .placeholder("Select a subject")
                        .focused(focused)
                        .error(error)
                        .render(rows[i], buf);
                }
                _ => {
                    let value = match field {
                        ContactField::Name => state.form.name.as_str(),
                        ContactField::Email => state.form.email.as_str(),
                        _ => state.form.message.as_str(),
                    };
                    InputWidget::new(field.label(), value, theme)
                        .focused(focused)
                        .editing(focused && state.editing)
                        .error(error)
                        .render(rows[i], buf);
                }
            }
        }
    }

    fn render_success(&self, area: Rect, buf: &mut Buffer) {
        let popup = centered(area, 44, 7);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(Span::styled("Message Sent", self.theme.title()))
            .borders(Borders::ALL)
            .border_style(self.theme.border_focused())
            .style(self.theme.base());

        let lines = vec![
            Line::from(Span::styled("✔ Thank you!", self.theme.success())),
            Line::from(""),
            Line::from(Span::styled(
                "Your message has been sent successfully. We'll get back to you soon.",
                self.theme.normal(),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(popup, buf);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ThemeMode;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn shows_field_errors() {
        let mut state = ContactState::new();
        state.submit();

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        ContactScreen::new(&state, Theme::for_mode(ThemeMode::Light)).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Please enter your name"));
        assert!(text.contains("Please select a subject"));
    }

    #[test]
    fn shows_success_modal() {
        let mut state = ContactState::new();
        state.show_success = true;

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        ContactScreen::new(&state, Theme::for_mode(ThemeMode::Dark)).render(area, &mut buf);

        assert!(buffer_text(&buf).contains("Thank you!"));
    }

    #[test]
    fn centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered(area, 44, 7);
        assert_eq!(popup.width, 44);
        assert_eq!(popup.height, 7);
        assert_eq!(popup.x, 18);
    }
}
