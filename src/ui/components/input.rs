use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct InputWidget<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
    editing: bool,
    error: Option<&'a str>,
    theme: Theme,
}

impl<'a> InputWidget<'a> {
    pub fn new(label: &'a str, value: &'a str, theme: Theme) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            focused: false,
            editing: false,
            error: None,
            theme,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let border_style = if self.error.is_some() {
            theme.error()
        } else if self.focused {
            theme.border_focused()
        } else {
            theme.border()
        };

        let mut block = Block::default()
            .title(self.label)
            .borders(Borders::ALL)
            .border_style(border_style);
        if let Some(err) = self.error {
            block = block.title_bottom(Span::styled(err, theme.error()));
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.editing {
            Line::from(vec![
                Span::styled(self.value, theme.highlight()),
                Span::styled(" ", theme.selected()),
            ])
        } else if self.value.is_empty() {
            Line::from(Span::styled(self.placeholder, theme.dim()))
        } else if self.focused {
            Line::from(Span::styled(self.value, theme.selected()))
        } else {
            Line::from(Span::styled(self.value, theme.normal()))
        };

        Paragraph::new(line)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

pub struct SelectWidget<'a> {
    label: &'a str,
    options: &'a [&'a str],
    selected: Option<usize>,
    placeholder: &'a str,
    focused: bool,
    error: Option<&'a str>,
    theme: Theme,
}

impl<'a> SelectWidget<'a> {
    pub fn new(
        label: &'a str,
        options: &'a [&'a str],
        selected: Option<usize>,
        theme: Theme,
    ) -> Self {
        Self {
            label,
            options,
            selected,
            placeholder: "Select...",
            focused: false,
            error: None,
            theme,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }
}

impl Widget for SelectWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let border_style = if self.error.is_some() {
            theme.error()
        } else if self.focused {
            theme.border_focused()
        } else {
            theme.border()
        };

        let mut block = Block::default()
            .title(self.label)
            .borders(Borders::ALL)
            .border_style(border_style);
        if let Some(err) = self.error {
            block = block.title_bottom(Span::styled(err, theme.error()));
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let value = self
            .selected
            .and_then(|i| self.options.get(i))
            .copied();

        let display = match (value, self.focused) {
            (Some(v), true) => format!("< {} >", v),
            (Some(v), false) => v.to_string(),
            (None, true) => format!("< {} >", self.placeholder),
            (None, false) => self.placeholder.to_string(),
        };

        let style = match (value, self.focused) {
            (_, true) => theme.highlight(),
            (Some(_), false) => theme.normal(),
            (None, false) => theme.dim(),
        };

        Paragraph::new(Span::styled(display, style)).render(inner, buf);
    }
}
