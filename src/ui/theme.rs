use crate::models::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

/// Palette for one theme mode. Screens take a copy and style through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub accent: Color,
    pub highlight: Color,
    pub selection_bg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Theme {
    // Temperature colors (°C)
    pub const TEMP_MILD: Color = Color::Cyan;
    pub const TEMP_WARM: Color = Color::Yellow;
    pub const TEMP_HOT: Color = Color::Red;

    // Series colors, shared by both modes
    pub const SERIES_GREEN: Color = Color::Rgb(46, 204, 113);
    pub const SERIES_SKY: Color = Color::Rgb(135, 206, 235);
    pub const SERIES_RED: Color = Color::Rgb(231, 76, 60);
    pub const SERIES_BLUE: Color = Color::Rgb(52, 152, 219);

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                mode,
                bg: Color::Rgb(248, 250, 245),
                fg: Color::Rgb(33, 37, 41),
                dim: Color::Rgb(110, 117, 124),
                accent: Color::Rgb(39, 174, 96),
                highlight: Color::Rgb(22, 120, 160),
                selection_bg: Color::Rgb(214, 234, 220),
                success: Color::Rgb(39, 174, 96),
                warning: Color::Rgb(204, 132, 0),
                error: Color::Rgb(192, 57, 43),
            },
            ThemeMode::Dark => Self {
                mode,
                bg: Color::Rgb(18, 24, 20),
                fg: Color::White,
                dim: Color::DarkGray,
                accent: Color::Green,
                highlight: Color::Cyan,
                selection_bg: Color::DarkGray,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().bg(self.bg).fg(self.fg)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    pub fn normal(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn temp_color(temp_c: f64) -> Color {
        if temp_c < 25.0 {
            Self::TEMP_MILD
        } else if temp_c < 30.0 {
            Self::TEMP_WARM
        } else {
            Self::TEMP_HOT
        }
    }

    pub fn nav_key(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_label(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.accent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_by_mode() {
        let light = Theme::for_mode(ThemeMode::Light);
        let dark = Theme::for_mode(ThemeMode::Dark);
        assert_ne!(light.bg, dark.bg);
        assert_eq!(light.mode, ThemeMode::Light);
        assert_eq!(dark.mode, ThemeMode::Dark);
    }

    #[test]
    fn temperature_bands() {
        assert_eq!(Theme::temp_color(20.0), Theme::TEMP_MILD);
        assert_eq!(Theme::temp_color(27.0), Theme::TEMP_WARM);
        assert_eq!(Theme::temp_color(34.0), Theme::TEMP_HOT);
    }
}
