pub mod components;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use ratatui::text::{Line, Span};

/// Key hint bar shown along the bottom of every screen.
pub fn nav_bar(theme: &Theme, hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!("[{}]", key), theme.nav_key()),
                Span::styled(format!("{} ", label), theme.nav_label()),
            ]
        })
        .collect();
    Line::from(spans)
}
