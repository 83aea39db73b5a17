use crate::app::{AdvisorField, AdvisorResult, AdvisorState};
use crate::models::SoilType;
use crate::ui::components::{InputWidget, SelectWidget};
use crate::ui::{nav_bar, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const SOIL_OPTIONS: &[&str] = &["Loamy", "Sandy", "Clay", "Silt", "Peaty"];

pub struct AdvisorScreen<'a> {
    pub state: &'a AdvisorState,
    pub theme: Theme,
}

impl<'a> AdvisorScreen<'a> {
    pub fn new(state: &'a AdvisorState, theme: Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for AdvisorScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default().style(self.theme.base()).render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(12),   // Content
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("AI Crop Suggestion", self.theme.title()),
            Span::styled(" - enter your field conditions", self.theme.dim()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        self.render_form(content[0], buf);
        self.render_result(content[1], buf);

        let nav = if self.state.editing {
            nav_bar(&self.theme, &[("Enter", "Done"), ("Esc", "Done")])
        } else {
            nav_bar(
                &self.theme,
                &[
                    ("↑↓", "Field"),
                    ("←→", "Soil"),
                    ("Enter", "Edit"),
                    ("Ctrl+S", "Suggest"),
                    ("c", "Clear"),
                    ("Esc", "Back"),
                ],
            )
        };
        Paragraph::new(nav).render(chunks[2], buf);
    }
}

impl AdvisorScreen<'_> {
    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Field Conditions")
            .borders(Borders::ALL)
            .border_style(self.theme.border());

        let inner = block.inner(area);
        block.render(area, buf);

        let mut constraints: Vec<Constraint> = AdvisorField::all()
            .iter()
            .map(|_| Constraint::Length(3))
            .collect();
        constraints.push(Constraint::Min(0));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let state = self.state;
        let theme = self.theme;

        for (i, field) in AdvisorField::all().iter().enumerate() {
            let focused = *field == state.focused_field;
            match field {
                AdvisorField::Soil => {
                    let selected = state
                        .soil
                        .and_then(|s| SoilType::all().iter().position(|o| *o == s));
                    SelectWidget::new(field.label(), SOIL_OPTIONS, selected, theme)
                        .placeholder("Select soil type")
                        .focused(focused)
                        .render(rows[i], buf);
                }
                AdvisorField::Rainfall => {
                    InputWidget::new(field.label(), &state.rainfall, theme)
                        .placeholder("e.g. 600")
                        .focused(focused)
                        .editing(focused && state.editing)
                        .render(rows[i], buf);
                }
                AdvisorField::Temperature => {
                    InputWidget::new(field.label(), &state.temperature, theme)
                        .placeholder("e.g. 25")
                        .focused(focused)
                        .editing(focused && state.editing)
                        .render(rows[i], buf);
                }
            }
        }

        if let Some(ref alert) = state.alert {
            let para = Paragraph::new(Span::styled(format!("⚠ {}", alert), theme.error()))
                .wrap(Wrap { trim: true });
            para.render(rows[AdvisorField::all().len()], buf);
        }
    }

    fn render_result(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Recommended Crops")
            .borders(Borders::ALL)
            .border_style(self.theme.border());

        let inner = block.inner(area);
        block.render(area, buf);

        match self.state.result {
            Some(ref result) => {
                let lines = result_lines(result, &self.theme);
                Paragraph::new(lines)
                    .wrap(Wrap { trim: true })
                    .render(inner, buf);
            }
            None => {
                Paragraph::new(Span::styled(
                    "Fill in the conditions and press Ctrl+S for suggestions",
                    self.theme.dim(),
                ))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            }
        }
    }
}

fn result_lines<'a>(result: &'a AdvisorResult, theme: &Theme) -> Vec<Line<'a>> {
    let rec = &result.recommendation;
    let conditions = &result.conditions;
    let mut lines = Vec::new();

    if rec.crops.is_empty() {
        lines.push(Line::from(Span::styled(
            "No crops matched these conditions",
            theme.warning(),
        )));
    } else {
        for crop in &rec.crops {
            lines.push(Line::from(vec![
                Span::styled("  ✿ ", theme.success()),
                Span::styled(crop.as_str(), theme.normal()),
            ]));
        }
    }
    lines.push(Line::from(vec![]));

    if !rec.rationale.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Analysis: ", theme.header()),
            Span::styled(rec.rationale.as_str(), theme.dim()),
        ]));
        lines.push(Line::from(vec![]));
    }

    lines.push(Line::from(Span::styled("Conditions:", theme.title())));
    lines.push(Line::from(vec![
        Span::styled("  Soil: ", theme.dim()),
        Span::styled(conditions.soil.label(), theme.normal()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Rainfall: ", theme.dim()),
        Span::styled(format!("{}mm", conditions.rainfall_mm), theme.normal()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Temperature: ", theme.dim()),
        Span::styled(format!("{}°C", conditions.temperature_c), theme.normal()),
    ]));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::crop_advisor::recommend;
    use crate::models::{GrowingConditions, ThemeMode};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn result_lists_crops_and_conditions() {
        let conditions = GrowingConditions::new("sandy", Some(200.0), Some(31.5)).unwrap();
        let result = AdvisorResult {
            conditions,
            recommendation: recommend(&conditions),
        };
        let theme = Theme::for_mode(ThemeMode::Light);
        let text: Vec<String> = result_lines(&result, &theme).iter().map(line_text).collect();

        assert_eq!(text[0], "  ✿ Millets");
        assert_eq!(text[3], "  ✿ Date Palm");
        assert!(text.contains(&"  Soil: Sandy".to_string()));
        assert!(text.contains(&"  Rainfall: 200mm".to_string()));
        assert!(text.contains(&"  Temperature: 31.5°C".to_string()));
    }

    #[test]
    fn empty_result_says_so() {
        let conditions = GrowingConditions::new("loamy", Some(900.0), Some(12.0)).unwrap();
        let result = AdvisorResult {
            conditions,
            recommendation: recommend(&conditions),
        };
        let theme = Theme::for_mode(ThemeMode::Dark);
        let lines = result_lines(&result, &theme);
        assert_eq!(line_text(&lines[0]), "No crops matched these conditions");
        assert!(!lines
            .iter()
            .any(|l| line_text(l).starts_with("Analysis")));
    }
}
