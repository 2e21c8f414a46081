// Form Widget - Ratatui renderer for the demo form
//
// Field label, then the field's own widget lines, one field after another.
// The notice and key help sit at the bottom.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::form::{FieldKind, Form};
use crate::config::ColorScheme;
use crate::widgets::{ChipComboboxWidget, ComboboxWidget};

const HELP: &str = "Tab next · Shift+Tab previous · Ctrl+S submit · Esc cancel";

/// Widget for rendering a form
pub struct FormWidget<'a> {
    pub form: &'a Form,
    colors: &'a ColorScheme,
}

impl<'a> FormWidget<'a> {
    pub fn new(form: &'a Form, colors: &'a ColorScheme) -> Self {
        Self { form, colors }
    }

    /// Content lines inside the border
    pub fn lines(&self) -> Vec<Line<'static>> {
        let colors = self.colors;
        let mut lines = Vec::new();

        for (idx, field) in self.form.fields().iter().enumerate() {
            let label_style = if idx == self.form.focus_index() {
                Style::default()
                    .fg(colors.input.prompt.to_color())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.dropdown.hint.to_color())
            };
            lines.push(Line::from(Span::styled(field.label.clone(), label_style)));

            match &field.kind {
                FieldKind::Single(combobox) => {
                    lines.extend(ComboboxWidget::new(combobox, colors).lines());
                }
                FieldKind::Multi(widget) => {
                    lines.extend(ChipComboboxWidget::new(widget, colors).lines());
                }
            }
            lines.push(Line::from(""));
        }

        if let Some(notice) = self.form.notice() {
            lines.push(Line::from(Span::styled(
                notice.to_string(),
                Style::default()
                    .fg(colors.dropdown.new_value.to_color())
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::from(Span::styled(
            HELP,
            Style::default().fg(colors.dropdown.hint.to_color()),
        )));
        lines
    }
}

impl<'a> Widget for FormWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.colors.dropdown.hint.to_color()))
            .title(Span::styled(
                format!(" {} ", self.form.title()),
                Style::default()
                    .fg(self.colors.input.text.to_color())
                    .add_modifier(Modifier::BOLD),
            ));
        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
