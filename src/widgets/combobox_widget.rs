// Combobox Widget - Ratatui Widget implementation for the combobox
//
// Input line first, then the dropdown window (with scroll hints and the
// new-value row) when the dropdown is open.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::combobox::Combobox;
use super::text::truncate_to_width;
use crate::config::ColorScheme;

const PROMPT: &str = "❯ ";
const ROW_INDENT: &str = "  ";

/// Widget for rendering a combobox
pub struct ComboboxWidget<'a> {
    pub combobox: &'a Combobox,
    colors: &'a ColorScheme,
}

impl<'a> ComboboxWidget<'a> {
    pub fn new(combobox: &'a Combobox, colors: &'a ColorScheme) -> Self {
        Self { combobox, colors }
    }

    /// Rows this widget needs at its current state
    pub fn height(&self) -> u16 {
        self.lines().len() as u16
    }

    /// All rendered lines, input first
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(self.input_spans())];
        if self.combobox.is_open() {
            lines.extend(self.dropdown_lines());
        }
        lines
    }

    fn input_spans(&self) -> Vec<Span<'static>> {
        let combobox = self.combobox;
        let colors = self.colors;
        let text_style = Style::default().fg(colors.input.text.to_color());
        let cursor_style = Style::default()
            .fg(colors.dropdown.selected_fg.to_color())
            .bg(colors.input.cursor.to_color())
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled(
            PROMPT,
            Style::default()
                .fg(colors.input.prompt.to_color())
                .add_modifier(Modifier::BOLD),
        )];

        let input = combobox.input();
        if input.is_empty() {
            let (shown, style) = if combobox.value().is_empty() {
                (
                    combobox.placeholder().to_string(),
                    Style::default().fg(colors.input.placeholder.to_color()),
                )
            } else {
                (combobox.value().to_string(), text_style)
            };
            if combobox.is_focused() {
                spans.push(Span::styled(" ", cursor_style));
            }
            spans.push(Span::styled(shown, style));
            return spans;
        }

        if !combobox.is_focused() {
            spans.push(Span::styled(input.to_string(), text_style));
            return spans;
        }

        let cursor = combobox.cursor();
        if cursor > 0 {
            let before: String = input.chars().take(cursor).collect();
            spans.push(Span::styled(before, text_style));
        }

        if let Some(cursor_ch) = input.chars().nth(cursor) {
            spans.push(Span::styled(cursor_ch.to_string(), cursor_style));
            let after: String = input.chars().skip(cursor + 1).collect();
            if !after.is_empty() {
                spans.push(Span::styled(after, text_style));
            }
        } else if let Some(ghost) = combobox.ghost_text() {
            // Cursor sits on the first ghost char
            let ghost_style = Style::default().fg(colors.input.ghost.to_color());
            let mut ghost_chars = ghost.chars();
            if let Some(first) = ghost_chars.next() {
                spans.push(Span::styled(
                    first.to_string(),
                    ghost_style.bg(colors.input.cursor.to_color()),
                ));
            }
            let rest: String = ghost_chars.collect();
            if !rest.is_empty() {
                spans.push(Span::styled(rest, ghost_style));
            }
        } else {
            spans.push(Span::styled(" ", cursor_style));
        }

        spans
    }

    fn dropdown_lines(&self) -> Vec<Line<'static>> {
        let combobox = self.combobox;
        let colors = self.colors;
        let hint_style = Style::default().fg(colors.dropdown.hint.to_color());
        let label_width = (combobox.width() as usize).saturating_sub(ROW_INDENT.len());

        let filtered = combobox.filtered();
        let range = combobox.visible_range();
        let mut lines = Vec::new();

        if range.start > 0 {
            lines.push(Line::from(Span::styled(
                format!("{}↑ {} more", ROW_INDENT, range.start),
                hint_style,
            )));
        }

        for idx in range.clone() {
            let label = truncate_to_width(filtered[idx], label_width);
            if idx == combobox.highlight_index() {
                lines.push(Line::from(vec![
                    Span::styled(
                        PROMPT,
                        Style::default()
                            .fg(colors.dropdown.selected_bg.to_color())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        label,
                        Style::default()
                            .fg(colors.dropdown.selected_fg.to_color())
                            .bg(colors.dropdown.selected_bg.to_color())
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
            } else {
                lines.push(Line::from(vec![
                    Span::raw(ROW_INDENT),
                    Span::styled(label, Style::default().fg(colors.dropdown.option.to_color())),
                ]));
            }
        }

        if range.end < filtered.len() {
            lines.push(Line::from(Span::styled(
                format!("{}↓ {} more", ROW_INDENT, filtered.len() - range.end),
                hint_style,
            )));
        }

        match combobox.new_value_row() {
            Some(label) => lines.push(Line::from(Span::styled(
                format!("{}{}", ROW_INDENT, truncate_to_width(&label, label_width)),
                Style::default()
                    .fg(colors.dropdown.new_value.to_color())
                    .add_modifier(Modifier::ITALIC),
            ))),
            None if filtered.is_empty() => lines.push(Line::from(Span::styled(
                format!("{}No matches", ROW_INDENT),
                hint_style,
            ))),
            None => {}
        }

        lines
    }
}

impl<'a> Widget for ComboboxWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}
