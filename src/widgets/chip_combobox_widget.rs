// Chip Combobox Widget - chips above, combobox input and dropdown below

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};

use super::chip_combobox::ChipCombobox;
use super::chip_list_widget::ChipListWidget;
use super::combobox_widget::ComboboxWidget;
use crate::config::ColorScheme;

/// Widget for rendering a chip combobox
pub struct ChipComboboxWidget<'a> {
    pub widget: &'a ChipCombobox,
    colors: &'a ColorScheme,
}

impl<'a> ChipComboboxWidget<'a> {
    pub fn new(widget: &'a ChipCombobox, colors: &'a ColorScheme) -> Self {
        Self { widget, colors }
    }

    pub fn height(&self) -> u16 {
        self.lines().len() as u16
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let width = self.widget.combobox().width();
        let mut lines = ChipListWidget::new(self.widget.chip_list(), self.colors, width).lines();
        lines.extend(ComboboxWidget::new(self.widget.combobox(), self.colors).lines());
        lines
    }
}

impl<'a> Widget for ChipComboboxWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_chips_render_above_input() {
        let widget = ChipCombobox::new(["backend", "bug"]).with_chips(["bug"]);
        let colors = ColorScheme::default();
        let lines = ChipComboboxWidget::new(&widget, &colors).lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[0]), " bug ");
        assert!(line_text(&lines[1]).starts_with("❯ "));
    }

    #[test]
    fn test_dropdown_lists_only_unchipped_values() {
        let mut widget = ChipCombobox::new(["backend", "bug", "frontend"]).with_chips(["bug"]);
        widget.handle_key_event(KeyEvent::from(KeyCode::Down));
        let colors = ColorScheme::default();
        let texts: Vec<String> = ChipComboboxWidget::new(&widget, &colors)
            .lines()
            .iter()
            .map(line_text)
            .collect();
        assert_eq!(texts.len(), 4);
        assert_eq!(texts[2], "❯ backend");
        assert_eq!(texts[3], "  frontend");
    }
}
