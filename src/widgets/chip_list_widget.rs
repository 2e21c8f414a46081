// Chip List Widget - renders chips as padded tokens wrapped to the field width

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::chip_list::ChipList;
use super::text::{display_width, truncate_to_width};
use crate::config::ColorScheme;

const CHIP_GAP: &str = " ";

/// Widget for rendering a chip list
pub struct ChipListWidget<'a> {
    pub chips: &'a ChipList,
    colors: &'a ColorScheme,
    width: u16,
}

impl<'a> ChipListWidget<'a> {
    pub fn new(chips: &'a ChipList, colors: &'a ColorScheme, width: u16) -> Self {
        Self {
            chips,
            colors,
            width: width.max(1),
        }
    }

    pub fn height(&self) -> u16 {
        self.lines().len() as u16
    }

    fn chip_style(&self, index: usize) -> Style {
        let chips = &self.colors.chips;
        if self.chips.flash_index() == Some(index) {
            Style::default()
                .fg(chips.flash_fg.to_color())
                .bg(chips.flash_bg.to_color())
                .add_modifier(Modifier::BOLD)
        } else if self.chips.highlighted_index() == Some(index) {
            Style::default()
                .fg(chips.highlight_fg.to_color())
                .bg(chips.highlight_bg.to_color())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(chips.fg.to_color()).bg(chips.bg.to_color())
        }
    }

    /// Chips laid out left to right, wrapping when a chip would overflow
    pub fn lines(&self) -> Vec<Line<'static>> {
        let max_width = self.width as usize;
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut current: Vec<Span<'static>> = Vec::new();
        let mut used = 0;

        for (index, label) in self.chips.chips().iter().enumerate() {
            // " label " with one column of padding on each side
            let label = truncate_to_width(label, max_width.saturating_sub(2));
            let chip = format!(" {} ", label);
            let chip_width = display_width(&chip);

            let gap = if current.is_empty() { 0 } else { CHIP_GAP.len() };
            if !current.is_empty() && used + gap + chip_width > max_width {
                lines.push(Line::from(std::mem::take(&mut current)));
                used = 0;
            } else if gap > 0 {
                current.push(Span::raw(CHIP_GAP));
                used += gap;
            }

            current.push(Span::styled(chip, self.chip_style(index)));
            used += chip_width;
        }

        if !current.is_empty() {
            lines.push(Line::from(current));
        }
        lines
    }
}

impl<'a> Widget for ChipListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::ChipAdd;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_empty_list_has_no_lines() {
        let list = ChipList::default();
        let colors = ColorScheme::default();
        assert_eq!(ChipListWidget::new(&list, &colors, 40).height(), 0);
    }

    #[test]
    fn test_chips_on_one_line() {
        let list = ChipList::new(["backend", "bug"]);
        let colors = ColorScheme::default();
        let lines = ChipListWidget::new(&list, &colors, 40).lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), " backend   bug ");
    }

    #[test]
    fn test_chips_wrap_to_width() {
        let list = ChipList::new(["backend", "frontend", "bug"]);
        let colors = ColorScheme::default();
        let lines = ChipListWidget::new(&list, &colors, 20).lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[0]), " backend   frontend ");
        assert_eq!(line_text(&lines[1]), " bug ");
    }

    #[test]
    fn test_flash_and_highlight_styles() {
        let mut list = ChipList::new(["a", "b"]);
        list.enter_navigation();
        assert!(matches!(list.add_chip("a"), ChipAdd::Duplicate { index: 0, .. }));
        let colors = ColorScheme::default();
        let lines = ChipListWidget::new(&list, &colors, 40).lines();
        let chip_a = &lines[0].spans[0];
        let chip_b = &lines[0].spans[2];
        assert_eq!(chip_a.style.bg, Some(colors.chips.flash_bg.to_color()));
        assert_eq!(chip_b.style.bg, Some(colors.chips.highlight_bg.to_color()));
    }
}
