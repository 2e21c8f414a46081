// Combobox - single-value input with type-ahead filtering and ghost completion
//
// Owns the typed buffer, the candidate list and the dropdown window over the
// filtered candidates. Rendering lives in combobox_widget.rs.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::ops::Range;

use super::event::{SelectFlavor, WidgetEvent};
use super::text::{
    char_to_byte_offset, completion_suffix, contains_ignore_case, eq_ignore_case, fill_template,
};
use crate::config::constants::{
    DEFAULT_MAX_VISIBLE, DEFAULT_NEW_VALUE_LABEL, DEFAULT_PLACEHOLDER, DEFAULT_WIDTH,
};

/// Single-value autocomplete input
#[derive(Debug, Clone)]
pub struct Combobox {
    /// Candidate set, unique, in display order
    options: Vec<String>,
    /// Indices into `options` that match the typed text
    filtered: Vec<usize>,
    /// Literal typed text
    input: String,
    /// Char-index cursor in `input`
    cursor: usize,
    /// Last committed value
    value: String,
    /// Index into `filtered`
    highlight: usize,
    /// First visible row of the dropdown
    scroll: usize,
    open: bool,
    focused: bool,
    ghost_rejected: bool,

    width: u16,
    max_visible: usize,
    placeholder: String,
    allow_new: bool,
    new_value_label: String,
}

impl Combobox {
    /// Create a combobox over the given candidates
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut combobox = Self {
            options: Vec::new(),
            filtered: Vec::new(),
            input: String::new(),
            cursor: 0,
            value: String::new(),
            highlight: 0,
            scroll: 0,
            open: false,
            focused: true,
            ghost_rejected: false,
            width: DEFAULT_WIDTH,
            max_visible: DEFAULT_MAX_VISIBLE,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            allow_new: false,
            new_value_label: DEFAULT_NEW_VALUE_LABEL.to_string(),
        };
        combobox.set_options(options);
        combobox
    }

    /// Set the display width in columns
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width.max(1);
        self
    }

    /// Set the number of dropdown rows shown at once
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible.max(1);
        self.ensure_visible();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Allow committing typed text that matches no candidate
    pub fn with_allow_new(mut self, allow_new: bool) -> Self {
        self.allow_new = allow_new;
        self
    }

    /// Label template for the new-value row; `%s` is replaced by the typed text
    pub fn with_new_value_label(mut self, template: impl Into<String>) -> Self {
        self.new_value_label = template.into();
        self
    }

    // ─── Host operations ──────────────────────────────────────────────────────

    /// Replace the candidate set. Repeated values are dropped.
    pub fn set_options<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for option in options {
            let option = option.into();
            if !unique.contains(&option) {
                unique.push(option);
            }
        }
        let previous = self.highlighted().map(str::to_string);
        self.options = unique;
        self.refilter();
        self.highlight = previous
            .and_then(|prev| self.position_in_filtered(&prev))
            .unwrap_or(0);
        self.clamp_highlight();
        self.ensure_visible();
    }

    /// Programmatically set the committed value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.reset_input();
        self.open = false;
    }

    /// Discard typed text and close the dropdown
    pub fn clear_input(&mut self) {
        self.reset_input();
        self.open = false;
    }

    /// Close the dropdown, keeping the typed text
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.open = false;
    }

    // ─── Accessors ────────────────────────────────────────────────────────────

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_ghost_rejected(&self) -> bool {
        self.ghost_rejected
    }

    /// Candidates matching the typed text, in candidate order
    pub fn filtered(&self) -> Vec<&str> {
        self.filtered
            .iter()
            .map(|&i| self.options[i].as_str())
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn highlight_index(&self) -> usize {
        self.highlight
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn allows_new(&self) -> bool {
        self.allow_new
    }

    /// Highlighted candidate, if any
    pub fn highlighted(&self) -> Option<&str> {
        self.filtered
            .get(self.highlight)
            .map(|&i| self.options[i].as_str())
    }

    /// Range of `filtered` currently inside the scroll window
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.scroll + self.max_visible).min(self.filtered.len());
        self.scroll.min(end)..end
    }

    /// Remaining suffix of the highlighted candidate shown after the typed text
    pub fn ghost_text(&self) -> Option<&str> {
        if !self.open || self.ghost_rejected || self.cursor < self.input.chars().count() {
            return None;
        }
        completion_suffix(self.highlighted()?, &self.input)
    }

    /// Label for the "create new value" row, when typed text matches nothing exactly
    pub fn new_value_row(&self) -> Option<String> {
        let typed = self.input.trim();
        if !self.allow_new || typed.is_empty() || self.exact_match(typed).is_some() {
            return None;
        }
        Some(fill_template(&self.new_value_label, typed))
    }

    // ─── Key handling ─────────────────────────────────────────────────────────

    /// Handle a key event and return an event for the host, if any
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<WidgetEvent> {
        if !self.focused || key.kind == KeyEventKind::Release {
            return None;
        }

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_char(c);
                None
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let byte_pos = char_to_byte_offset(&self.input, self.cursor);
                    self.input.remove(byte_pos);
                    self.text_changed();
                }
                None
            }
            KeyCode::Delete => {
                if self.cursor < self.input.chars().count() {
                    let byte_pos = char_to_byte_offset(&self.input, self.cursor);
                    self.input.remove(byte_pos);
                    self.text_changed();
                } else {
                    self.reject_ghost();
                }
                None
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.input.chars().count());
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = self.input.chars().count();
                None
            }
            KeyCode::Up => {
                self.navigate(-1);
                None
            }
            KeyCode::Down => {
                self.navigate(1);
                None
            }
            KeyCode::PageUp => {
                self.navigate(-(self.max_visible as isize));
                None
            }
            KeyCode::PageDown => {
                self.navigate(self.max_visible as isize);
                None
            }
            KeyCode::Enter => self.commit(SelectFlavor::Confirm),
            KeyCode::Tab => self
                .commit(SelectFlavor::Advance)
                .or(Some(WidgetEvent::AdvanceField)),
            KeyCode::Esc => self.escape(),
            _ => None,
        }
    }

    /// Mark the ghost suggestion as rejected until the typed text changes
    pub fn reject_ghost(&mut self) {
        if !self.ghost_rejected {
            tracing::trace!(input = %self.input, "ghost completion rejected");
        }
        self.ghost_rejected = true;
    }

    /// Run the commit protocol as if the given key flavor was pressed
    pub fn commit(&mut self, flavor: SelectFlavor) -> Option<WidgetEvent> {
        if self.open && !self.ghost_rejected {
            if let Some(value) = self.highlighted().map(str::to_string) {
                return Some(self.accept(value, false, flavor));
            }
        }

        let typed = self.input.trim().to_string();
        if typed.is_empty() {
            return None;
        }
        if self.allow_new {
            let is_new = self.exact_match(&typed).is_none();
            return Some(self.accept(typed, is_new, flavor));
        }
        // Without new-value creation only an exact (case-insensitive) match commits
        let canonical = self.exact_match(&typed)?.to_string();
        Some(self.accept(canonical, false, flavor))
    }

    fn accept(&mut self, value: String, is_new: bool, flavor: SelectFlavor) -> WidgetEvent {
        tracing::debug!(value = %value, is_new, ?flavor, "combobox value committed");
        self.value = value.clone();
        self.reset_input();
        self.open = false;
        WidgetEvent::ValueSelected {
            value,
            is_newly_created: is_new,
            flavor,
        }
    }

    fn escape(&mut self) -> Option<WidgetEvent> {
        if self.open {
            self.close();
            return None;
        }
        self.input = self.value.clone();
        self.cursor = self.input.chars().count();
        self.ghost_rejected = false;
        self.refilter();
        self.highlight = 0;
        self.scroll = 0;
        Some(WidgetEvent::Cancel)
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_offset(&self.input, self.cursor);
        self.input.insert(byte_pos, c);
        self.cursor += 1;
        self.text_changed();
    }

    fn text_changed(&mut self) {
        self.ghost_rejected = false;
        self.refilter();
        self.highlight = 0;
        self.scroll = 0;
        self.open = true;
    }

    fn navigate(&mut self, delta: isize) {
        if !self.open {
            self.open_for_browsing();
            return;
        }
        if self.filtered.is_empty() {
            return;
        }
        let last = self.filtered.len() - 1;
        self.highlight = self.highlight.saturating_add_signed(delta).min(last);
        self.ensure_visible();
    }

    /// Open via a directional key, landing on the committed value when present
    fn open_for_browsing(&mut self) {
        self.refilter();
        self.open = true;
        self.scroll = 0;
        self.highlight = self.position_in_filtered(&self.value).unwrap_or(0);
        self.ensure_visible();
    }

    fn reset_input(&mut self) {
        self.input.clear();
        self.cursor = 0;
        self.ghost_rejected = false;
        self.refilter();
        self.highlight = 0;
        self.scroll = 0;
    }

    fn refilter(&mut self) {
        self.filtered = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| contains_ignore_case(option, &self.input))
            .map(|(i, _)| i)
            .collect();
    }

    fn clamp_highlight(&mut self) {
        self.highlight = self.highlight.min(self.filtered.len().saturating_sub(1));
    }

    /// Minimal scroll adjustment that keeps the highlight inside the window
    fn ensure_visible(&mut self) {
        if self.highlight < self.scroll {
            self.scroll = self.highlight;
        } else if self.highlight >= self.scroll + self.max_visible {
            self.scroll = self.highlight + 1 - self.max_visible;
        }
        let max_scroll = self.filtered.len().saturating_sub(self.max_visible);
        self.scroll = self.scroll.min(max_scroll);
    }

    fn position_in_filtered(&self, value: &str) -> Option<usize> {
        if value.is_empty() {
            return None;
        }
        self.filtered.iter().position(|&i| self.options[i] == value)
    }

    fn exact_match(&self, typed: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| eq_ignore_case(option, typed))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(combobox: &mut Combobox, text: &str) {
        for c in text.chars() {
            combobox.handle_key_event(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    fn labels() -> Combobox {
        Combobox::new(["requires-review", "requires-testing", "bug"]).with_allow_new(true)
    }

    #[test]
    fn test_new_starts_closed_with_all_candidates() {
        let combobox = labels();
        assert!(!combobox.is_open());
        assert_eq!(combobox.filtered_len(), 3);
        assert_eq!(combobox.value(), "");
    }

    #[test]
    fn test_set_options_drops_repeats() {
        let combobox = Combobox::new(["a", "b", "a", "c"]);
        assert_eq!(combobox.options(), &["a", "b", "c"]);
    }

    #[test]
    fn test_typing_opens_and_filters() {
        let mut combobox = labels();
        type_text(&mut combobox, "TEST");
        assert!(combobox.is_open());
        assert_eq!(combobox.filtered(), vec!["requires-testing"]);
        assert_eq!(combobox.highlight_index(), 0);
    }

    #[test]
    fn test_cursor_insert_in_middle() {
        let mut combobox = labels();
        type_text(&mut combobox, "bg");
        combobox.handle_key_event(KeyEvent::from(KeyCode::Left));
        type_text(&mut combobox, "u");
        assert_eq!(combobox.input(), "bug");
        assert_eq!(combobox.cursor(), 2);
        // Cursor not at end: no ghost
        assert_eq!(combobox.ghost_text(), None);
    }

    #[test]
    fn test_delete_mid_text_is_a_text_change() {
        let mut combobox = labels();
        type_text(&mut combobox, "reqx");
        combobox.handle_key_event(KeyEvent::from(KeyCode::Left));
        combobox.handle_key_event(KeyEvent::from(KeyCode::Delete));
        assert_eq!(combobox.input(), "req");
        assert!(!combobox.is_ghost_rejected());
    }

    #[test]
    fn test_backspace_resets_rejection() {
        let mut combobox = labels();
        type_text(&mut combobox, "req");
        combobox.handle_key_event(KeyEvent::from(KeyCode::Delete));
        assert!(combobox.is_ghost_rejected());
        combobox.handle_key_event(KeyEvent::from(KeyCode::Backspace));
        assert!(!combobox.is_ghost_rejected());
        assert_eq!(combobox.input(), "re");
    }

    #[test]
    fn test_ctrl_chars_are_not_inserted() {
        let mut combobox = labels();
        combobox.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(combobox.input(), "");
        assert!(!combobox.is_open());
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut combobox = labels();
        combobox.blur();
        type_text(&mut combobox, "bug");
        assert_eq!(combobox.input(), "");
        combobox.focus();
        type_text(&mut combobox, "bug");
        assert_eq!(combobox.input(), "bug");
    }

    #[test]
    fn test_navigation_clamps_without_wrap() {
        let mut combobox = labels();
        combobox.handle_key_event(KeyEvent::from(KeyCode::Down)); // opens
        combobox.handle_key_event(KeyEvent::from(KeyCode::Up));
        assert_eq!(combobox.highlight_index(), 0);
        for _ in 0..5 {
            combobox.handle_key_event(KeyEvent::from(KeyCode::Down));
        }
        assert_eq!(combobox.highlight_index(), 2);
    }

    #[test]
    fn test_page_down_moves_by_window() {
        let mut combobox = Combobox::new((0..10).map(|i| format!("opt-{}", i))).with_max_visible(4);
        combobox.handle_key_event(KeyEvent::from(KeyCode::Down));
        combobox.handle_key_event(KeyEvent::from(KeyCode::PageDown));
        assert_eq!(combobox.highlight_index(), 4);
        assert_eq!(combobox.scroll_offset(), 1);
        combobox.handle_key_event(KeyEvent::from(KeyCode::PageDown));
        combobox.handle_key_event(KeyEvent::from(KeyCode::PageDown));
        assert_eq!(combobox.highlight_index(), 9);
        assert_eq!(combobox.scroll_offset(), 6);
        combobox.handle_key_event(KeyEvent::from(KeyCode::PageUp));
        assert_eq!(combobox.highlight_index(), 5);
        assert_eq!(combobox.scroll_offset(), 5);
    }

    #[test]
    fn test_browse_open_lands_on_committed_value() {
        let mut combobox = Combobox::new((0..8).map(|i| format!("opt-{}", i))).with_max_visible(3);
        combobox.set_value("opt-6");
        combobox.handle_key_event(KeyEvent::from(KeyCode::Down));
        assert!(combobox.is_open());
        assert_eq!(combobox.highlight_index(), 6);
        assert_eq!(combobox.scroll_offset(), 4);
    }

    #[test]
    fn test_browse_open_unknown_value_starts_at_top() {
        let mut combobox = labels();
        combobox.set_value("not-an-option");
        combobox.handle_key_event(KeyEvent::from(KeyCode::Up));
        assert!(combobox.is_open());
        assert_eq!(combobox.highlight_index(), 0);
        assert_eq!(combobox.scroll_offset(), 0);
    }

    #[test]
    fn test_confirm_without_allow_new_commits_exact_match_only() {
        let mut combobox = Combobox::new(["bug", "feature"]);
        type_text(&mut combobox, "xyz");
        assert_eq!(combobox.handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
        assert_eq!(combobox.value(), "");

        combobox.clear_input();
        type_text(&mut combobox, "BUG");
        combobox.handle_key_event(KeyEvent::from(KeyCode::Esc)); // close dropdown
        let event = combobox.handle_key_event(KeyEvent::from(KeyCode::Enter));
        assert_eq!(
            event,
            Some(WidgetEvent::ValueSelected {
                value: "bug".to_string(),
                is_newly_created: false,
                flavor: SelectFlavor::Confirm,
            })
        );
    }

    #[test]
    fn test_tab_with_nothing_to_commit_advances() {
        let mut combobox = labels();
        let event = combobox.handle_key_event(KeyEvent::from(KeyCode::Tab));
        assert_eq!(event, Some(WidgetEvent::AdvanceField));
    }

    #[test]
    fn test_new_value_row() {
        let mut combobox = labels().with_new_value_label("Create \"%s\"");
        type_text(&mut combobox, "req");
        assert_eq!(combobox.new_value_row(), Some("Create \"req\"".to_string()));

        combobox.clear_input();
        type_text(&mut combobox, "Bug");
        assert_eq!(combobox.new_value_row(), None);
    }

    #[test]
    fn test_set_options_keeps_highlighted_value() {
        let mut combobox = labels();
        combobox.handle_key_event(KeyEvent::from(KeyCode::Down));
        combobox.handle_key_event(KeyEvent::from(KeyCode::Down));
        assert_eq!(combobox.highlighted(), Some("requires-testing"));
        combobox.set_options(["bug", "requires-testing"]);
        assert_eq!(combobox.highlighted(), Some("requires-testing"));
        assert_eq!(combobox.highlight_index(), 1);

        combobox.set_options(["only"]);
        assert_eq!(combobox.highlight_index(), 0);
        combobox.set_options(Vec::<String>::new());
        assert_eq!(combobox.highlighted(), None);
        assert_eq!(combobox.scroll_offset(), 0);
    }

    #[test]
    fn test_blur_closes_dropdown() {
        let mut combobox = labels();
        type_text(&mut combobox, "re");
        combobox.blur();
        assert!(!combobox.is_open());
        assert_eq!(combobox.input(), "re");
    }
}
