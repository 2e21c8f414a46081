// Chip Combobox - multi-select field composed of a chip list over a combobox
//
// Owns the full value pool and arbitrates every keystroke between its two
// children. The combobox always offers the pool minus the current chips.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;

use super::chip_list::{ChipAdd, ChipList};
use super::combobox::Combobox;
use super::event::{Reply, SelectFlavor, WidgetEvent};
use super::flash::FlashExpired;
use super::text::eq_ignore_case;

/// Multi-select combobox rendering its selections as chips
#[derive(Debug, Clone)]
pub struct ChipCombobox {
    combobox: Combobox,
    chips: ChipList,
    all_values: Vec<String>,
    focused: bool,
}

impl ChipCombobox {
    /// Create a chip combobox over the full value pool
    pub fn new<I, S>(all_values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut widget = Self {
            combobox: Combobox::new(Vec::<String>::new()),
            chips: ChipList::default(),
            all_values: Vec::new(),
            focused: true,
        };
        widget.set_options(all_values);
        widget
    }

    /// Configure the embedded combobox (width, rows, placeholder, new values)
    pub fn with_combobox(mut self, configure: impl FnOnce(Combobox) -> Combobox) -> Self {
        self.combobox = configure(self.combobox);
        self.sync_candidates();
        self
    }

    pub fn with_chips<I, S>(mut self, chips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_chips(chips);
        self
    }

    pub fn with_flash_duration(mut self, duration: Duration) -> Self {
        self.chips = self.chips.with_flash_duration(duration);
        self
    }

    // ─── Host operations ──────────────────────────────────────────────────────

    /// Replace the value pool. Repeated values are dropped.
    pub fn set_options<I, S>(&mut self, all_values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.all_values.clear();
        for value in all_values {
            let value = value.into();
            if !self.all_values.contains(&value) {
                self.all_values.push(value);
            }
        }
        self.sync_candidates();
    }

    pub fn set_chips<I, S>(&mut self, chips: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chips.set_chips(chips);
        self.sync_candidates();
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.combobox.focus();
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.combobox.blur();
        self.chips.exit_navigation();
    }

    /// Apply a flash expiry delivered by the host
    pub fn clear_flash(&mut self, expired: FlashExpired) -> bool {
        self.chips.clear_flash(expired)
    }

    // ─── Accessors ────────────────────────────────────────────────────────────

    pub fn chips(&self) -> &[String] {
        self.chips.chips()
    }

    pub fn all_values(&self) -> &[String] {
        &self.all_values
    }

    pub fn combobox(&self) -> &Combobox {
        &self.combobox
    }

    pub fn chip_list(&self) -> &ChipList {
        &self.chips
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_open(&self) -> bool {
        self.combobox.is_open()
    }

    pub fn is_navigating(&self) -> bool {
        self.chips.is_navigating()
    }

    pub fn flash_index(&self) -> Option<usize> {
        self.chips.flash_index()
    }

    // ─── Key handling ─────────────────────────────────────────────────────────

    /// Route a key to the chip list or the combobox
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Reply {
        if !self.focused || key.kind == KeyEventKind::Release {
            return Reply::none();
        }

        if key.code == KeyCode::Esc {
            return self.escape();
        }

        if self.chips.is_navigating() {
            return self.route_to_chips(key);
        }

        match key.code {
            KeyCode::Up
                if self.combobox.input().is_empty()
                    && !self.combobox.is_open()
                    && !self.chips.is_empty() =>
            {
                self.chips.enter_navigation();
                Reply::none()
            }
            KeyCode::Tab => self.advance(key),
            _ => {
                let event = self.combobox.handle_key_event(key);
                self.absorb_combobox_event(event)
            }
        }
    }

    /// One stage per press: close dropdown, then clear text or leave
    /// navigation, then yield cancel to the host
    fn escape(&mut self) -> Reply {
        if self.chips.is_navigating() {
            self.chips.exit_navigation();
            return Reply::none();
        }
        if self.combobox.is_open() {
            self.combobox.close();
            return Reply::none();
        }
        if !self.combobox.input().is_empty() {
            self.combobox.clear_input();
            return Reply::none();
        }
        Reply::event(WidgetEvent::Cancel)
    }

    fn route_to_chips(&mut self, key: KeyEvent) -> Reply {
        match self.chips.handle_key_event(key) {
            Some(WidgetEvent::ChipRemoved { label, index }) => {
                self.sync_candidates();
                Reply::event(WidgetEvent::ChipRemoved { label, index })
            }
            Some(WidgetEvent::ResumeTyping(c)) => {
                let event = self.combobox.handle_key_event(KeyEvent::from(KeyCode::Char(c)));
                self.absorb_combobox_event(event)
            }
            Some(WidgetEvent::ResumeAdvance) => Reply::event(WidgetEvent::AdvanceField),
            other => other.into(),
        }
    }

    fn advance(&mut self, key: KeyEvent) -> Reply {
        if self.combobox.is_open() {
            let event = self.combobox.handle_key_event(key);
            let reply = self.absorb_combobox_event(event);
            return match reply.event {
                Some(WidgetEvent::ChipAdded { .. }) => reply,
                _ => Reply {
                    event: Some(WidgetEvent::AdvanceField),
                    flash: reply.flash,
                },
            };
        }

        let typed = self.combobox.input().trim().to_string();
        if typed.is_empty() {
            return Reply::event(WidgetEvent::AdvanceField);
        }

        let reply = match self.stored_spelling(&typed) {
            Some(label) => self.accept(label, false, SelectFlavor::Advance),
            None if self.combobox.allows_new() => self.accept(typed, true, SelectFlavor::Advance),
            None => Reply::none(),
        };
        match reply.event {
            Some(_) => reply,
            None => Reply {
                event: Some(WidgetEvent::AdvanceField),
                flash: reply.flash,
            },
        }
    }

    fn absorb_combobox_event(&mut self, event: Option<WidgetEvent>) -> Reply {
        match event {
            Some(WidgetEvent::ValueSelected {
                value,
                is_newly_created,
                flavor,
            }) => self.accept(value, is_newly_created, flavor),
            other => other.into(),
        }
    }

    /// Turn a committed value into a chip, or flash the existing one
    fn accept(&mut self, label: String, is_new: bool, flavor: SelectFlavor) -> Reply {
        // The combobox never sees chipped values, so re-check the whole pool
        let (label, is_new) = if self.all_values.contains(&label) {
            (label, false)
        } else {
            match self.stored_spelling(&label) {
                Some(stored) => (stored, false),
                None => (label, is_new),
            }
        };
        self.combobox.set_value("");
        match self.chips.add_chip(label.clone()) {
            ChipAdd::Added => {
                if is_new && !self.all_values.contains(&label) {
                    self.all_values.push(label.clone());
                }
                self.sync_candidates();
                tracing::debug!(label = %label, is_new, "chip added");
                Reply::event(WidgetEvent::ChipAdded {
                    label,
                    is_newly_created: is_new,
                    flavor,
                })
            }
            ChipAdd::Duplicate { timer, .. } => Reply::none().with_flash(timer),
            ChipAdd::Ignored => Reply::none(),
        }
    }

    /// First pool value equal to `text` ignoring case
    fn stored_spelling(&self, text: &str) -> Option<String> {
        self.all_values
            .iter()
            .find(|value| eq_ignore_case(value, text))
            .cloned()
    }

    /// Candidates are the value pool minus current chips, by exact match
    fn sync_candidates(&mut self) {
        let candidates: Vec<String> = self
            .all_values
            .iter()
            .filter(|value| !self.chips.contains(value))
            .cloned()
            .collect();
        self.combobox.set_options(candidates);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(widget: &mut ChipCombobox, text: &str) {
        for c in text.chars() {
            widget.handle_key_event(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    fn labels() -> ChipCombobox {
        ChipCombobox::new(["backend", "frontend", "bug"]).with_combobox(|c| c.with_allow_new(true))
    }

    #[test]
    fn test_candidates_exclude_initial_chips() {
        let widget = labels().with_chips(["bug"]);
        assert_eq!(widget.combobox().options(), &["backend", "frontend"]);
    }

    #[test]
    fn test_up_enters_navigation_only_when_idle() {
        let mut widget = labels().with_chips(["bug"]);
        type_text(&mut widget, "b");
        widget.handle_key_event(KeyEvent::from(KeyCode::Up));
        assert!(!widget.is_navigating());

        let mut widget = labels();
        widget.handle_key_event(KeyEvent::from(KeyCode::Up));
        assert!(!widget.is_navigating(), "no chips: Up goes to the combobox");
        assert!(widget.is_open());

        let mut widget = labels().with_chips(["bug"]);
        widget.handle_key_event(KeyEvent::from(KeyCode::Up));
        assert!(widget.is_navigating());
        assert!(!widget.is_open());
    }

    #[test]
    fn test_resume_typing_forwards_character() {
        let mut widget = labels().with_chips(["bug"]);
        widget.handle_key_event(KeyEvent::from(KeyCode::Up));
        let reply = widget.handle_key_event(KeyEvent::from(KeyCode::Char('f')));
        assert!(reply.event.is_none());
        assert!(!widget.is_navigating());
        assert_eq!(widget.combobox().input(), "f");
        assert!(widget.is_open());
    }

    #[test]
    fn test_resume_advance_becomes_advance_field() {
        let mut widget = labels().with_chips(["bug"]);
        widget.handle_key_event(KeyEvent::from(KeyCode::Up));
        let reply = widget.handle_key_event(KeyEvent::from(KeyCode::Tab));
        assert_eq!(reply.event, Some(WidgetEvent::AdvanceField));
    }

    #[test]
    fn test_new_chip_joins_value_pool() {
        let mut widget = labels();
        type_text(&mut widget, "perf");
        let reply = widget.handle_key_event(KeyEvent::from(KeyCode::Enter));
        assert_eq!(
            reply.event,
            Some(WidgetEvent::ChipAdded {
                label: "perf".to_string(),
                is_newly_created: true,
                flavor: SelectFlavor::Confirm,
            })
        );
        assert!(widget.all_values().contains(&"perf".to_string()));
        assert!(!widget.combobox().options().contains(&"perf".to_string()));

        widget.handle_key_event(KeyEvent::from(KeyCode::Up));
        widget.handle_key_event(KeyEvent::from(KeyCode::Backspace));
        assert!(widget.combobox().options().contains(&"perf".to_string()));
    }

    #[test]
    fn test_blur_leaves_navigation() {
        let mut widget = labels().with_chips(["bug"]);
        widget.handle_key_event(KeyEvent::from(KeyCode::Up));
        widget.blur();
        assert!(!widget.is_navigating());
        let reply = widget.handle_key_event(KeyEvent::from(KeyCode::Char('x')));
        assert!(reply.is_empty());
    }
}
