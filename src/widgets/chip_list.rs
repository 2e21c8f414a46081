// Chip List - ordered committed tokens with keyboard navigation and removal
//
// Navigation mode is entered by the owning widget; while active, Left/Right
// move between chips and Delete/Backspace removes the highlighted one.
// Adding a label that is already present flashes the existing chip instead.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use super::event::WidgetEvent;
use super::flash::{Flash, FlashExpired, FlashTimer};
use crate::config::constants::DEFAULT_FLASH_DURATION_MS;

/// Result of `ChipList::add_chip`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChipAdd {
    /// Label appended at the end
    Added,
    /// Label already present at `index`; that chip flashes until the timer fires
    Duplicate { index: usize, timer: FlashTimer },
    /// Blank label, nothing changed
    Ignored,
}

/// Ordered list of chips
#[derive(Debug, Clone)]
pub struct ChipList {
    chips: Vec<String>,
    navigating: bool,
    highlighted: usize,
    flash: Option<Flash>,
    next_generation: u64,
    flash_duration: Duration,
}

impl Default for ChipList {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl ChipList {
    pub fn new<I, S>(chips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self {
            chips: Vec::new(),
            navigating: false,
            highlighted: 0,
            flash: None,
            next_generation: 0,
            flash_duration: Duration::from_millis(DEFAULT_FLASH_DURATION_MS),
        };
        list.set_chips(chips);
        list
    }

    /// How long a duplicate flash stays visible
    pub fn with_flash_duration(mut self, duration: Duration) -> Self {
        self.flash_duration = duration;
        self
    }

    // ─── Accessors ────────────────────────────────────────────────────────────

    pub fn chips(&self) -> &[String] {
        &self.chips
    }

    pub fn len(&self) -> usize {
        self.chips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.chips.iter().any(|chip| chip == label)
    }

    pub fn is_navigating(&self) -> bool {
        self.navigating
    }

    /// Highlighted chip while navigating
    pub fn highlighted_index(&self) -> Option<usize> {
        self.navigating.then_some(self.highlighted)
    }

    pub fn flash_index(&self) -> Option<usize> {
        self.flash.map(|flash| flash.index)
    }

    pub fn flash(&self) -> Option<Flash> {
        self.flash
    }

    // ─── Mutations ────────────────────────────────────────────────────────────

    /// Replace all chips. Leaves navigation and clears any flash.
    pub fn set_chips<I, S>(&mut self, chips: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chips.clear();
        for chip in chips {
            let chip = chip.into();
            if !chip.trim().is_empty() && !self.contains(&chip) {
                self.chips.push(chip);
            }
        }
        self.navigating = false;
        self.highlighted = 0;
        self.flash = None;
    }

    /// Append a chip, or flash the existing one when the label is already present
    pub fn add_chip(&mut self, label: impl Into<String>) -> ChipAdd {
        let label = label.into();
        if label.trim().is_empty() {
            return ChipAdd::Ignored;
        }
        if let Some(index) = self.chips.iter().position(|chip| *chip == label) {
            let timer = self.start_flash(index);
            tracing::debug!(label = %label, index, "duplicate chip, flashing existing");
            return ChipAdd::Duplicate { index, timer };
        }
        self.chips.push(label);
        self.flash = None;
        ChipAdd::Added
    }

    /// Remove a chip by label; returns its former index
    pub fn remove_chip(&mut self, label: &str) -> Option<usize> {
        let index = self.chips.iter().position(|chip| chip == label)?;
        self.remove_at(index);
        Some(index)
    }

    /// Remove the chip at `index`; returns the removed label
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index >= self.chips.len() {
            return None;
        }
        let label = self.chips.remove(index);
        self.flash = None;
        if self.chips.is_empty() {
            self.navigating = false;
            self.highlighted = 0;
        } else {
            self.highlighted = self.highlighted.min(self.chips.len() - 1);
        }
        Some(label)
    }

    /// Enter navigation mode on the last chip; no-op when there are no chips
    pub fn enter_navigation(&mut self) {
        if self.chips.is_empty() {
            return;
        }
        self.navigating = true;
        self.highlighted = self.chips.len() - 1;
    }

    pub fn exit_navigation(&mut self) {
        self.navigating = false;
    }

    /// Apply a flash expiry; stale expiries are ignored
    pub fn clear_flash(&mut self, expired: FlashExpired) -> bool {
        if self.flash == Some(expired.target) {
            self.flash = None;
            true
        } else {
            tracing::trace!(target_index = expired.target.index, "stale flash expiry ignored");
            false
        }
    }

    fn start_flash(&mut self, index: usize) -> FlashTimer {
        self.next_generation += 1;
        let flash = Flash {
            index,
            generation: self.next_generation,
        };
        self.flash = Some(flash);
        FlashTimer::new(flash, self.flash_duration)
    }

    // ─── Key handling ─────────────────────────────────────────────────────────

    /// Handle a key while navigating. Keys are ignored outside navigation mode.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<WidgetEvent> {
        if !self.navigating || key.kind == KeyEventKind::Release {
            return None;
        }

        match key.code {
            KeyCode::Left => {
                self.highlighted = self.highlighted.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.highlighted = (self.highlighted + 1).min(self.chips.len().saturating_sub(1));
                None
            }
            KeyCode::Delete | KeyCode::Backspace => {
                let index = self.highlighted;
                let label = self.remove_at(index)?;
                tracing::debug!(label = %label, index, "chip removed");
                Some(WidgetEvent::ChipRemoved { label, index })
            }
            KeyCode::Down => {
                self.navigating = false;
                None
            }
            KeyCode::Tab => {
                self.navigating = false;
                Some(WidgetEvent::ResumeAdvance)
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.navigating = false;
                Some(WidgetEvent::ResumeTyping(c))
            }
            _ => None,
        }
    }
}
