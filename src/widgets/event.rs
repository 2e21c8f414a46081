// Widget events - the closed set of messages a widget hands back to its host
//
// Each keystroke produces at most one event. The composite widget consumes
// its children's events and re-emits its own, so a host only ever matches on
// this one enum.

use super::flash::FlashTimer;

/// Which key produced a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectFlavor {
    /// Enter: commit and stay on the field
    Confirm,
    /// Tab: commit and move focus to the next field
    Advance,
}

impl SelectFlavor {
    pub fn advances(self) -> bool {
        matches!(self, SelectFlavor::Advance)
    }
}

/// Event emitted to the host after handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// Combo-box committed a value
    ValueSelected {
        value: String,
        is_newly_created: bool,
        flavor: SelectFlavor,
    },
    /// Chip combo-box added a chip
    ChipAdded {
        label: String,
        is_newly_created: bool,
        flavor: SelectFlavor,
    },
    /// A chip was removed from the list
    ChipRemoved { label: String, index: usize },
    /// Host should move focus to the next field
    AdvanceField,
    /// Chip navigation ended by typing; the character belongs to the text input.
    ///
    /// Only `ChipList` emits this. `ChipCombobox` consumes it and feeds the
    /// character to its combobox, so hosts of the composite never see it.
    ResumeTyping(char),
    /// Chip navigation ended by the advance key.
    ///
    /// Only `ChipList` emits this. `ChipCombobox` re-emits it as `AdvanceField`.
    ResumeAdvance,
    /// Widget yields focus; the host decides whether this cancels the form
    Cancel,
}

impl WidgetEvent {
    /// Whether the host should move focus after this event
    pub fn advances_focus(&self) -> bool {
        match self {
            WidgetEvent::ValueSelected { flavor, .. } | WidgetEvent::ChipAdded { flavor, .. } => {
                flavor.advances()
            }
            WidgetEvent::AdvanceField | WidgetEvent::ResumeAdvance => true,
            _ => false,
        }
    }
}

/// Outcome of a keystroke on a widget that may schedule a flash expiry
#[derive(Debug, Default)]
pub struct Reply {
    pub event: Option<WidgetEvent>,
    pub flash: Option<FlashTimer>,
}

impl Reply {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn event(event: WidgetEvent) -> Self {
        Self {
            event: Some(event),
            flash: None,
        }
    }

    pub fn with_flash(mut self, timer: FlashTimer) -> Self {
        self.flash = Some(timer);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.event.is_none() && self.flash.is_none()
    }
}

impl From<Option<WidgetEvent>> for Reply {
    fn from(event: Option<WidgetEvent>) -> Self {
        Self { event, flash: None }
    }
}
