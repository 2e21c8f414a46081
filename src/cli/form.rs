// Form - host for a sequence of autocomplete fields
//
// Forwards each key to the focused field, interprets the emitted event
// (focus moves, notices, cancel) and collects flash timers for the event
// loop to schedule.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::WidgetSettings;
use crate::widgets::{ChipCombobox, Combobox, FlashExpired, FlashTimer, Reply, WidgetEvent};

/// Widget behind a form field
#[derive(Debug, Clone)]
pub enum FieldKind {
    Single(Combobox),
    Multi(ChipCombobox),
}

/// Labelled form field
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub kind: FieldKind,
}

impl FormField {
    pub fn single(label: impl Into<String>, combobox: Combobox) -> Self {
        Self {
            label: label.into(),
            kind: FieldKind::Single(combobox),
        }
    }

    pub fn multi(label: impl Into<String>, widget: ChipCombobox) -> Self {
        Self {
            label: label.into(),
            kind: FieldKind::Multi(widget),
        }
    }

    fn focus(&mut self) {
        match &mut self.kind {
            FieldKind::Single(c) => c.focus(),
            FieldKind::Multi(m) => m.focus(),
        }
    }

    fn blur(&mut self) {
        match &mut self.kind {
            FieldKind::Single(c) => c.blur(),
            FieldKind::Multi(m) => m.blur(),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Reply {
        match &mut self.kind {
            FieldKind::Single(c) => c.handle_key_event(key).into(),
            FieldKind::Multi(m) => m.handle_key_event(key),
        }
    }

    pub fn value(&self) -> FieldValue {
        match &self.kind {
            FieldKind::Single(c) => FieldValue::Single(c.value().to_string()),
            FieldKind::Multi(m) => FieldValue::Multi(m.chips().to_vec()),
        }
    }
}

/// Submitted value of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Multi(Vec<String>),
}

/// Submitted values keyed by field label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormValues(pub BTreeMap<String, FieldValue>);

/// What the host should do after a key
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Continue,
    Submitted(FormValues),
    Cancelled,
}

/// Flash timer tagged with the field it belongs to
#[derive(Debug, Clone, Copy)]
pub struct FieldFlash {
    pub field: usize,
    pub timer: FlashTimer,
}

/// Form of autocomplete fields with one focused at a time
#[derive(Debug, Clone)]
pub struct Form {
    title: String,
    fields: Vec<FormField>,
    focus: usize,
    notice: Option<String>,
}

impl Form {
    pub fn new(title: impl Into<String>, mut fields: Vec<FormField>) -> Self {
        for (i, field) in fields.iter_mut().enumerate() {
            if i == 0 {
                field.focus();
            } else {
                field.blur();
            }
        }
        Self {
            title: title.into(),
            fields,
            focus: 0,
            notice: None,
        }
    }

    /// Issue form used by the demo binary: a type picker and a label picker
    pub fn issue_form(
        settings: &WidgetSettings,
        types: &[String],
        labels: &[String],
        chips: &[String],
    ) -> Self {
        Self::new(
            "New issue",
            vec![
                FormField::single("Type", settings.combobox(types)),
                FormField::multi("Labels", settings.chip_combobox(labels, chips)),
            ],
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn values(&self) -> FormValues {
        FormValues(
            self.fields
                .iter()
                .map(|field| (field.label.clone(), field.value()))
                .collect(),
        )
    }

    /// Move focus to the next field, wrapping around
    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_previous(&mut self) {
        self.move_focus(self.fields.len().saturating_sub(1));
    }

    fn move_focus(&mut self, step: usize) {
        if self.fields.is_empty() {
            return;
        }
        self.fields[self.focus].blur();
        self.focus = (self.focus + step) % self.fields.len();
        self.fields[self.focus].focus();
    }

    /// Deliver a flash expiry to the field that scheduled it
    pub fn clear_flash(&mut self, field: usize, expired: FlashExpired) {
        if let Some(FormField {
            kind: FieldKind::Multi(widget),
            ..
        }) = self.fields.get_mut(field)
        {
            widget.clear_flash(expired);
        }
    }

    /// Handle a key event
    pub fn handle_key_event(&mut self, key: KeyEvent) -> (FormOutcome, Option<FieldFlash>) {
        if key.kind == KeyEventKind::Release || self.fields.is_empty() {
            return (FormOutcome::Continue, None);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => return (FormOutcome::Submitted(self.values()), None),
                KeyCode::Char('c') => return (FormOutcome::Cancelled, None),
                _ => {}
            }
        }
        if key.code == KeyCode::BackTab {
            self.focus_previous();
            return (FormOutcome::Continue, None);
        }

        let field = self.focus;
        let reply = self.fields[field].handle_key_event(key);
        let flash = reply.flash.map(|timer| FieldFlash { field, timer });

        let outcome = match reply.event {
            Some(event) => self.apply_event(event),
            None => FormOutcome::Continue,
        };
        (outcome, flash)
    }

    fn apply_event(&mut self, event: WidgetEvent) -> FormOutcome {
        let advance = event.advances_focus();
        match event {
            WidgetEvent::Cancel => return FormOutcome::Cancelled,
            WidgetEvent::ValueSelected {
                value,
                is_newly_created,
                ..
            } => {
                self.notice = is_newly_created.then(|| format!("Created new value \"{}\"", value));
            }
            WidgetEvent::ChipAdded {
                label,
                is_newly_created,
                ..
            } => {
                self.notice = is_newly_created.then(|| format!("Created new label \"{}\"", label));
            }
            WidgetEvent::ChipRemoved { label, .. } => {
                self.notice = Some(format!("Removed \"{}\"", label));
            }
            WidgetEvent::AdvanceField => {}
            // Consumed inside ChipCombobox; a form holds no bare ChipList
            WidgetEvent::ResumeAdvance | WidgetEvent::ResumeTyping(_) => {}
        }
        if advance {
            self.focus_next();
        }
        FormOutcome::Continue
    }
}
