// Demo host - a two-field form exercising the autocomplete widgets

mod app;
mod async_input;
mod form;
mod form_widget;

pub use app::run_form;
pub use async_input::{spawn_input_task, AppEvent};
pub use form::{FieldFlash, FieldKind, FieldValue, Form, FormField, FormOutcome, FormValues};
pub use form_widget::FormWidget;
